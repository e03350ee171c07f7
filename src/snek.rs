use std::collections::VecDeque;

use crate::geometry::{Pos, PosDelta, Size};

/// Segments ordered tail first, head last.
#[derive(Clone, Debug, PartialEq)]
pub struct Snek {
    segments: VecDeque<Pos>,
}

impl Default for Snek {
    fn default() -> Self {
        Snek::new([Pos::new(0, 0), Pos::new(0, 1)])
    }
}

impl Snek {
    /// Panics on an empty segment list; a snek always has a head.
    pub fn new(segments: impl IntoIterator<Item = Pos>) -> Self {
        let segments: VecDeque<Pos> = segments.into_iter().collect();
        assert!(!segments.is_empty(), "Snek needs at least one segment");
        Snek { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Only ever true halfway through a move.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn head(&self) -> Pos {
        self.segments[self.segments.len() - 1]
    }

    /// The segment right behind the head, if there is one.
    pub fn neck(&self) -> Option<Pos> {
        self.segments
            .len()
            .checked_sub(2)
            .map(|index| self.segments[index])
    }

    /// Direction of travel read off the last two segments. `None` while the
    /// snek is a lone head.
    pub fn travel(&self, size: Size) -> Option<PosDelta> {
        self.neck()
            .map(|neck| PosDelta::toroidal_between(neck, self.head(), size))
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.segments.contains(&pos)
    }

    pub fn segments(&self) -> impl Iterator<Item = Pos> + '_ {
        self.segments.iter().copied()
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Pos> {
        self.segments.pop_front()
    }

    pub(crate) fn restore_tail(&mut self, pos: Pos) {
        self.segments.push_front(pos);
    }

    pub(crate) fn push_head(&mut self, pos: Pos) {
        self.segments.push_back(pos);
    }

    /// Shrinks to the current last segment. Callers push a new head before the
    /// tick ends.
    pub(crate) fn collapse_to_head(&mut self) {
        if let Some(head) = self.segments.back().copied() {
            self.segments.clear();
            self.segments.push_back(head);
        }
    }
}
