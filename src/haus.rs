use log::{debug, info, warn};
use rand::Rng;

use crate::geometry::{Direction, Pos, PosDelta, Size};
use crate::morsel::{is_spawn_tick, Morsel};
use crate::score::ScoreKeeper;
use crate::snek::Snek;

/// Random draws tried before falling back to a full board scan.
const EMPTY_CELL_DRAWS: usize = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Snake,
    Food,
    Empty,
}

#[derive(Debug, PartialEq, Eq)]
pub enum StepResult {
    Ongoing,   // Normal movement, no special events
    Nommed,    // Ate a morsel and grew by one
    Collision, // Hit itself and shrank back to two segments
}

/// Owns everything that changes from tick to tick: the snek, the morsels,
/// the clock and the staged direction.
#[derive(Debug)]
pub struct SnekHaus {
    size: Size,
    snek: Snek,
    morsels: Vec<Morsel>,
    tick: u64,
    direction: Direction,
}

impl Default for SnekHaus {
    fn default() -> Self {
        SnekHaus {
            size: Size::BOARD,
            snek: Snek::default(),
            morsels: Vec::new(),
            tick: 0,
            direction: Direction::South,
        }
    }
}

impl SnekHaus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Index of the next tick to process, which is also the number of ticks
    /// already run.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn snek_len(&self) -> usize {
        self.snek.len()
    }

    /// Copy of the segments, tail first.
    pub fn segments(&self) -> Vec<Pos> {
        self.snek.segments().collect()
    }

    pub fn morsels(&self) -> Vec<Morsel> {
        self.morsels.clone()
    }

    pub fn classify(&self, pos: Pos) -> Tile {
        if self.snek.contains(pos) {
            Tile::Snake
        } else if self.morsels.iter().any(|m| m.pos == pos) {
            Tile::Food
        } else {
            Tile::Empty
        }
    }

    /// Snapshot of the whole board in row-major order.
    pub fn enumerate_grid(&self) -> Vec<Tile> {
        self.size.positions().map(|pos| self.classify(pos)).collect()
    }

    /// Rejection-samples an empty cell, then scans the board in row-major
    /// order once the draw budget is spent. `None` only when the board is full.
    pub fn unoccupied_pos(&self, rng: &mut impl Rng) -> Option<Pos> {
        for _ in 0..EMPTY_CELL_DRAWS {
            let pos = Pos {
                x: rng.gen_range(0..self.size.width),
                y: rng.gen_range(0..self.size.height),
            };
            if self.classify(pos) == Tile::Empty {
                return Some(pos);
            }
        }

        warn!(
            "No empty cell after {} draws on tick {}, scanning the board",
            EMPTY_CELL_DRAWS, self.tick
        );
        self.size
            .positions()
            .find(|&pos| self.classify(pos) == Tile::Empty)
    }

    /// Stages `direction` for the next tick unless it points straight back
    /// into the neck. Reversals are dropped without a signal.
    pub fn request_direction(&mut self, direction: Direction) {
        let requested = PosDelta::from(direction);
        if let Some(travel) = self.snek.travel(self.size) {
            if requested == travel.negated() {
                debug!("Ignoring reversal to {:?}", direction);
                return;
            }
        }
        self.direction = direction;
    }

    /// Moves the snek one cell along the staged direction and resolves
    /// whatever it lands on.
    pub fn forward(&mut self, score: &mut impl ScoreKeeper) -> StepResult {
        let new_head = self.snek.head().wrapped_add(self.direction.into(), self.size);
        let tail = self.snek.pop_tail();

        let result = match self.classify(new_head) {
            Tile::Food => {
                self.eat_morsel_at(new_head);
                score.increment_score();

                match tail {
                    Some(tail) => {
                        self.snek.restore_tail(tail);
                        if tail == new_head {
                            self.die(new_head);
                            StepResult::Collision
                        } else {
                            StepResult::Nommed
                        }
                    }
                    None => StepResult::Nommed,
                }
            }
            Tile::Snake => {
                self.die(new_head);
                StepResult::Collision
            }
            Tile::Empty => StepResult::Ongoing,
        };

        self.snek.push_head(new_head);
        result
    }

    /// One full tick: move, spawn on spawn ticks, sweep rotten morsels, then
    /// advance the clock.
    pub fn advance(&mut self, rng: &mut impl Rng, score: &mut impl ScoreKeeper) -> StepResult {
        let result = self.forward(score);

        if is_spawn_tick(self.tick) {
            self.spawn_morsel(rng);
        }
        self.sweep_expired();

        self.tick += 1;
        result
    }

    pub fn spawn_morsel(&mut self, rng: &mut impl Rng) -> Option<Morsel> {
        let Some(pos) = self.unoccupied_pos(rng) else {
            warn!("Board is full, no morsel spawned on tick {}", self.tick);
            return None;
        };

        let morsel = Morsel::new(pos, self.tick);
        self.place_morsel(morsel);
        debug!("Spawned morsel at {:?} on tick {}", pos, self.tick);
        Some(morsel)
    }

    /// Drops every morsel past its lifetime in one pass.
    pub fn sweep_expired(&mut self) -> usize {
        let tick = self.tick;
        let before = self.morsels.len();
        self.morsels.retain(|morsel| {
            let expired = morsel.is_expired(tick);
            if expired {
                debug!("Morsel at {:?} expired on tick {}", morsel.pos, tick);
            }
            !expired
        });
        before - self.morsels.len()
    }

    fn place_morsel(&mut self, morsel: Morsel) {
        assert!(
            self.classify(morsel.pos) == Tile::Empty,
            "Attempted to place morsel at occupied position"
        );
        self.morsels.push(morsel);
    }

    fn eat_morsel_at(&mut self, pos: Pos) {
        if let Some(index) = self.morsels.iter().position(|m| m.pos == pos) {
            self.morsels.remove(index);
            info!("Nommed morsel at {:?} on tick {}", pos, self.tick);
        }
    }

    fn die(&mut self, hit: Pos) {
        info!(
            "Snek ran into itself at {:?} on tick {}, shrinking from {} segments",
            hit,
            self.tick,
            self.snek.len()
        );
        self.snek.collapse_to_head();
    }
}
