use crate::geometry::Pos;

/// Ticks a morsel stays on the board before it rots away.
pub const MORSEL_LIFETIME: u64 = 25;

/// A new morsel appears on every tick divisible by this.
pub const SPAWN_PERIOD: u64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Morsel {
    pub pos: Pos,
    pub spawn_tick: u64,
}

impl Morsel {
    pub fn new(pos: Pos, spawn_tick: u64) -> Self {
        Morsel { pos, spawn_tick }
    }

    pub fn is_expired(&self, tick: u64) -> bool {
        tick.saturating_sub(self.spawn_tick) >= MORSEL_LIFETIME
    }
}

pub fn is_spawn_tick(tick: u64) -> bool {
    tick % SPAWN_PERIOD == 0
}
