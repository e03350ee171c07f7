//! A snek on a fixed 10x10 torus. It eats morsels that rot after a while and
//! shrinks back down when it runs into itself; the game never ends on its own.

pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod haus;
pub mod morsel;
pub mod score;
pub mod snek;
pub mod terminal;
pub mod ticker;
