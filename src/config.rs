use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::LevelFilter;

use crate::ticker::Difficulty;

#[derive(Parser, Debug)]
#[command(name = "snekgrid", version, about = "A snek on a 10x10 torus")]
pub struct Args {
    /// Game speed, 1 (slowest) to 100 (fastest)
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub difficulty: u8,

    /// Seed for morsel placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "snekgrid.log")]
    pub log_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Args {
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::new(self.difficulty).unwrap_or_default()
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["snekgrid"]).unwrap();
        assert_eq!(args.difficulty().value(), 50);
        assert_eq!(args.seed, None);
        assert_eq!(args.log_file, PathBuf::from("snekgrid.log"));
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Info);
    }

    #[test]
    fn test_difficulty_out_of_range_rejected() {
        assert!(Args::try_parse_from(["snekgrid", "--difficulty", "0"]).is_err());
        assert!(Args::try_parse_from(["snekgrid", "--difficulty", "101"]).is_err());

        let args = Args::try_parse_from(["snekgrid", "--difficulty", "100"]).unwrap();
        assert_eq!(args.difficulty().value(), 100);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let args = Args::try_parse_from(["snekgrid", "--seed", "9"]).unwrap();
        let (mut first, mut second) = (args.rng(), args.rng());
        let a: Vec<u16> = (0..8).map(|_| first.gen_range(0..10)).collect();
        let b: Vec<u16> = (0..8).map(|_| second.gen_range(0..10)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_log_level_flag() {
        let args = Args::try_parse_from(["snekgrid", "--log-level", "debug"]).unwrap();
        assert_eq!(args.log_level, LogLevel::Debug);
    }
}
