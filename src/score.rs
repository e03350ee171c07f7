/// Score capability the engine reports to. The engine only ever increments;
/// reading is for whoever draws the status line.
pub trait ScoreKeeper {
    fn increment_score(&mut self);

    fn current_score(&self) -> Option<u32>;
}

/// In-memory score that stays unset until the first morsel is eaten.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    score: Option<u32>,
}

impl ScoreKeeper for ScoreBoard {
    fn increment_score(&mut self) {
        self.score = Some(self.score.unwrap_or(0).saturating_add(1));
    }

    fn current_score(&self) -> Option<u32> {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_starts_unset() {
        assert_eq!(ScoreBoard::default().current_score(), None);
    }

    #[test]
    fn test_increments_count_up() {
        let mut board = ScoreBoard::default();
        board.increment_score();
        assert_eq!(board.current_score(), Some(1));
        board.increment_score();
        board.increment_score();
        assert_eq!(board.current_score(), Some(3));
    }
}
