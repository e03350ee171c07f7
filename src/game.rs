use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::info;
use rand::rngs::StdRng;
use ratatui::{
    buffer::Buffer,
    layout::{self, Alignment, Constraint, Layout, Rect},
    style::Color,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use crate::geometry::Direction;
use crate::haus::{SnekHaus, StepResult, Tile};
use crate::score::{ScoreBoard, ScoreKeeper};
use crate::ticker::{Difficulty, StopHandle};

/// Terminal columns per board cell, so cells come out roughly square.
const CELL_WIDTH: u16 = 2;

const HELP_TEXT: &str = "WASD/arrows steer   +/- difficulty   q quits";

/// One play session. Stops its tick loop when dropped.
pub struct Game {
    haus: SnekHaus,
    score: ScoreBoard,
    difficulty: Difficulty,
    rng: StdRng,
    stop: StopHandle,
}

impl Game {
    pub fn new(difficulty: Difficulty, rng: StdRng, stop: StopHandle) -> Self {
        Game {
            haus: SnekHaus::new(),
            score: ScoreBoard::default(),
            difficulty,
            rng,
            stop,
        }
    }

    pub fn tick(&self) -> u64 {
        self.haus.tick()
    }

    /// Read once per tick to schedule the next one.
    pub fn tick_interval(&self) -> Duration {
        self.difficulty.tick_interval()
    }

    pub fn update(&mut self) -> StepResult {
        self.haus.advance(&mut self.rng, &mut self.score)
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Up | KeyCode::Char('w') => self.haus.request_direction(Direction::North),
            KeyCode::Down | KeyCode::Char('s') => self.haus.request_direction(Direction::South),
            KeyCode::Left | KeyCode::Char('a') => self.haus.request_direction(Direction::West),
            KeyCode::Right | KeyCode::Char('d') => self.haus.request_direction(Direction::East),
            KeyCode::Char('+') | KeyCode::Char('=') => self.set_difficulty(self.difficulty.raise()),
            KeyCode::Char('-') => self.set_difficulty(self.difficulty.lower()),
            _ => {}
        }
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            info!("Difficulty {} -> {}", self.difficulty.value(), difficulty.value());
            self.difficulty = difficulty;
        }
    }

    fn quit(&self) {
        info!("Quit requested on tick {}", self.haus.tick());
        self.stop.stop();
    }

    fn status_text(&self) -> String {
        let mut status = format!(
            "SNEK    Difficulty: {}    Ticks played: {}",
            self.difficulty.value(),
            self.haus.tick()
        );
        if let Some(score) = self.score.current_score() {
            status.push_str(&format!("    Score: {}", score));
        }
        format!("{}\n{}", status, HELP_TEXT)
    }

    pub fn render(&self, frame: &mut Frame) {
        let layout = Layout::default()
            .direction(layout::Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Status + help
                Constraint::Min(0),    // Board
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(self.status_text())
                .alignment(Alignment::Left)
                .block(Block::default().borders(Borders::ALL)),
            layout[0],
        );

        let block = Block::default().title("Board").borders(Borders::ALL);
        let inner_area = block.inner(layout[1]);
        frame.render_widget(block, layout[1]);
        frame.render_widget(&self.haus, inner_area);
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        self.stop.stop();
    }
}

fn tile_colour(tile: Tile) -> Color {
    match tile {
        Tile::Snake => Color::Red,
        Tile::Food => Color::Green,
        Tile::Empty => Color::Rgb(64, 128, 255),
    }
}

impl Widget for &SnekHaus {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.size().width as usize;

        for (index, tile) in self.enumerate_grid().into_iter().enumerate() {
            let x = (index % width) as u16 * CELL_WIDTH;
            let y = (index / width) as u16;
            if y >= area.height || x + CELL_WIDTH > area.width {
                continue;
            }

            for dx in 0..CELL_WIDTH {
                buf[(area.x + x + dx, area.y + y)]
                    .set_symbol(" ")
                    .set_bg(tile_colour(tile));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Pos;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};

    fn new_game() -> (Game, StopHandle) {
        let stop = StopHandle::default();
        let game = Game::new(
            Difficulty::default(),
            StdRng::seed_from_u64(1),
            stop.clone(),
        );
        (game, stop)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_steering_keys() {
        let (mut game, _) = new_game();

        game.handle_input(press(KeyCode::Char('d')));
        assert_eq!(game.haus.direction(), Direction::East);

        game.handle_input(press(KeyCode::Down));
        assert_eq!(game.haus.direction(), Direction::South);

        // Still travelling south, so north is a reversal
        game.handle_input(press(KeyCode::Char('w')));
        assert_eq!(game.haus.direction(), Direction::South);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let (mut game, _) = new_game();
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;

        game.handle_input(key);
        assert_eq!(game.haus.direction(), Direction::South);
    }

    #[test]
    fn test_difficulty_keys() {
        let (mut game, _) = new_game();

        game.handle_input(press(KeyCode::Char('+')));
        assert_eq!(game.difficulty.value(), 55);
        assert_eq!(game.tick_interval(), Duration::from_millis(235));

        game.handle_input(press(KeyCode::Char('-')));
        game.handle_input(press(KeyCode::Char('-')));
        assert_eq!(game.difficulty.value(), 45);
    }

    #[test]
    fn test_quit_keys_stop_the_loop() {
        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let (mut game, stop) = new_game();
            game.handle_input(key);
            assert!(stop.is_stopped());
        }
    }

    #[test]
    fn test_drop_stops_the_loop() {
        let (game, stop) = new_game();
        assert!(!stop.is_stopped());
        drop(game);
        assert!(stop.is_stopped());
    }

    #[test]
    fn test_update_advances_clock() {
        let (mut game, _) = new_game();
        assert_eq!(game.update(), StepResult::Ongoing);
        assert_eq!(game.tick(), 1);
        assert!(game.status_text().contains("Ticks played: 1"));
        assert_eq!(game.haus.segments(), vec![Pos::new(0, 1), Pos::new(0, 2)]);
    }

    #[test]
    fn test_board_widget_colours() {
        let (game, _) = new_game();
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        (&game.haus).render(buf.area, &mut buf);

        // Snek occupies (0,0) and (0,1)
        assert_eq!(buf[(0, 0)].bg, Color::Red);
        assert_eq!(buf[(1, 0)].bg, Color::Red);
        assert_eq!(buf[(0, 1)].bg, Color::Red);
        assert_eq!(buf[(2, 0)].bg, Color::Rgb(64, 128, 255));
        assert_eq!(buf[(19, 9)].bg, Color::Rgb(64, 128, 255));
    }

    #[test]
    fn test_board_widget_clips_small_area() {
        let (game, _) = new_game();
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 3));
        (&game.haus).render(buf.area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, Color::Red);
        // The fifth column cannot fit a whole cell
        assert_eq!(buf[(4, 0)].bg, Color::Reset);
    }

    #[test]
    fn test_status_shows_score_only_once_set() {
        let (mut game, _) = new_game();
        assert!(!game.status_text().contains("Score"));

        game.score.increment_score();
        assert!(game.status_text().contains("Score: 1"));
    }

    #[test]
    fn test_full_frame_render() {
        let (game, _) = new_game();
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        terminal.draw(|f| game.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let status_row: String = (0..40).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(status_row.contains("Difficulty: 50"));

        // Board block border takes row 4 and column 0
        assert_eq!(buffer[(1, 5)].bg, Color::Red);
    }
}
