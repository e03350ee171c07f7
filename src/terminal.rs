use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::error;

/// Puts the terminal back the way it was found: raw mode off, main screen,
/// cursor visible. Runs on drop too, so early returns and panics are covered.
pub struct TerminalGuard<W: Write> {
    out: W,
    disable_raw: fn() -> io::Result<()>,
    restored: bool,
}

impl TerminalGuard<Stdout> {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = TerminalGuard::new(io::stdout(), disable_raw_mode);
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W, disable_raw: fn() -> io::Result<()>) -> Self {
        TerminalGuard {
            out,
            disable_raw,
            restored: false,
        }
    }

    /// Runs every restore step even if an earlier one fails and reports the
    /// first error. Later calls are no-ops.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        let raw = (self.disable_raw)();
        let screen = execute!(self.out, LeaveAlternateScreen, cursor::Show);
        raw.and(screen)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!("Failed to restore terminal: {}", e);
        }
    }
}
