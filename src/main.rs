use std::fs::File;
use std::io;
use std::time::Instant;

use clap::Parser;
use crossterm::event::{self, Event};
use log::{error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use simplelog::{Config, WriteLogger};

use snekgrid::config::Args;
use snekgrid::error::SnekError;
use snekgrid::game::Game;
use snekgrid::terminal::TerminalGuard;
use snekgrid::ticker::Ticker;

fn main() -> Result<(), SnekError> {
    let args = Args::parse();

    // Set up logging before anything else, the terminal belongs to the UI
    WriteLogger::init(
        args.log_level.into(),
        Config::default(),
        File::create(&args.log_file)?,
    )?;

    info!("Starting snekgrid at difficulty {}", args.difficulty().value());

    // Setup terminal; the guard puts it back on every way out, panics included
    let mut guard = TerminalGuard::enter()?;
    let result = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(SnekError::from)
        .and_then(|mut terminal| run(&mut terminal, &args));
    let restored = guard.restore();

    if let Err(e) = &result {
        error!("Session ended with an error: {}", e);
    }
    result?;
    restored?;
    Ok(())
}

/// Drives one session until its stop handle fires. Input is polled while
/// waiting for the next tick, so a key press lands before that tick moves
/// the snek.
fn run<B: Backend>(terminal: &mut Terminal<B>, args: &Args) -> Result<(), SnekError> {
    let mut ticker = Ticker::new(Instant::now());
    let mut game = Game::new(args.difficulty(), args.rng(), ticker.stop_handle());

    while !ticker.is_stopped() {
        terminal.draw(|f| game.render(f))?;

        if event::poll(ticker.time_until_tick(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                game.handle_input(key);
            }
        }

        let now = Instant::now();
        if ticker.is_due(now) {
            game.update();
            ticker.reschedule(now, game.tick_interval());
        }
    }

    info!("Stopping after {} ticks", game.tick());
    Ok(())
}
