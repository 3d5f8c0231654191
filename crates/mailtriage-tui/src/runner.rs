//! Main TUI runner - entry point and event loop

use std::time::Instant;

use mailtriage_app::{Engine, Message};
use mailtriage_core::prelude::*;

use super::{event, render, terminal};

/// Run the interactive UI until the user quits or a signal arrives
///
/// The engine is started here and shut down before the terminal is
/// restored, so in-flight requests are cancelled on exit.
pub async fn run(mut engine: Engine) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = terminal::init()?;
    if let Err(e) = terminal::enable_paste() {
        warn!("{}", e);
    }

    engine.start();
    info!("TUI started");

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    terminal::disable_paste();
    ratatui::restore();

    info!("TUI stopped");
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    let mut ticks = event::TickTimer::new(event::TICK_INTERVAL, Instant::now());

    while !engine.should_quit() {
        // Results of background tasks and signals
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &mut engine.state))
            .map_err(|e| Error::terminal(format!("Failed to draw frame: {}", e)))?;

        if let Some(message) = event::poll(ticks.remaining(Instant::now()))? {
            engine.process_message(message);
        }
        if ticks.due(Instant::now()) {
            engine.process_message(Message::Tick);
        }
    }

    Ok(())
}
