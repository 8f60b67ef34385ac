use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use dm_core::{update, AppState, Msg};
use dm_logging::{dm_debug, dm_info};
use ratatui::DefaultTerminal;

use super::effects::EffectRunner;
use super::ui::input::{self, UiAction};
use super::ui::render;
use super::AppError;
use crate::cli::Cli;

/// Input poll timeout; also the tick rate that drains engine events.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app(cli: &Cli) -> Result<(), AppError> {
    let runner = EffectRunner::new(cli.send_settings())?;

    // `init` also installs a panic hook that restores the terminal.
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &runner);
    ratatui::restore();

    dm_info!("auto_dm exiting");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, runner: &EffectRunner) -> Result<(), AppError> {
    let mut state = AppState::new();
    let mut view = state.view();
    let mut needs_draw = true;

    loop {
        if needs_draw {
            terminal.draw(|frame| render::render(frame, &view))?;
            needs_draw = false;
        }

        let mut inbox = Vec::new();
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match input::map_key(key, &view) {
                        Some(UiAction::Quit) => break,
                        Some(UiAction::Dispatch(msg)) => inbox.push(msg),
                        None => {}
                    }
                }
                Event::Resize(..) => needs_draw = true,
                _ => {}
            }
        } else {
            inbox.push(Msg::Tick);
        }
        inbox.extend(runner.drain_events());

        if dispatch_all(&mut state, inbox, runner) {
            view = state.view();
            needs_draw = true;
        }
    }

    Ok(())
}

/// Applies messages in arrival order; returns whether the view must be rebuilt.
fn dispatch_all(state: &mut AppState, inbox: Vec<Msg>, runner: &EffectRunner) -> bool {
    for msg in inbox {
        if !matches!(msg, Msg::Tick) {
            dm_debug!("dispatch {:?}", msg);
        }
        let (next, effects) = update(std::mem::take(state), msg);
        *state = next;
        runner.enqueue(effects);
    }
    state.consume_dirty()
}
