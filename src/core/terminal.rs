//! Terminal setup/teardown and the main event loop for peruse.
//!
//! Handles raw mode, the alternate screen, redraws, and dispatching
//! keypress/resize events to app logic.

use crate::app::{AppState, KeypressResult};
use crate::ui;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::io;

/// Initializes the terminal in raw mode and alternate screen and runs the main event loop.
///
/// Blocks until quit. Handles all input and UI rendering.
///
/// Returns an std::io::Error if terminal setup or teardown fails.
pub(crate) fn run_terminal(app: &mut AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

/// Main event loop of peruse: draws the UI, blocks on the next event and
/// dispatches it to the app. Returns on quit.
fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    terminal.draw(|f| ui::render(f, app))?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match app.handle_keypress(key) {
                    KeypressResult::Quit => break,
                    KeypressResult::Consumed => {
                        terminal.draw(|f| ui::render(f, app))?;
                    }
                    KeypressResult::Continue => {}
                }
            }

            Event::Resize(_, _) => {
                terminal.draw(|f| ui::render(f, app))?;
            }

            _ => {}
        }
    }
    Ok(())
}
