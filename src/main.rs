//! main.rs
//! Entry point for peruse

pub(crate) mod app;
pub(crate) mod core;
pub(crate) mod ui;
pub(crate) mod utils;

use crate::app::AppState;
use crate::core::terminal;
use crate::utils::cli::{CliAction, handle_args};
use crate::utils::{readable_path, resolve_initial_dir};

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[peruse] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let action = handle_args();

    let path_arg = match action {
        CliAction::Exit => return Ok(()),
        CliAction::RunApp => None,
        CliAction::RunAppAtPath(path) => Some(path),
    };

    let initial_dir = match resolve_initial_dir(path_arg.as_deref()) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("[peruse] Error: {e}");
            std::process::exit(1);
        }
    };

    let mut app = match AppState::new(&initial_dir) {
        Ok(app) => app,
        Err(e) => {
            eprintln!(
                "[peruse] Error: cannot open '{}': {e}",
                readable_path(&initial_dir)
            );
            std::process::exit(1);
        }
    };

    terminal::run_terminal(&mut app)
}
