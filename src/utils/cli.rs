//! Command-line argument parsing and help for peruse.
//!
//! When invoked with no args (peruse), the TUI simply launches in the
//! current directory.

pub(crate) enum CliAction {
    RunApp,
    RunAppAtPath(String),
    Exit,
}

pub(crate) fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        return CliAction::RunApp;
    }

    if args.len() > 2 {
        eprintln!("Error: peruse accepts only one argument at a time.");
        eprintln!("Usage: peruse [PATH] or peruse [OPTION]");
        return CliAction::Exit;
    }

    match args[1].as_str() {
        "--version" | "-v" => {
            print_version();
            CliAction::Exit
        }
        "-h" | "--help" => {
            print_help();
            CliAction::Exit
        }
        arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
            CliAction::RunAppAtPath(arg.to_string())
        }
        arg => {
            eprintln!("Unknown argument: {}", arg);
            eprintln!("Try --help for available options");
            CliAction::Exit
        }
    }
}

fn print_version() {
    println!("peruse {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"peruse - a terminal file browser with fuzzy search and previews

USAGE:
  peruse [PATH]

PATH:
  Directory to open. Defaults to the current directory.

OPTIONS:
  -h, --help      Show this help
  -v, --version   Show version

KEYS:
  j/k or arrows   Move selection
  l / Enter       Open directory
  h / Backspace   Go to parent
  .               Toggle hidden files
  / or Ctrl+F     Fuzzy search
  s               Settings (color schemes)
  ?               Keybinding help
  q               Quit"#
    );
}
