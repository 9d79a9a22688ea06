//! CLI module for ragchat.
//!
//! Argument parsing, version display and usage text. A chat turn itself is
//! run by `main`; everything else is handled here:
//!
//! ```ignore
//! use ragchat::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     if let Err(e) = result {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//!     std::process::exit(0);
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, AskArgs, CliCommand};
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Usage text printed by `--help` and after argument errors.
pub const USAGE: &str = "\
Usage: ragchat [OPTIONS] <QUERY>...

Ask the search server a question and print the streamed answer as HTML.

Options:
      --base-url <URL>  Server origin (default: $RAGCHAT_BASE_URL or http://localhost:8080)
      --fragment        Print only the rendered answer, not the whole turn
  -h, --help            Print help
  -V, --version         Print version
";

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `Ask` (main runs the chat turn)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If the arguments were invalid
///
/// `Version` never returns as it calls `std::process::exit(0)`.
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            print!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Invalid(reason) => {
            eprint!("{}", USAGE);
            Some(Err(eyre!("{}", reason)))
        }
        CliCommand::Ask(_) => None,
    }
}
