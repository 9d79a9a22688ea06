//! Command-line argument parsing for the ragchat CLI.
//!
//! Flags come first; every other argument is a word of the query. `--` ends
//! flag parsing so a query may start with a dash.

/// Options of a chat turn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AskArgs {
    /// Query words joined with single spaces (may be empty)
    pub query: String,
    /// Server origin that overrides the configured one
    pub base_url: Option<String>,
    /// Print only the assistant content instead of the whole turn
    pub fragment: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Ask a question (default)
    Ask(AskArgs),
    /// Arguments could not be parsed
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use ragchat::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["ragchat".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut ask = AskArgs::default();
    let mut words: Vec<String> = Vec::new();
    let mut flags_done = false;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        if flags_done {
            words.push(arg);
            continue;
        }
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--fragment" => ask.fragment = true,
            "--base-url" => match args.next() {
                Some(url) => ask.base_url = Some(url),
                None => return CliCommand::Invalid("--base-url needs a value".to_string()),
            },
            "--" => flags_done = true,
            other if other.starts_with("--base-url=") => {
                ask.base_url = Some(other["--base-url=".len()..].to_string());
            }
            other if other.starts_with("--") => {
                return CliCommand::Invalid(format!("unknown option {}", other));
            }
            _ => words.push(arg),
        }
    }

    ask.query = words.join(" ");
    CliCommand::Ask(ask)
}
