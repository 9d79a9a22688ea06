//! Version command for the ragchat CLI.

/// The current version of ragchat, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `ragchat <version>`
pub fn version_line() -> String {
    format!("ragchat {}", VERSION)
}

/// Handle the --version command.
///
/// Prints the version string and exits successfully.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}
