use std::sync::Arc;

use color_eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ragchat::adapters::{ReqwestHttpClient, ViewPresenter};
use ragchat::cli::{parse_args, run_cli_command, AskArgs, CliCommand};
use ragchat::client::ChatClient;
use ragchat::config::{ChatConfig, DEFAULT_LOG_FILTER};
use ragchat::view::user_message_html;

/// Route tracing output to stderr so stdout carries only the HTML.
///
/// `RUST_LOG` wins; otherwise `filter` is used, then `warn`.
fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run one chat turn and print it. Returns whether the answer completed.
fn run_turn(mut config: ChatConfig, ask: AskArgs) -> Result<bool> {
    if let Some(url) = ask.base_url {
        config = config.with_base_url(url);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let http = ReqwestHttpClient::with_connect_timeout(config.connect_timeout())?;
    let client = ChatClient::new(config, Arc::new(http));
    let presenter = ViewPresenter::new();

    let outcome = match runtime.block_on(client.ask(&ask.query, presenter.clone())) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(false);
        }
    };

    let view = presenter.snapshot();
    if ask.fragment {
        println!("{}", view.content_html());
    } else {
        println!("{}{}", user_message_html(ask.query.trim()), view.to_html());
    }

    Ok(outcome.is_completed())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(&command) {
        return result;
    }
    let CliCommand::Ask(ask) = command else {
        return Ok(());
    };

    let config = ChatConfig::from_env();
    init_logging(&config.log_filter);
    for warning in ChatConfig::env_warnings() {
        tracing::warn!("{}", warning);
    }

    if !run_turn(config, ask)? {
        std::process::exit(1);
    }
    Ok(())
}
