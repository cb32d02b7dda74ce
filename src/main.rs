//! Entry point: parse CLI, build providers and dispatch to a tool.

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use yahoo_ffl::{
    cli::YahooFfl,
    commands::{dispatch, ToolContext},
    config::{Config, SLEEPER_DISABLED_ENV_VAR},
    sleeper::{SecondaryProvider, SleeperClient},
    yahoo::YahooClient,
};

const DEFAULT_LOG_FILTER: &str = "yahoo_ffl=info,warn";

/// Logs go to stderr so stdout stays pure JSON.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("yahoo_ffl=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = YahooFfl::parse();
    init_tracing(app.verbose);

    let config = Config::from_env();
    let (tool, args) = app
        .command
        .into_tool_call(config.default_league_key.as_deref())
        .context("invalid tool invocation")?;

    let yahoo = YahooClient::from_config(&config).context("failed to build Yahoo client")?;

    let (sleeper, unavailable_reason) = if config.sleeper_enabled {
        match SleeperClient::from_config(&config) {
            Ok(client) => (Some(client), None),
            Err(e) => {
                warn!(error = %e, "Sleeper client unavailable");
                (None, Some(format!("Sleeper client could not be built: {e}")))
            }
        }
    } else {
        (None, Some(format!("disabled by {SLEEPER_DISABLED_ENV_VAR}")))
    };

    let secondary = sleeper.as_ref().map(|s| s as &dyn SecondaryProvider);
    let mut ctx = ToolContext::new(&yahoo, secondary);
    if let Some(reason) = unavailable_reason {
        ctx = ctx.with_unavailable_reason(reason);
    }

    info!(tool = %tool, "running tool");
    let response = dispatch(&ctx, tool.as_str(), &args).await;

    let rendered = if app.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .context("failed to render response")?;
    println!("{rendered}");

    if response["status"] == "error" {
        std::process::exit(1);
    }
    Ok(())
}
