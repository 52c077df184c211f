use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use steam_scout::app::AppContext;
use steam_scout::cli::Cli;
use steam_scout::console::{Console, TerminalConsole, Tone};
use steam_scout::opener::SystemOpener;
use steam_scout::session::SessionController;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with prompts
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    let mut console = TerminalConsole::new(config.colors.clone());
    console.say(Tone::Banner, "Welcome to Steam Scout!");
    console.say(Tone::Banner, "----------------------------");

    let ctx = AppContext::new(config)?;
    tracing::info!(tags = ctx.catalog.len(), "Ready");

    let mut session = SessionController::new(Arc::new(ctx), Box::new(console), Box::new(SystemOpener));
    session.run().await?;

    Ok(())
}
