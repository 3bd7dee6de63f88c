use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrum_bot::bot::{Outcome, WriteMode, handle_comment};
use scrum_bot::config::Config;
use scrum_bot::github::OctocrabClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,scrum_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("loading configuration")?;
    tracing::debug!(?config, "Loaded configuration");

    let client = OctocrabClient::connect(&config.token, config.repo.clone())?;

    let mode = if config.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Apply
    };

    let outcome = handle_comment(
        &client,
        &config.event,
        &config.members,
        &config.layout,
        mode,
    )
    .await
    .with_context(|| format!("handling comment on {} {}", config.repo, config.event.issue))?;

    match outcome {
        Outcome::Ignored => println!("Comment author is a bot; nothing to do."),
        Outcome::Unchanged => println!("No changes to the issue body."),
        Outcome::Edited { changes } => println!("Issue body updated ({} change(s)).", changes.len()),
        Outcome::DryRun { body, .. } => println!("{}", body),
    }

    Ok(())
}
