//! Rewatch - daily spoiler-free digest of interesting matches
//!
//! Runs one digest for the current instant and writes the post to stdout.

use anyhow::Context;
use rewatch_app::{log_settings, AppContext};
use rewatch_common::{init_tracing, SystemClock};
use rewatch_infra::config;
use tracing::{debug, info, warn};

fn main() -> anyhow::Result<()> {
    // Seed the environment before configuration reads overrides and secrets
    let dotenv = dotenvy::dotenv();

    let config = config::load().context("failed to load configuration")?;
    let _log_guard =
        init_tracing(&log_settings(&config.logging)).context("failed to initialise logging")?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(err) => debug!(error = %err, "No .env file loaded"),
    }

    let ctx = AppContext::from_config(config).context("failed to build application context")?;
    ctx.secrets.log_masked();

    let run = ctx.run_digest(&SystemClock).context("digest run failed")?;
    let errors = run.issues.iter().filter(|issue| issue.is_error()).count();
    if errors > 0 {
        warn!(errors, "Digest finished with errors");
    }
    info!(
        run_date = %run.run_date,
        outcome = ?run.outcome,
        stages = run.stages.len(),
        issues = run.issues.len(),
        "Done"
    );
    Ok(())
}
