//! walkthrough
//!
//! Replays the scripted `cowlink` session and logs each stage.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p walkthrough
//! WALKTHROUGH_OFFSET=-2 RUST_LOG=walkthrough=debug cargo run -p walkthrough
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use walkthrough::{WalkthroughConfig, run};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "walkthrough=info,cowlink=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = WalkthroughConfig::from_env()?;
    tracing::debug!(offset = config.offset, map_suffix = %config.map_suffix, "configuration loaded");

    let report = run(&config)?;

    for stage in &report.stages {
        tracing::info!(stage = stage.label, "{}", stage.rendering);
    }
    tracing::info!(snapshot = %report.snapshot, "copy taken before the end removals");
    tracing::info!(removed = ?report.removed, "values returned by removals");
    tracing::info!(mapped = ?report.mapped, "mapped with suffix");
    match report.offset_value {
        Some(value) => tracing::info!(offset = config.offset, value, "value at offset from end"),
        None => tracing::warn!(offset = config.offset, "offset walks off the list"),
    }

    Ok(())
}
