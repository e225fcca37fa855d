// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout only carries results.
pub fn setup_tracing(log_level: Level, log_filter: Option<&str>) -> Result<()> {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    match log_filter {
        Some(directives) => {
            let filter = EnvFilter::try_new(directives)
                .with_context(|| format!("Invalid log_filter '{directives}'"))?;
            registry.with(filter).try_init()?;
        }
        None => {
            registry
                .with(tracing_subscriber::filter::LevelFilter::from_level(
                    log_level,
                ))
                .try_init()?;
        }
    }

    Ok(())
}
