// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use path_clean::clean;
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "dpoly.config.yaml";
pub const ENV_PREFIX: &str = "DPOLY_";

/// Settings for `dpoly`, merged from defaults, the yaml file and `DPOLY_*` variables.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct DpolyConfig {
    /// Decimals printed per coefficient
    pub precision: usize,
    /// Absolute per-coefficient tolerance used by `eq`. Zero means exact comparison.
    pub tolerance: f64,
    /// Optional `tracing_subscriber::EnvFilter` directives, eg. `dp_polynomial=trace`
    pub log_filter: Option<String>,
}

impl Default for DpolyConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            tolerance: 0.0,
            log_filter: None,
        }
    }
}

pub type FindInParent = fn(&PathBuf, &str) -> Option<PathBuf>;

pub fn find_in_parent(path: &PathBuf, filename: &str) -> Option<PathBuf> {
    let mut current = PathBuf::from(path);

    loop {
        let file_path = current.join(filename);
        if file_path.exists() {
            return Some(file_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Picks the config file: an explicit path wins, otherwise the nearest
/// `dpoly.config.yaml` above `cwd`. `None` means run on defaults.
pub fn resolve_config_path<P: Into<PathBuf>>(
    find_in_parent: FindInParent,
    cwd: P,
    default_filename: &str,
    cli_file: Option<P>,
) -> Option<PathBuf> {
    let cwd = cwd.into();

    if let Some(cli_file) = cli_file.map(Into::into) {
        // config is passed in and is absolute
        if cli_file.is_absolute() {
            return Some(cli_file);
        }

        // config is passed in and is relative
        return Some(clean(cwd.join(cli_file)));
    }

    find_in_parent(&cwd, default_filename)
}

/// Load the config at `config_file`, or the nearest default file if not provided.
pub fn load_config(config_file: Option<PathBuf>) -> Result<DpolyConfig> {
    let explicit = config_file.is_some();
    let resolved = resolve_config_path(
        find_in_parent,
        env::current_dir()?,
        DEFAULT_CONFIG_NAME,
        config_file,
    );

    let mut figment = Figment::from(Serialized::defaults(DpolyConfig::default()));
    match resolved {
        Some(path) if path.exists() => {
            debug!("Config loaded from: {:?}", path);
            figment = figment.merge(Yaml::file(path));
        }
        Some(path) if explicit => bail!("Configuration file not found: {}", path.display()),
        _ => debug!("No config file found, using defaults"),
    }

    let config: DpolyConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .context("Could not parse configuration")?;

    Ok(config)
}
