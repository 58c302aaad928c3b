//! Command-line arguments of the host binary.
//!
//! ```text
//! compara [--config FILE] [KEY=VALUE]...
//! ```
//!
//! The TOML file is loaded first; `KEY=VALUE` overrides apply on top of it in
//! the order given. Keys and values are checked while parsing, so a typo is a
//! usage error instead of a silently ignored setting.

use crate::infrastructure::expand_tilde;
use crate::{Config, Result};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "compara")]
#[command(about = "Side-by-side comparison widget driven over stdin/stdout", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<String>,

    /// Configuration overrides, e.g. `theme=muted on_lookup_miss=unset`.
    #[arg(value_name = "KEY=VALUE", value_parser = parse_override)]
    pub overrides: Vec<(String, String)>,
}

impl Cli {
    /// Loads `--config` (if any) and applies the overrides.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CompareError::Config`] if the file cannot be read or
    /// parsed, or an override is rejected by [`Config::set`].
    pub fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(expand_tilde(path))?,
            None => Config::default(),
        };

        for (key, value) in &self.overrides {
            config.set(key, value)?;
        }

        Ok(config)
    }
}

fn parse_override(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;

    Config::default().set(key, value).map_err(|e| e.to_string())?;
    Ok((key.to_string(), value.to_string()))
}
