use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, Utc};
use serde::Deserialize;
use tracing::debug;

use civil_date::Date;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "civil.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CivilConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Which zone "today" is taken in.
    #[serde(default)]
    pub clock: ClockConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_layout")]
    pub layout: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            json: false,
        }
    }
}

fn default_layout() -> String {
    "%Y-%m-%d".to_string()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ClockConfig {
    #[serde(default)]
    pub zone: Zone,
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    #[default]
    Local,
    Utc,
    Fixed,
}

impl CivilConfig {
    /// Loads the config at `path`, or [`DEFAULT_CONFIG`] if `path` is `None`.
    ///
    /// A missing default file yields the default config; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG), false),
        };
        if !required && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: CivilConfig =
            toml::from_str(&toml_str).context("failed to parse TOML config")?;
        config.validate()?;
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.output.layout).any(|item| matches!(item, Item::Error)) {
            bail!("invalid [output].layout: {:?}", self.output.layout);
        }
        if self.clock.zone == Zone::Fixed {
            self.clock.fixed_offset()?;
        }
        Ok(())
    }
}

impl ClockConfig {
    fn fixed_offset(&self) -> Result<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .with_context(|| {
                format!(
                    "invalid [clock].utc_offset_minutes: {} (must be within ±24h)",
                    self.utc_offset_minutes
                )
            })
    }

    /// Returns today's date in the configured zone, or in UTC if `force_utc`.
    pub fn today(&self, force_utc: bool) -> Result<Date> {
        if force_utc {
            return Ok(Date::today_in(&Utc));
        }
        Ok(match self.zone {
            Zone::Local => Date::today(),
            Zone::Utc => Date::today_in(&Utc),
            Zone::Fixed => Date::today_in(&self.fixed_offset()?),
        })
    }
}
