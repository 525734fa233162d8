use anyhow::{Context, Result};
use serde::Serialize;

use civil_date::Date;

use crate::config::OutputConfig;

/// Renders command results as text or JSON on stdout.
pub struct Printer {
    json: bool,
    layout: String,
}

impl Printer {
    /// `--json` turns JSON on even when the config does not.
    pub fn new(config: &OutputConfig, json: bool) -> Self {
        Self {
            json: json || config.json,
            layout: config.layout.clone(),
        }
    }

    /// Formats a date with the configured layout.
    pub fn date(&self, date: Date) -> String {
        date.format(&self.layout).to_string()
    }

    /// Returns the JSON form of `value` or the text `text` produces.
    pub fn render<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<String> {
        if self.json {
            serde_json::to_string_pretty(value).context("failed to serialize JSON output")
        } else {
            Ok(text())
        }
    }

    /// Prints the rendered result on stdout.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        println!("{}", self.render(value, text)?);
        Ok(())
    }
}
