//! Widget configuration from host attributes or a JSON document.

use serde::{Deserialize, Serialize};

use super::position::{AttributeError, PositionConfig};
use super::theme::{Theme, ThemeError};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Attribute(#[from] AttributeError),
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub position: PositionConfig,
    pub theme: Theme,
}

impl AssistantConfig {
    /// Parse and validate a JSON config. Missing fields fall back to defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.position.validate()?;
        config.theme.validate()?;
        Ok(config)
    }

    /// Build from `(name, value)` attribute pairs. Unsupported names and
    /// rejected values are logged and skipped.
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (name, value) in attributes {
            if let Err(e) = config.position.set_attribute(name, Some(value)) {
                leptos::logging::warn!("office-assistant: ignoring attribute: {e}");
            }
        }
        config
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
