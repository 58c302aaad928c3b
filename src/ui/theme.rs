//! Chip color themes.
//!
//! A theme maps each action string to a chip color, with one fallback color
//! for anything the table does not list. Lookup is an exact string match:
//! `"Digitization"` and `"digitization"` are different actions.
//!
//! # Built-in Themes
//!
//! - `default`: saturated chips with white text
//! - `muted`: pastel chips with dark text
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! chip_text = "#ffffff"
//! action_fallback = "#6c757d"
//!
//! [actions]
//! "Digitization" = "#d63384"
//! "Text processing" = "#20c997"
//! ```

use crate::domain::error::{CompareError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Chip color configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    pub colors: ThemeColors,
    /// Action text to chip background color.
    #[serde(default)]
    pub actions: BTreeMap<String, String>,
}

/// Colors not tied to a specific action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeColors {
    /// Chip text color.
    pub chip_text: String,
    /// Chip background for actions missing from the `actions` table.
    pub action_fallback: String,
}

impl Theme {
    /// Loads a built-in theme by name; `None` for unknown names.
    ///
    /// ```
    /// use compara::ui::Theme;
    ///
    /// let theme = Theme::from_name("muted").unwrap();
    /// assert_eq!(theme.name, "muted");
    /// assert!(Theme::from_name("neon").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "default" => include_str!("../../themes/default.toml"),
            "muted" => include_str!("../../themes/muted.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CompareError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| CompareError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Chip color for an action, or the fallback color.
    #[must_use]
    pub fn action_color(&self, action: &str) -> &str {
        self.actions
            .get(action)
            .map_or(self.colors.action_fallback.as_str(), String::as_str)
    }
}

impl Default for Theme {
    /// # Panics
    ///
    /// Panics if the bundled `default` theme fails to parse.
    fn default() -> Self {
        Self::from_name("default").expect("built-in default theme should always parse")
    }
}
