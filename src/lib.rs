//! Compara: a side-by-side comparison widget for a fixed catalog.
//!
//! Two selectors pick items from a catalog of records; the widget renders a
//! comparison table with a logo header, an `Actions` chip row and the
//! remaining attributes grouped into rows by a fixed rule.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host binary (main.rs)                              │  ← stdin events, stdout markup
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Selection state
//! │  - Event handling                                   │  ← Controller
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Engine        │   │ Catalog       │
//! │ (ui/)         │   │ (engine/)     │   │ (catalog/)    │
//! │ - Markup      │   │ - Key order   │   │ - Bundled     │
//! │ - Chip themes │   │ - Grouping    │   │ - JSON file   │
//! │ - OutputSink  │   │ - LayoutPlan  │   │ - Lookup      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths (infrastructure/)                          │
//! │  - Error types, catalog records (domain/)           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: selection state, events, actions
//! - [`catalog`]: the validated catalog and its sources
//! - [`cli`]: command-line arguments of the host binary
//! - [`domain`]: records, attribute values, errors
//! - [`engine`]: key ordering, grouping, layout plan
//! - [`infrastructure`]: path helpers
//! - [`observability`]: logging setup
//! - [`ui`]: view model, markup components, themes, output sinks
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: [`cli::Cli`] (optionally a TOML file plus
//!    `key=value` overrides)
//! 2. **Logging**: `observability::init_tracing`
//! 3. **Catalog**: `catalog::load` (bundled or `catalog_file`)
//! 4. **State**: [`initialize`] loads the theme and applies the startup
//!    selection
//! 5. **Events**: [`Event::Load`], then one [`Event::SelectionChanged`] per
//!    selector change, each through [`handle_event`]
//!
//! # Example
//!
//! ```
//! use compara::{handle_event, initialize, Action, Config, Event, Slot};
//! use compara::catalog::{CatalogSource, EmbeddedCatalog};
//! use compara::ui::RecordingSink;
//!
//! let catalog = EmbeddedCatalog.load()?;
//! let mut state = initialize(&Config::default(), &catalog);
//! let mut sink = RecordingSink::default();
//!
//! for event in [
//!     Event::Load,
//!     Event::SelectionChanged { slot: Slot::Right, name: "Tropy".to_string() },
//! ] {
//!     for action in handle_event(&mut state, &event)? {
//!         action.apply_to(&mut sink)?;
//!     }
//! }
//!
//! assert!(sink.table_visible);
//! assert!(sink.table.contains("alt=\"Tropy\""));
//! # Ok::<(), compara::CompareError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InitialSelection, LookupMissPolicy, SelectionOutcome, Slot};
pub use catalog::Catalog;
pub use domain::{AttributeValue, CatalogRecord, CompareError, Result};
pub use engine::KeySet;
pub use ui::Theme;

use engine::{LayoutOptions, DEFAULT_PRIORITY};
use infrastructure::expand_tilde;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Widget configuration.
///
/// Read from TOML (every field optional) and/or `key=value` overrides:
///
/// ```toml
/// catalog_file = "~/compara/catalog.json"
/// theme = "muted"
/// trace_level = "debug"
/// log_file = "~/.local/state/compara/compara.log"
/// on_lookup_miss = "unset"
/// initial_selection = "first-two"
/// key_set = "union"
/// priority = ["Standards", "Cost"]
/// placeholder_option = true
/// empty_message = "Pick two platforms"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON catalog to load instead of the bundled one.
    pub catalog_file: Option<String>,

    /// Built-in theme name (`default`, `muted`). Ignored if `theme_file`
    /// is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing filter, e.g. `debug` or `compara=trace`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log to this file (rotated) instead of stderr.
    pub log_file: Option<String>,

    pub on_lookup_miss: LookupMissPolicy,

    pub initial_selection: InitialSelection,

    pub key_set: KeySet,

    /// Keys sorted ahead of all others, in this order.
    pub priority: Vec<String>,

    /// Adds a disabled "unset" option to each selector.
    pub placeholder_option: bool,

    pub empty_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            theme: None,
            theme_file: None,
            trace_level: None,
            log_file: None,
            on_lookup_miss: LookupMissPolicy::default(),
            initial_selection: InitialSelection::default(),
            key_set: KeySet::default(),
            priority: DEFAULT_PRIORITY.iter().map(|k| (*k).to_string()).collect(),
            placeholder_option: false,
            empty_message: app::DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl Config {
    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CompareError::Config(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| CompareError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `priority`: comma-separated list (empty entries dropped)
    /// - `placeholder_option`: `true` / `false`
    /// - `on_lookup_miss`, `initial_selection`, `key_set`: their config names
    /// - everything else: taken as is
    ///
    /// Unparseable values keep the default and are logged at debug level.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use compara::{Config, KeySet, LookupMissPolicy};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("priority".to_string(), "Cost, Standards".to_string());
    /// map.insert("key_set".to_string(), "union".to_string());
    /// map.insert("on_lookup_miss".to_string(), "sometimes".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.priority, vec!["Cost", "Standards"]);
    /// assert_eq!(config.key_set, KeySet::Union);
    /// assert_eq!(config.on_lookup_miss, LookupMissPolicy::KeepPrevious);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::default().merge_map(map)
    }

    /// Layers `map` over `self`; keys absent from the map keep their value.
    ///
    /// Entries rejected by [`Config::set`] are skipped with a debug log.
    #[must_use]
    pub fn merge_map(mut self, map: &BTreeMap<String, String>) -> Self {
        for (key, value) in map {
            if let Err(e) = self.set(key, value) {
                tracing::debug!(key = %key, value = %value, error = %e, "ignoring config entry");
            }
        }
        self
    }

    /// Sets one field from its string form; the field is untouched on error.
    ///
    /// `priority` takes a comma-separated list with at least one key,
    /// `placeholder_option` takes `true` / `false` and the policy fields
    /// take their config names.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Config`] for a key outside [`Config::KEYS`] or
    /// a value that does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "catalog_file" => self.catalog_file = Some(value.to_string()),
            "theme" => self.theme = Some(value.to_string()),
            "theme_file" => self.theme_file = Some(value.to_string()),
            "trace_level" => self.trace_level = Some(value.to_string()),
            "log_file" => self.log_file = Some(value.to_string()),
            "empty_message" => self.empty_message = value.to_string(),
            "on_lookup_miss" => self.on_lookup_miss = parse_value(key, value)?,
            "initial_selection" => self.initial_selection = parse_value(key, value)?,
            "key_set" => self.key_set = parse_value(key, value)?,
            "placeholder_option" => self.placeholder_option = parse_value(key, value)?,
            "priority" => {
                let priority: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(String::from)
                    .collect();
                if priority.is_empty() {
                    return Err(CompareError::Config("`priority` needs at least one key".to_string()));
                }
                self.priority = priority;
            }
            other => {
                return Err(CompareError::Config(format!(
                    "unknown config key `{other}` (expected one of: {})",
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Keys accepted by [`Config::set`] and in TOML files.
    pub const KEYS: [&'static str; 11] = [
        "catalog_file",
        "theme",
        "theme_file",
        "trace_level",
        "log_file",
        "on_lookup_miss",
        "initial_selection",
        "key_set",
        "priority",
        "placeholder_option",
        "empty_message",
    ];

    /// Layout settings derived from this configuration.
    #[must_use]
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            priority: self.priority.clone(),
            key_set: self.key_set,
        }
    }

    /// Resolves the chip theme: `theme_file`, then `theme`, then the default.
    ///
    /// Load failures fall back to the default theme with a debug log.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(expand_tilde(theme_file)).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| CompareError::Config(format!("invalid value `{value}` for `{key}`: {e}")))
}

/// Creates the application state for a loaded catalog.
///
/// Applies the configured theme, layout, lookup-miss policy, selector
/// placeholder, empty message and startup selection.
///
/// ```
/// use compara::{initialize, Config, InitialSelection, Slot};
/// use compara::catalog::{CatalogSource, EmbeddedCatalog};
///
/// let catalog = EmbeddedCatalog.load()?;
/// let state = initialize(&Config::default(), &catalog);
/// assert_eq!(state.selected_name(Slot::Left), Some("Omeka"));
///
/// let config = Config { initial_selection: InitialSelection::Unset, ..Config::default() };
/// assert_eq!(initialize(&config, &catalog).selected_name(Slot::Left), None);
/// # Ok::<(), compara::CompareError>(())
/// ```
#[must_use]
pub fn initialize<'c>(config: &Config, catalog: &'c Catalog) -> AppState<'c> {
    tracing::debug!(items = catalog.len(), "initializing compara");

    let mut state = AppState::new(catalog, config.resolve_theme());
    state.layout = config.layout_options();
    state.miss_policy = config.on_lookup_miss;
    state.placeholder_option = config.placeholder_option;
    state.empty_message.clone_from(&config.empty_message);
    state.apply_initial_selection(config.initial_selection);

    state
}
