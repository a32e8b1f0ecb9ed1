//! Budget configuration
//!
//! The frequency factors, the variable category weight table and the focus
//! boost are plain values passed into the budget functions rather than
//! globals, so alternate weight sets can be swapped in per call.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Explicit path (`--config`), or the override in the data dir
//!    (~/.local/share/truebudget/config/budget.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Frequency;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/budget.toml");

/// Default weight added per focus entry
pub const DEFAULT_FOCUS_BOOST: f64 = 0.08;

/// Multipliers converting a periodic amount into a monthly one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyFactors {
    pub weekly: f64,
    pub biweekly: f64,
    pub monthly: f64,
}

impl Default for FrequencyFactors {
    fn default() -> Self {
        Self {
            weekly: 52.0 / 12.0,
            biweekly: 26.0 / 12.0,
            monthly: 1.0,
        }
    }
}

impl FrequencyFactors {
    pub fn factor(&self, frequency: Frequency) -> f64 {
        match frequency {
            Frequency::Weekly => self.weekly,
            Frequency::Biweekly => self.biweekly,
            Frequency::Monthly => self.monthly,
        }
    }
}

/// A variable spending category and its base weight
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryWeight {
    pub name: String,
    pub weight: f64,
}

impl CategoryWeight {
    pub fn new(name: &str, weight: f64) -> Self {
        Self {
            name: name.to_string(),
            weight,
        }
    }
}

/// Immutable configuration for the budget computations
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetConfig {
    pub frequency: FrequencyFactors,
    /// Variable categories in display order
    pub categories: Vec<CategoryWeight>,
    pub focus_boost: f64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            frequency: FrequencyFactors::default(),
            categories: vec![
                CategoryWeight::new("Groceries", 0.30),
                CategoryWeight::new("Food Out", 0.15),
                CategoryWeight::new("Social", 0.15),
                CategoryWeight::new("Transport", 0.15),
                CategoryWeight::new("Misc", 0.15),
                CategoryWeight::new("Investing (Extra)", 0.10),
            ],
            focus_boost: DEFAULT_FOCUS_BOOST,
        }
    }
}

impl BudgetConfig {
    /// Config with the same frequency factors and boost but a different weight table
    pub fn with_categories(categories: Vec<CategoryWeight>) -> Result<Self> {
        let config = Self {
            categories,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, the data dir override, or the embedded defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?,
            None => match default_config_path() {
                Some(default_path) if default_path.exists() => {
                    debug!(path = %default_path.display(), "Loading budget config override");
                    fs::read_to_string(&default_path).map_err(|e| {
                        Error::Config(format!("Failed to read {}: {}", default_path.display(), e))
                    })?
                }
                _ => DEFAULT_CONFIG.to_string(),
            },
        };

        parse_config(&content)
    }

    /// Names of the variable categories in display order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(Error::Config(
                "At least one variable category is required".into(),
            ));
        }
        for category in &self.categories {
            if category.name.trim().is_empty() {
                return Err(Error::Config("Category names must not be empty".into()));
            }
            if !category.weight.is_finite() || category.weight <= 0.0 {
                return Err(Error::Config(format!(
                    "Weight for '{}' must be > 0 (got {})",
                    category.name, category.weight
                )));
            }
        }
        let mut names: Vec<&str> = self.category_names().collect();
        names.sort_unstable();
        if names.windows(2).any(|w| w[0] == w[1]) {
            return Err(Error::Config("Category names must be unique".into()));
        }
        for freq in Frequency::all() {
            let factor = self.frequency.factor(*freq);
            if !factor.is_finite() || factor <= 0.0 {
                return Err(Error::Config(format!(
                    "Frequency factor for {} must be > 0 (got {})",
                    freq, factor
                )));
            }
        }
        if !self.focus_boost.is_finite() || self.focus_boost < 0.0 {
            return Err(Error::Config(format!(
                "focus_boost must be >= 0 (got {})",
                self.focus_boost
            )));
        }
        Ok(())
    }
}

/// Get the default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("truebudget").join("config").join("budget.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    focus_boost: Option<f64>,
    frequency: Option<RawFrequency>,
    categories: Option<Vec<CategoryWeight>>,
}

#[derive(Debug, Deserialize)]
struct RawFrequency {
    weekly: Option<f64>,
    biweekly: Option<f64>,
    monthly: Option<f64>,
}

/// Parse TOML config content; missing keys keep their defaults
pub fn parse_config(content: &str) -> Result<BudgetConfig> {
    let raw: RawConfig = toml::from_str(content)?;
    let mut config = BudgetConfig::default();

    if let Some(boost) = raw.focus_boost {
        config.focus_boost = boost;
    }
    if let Some(freq) = raw.frequency {
        if let Some(v) = freq.weekly {
            config.frequency.weekly = v;
        }
        if let Some(v) = freq.biweekly {
            config.frequency.biweekly = v;
        }
        if let Some(v) = freq.monthly {
            config.frequency.monthly = v;
        }
    }
    if let Some(categories) = raw.categories {
        config.categories = categories;
    }

    config.validate()?;
    Ok(config)
}
