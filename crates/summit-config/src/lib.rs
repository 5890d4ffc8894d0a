//! Configuration management for summit-ledger
//!
//! This module handles loading, validation, and management of
//! summit-ledger configuration from YAML files.

pub mod error;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::PathBuf;

pub use error::{ConfigError, ConfigResult};

// ==================== Configuration Types ====================

/// Snapshot data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the snapshot files
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// Transfers file name (JSON array)
    #[serde(default = "default_transfers_file")]
    pub transfers_file: String,
    /// Accounts file name (JSON array)
    #[serde(default = "default_accounts_file")]
    pub accounts_file: String,
    /// Seconds between refreshes in watch mode
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            transfers_file: default_transfers_file(),
            accounts_file: default_accounts_file(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data")
}

fn default_transfers_file() -> String {
    "transfers.json".to_string()
}

fn default_accounts_file() -> String {
    "accounts.json".to_string()
}

fn default_poll_interval() -> u64 {
    30
}

/// Default filter criteria applied when nothing is given on the command line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterDefaults {
    /// Initial search text
    #[serde(default)]
    pub search: String,
    /// Initial type filter
    #[serde(default)]
    pub type_filter: TypeFilter,
    /// Initial date window
    #[serde(default = "default_date_window")]
    pub date_window: DateWindow,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            search: String::new(),
            type_filter: TypeFilter::All,
            date_window: default_date_window(),
        }
    }
}

fn default_date_window() -> DateWindow {
    DateWindow::Last30
}

/// Transaction type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    /// Every direction
    All,
    /// Credits only
    Income,
    /// Debits only
    Expense,
}

impl Default for TypeFilter {
    fn default() -> Self {
        TypeFilter::All
    }
}

impl std::str::FromStr for TypeFilter {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Income),
            "expense" | "expenses" => Ok(TypeFilter::Expense),
            _ => Err(format!("Invalid type filter: {}", s)),
        }
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeFilter::All => write!(f, "all"),
            TypeFilter::Income => write!(f, "income"),
            TypeFilter::Expense => write!(f, "expense"),
        }
    }
}

/// Trailing date window, counted back from "now"
///
/// In YAML both `30` and `"30"` are accepted, as is `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateWindow {
    /// Last 7 days
    Last7,
    /// Last 30 days
    Last30,
    /// Last 90 days
    Last90,
    /// No lower bound
    All,
}

impl DateWindow {
    /// Number of days covered, `None` for `All`
    pub fn days(&self) -> Option<i64> {
        match self {
            DateWindow::Last7 => Some(7),
            DateWindow::Last30 => Some(30),
            DateWindow::Last90 => Some(90),
            DateWindow::All => None,
        }
    }

    /// Window for a day count, if it is one of the supported ones
    pub fn from_days(days: u64) -> Option<Self> {
        match days {
            7 => Some(DateWindow::Last7),
            30 => Some(DateWindow::Last30),
            90 => Some(DateWindow::Last90),
            _ => None,
        }
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        DateWindow::All
    }
}

impl std::str::FromStr for DateWindow {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == "all" {
            return Ok(DateWindow::All);
        }
        normalized
            .parse::<u64>()
            .ok()
            .and_then(DateWindow::from_days)
            .ok_or_else(|| format!("Invalid date window: {}", s))
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.days() {
            Some(days) => write!(f, "{}", days),
            None => write!(f, "all"),
        }
    }
}

impl Serialize for DateWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

struct DateWindowVisitor;

impl<'de> Visitor<'de> for DateWindowVisitor {
    type Value = DateWindow;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "one of 7, 30, 90 or \"all\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        DateWindow::from_days(v)
            .ok_or_else(|| E::custom(format!("Invalid date window: {}", v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map_err(|_| E::custom(format!("Invalid date window: {}", v)))
            .and_then(|days| self.visit_u64(days))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for DateWindow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DateWindowVisitor)
    }
}

/// Currency and date display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// ISO currency code
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Number of decimal places
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Thousands separator
    #[serde(default = "default_thousands_sep")]
    pub thousands_separator: String,
    /// Decimal separator
    #[serde(default = "default_decimal_sep")]
    pub decimal_separator: String,
    /// Currency symbol position ("before" or "after")
    #[serde(default)]
    pub symbol_position: SymbolPosition,
    /// strftime pattern for transaction dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            decimal_places: default_decimal_places(),
            thousands_separator: default_thousands_sep(),
            decimal_separator: default_decimal_sep(),
            symbol_position: SymbolPosition::Before,
            date_format: default_date_format(),
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

fn default_thousands_sep() -> String {
    ",".to_string()
}

fn default_decimal_sep() -> String {
    ".".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

/// Currency symbol position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

impl Default for SymbolPosition {
    fn default() -> Self {
        SymbolPosition::Before
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Snapshot data settings
    #[serde(default)]
    pub data: DataConfig,
    /// Default filter criteria
    #[serde(default)]
    pub filters: FilterDefaults,
    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path });
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::Unreadable { path: path.clone(), source })?;

        let config = Self::from_yaml(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from YAML text without validating it
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.data.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "data.poll_interval_secs".to_string(),
                reason: "Poll interval must be greater than 0".to_string(),
            });
        }

        if self.display.decimal_places > 10 {
            return Err(ConfigError::InvalidValue {
                field: "display.decimal_places".to_string(),
                reason: "Decimal places must be between 0 and 10".to_string(),
            });
        }

        if self.display.currency.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "display.currency".to_string(),
            });
        }

        if self.display.date_format.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "display.date_format".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Full path to the transfers snapshot
    pub fn transfers_path(&self) -> PathBuf {
        self.data.path.join(&self.data.transfers_file)
    }

    /// Full path to the accounts snapshot
    pub fn accounts_path(&self) -> PathBuf {
        self.data.path.join(&self.data.accounts_file)
    }
}

// ==================== Tests ====================
