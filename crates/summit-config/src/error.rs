//! Configuration errors

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Why a configuration could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    /// Stable code for scripts and log filters
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::FileNotFound { .. } => "FILE_NOT_FOUND",
            ConfigError::Unreadable { .. } => "UNREADABLE",
            ConfigError::InvalidYaml(_) => "INVALID_YAML",
            ConfigError::MissingField { .. } => "MISSING_FIELD",
            ConfigError::InvalidValue { .. } => "INVALID_VALUE",
        }
    }

    /// Dotted path of the offending field, when one is known
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::MissingField { field } | ConfigError::InvalidValue { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }

    /// 1-based line and column of a YAML error
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            ConfigError::InvalidYaml(e) => e.location().map(|l| (l.line(), l.column())),
            _ => None,
        }
    }

    /// Everything an operator needs to fix the file
    pub fn to_details(&self) -> ConfigErrorDetails {
        let hints = match self {
            ConfigError::FileNotFound { .. } => vec![
                "Pass --config with the path to your config file.".to_string(),
                "Run with --print-config to get a starting template.".to_string(),
            ],
            ConfigError::Unreadable { .. } => {
                vec!["Check the file permissions.".to_string()]
            }
            ConfigError::InvalidYaml(_) => vec![
                "date_window takes 7, 30, 90 or all; type_filter takes all, income or expense."
                    .to_string(),
            ],
            ConfigError::MissingField { field } => {
                vec![format!("Set '{}' to a non-empty value.", field)]
            }
            ConfigError::InvalidValue { .. } => vec![],
        };

        ConfigErrorDetails {
            code: self.code(),
            message: self.to_string(),
            field: self.field().map(str::to_string),
            location: self.location(),
            hints,
        }
    }
}

/// Printable report of a [`ConfigError`]
#[derive(Debug, Clone, Serialize)]
pub struct ConfigErrorDetails {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<(usize, usize)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

impl std::fmt::Display for ConfigErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some((line, column)) = self.location {
            write!(f, "\n  at line {}, column {}", line, column)?;
        }
        if let Some(field) = &self.field {
            write!(f, "\n  field: {}", field)?;
        }
        for hint in &self.hints {
            write!(f, "\n  hint: {}", hint)?;
        }
        Ok(())
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
