//! Errors raised while loading or checking a dflow configuration

use std::ops::RangeInclusive;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Numeric setting outside its accepted bounds
    #[error("{field} = {value} is outside {min}..={max}: {hint}")]
    Range {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
        hint: &'static str,
    },

    #[error("{field} must not be empty")]
    EmptyField { field: String },

    #[error("Unknown output format '{0}'. Valid formats: dot, png, svg, pdf")]
    UnknownFormat(String),

    /// dflow files carry a schema version so later layouts can be told apart
    #[error("dflow config has no 'version' key; start the file with 'version: 1'")]
    MissingVersion,

    #[error("dflow config version {found} is not understood (known: {})", join_versions(supported))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    #[error("cannot read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

fn join_versions(versions: &[u32]) -> String {
    versions
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ConfigError {
    /// `field` holds `value`, which falls outside `accepted`
    pub fn out_of_range(
        field: &'static str,
        value: usize,
        accepted: RangeInclusive<usize>,
        hint: &'static str,
    ) -> Self {
        Self::Range {
            field,
            value,
            min: *accepted.start(),
            max: *accepted.end(),
            hint,
        }
    }
}
