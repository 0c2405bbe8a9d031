//! Analysis configuration types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::error::{ConfigError, ConfigResult};
use crate::shared::constants::fixpoint::{DEFAULT_MAX_SWEEPS, MAX_SWEEPS_LIMIT};

/// Supported configuration file versions
const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Diagram output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Only write the `.dot` source, no layout tool
    #[default]
    Dot,
    Png,
    Svg,
    Pdf,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }

    /// True when the layout tool has to be invoked
    pub fn needs_layout(&self) -> bool {
        !matches!(self, Self::Dot)
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" => Ok(Self::Dot),
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagram rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Render diagrams at all
    pub enabled: bool,

    /// Output file prefix; files are `<prefix>-cfg.<ext>` and so on
    pub prefix: String,

    /// Output format
    pub format: OutputFormat,

    /// Also draw the plain and the label-annotated AST
    pub ast_diagrams: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            prefix: "dflow".to_string(),
            format: OutputFormat::Dot,
            ast_diagrams: true,
        }
    }
}

/// Text emission settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    /// Spaces per nesting level
    pub indent: usize,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Complete analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Bound on fixpoint sweeps, and on the inner iterations of a loop, that
    /// still change a set. The confirming sweep is free, so 1 is enough for
    /// straight-line code. Exceeding it means the analysis lattice is broken.
    pub max_sweeps: usize,

    pub render: RenderConfig,

    pub emit: EmitConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_sweeps: DEFAULT_MAX_SWEEPS,
            render: RenderConfig::default(),
            emit: EmitConfig::default(),
        }
    }
}

/// On-disk layout: version header plus the configuration body
#[derive(Debug, Serialize, Deserialize)]
struct ConfigFileV1 {
    version: Option<u32>,
    #[serde(flatten)]
    config: AnalysisConfig,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Enable rendering with the given prefix and format
    pub fn render_to(mut self, prefix: impl Into<String>, format: OutputFormat) -> Self {
        self.render.enabled = true;
        self.render.prefix = prefix.into();
        self.render.format = format;
        self
    }

    pub fn ast_diagrams(mut self, enabled: bool) -> Self {
        self.render.ast_diagrams = enabled;
        self
    }

    pub fn indent(mut self, indent: usize) -> Self {
        self.emit.indent = indent;
        self
    }

    /// Range checks
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_sweeps == 0 || self.max_sweeps > MAX_SWEEPS_LIMIT {
            return Err(ConfigError::out_of_range(
                "max_sweeps",
                self.max_sweeps,
                1..=MAX_SWEEPS_LIMIT,
                "counts sweeps that still change a set; straight-line code needs one",
            ));
        }

        if self.emit.indent > 16 {
            return Err(ConfigError::out_of_range(
                "emit.indent",
                self.emit.indent,
                0..=16,
                "spaces added per nesting level",
            ));
        }

        if self.render.enabled && self.render.prefix.trim().is_empty() {
            return Err(ConfigError::EmptyField {
                field: "render.prefix".to_string(),
            });
        }

        Ok(())
    }

    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        match file.version {
            None => return Err(ConfigError::MissingVersion),
            Some(v) if !SUPPORTED_VERSIONS.contains(&v) => {
                return Err(ConfigError::UnsupportedVersion {
                    found: v,
                    supported: SUPPORTED_VERSIONS.to_vec(),
                });
            }
            Some(_) => {}
        }

        file.config.validate()?;
        Ok(file.config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            config: self.clone(),
        };
        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }
}
