//! TOML configuration for the orbitcloud command line tool.

use orbitcloud_algorithms::{AxesParams, GeneratorParams};
use orbitcloud_io::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration.
///
/// Every section falls back to its defaults when omitted, so an empty file
/// reproduces the built-in demo scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorParams,
    pub axes: AxesConfig,
    pub output: OutputConfig,
}

/// Reference axes section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    pub enabled: bool,
    pub length: f64,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            length: AxesParams::default().length,
        }
    }
}

impl AxesConfig {
    /// Axes parameters, or `None` when axes are disabled.
    pub fn params(&self) -> Option<AxesParams> {
        self.enabled.then_some(AxesParams { length: self.length })
    }
}

/// Where the scene goes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Option<OutputKind>,
    pub path: Option<PathBuf>,
}

/// Output kinds accepted in config and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Ply,
    Csv,
    Xyz,
    Json,
    /// Log marker statistics instead of writing a file.
    Summary,
}

impl OutputKind {
    /// The file format behind this kind, `None` for [`OutputKind::Summary`].
    pub fn file_format(&self) -> Option<OutputFormat> {
        match self {
            OutputKind::Ply => Some(OutputFormat::Ply),
            OutputKind::Csv => Some(OutputFormat::Csv),
            OutputKind::Xyz => Some(OutputFormat::Xyz),
            OutputKind::Json => Some(OutputFormat::Json),
            OutputKind::Summary => None,
        }
    }
}

impl From<OutputFormat> for OutputKind {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Ply => OutputKind::Ply,
            OutputFormat::Csv => OutputKind::Csv,
            OutputFormat::Xyz => OutputKind::Xyz,
            OutputFormat::Json => OutputKind::Json,
        }
    }
}

/// Resolved output target.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    File { format: OutputFormat, path: PathBuf },
    Summary,
}

impl OutputConfig {
    /// Pick the output target.
    ///
    /// An explicit format wins; otherwise the path extension decides; with
    /// neither, the scene is only summarized. File formats without a path
    /// write `scene.<ext>` in the working directory.
    pub fn resolve(&self) -> Result<OutputTarget, ConfigError> {
        let kind = match (self.format, &self.path) {
            (Some(kind), _) => kind,
            (None, Some(path)) => OutputFormat::from_path(path)
                .map(OutputKind::from)
                .map_err(|e| ConfigError::Invalid(e.to_string()))?,
            (None, None) => OutputKind::Summary,
        };

        Ok(match kind.file_format() {
            Some(format) => OutputTarget::File {
                format,
                path: self
                    .path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(format!("scene.{}", format.extension()))),
            },
            None => OutputTarget::Summary,
        })
    }
}

impl AppConfig {
    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if let Some(axes) = self.axes.params() {
            axes.validate()
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }

        Ok(())
    }
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a TOML file.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse(&content)?;
    info!("loaded config from {}", path.display());
    debug!(?config, "effective file config");
    Ok(config)
}
