//! Runtime configuration: `riskmap.toml` format, discovery, and defaults.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{RiskmapError, RiskmapResult};

/// Config file looked up in the working directory when no explicit path is
/// given.
pub const CONFIG_FILE: &str = "riskmap.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskmapConfig {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Input parsing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Header of the column identifying the worker
    #[serde(default = "default_name_column")]
    pub name_column: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            name_column: default_name_column(),
        }
    }
}

fn default_name_column() -> String {
    "Nombre Completo del trabajador".to_string()
}

/// Per-worker report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Organizational unit shown in every report header
    #[serde(default = "default_area")]
    pub area: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            area: default_area(),
        }
    }
}

fn default_area() -> String {
    "Área por definir".to_string()
}

/// Output naming configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File name of the summary artifact; the extension follows the chosen
    /// format
    #[serde(default = "default_summary_filename")]
    pub summary_filename: String,

    /// Directory the per-worker reports are written into
    #[serde(default = "default_reports_dirname")]
    pub reports_dirname: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summary_filename: default_summary_filename(),
            reports_dirname: default_reports_dirname(),
        }
    }
}

fn default_summary_filename() -> String {
    "resultados_evaluacion_psicosocial.csv".to_string()
}

fn default_reports_dirname() -> String {
    "resultados_individuales".to_string()
}

impl RiskmapConfig {
    /// Load configuration.
    ///
    /// An explicitly passed path must exist and parse; those errors are
    /// fatal. Without one, `riskmap.toml` in the working directory is used
    /// when present, and a missing or malformed discovered file falls back
    /// to defaults (malformed with a warning).
    pub fn load(explicit: Option<&Path>) -> RiskmapResult<Self> {
        match explicit {
            Some(path) => Self::load_explicit(path),
            None => Ok(Self::discover()),
        }
    }

    fn load_explicit(path: &Path) -> RiskmapResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents).map_err(|err| {
            RiskmapError::Config(format!("failed to parse {}: {err}", path.display()))
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    fn discover() -> Self {
        let path = Path::new(CONFIG_FILE);
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("failed to read {}: {err}", path.display());
                }
                return Self::default();
            }
        };
        match toml::from_str(&contents) {
            Ok(config) => {
                debug!("loaded config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("ignoring malformed {}: {err}. Using defaults.", path.display());
                Self::default()
            }
        }
    }
}
