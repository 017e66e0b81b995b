use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stunting_report::ReportOptions;

pub const CONFIG_FILE: &str = "carestunt.toml";
pub const MAX_PRECISION: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("output.precision must be at most {max}, got {0}", max = MAX_PRECISION)]
    Precision(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_precision")]
    pub precision: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default = "default_true")]
    pub advice: bool,
    #[serde(default = "default_true")]
    pub interpretation: bool,
}

fn default_precision() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            advice: true,
            interpretation: true,
        }
    }
}

impl Config {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            advice: self.report.advice,
            interpretation: self.report.interpretation,
        }
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.output.precision > MAX_PRECISION {
            return Err(ConfigError::Precision(self.output.precision));
        }
        Ok(self)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "format={:?} precision={} advice={} interpretation={}",
            self.output.format, self.output.precision, self.report.advice, self.report.interpretation
        )
    }
}

pub fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str::<Config>(text)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?
        .validate()
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text, path)
}

/// Load `explicit` if given, else `carestunt.toml` under `dir` if present,
/// else defaults.
pub fn discover_config(explicit: Option<&Path>, dir: &Path) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        log::info!("loading configuration from {}", path.display());
        return load_config(path);
    }
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
        log::info!("loading configuration from {}", candidate.display());
        return load_config(&candidate);
    }
    log::debug!("no {CONFIG_FILE} found, using defaults");
    Ok(Config::default())
}

pub fn generate_config() -> String {
    let defaults = Config::default();
    let mut out = String::new();
    out.push_str("# carestunt configuration\n");
    out.push_str("\n[output]\n");
    out.push_str("# \"text\" or \"json\"\n");
    out.push_str("format = \"text\"\n");
    out.push_str(&format!(
        "# decimals shown for percentages in text output (0-{MAX_PRECISION})\n"
    ));
    out.push_str(&format!("precision = {}\n", defaults.output.precision));
    out.push_str("\n[report]\n");
    out.push_str("# include recommended follow-up actions\n");
    out.push_str(&format!("advice = {}\n", defaults.report.advice));
    out.push_str("# include the interpretation sentence\n");
    out.push_str(&format!(
        "interpretation = {}\n",
        defaults.report.interpretation
    ));
    out
}
