//! Transform configuration sources.
//!
//! Configs are JSON documents in the [`TransformConfig`] schema. Each loaded
//! config keeps its [`ConfigSource`] so registration errors can say where a
//! bad reference came from.

use std::fmt;
use std::path::{Path, PathBuf};

use transform_registry_spec::TransformConfig;

use crate::error::{ConfigError, Result};

pub mod load;

pub use load::{ConfigLoadReport, load_config_dir};

/// Where a config was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
	File(PathBuf),
	/// Supplied in memory, e.g. built in or fetched by another component.
	Inline(String),
}

impl fmt::Display for ConfigSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigSource::File(path) => write!(f, "{}", path.display()),
			ConfigSource::Inline(label) => f.write_str(label),
		}
	}
}

/// A parsed config together with its source.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	pub source: ConfigSource,
	pub config: TransformConfig,
}

impl LoadedConfig {
	pub fn new(source: ConfigSource, config: TransformConfig) -> Self {
		Self { source, config }
	}
}

/// Parses a config document; `source` only labels errors.
pub fn parse_config_str(content: &str, source: &ConfigSource) -> Result<TransformConfig> {
	TransformConfig::from_json_str(content).map_err(|error| ConfigError::Parse {
		origin: source.to_string(),
		error,
	})
}

/// Reads and parses one config file.
pub fn load_config_file(path: &Path) -> Result<LoadedConfig> {
	let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	let source = ConfigSource::File(path.to_path_buf());
	let config = parse_config_str(&content, &source)?;
	tracing::debug!(
		domain = "transforms",
		path = %path.display(),
		transformers = config.transformers.len(),
		option_groups = config.transform_options.len(),
		"loaded transform config",
	);
	Ok(LoadedConfig::new(source, config))
}
