//! Config directory loading.

use std::path::{Path, PathBuf};

use super::{LoadedConfig, load_config_file};
use crate::error::ConfigError;

/// Aggregate result of loading every config in a directory.
#[derive(Debug, Default)]
pub struct ConfigLoadReport {
	/// Configs that loaded, in file name order.
	pub configs: Vec<LoadedConfig>,
	/// Read or parse errors keyed by source file path.
	pub errors: Vec<(PathBuf, ConfigError)>,
}

impl ConfigLoadReport {
	pub fn is_clean(&self) -> bool {
		self.errors.is_empty()
	}
}

/// Loads every `*.json` file directly under `config_dir`, sorted by path.
///
/// One bad file never hides the others: it is recorded in
/// [`ConfigLoadReport::errors`] and loading continues. An unreadable
/// directory is reported the same way.
pub fn load_config_dir(config_dir: &Path) -> ConfigLoadReport {
	let mut report = ConfigLoadReport::default();

	let entries = match std::fs::read_dir(config_dir) {
		Ok(entries) => entries,
		Err(source) => {
			report.errors.push((
				config_dir.to_path_buf(),
				ConfigError::Io {
					path: config_dir.to_path_buf(),
					source,
				},
			));
			return report;
		}
	};

	let mut paths: Vec<PathBuf> = entries
		.filter_map(|entry| entry.ok())
		.map(|entry| entry.path())
		.filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
		.collect();
	paths.sort();

	for path in paths {
		match load_config_file(&path) {
			Ok(config) => report.configs.push(config),
			Err(error) => {
				tracing::warn!(domain = "transforms", path = %path.display(), %error, "skipping transform config");
				report.errors.push((path, error));
			}
		}
	}

	report
}
