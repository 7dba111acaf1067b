//! Generation handle with atomic publication.
//!
//! # Mental model
//!
//! * A [`RegistryData`] is one generation: built off the serving path through
//!   `&mut` registration, then frozen behind an `Arc`.
//! * Readers pin the current generation with [`TransformRegistry::snapshot`]
//!   (or implicitly through the query trait) and never see a half-registered one.
//! * A reload builds a whole new generation and swaps the pointer. Readers
//!   still holding the old `Arc` finish against it.
//!
//! # Concurrency
//!
//! * Reads are wait-free (`ArcSwap` load).
//! * Publication is a single atomic swap; concurrent publishers race and the
//!   last swap wins. There is no merge: generations are replaced, not edited.

use std::sync::Arc;

use arc_swap::ArcSwap;

use super::data::RegistryData;
use crate::config::LoadedConfig;
use crate::error::ErrorSink;
use crate::options::ActualOptions;
use crate::service::TransformServiceRegistry;

/// Atomically replaceable handle to the current registry generation.
pub struct TransformRegistry {
	current: ArcSwap<RegistryData>,
}

impl Default for TransformRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl TransformRegistry {
	/// Creates a handle serving an empty generation.
	pub fn new() -> Self {
		Self::from_data(RegistryData::new())
	}

	pub fn from_data(data: RegistryData) -> Self {
		Self {
			current: ArcSwap::from_pointee(data),
		}
	}

	/// Builds a generation from `configs` and serves it.
	pub fn from_configs(configs: &[LoadedConfig], sink: &dyn ErrorSink) -> Self {
		Self::from_data(build_generation(configs, sink))
	}

	/// Pins the current generation.
	pub fn snapshot(&self) -> Arc<RegistryData> {
		self.current.load_full()
	}

	/// Serves `data` from now on and returns the generation it replaced.
	pub fn publish(&self, data: RegistryData) -> Arc<RegistryData> {
		tracing::debug!(
			domain = "transforms",
			transformers = data.transformer_count(),
			transforms = data.transform_count(),
			"publishing transform registry generation",
		);
		self.current.swap(Arc::new(data))
	}

	/// Builds a new generation from `configs` and publishes it.
	///
	/// Returns the generation it replaced.
	pub fn rebuild(&self, configs: &[LoadedConfig], sink: &dyn ErrorSink) -> Arc<RegistryData> {
		self.publish(build_generation(configs, sink))
	}
}

fn build_generation(configs: &[LoadedConfig], sink: &dyn ErrorSink) -> RegistryData {
	let mut data = RegistryData::new();
	for loaded in configs {
		data.register_config(&loaded.config, &loaded.source.to_string(), sink);
	}
	data
}

impl TransformServiceRegistry for TransformRegistry {
	fn is_supported(
		&self,
		source: &str,
		source_size: i64,
		target: &str,
		actual_options: Option<&ActualOptions>,
		cache_key: Option<&str>,
	) -> bool {
		self.current
			.load()
			.is_supported(source, source_size, target, actual_options, cache_key)
	}

	fn find_max_size(
		&self,
		source: &str,
		target: &str,
		actual_options: Option<&ActualOptions>,
		cache_key: Option<&str>,
	) -> i64 {
		self.current
			.load()
			.find_max_size(source, target, actual_options, cache_key)
	}

	fn find_transformer_name(
		&self,
		source: &str,
		source_size: i64,
		target: &str,
		actual_options: Option<&ActualOptions>,
		cache_key: Option<&str>,
	) -> Option<Arc<str>> {
		self.current
			.load()
			.find_transformer_name(source, source_size, target, actual_options, cache_key)
	}
}
