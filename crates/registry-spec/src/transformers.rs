//! Transformer definition schema.
//!
//! Declares which source/target media type pairs a transformer supports, the
//! option groups it understands, and (for pipelines) the steps it chains.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::options::deserialize_set;

/// Size limit meaning "no limit". Sorts above every finite size.
pub const UNLIMITED_SIZE: i64 = -1;

/// Route priority used when the config does not give one. Lower is preferred.
pub const DEFAULT_PRIORITY: i32 = 50;

fn unlimited_size() -> i64 {
	UNLIMITED_SIZE
}

fn default_priority() -> i32 {
	DEFAULT_PRIORITY
}

/// A supported source -> target route with its size limit and priority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedSourceAndTarget {
	pub source_media_type: String,
	pub target_media_type: String,
	#[serde(default = "unlimited_size")]
	pub max_source_size_bytes: i64,
	#[serde(default = "default_priority")]
	pub priority: i32,
}

impl SupportedSourceAndTarget {
	pub fn new(source: impl Into<String>, target: impl Into<String>, max_source_size_bytes: i64) -> Self {
		Self {
			source_media_type: source.into(),
			target_media_type: target.into(),
			max_source_size_bytes,
			priority: DEFAULT_PRIORITY,
		}
	}

	pub fn with_priority(mut self, priority: i32) -> Self {
		self.priority = priority;
		self
	}
}

/// One step of a pipeline transformer. Metadata only; the registry never runs it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformStep {
	pub transformer_name: String,
	pub target_media_type: String,
}

impl TransformStep {
	pub fn new(transformer_name: impl Into<String>, target_media_type: impl Into<String>) -> Self {
		Self {
			transformer_name: transformer_name.into(),
			target_media_type: target_media_type.into(),
		}
	}
}

/// A transformer as declared in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transformer {
	pub transformer_name: String,
	/// Names of option groups in the owning config's `transformOptions` map.
	#[serde(default, deserialize_with = "deserialize_names")]
	pub transform_options: IndexSet<String>,
	#[serde(default, deserialize_with = "deserialize_set")]
	pub supported_source_and_target_list: Vec<SupportedSourceAndTarget>,
	#[serde(default)]
	pub transformer_pipeline: Vec<TransformStep>,
}

impl Transformer {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			transformer_name: name.into(),
			..Self::default()
		}
	}

	pub fn with_transform_options<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.transform_options = names.into_iter().map(Into::into).collect();
		self
	}

	/// Adds a route unless an identical one is already declared.
	pub fn with_route(mut self, route: SupportedSourceAndTarget) -> Self {
		if !self.supported_source_and_target_list.contains(&route) {
			self.supported_source_and_target_list.push(route);
		}
		self
	}

	pub fn with_pipeline(mut self, steps: Vec<TransformStep>) -> Self {
		self.transformer_pipeline = steps;
		self
	}

	pub fn is_pipeline(&self) -> bool {
		!self.transformer_pipeline.is_empty()
	}
}

/// `transformOptions` may be `null` in older configs.
fn deserialize_names<'de, D>(deserializer: D) -> Result<IndexSet<String>, D::Error>
where
	D: serde::Deserializer<'de>,
{
	Option::<IndexSet<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
