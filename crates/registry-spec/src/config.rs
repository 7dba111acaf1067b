//! Top-level transform configuration document.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::options::{TransformOption, dedup};
use crate::transformers::Transformer;

/// Option sets keyed by the name transformers reference them with.
pub type OptionGroupsByName = IndexMap<String, Vec<TransformOption>>;

/// A transform configuration: shared option groups plus the transformers using them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformConfig {
	#[serde(default, deserialize_with = "deserialize_option_groups")]
	pub transform_options: OptionGroupsByName,
	#[serde(default)]
	pub transformers: Vec<Transformer>,
}

impl TransformConfig {
	pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
		serde_json::from_str(content)
	}

	pub fn with_option_group(mut self, name: impl Into<String>, options: Vec<TransformOption>) -> Self {
		self.transform_options.insert(name.into(), dedup(options));
		self
	}

	pub fn with_transformer(mut self, transformer: Transformer) -> Self {
		self.transformers.push(transformer);
		self
	}

	pub fn is_empty(&self) -> bool {
		self.transform_options.is_empty() && self.transformers.is_empty()
	}
}

fn deserialize_option_groups<'de, D>(deserializer: D) -> Result<OptionGroupsByName, D::Error>
where
	D: Deserializer<'de>,
{
	let groups = Option::<OptionGroupsByName>::deserialize(deserializer)?.unwrap_or_default();
	Ok(groups.into_iter().map(|(name, options)| (name, dedup(options))).collect())
}
