//! Transform option tree schema.
//!
//! A transformer advertises the options it understands as a tree: leaves are
//! named values, inner nodes are groups. Either may be required. Groups are
//! sets, so structurally identical children collapse into one.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Deserializer, Serialize};

/// One node of an option tree.
///
/// Serialized externally tagged, e.g. `{"value": {"name": "page"}}` or
/// `{"group": {"required": true, "transformOptions": [...]}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransformOption {
	Value(TransformOptionValue),
	Group(TransformOptionGroup),
}

impl TransformOption {
	pub fn value(name: impl Into<String>, required: bool) -> Self {
		Self::Value(TransformOptionValue::new(name, required))
	}

	pub fn group(required: bool, options: Vec<TransformOption>) -> Self {
		Self::Group(TransformOptionGroup::new(required, options))
	}
}

/// A named option leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransformOptionValue {
	#[serde(default)]
	pub required: bool,
	pub name: String,
}

impl TransformOptionValue {
	pub fn new(name: impl Into<String>, required: bool) -> Self {
		Self {
			required,
			name: name.into(),
		}
	}
}

/// A group of options. Children keep their configured order; duplicates are dropped.
///
/// Equality and hashing treat the children as a set: two groups with the same
/// members in a different order are the same group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformOptionGroup {
	#[serde(default)]
	pub required: bool,
	#[serde(rename = "transformOptions", default, deserialize_with = "deserialize_set")]
	pub options: Vec<TransformOption>,
}

impl TransformOptionGroup {
	pub fn new(required: bool, options: Vec<TransformOption>) -> Self {
		Self {
			required,
			options: dedup(options),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}

	/// Iterates the value leaves that are direct children of this group.
	pub fn values(&self) -> impl Iterator<Item = &TransformOptionValue> {
		self.options.iter().filter_map(|option| match option {
			TransformOption::Value(value) => Some(value),
			TransformOption::Group(_) => None,
		})
	}

	/// Iterates the groups that are direct children of this group.
	pub fn groups(&self) -> impl Iterator<Item = &TransformOptionGroup> {
		self.options.iter().filter_map(|option| match option {
			TransformOption::Value(_) => None,
			TransformOption::Group(group) => Some(group),
		})
	}
}

impl PartialEq for TransformOptionGroup {
	fn eq(&self, other: &Self) -> bool {
		let occurrences = |options: &[TransformOption], option: &TransformOption| {
			options.iter().filter(|candidate| *candidate == option).count()
		};
		self.required == other.required
			&& self.options.len() == other.options.len()
			&& self
				.options
				.iter()
				.all(|option| occurrences(&self.options, option) == occurrences(&other.options, option))
	}
}

impl Eq for TransformOptionGroup {}

impl Hash for TransformOptionGroup {
	fn hash<H: Hasher>(&self, state: &mut H) {
		// Children are summed so their order cannot change the result.
		let children = self.options.iter().fold(0_u64, |sum, option| {
			let mut hasher = FxHasher::default();
			option.hash(&mut hasher);
			sum.wrapping_add(hasher.finish())
		});
		self.required.hash(state);
		self.options.len().hash(state);
		children.hash(state);
	}
}

/// Removes structural duplicates, keeping the first occurrence of each item.
pub fn dedup<T: PartialEq>(items: Vec<T>) -> Vec<T> {
	let mut unique: Vec<T> = Vec::with_capacity(items.len());
	for item in items {
		if !unique.contains(&item) {
			unique.push(item);
		}
	}
	unique
}

/// Deserializes a JSON array with set semantics. `null` reads as empty.
pub(crate) fn deserialize_set<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + PartialEq,
{
	let items = Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default();
	Ok(dedup(items))
}
