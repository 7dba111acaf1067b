use std::cmp::Ordering;
use std::sync::Arc;

use super::cache::TransformList;
use super::data::RegistryData;
use super::transform::{SupportedTransform, cmp_size};
use crate::options::{ActualOptionNames, ActualOptions, actual_option_names, gather_possible_options, options_match};
use crate::service::TransformServiceRegistry;

impl RegistryData {
	/// Resolves the candidates able to transform `source` to `target` with `actual_options`.
	///
	/// The result is ascending by maximum source size with dominated entries
	/// removed (see [`insert_by_size`]). `timeout` never takes part in matching.
	///
	/// When `cache_key` is non-blank the result is cached under
	/// `(cache_key, source)` and a cached list is returned as is, without
	/// looking at `target` or `actual_options` again.
	pub fn resolve(
		&self,
		source: &str,
		target: &str,
		actual_options: Option<&ActualOptions>,
		cache_key: Option<&str>,
	) -> TransformList {
		let cache_key = cache_key.filter(|key| !key.trim().is_empty());

		if let Some(key) = cache_key
			&& let Some(cached) = self.cache.get(key, source)
		{
			return cached;
		}

		let actual = actual_option_names(actual_options);
		let list = self.build_transform_list(source, target, &actual);

		if let Some(key) = cache_key {
			tracing::trace!(domain = "transforms", key, source, target, len = list.len(), "caching resolved transforms");
			self.cache.insert(key, source, list.clone());
		}

		list
	}

	fn build_transform_list(&self, source: &str, target: &str, actual: &ActualOptionNames<'_>) -> TransformList {
		let mut by_size = Vec::new();
		for candidate in self.transforms(source, target) {
			let possible = gather_possible_options(candidate.options(), actual);
			if options_match(&possible, actual) {
				insert_by_size(&mut by_size, candidate.clone());
			}
		}
		by_size.into()
	}
}

/// Inserts `new` into `list`, kept ascending by maximum source size.
///
/// * Goes before the first entry with a strictly larger size.
/// * On an equal size, replaces that entry only if `new` has a numerically
///   lower priority; otherwise `new` is dropped.
/// * After placing `new`, every earlier (smaller) entry whose priority is not
///   better than `new`'s is removed: `new` covers its sizes at least as well.
/// * Appended if it is larger than everything.
pub fn insert_by_size(list: &mut Vec<Arc<SupportedTransform>>, new: Arc<SupportedTransform>) {
	let size = new.max_source_size_bytes();
	let priority = new.priority();

	let Some(at) = list
		.iter()
		.position(|existing| cmp_size(size, existing.max_source_size_bytes()) != Ordering::Greater)
	else {
		list.push(new);
		return;
	};

	if cmp_size(size, list[at].max_source_size_bytes()) == Ordering::Equal {
		if priority >= list[at].priority() {
			return;
		}
		list[at] = new;
	} else {
		list.insert(at, new);
	}

	let placed = list.split_off(at);
	list.retain(|smaller| smaller.priority() < priority);
	list.extend(placed);
}

impl TransformServiceRegistry for RegistryData {
	fn find_max_size(
		&self,
		source: &str,
		target: &str,
		actual_options: Option<&ActualOptions>,
		cache_key: Option<&str>,
	) -> i64 {
		self.resolve(source, target, actual_options, cache_key)
			.last()
			.map_or(0, |transform| transform.max_source_size_bytes())
	}

	fn find_transformer_name(
		&self,
		source: &str,
		source_size: i64,
		target: &str,
		actual_options: Option<&ActualOptions>,
		cache_key: Option<&str>,
	) -> Option<Arc<str>> {
		self.resolve(source, target, actual_options, cache_key)
			.iter()
			.find(|transform| transform.accepts_size(source_size))
			.map(|transform| transform.shared_name())
	}
}
