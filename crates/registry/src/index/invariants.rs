use std::cmp::Ordering;
use std::sync::Arc;

use proptest::prelude::*;
use transform_registry_spec::{OptionGroupsByName, TransformConfig};

use super::test_fixtures::{CollectingSink, DOC, GIF, JPEG, route, transformer};
use super::{RegistryData, SupportedTransform, TransformRegistry, cmp_size, insert_by_size};
use crate::service::TransformServiceRegistry;

fn candidate(index: usize, size: i64, priority: i32) -> Arc<SupportedTransform> {
	Arc::new(SupportedTransform::new(format!("t{index}"), Vec::new(), size, priority))
}

fn size_strategy() -> impl Strategy<Value = i64> {
	prop_oneof![Just(-1_i64), 0_i64..8, Just(100_i64)]
}

fn insertion_index(transform: &SupportedTransform) -> usize {
	transform.name()[1..].parse().expect("candidate names are t<index>")
}

/// Invariant: a resolved list is strictly ascending by size and never keeps an
/// entry that a later-inserted, larger entry covers at an equal or better priority.
pub(crate) fn inv_resolved_list_non_redundant(candidates: &[(i64, i32)]) {
	let mut list = Vec::new();
	for (index, (size, priority)) in candidates.iter().enumerate() {
		insert_by_size(&mut list, candidate(index, *size, *priority));
	}

	for pair in list.windows(2) {
		assert_eq!(
			cmp_size(pair[0].max_source_size_bytes(), pair[1].max_source_size_bytes()),
			Ordering::Less,
			"sizes not strictly ascending: {list:?}"
		);
	}
	for (at, smaller) in list.iter().enumerate() {
		for larger in &list[at + 1..] {
			if insertion_index(larger) > insertion_index(smaller) {
				assert!(smaller.priority() < larger.priority(), "dominated entry kept: {list:?}");
			}
		}
	}

	// The largest size is never pruned and keeps its best priority.
	if let Some(largest) = list.last() {
		let best = candidates
			.iter()
			.filter(|(size, _)| cmp_size(*size, largest.max_source_size_bytes()) == Ordering::Equal)
			.map(|(_, priority)| *priority)
			.min();
		assert_eq!(best, Some(largest.priority()));
		let widest = candidates
			.iter()
			.map(|(size, _)| *size)
			.max_by(|a, b| cmp_size(*a, *b));
		assert_eq!(widest, Some(largest.max_source_size_bytes()));
	} else {
		assert!(candidates.is_empty());
	}
}

proptest! {
	#[test]
	fn test_resolved_list_non_redundant(
		candidates in prop::collection::vec((size_strategy(), 0_i32..5), 0..12),
	) {
		inv_resolved_list_non_redundant(&candidates);
	}
}

/// Invariant: a cached list is served for the rest of the generation, even
/// after more transformers are registered into it.
pub(crate) fn inv_cache_survives_registration() {
	let groups = OptionGroupsByName::new();
	let sink = CollectingSink::default();
	let mut data = RegistryData::new();
	data.register(&transformer("small", &[], vec![route(DOC, GIF, 100)]), &groups, "first", &sink);
	assert_eq!(data.find_max_size(DOC, GIF, None, Some("doclib")), 100);

	data.register(&transformer("large", &[], vec![route(DOC, GIF, -1)]), &groups, "second", &sink);
	assert_eq!(data.find_max_size(DOC, GIF, None, Some("doclib")), 100);
	assert_eq!(data.find_max_size(DOC, GIF, None, None), -1);
}

#[cfg_attr(test, test)]
pub(crate) fn test_cache_survives_registration() {
	inv_cache_survives_registration()
}

/// Invariant: publishing a generation never changes one a reader already pinned.
pub(crate) fn inv_snapshot_pinned_across_publish() {
	let sink = CollectingSink::default();
	let mut first = RegistryData::new();
	first.register_config(
		&TransformConfig::default().with_transformer(transformer("first", &[], vec![route(DOC, GIF, -1)])),
		"first",
		&sink,
	);
	let registry = TransformRegistry::from_data(first);

	let pinned = registry.snapshot();
	let replaced = registry.publish(RegistryData::new());

	assert!(Arc::ptr_eq(&pinned, &replaced));
	assert!(pinned.is_supported(DOC, 1024, GIF, None, None));
	assert!(!registry.is_supported(DOC, 1024, GIF, None, None));
	assert!(!pinned.is_supported(DOC, 1024, JPEG, None, None));
}

#[cfg_attr(test, test)]
pub(crate) fn test_snapshot_pinned_across_publish() {
	inv_snapshot_pinned_across_publish()
}
