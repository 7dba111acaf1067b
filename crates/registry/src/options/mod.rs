//! Option flattening and capability matching.
//!
//! A transformer's options form a tree of values and groups. For a given
//! request, [`flatten`] walks that tree and collects the options that are in
//! play as a flat `name -> required` map. [`options_match`] then checks the
//! request against the map under a closed-world rule.
//!
//! # Which options are in play
//!
//! A group contributes its direct values when:
//!
//! * it is required and every ancestor is required, or
//! * the request names one of its direct values, or
//! * one of its subgroups contributed (the request reached it transitively).
//!
//! An optional group the request never touches contributes nothing, so its
//! required members cannot fail a match.
//!
//! # Engagement signal
//!
//! [`flatten`] returns whether the group engaged. It is `true` when the group
//! inserted direct values; otherwise it is the result of the *last* subgroup
//! visited, not an OR over all subgroups. Parents only see that value, so a
//! group with no direct values whose last subgroup stayed idle reports idle
//! even if an earlier sibling engaged. Existing capability fixtures rely on
//! this; do not turn it into an accumulation.

use std::collections::HashMap;

use rustc_hash::{FxHashMap, FxHashSet};
use transform_registry_spec::TransformOptionGroup;


/// Request control parameter that never takes part in capability matching.
pub const TIMEOUT: &str = "timeout";

/// Option name/value pairs supplied by a caller.
pub type ActualOptions = HashMap<String, String>;

/// Names of the caller's options, after normalization.
pub type ActualOptionNames<'a> = FxHashSet<&'a str>;

/// Flattened options in play for one request: name to required flag.
pub type PossibleOptions<'a> = FxHashMap<&'a str, bool>;

/// Collects the names of `actual`, dropping [`TIMEOUT`]. `None` is treated as empty.
pub fn actual_option_names(actual: Option<&ActualOptions>) -> ActualOptionNames<'_> {
	actual
		.into_iter()
		.flat_map(|options| options.keys())
		.map(String::as_str)
		.filter(|name| *name != TIMEOUT)
		.collect()
}

/// Adds the options of `group` that are in play for `actual` to `possible`.
///
/// `parent_required` is whether every ancestor of `group` is required; pass
/// `true` for a root. Returns the engagement signal described in the module docs.
pub fn flatten<'a>(
	possible: &mut PossibleOptions<'a>,
	group: &'a TransformOptionGroup,
	parent_required: bool,
	actual: &ActualOptionNames<'_>,
) -> bool {
	if group.is_empty() {
		return false;
	}

	// A required group under an optional parent is not forced in.
	let group_required = group.required && parent_required;

	let mut engaged = false;
	let mut include_values = group.values().any(|value| actual.contains(value.name.as_str()));
	for subgroup in group.groups() {
		engaged = flatten(possible, subgroup, group_required, actual);
		include_values |= engaged;
	}

	if include_values || group_required {
		for value in group.values() {
			engaged = true;
			possible.insert(value.name.as_str(), value.required);
		}
	}

	engaged
}

/// Flattens `options` (a transform's synthetic required root) against `actual`.
pub fn gather_possible_options<'a>(
	options: &'a TransformOptionGroup,
	actual: &ActualOptionNames<'_>,
) -> PossibleOptions<'a> {
	let mut possible = PossibleOptions::default();
	flatten(&mut possible, options, true, actual);
	possible
}

/// Closed-world capability match.
///
/// Every required option in `possible` must be supplied, and every supplied
/// option must be one of `possible`.
pub fn options_match(possible: &PossibleOptions<'_>, actual: &ActualOptionNames<'_>) -> bool {
	let required_supplied = possible
		.iter()
		.filter(|(_, required)| **required)
		.all(|(name, _)| actual.contains(name));

	required_supplied && actual.iter().all(|name| possible.contains_key(name))
}
