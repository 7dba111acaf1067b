//! Route index and resolution engine.
//!
//! # Purpose
//!
//! Indexes every registered transformer by the routes it supports and answers
//! "who can turn this into that, under these options, at this size".
//!
//! # Mental Model
//!
//! 1. **Registration:** [`RegistryData::register_config`] expands each transformer
//!    into one [`SupportedTransform`] per route, sharing the merged option tree.
//! 2. **Resolution:** [`RegistryData::resolve`] flattens every candidate for a
//!    route against the caller's options, keeps the ones that match, and folds
//!    them into a size-ascending list with [`insert_by_size`].
//! 3. **Caching:** With a non-blank cache key the resolved list is remembered
//!    per `(cache_key, source)` in the generation's [`ResolutionCache`].
//! 4. **Publication:** [`TransformRegistry`] serves one immutable generation at
//!    a time and swaps in a rebuilt one on reload.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`SupportedTransform`] | One transformer x route: name, option tree, size limit, priority. |
//! | [`RegistryData`] | One generation: route index, counters, resolution cache. |
//! | [`ResolutionCache`] | Resolved lists keyed by cache key and source media type. |
//! | [`TransformRegistry`] | Atomically replaceable handle to the current generation. |
//!
//! # Invariants
//!
//! - A resolved list is strictly ascending by size, and no entry survives once a
//!   larger entry with an equal or better priority is inserted after it.
//!   - Enforced in: [`insert_by_size`].
//!   - Tested by: `invariants::test_resolved_list_non_redundant`
//!   - Failure symptom: A lower-preference transformer is picked for a size a better one covers.
//!
//! - A cached list is served unchanged for the life of its generation.
//!   - Enforced in: [`ResolutionCache`] (no invalidation on registration).
//!   - Tested by: `invariants::test_cache_survives_registration`
//!   - Failure symptom: Cached answers change without a reload.
//!
//! - A pinned generation is never mutated by publication.
//!   - Enforced in: [`TransformRegistry::publish`] (pointer swap only).
//!   - Tested by: `invariants::test_snapshot_pinned_across_publish`
//!   - Failure symptom: A reader observes a half-built or mixed registry.

mod build;
mod cache;
mod data;
mod resolve;
mod runtime;
mod transform;

pub use cache::{ResolutionCache, TransformList};
pub use data::{RegistryData, RouteList};
pub use resolve::insert_by_size;
pub use runtime::TransformRegistry;
pub use transform::{SupportedTransform, cmp_size};

#[cfg(test)]
mod invariants;

#[cfg(test)]
pub(crate) mod test_fixtures;
