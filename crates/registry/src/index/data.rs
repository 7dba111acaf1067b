use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;

use super::cache::ResolutionCache;
use super::transform::SupportedTransform;

/// Candidates for one source -> target pair, in registration order.
pub type RouteList = Vec<Arc<SupportedTransform>>;

/// One generation of the registry: the route index plus its resolution cache.
///
/// Built through `&mut self` registration, then shared read-only. Queries only
/// need `&self`; the cache fills lazily behind its own lock.
#[derive(Debug, Default)]
pub struct RegistryData {
	pub(super) routes: HashMap<String, HashMap<String, RouteList>>,
	pub(super) cache: ResolutionCache,
	pub(super) transformer_count: usize,
	pub(super) transform_count: usize,
}

impl RegistryData {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registered candidates for `source` -> `target`, in registration order.
	pub fn transforms(&self, source: &str, target: &str) -> &[Arc<SupportedTransform>] {
		self.routes
			.get(source)
			.and_then(|targets| targets.get(target))
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	/// Target media types registered for `source`.
	pub fn targets(&self, source: &str) -> impl Iterator<Item = &str> {
		self.routes
			.get(source)
			.into_iter()
			.flat_map(|targets| targets.keys().map(String::as_str))
	}

	pub fn cache(&self) -> &ResolutionCache {
		&self.cache
	}

	/// Number of transformers registered into this generation.
	pub fn transformer_count(&self) -> usize {
		self.transformer_count
	}

	/// Number of transformer x route pairs registered into this generation.
	pub fn transform_count(&self) -> usize {
		self.transform_count
	}

	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

impl fmt::Display for RegistryData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.transformer_count == 0 && self.transform_count == 0 {
			return Ok(());
		}
		write!(
			f,
			"(transformers: {} transforms: {})",
			self.transformer_count, self.transform_count
		)
	}
}
