use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;

use super::transform::SupportedTransform;

/// A resolved candidate list: ascending by size, dominated entries removed.
pub type TransformList = Arc<[Arc<SupportedTransform>]>;

/// Resolved lists keyed by cache key (e.g. a rendition name), then source media type.
///
/// A cache key stands for a fixed target and option set, so the target is not
/// part of the key. Entries stay valid for the lifetime of their generation,
/// even if more transformers are registered into it afterwards.
///
/// Get-then-insert is not atomic. Two readers missing together both resolve
/// and both insert; the lists are equal, so the last write is as good as the first.
#[derive(Debug, Default)]
pub struct ResolutionCache {
	lists: RwLock<HashMap<String, HashMap<String, TransformList>>>,
}

impl ResolutionCache {
	pub fn get(&self, key: &str, source: &str) -> Option<TransformList> {
		self.lists.read().get(key)?.get(source).cloned()
	}

	/// Stores `list`, replacing and returning any list already cached for the pair.
	pub fn insert(&self, key: &str, source: &str, list: TransformList) -> Option<TransformList> {
		let mut lists = self.lists.write();
		match lists.get_mut(key) {
			Some(by_source) => by_source.insert(source.to_owned(), list),
			None => {
				let mut by_source = HashMap::default();
				by_source.insert(source.to_owned(), list);
				lists.insert(key.to_owned(), by_source);
				None
			}
		}
	}

	/// Total number of cached (key, source) lists.
	pub fn len(&self) -> usize {
		self.lists.read().values().map(HashMap::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn clear(&self) {
		self.lists.write().clear();
	}
}
