use std::cmp::Ordering;
use std::sync::Arc;

use transform_registry_spec::{TransformOption, TransformOptionGroup, UNLIMITED_SIZE};

/// One registered transformer x route pair.
///
/// Immutable once built; the route index and resolved lists share it by `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedTransform {
	name: Arc<str>,
	options: TransformOptionGroup,
	max_source_size_bytes: i64,
	priority: i32,
}

impl SupportedTransform {
	/// Wraps `options` in a required root so each child's own `required` flag decides.
	pub fn new(name: impl Into<Arc<str>>, options: Vec<TransformOption>, max_source_size_bytes: i64, priority: i32) -> Self {
		Self {
			name: name.into(),
			options: TransformOptionGroup::new(true, options),
			max_source_size_bytes,
			priority,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub(crate) fn shared_name(&self) -> Arc<str> {
		self.name.clone()
	}

	pub fn options(&self) -> &TransformOptionGroup {
		&self.options
	}

	pub fn max_source_size_bytes(&self) -> i64 {
		self.max_source_size_bytes
	}

	pub fn priority(&self) -> i32 {
		self.priority
	}

	/// Whether a source of `size` bytes fits. Negative sizes always fit.
	pub fn accepts_size(&self, size: i64) -> bool {
		self.max_source_size_bytes == UNLIMITED_SIZE || self.max_source_size_bytes >= size
	}
}

/// Orders size limits with [`UNLIMITED_SIZE`] above every finite size.
pub fn cmp_size(a: i64, b: i64) -> Ordering {
	match (a == UNLIMITED_SIZE, b == UNLIMITED_SIZE) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => a.cmp(&b),
	}
}
