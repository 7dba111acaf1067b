use std::sync::Arc;

use transform_registry_spec::UNLIMITED_SIZE;

use crate::options::ActualOptions;

/// Query surface used by request routing to decide whether, and by whom, a transform is handled.
///
/// `actual_options` are the option name/value pairs the caller would send;
/// `None` means none. `cache_key` optionally names a fixed target and option
/// set (e.g. a rendition) so repeated queries reuse the resolved candidates.
pub trait TransformServiceRegistry {
	/// Whether a source of `source_size` bytes can be transformed. A negative size is ignored.
	fn is_supported(
		&self,
		source: &str,
		source_size: i64,
		target: &str,
		actual_options: Option<&ActualOptions>,
		cache_key: Option<&str>,
	) -> bool {
		let max_size = self.find_max_size(source, target, actual_options, cache_key);
		max_size != 0 && (max_size == UNLIMITED_SIZE || max_size >= source_size)
	}

	/// Largest source size any matching transformer accepts.
	///
	/// [`UNLIMITED_SIZE`] when there is no limit, `0` when nothing matches.
	fn find_max_size(
		&self,
		source: &str,
		target: &str,
		actual_options: Option<&ActualOptions>,
		cache_key: Option<&str>,
	) -> i64;

	/// Name of the preferred transformer for a source of `source_size` bytes, if any.
	fn find_transformer_name(
		&self,
		source: &str,
		source_size: i64,
		target: &str,
		actual_options: Option<&ActualOptions>,
		cache_key: Option<&str>,
	) -> Option<Arc<str>>;
}
