use std::sync::Arc;

use transform_registry_spec::{OptionGroupsByName, TransformConfig, TransformOption, TransformOptionGroup, Transformer};

use super::data::RegistryData;
use super::transform::SupportedTransform;
use crate::error::ErrorSink;

impl RegistryData {
	/// Registers every transformer of `config` against the config's own option groups.
	///
	/// `read_from` describes where the config came from and only appears in
	/// error messages.
	pub fn register_config(&mut self, config: &TransformConfig, read_from: &str, sink: &dyn ErrorSink) {
		for transformer in &config.transformers {
			self.register(transformer, &config.transform_options, read_from, sink);
		}
		tracing::debug!(
			domain = "transforms",
			read_from,
			transformers = config.transformers.len(),
			totals = %self,
			"registered transform config",
		);
	}

	/// Registers one transformer: one [`SupportedTransform`] per supported route.
	///
	/// Option group names missing from `option_groups` are reported to `sink`
	/// and skipped; the rest of the transformer is still registered.
	pub fn register(
		&mut self,
		transformer: &Transformer,
		option_groups: &OptionGroupsByName,
		read_from: &str,
		sink: &dyn ErrorSink,
	) {
		self.transformer_count += 1;

		let names = transformer.transform_options.iter().map(String::as_str);
		let options = lookup_transform_options(names, option_groups, read_from, sink);
		let name: Arc<str> = Arc::from(transformer.transformer_name.as_str());

		for route in &transformer.supported_source_and_target_list {
			let transform = SupportedTransform::new(
				name.clone(),
				options.clone(),
				route.max_source_size_bytes,
				route.priority,
			);
			self.routes
				.entry(route.source_media_type.clone())
				.or_default()
				.entry(route.target_media_type.clone())
				.or_default()
				.push(Arc::new(transform));
			self.transform_count += 1;
		}
	}
}

/// Merges the named option groups into one option set.
///
/// Each group becomes an optional subgroup, deduplicated structurally. A single
/// surviving group is unwrapped so its children sit directly under the
/// transform's root.
pub(crate) fn lookup_transform_options<'a>(
	names: impl IntoIterator<Item = &'a str>,
	option_groups: &OptionGroupsByName,
	read_from: &str,
	sink: &dyn ErrorSink,
) -> Vec<TransformOption> {
	let mut groups: Vec<TransformOption> = Vec::new();
	for name in names {
		let Some(options) = option_groups.get(name) else {
			sink.log_error(&format!(
				"transformOptions in {read_from} with the name {name} does not exist. Ignored"
			));
			continue;
		};
		let group = TransformOption::Group(TransformOptionGroup::new(false, options.clone()));
		if !groups.contains(&group) {
			groups.push(group);
		}
	}

	if groups.len() == 1
		&& let Some(TransformOption::Group(group)) = groups.pop()
	{
		return group.options;
	}
	groups
}
