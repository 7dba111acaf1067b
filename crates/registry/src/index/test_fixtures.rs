use std::cell::RefCell;

use transform_registry_spec::{OptionGroupsByName, SupportedSourceAndTarget, TransformOption, Transformer};

use super::data::RegistryData;
use crate::error::ErrorSink;
use crate::options::ActualOptions;

pub(crate) const GIF: &str = "image/gif";
pub(crate) const JPEG: &str = "image/jpeg";
pub(crate) const PDF: &str = "application/pdf";
pub(crate) const DOC: &str = "application/msword";
pub(crate) const XLS: &str = "application/vnd.ms-excel";
pub(crate) const PPT: &str = "application/vnd.ms-powerpoint";
pub(crate) const MSG: &str = "application/vnd.ms-outlook";
pub(crate) const TXT: &str = "text/plain";

/// Sink that keeps every message for later assertions.
#[derive(Default)]
pub(crate) struct CollectingSink {
	pub(crate) messages: RefCell<Vec<String>>,
}

impl ErrorSink for CollectingSink {
	fn log_error(&self, msg: &str) {
		self.messages.borrow_mut().push(msg.to_owned());
	}
}

pub(crate) fn optional_values(names: &[&str]) -> Vec<TransformOption> {
	names.iter().map(|name| TransformOption::value(*name, false)).collect()
}

pub(crate) fn route(source: &str, target: &str, max_source_size_bytes: i64) -> SupportedSourceAndTarget {
	SupportedSourceAndTarget::new(source, target, max_source_size_bytes)
}

pub(crate) fn transformer(name: &str, option_groups: &[&str], routes: Vec<SupportedSourceAndTarget>) -> Transformer {
	routes.into_iter().fold(
		Transformer::new(name).with_transform_options(option_groups.iter().copied()),
		Transformer::with_route,
	)
}

/// Option values named after the keys, as a caller would send them.
pub(crate) fn actual(names: &[&str]) -> ActualOptions {
	names
		.iter()
		.map(|name| ((*name).to_owned(), format!("value for {name}")))
		.collect()
}

/// A fresh generation with `transformers` registered in order.
pub(crate) fn registry_with(transformers: &[&Transformer], option_groups: &OptionGroupsByName) -> RegistryData {
	let sink = CollectingSink::default();
	let mut data = RegistryData::new();
	for transformer in transformers {
		data.register(transformer, option_groups, "test fixtures", &sink);
	}
	data
}

/// The `page`/`width`/`height` group used by most single-transformer cases.
pub(crate) fn image_option_groups() -> OptionGroupsByName {
	let mut groups = OptionGroupsByName::new();
	groups.insert("options1".into(), optional_values(&["page", "width", "height"]));
	groups
}
