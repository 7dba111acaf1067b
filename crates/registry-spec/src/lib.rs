//! Serializable schema for transform capability configuration.
//!
//! These types describe what a transform engine advertises: option trees,
//! transformers with their supported routes, and the config document that
//! groups them. They carry no resolution logic; see `transform-registry`.

pub mod config;
pub mod options;
pub mod transformers;

pub use config::{OptionGroupsByName, TransformConfig};
pub use options::{TransformOption, TransformOptionGroup, TransformOptionValue};
pub use transformers::{
	DEFAULT_PRIORITY, SupportedSourceAndTarget, TransformStep, Transformer, UNLIMITED_SIZE,
};
