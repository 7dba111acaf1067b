//! Transform capability registry.
//!
//! Answers, per request, whether a source media type of a given size can be
//! transformed into a target media type with a given set of options, which
//! transformer should do it, and the largest source any match accepts.
//!
//! # Modules
//!
//! - [`options`] - Option tree flattening and closed-world matching
//! - [`index`] - Route index, domination ordering, resolution cache, generations
//! - [`config`] - Loading JSON transform configs from files and directories
//! - [`service`] - The query trait request routing depends on
//! - [`error`] - Error sink for registration problems and config load errors
//!
//! # Usage
//!
//! Load configs, build a [`TransformRegistry`], and query it through
//! [`TransformServiceRegistry`]. On reload, [`TransformRegistry::rebuild`]
//! publishes a fresh generation; queries in flight finish against the old one.

pub mod config;
pub mod error;
pub mod index;
pub mod options;
pub mod service;

pub use config::{ConfigLoadReport, ConfigSource, LoadedConfig, load_config_dir, load_config_file, parse_config_str};
pub use error::{ConfigError, ErrorSink, TracingErrorSink};
pub use index::{RegistryData, ResolutionCache, SupportedTransform, TransformList, TransformRegistry};
pub use options::{ActualOptions, TIMEOUT};
pub use service::TransformServiceRegistry;
pub use transform_registry_spec as spec;
