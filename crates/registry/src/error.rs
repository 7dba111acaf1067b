use std::path::PathBuf;

/// Reports a non-fatal problem found while registering configuration.
///
/// Registration never fails: a bad fragment is reported here and skipped.
pub trait ErrorSink {
	fn log_error(&self, msg: &str);
}

impl<F> ErrorSink for F
where
	F: Fn(&str),
{
	fn log_error(&self, msg: &str) {
		self(msg)
	}
}

/// Default sink: emits each message as a `tracing` error event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
	fn log_error(&self, msg: &str) {
		tracing::error!(domain = "transforms", "{msg}");
	}
}

/// Errors loading a transform configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse transform config from {origin}: {error}")]
	Parse {
		origin: String,
		#[source]
		error: serde_json::Error,
	},
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
