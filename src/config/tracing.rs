use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct TracingConfig
{
	/// Whether to emit ANSI escape codes for colors.
	pub ansi: bool,

	/// Default filter directives, used if `RUST_LOG` is not set.
	///
	/// See [`EnvFilter`] for the syntax.
	pub filter: String,
}

impl TracingConfig
{
	/// Returns the filter logs are checked against.
	///
	/// `RUST_LOG` takes precedence over the configured directives.
	pub fn env_filter(&self) -> EnvFilter
	{
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.filter))
	}
}

impl Default for TracingConfig
{
	fn default() -> Self
	{
		Self {
			ansi: true,
			filter: String::from("warn,csmaps_api=info,tower_http=info"),
		}
	}
}
