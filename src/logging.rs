//! Tracing setup.

use std::io;

use tracing_subscriber::{
	Layer,
	fmt::format::FmtSpan,
	layer::SubscriberExt,
	util::{SubscriberInitExt, TryInitError},
};

use crate::config::TracingConfig;

/// Installs the global tracing subscriber.
///
/// Logs are written to stderr and filtered according to
/// [`TracingConfig::env_filter()`].
pub fn init(config: &TracingConfig) -> Result<(), TryInitError>
{
	let stderr = tracing_subscriber::fmt::layer()
		.with_ansi(config.ansi)
		.with_file(true)
		.with_level(true)
		.with_line_number(true)
		.with_span_events(FmtSpan::CLOSE)
		.with_target(true)
		.with_thread_names(true)
		.with_writer(io::stderr)
		.with_filter(config.env_filter());

	tracing_subscriber::registry().with(stderr).try_init()?;

	info!("initialized tracing");

	Ok(())
}
