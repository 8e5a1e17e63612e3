use std::num::NonZero;

use derive_more::Debug;
use serde::{Deserialize, Deserializer};
use url::Url;

/// The fallback for [`DatabaseConfig::max_connections`].
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Database configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct DatabaseConfig
{
	/// Connection string for the PostgreSQL database.
	///
	/// If this is absent, the API serves fixture data instead.
	#[debug("{:?}", url.as_ref().map(|url| url.host_str()))]
	pub url: Option<Url>,

	/// The minimum number of pool connections to keep open.
	pub min_connections: u32,

	/// The maximum number of pool connections to open.
	#[serde(deserialize_with = "deserialize_option_u32")]
	pub max_connections: Option<NonZero<u32>>,
}

impl DatabaseConfig
{
	/// Returns the `(min, max)` pool size, making sure `min <= max`.
	pub(crate) fn pool_size(&self) -> (u32, u32)
	{
		let max = self
			.max_connections
			.map_or(DEFAULT_MAX_CONNECTIONS, NonZero::get);

		(self.min_connections.min(max), max)
	}
}

fn deserialize_option_u32<'de, D>(deserializer: D) -> Result<Option<NonZero<u32>>, D::Error>
where
	D: Deserializer<'de>,
{
	<Option<u32> as Deserialize<'de>>::deserialize(deserializer)
		.map(|maybe_num| maybe_num.and_then(NonZero::new))
}
