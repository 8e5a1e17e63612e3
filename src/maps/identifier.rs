use std::fmt;

use serde::{Deserialize, Deserializer};

use super::MapId;

/// A map name or ID, as it appears in `/maps/{map}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapIdentifier
{
	Id(MapId),
	Name(String),
}

impl fmt::Display for MapIdentifier
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		match self {
			Self::Id(id) => fmt::Display::fmt(id, fmt),
			Self::Name(name) => fmt::Display::fmt(name, fmt),
		}
	}
}

impl From<&str> for MapIdentifier
{
	fn from(value: &str) -> Self
	{
		value
			.parse::<MapId>()
			.map_or_else(|_| Self::Name(value.to_owned()), Self::Id)
	}
}

// Path parameters always arrive as strings, so this tries the ID first and
// falls back to treating the value as a name.
impl<'de> Deserialize<'de> for MapIdentifier
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Helper
		{
			Id(MapId),
			Name(String),
		}

		Helper::deserialize(deserializer).map(|v| match v {
			Helper::Id(id) => Self::Id(id),
			Helper::Name(name) => Self::from(name.as_str()),
		})
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn numbers_are_ids()
	{
		assert_eq!(MapIdentifier::from("201"), MapIdentifier::Id(MapId(201)));
	}

	#[test]
	fn everything_else_is_a_name()
	{
		assert_eq!(
			MapIdentifier::from("de_dust2"),
			MapIdentifier::Name(String::from("de_dust2")),
		);
		assert_eq!(
			MapIdentifier::from("2fort"),
			MapIdentifier::Name(String::from("2fort")),
		);
	}
}
