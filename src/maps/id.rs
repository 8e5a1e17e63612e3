use std::{fmt, num::ParseIntError, str::FromStr};

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

/// The primary key of a [`Map`].
///
/// [`Map`]: super::Map
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct MapId(pub i32);

/// The primary key of a [`Category`].
///
/// [`Category`]: super::Category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct CategoryId(pub i32);

#[derive(Debug, Display, Error, From)]
#[display("failed to parse map ID: {_0}")]
pub struct ParseMapIdError(ParseIntError);

impl fmt::Display for MapId
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(&self.0, fmt)
	}
}

impl FromStr for MapId
{
	type Err = ParseMapIdError;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		value.parse::<i32>().map(Self).map_err(ParseMapIdError)
	}
}
