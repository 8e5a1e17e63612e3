//! The game a map or tutorial was made for.

use std::{fmt, str::FromStr};

mod errors;
pub use errors::InvalidGameVersion;

cfg_serde! {
	mod serde;
}

cfg_sqlx! {
	mod sqlx;
}

/// The game a map or tutorial was made for.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameVersion
{
	/// Counter-Strike 1.6
	CS16 = 0,

	/// Counter-Strike 2
	CS2 = 1,
}

impl GameVersion
{
	/// Returns the string representation of this game version.
	pub const fn as_str(&self) -> &'static str
	{
		match self {
			Self::CS16 => "cs1.6",
			Self::CS2 => "cs2",
		}
	}
}

impl fmt::Display for GameVersion
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt.write_str(match self {
			Self::CS16 => "Counter-Strike 1.6",
			Self::CS2 => "Counter-Strike 2",
		})
	}
}

impl From<GameVersion> for i16
{
	fn from(version: GameVersion) -> Self
	{
		version as i16
	}
}

impl TryFrom<i16> for GameVersion
{
	type Error = InvalidGameVersion;

	fn try_from(int: i16) -> Result<Self, Self::Error>
	{
		match int {
			0 => Ok(Self::CS16),
			1 => Ok(Self::CS2),
			_ => Err(InvalidGameVersion),
		}
	}
}

impl FromStr for GameVersion
{
	type Err = InvalidGameVersion;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		if let Ok(int) = value.parse::<i16>() {
			return Self::try_from(int);
		}

		match value {
			"cs1.6" | "cs16" => Ok(Self::CS16),
			"cs2" => Ok(Self::CS2),
			_ => Err(InvalidGameVersion),
		}
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn integer_codes_match_the_schema()
	{
		assert_eq!(i16::from(GameVersion::CS16), 0);
		assert_eq!(i16::from(GameVersion::CS2), 1);
		assert_eq!(GameVersion::try_from(2), Err(InvalidGameVersion));
	}

	#[test]
	fn parses_short_names()
	{
		assert_eq!("cs1.6".parse::<GameVersion>(), Ok(GameVersion::CS16));
		assert_eq!("cs16".parse::<GameVersion>(), Ok(GameVersion::CS16));
		assert_eq!("cs2".parse::<GameVersion>(), Ok(GameVersion::CS2));
		assert_eq!("csgo".parse::<GameVersion>(), Err(InvalidGameVersion));
	}

	#[test]
	fn display_uses_full_title()
	{
		assert_eq!(GameVersion::CS2.to_string(), "Counter-Strike 2");
	}
}
