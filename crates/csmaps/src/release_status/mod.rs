//! The different states a map's release can be in.

use std::str::FromStr;

mod errors;
pub use errors::InvalidReleaseStatus;

cfg_serde! {
	mod serde;
}

cfg_sqlx! {
	mod sqlx;
}

/// The different states a map's release can be in.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseStatus
{
	/// The map has been released and can be downloaded.
	Released = 0,

	/// The map is still being worked on.
	InProgress = 1,

	/// The map has been pulled from the catalog.
	///
	/// Unavailable maps are never returned by lookups.
	Unavailable = 2,
}

impl ReleaseStatus
{
	/// Checks if this status is [Unavailable].
	///
	/// [Unavailable]: ReleaseStatus::Unavailable
	pub const fn is_unavailable(&self) -> bool
	{
		matches!(self, Self::Unavailable)
	}

	/// Returns the string representation of this status.
	pub const fn as_str(&self) -> &'static str
	{
		match self {
			Self::Released => "released",
			Self::InProgress => "in_progress",
			Self::Unavailable => "unavailable",
		}
	}
}

impl From<ReleaseStatus> for i16
{
	fn from(status: ReleaseStatus) -> Self
	{
		status as i16
	}
}

impl TryFrom<i16> for ReleaseStatus
{
	type Error = InvalidReleaseStatus;

	fn try_from(int: i16) -> Result<Self, Self::Error>
	{
		match int {
			0 => Ok(Self::Released),
			1 => Ok(Self::InProgress),
			2 => Ok(Self::Unavailable),
			_ => Err(InvalidReleaseStatus),
		}
	}
}

impl FromStr for ReleaseStatus
{
	type Err = InvalidReleaseStatus;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		if let Ok(int) = value.parse::<i16>() {
			return Self::try_from(int);
		}

		match value {
			"released" => Ok(Self::Released),
			"in_progress" => Ok(Self::InProgress),
			"unavailable" => Ok(Self::Unavailable),
			_ => Err(InvalidReleaseStatus),
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
		assert_eq!(i16::from(ReleaseStatus::Released), 0);
		assert_eq!(i16::from(ReleaseStatus::InProgress), 1);
		assert_eq!(i16::from(ReleaseStatus::Unavailable), 2);
	}

	#[test]
	fn rejects_unknown_codes()
	{
		assert_eq!(ReleaseStatus::try_from(3), Err(InvalidReleaseStatus));
		assert_eq!(ReleaseStatus::try_from(-1), Err(InvalidReleaseStatus));
	}

	#[test]
	fn parses_names_and_numbers()
	{
		assert_eq!("in_progress".parse::<ReleaseStatus>(), Ok(ReleaseStatus::InProgress));
		assert_eq!("2".parse::<ReleaseStatus>(), Ok(ReleaseStatus::Unavailable));
		assert_eq!("InProgress".parse::<ReleaseStatus>(), Err(InvalidReleaseStatus));
	}

	#[test]
	fn only_unavailable_is_unavailable()
	{
		assert!(ReleaseStatus::Unavailable.is_unavailable());
		assert!(!ReleaseStatus::Released.is_unavailable());
		assert!(!ReleaseStatus::InProgress.is_unavailable());
	}
}
