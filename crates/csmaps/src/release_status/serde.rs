//! Trait implementations for the [`serde`] crate.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::ReleaseStatus;

impl Serialize for ReleaseStatus
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.serialize_i16(serializer)
	}
}

impl<'de> Deserialize<'de> for ReleaseStatus
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Debug, Deserialize)]
		#[serde(untagged)]
		enum Helper
		{
			I16(i16),
			Str(Box<str>),
		}

		Helper::deserialize(deserializer).and_then(|v| match v {
			Helper::I16(value) => Self::try_from(value).map_err(de::Error::custom),
			Helper::Str(value) => value.parse::<Self>().map_err(de::Error::custom),
		})
	}
}

impl ReleaseStatus
{
	/// Serializes a [`ReleaseStatus`] as an integer.
	pub fn serialize_i16<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		i16::from(*self).serialize(serializer)
	}
}

#[cfg(test)]
mod tests
{
	use super::ReleaseStatus;

	#[test]
	fn serializes_as_integer()
	{
		assert_eq!(serde_json::to_string(&ReleaseStatus::InProgress).unwrap(), "1");
	}

	#[test]
	fn deserializes_from_integer_or_string()
	{
		assert_eq!(
			serde_json::from_str::<ReleaseStatus>("2").unwrap(),
			ReleaseStatus::Unavailable,
		);
		assert_eq!(
			serde_json::from_str::<ReleaseStatus>("\"released\"").unwrap(),
			ReleaseStatus::Released,
		);
		assert!(serde_json::from_str::<ReleaseStatus>("7").is_err());
	}
}
