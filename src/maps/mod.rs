//! Maps and their categories.

use csmaps::{GameVersion, ReleaseStatus};
use serde::{Deserialize, Serialize};
use time::Date;

mod id;
pub use id::{CategoryId, MapId, ParseMapIdError};

mod identifier;
pub use identifier::MapIdentifier;

/// A category maps are grouped into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category
{
	pub id: CategoryId,
	pub abbreviation: String,
	pub full_name: String,
}

/// A map in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Map
{
	pub id: MapId,
	pub category_id: CategoryId,

	/// The map's file name, e.g. `de_dust2`.
	///
	/// This is unique across all maps.
	pub name: String,
	pub full_name: String,
	pub version: String,
	pub release_date: Date,
	pub update_date: Date,
	pub status: ReleaseStatus,
	pub max_players: u32,

	/// Path to the map's icon.
	pub icon: String,
	pub target_game_version: GameVersion,
	pub images: Vec<MapImage>,
	pub download_links: Vec<String>,

	/// How far along the map is, in percent.
	///
	/// This is set independently of [`Map::status`].
	#[serde(skip_serializing_if = "Option::is_none")]
	pub progress_percentage: Option<u8>,
}

/// A screenshot in a map's gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapImage
{
	pub url: String,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub caption: Option<String>,
}

impl MapImage
{
	pub fn new(url: impl Into<String>, caption: impl Into<String>) -> Self
	{
		Self { url: url.into(), caption: Some(caption.into()) }
	}
}
