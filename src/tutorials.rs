//! Tutorials.

use csmaps::GameVersion;
use serde::Serialize;
use time::Date;

/// A markdown tutorial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial
{
	/// The tutorial's slug, e.g. `play-your-own-addon-map`.
	///
	/// This is unique across all tutorials and used in URLs.
	pub hash_key: String,
	pub title: String,

	/// The tutorial's body, as markdown.
	pub content: String,
	pub creation_date: Date,
	pub last_update_date: Date,
	pub thumbnail: String,
	pub target_game_version: GameVersion,

	/// Drafts are never listed, but can still be opened via a direct link.
	pub is_draft: bool,
}
