use csmaps::{GameVersion, ReleaseStatus};
use time::macros::date;

use super::{DatabaseResult, MapDatabase};
use crate::maps::{Category, CategoryId, Map, MapId, MapImage};
use crate::statistics::Statistics;
use crate::tutorials::Tutorial;

/// A [`MapDatabase`] serving hard-coded data.
///
/// Used for local development, whenever no database is configured. Lookups
/// ignore their argument and return the single fixture record, and
/// [`statistics()`] returns fixed numbers that have nothing to do with the
/// records returned by the other operations.
///
/// [`statistics()`]: MapDatabase::statistics
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDatabase;

impl FixtureDatabase
{
	fn map() -> Map
	{
		Map {
			id: MapId(201),
			category_id: CategoryId(3),
			name: String::from("de_taxi_plaza"),
			full_name: String::from("Battle at Plaza"),
			version: String::from("0.01"),
			release_date: date!(2024 - 02 - 25),
			update_date: date!(2024 - 02 - 25),
			status: ReleaseStatus::InProgress,
			max_players: 10,
			icon: String::from("/csmaps/icon201.jpg"),
			target_game_version: GameVersion::CS2,
			images: vec![
				MapImage::new(
					"https://live.staticflickr.com/65535/53526262316_f541a34e77_o_d.jpg",
					"Terrorist Spawn",
				),
				MapImage::new(
					"https://live.staticflickr.com/65535/53526578144_3b8e431586_o_d.jpg",
					"Shopping Mall (Lower Level) - 1",
				),
				MapImage::new(
					"https://live.staticflickr.com/65535/53526695935_fd11d6021c_o_d.jpg",
					"Shopping Mall (Lower Level) - 2",
				),
				MapImage::new(
					"https://live.staticflickr.com/65535/53526439698_b4e3b68f16_o_d.jpg",
					"Shopping Mall (Lower Level) - 3",
				),
				MapImage::new(
					"https://live.staticflickr.com/65535/53551145610_1d2b70e5f7_h.jpg",
					"Cinema",
				),
				MapImage::new(
					"https://live.staticflickr.com/65535/53550701376_0f544ed54c_h.jpg",
					"Shopping Mall (Upper Level) - 1",
				),
				MapImage::new(
					"https://live.staticflickr.com/65535/53526439693_9fe997b8d9_o_d.jpg",
					"Bomb Planting Site A",
				),
			],
			download_links: Vec::new(),
			progress_percentage: Some(40),
		}
	}

	fn tutorial() -> Tutorial
	{
		Tutorial {
			hash_key: String::from("play-your-own-addon-map"),
			title: String::from("Play your own addon/workshop map"),
			content: String::from("# Test Header\nTest content with a `code block` here.\n"),
			creation_date: date!(2023 - 10 - 30),
			last_update_date: date!(2023 - 12 - 26),
			thumbnail: String::from("/csmaps/tutorial202.jpg"),
			target_game_version: GameVersion::CS2,
			is_draft: false,
		}
	}
}

impl MapDatabase for FixtureDatabase
{
	async fn categories(&mut self) -> DatabaseResult<Vec<Category>>
	{
		Ok(Vec::new())
	}

	async fn maps(&mut self) -> DatabaseResult<Vec<Map>>
	{
		Ok(vec![Self::map()])
	}

	async fn map_by_name(&mut self, _name: &str) -> DatabaseResult<Option<Map>>
	{
		Ok(Some(Self::map()))
	}

	async fn map_by_id(&mut self, _map_id: MapId) -> DatabaseResult<Option<Map>>
	{
		Ok(Some(Self::map()))
	}

	async fn tutorials(&mut self) -> DatabaseResult<Vec<Tutorial>>
	{
		Ok(vec![Self::tutorial()])
	}

	async fn tutorial_by_hash_key(&mut self, _hash_key: &str) -> DatabaseResult<Option<Tutorial>>
	{
		Ok(Some(Self::tutorial()))
	}

	async fn statistics(&mut self) -> DatabaseResult<Statistics>
	{
		Ok(Statistics {
			released_count: 0,
			in_progress_count: 1,
			unavailable_count: 2,
			tutorials_count: 3,
		})
	}

	fn close(self) {}
}
