use csmaps::{GameVersion, ReleaseStatus};
use sqlx::types::Json;
use time::Date;

use super::{DatabaseError, DatabaseResult, MapDatabase, PoolConnection};
use crate::maps::{Category, CategoryId, Map, MapId, MapImage};
use crate::statistics::Statistics;
use crate::tutorials::Tutorial;

/// The columns every map query selects, in [`MapRow`] order.
///
/// Only columns that are part of the public [`Map`] shape belong here.
macro_rules! map_columns {
	() => {
		"id, category_id, name, full_name, version, release_date, update_date, status, \
		 max_players, icon, target_game_version, images, download_links, progress_percentage"
	};
}

/// The columns every tutorial query selects, in [`TutorialRow`] order.
macro_rules! tutorial_columns {
	() => {
		"hash_key, title, content, creation_date, last_update_date, thumbnail, \
		 target_game_version, is_draft"
	};
}

/// A [`MapDatabase`] backed by PostgreSQL.
///
/// Holds a single pooled connection for the lifetime of the handle and runs
/// every query on it; [`close()`] hands it back to the pool.
///
/// [`close()`]: MapDatabase::close
#[derive(Debug)]
pub struct StoreDatabase
{
	conn: PoolConnection,
}

impl StoreDatabase
{
	pub fn new(conn: PoolConnection) -> Self
	{
		Self { conn }
	}
}

impl MapDatabase for StoreDatabase
{
	#[instrument(level = "debug", skip(self), err)]
	async fn categories(&mut self) -> DatabaseResult<Vec<Category>>
	{
		let rows = sqlx::query_as::<_, CategoryRow>(
			"SELECT id, abbreviation, full_name FROM categories",
		)
		.fetch_all(&mut *self.conn)
		.await?;

		Ok(rows.into_iter().map(Category::from).collect())
	}

	#[instrument(level = "debug", skip(self), err)]
	async fn maps(&mut self) -> DatabaseResult<Vec<Map>>
	{
		sqlx::query_as::<_, MapRow>(concat!(
			"SELECT ",
			map_columns!(),
			" FROM maps WHERE status <> $1 ORDER BY id",
		))
		.bind(ReleaseStatus::Unavailable)
		.fetch_all(&mut *self.conn)
		.await?
		.into_iter()
		.map(Map::try_from)
		.collect()
	}

	#[instrument(level = "debug", skip(self), err)]
	async fn map_by_name(&mut self, name: &str) -> DatabaseResult<Option<Map>>
	{
		sqlx::query_as::<_, MapRow>(concat!(
			"SELECT ",
			map_columns!(),
			" FROM maps WHERE name = $1 AND status <> $2",
		))
		.bind(name)
		.bind(ReleaseStatus::Unavailable)
		.fetch_optional(&mut *self.conn)
		.await?
		.map(Map::try_from)
		.transpose()
	}

	#[instrument(level = "debug", skip(self), err)]
	async fn map_by_id(&mut self, map_id: MapId) -> DatabaseResult<Option<Map>>
	{
		sqlx::query_as::<_, MapRow>(concat!(
			"SELECT ",
			map_columns!(),
			" FROM maps WHERE id = $1 AND status <> $2",
		))
		.bind(map_id)
		.bind(ReleaseStatus::Unavailable)
		.fetch_optional(&mut *self.conn)
		.await?
		.map(Map::try_from)
		.transpose()
	}

	#[instrument(level = "debug", skip(self), err)]
	async fn tutorials(&mut self) -> DatabaseResult<Vec<Tutorial>>
	{
		let rows = sqlx::query_as::<_, TutorialRow>(concat!(
			"SELECT ",
			tutorial_columns!(),
			" FROM tutorials WHERE NOT is_draft ORDER BY creation_date DESC, hash_key",
		))
		.fetch_all(&mut *self.conn)
		.await?;

		Ok(rows.into_iter().map(Tutorial::from).collect())
	}

	#[instrument(level = "debug", skip(self), err)]
	async fn tutorial_by_hash_key(&mut self, hash_key: &str) -> DatabaseResult<Option<Tutorial>>
	{
		let row = sqlx::query_as::<_, TutorialRow>(concat!(
			"SELECT ",
			tutorial_columns!(),
			" FROM tutorials WHERE hash_key = $1",
		))
		.bind(hash_key)
		.fetch_optional(&mut *self.conn)
		.await?;

		Ok(row.map(Tutorial::from))
	}

	#[instrument(level = "debug", skip(self), ret(level = "debug"), err)]
	async fn statistics(&mut self) -> DatabaseResult<Statistics>
	{
		let map_counts = sqlx::query_as::<_, MapCountsRow>(
			"SELECT
			   COUNT(*) FILTER (WHERE status = 0) AS released_count,
			   COUNT(*) FILTER (WHERE status = 1) AS in_progress_count,
			   COUNT(*) FILTER (WHERE status = 2) AS unavailable_count
			 FROM maps",
		)
		.fetch_optional(&mut *self.conn)
		.await?;

		// Both aggregates share the handle's connection, which can only run one
		// statement at a time.
		let tutorials_count =
			sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tutorials WHERE NOT is_draft")
				.fetch_optional(&mut *self.conn)
				.await?;

		let map_counts = map_counts.ok_or(DatabaseError::MissingAggregate { table: "maps" })?;
		let tutorials_count =
			tutorials_count.ok_or(DatabaseError::MissingAggregate { table: "tutorials" })?;

		Ok(Statistics {
			released_count: convert_count("released_count", map_counts.released_count)?,
			in_progress_count: convert_count("in_progress_count", map_counts.in_progress_count)?,
			unavailable_count: convert_count("unavailable_count", map_counts.unavailable_count)?,
			tutorials_count: convert_count("count", tutorials_count)?,
		})
	}

	fn close(self)
	{
		// Dropping a `PoolConnection` returns it to the pool.
		drop(self.conn);
	}
}

fn convert_count(column: &'static str, count: i64) -> DatabaseResult<u64>
{
	u64::try_from(count).map_err(|error| DatabaseError::decode_column(column, error))
}

#[derive(sqlx::FromRow)]
struct CategoryRow
{
	id: CategoryId,
	abbreviation: String,
	full_name: String,
}

impl From<CategoryRow> for Category
{
	fn from(row: CategoryRow) -> Self
	{
		Self { id: row.id, abbreviation: row.abbreviation, full_name: row.full_name }
	}
}

#[derive(sqlx::FromRow)]
struct MapRow
{
	id: MapId,
	category_id: CategoryId,
	name: String,
	full_name: String,
	version: String,
	release_date: Date,
	update_date: Date,
	status: ReleaseStatus,
	max_players: i32,
	icon: String,
	target_game_version: GameVersion,
	images: Json<Vec<MapImage>>,
	download_links: Vec<String>,
	progress_percentage: Option<i16>,
}

impl TryFrom<MapRow> for Map
{
	type Error = DatabaseError;

	fn try_from(row: MapRow) -> Result<Self, Self::Error>
	{
		let max_players = u32::try_from(row.max_players)
			.map_err(|error| DatabaseError::decode_column("max_players", error))?;

		let progress_percentage = row
			.progress_percentage
			.map(u8::try_from)
			.transpose()
			.map_err(|error| DatabaseError::decode_column("progress_percentage", error))?;

		Ok(Self {
			id: row.id,
			category_id: row.category_id,
			name: row.name,
			full_name: row.full_name,
			version: row.version,
			release_date: row.release_date,
			update_date: row.update_date,
			status: row.status,
			max_players,
			icon: row.icon,
			target_game_version: row.target_game_version,
			images: row.images.0,
			download_links: row.download_links,
			progress_percentage,
		})
	}
}

#[derive(sqlx::FromRow)]
struct TutorialRow
{
	hash_key: String,
	title: String,
	content: String,
	creation_date: Date,
	last_update_date: Date,
	thumbnail: String,
	target_game_version: GameVersion,
	is_draft: bool,
}

impl From<TutorialRow> for Tutorial
{
	fn from(row: TutorialRow) -> Self
	{
		Self {
			hash_key: row.hash_key,
			title: row.title,
			content: row.content,
			creation_date: row.creation_date,
			last_update_date: row.last_update_date,
			thumbnail: row.thumbnail,
			target_game_version: row.target_game_version,
			is_draft: row.is_draft,
		}
	}
}

#[derive(sqlx::FromRow)]
struct MapCountsRow
{
	released_count: i64,
	in_progress_count: i64,
	unavailable_count: i64,
}
