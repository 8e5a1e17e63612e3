//! Utilities for tests that need rows in a real database.

use csmaps::ReleaseStatus;
use sqlx::PgPool;

use crate::maps::{CategoryId, MapId};

pub(crate) async fn insert_category(pool: &PgPool) -> CategoryId
{
	sqlx::query_scalar("INSERT INTO categories (abbreviation, full_name) VALUES ('de', 'Defusal') RETURNING id")
		.fetch_one(pool)
		.await
		.map(CategoryId)
		.unwrap()
}

/// Inserts a map with two images and a single download link.
pub(crate) async fn insert_map(
	pool: &PgPool,
	category_id: CategoryId,
	name: &str,
	status: ReleaseStatus,
) -> MapId
{
	sqlx::query_scalar(
		"INSERT INTO maps
		   (category_id, name, full_name, version, release_date, update_date, status,
		    max_players, icon, target_game_version, images, download_links)
		 VALUES
		   ($1, $2, $2, '1.0', '2024-01-01', '2024-02-01', $3, 10, '/csmaps/icon.jpg', 1,
		    '[{\"url\": \"https://example.org/1.jpg\", \"caption\": \"Spawn\"}, {\"url\": \"https://example.org/2.jpg\"}]',
		    ARRAY['https://example.org/download'])
		 RETURNING id",
	)
	.bind(category_id)
	.bind(name)
	.bind(status)
	.fetch_one(pool)
	.await
	.map(MapId)
	.unwrap()
}

pub(crate) async fn insert_tutorial(pool: &PgPool, hash_key: &str, is_draft: bool)
{
	sqlx::query(
		"INSERT INTO tutorials
		   (hash_key, title, content, creation_date, last_update_date, thumbnail,
		    target_game_version, is_draft)
		 VALUES
		   ($1, $1, '# Title', '2023-10-30', '2023-12-26', '/csmaps/thumb.jpg', 1, $2)",
	)
	.bind(hash_key)
	.bind(is_draft)
	.execute(pool)
	.await
	.unwrap();
}
