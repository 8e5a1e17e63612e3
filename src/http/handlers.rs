use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use crate::database::{DatabaseSelector, MapDatabase};
use crate::http::error::{HandlerError, HandlerResult};
use crate::maps::{Category, Map, MapIdentifier};
use crate::statistics::Statistics;
use crate::tutorials::Tutorial;

/// Everything needed to render the catalog page.
#[derive(Debug, Serialize)]
pub(crate) struct GetMapsResponse
{
	categories: Vec<Category>,
	maps: Vec<Map>,
}

#[instrument(skip(database), err(Debug, level = "debug"))]
pub(crate) async fn get_maps(
	State(database): State<DatabaseSelector>,
) -> HandlerResult<Json<GetMapsResponse>>
{
	let response = database
		.using_database(|db| {
			Box::pin(async move {
				let categories = db.categories().await?;
				let maps = db.maps().await?;

				Ok(GetMapsResponse { categories, maps })
			})
		})
		.await?;

	Ok(Json(response))
}

#[instrument(skip(database), ret(level = "debug"), err(Debug, level = "debug"))]
pub(crate) async fn get_map(
	State(database): State<DatabaseSelector>,
	Path(map): Path<MapIdentifier>,
) -> HandlerResult<Json<Map>>
{
	let map = database
		.using_database(move |db| {
			Box::pin(async move {
				match map {
					MapIdentifier::Id(map_id) => db.map_by_id(map_id).await,
					MapIdentifier::Name(name) => db.map_by_name(&name).await,
				}
			})
		})
		.await?
		.ok_or(HandlerError::NotFound { resource: "map" })?;

	Ok(Json(map))
}

#[instrument(skip(database), err(Debug, level = "debug"))]
pub(crate) async fn get_tutorials(
	State(database): State<DatabaseSelector>,
) -> HandlerResult<Json<Vec<Tutorial>>>
{
	let tutorials = database
		.using_database(|db| Box::pin(db.tutorials()))
		.await?;

	Ok(Json(tutorials))
}

#[instrument(skip(database), err(Debug, level = "debug"))]
pub(crate) async fn get_tutorial(
	State(database): State<DatabaseSelector>,
	Path(hash_key): Path<String>,
) -> HandlerResult<Json<Tutorial>>
{
	let tutorial = database
		.using_database(move |db| {
			Box::pin(async move { db.tutorial_by_hash_key(&hash_key).await })
		})
		.await?
		.ok_or(HandlerError::NotFound { resource: "tutorial" })?;

	Ok(Json(tutorial))
}

#[instrument(skip(database), ret(level = "debug"), err(Debug, level = "debug"))]
pub(crate) async fn get_statistics(
	State(database): State<DatabaseSelector>,
) -> HandlerResult<Json<Statistics>>
{
	let statistics = database
		.using_database(|db| Box::pin(db.statistics()))
		.await?;

	Ok(Json(statistics))
}
