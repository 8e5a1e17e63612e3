//! The HTTP layer.
//!
//! Every handler obtains its [`MapDatabase`] through
//! [`DatabaseSelector::using_database()`], so handles never outlive the request
//! that acquired them.
//!
//! [`MapDatabase`]: crate::database::MapDatabase

use axum::Router;
use axum::routing::get;
use http::Method;
use tower_http::cors::{Any, CorsLayer};

use crate::database::DatabaseSelector;

mod error;
mod handlers;
mod trace;

/// Builds the application's router.
pub fn router(database: DatabaseSelector) -> Router
{
	let cors = CorsLayer::new()
		.allow_methods([Method::GET])
		.allow_origin(Any);

	Router::new()
		.route("/maps", get(handlers::get_maps))
		.route("/maps/{map}", get(handlers::get_map))
		.route("/tutorials", get(handlers::get_tutorials))
		.route("/tutorials/{hash_key}", get(handlers::get_tutorial))
		.route("/statistics", get(handlers::get_statistics))
		.layer(cors)
		.layer(trace::layer())
		.with_state(database)
}

#[cfg(test)]
mod tests
{
	use std::time::Duration;

	use axum::body::Body;
	use http::{Request, StatusCode, header};
	use http_body_util::BodyExt;
	use serde_json::{Value as JsonValue, json};
	use csmaps::ReleaseStatus;
	use sqlx::PgPool;
	use sqlx::pool::PoolOptions;
	use tower::ServiceExt;

	use super::*;
	use crate::database::Driver;
	use crate::testing::{insert_category, insert_map, insert_tutorial};

	async fn send(router: Router, uri: &str) -> (StatusCode, http::HeaderMap, JsonValue)
	{
		let request = Request::get(uri)
			.header(header::ORIGIN, "https://example.org")
			.body(Body::empty())
			.unwrap();

		let response = router.oneshot(request).await.unwrap();
		let status = response.status();
		let headers = response.headers().clone();
		let body = response.into_body().collect().await.unwrap().to_bytes();
		let body = if body.is_empty() { JsonValue::Null } else { serde_json::from_slice(&body).unwrap() };

		(status, headers, body)
	}

	fn fixture_router() -> Router
	{
		router(DatabaseSelector::fixture())
	}

	/// A router whose database cannot be reached.
	fn unreachable_router() -> Router
	{
		let pool = PoolOptions::<Driver>::new()
			.acquire_timeout(Duration::from_millis(250))
			.connect_lazy("postgres://csmaps@127.0.0.1:1/csmaps")
			.unwrap();

		router(DatabaseSelector::from_pool(pool))
	}

	#[tokio::test]
	async fn get_maps_serves_fixture()
	{
		let (status, headers, body) = send(fixture_router(), "/maps").await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
		assert_eq!(body["categories"], json!([]));
		assert_eq!(body["maps"].as_array().map(Vec::len), Some(1));

		let map = &body["maps"][0];

		assert_eq!(map["id"], 201);
		assert_eq!(map["categoryId"], 3);
		assert_eq!(map["name"], "de_taxi_plaza");
		assert_eq!(map["releaseDate"], "2024-02-25");
		assert_eq!(map["status"], 1);
		assert_eq!(map["targetGameVersion"], 1);
		assert_eq!(map["progressPercentage"], 40);
		assert_eq!(map["images"][0]["caption"], "Terrorist Spawn");
		assert_eq!(map["downloadLinks"], json!([]));
	}

	#[tokio::test]
	async fn get_map_accepts_names_and_ids()
	{
		let (status, _, by_name) = send(fixture_router(), "/maps/de_taxi_plaza").await;
		assert_eq!(status, StatusCode::OK);

		let (status, _, by_id) = send(fixture_router(), "/maps/201").await;
		assert_eq!(status, StatusCode::OK);

		assert_eq!(by_name, by_id);
		assert_eq!(by_name["fullName"], "Battle at Plaza");
	}

	#[tokio::test]
	async fn get_tutorials_serves_fixture()
	{
		let (status, _, body) = send(fixture_router(), "/tutorials").await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body.as_array().map(Vec::len), Some(1));
		assert_eq!(body[0]["hashKey"], "play-your-own-addon-map");
		assert_eq!(body[0]["isDraft"], false);

		let (status, _, body) = send(fixture_router(), "/tutorials/whatever").await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["lastUpdateDate"], "2023-12-26");
	}

	#[tokio::test]
	async fn get_statistics_serves_fixture()
	{
		let (status, _, body) = send(fixture_router(), "/statistics").await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(
			body,
			json!({
				"releasedCount": 0,
				"inProgressCount": 1,
				"unavailableCount": 2,
				"tutorialsCount": 3,
			}),
		);
	}

	#[tokio::test]
	async fn unreachable_database_is_internal_error()
	{
		for uri in ["/maps", "/maps/de_dust2", "/tutorials", "/statistics"] {
			let (status, headers, body) = send(unreachable_router(), uri).await;

			assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
			assert_eq!(headers[header::CONTENT_TYPE], "application/problem+json");
			assert_eq!(body["status"], 500);
		}
	}

	#[tokio::test]
	async fn unknown_routes_are_not_found()
	{
		let (status, ..) = send(fixture_router(), "/players").await;

		assert_eq!(status, StatusCode::NOT_FOUND);
	}

	#[sqlx::test(migrations = "./database/migrations")]
	#[ignore = "requires a PostgreSQL server (set `DATABASE_URL`)"]
	async fn get_map_looks_up_by_id_and_name(pool: PgPool)
	{
		let category_id = insert_category(&pool).await;
		let dust2_id = insert_map(&pool, category_id, "de_dust2", ReleaseStatus::Released).await;
		let inferno_id = insert_map(&pool, category_id, "de_inferno", ReleaseStatus::InProgress).await;
		let router = router(DatabaseSelector::from_pool(pool));

		let (status, _, by_id) = send(router.clone(), &format!("/maps/{inferno_id}")).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(by_id["id"], inferno_id.0);
		assert_eq!(by_id["name"], "de_inferno");

		let (status, _, by_name) = send(router, "/maps/de_dust2").await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(by_name["id"], dust2_id.0);
		assert_eq!(by_name["name"], "de_dust2");
	}

	#[sqlx::test(migrations = "./database/migrations")]
	#[ignore = "requires a PostgreSQL server (set `DATABASE_URL`)"]
	async fn missing_records_are_not_found(pool: PgPool)
	{
		let category_id = insert_category(&pool).await;
		let gone_id = insert_map(&pool, category_id, "de_gone", ReleaseStatus::Unavailable).await;
		insert_tutorial(&pool, "public", false).await;
		let router = router(DatabaseSelector::from_pool(pool));

		let unavailable_by_id = format!("/maps/{gone_id}");
		let uris = [
			"/maps/nonexistent",
			"/maps/de_gone",
			unavailable_by_id.as_str(),
			"/tutorials/missing",
		];

		for uri in uris {
			let (status, headers, body) = send(router.clone(), uri).await;

			assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
			assert_eq!(headers[header::CONTENT_TYPE], "application/problem+json");
			assert_eq!(body["status"], 404);
		}

		let (status, _, body) = send(router, "/tutorials/public").await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["hashKey"], "public");
	}
}
