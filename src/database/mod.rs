//! Data access for the catalog.
//!
//! Everything the HTTP layer knows about stored data goes through the
//! [`MapDatabase`] trait. There are two implementations:
//!
//! - [`StoreDatabase`] runs queries against PostgreSQL
//! - [`FixtureDatabase`] returns hard-coded data and never does any I/O
//!
//! Which one backs a request is decided by the [`DatabaseSelector`], which also
//! makes sure the handle is released once the request is done with it.

use crate::maps::{Category, Map, MapId};
use crate::statistics::Statistics;
use crate::tutorials::Tutorial;

mod error;
pub use error::{DatabaseError, DatabaseResult};

mod fixture;
pub use fixture::FixtureDatabase;

mod store;
pub use store::StoreDatabase;

mod selector;
pub use selector::{DatabaseSelector, scoped};

pub type Driver = sqlx::Postgres;
pub type Pool = sqlx::Pool<Driver>;
pub type PoolConnection = sqlx::pool::PoolConnection<Driver>;

/// Read access to the catalog.
///
/// A value implementing this trait is a handle bound to a single request. Every
/// operation is read-only and idempotent. Lookups that match nothing return
/// [`None`] rather than an error.
pub trait MapDatabase
{
	/// Returns all categories.
	async fn categories(&mut self) -> DatabaseResult<Vec<Category>>;

	/// Returns all listed maps.
	async fn maps(&mut self) -> DatabaseResult<Vec<Map>>;

	/// Returns the map with the given name, unless it is unavailable.
	async fn map_by_name(&mut self, name: &str) -> DatabaseResult<Option<Map>>;

	/// Returns the map with the given ID, unless it is unavailable.
	///
	/// Not every implementation has to support this.
	async fn map_by_id(&mut self, map_id: MapId) -> DatabaseResult<Option<Map>>
	{
		let _ = map_id;

		Err(DatabaseError::Unsupported { operation: "map_by_id" })
	}

	/// Returns all tutorials that are not drafts.
	async fn tutorials(&mut self) -> DatabaseResult<Vec<Tutorial>>;

	/// Returns the tutorial with the given hash key, even if it is a draft.
	async fn tutorial_by_hash_key(&mut self, hash_key: &str) -> DatabaseResult<Option<Tutorial>>;

	/// Computes [`Statistics`] over the current state of the catalog.
	async fn statistics(&mut self) -> DatabaseResult<Statistics>;

	/// Releases any resources held by this handle.
	fn close(self);
}

/// The handle the [`DatabaseSelector`] hands out.
#[derive(Debug)]
pub enum Database
{
	Fixture(FixtureDatabase),
	Store(StoreDatabase),
}

impl MapDatabase for Database
{
	async fn categories(&mut self) -> DatabaseResult<Vec<Category>>
	{
		match self {
			Self::Fixture(db) => db.categories().await,
			Self::Store(db) => db.categories().await,
		}
	}

	async fn maps(&mut self) -> DatabaseResult<Vec<Map>>
	{
		match self {
			Self::Fixture(db) => db.maps().await,
			Self::Store(db) => db.maps().await,
		}
	}

	async fn map_by_name(&mut self, name: &str) -> DatabaseResult<Option<Map>>
	{
		match self {
			Self::Fixture(db) => db.map_by_name(name).await,
			Self::Store(db) => db.map_by_name(name).await,
		}
	}

	async fn map_by_id(&mut self, map_id: MapId) -> DatabaseResult<Option<Map>>
	{
		match self {
			Self::Fixture(db) => db.map_by_id(map_id).await,
			Self::Store(db) => db.map_by_id(map_id).await,
		}
	}

	async fn tutorials(&mut self) -> DatabaseResult<Vec<Tutorial>>
	{
		match self {
			Self::Fixture(db) => db.tutorials().await,
			Self::Store(db) => db.tutorials().await,
		}
	}

	async fn tutorial_by_hash_key(&mut self, hash_key: &str) -> DatabaseResult<Option<Tutorial>>
	{
		match self {
			Self::Fixture(db) => db.tutorial_by_hash_key(hash_key).await,
			Self::Store(db) => db.tutorial_by_hash_key(hash_key).await,
		}
	}

	async fn statistics(&mut self) -> DatabaseResult<Statistics>
	{
		match self {
			Self::Fixture(db) => db.statistics().await,
			Self::Store(db) => db.statistics().await,
		}
	}

	fn close(self)
	{
		match self {
			Self::Fixture(db) => db.close(),
			Self::Store(db) => db.close(),
		}
	}
}
