use futures_util::future::BoxFuture;
use sqlx::pool::PoolOptions;

use super::{
	Database,
	DatabaseResult,
	Driver,
	FixtureDatabase,
	MapDatabase,
	Pool,
	StoreDatabase,
};
use crate::config::DatabaseConfig;

/// Decides which [`MapDatabase`] implementation backs a request.
///
/// If a connection string was configured, every request gets its own
/// connection from a shared pool. Otherwise every request gets a
/// [`FixtureDatabase`].
///
/// Cloning this type is cheap; clones share the same pool.
#[derive(Debug, Clone)]
pub struct DatabaseSelector
{
	pool: Option<Pool>,
}

impl DatabaseSelector
{
	/// Creates a new selector.
	///
	/// This does not touch the network; connections are only opened once a
	/// request needs one.
	pub fn new(config: &DatabaseConfig) -> DatabaseResult<Self>
	{
		let Some(url) = config.url.as_ref() else {
			return Ok(Self::fixture());
		};

		let (min_connections, max_connections) = config.pool_size();
		let pool = PoolOptions::<Driver>::new()
			.min_connections(min_connections)
			.max_connections(max_connections)
			.connect_lazy(url.as_str())?;

		Ok(Self::from_pool(pool))
	}

	/// Creates a selector that always hands out a [`FixtureDatabase`].
	pub fn fixture() -> Self
	{
		Self { pool: None }
	}

	/// Creates a selector that hands out connections from an existing pool.
	pub fn from_pool(pool: Pool) -> Self
	{
		Self { pool: Some(pool) }
	}

	/// Whether this selector serves fixture data.
	pub fn is_fixture(&self) -> bool
	{
		self.pool.is_none()
	}

	/// Acquires a fresh handle.
	///
	/// Prefer [`DatabaseSelector::using_database()`], which guarantees the
	/// handle is closed again.
	#[instrument(level = "debug", skip(self), err)]
	pub async fn acquire(&self) -> DatabaseResult<Database>
	{
		let Some(pool) = self.pool.as_ref() else {
			info!("connection string is not defined, will use fixture data");
			return Ok(Database::Fixture(FixtureDatabase));
		};

		info!("connecting to database");

		let conn = pool.acquire().await?;

		info!("connected to database");

		Ok(Database::Store(StoreDatabase::new(conn)))
	}

	/// Acquires a handle, runs `f` with it, and closes it again.
	///
	/// See [`scoped()`].
	pub async fn using_database<F, T>(&self, f: F) -> DatabaseResult<T>
	where
		F: for<'db> FnOnce(&'db mut Database) -> BoxFuture<'db, DatabaseResult<T>>,
	{
		let database = self.acquire().await?;

		scoped(database, f).await
	}

	/// Closes the underlying pool, if any.
	pub async fn shutdown(&self)
	{
		if let Some(pool) = self.pool.as_ref() {
			pool.close().await;
		}
	}
}

/// Runs `f` with `database` and closes it afterwards.
///
/// [`MapDatabase::close()`] is called exactly once after `f` completes,
/// whether it succeeded or not, and `f`'s result is returned unchanged. If the
/// returned future is dropped before `f` completes, `database` is dropped
/// with it, which releases its resources just the same.
pub async fn scoped<D, F, T>(mut database: D, f: F) -> DatabaseResult<T>
where
	D: MapDatabase,
	F: for<'db> FnOnce(&'db mut D) -> BoxFuture<'db, DatabaseResult<T>>,
{
	let result = f(&mut database).await;

	database.close();

	result
}
