//! The CS Maps API.
//!
//! This crate serves the public catalog of community made maps and tutorials.
//! All data access goes through the [`MapDatabase`] capability, which is either
//! backed by PostgreSQL or, when no connection string is configured, by a small
//! set of hard-coded fixture data.
//!
//! [`MapDatabase`]: database::MapDatabase

/*
 * CS Maps API
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

use std::io;

use derive_more::{Display, Error, From};

#[macro_use]
extern crate tracing as _;

pub mod config;
pub use config::Config;

pub mod database;
pub mod http;
pub mod logging;
pub mod maps;
pub mod statistics;
pub mod tutorials;

mod signals;

#[cfg(test)]
mod testing;

/// Runs the HTTP server until SIGINT is received.
pub async fn run(config: Config) -> Result<(), RunError>
{
	let database = database::DatabaseSelector::new(&config.database)?;

	if database.is_fixture() {
		warn!("no database configured; serving fixture data");
	}

	let service = http::router(database.clone())
		.into_make_service_with_connect_info::<std::net::SocketAddr>();

	let tcp_listener = tokio::net::TcpListener::bind(config.http.socket_addr()).await?;
	let addr = tcp_listener.local_addr()?;

	info!(%addr, "CS Maps server started");

	axum::serve(tcp_listener, service)
		.with_graceful_shutdown(signals::sigint())
		.await?;

	warn!("closing database connections");
	database.shutdown().await;

	Ok(())
}

/// Errors returned by [`run()`].
#[derive(Debug, Display, Error, From)]
pub enum RunError
{
	/// We failed to set up the connection pool.
	#[display("failed to set up database: {_0}")]
	Database(database::DatabaseError),

	/// Binding the listener or serving requests failed.
	#[display("{_0}")]
	Io(io::Error),
}
