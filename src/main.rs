//! CS Maps API - the public catalog of community made maps.
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{self, WrapErr};
use csmaps_api::Config;
use tracing::Instrument;
use url::Url;

/// The configuration file we look for if `--config` was not specified.
const DEFAULT_CONFIG_PATH: &str = "./csmaps-api.toml";

/// CS Maps API
#[derive(Debug, Parser)]
struct Args
{
	/// Path to the configuration file.
	#[arg(long, name = "FILE")]
	config: Option<PathBuf>,

	/// PostgreSQL connection string.
	///
	/// If this is not set, the API will serve fixture data.
	#[arg(long, env = "CSMAPS_DATABASE_URL", hide_env_values = true)]
	database_url: Option<Url>,

	/// The IP address to listen on.
	#[arg(long)]
	ip_addr: Option<IpAddr>,

	/// The port to listen on.
	#[arg(long)]
	port: Option<u16>,
}

#[tokio::main]
async fn main() -> eyre::Result<()>
{
	color_eyre::install()?;

	// `.env` files are optional, the environment might already be set up.
	let _ = dotenvy::dotenv();

	let args = Args::parse();
	let config = load_config(args)?;

	csmaps_api::logging::init(&config.tracing).wrap_err("failed to initialize tracing")?;

	let runtime_span = tracing::info_span!("runtime");

	csmaps_api::run(config)
		.instrument(runtime_span)
		.await
		.wrap_err("failed to run server")
}

fn load_config(args: Args) -> eyre::Result<Config>
{
	let mut config = match args.config {
		Some(path) => Config::load_from_file(path)?,
		None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
			Config::load_from_file(DEFAULT_CONFIG_PATH)?
		},
		None => Config::default(),
	};

	if let Some(url) = args.database_url {
		config.database.url = Some(url);
	}

	if let Some(ip_addr) = args.ip_addr {
		config.http.ip_addr = ip_addr;
	}

	if let Some(port) = args.port {
		config.http.port = port;
	}

	Ok(config)
}
