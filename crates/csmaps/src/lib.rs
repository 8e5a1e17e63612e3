// This crate is part of the csmaps-api project.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see https://www.gnu.org/licenses.

//! Domain types shared by everything that talks about CS maps.
//!
//! Both enumerations in this crate are persisted as small integers. The
//! optional `serde` and `sqlx` features add the trait implementations needed to
//! put them on the wire and into the database.

#[macro_use]
mod macros;

pub mod release_status;

#[doc(inline)]
pub use release_status::ReleaseStatus;

pub mod game_version;

#[doc(inline)]
pub use game_version::GameVersion;
