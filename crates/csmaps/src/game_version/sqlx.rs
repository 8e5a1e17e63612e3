//! Trait implementations for the [`sqlx`] crate.

use super::GameVersion;

impl_sqlx_via_i16!(GameVersion);
