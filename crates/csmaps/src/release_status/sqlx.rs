//! Trait implementations for the [`sqlx`] crate.
//!
//! The status is stored as a `SMALLINT`.

use super::ReleaseStatus;

impl_sqlx_via_i16!(ReleaseStatus);
