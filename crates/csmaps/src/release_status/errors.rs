//! Error types used by the [`release_status`] module.
//!
//! [`release_status`]: crate::release_status

use thiserror::Error;

/// Error produced when converting an integer or parsing a string into a [`ReleaseStatus`].
///
/// [`ReleaseStatus`]: super::ReleaseStatus
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid release status")]
pub struct InvalidReleaseStatus;
