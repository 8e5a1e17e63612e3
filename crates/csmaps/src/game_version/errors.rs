//! Error types used by the [`game_version`] module.
//!
//! [`game_version`]: crate::game_version

use thiserror::Error;

/// Error produced when converting an integer or parsing a string into a [`GameVersion`].
///
/// [`GameVersion`]: super::GameVersion
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid game version")]
pub struct InvalidGameVersion;
