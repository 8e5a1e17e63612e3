//! Aggregate counters over the catalog.

use serde::Serialize;

/// Catalog statistics, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics
{
	pub released_count: u64,
	pub in_progress_count: u64,
	pub unavailable_count: u64,

	/// Number of tutorials that are not drafts.
	pub tutorials_count: u64,
}

impl Statistics
{
	/// The total number of maps, regardless of status.
	pub const fn maps_count(&self) -> u64
	{
		self.released_count + self.in_progress_count + self.unavailable_count
	}
}
