use std::error::Error as StdError;

use derive_more::{Display, Error, From};

pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// An error returned by a [`MapDatabase`] operation.
///
/// A lookup that matches nothing is not an error; those operations return
/// [`None`] instead.
///
/// [`MapDatabase`]: super::MapDatabase
#[derive(Debug, Display, Error, From)]
pub enum DatabaseError
{
	/// The database could not be reached, or a query failed.
	#[display("database error: {_0}")]
	Transport(sqlx::Error),

	/// An aggregate query that always yields exactly one row yielded none.
	#[from(skip)]
	#[display("aggregate query over `{table}` returned no rows")]
	MissingAggregate
	{
		table: &'static str,
	},

	/// The backing implementation does not offer this operation.
	#[from(skip)]
	#[display("`{operation}` is not supported by this database")]
	Unsupported
	{
		operation: &'static str,
	},
}

impl DatabaseError
{
	/// Constructs a [`DatabaseError`] for a column that could not be converted
	/// into the type of its record field.
	pub(crate) fn decode_column(
		column: impl Into<String>,
		error: impl Into<Box<dyn StdError + Send + Sync>>,
	) -> Self
	{
		Self::Transport(sqlx::Error::ColumnDecode { index: column.into(), source: error.into() })
	}

	/// Whether this error indicates broken invariants in the stored data rather
	/// than a failure to talk to the database.
	pub fn is_integrity_error(&self) -> bool
	{
		matches!(self, Self::MissingAggregate { .. })
	}
}
