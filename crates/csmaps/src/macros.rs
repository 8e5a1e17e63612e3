//! Macros used by this crate.
//!
//! All of these are automatically in-scope within this crate.

#![allow(unused_macros, unused_macro_rules)]

/// Enables items conditionally based on whether the `serde` feature is enabled.
macro_rules! cfg_serde {
	(
		$($item:item)*
	) => {
		$(
			#[cfg(feature = "serde")]
			#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
			$item
		)*
	};
}

/// Enables items conditionally based on whether the `sqlx` feature is enabled.
macro_rules! cfg_sqlx {
	(
		$($item:item)*
	) => {
		$(
			#[cfg(feature = "sqlx")]
			#[cfg_attr(docsrs, doc(cfg(feature = "sqlx")))]
			$item
		)*
	};
}

/// Implements [`sqlx::Type`], [`sqlx::Encode`] and [`sqlx::Decode`] for an enum
/// that is stored as an `i16`.
macro_rules! impl_sqlx_via_i16 {
	($ty:ty) => {
		impl<DB> ::sqlx::Type<DB> for $ty
		where
			DB: ::sqlx::Database,
			i16: ::sqlx::Type<DB>,
		{
			fn type_info() -> <DB as ::sqlx::Database>::TypeInfo
			{
				<i16 as ::sqlx::Type<DB>>::type_info()
			}

			fn compatible(ty: &<DB as ::sqlx::Database>::TypeInfo) -> bool
			{
				<i16 as ::sqlx::Type<DB>>::compatible(ty)
			}
		}

		impl<'q, DB> ::sqlx::Encode<'q, DB> for $ty
		where
			DB: ::sqlx::Database,
			i16: ::sqlx::Encode<'q, DB>,
		{
			fn encode_by_ref(
				&self,
				buf: &mut <DB as ::sqlx::Database>::ArgumentBuffer<'q>,
			) -> Result<::sqlx::encode::IsNull, Box<dyn ::std::error::Error + Send + Sync>>
			{
				<i16 as ::sqlx::Encode<'q, DB>>::encode_by_ref(&i16::from(*self), buf)
			}

			fn produces(&self) -> Option<<DB as ::sqlx::Database>::TypeInfo>
			{
				<i16 as ::sqlx::Encode<'q, DB>>::produces(&i16::from(*self))
			}

			fn size_hint(&self) -> usize
			{
				<i16 as ::sqlx::Encode<'q, DB>>::size_hint(&i16::from(*self))
			}
		}

		impl<'r, DB> ::sqlx::Decode<'r, DB> for $ty
		where
			DB: ::sqlx::Database,
			i16: ::sqlx::Decode<'r, DB>,
		{
			fn decode(
				value: <DB as ::sqlx::Database>::ValueRef<'r>,
			) -> Result<Self, Box<dyn ::std::error::Error + Send + Sync>>
			{
				<i16 as ::sqlx::Decode<'r, DB>>::decode(value)?
					.try_into()
					.map_err(Into::into)
			}
		}
	};
}
