//! Column codecs for values the `Any` driver does not carry uniformly.
//!
//! Record fields keep their plain Rust types and name one of these as their
//! `#[sqlx(try_from = "...")]` source.

use sqlx::any::{Any, AnyTypeInfo};
use sqlx::database::{HasArguments, HasValueRef};
use sqlx::decode::Decode;
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::types::Type;

/// A boolean stored as a small integer (`0` or `1`).
///
/// Boolean columns are declared `SMALLINT` (`INTEGER` on SQLite), which every
/// backend reports as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntFlag(pub bool);

impl From<IntFlag> for bool {
    fn from(flag: IntFlag) -> Self {
        flag.0
    }
}

impl From<bool> for IntFlag {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl Type<Any> for IntFlag {
    fn type_info() -> AnyTypeInfo {
        <i16 as Type<Any>>::type_info()
    }

    fn compatible(ty: &AnyTypeInfo) -> bool {
        <i16 as Type<Any>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Any> for IntFlag {
    fn encode_by_ref(&self, buf: &mut <Any as HasArguments<'q>>::ArgumentBuffer) -> IsNull {
        <i16 as Encode<'q, Any>>::encode_by_ref(&i16::from(self.0), buf)
    }
}

impl<'r> Decode<'r, Any> for IntFlag {
    fn decode(value: <Any as HasValueRef<'r>>::ValueRef) -> Result<Self, BoxDynError> {
        let raw = <i64 as Decode<'r, Any>>::decode(value)?;
        Ok(Self(raw != 0))
    }
}

/// Long text that MySQL reports as a blob column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WideText(pub String);

impl From<WideText> for String {
    fn from(text: WideText) -> Self {
        text.0
    }
}

impl Type<Any> for WideText {
    fn type_info() -> AnyTypeInfo {
        <String as Type<Any>>::type_info()
    }

    fn compatible(ty: &AnyTypeInfo) -> bool {
        <String as Type<Any>>::compatible(ty) || <Vec<u8> as Type<Any>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Any> for WideText {
    fn encode_by_ref(&self, buf: &mut <Any as HasArguments<'q>>::ArgumentBuffer) -> IsNull {
        <String as Encode<'q, Any>>::encode_by_ref(&self.0, buf)
    }
}

impl<'r> Decode<'r, Any> for WideText {
    fn decode(value: <Any as HasValueRef<'r>>::ValueRef) -> Result<Self, BoxDynError> {
        if let Ok(text) = <String as Decode<'r, Any>>::decode(value.clone()) {
            return Ok(Self(text));
        }
        let bytes = <Vec<u8> as Decode<'r, Any>>::decode(value)?;
        Ok(Self(String::from_utf8(bytes)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_accepts_any_integer_column() {
        assert!(<IntFlag as Type<Any>>::compatible(&<i64 as Type<Any>>::type_info()));
        assert!(<IntFlag as Type<Any>>::compatible(&<i32 as Type<Any>>::type_info()));
        assert!(!<IntFlag as Type<Any>>::compatible(&<String as Type<Any>>::type_info()));
    }

    #[test]
    fn test_wide_text_accepts_text_and_blob_columns() {
        let blob: AnyTypeInfo = <Vec<u8> as Type<Any>>::type_info();
        assert!(<WideText as Type<Any>>::compatible(&blob));
        assert!(<WideText as Type<Any>>::compatible(&<String as Type<Any>>::type_info()));
        assert!(!<WideText as Type<Any>>::compatible(&<i64 as Type<Any>>::type_info()));
    }

    #[test]
    fn test_conversions_into_field_types() {
        assert!(bool::from(IntFlag(true)));
        assert_eq!(String::from(WideText("body".into())), "body");
    }
}
