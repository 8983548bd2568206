//! Conversion from environment strings into field values
//!
//! The set of supported field types is closed: every scalar has a [`Kind`],
//! a zero value and a parser. [`Value`] lifts scalars into the field types
//! the binder accepts, adding `Option<T>` and `Box<T>` one level up.

use std::ffi::OsStr;
use std::fmt;

/// Semantic type of a bindable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `String`
    Text,
    /// `bool`
    Bool,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `Vec<u8>`
    Bytes,
}

impl Kind {
    fn describe(self) -> &'static str {
        match self {
            Kind::Text => "a string",
            Kind::Bool => "a boolean",
            Kind::I32 => "a signed 32-bit integer",
            Kind::I64 => "a signed 64-bit integer",
            Kind::U32 => "an unsigned 32-bit integer",
            Kind::U64 => "an unsigned 64-bit integer",
            Kind::Bytes => "a byte sequence",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Why a source value could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The value is not valid unicode and the field needs text
    NotUnicode,
    /// The value is text but not a valid literal of the field's type
    Invalid(String),
}

mod sealed {
    pub trait Sealed {}
}

/// A scalar field type with a zero value and a parser.
///
/// Sealed: the conversion table is fixed.
pub trait Scalar: sealed::Sealed + Sized {
    /// Semantic type of this scalar
    const KIND: Kind;

    /// Value written when the selected source string is empty
    fn zero() -> Self;

    /// Parse a non-empty source string
    fn parse_non_empty(raw: &str) -> Result<Self, String>;

    /// Convert a source string, mapping the empty string to [`Scalar::zero`]
    fn convert(raw: &str) -> Result<Self, String> {
        if raw.is_empty() {
            Ok(Self::zero())
        } else {
            Self::parse_non_empty(raw)
        }
    }

    /// Convert a value as stored in the source.
    ///
    /// Every kind except [`Kind::Bytes`] needs the value to be unicode.
    fn convert_os(raw: &OsStr) -> Result<Self, ConvertError> {
        let raw = raw.to_str().ok_or(ConvertError::NotUnicode)?;
        Self::convert(raw).map_err(ConvertError::Invalid)
    }
}

impl sealed::Sealed for String {}

impl Scalar for String {
    const KIND: Kind = Kind::Text;

    fn zero() -> Self {
        String::new()
    }

    fn parse_non_empty(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

impl sealed::Sealed for bool {}

impl Scalar for bool {
    const KIND: Kind = Kind::Bool;

    fn zero() -> Self {
        false
    }

    fn parse_non_empty(raw: &str) -> Result<Self, String> {
        parse_bool(raw)
    }
}

impl sealed::Sealed for Vec<u8> {}

impl Scalar for Vec<u8> {
    const KIND: Kind = Kind::Bytes;

    fn zero() -> Self {
        Vec::new()
    }

    // Raw bytes, no decoding
    fn parse_non_empty(raw: &str) -> Result<Self, String> {
        Ok(raw.as_bytes().to_vec())
    }

    // On unix these are exactly the bytes of the variable
    fn convert_os(raw: &OsStr) -> Result<Self, ConvertError> {
        Ok(raw.as_encoded_bytes().to_vec())
    }
}

macro_rules! impl_integer {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const KIND: Kind = Kind::$kind;

                fn zero() -> Self {
                    0
                }

                fn parse_non_empty(raw: &str) -> Result<Self, String> {
                    raw.parse::<$ty>()
                        .map_err(|e| format!("expected {}: {}", <Self as Scalar>::KIND, e))
                }
            }
        )*
    };
}

impl_integer! {
    i32 => I32,
    i64 => I64,
    u32 => U32,
    u64 => U64,
}

/// Parse a boolean literal, ignoring ASCII case.
///
/// Accepts `1`, `t`, `true` and `0`, `f`, `false`.
pub fn parse_bool(raw: &str) -> Result<bool, String> {
    const TRUE: [&str; 3] = ["1", "t", "true"];
    const FALSE: [&str; 3] = ["0", "f", "false"];

    if TRUE.iter().any(|s| raw.eq_ignore_ascii_case(s)) {
        Ok(true)
    } else if FALSE.iter().any(|s| raw.eq_ignore_ascii_case(s)) {
        Ok(false)
    } else {
        Err(format!("expected {}, got '{}'", Kind::Bool, raw))
    }
}

/// A field type the binder can write.
///
/// Implemented for every [`Scalar`], and for `Option<T>` and `Box<T>` of a
/// scalar. Optional fields always receive `Some(..)`, even on the zero path.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be bound from an environment variable",
    label = "unsupported field type",
    note = "supported types are String, bool, i32, i64, u32, u64, Vec<u8>, and Option<T> or Box<T> of those"
)]
pub trait Value: Sized {
    /// Semantic type of the underlying scalar
    const KIND: Kind;

    /// Convert a source string into a fully initialized value
    fn from_env_str(raw: &str) -> Result<Self, String>;

    /// Convert a value as stored in the source
    fn from_env_os(raw: &OsStr) -> Result<Self, ConvertError>;
}

macro_rules! impl_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Value for $ty {
                const KIND: Kind = <$ty as Scalar>::KIND;

                fn from_env_str(raw: &str) -> Result<Self, String> {
                    <$ty as Scalar>::convert(raw)
                }

                fn from_env_os(raw: &OsStr) -> Result<Self, ConvertError> {
                    <$ty as Scalar>::convert_os(raw)
                }
            }
        )*
    };
}

impl_value!(String, bool, i32, i64, u32, u64, Vec<u8>);

impl<T: Scalar> Value for Option<T> {
    const KIND: Kind = T::KIND;

    fn from_env_str(raw: &str) -> Result<Self, String> {
        T::convert(raw).map(Some)
    }

    fn from_env_os(raw: &OsStr) -> Result<Self, ConvertError> {
        T::convert_os(raw).map(Some)
    }
}

impl<T: Scalar> Value for Box<T> {
    const KIND: Kind = T::KIND;

    fn from_env_str(raw: &str) -> Result<Self, String> {
        T::convert(raw).map(Box::new)
    }

    fn from_env_os(raw: &OsStr) -> Result<Self, ConvertError> {
        T::convert_os(raw).map(Box::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_yields_zero() {
        assert_eq!(String::from_env_str("").unwrap(), "");
        assert!(!bool::from_env_str("").unwrap());
        assert_eq!(i32::from_env_str("").unwrap(), 0);
        assert_eq!(i64::from_env_str("").unwrap(), 0);
        assert_eq!(u32::from_env_str("").unwrap(), 0);
        assert_eq!(u64::from_env_str("").unwrap(), 0);
        assert!(Vec::<u8>::from_env_str("").unwrap().is_empty());
    }

    #[test]
    fn test_text_is_verbatim() {
        let raw = "  postgres://user@localhost/db?x=1  ";
        assert_eq!(String::from_env_str(raw).unwrap(), raw);
    }

    #[test]
    fn test_parse_bool_ignores_case() {
        for raw in ["1", "t", "T", "true", "TRUE", "True"] {
            assert!(parse_bool(raw).unwrap(), "{raw}");
        }
        for raw in ["0", "f", "F", "false", "FALSE", "False"] {
            assert!(!parse_bool(raw).unwrap(), "{raw}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_other_words() {
        for raw in ["yes", "no", "on", "2", "tru", " true"] {
            assert!(parse_bool(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn test_i32_range() {
        assert_eq!(i32::from_env_str("-2147483648").unwrap(), i32::MIN);
        assert_eq!(i32::from_env_str("+16").unwrap(), 16);
        assert!(i32::from_env_str("2147483648").is_err());
        assert!(i32::from_env_str("sixteen").is_err());
    }

    #[test]
    fn test_i64_range() {
        assert_eq!(i64::from_env_str("9223372036854775807").unwrap(), i64::MAX);
        assert!(i64::from_env_str("9223372036854775808").is_err());
    }

    #[test]
    fn test_unsigned_rejects_negative() {
        assert!(u32::from_env_str("-1").is_err());
        assert!(u64::from_env_str("-1").is_err());
        assert_eq!(u64::from_env_str("18446744073709551615").unwrap(), u64::MAX);
    }

    #[test]
    fn test_integer_error_describes_kind() {
        let message = u32::from_env_str("-5").unwrap_err();
        assert!(message.starts_with("expected an unsigned 32-bit integer"));
    }

    #[test]
    fn test_bytes_are_raw() {
        assert_eq!(Vec::<u8>::from_env_str("héllo").unwrap(), "héllo".as_bytes());
    }

    #[cfg(unix)]
    #[test]
    fn test_bytes_keep_non_unicode_values() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(&[0x66, 0x6f, 0x80]);
        assert_eq!(Vec::<u8>::from_env_os(raw).unwrap(), [0x66, 0x6f, 0x80]);
        assert_eq!(Option::<Vec<u8>>::from_env_os(raw).unwrap(), Some(vec![0x66, 0x6f, 0x80]));
        assert_eq!(String::from_env_os(raw), Err(ConvertError::NotUnicode));
        assert_eq!(u32::from_env_os(raw), Err(ConvertError::NotUnicode));
    }

    #[test]
    fn test_from_env_os_matches_from_env_str() {
        assert_eq!(i64::from_env_os(OsStr::new("-64")).unwrap(), -64);
        assert_eq!(Vec::<u8>::from_env_os(OsStr::new("")).unwrap(), Vec::<u8>::new());
        assert!(matches!(
            bool::from_env_os(OsStr::new("maybe")),
            Err(ConvertError::Invalid(_))
        ));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::U32.to_string(), "an unsigned 32-bit integer");
        assert_eq!(Kind::Bytes.to_string(), "a byte sequence");
    }

    #[test]
    fn test_option_is_always_allocated() {
        assert_eq!(Option::<u32>::from_env_str("").unwrap(), Some(0));
        assert_eq!(Option::<u32>::from_env_str("7").unwrap(), Some(7));
        assert_eq!(Option::<String>::from_env_str("").unwrap(), Some(String::new()));
        assert!(Option::<bool>::from_env_str("maybe").is_err());
    }

    #[test]
    fn test_box_follows_scalar_rules() {
        assert_eq!(*Box::<i64>::from_env_str("").unwrap(), 0);
        assert_eq!(*Box::<i64>::from_env_str("-64").unwrap(), -64);
        assert_eq!(*Box::<Vec<u8>>::from_env_str("yyy").unwrap(), b"yyy".to_vec());
    }

    #[test]
    fn test_kind_of_wrappers() {
        assert_eq!(<Option<bool> as Value>::KIND, Kind::Bool);
        assert_eq!(<Box<Vec<u8>> as Value>::KIND, Kind::Bytes);
        assert_eq!(<u64 as Value>::KIND, Kind::U64);
    }
}
