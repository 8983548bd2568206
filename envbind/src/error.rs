//! Error types for environment variable binding

/// Errors that can occur while binding environment variables into a struct.
///
/// Only runtime failures live here. Structural problems (binding something
/// that is not a struct, tagging a private field, tagging a field of an
/// unsupported type) are rejected by `#[derive(Bind)]` at compile time.
///
/// Binding stops at the first error. Fields bound before the failing one keep
/// their new values.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// A variable tagged `,required` is not set or is empty.
    ///
    /// Reported before any default value is considered.
    #[error("Environment variable '{name}' is required but not set")]
    Required {
        /// Name of the missing environment variable
        name: String,
    },

    /// The process environment holds a value that is not valid unicode and
    /// the field needs text. `Vec<u8>` fields take the raw bytes instead.
    #[error("Environment variable '{name}' is not valid unicode")]
    NotUnicode {
        /// Name of the environment variable
        name: String,
    },

    /// The selected value (from the environment or the default) cannot be
    /// converted into the field's type.
    #[error(
        "Failed to parse '{value}' from environment variable '{name}' into field '{field}' as {type_name}: {message}"
    )]
    Parse {
        /// Name of the struct field being bound
        field: String,
        /// Name of the environment variable the field is bound to
        name: String,
        /// Raw string that failed to convert
        value: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: String,
        /// Error message from the conversion
        message: String,
    },
}

impl BindError {
    /// Create a parse error for a value of type `T`
    #[doc(hidden)]
    pub fn parse_error<T>(
        field: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::Parse {
            field: field.into(),
            name: name.into(),
            value: value.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a required variable error
    #[doc(hidden)]
    pub fn required(name: impl Into<String>) -> Self {
        Self::Required { name: name.into() }
    }

    /// Create a non-unicode value error
    #[doc(hidden)]
    pub fn not_unicode(name: impl Into<String>) -> Self {
        Self::NotUnicode { name: name.into() }
    }
}
