//! Field-by-field binding

use crate::de::{ConvertError, Value};
use crate::error::BindError;
use crate::source::Source;
use std::ffi::{OsStr, OsString};

/// Value of the key or default attribute that means "treat as absent".
pub const SKIP: &str = "-";

/// A parsed key attribute: `NAME` or `NAME,required`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key<'a> {
    /// Name of the environment variable
    pub name: &'a str,
    /// Whether the variable must be set and non-empty
    pub required: bool,
}

impl<'a> Key<'a> {
    /// Parse a key attribute.
    ///
    /// Returns `None` for an empty key or [`SKIP`], meaning the field is not
    /// bound at all. Only the second comma-separated segment is inspected for
    /// the `required` flag.
    pub fn parse(raw: &'a str) -> Option<Self> {
        if raw.is_empty() || raw == SKIP {
            return None;
        }

        let mut parts = raw.split(',');
        let name = parts.next().unwrap_or_default();
        let required = parts.next().is_some_and(|flag| flag.trim() == "required");

        Some(Self { name, required })
    }
}

/// Where a bound field's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The key was empty or `-`; the field was not touched
    Skipped,
    /// The variable was set and non-empty
    Environment,
    /// The variable was unset or empty and the default applied
    Default,
    /// Neither applied; the field received its zero value
    Zero,
}

/// Binds individual fields against a [`Source`].
///
/// `#[derive(Bind)]` generates one [`Binder::field`] call per tagged field.
/// Hand-written [`Bind`](crate::Bind) impls can do the same.
pub struct Binder<'s> {
    source: &'s dyn Source,
}

impl<'s> Binder<'s> {
    /// Create a binder reading from `source`
    pub fn new(source: &'s dyn Source) -> Self {
        Self { source }
    }

    /// Resolve one field and write it into `slot`.
    ///
    /// Precedence: a set, non-empty variable wins; otherwise a required key
    /// fails; otherwise a default other than `""` or `-` applies; otherwise
    /// the type's zero value is written. `slot` is only written once the
    /// value has been fully converted.
    pub fn field<T: Value>(
        &self,
        field: &str,
        key: &str,
        default: Option<&str>,
        slot: &mut T,
    ) -> Result<Resolution, BindError> {
        let Some(key) = Key::parse(key) else {
            return Ok(Resolution::Skipped);
        };

        let env_value = self.lookup(key.name)?;
        if key.required && env_value.is_empty() {
            return Err(BindError::required(key.name));
        }

        let default = default.unwrap_or_default();
        let use_default = env_value.is_empty() && !default.is_empty() && default != SKIP;

        let (raw, resolution) = if use_default {
            (OsStr::new(default), Resolution::Default)
        } else if env_value.is_empty() {
            (OsStr::new(""), Resolution::Zero)
        } else {
            (env_value.as_os_str(), Resolution::Environment)
        };

        let value = T::from_env_os(raw).map_err(|e| match e {
            ConvertError::NotUnicode => BindError::not_unicode(key.name),
            ConvertError::Invalid(message) => {
                BindError::parse_error::<T>(field, key.name, raw.to_string_lossy(), message)
            }
        })?;
        *slot = value;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            field,
            env = key.name,
            kind = %T::KIND,
            resolution = ?resolution,
            "bound field"
        );

        Ok(resolution)
    }

    fn lookup(&self, name: &str) -> Result<OsString, BindError> {
        if name.is_empty() {
            return Ok(OsString::new());
        }
        Ok(self.source.get_os(name)?.unwrap_or_default())
    }
}
