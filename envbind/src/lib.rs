//! Bind environment variables into struct fields
//!
//! `envbind` populates the fields of an existing struct from environment
//! variables named in `#[env(...)]` attributes, falling back to per-field
//! defaults and the type's zero value.
//!
//! # Features
//!
//! - **Declarative**: Automatic implementation with `#[derive(Bind)]`
//! - **Required flags**: `key = "NAME,required"` fails when the variable is unset or empty
//! - **Default values**: `default = "16"`, parsed exactly like an environment value
//! - **Zero values**: Unset variables without a default leave `false`, `0`, `""`
//! - **Injectable sources**: Bind from a `HashMap` in tests instead of the process environment
//! - **Static checks**: Private fields and unsupported types are rejected at compile time
//!
//! # Value Parsing
//!
//! | Field type | Empty value | Non-empty value |
//! |---|---|---|
//! | `String` | `""` | verbatim |
//! | `bool` | `false` | `1`, `t`, `true`, `0`, `f`, `false` (any case) |
//! | `i32`, `i64` | `0` | base 10 |
//! | `u32`, `u64` | `0` | base 10, non-negative |
//! | `Vec<u8>` | empty | raw bytes |
//! | `Option<T>`, `Box<T>` | `Some(zero)` | `Some(parsed)` |
//!
//! # Example
//!
//! ```rust
//! use envbind::Bind;
//!
//! #[derive(Debug, Default, Bind)]
//! struct Config {
//!     #[env(key = "DEBUG")]
//!     pub debug: bool,
//!
//!     #[env(key = "PORT", default = "8000")]
//!     pub port: String,
//!
//!     #[env(key = "WORKERS", default = "16")]
//!     pub workers: i32,
//!
//!     #[env(key = "NAME,required")]
//!     pub name: String,
//! }
//!
//! # fn main() -> Result<(), envbind::BindError> {
//! #     std::env::set_var("DEBUG", "true");
//! #     std::env::set_var("WORKERS", "4");
//! #     std::env::set_var("NAME", "Jane");
//! let mut config = Config::default();
//! envbind::bind(&mut config)?;
//!
//! assert!(config.debug);
//! assert_eq!(config.port, "8000");
//! assert_eq!(config.workers, 4);
//! assert_eq!(config.name, "Jane");
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env(key = "NAME")]`
//!
//! Bind the field to the `NAME` environment variable. Fields without the
//! attribute, or with `key = "-"`, are never touched.
//!
//! ## `#[env(key = "NAME,required")]`
//!
//! Fail with [`BindError::Required`] when `NAME` is unset or empty. The
//! default is ignored for required fields.
//!
//! ## `#[env(default = "value")]`
//!
//! Used when the variable is unset or empty. `default = "-"` means no default.
//!
//! # Injected sources
//!
//! ```rust
//! use envbind::Bind;
//! use std::collections::HashMap;
//!
//! #[derive(Default, Bind)]
//! struct Limits {
//!     #[env(key = "MAX_BODY", default = "1024")]
//!     pub max_body: u64,
//!
//!     #[env(key = "TIMEOUT")]
//!     pub timeout: Option<u32>,
//! }
//!
//! let vars: HashMap<String, String> = [("TIMEOUT".to_string(), "30".to_string())].into();
//! let mut limits = Limits::default();
//! limits.bind_from(&vars).unwrap();
//!
//! assert_eq!(limits.max_body, 1024);
//! assert_eq!(limits.timeout, Some(30));
//! ```
//!
//! # Compile-time checks
//!
//! Only structs with named fields can derive `Bind`:
//!
//! ```compile_fail
//! #[derive(envbind::Bind)]
//! enum Mode {
//!     Fast,
//!     Slow,
//! }
//! ```
//!
//! Tagged fields must be `pub`:
//!
//! ```compile_fail
//! #[derive(envbind::Bind)]
//! struct Config {
//!     #[env(key = "SECRET")]
//!     secret: String,
//! }
//! ```
//!
//! Tagged fields must have a supported type:
//!
//! ```compile_fail
//! use std::collections::HashMap;
//!
//! #[derive(envbind::Bind)]
//! struct Config {
//!     #[env(key = "LABELS")]
//!     pub labels: HashMap<String, String>,
//! }
//! ```
//!
//! Untagged fields are not checked:
//!
//! ```rust
//! #[derive(Default, envbind::Bind)]
//! struct Config {
//!     labels: std::collections::HashMap<String, String>,
//!     #[env(key = "-")]
//!     secret: String,
//! }
//!
//! let mut config = Config::default();
//! envbind::bind(&mut config).unwrap();
//! # let _ = (config.labels, config.secret);
//! ```

mod binder;
mod de;
mod error;
mod source;

pub use binder::{Binder, Key, Resolution, SKIP};
pub use de::{parse_bool, ConvertError, Kind, Scalar, Value};
pub use envbind_derive::Bind;
pub use error::BindError;
pub use source::{FnSource, ProcessEnv, Source};

// Re-export for macro-generated code
#[doc(hidden)]
pub use anyhow;

use anyhow::Context;

/// A struct whose fields can be bound from environment variables.
///
/// Usually derived with `#[derive(Bind)]`. A manual implementation calls
/// [`Binder::field`] once per field, in order, propagating the first error.
///
/// ```rust
/// use envbind::{Bind, BindError, Binder};
///
/// #[derive(Default)]
/// struct Server {
///     port: u32,
/// }
///
/// impl Bind for Server {
///     fn bind_with(&mut self, binder: &Binder<'_>) -> Result<(), BindError> {
///         binder.field("port", "SERVER_PORT", Some("8080"), &mut self.port)?;
///         Ok(())
///     }
/// }
///
/// let server = Server::from_source(&std::collections::HashMap::<String, String>::new()).unwrap();
/// assert_eq!(server.port, 8080);
/// ```
pub trait Bind {
    /// Bind every tagged field using `binder`, stopping at the first error.
    fn bind_with(&mut self, binder: &Binder<'_>) -> Result<(), BindError>;

    /// Bind from the process environment.
    fn bind(&mut self) -> Result<(), BindError> {
        self.bind_from(&ProcessEnv)
    }

    /// Bind from an injected source.
    fn bind_from(&mut self, source: &dyn Source) -> Result<(), BindError> {
        self.bind_with(&Binder::new(source))
    }

    /// Build a default value and bind it from the process environment.
    ///
    /// # Errors
    ///
    /// - Required environment variables are not set
    /// - Environment variable values cannot be parsed into target types
    fn from_env() -> anyhow::Result<Self>
    where
        Self: Default + Sized,
    {
        Self::from_source(&ProcessEnv)
    }

    /// Build a default value and bind it from `source`.
    fn from_source(source: &dyn Source) -> anyhow::Result<Self>
    where
        Self: Default + Sized,
    {
        let mut target = Self::default();
        target.bind_from(source).with_context(|| {
            format!(
                "failed to bind {} from environment",
                std::any::type_name::<Self>()
            )
        })?;
        Ok(target)
    }
}

/// Bind `target` from the process environment.
///
/// Fields are processed in declaration order. On error, fields before the
/// failing one keep their new values.
pub fn bind<T: Bind + ?Sized>(target: &mut T) -> Result<(), BindError> {
    target.bind()
}

/// Bind `target` from `source`.
pub fn bind_from<T: Bind + ?Sized>(target: &mut T, source: &dyn Source) -> Result<(), BindError> {
    target.bind_from(source)
}
