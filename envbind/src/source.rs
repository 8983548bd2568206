//! Where variable values come from

use crate::error::BindError;
use std::collections::{BTreeMap, HashMap};
use std::env::{self, VarError};
use std::ffi::OsString;
use std::hash::BuildHasher;

/// A table of variables, looked up by exact, case-sensitive name.
///
/// The binder only ever reads from a source. Tests can pass a `HashMap`
/// instead of touching the process environment.
pub trait Source {
    /// Look up `name`, returning `Ok(None)` when it is not set.
    fn get(&self, name: &str) -> Result<Option<String>, BindError>;

    /// Look up `name` without requiring the value to be unicode.
    ///
    /// The binder reads through this method so byte fields see the value as
    /// stored. Sources that only hold strings can rely on the default.
    fn get_os(&self, name: &str) -> Result<Option<OsString>, BindError> {
        Ok(self.get(name)?.map(OsString::from))
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn get(&self, name: &str) -> Result<Option<String>, BindError> {
        match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(BindError::not_unicode(name)),
        }
    }

    fn get_os(&self, name: &str) -> Result<Option<OsString>, BindError> {
        Ok(env::var_os(name))
    }
}

impl<H: BuildHasher> Source for HashMap<String, String, H> {
    fn get(&self, name: &str) -> Result<Option<String>, BindError> {
        Ok(HashMap::get(self, name).cloned())
    }
}

impl Source for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Result<Option<String>, BindError> {
        Ok(BTreeMap::get(self, name).cloned())
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn get(&self, name: &str) -> Result<Option<String>, BindError> {
        (**self).get(name)
    }

    fn get_os(&self, name: &str) -> Result<Option<OsString>, BindError> {
        (**self).get_os(name)
    }
}

/// A source backed by a lookup closure.
///
/// ```rust
/// use envbind::{FnSource, Source};
///
/// let source = FnSource(|name: &str| (name == "PORT").then(|| "8080".to_string()));
/// assert_eq!(source.get("PORT").unwrap().as_deref(), Some("8080"));
/// assert_eq!(source.get("HOST").unwrap(), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnSource<F>(pub F);

impl<F> Source for FnSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Result<Option<String>, BindError> {
        Ok((self.0)(name))
    }
}
