//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates binding attributes from struct fields
//! during macro expansion.

use syn::{Field, LitStr};

/// Key attribute value meaning "do not bind this field".
const SKIP: &str = "-";

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Key attribute: `"NAME"` or `"NAME,required"`.
    ///
    /// `None` when the field carries no `#[env]` attribute.
    pub key: Option<LitStr>,

    /// Default value, kept as the raw string and parsed at bind time.
    pub default: Option<LitStr>,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    ///
    /// Unknown keys and non-string values are reported as errors spanning
    /// the offending tokens.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();
        let mut seen = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }
            seen = true;

            attr.parse_nested_meta(|meta| {
                // key = "NAME[,required]"
                if meta.path.is_ident("key") {
                    attrs.key = Some(meta.value()?.parse()?);
                    return Ok(());
                }

                // default = "value"
                if meta.path.is_ident("default") {
                    attrs.default = Some(meta.value()?.parse()?);
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute, expected `key` or `default`"))
            })?;
        }

        if seen && attrs.key.is_none() {
            return Err(syn::Error::new_spanned(
                field,
                "#[env(...)] requires `key = \"NAME\"`",
            ));
        }

        Ok(attrs)
    }

    /// Whether the field takes part in binding.
    ///
    /// An absent, empty or `-` key excludes the field entirely.
    pub fn is_bound(&self) -> bool {
        self.key
            .as_ref()
            .map(LitStr::value)
            .is_some_and(|key| !key.is_empty() && key != SKIP)
    }
}
