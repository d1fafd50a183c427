//! Attribute parsing for `#[overlay(...)]` annotations.

use syn::{Field, LitStr};

/// Parsed `#[overlay(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Name used in place of the field identifier when building the
    /// variable name.
    pub name: Option<String>,

    /// Leave the field out of the environment walk.
    pub skip: bool,
}

impl FieldAttrs {
    /// Extract and parse `#[overlay(...)]` attributes from a struct field.
    ///
    /// Attributes belonging to other macros (`serde`, docs) are ignored.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("overlay") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    if value.value().is_empty() {
                        return Err(syn::Error::new_spanned(value, "name must not be empty"));
                    }
                    attrs.name = Some(value.value());
                    return Ok(());
                }

                // skip
                if meta.path.is_ident("skip") {
                    attrs.skip = true;
                    return Ok(());
                }

                Err(meta.error("unsupported overlay attribute"))
            })?;
        }

        Ok(attrs)
    }
}
