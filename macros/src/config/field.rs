//! Per-field information collected from the derive input.

use syn::Type;

use crate::config::attr::{extract_doc_comment, get_default_value, get_inline_doc, has_attr};

pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    pub doc: Option<String>,
    /// Trailing `# ...` comment; set when `inline_doc` is present.
    pub inline_doc: Option<String>,
    pub default: Option<String>,
    pub sub: bool,
    pub ty: Type,
}

impl FieldInfo {
    pub fn from_field(field: &syn::Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;
        let doc = extract_doc_comment(attrs);

        // Flag form reuses the first doc line as the trailing comment.
        let inline_doc = get_inline_doc(attrs).and_then(|explicit| {
            explicit.or_else(|| {
                doc.as_deref()
                    .and_then(|d| d.lines().next())
                    .map(|l| l.trim().trim_end_matches('.').to_string())
            })
        });

        Some(Self {
            name: ident.clone(),
            toml_name: ident.to_string(),
            doc,
            inline_doc,
            default: get_default_value(attrs),
            sub: has_attr(attrs, "sub"),
            ty: field.ty.clone(),
        })
    }

    /// Dotted TOML path of this field inside `section`.
    pub fn full_path(&self, section: &str) -> String {
        if section.is_empty() {
            self.toml_name.clone()
        } else {
            format!("{}.{}", section, self.toml_name)
        }
    }
}
