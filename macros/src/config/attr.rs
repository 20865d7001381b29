//! `#[config(...)]` attribute parsing.

use syn::{Attribute, Lit, Meta};

/// `#[config(section = "xxx")]`
pub fn get_section(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "section")
}

/// `#[config(default = "xxx")]`
pub fn get_default_value(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "default")
}

/// `#[config(inline_doc)]` or `#[config(inline_doc = "xxx")]`.
///
/// Outer `None`: attribute absent. Inner `None`: flag form, reuse the doc comment.
pub fn get_inline_doc(attrs: &[Attribute]) -> Option<Option<String>> {
    if let Some(text) = get_string_attr(attrs, "inline_doc") {
        return Some(Some(text));
    }
    has_attr(attrs, "inline_doc").then_some(None)
}

fn get_string_attr(attrs: &[Attribute], key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.input.peek(syn::Token![=]) {
                let is_key = meta.path.is_ident(key);
                let stream = meta.value()?;
                if is_key {
                    let lit: syn::LitStr = stream.parse()?;
                    value = Some(lit.value());
                } else if stream.parse::<syn::Ident>().is_err() {
                    let _ = stream.parse::<Lit>();
                }
            }
            Ok(())
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

/// Check for a flag like `#[config(sub)]`.
pub fn has_attr(attrs: &[Attribute], key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            if meta.input.peek(syn::Token![=]) {
                let stream = meta.value()?;
                if stream.parse::<syn::Ident>().is_err() {
                    let _ = stream.parse::<Lit>();
                }
            }
            Ok(())
        });
        if found {
            return true;
        }
    }
    false
}

/// Join `#[doc = "..."]` attributes.
pub fn extract_doc_comment(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n").trim().to_string())
    }
}
