//! Type helpers.

use quote::quote;
use syn::Type;

pub fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Infer section name from struct name.
pub fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .or_else(|| name.strip_suffix("Settings"))
        .unwrap_or(name);
    to_snake_case(name)
}

pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Quote a compile-time default unless the field type is a bool or number.
pub fn format_default_for_type(value: &str, ty: &str) -> String {
    const UNQUOTED: &[&str] = &[
        "bool", "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize", "f32",
        "f64",
    ];
    if UNQUOTED.contains(&ty) || ty.starts_with("Vec<") {
        value.to_string()
    } else {
        format!("\"{}\"", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_section() {
        assert_eq!(infer_section("ManifestConfig"), "manifest");
        assert_eq!(infer_section("SiteInfoConfig"), "site_info");
        assert_eq!(infer_section("SiteSectionConfig"), "site");
        assert_eq!(infer_section("Plain"), "plain");
    }

    #[test]
    fn test_format_default_for_type() {
        assert_eq!(format_default_for_type("true", "bool"), "true");
        assert_eq!(format_default_for_type("200", "u32"), "200");
        assert_eq!(format_default_for_type("list", "Grid"), "\"list\"");
        assert_eq!(format_default_for_type("/", "String"), "\"/\"");
    }
}
