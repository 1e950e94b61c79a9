//! Display helpers for type and Pokemon names

/// Capitalize the first character of a name, leaving the rest untouched.
///
/// This is not title-casing: `"mr-mime"` becomes `"Mr-mime"` and an
/// already-capitalized name passes through unchanged. Only one-to-one case
/// mappings apply; a first char whose uppercase form spans several chars
/// (`ß`, `ﬁ`) is kept as-is.
pub fn format_type_name(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let first = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };

    let mut out = String::with_capacity(name.len());
    out.push(first);
    out.push_str(chars.as_str());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_lowercase() {
        assert_eq!(format_type_name("electric"), "Electric");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_type_name(""), "");
    }

    #[test]
    fn test_format_only_touches_first_char() {
        assert_eq!(format_type_name("mr-mime"), "Mr-mime");
        assert_eq!(format_type_name("tapu koko"), "Tapu koko");
        assert_eq!(format_type_name("fIRE"), "FIRE");
        assert_eq!(format_type_name("Water"), "Water");
    }

    #[test]
    fn test_format_does_not_trim() {
        assert_eq!(format_type_name(" grass"), " grass");
        assert_eq!(format_type_name("x"), "X");
    }

    #[test]
    fn test_format_keeps_char_count() {
        for name in ["ßeta", "ŉame", "ﬁre"] {
            let formatted = format_type_name(name);
            assert_eq!(formatted.chars().count(), name.chars().count());
        }
        assert_eq!(format_type_name("ßeta"), "ßeta");
        assert_eq!(format_type_name("ﬁre"), "ﬁre");
    }

    #[test]
    fn test_format_non_ascii_first_char() {
        assert_eq!(format_type_name("éclair"), "Éclair");
    }
}
