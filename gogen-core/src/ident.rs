//! Identifier utilities for generated Go code.

/// Fallback identifier used when nothing valid is left after sanitizing.
pub const FALLBACK_IDENT: &str = "pkg";

/// Turn an arbitrary path segment into a valid bare Go identifier.
///
/// The first character must be an ASCII letter or `_` and is replaced with
/// `_` otherwise. Later characters keep letters, digits and `_`, map `-` and
/// `.` to `_`, and drop everything else.
///
/// ```
/// use gogen_core::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("some-pkg"), "some_pkg");
/// assert_eq!(sanitize_identifier("123pkg"), "_23pkg");
/// assert_eq!(sanitize_identifier(""), "pkg");
/// ```
pub fn sanitize_identifier(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for (i, c) in s.chars().enumerate() {
        if i == 0 {
            if c.is_ascii_alphabetic() || c == '_' {
                result.push(c);
            } else {
                result.push('_');
            }
            continue;
        }

        match c {
            c if c.is_ascii_alphanumeric() || c == '_' => result.push(c),
            '-' | '.' => result.push('_'),
            _ => {}
        }
    }

    if result.is_empty() {
        FALLBACK_IDENT.to_string()
    } else {
        result
    }
}

/// Check whether `s` is already a valid bare identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
