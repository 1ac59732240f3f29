//! snake_case normalizer
//!
//! `snakecase` is the canonical token form that the separator-substitution
//! styles in [`crate::derived`] are built on.

/// Convert to snake_case
///
/// `-`, `.` and space become `_`. The first character is lowercased and
/// every later ASCII uppercase letter becomes `_` plus its lowercase form,
/// unless it directly follows an underscore. Separator runs are never
/// collapsed, so `"a--b"` gives `"a__b"` and `"ABC"` gives `"a_b_c"`.
///
/// # Examples
/// ```
/// use stringcase::snakecase;
/// assert_eq!(snakecase("FooBarBaz"), "foo_bar_baz");
/// assert_eq!(snakecase("Foo Bar-Baz.qux"), "foo_bar_baz_qux");
/// ```
pub fn snakecase(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for (i, c) in s.chars().enumerate() {
        let c = match c {
            '-' | '.' | ' ' => '_',
            other => other,
        };
        if i == 0 {
            result.push(c.to_ascii_lowercase());
        } else if c.is_ascii_uppercase() {
            if !result.ends_with('_') {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
