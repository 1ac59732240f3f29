//! Styles derived from snake_case
//!
//! Each function here runs [`snakecase`] first and then makes a single pass
//! over its output, except [`capitalcase`] which works on the raw input.

use crate::primitives::capitalize_first;
use crate::snake::snakecase;

/// Replace every `_` in the snake_case form with `sep`.
fn replace_underscores(s: &str, sep: char) -> String {
    snakecase(s)
        .chars()
        .map(|c| if c == '_' { sep } else { c })
        .collect()
}

/// Convert to CONST_CASE
///
/// # Examples
/// ```
/// use stringcase::constcase;
/// assert_eq!(constcase("fooBar"), "FOO_BAR");
/// ```
pub fn constcase(s: &str) -> String {
    snakecase(s).to_ascii_uppercase()
}

/// Convert to path/case
///
/// # Examples
/// ```
/// use stringcase::pathcase;
/// assert_eq!(pathcase("FooBarBaz"), "foo/bar/baz");
/// ```
pub fn pathcase(s: &str) -> String {
    replace_underscores(s, '/')
}

/// Convert to backslash\case
///
/// # Examples
/// ```
/// use stringcase::backslashcase;
/// assert_eq!(backslashcase("FooBarBaz"), r"foo\bar\baz");
/// ```
pub fn backslashcase(s: &str) -> String {
    replace_underscores(s, '\\')
}

/// Convert to spinal-case
///
/// # Examples
/// ```
/// use stringcase::spinalcase;
/// assert_eq!(spinalcase("FooBarBaz"), "foo-bar-baz");
/// ```
pub fn spinalcase(s: &str) -> String {
    replace_underscores(s, '-')
}

/// Convert to dot.case
///
/// # Examples
/// ```
/// use stringcase::dotcase;
/// assert_eq!(dotcase("FooBarBaz"), "foo.bar.baz");
/// ```
pub fn dotcase(s: &str) -> String {
    replace_underscores(s, '.')
}

/// Convert to Title Case
///
/// Every `_` of the snake_case form becomes a space. The first letter of
/// each segment is uppercased and the rest lowercased. Empty segments are
/// kept, so `"a__b"` gives `"A  B"`.
///
/// # Examples
/// ```
/// use stringcase::titlecase;
/// assert_eq!(titlecase("foo_bar_baz"), "Foo Bar Baz");
/// ```
pub fn titlecase(s: &str) -> String {
    let snake = snakecase(s);
    let mut result = String::with_capacity(snake.len());
    let mut capitalize_next = true;

    for c in snake.chars() {
        if c == '_' {
            result.push(' ');
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c.to_ascii_lowercase());
        }
    }
    result
}

/// Uppercase only the first character of the input
///
/// # Examples
/// ```
/// use stringcase::capitalcase;
/// assert_eq!(capitalcase("foo_bar_baz"), "Foo_bar_baz");
/// ```
pub fn capitalcase(s: &str) -> String {
    capitalize_first(s)
}
