//! camelCase and PascalCase

use crate::primitives::{capitalize_first, is_separator};

/// Convert to camelCase
///
/// Separators mark the next alphanumeric character for uppercasing and are
/// dropped. The first emitted character is lowercased. Other characters
/// keep their original casing, and anything that is neither a separator nor
/// ASCII alphanumeric is dropped.
///
/// # Examples
/// ```
/// use stringcase::camelcase;
/// assert_eq!(camelcase("foo_bar-baz qux"), "fooBarBazQux");
/// assert_eq!(camelcase("FooBarBaz"), "fooBarBaz");
/// ```
pub fn camelcase(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = false;

    for c in s.chars() {
        if is_separator(c) {
            capitalize_next = true;
        } else if c.is_ascii_alphanumeric() {
            if result.is_empty() {
                result.push(c.to_ascii_lowercase());
            } else if capitalize_next {
                result.push(c.to_ascii_uppercase());
                capitalize_next = false;
            } else {
                result.push(c);
            }
        }
    }
    result
}

/// Convert to PascalCase
///
/// # Examples
/// ```
/// use stringcase::pascalcase;
/// assert_eq!(pascalcase("foo_bar"), "FooBar");
/// ```
pub fn pascalcase(s: &str) -> String {
    capitalize_first(&camelcase(s))
}
