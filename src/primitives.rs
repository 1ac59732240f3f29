//! Primitive transforms
//!
//! These operate directly on the input and depend on nothing else in the
//! crate. Casing is ASCII-only: any non-ASCII character is passed through
//! untouched, so output is always valid UTF-8.

/// Word separators recognised by the camel, sentence and snake families.
pub(crate) fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '.' | ' ')
}

/// ASCII whitespace, including vertical tab (`\x0b`).
///
/// `char::is_ascii_whitespace` leaves out vertical tab, which the trimming
/// rules treat as whitespace.
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Uppercase the first character (ASCII only), leaving the rest as-is.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(s.len());
            result.push(first.to_ascii_uppercase());
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

/// Convert ASCII letters to lowercase
///
/// # Examples
/// ```
/// use stringcase::lowercase;
/// assert_eq!(lowercase("FooBarBaz"), "foobarbaz");
/// ```
pub fn lowercase(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Convert ASCII letters to uppercase
///
/// # Examples
/// ```
/// use stringcase::uppercase;
/// assert_eq!(uppercase("foo_bar_baz"), "FOO_BAR_BAZ");
/// ```
pub fn uppercase(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Strip leading and trailing ASCII whitespace
///
/// # Examples
/// ```
/// use stringcase::trimcase;
/// assert_eq!(trimcase("  hi  "), "hi");
/// assert_eq!(trimcase(" \t\n"), "");
/// ```
pub fn trimcase(s: &str) -> String {
    s.trim_matches(is_space).to_string()
}

/// Keep only ASCII letters and digits, preserving order and casing
///
/// # Examples
/// ```
/// use stringcase::alphanumcase;
/// assert_eq!(alphanumcase("Foo_123 Bar!"), "Foo123Bar");
/// ```
pub fn alphanumcase(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphanumeric).collect()
}
