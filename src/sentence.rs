//! Sentence case

use crate::primitives::{capitalize_first, is_separator, is_space};

/// Convert to Sentence case
///
/// Separators and humps both become a single space, everything is
/// lowercased, the result is trimmed and its first letter uppercased.
///
/// # Examples
/// ```
/// use stringcase::sentencecase;
/// assert_eq!(sentencecase("fooBar_baz"), "Foo bar baz");
/// assert_eq!(sentencecase("FooBarBaz"), "Foo bar baz");
/// ```
pub fn sentencecase(s: &str) -> String {
    let mut words = String::with_capacity(s.len() * 2);

    for c in s.chars() {
        if is_separator(c) {
            push_space(&mut words);
        } else {
            if c.is_ascii_uppercase() {
                push_space(&mut words);
            }
            words.push(c.to_ascii_lowercase());
        }
    }

    capitalize_first(words.trim_matches(is_space))
}

/// Push a space unless the buffer is empty or already ends in one.
fn push_space(buf: &mut String) {
    if !buf.is_empty() && !buf.ends_with(' ') {
        buf.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentencecase() {
        assert_eq!(sentencecase("foo_bar_baz"), "Foo bar baz");
        assert_eq!(sentencecase("FooBarBaz"), "Foo bar baz");
        assert_eq!(sentencecase("fooBar_baz"), "Foo bar baz");
        assert_eq!(sentencecase(""), "");
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(sentencecase("foo__-bar"), "Foo bar");
        assert_eq!(sentencecase("foo_Bar"), "Foo bar");
        assert_eq!(sentencecase("ABC"), "A b c");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(sentencecase("__foo__"), "Foo");
        assert_eq!(sentencecase("-._ "), "");
        assert_eq!(sentencecase("\tfoo\n"), "Foo");
    }

    #[test]
    fn test_other_chars_lowercased() {
        assert_eq!(sentencecase("foo/Bar"), "Foo/ bar");
        assert_eq!(sentencecase("été"), "été");
    }
}
