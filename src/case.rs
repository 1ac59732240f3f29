//! Case styles as data
//!
//! [`Case`] names every transform in the crate so callers can pick one at
//! runtime (from a CLI argument, a config file, a JSON request) and dispatch
//! to it with [`Case::apply`].

use crate::error::{Error, Result};
use crate::{
    alphanumcase, backslashcase, camelcase, capitalcase, constcase, dotcase, lowercase,
    pascalcase, pathcase, sentencecase, snakecase, spinalcase, titlecase, trimcase, uppercase,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A case style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Camel,
    Capital,
    Const,
    Lower,
    Pascal,
    Path,
    Backslash,
    Sentence,
    Snake,
    Spinal,
    Dot,
    Title,
    Trim,
    Upper,
    Alphanum,
}

impl Case {
    /// Every style, in the order the library exposes them
    pub const ALL: [Case; 15] = [
        Case::Camel,
        Case::Capital,
        Case::Const,
        Case::Lower,
        Case::Pascal,
        Case::Path,
        Case::Backslash,
        Case::Sentence,
        Case::Snake,
        Case::Spinal,
        Case::Dot,
        Case::Title,
        Case::Trim,
        Case::Upper,
        Case::Alphanum,
    ];

    /// Short canonical name, e.g. `"snake"`
    pub fn name(self) -> &'static str {
        match self {
            Case::Camel => "camel",
            Case::Capital => "capital",
            Case::Const => "const",
            Case::Lower => "lower",
            Case::Pascal => "pascal",
            Case::Path => "path",
            Case::Backslash => "backslash",
            Case::Sentence => "sentence",
            Case::Snake => "snake",
            Case::Spinal => "spinal",
            Case::Dot => "dot",
            Case::Title => "title",
            Case::Trim => "trim",
            Case::Upper => "upper",
            Case::Alphanum => "alphanum",
        }
    }

    /// Name of the function implementing this style, e.g. `"snakecase"`
    pub fn function_name(self) -> String {
        format!("{}case", self.name())
    }

    /// One-line human description
    pub fn description(self) -> &'static str {
        match self {
            Case::Camel => "Convert string into camel case.",
            Case::Capital => "Convert string into capital case.",
            Case::Const => "Convert string into const case.",
            Case::Lower => "Convert string into lower case.",
            Case::Pascal => "Convert string into pascal case.",
            Case::Path => "Convert string into path case.",
            Case::Backslash => "Convert string into backslash case.",
            Case::Sentence => "Convert string into sentence case.",
            Case::Snake => "Convert string into snake case.",
            Case::Spinal => "Convert string into spinal case.",
            Case::Dot => "Convert string into dot case.",
            Case::Title => "Convert string into title case.",
            Case::Trim => "Convert string into trim case.",
            Case::Upper => "Convert string into upper case.",
            Case::Alphanum => "Convert string into alphanumeric case.",
        }
    }

    /// Run this style's transform
    pub fn apply(self, input: &str) -> String {
        log::trace!("{}case on {} bytes", self.name(), input.len());
        match self {
            Case::Camel => camelcase(input),
            Case::Capital => capitalcase(input),
            Case::Const => constcase(input),
            Case::Lower => lowercase(input),
            Case::Pascal => pascalcase(input),
            Case::Path => pathcase(input),
            Case::Backslash => backslashcase(input),
            Case::Sentence => sentencecase(input),
            Case::Snake => snakecase(input),
            Case::Spinal => spinalcase(input),
            Case::Dot => dotcase(input),
            Case::Title => titlecase(input),
            Case::Trim => trimcase(input),
            Case::Upper => uppercase(input),
            Case::Alphanum => alphanumcase(input),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = Error;

    /// Accepts `snake`, `snakecase`, `snake_case`, `Snake-Case` and the
    /// common aliases (`kebab`, `shout`, `upper_camel`, ...).
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let key = match normalized.strip_suffix("case") {
            Some(stem) if !stem.is_empty() => stem.trim_end_matches('_'),
            _ => normalized.as_str(),
        };

        if let Some(case) = Case::ALL.iter().find(|c| c.name() == key) {
            return Ok(*case);
        }

        match key {
            "kebab" | "dash" => Ok(Case::Spinal),
            "upper_snake" | "screaming_snake" | "shout" => Ok(Case::Const),
            "lower_camel" => Ok(Case::Camel),
            "upper_camel" => Ok(Case::Pascal),
            "slash" => Ok(Case::Path),
            "heading" => Ok(Case::Title),
            "alnum" | "alphanumeric" => Ok(Case::Alphanum),
            _ => Err(Error::UnknownCase(s.to_string())),
        }
    }
}

/// One input run through one style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Conversion {
    pub case: Case,
    pub input: String,
    pub output: String,
}

/// Convert `input` with the given style
pub fn convert(case: Case, input: &str) -> String {
    case.apply(input)
}

/// Borrow raw bytes as text, rejecting anything that is not UTF-8
pub fn text_from_bytes(input: &[u8]) -> Result<&str> {
    std::str::from_utf8(input)
        .map_err(|e| Error::InvalidInput(format!("expected UTF-8 text: {}", e)))
}

/// Convert raw bytes, rejecting anything that is not UTF-8 text
pub fn convert_bytes(case: Case, input: &[u8]) -> Result<String> {
    Ok(case.apply(text_from_bytes(input)?))
}

/// Run `input` through every style
pub fn convert_all(input: &str) -> Vec<Conversion> {
    Case::ALL
        .iter()
        .map(|&case| Conversion {
            case,
            input: input.to_string(),
            output: case.apply(input),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for case in Case::ALL {
            assert_eq!(case.name().parse::<Case>().unwrap(), case);
            assert_eq!(case.function_name().parse::<Case>().unwrap(), case);
            assert_eq!(case.to_string().parse::<Case>().unwrap(), case);
        }
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("snake_case".parse::<Case>().unwrap(), Case::Snake);
        assert_eq!("Snake-Case".parse::<Case>().unwrap(), Case::Snake);
        assert_eq!(" PASCAL ".parse::<Case>().unwrap(), Case::Pascal);
        assert_eq!("kebab-case".parse::<Case>().unwrap(), Case::Spinal);
        assert_eq!("SCREAMING_SNAKE_CASE".parse::<Case>().unwrap(), Case::Const);
        assert_eq!("upper_camel".parse::<Case>().unwrap(), Case::Pascal);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "wavy".parse::<Case>().unwrap_err();
        assert!(matches!(err, Error::UnknownCase(ref s) if s == "wavy"));
        assert!("case".parse::<Case>().is_err());
        assert!("".parse::<Case>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Case::Alphanum).unwrap();
        assert_eq!(json, "\"alphanum\"");
        let back: Case = serde_json::from_str("\"backslash\"").unwrap();
        assert_eq!(back, Case::Backslash);
    }

    #[test]
    fn test_apply_dispatch() {
        assert_eq!(Case::Snake.apply("FooBar"), "foo_bar");
        assert_eq!(Case::Backslash.apply("FooBar"), "foo\\bar");
        assert_eq!(convert(Case::Title, "fooBar"), "Foo Bar");
    }

    #[test]
    fn test_convert_bytes() {
        assert_eq!(convert_bytes(Case::Const, b"fooBar").unwrap(), "FOO_BAR");
        let err = convert_bytes(Case::Snake, &[0x66, 0xff, 0x6f]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_text_from_bytes() {
        assert_eq!(text_from_bytes("café".as_bytes()).unwrap(), "café");
        let err = text_from_bytes(&[0xc3]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid input: expected UTF-8 text"));
    }

    #[test]
    fn test_convert_all_covers_every_case() {
        let all = convert_all("fooBar");
        assert_eq!(all.len(), Case::ALL.len());
        assert!(all.iter().all(|c| c.input == "fooBar"));
        let dot = all.iter().find(|c| c.case == Case::Dot).unwrap();
        assert_eq!(dot.output, "foo.bar");
    }
}
