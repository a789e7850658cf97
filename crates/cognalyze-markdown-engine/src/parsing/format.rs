use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which dialect of the markdown subset to parse.
///
/// Stored content was written against `V1`, where a fenced code block is a
/// single line. `V2` lets a fence span lines until a closing fence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatVersion {
    /// One-line fenced code blocks.
    #[default]
    V1,
    /// Multi-line fenced code blocks terminated by a closing fence.
    V2,
}

impl FormatVersion {
    /// Whether an opening fence without a closing fence on the same line
    /// starts a multi-line block.
    #[must_use]
    pub fn multiline_fences(self) -> bool {
        matches!(self, FormatVersion::V2)
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatVersion::V1 => f.write_str("v1"),
            FormatVersion::V2 => f.write_str("v2"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown format version '{input}', expected one of: v1, v2")]
pub struct ParseFormatVersionError {
    pub input: String,
}

impl FromStr for FormatVersion {
    type Err = ParseFormatVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" | "legacy" => Ok(FormatVersion::V1),
            "v2" | "2" => Ok(FormatVersion::V2),
            _ => Err(ParseFormatVersionError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("v1", FormatVersion::V1)]
    #[case("V1", FormatVersion::V1)]
    #[case("legacy", FormatVersion::V1)]
    #[case("2", FormatVersion::V2)]
    #[case(" v2 ", FormatVersion::V2)]
    fn parses_known_versions(#[case] input: &str, #[case] expected: FormatVersion) {
        assert_eq!(input.parse::<FormatVersion>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_version() {
        let err = "v3".parse::<FormatVersion>().unwrap_err();
        assert_eq!(err.input, "v3");
        assert!(err.to_string().contains("v1, v2"));
    }

    #[test]
    fn default_is_legacy() {
        assert_eq!(FormatVersion::default(), FormatVersion::V1);
        assert!(!FormatVersion::V1.multiline_fences());
        assert!(FormatVersion::V2.multiline_fences());
    }

    #[test]
    fn display_matches_from_str() {
        for v in [FormatVersion::V1, FormatVersion::V2] {
            assert_eq!(v.to_string().parse::<FormatVersion>(), Ok(v));
        }
    }
}
