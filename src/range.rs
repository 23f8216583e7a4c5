//! The x-range input: two integers, `min, max`.

use std::str::FromStr;

use crate::error::{DescartesError, Result};

const RANGE_FORMAT_MESSAGE: &str =
    "Invalid range format. Please enter range as two integers, e.g., '-10, 10'.";

/// Inclusive x bounds for sampling and the plot's horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XRange {
    /// Lower bound.
    pub min: i64,
    /// Upper bound; always greater than `min`.
    pub max: i64,
}

impl XRange {
    /// Parse range text of the form `min, max`.
    pub fn parse(input: &str) -> Result<Self> {
        let tokens: Vec<&str> = input.split(',').collect();
        let [min_text, max_text] = tokens.as_slice() else {
            return Err(DescartesError::format(RANGE_FORMAT_MESSAGE));
        };

        let min = min_text
            .trim()
            .parse::<i64>()
            .map_err(|_| DescartesError::format(RANGE_FORMAT_MESSAGE))?;
        let max = max_text
            .trim()
            .parse::<i64>()
            .map_err(|_| DescartesError::format(RANGE_FORMAT_MESSAGE))?;

        if min >= max {
            return Err(DescartesError::format(
                "Invalid range: minimum x should be less than maximum x.",
            ));
        }

        Ok(Self { min, max })
    }

    /// Bounds for the plot's horizontal axis.
    pub fn bounds(self) -> [f64; 2] {
        [self.min as f64, self.max as f64]
    }
}

impl Default for XRange {
    fn default() -> Self {
        Self { min: -10, max: 10 }
    }
}

impl FromStr for XRange {
    type Err = DescartesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_default_text() {
        let range = XRange::parse("-10, 10").unwrap();
        assert_eq!(range, XRange { min: -10, max: 10 });
        assert_eq!(range, XRange::default());
    }

    #[test]
    fn tolerates_whitespace() {
        assert_eq!(
            XRange::parse("  -5 ,5 ").unwrap(),
            XRange { min: -5, max: 5 }
        );
    }

    #[test]
    fn rejects_unordered_bounds() {
        let err = XRange::parse("10, -10").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid range: minimum x should be less than maximum x."
        );
        assert!(XRange::parse("3, 3").is_err());
    }

    #[test]
    fn rejects_non_integer_tokens() {
        let err = XRange::parse("a, b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid range format. Please enter range as two integers, e.g., '-10, 10'."
        );
        assert!(XRange::parse("1.5, 3").is_err());
    }

    #[test]
    fn rejects_wrong_token_counts() {
        assert!(XRange::parse("5").is_err());
        assert!(XRange::parse("1, 2, 3").is_err());
        assert!(XRange::parse("").is_err());
    }

    #[test]
    fn parses_via_from_str() {
        let range: XRange = "0, 10".parse().unwrap();
        assert_eq!(range, XRange { min: 0, max: 10 });
    }
}
