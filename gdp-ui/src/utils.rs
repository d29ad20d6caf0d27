use thiserror::Error;

/// Error returned when a string cannot be parsed as a real number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid number '{input}': {reason}")]
pub struct ParseRealError {
    pub input: String,
    reason: String,
}

/// Parses a decimal string into an `f64`.
///
/// Surrounding whitespace is ignored. Empty input is an error, as is a comma
/// in any position: `"0,8"` could mean either 0.8 or 8 and is rejected rather
/// than guessed. `"inf"` and `"NaN"` are accepted and evaluate as such.
pub fn parse_real(s: &str) -> Result<f64, ParseRealError> {
    let trimmed = s.trim();
    let invalid = |reason: String| {
        tracing::warn!(input = %s, "invalid number: {reason}");
        ParseRealError {
            input: s.to_string(),
            reason,
        }
    };

    if trimmed.is_empty() {
        return Err(invalid("empty input".to_string()));
    }
    if trimmed.contains(',') {
        return Err(invalid("use '.' as the decimal separator".to_string()));
    }
    trimmed.parse().map_err(|e: std::num::ParseFloatError| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_real_accepts_decimals() {
        assert_eq!(parse_real("0.8").unwrap(), 0.8);
        assert_eq!(parse_real("-4").unwrap(), -4.0);
        assert_eq!(parse_real("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn parse_real_trims_whitespace() {
        assert_eq!(parse_real("  3.5  ").unwrap(), 3.5);
    }

    #[test]
    fn parse_real_rejects_empty() {
        assert!(parse_real("").is_err());
        assert!(parse_real("   ").is_err());
    }

    #[test]
    fn parse_real_rejects_comma() {
        let error = parse_real("0,8").unwrap_err();

        assert_eq!(error.input, "0,8");
        assert!(error.to_string().contains("decimal separator"));
    }

    #[test]
    fn parse_real_rejects_text() {
        assert!(parse_real("abc").is_err());
        assert!(parse_real("4.0.1").is_err());
    }

    #[test]
    fn parse_real_accepts_non_finite_spellings() {
        assert!(parse_real("inf").unwrap().is_infinite());
        assert!(parse_real("NaN").unwrap().is_nan());
    }
}
