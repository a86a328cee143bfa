//! Parsing and validation of user-entered sequences.
//!
//! The front end sends raw text such as `"5 3 8 1"`. Tokens may be
//! separated by whitespace, commas, or both. Anything that is not a 32-bit
//! integer is rejected rather than silently dropped.

use tracing::warn;

use crate::error::TraceError;

/// Parse `text` into a sequence of integers.
///
/// Blank text yields an empty sequence.
///
/// # Errors
///
/// Returns [`TraceError::InvalidInput`] naming the first token that is
/// not an integer in the `i32` range.
pub fn parse_array_input(text: &str) -> Result<Vec<i32>, TraceError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i32>().map_err(|e| {
                warn!(token, error = %e, "Rejected non-numeric input");
                TraceError::InvalidInput(format!("{token:?} is not an integer"))
            })
        })
        .collect()
}

/// Reject sequences longer than `max_len`.
///
/// # Errors
///
/// Returns [`TraceError::InvalidInput`] when `array.len() > max_len`.
pub fn validate_array(array: &[i32], max_len: usize) -> Result<(), TraceError> {
    if array.len() > max_len {
        warn!(len = array.len(), max_len, "Rejected oversized input");
        return Err(TraceError::InvalidInput(format!(
            "array has {} elements, the limit is {max_len}",
            array.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_space_separated_values() {
        assert_eq!(parse_array_input("5 3 8 1"), Ok(vec![5, 3, 8, 1]));
    }

    #[test]
    fn accepts_commas_tabs_and_newlines() {
        assert_eq!(
            parse_array_input(" 4,\t-2 ,\n 17,,0 "),
            Ok(vec![4, -2, 17, 0])
        );
    }

    #[test]
    fn blank_text_is_empty() {
        assert_eq!(parse_array_input(""), Ok(vec![]));
        assert_eq!(parse_array_input("  \n "), Ok(vec![]));
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = parse_array_input("1 two 3").unwrap_err();
        assert!(matches!(err, TraceError::InvalidInput(msg) if msg.contains("two")));
    }

    #[test]
    fn rejects_out_of_range_and_fractional_values() {
        assert!(parse_array_input("2147483648").is_err());
        assert!(parse_array_input("1.5").is_err());
        assert_eq!(parse_array_input("-2147483648"), Ok(vec![i32::MIN]));
    }

    #[test]
    fn length_limit_is_inclusive() {
        let hundred = vec![1; 100];
        assert_eq!(validate_array(&hundred, 100), Ok(()));
        let too_many = vec![1; 101];
        assert!(matches!(
            validate_array(&too_many, 100),
            Err(TraceError::InvalidInput(_))
        ));
    }
}
