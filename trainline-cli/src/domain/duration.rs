//! Relative search windows ("3hours", "2d", …).

use chrono::Duration;

use super::error::ParseError;

/// Window used when the token names neither days nor hours.
pub const DEFAULT_WINDOW_HOURS: i64 = 3;

/// Decode a duration token into a time span.
///
/// The integer in front of the first `d` is a number of days; failing that,
/// the integer in front of the first `h` is a number of hours. Anything after
/// the unit letter is ignored, so "2days" and "2d" are the same window. A
/// token with neither letter falls back to three hours.
///
/// Days are matched before hours: "1d2h" is one day.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use trainline_cli::domain::decode_duration;
///
/// assert_eq!(decode_duration("1day").unwrap(), Duration::days(1));
/// assert_eq!(decode_duration("3hours").unwrap(), Duration::hours(3));
/// assert_eq!(decode_duration("1d2h").unwrap(), Duration::days(1));
/// assert_eq!(decode_duration("soon").unwrap(), Duration::hours(3));
///
/// assert!(decode_duration("day").is_err());
/// ```
pub fn decode_duration(token: &str) -> Result<Duration, ParseError> {
    if let Some((amount, _)) = token.split_once('d') {
        let days = parse_amount(amount, token)?;
        Duration::try_days(days).ok_or_else(|| out_of_range(token))
    } else if let Some((amount, _)) = token.split_once('h') {
        let hours = parse_amount(amount, token)?;
        Duration::try_hours(hours).ok_or_else(|| out_of_range(token))
    } else {
        Ok(Duration::hours(DEFAULT_WINDOW_HOURS))
    }
}

/// Parse the integer prefix of a duration token.
///
/// Surrounding whitespace and a leading sign are accepted.
fn parse_amount(amount: &str, token: &str) -> Result<i64, ParseError> {
    amount
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidDuration {
            token: token.to_string(),
        })
}

fn out_of_range(token: &str) -> ParseError {
    ParseError::DurationOutOfRange {
        token: token.to_string(),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any day count with any suffix decodes to that many days
        #[test]
        fn days_roundtrip(n in 0i64..10_000, suffix in "[a-z]{0,5}") {
            let token = format!("{n}d{suffix}");
            prop_assert_eq!(decode_duration(&token).unwrap(), Duration::days(n));
        }

        /// Hour tokens without a 'd' decode to that many hours
        #[test]
        fn hours_roundtrip(n in 0i64..100_000, suffix in "[a-ce-z]{0,5}") {
            let token = format!("{n}h{suffix}");
            prop_assert_eq!(decode_duration(&token).unwrap(), Duration::hours(n));
        }

        /// Tokens with neither unit letter always give the default window
        #[test]
        fn default_without_unit(token in "[a-ce-gi-z0-9 ]{0,12}") {
            prop_assert_eq!(
                decode_duration(&token).unwrap(),
                Duration::hours(DEFAULT_WINDOW_HOURS)
            );
        }
    }
}
