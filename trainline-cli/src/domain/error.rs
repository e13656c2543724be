//! Parse error types.
//!
//! Every failure while turning command-line tokens into a search query is
//! reported through [`ParseError`]. None of them are recoverable: the
//! invocation stops before the trip search is attempted.

use std::fmt;

/// A component of an explicit `dd.mm.yyyy:HH.MM` date token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Day,
    Month,
    Year,
    Hour,
    Minute,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Day => "day",
            Field::Month => "month",
            Field::Year => "year",
            Field::Hour => "hour",
            Field::Minute => "minute",
        };
        f.write_str(name)
    }
}

/// Errors raised while resolving the search window.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The amount in front of `d` or `h` is not an integer
    #[error("invalid duration {token:?}: expected <integer>d... or <integer>h...")]
    InvalidDuration { token: String },

    /// The amount is an integer but too large to be a time span
    #[error("duration {token:?} is out of range")]
    DurationOutOfRange { token: String },

    /// No `:` between the date and the time
    #[error("invalid date {token:?}: expected dd.mm.yyyy:HH.MM")]
    MissingTimeSeparator { token: String },

    /// More than one `:` in the token
    #[error("invalid date {token:?}: unexpected ':' after the time")]
    UnexpectedSeparator { token: String },

    /// A `.`-separated component is absent
    #[error("invalid date {token:?}: missing {field}")]
    MissingField { token: String, field: Field },

    /// Extra `.`-separated components after the last expected one
    #[error("invalid date {token:?}: unexpected component after {field}")]
    UnexpectedField { token: String, field: Field },

    /// A component is not an integer
    #[error("invalid date {token:?}: {field} {value:?} is not a number")]
    InvalidField {
        token: String,
        field: Field,
        value: String,
    },

    /// Day, month and year do not name a calendar day
    #[error("invalid date {token:?}: no such calendar day")]
    InvalidDate { token: String },

    /// Hour and minute do not name a time of day
    #[error("invalid date {token:?}: no such time of day")]
    InvalidTime { token: String },

    /// Adding the duration to the start of the window overflowed
    #[error("search window ending {duration} after {start} is out of range")]
    RangeOverflow { start: String, duration: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ParseError::InvalidDuration {
            token: "xd".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid duration \"xd\": expected <integer>d... or <integer>h..."
        );

        let err = ParseError::MissingField {
            token: "25.12:14.30".into(),
            field: Field::Year,
        };
        assert_eq!(err.to_string(), "invalid date \"25.12:14.30\": missing year");

        let err = ParseError::InvalidField {
            token: "aa.12.2024:14.30".into(),
            field: Field::Day,
            value: "aa".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date \"aa.12.2024:14.30\": day \"aa\" is not a number"
        );

        let err = ParseError::InvalidDate {
            token: "31.02.2024:10.00".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date \"31.02.2024:10.00\": no such calendar day"
        );
    }

    #[test]
    fn field_display() {
        assert_eq!(Field::Day.to_string(), "day");
        assert_eq!(Field::Month.to_string(), "month");
        assert_eq!(Field::Year.to_string(), "year");
        assert_eq!(Field::Hour.to_string(), "hour");
        assert_eq!(Field::Minute.to_string(), "minute");
    }
}
