//! Explicit `dd.mm.yyyy:HH.MM` timestamps.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::error::{Field, ParseError};

/// Separator between the date and the time.
const DATE_TIME_SEPARATOR: char = ':';

/// Separator between the components of the date and of the time.
const FIELD_SEPARATOR: char = '.';

/// Years accepted in an explicit date.
const YEAR_RANGE: std::ops::RangeInclusive<i64> = 1..=9999;

/// Decode an explicit `dd.mm.yyyy:HH.MM` token into a timestamp.
///
/// The date is read day first, then month, then year. Seconds are always
/// zero. Each component is an integer; surrounding whitespace and leading
/// zeros are accepted, so "5.1.2025:9.5" is the 5th of January at 09:05.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trainline_cli::domain::decode_explicit;
///
/// let ts = decode_explicit("25.12.2024:14.30").unwrap();
/// let expected = NaiveDate::from_ymd_opt(2024, 12, 25)
///     .unwrap()
///     .and_hms_opt(14, 30, 0)
///     .unwrap();
/// assert_eq!(ts, expected);
///
/// // Year first is rejected
/// assert!(decode_explicit("2024.12.25:14.30").is_err());
/// // Missing time
/// assert!(decode_explicit("25.12.2024").is_err());
/// ```
pub fn decode_explicit(token: &str) -> Result<NaiveDateTime, ParseError> {
    let (date_part, time_part) =
        token
            .split_once(DATE_TIME_SEPARATOR)
            .ok_or_else(|| ParseError::MissingTimeSeparator {
                token: token.to_string(),
            })?;

    if time_part.contains(DATE_TIME_SEPARATOR) {
        return Err(ParseError::UnexpectedSeparator {
            token: token.to_string(),
        });
    }

    let [day, month, year] =
        split_fields(date_part, [Field::Day, Field::Month, Field::Year], token)?;
    let [hour, minute] = split_fields(time_part, [Field::Hour, Field::Minute], token)?;

    let invalid_date = || ParseError::InvalidDate {
        token: token.to_string(),
    };
    if !YEAR_RANGE.contains(&year) {
        return Err(invalid_date());
    }
    let date = NaiveDate::from_ymd_opt(
        i32::try_from(year).map_err(|_| invalid_date())?,
        u32::try_from(month).map_err(|_| invalid_date())?,
        u32::try_from(day).map_err(|_| invalid_date())?,
    )
    .ok_or_else(invalid_date)?;

    let invalid_time = || ParseError::InvalidTime {
        token: token.to_string(),
    };
    let time = NaiveTime::from_hms_opt(
        u32::try_from(hour).map_err(|_| invalid_time())?,
        u32::try_from(minute).map_err(|_| invalid_time())?,
        0,
    )
    .ok_or_else(invalid_time)?;

    Ok(date.and_time(time))
}

/// Split one half of the token into exactly `N` integer components.
fn split_fields<const N: usize>(
    part: &str,
    fields: [Field; N],
    token: &str,
) -> Result<[i64; N], ParseError> {
    let mut values = [0i64; N];
    let mut pieces = part.split(FIELD_SEPARATOR);
    let mut last = None;

    for (slot, field) in values.iter_mut().zip(fields) {
        let piece = pieces.next().ok_or_else(|| ParseError::MissingField {
            token: token.to_string(),
            field,
        })?;
        *slot = piece
            .trim()
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidField {
                token: token.to_string(),
                field,
                value: piece.to_string(),
            })?;
        last = Some(field);
    }

    if let (Some(field), Some(_)) = (last, pieces.next()) {
        return Err(ParseError::UnexpectedField {
            token: token.to_string(),
            field,
        });
    }

    Ok(values)
}
