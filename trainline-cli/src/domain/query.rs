//! Search query resolution.
//!
//! Turns the raw command-line tokens into the normalized query handed to the
//! trip search: two station names, an absolute time window and an optional
//! transportation mean.

use chrono::NaiveDateTime;

use super::duration::decode_duration;
use super::error::ParseError;
use super::explicit::decode_explicit;
use super::transport::{Transport, TransportationMean};

/// Format of the window bounds sent to the trip search.
pub const DATE_PARAM_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Raw inputs of a search, as typed by the user.
#[derive(Debug, Clone, Copy)]
pub struct QueryParams<'a> {
    pub departure: &'a str,
    pub arrival: &'a str,
    /// Duration token, e.g. "3hours"
    pub next: &'a str,
    /// Explicit window start, `dd.mm.yyyy:HH.MM`
    pub from_time: Option<&'a str>,
    /// Explicit window end, `dd.mm.yyyy:HH.MM`
    pub to_time: Option<&'a str>,
    pub transport: Transport,
}

/// A resolved trip search.
///
/// `to_date` is expected to be after `from_date` but this is not enforced;
/// the window is passed to the trip search as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub departure: String,
    pub arrival: String,
    pub from_date: NaiveDateTime,
    pub to_date: NaiveDateTime,
    /// `None` when any transportation mean is acceptable
    pub transportation_mean: Option<TransportationMean>,
}

impl SearchQuery {
    /// Resolve raw inputs against the current time.
    pub fn resolve(params: &QueryParams<'_>, now: NaiveDateTime) -> Result<Self, ParseError> {
        let (from_date, to_date) =
            resolve_range(params.next, params.from_time, params.to_time, now)?;

        Ok(Self {
            departure: params.departure.to_string(),
            arrival: params.arrival.to_string(),
            from_date,
            to_date,
            transportation_mean: params.transport.filter(),
        })
    }

    /// Window start in `dd/mm/yyyy HH:MM` form.
    pub fn from_date_param(&self) -> String {
        self.from_date.format(DATE_PARAM_FORMAT).to_string()
    }

    /// Window end in `dd/mm/yyyy HH:MM` form.
    pub fn to_date_param(&self) -> String {
        self.to_date.format(DATE_PARAM_FORMAT).to_string()
    }
}

/// Resolve the search window.
///
/// By default the window starts now and lasts for the duration token. When
/// both explicit bounds are given they replace it entirely. A single explicit
/// bound on its own is ignored and is not even parsed.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use trainline_cli::domain::resolve_range;
///
/// let now = NaiveDate::from_ymd_opt(2024, 6, 1)
///     .unwrap()
///     .and_hms_opt(9, 0, 0)
///     .unwrap();
///
/// let (from, to) = resolve_range("2h", None, None, now).unwrap();
/// assert_eq!(from, now);
/// assert_eq!(to, now + Duration::hours(2));
///
/// // Only one bound: the duration window stays in effect
/// let (from, to) = resolve_range("2h", Some("25.12.2024:14.30"), None, now).unwrap();
/// assert_eq!((from, to), (now, now + Duration::hours(2)));
/// ```
pub fn resolve_range(
    next: &str,
    from_time: Option<&str>,
    to_time: Option<&str>,
    now: NaiveDateTime,
) -> Result<(NaiveDateTime, NaiveDateTime), ParseError> {
    let delta = decode_duration(next)?;
    let to_date = now
        .checked_add_signed(delta)
        .ok_or_else(|| ParseError::RangeOverflow {
            start: now.format(DATE_PARAM_FORMAT).to_string(),
            duration: next.to_string(),
        })?;

    match (from_time, to_time) {
        (Some(from), Some(to)) => Ok((decode_explicit(from)?, decode_explicit(to)?)),
        _ => Ok((now, to_date)),
    }
}
