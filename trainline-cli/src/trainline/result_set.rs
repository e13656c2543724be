//! Search results and their CSV rendering.

use chrono::{Duration, NaiveDateTime};

use crate::domain::DATE_PARAM_FORMAT;

use super::error::SearchError;

/// CSV column names, in output order.
pub const CSV_HEADER: [&str; 8] = [
    "departure_date",
    "arrival_date",
    "duration",
    "number_of_segments",
    "price",
    "currency",
    "transportation_mean",
    "bicycle_reservation",
];

/// CSV field delimiter.
const CSV_DELIMITER: u8 = b';';

/// Written when the service did not say whether bicycles can be booked.
const UNKNOWN_BICYCLE_RESERVATION: &str = "unavailable";

/// One trip returned by the search.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub departure_station: String,
    pub arrival_station: String,
    pub departure_date: NaiveDateTime,
    pub arrival_date: NaiveDateTime,
    pub number_of_segments: u32,
    pub price: f64,
    pub currency: String,
    pub transportation_mean: String,
    pub bicycle_reservation: Option<String>,
}

impl Trip {
    /// Time between departure and arrival.
    pub fn duration(&self) -> Duration {
        self.arrival_date.signed_duration_since(self.departure_date)
    }

    /// The trip as a CSV row, in [`CSV_HEADER`] order.
    fn csv_record(&self) -> [String; 8] {
        [
            self.departure_date.format(DATE_PARAM_FORMAT).to_string(),
            self.arrival_date.format(DATE_PARAM_FORMAT).to_string(),
            format_duration(self.duration()),
            self.number_of_segments.to_string(),
            format_price(self.price),
            self.currency.clone(),
            self.transportation_mean.clone(),
            self.bicycle_reservation
                .clone()
                .unwrap_or_else(|| UNKNOWN_BICYCLE_RESERVATION.to_string()),
        ]
    }
}

/// Ordered set of trips returned by one search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    trips: Vec<Trip>,
}

impl ResultSet {
    pub fn new(trips: Vec<Trip>) -> Self {
        Self { trips }
    }

    /// Number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// Render the trips as `;`-separated CSV with a header line.
    ///
    /// Lines are separated by `\n`; there is no newline after the last one.
    pub fn csv(&self) -> Result<String, SearchError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(CSV_DELIMITER)
            .has_headers(false)
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADER).map_err(csv_error)?;
        for trip in &self.trips {
            writer.write_record(trip.csv_record()).map_err(csv_error)?;
        }

        let bytes = writer.into_inner().map_err(|e| SearchError::Csv {
            message: e.to_string(),
        })?;
        let mut text = String::from_utf8(bytes).map_err(|e| SearchError::Csv {
            message: e.to_string(),
        })?;

        if text.ends_with('\n') {
            text.pop();
        }

        Ok(text)
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}

fn csv_error(e: csv::Error) -> SearchError {
    SearchError::Csv {
        message: e.to_string(),
    }
}

/// Format a duration as `HHhMM`, e.g. "02h07".
fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{:02}h{:02}", minutes / 60, minutes % 60)
}

/// Format a price with two decimals and a decimal comma, e.g. "36,00".
fn format_price(price: f64) -> String {
    format!("{price:.2}").replace('.', ",")
}
