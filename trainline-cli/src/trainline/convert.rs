//! Conversion from trip search DTOs to result types.

use chrono::{DateTime, NaiveDateTime};
use tracing::warn;

use super::result_set::{ResultSet, Trip};
use super::types::{SearchResponse, TripDto};

/// Error during DTO to trip conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a date string
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Price is negative or not a number
    #[error("invalid price: {0}")]
    InvalidPrice(f64),

    /// Trip arrives before it leaves
    #[error("trip arrives at {arrival} before leaving at {departure}")]
    ArrivalBeforeDeparture { departure: String, arrival: String },
}

/// Convert a search response, skipping trips that cannot be converted.
pub fn convert_response(response: &SearchResponse) -> ResultSet {
    let mut trips = Vec::with_capacity(response.trips.len());

    for dto in &response.trips {
        match convert_trip(dto) {
            Ok(trip) => trips.push(trip),
            Err(e) => {
                warn!(
                    departure = %dto.departure_date,
                    error = %e,
                    "skipping trip"
                );
            }
        }
    }

    ResultSet::new(trips)
}

/// Convert a single trip.
pub fn convert_trip(dto: &TripDto) -> Result<Trip, ConversionError> {
    let departure_date = parse_datetime(&dto.departure_date)?;
    let arrival_date = parse_datetime(&dto.arrival_date)?;

    if arrival_date < departure_date {
        return Err(ConversionError::ArrivalBeforeDeparture {
            departure: dto.departure_date.clone(),
            arrival: dto.arrival_date.clone(),
        });
    }

    if !dto.price.is_finite() || dto.price < 0.0 {
        return Err(ConversionError::InvalidPrice(dto.price));
    }

    Ok(Trip {
        departure_station: dto.departure_station.clone(),
        arrival_station: dto.arrival_station.clone(),
        departure_date,
        arrival_date,
        number_of_segments: dto.number_of_segments,
        price: dto.price,
        currency: dto.currency.clone(),
        transportation_mean: dto.transportation_mean.clone(),
        bicycle_reservation: dto.bicycle_reservation.clone(),
    })
}

/// Parse an ISO 8601 date-time.
///
/// Times with a UTC offset keep their local wall-clock reading; the offset
/// itself is dropped, matching how the search window is expressed.
fn parse_datetime(s: &str) -> Result<NaiveDateTime, ConversionError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| ConversionError::InvalidDate(s.to_string()))
}
