//! Trip search response DTOs.
//!
//! These types map directly to the JSON the trip search service returns
//! (and to the fixture files the mock client reads). Dates are kept as
//! strings here and validated in `convert`.

use serde::{Deserialize, Serialize};

/// Response body of `GET /search`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Trips matching the query. Absent when there are none.
    #[serde(default)]
    pub trips: Vec<TripDto>,
}

/// A single trip as sent by the service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TripDto {
    /// Station the trip leaves from.
    pub departure_station: String,

    /// Station the trip arrives at.
    pub arrival_station: String,

    /// Departure time, ISO 8601 (with or without UTC offset).
    pub departure_date: String,

    /// Arrival time, ISO 8601 (with or without UTC offset).
    pub arrival_date: String,

    /// Number of segments (1 for a direct trip).
    #[serde(default = "default_segments")]
    pub number_of_segments: u32,

    /// Cheapest available price.
    pub price: f64,

    /// ISO 4217 currency code, e.g. "EUR".
    pub currency: String,

    /// "train", "coach", …
    pub transportation_mean: String,

    /// Bicycle reservation status ("unavailable", "available", …).
    pub bicycle_reservation: Option<String>,
}

fn default_segments() -> u32 {
    1
}
