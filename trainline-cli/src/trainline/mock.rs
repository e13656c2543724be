//! Mock trip search for use without the live service.
//!
//! Loads trips from a JSON fixture (same shape as a `/search` response) and
//! answers queries by filtering them locally.

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::SearchQuery;

use super::convert::convert_trip;
use super::error::SearchError;
use super::result_set::{ResultSet, Trip};
use super::search::TripSearch;
use super::types::SearchResponse;

/// Mock trip search that serves data from a fixture file.
#[derive(Debug, Clone)]
pub struct MockTrainlineClient {
    trips: Vec<Trip>,
}

impl MockTrainlineClient {
    /// Create a mock client by loading a JSON fixture.
    ///
    /// Every trip in the fixture must convert cleanly.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, SearchError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| SearchError::Fixture {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let response: SearchResponse =
            serde_json::from_str(&json).map_err(|e| SearchError::Fixture {
                message: format!("failed to parse {}: {}", path.display(), e),
            })?;

        let trips = response
            .trips
            .iter()
            .map(convert_trip)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(path = %path.display(), trips = trips.len(), "loaded trip fixture");
        Ok(Self { trips })
    }

    /// Create a mock client from trips already in memory.
    pub fn from_trips(trips: Vec<Trip>) -> Self {
        Self { trips }
    }

    /// Number of trips available to searches.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

#[async_trait]
impl TripSearch for MockTrainlineClient {
    async fn search(&self, query: &SearchQuery) -> Result<ResultSet, SearchError> {
        let mut matching: Vec<Trip> = self
            .trips
            .iter()
            .filter(|trip| matches_query(trip, query))
            .cloned()
            .collect();
        matching.sort_by_key(|trip| trip.departure_date);

        Ok(ResultSet::new(matching))
    }
}

/// Whether a trip answers the query.
///
/// Station names compare case-insensitively; the window is inclusive at
/// both ends.
fn matches_query(trip: &Trip, query: &SearchQuery) -> bool {
    let same_station = |a: &str, b: &str| a.to_lowercase() == b.to_lowercase();

    same_station(&trip.departure_station, &query.departure)
        && same_station(&trip.arrival_station, &query.arrival)
        && trip.departure_date >= query.from_date
        && trip.departure_date <= query.to_date
        && query
            .transportation_mean
            .is_none_or(|mean| trip.transportation_mean == mean.as_str())
}
