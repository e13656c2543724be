//! The trip search seam.

use async_trait::async_trait;

use crate::domain::SearchQuery;

use super::error::SearchError;
use super::result_set::ResultSet;

/// Something that can answer a trip search.
///
/// Implemented by [`TrainlineClient`](super::TrainlineClient) for the live
/// service and by [`MockTrainlineClient`](super::MockTrainlineClient) for
/// fixture data.
#[async_trait]
pub trait TripSearch: Send + Sync {
    /// Search trips from `query.departure` to `query.arrival` leaving within
    /// the query window.
    async fn search(&self, query: &SearchQuery) -> Result<ResultSet, SearchError>;
}
