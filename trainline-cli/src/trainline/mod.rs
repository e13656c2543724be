//! Trip search client.
//!
//! The search itself is done by an external trip search service; this
//! module is the boundary to it. A search takes a resolved
//! [`SearchQuery`](crate::domain::SearchQuery) and yields a [`ResultSet`]
//! that knows its length and how to render itself as CSV.
//!
//! Two implementations of [`TripSearch`] exist:
//! - [`TrainlineClient`] sends `GET {base_url}/search` to the live service
//! - [`MockTrainlineClient`] answers from a JSON fixture file

mod client;
mod convert;
mod error;
mod mock;
mod result_set;
mod search;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TrainlineClient, TrainlineConfig};
pub use convert::ConversionError;
pub use error::SearchError;
pub use mock::MockTrainlineClient;
pub use result_set::{CSV_HEADER, ResultSet, Trip};
pub use search::TripSearch;
