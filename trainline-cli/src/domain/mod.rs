//! Search parameter resolution.
//!
//! Everything between the raw command-line strings and the query handed to
//! the trip search lives here. The functions are pure: the current time is
//! always passed in.

mod duration;
mod error;
mod explicit;
mod query;
mod transport;

pub use duration::{DEFAULT_WINDOW_HOURS, decode_duration};
pub use error::{Field, ParseError};
pub use explicit::decode_explicit;
pub use query::{DATE_PARAM_FORMAT, QueryParams, SearchQuery, resolve_range};
pub use transport::{Transport, TransportationMean};
