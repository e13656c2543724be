//! Command-line arguments.

use clap::Parser;

use crate::domain::{QueryParams, Transport};

/// Environment variable that can supply the departure station.
pub const DEPARTURE_VAR: &str = "PARAM1";

/// Search trips with Trainline and print them as CSV.
#[derive(Parser, Debug, Clone)]
#[command(name = "trainline-cli", version, long_about = None)]
pub struct Args {
    /// Departure station (example: Toulouse)
    #[arg(long, short = 'd', env = DEPARTURE_VAR)]
    pub departure: String,

    /// Arrival station (example: Bordeaux)
    #[arg(long, short = 'a')]
    pub arrival: String,

    /// Period of search from now (example: 1day, 2days, 3d, 1hour, 2hours, 3h)
    #[arg(long, short = 'n', default_value = "3hours")]
    pub next: String,

    /// Date from which to search, in format dd.mm.yyyy:HH.MM
    #[arg(long, short = 'f', value_name = "DATE")]
    pub fromtime: Option<String>,

    /// Date to which to search, in format dd.mm.yyyy:HH.MM
    #[arg(long, short = 't', value_name = "DATE")]
    pub totime: Option<String>,

    /// Get only results for the selected transportation mean
    #[arg(long, short = 'r', value_enum, default_value_t = Transport::Train)]
    pub transport: Transport,

    /// Verbose mode
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Borrow the search inputs.
    pub fn query_params(&self) -> QueryParams<'_> {
        QueryParams {
            departure: &self.departure,
            arrival: &self.arrival,
            next: &self.next,
            from_time: self.fromtime.as_deref(),
            to_time: self.totime.as_deref(),
            transport: self.transport,
        }
    }
}
