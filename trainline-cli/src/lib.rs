//! Trainline command-line search.
//!
//! Resolves a departure, an arrival and a time window given on the command
//! line into a trip search, hands it to the trip search service and prints
//! the results as CSV.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod trainline;
