//! One search invocation, from parsed arguments to printed CSV.

use std::io::Write;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::cli::Args;
use crate::config::ConfigError;
use crate::domain::{ParseError, SearchQuery};
use crate::trainline::{SearchError, TripSearch};

/// Anything that ends an invocation early.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolve the query, run the search and print the results.
///
/// CSV goes to `out`. In verbose mode a summary of the query is printed
/// before it and the number of results after it. Returns the number of
/// results.
pub async fn run<W: Write>(
    args: &Args,
    now: NaiveDateTime,
    search: &dyn TripSearch,
    out: &mut W,
) -> Result<usize, AppError> {
    let query = SearchQuery::resolve(&args.query_params(), now)?;
    debug!(?query, "resolved search query");

    if args.verbose {
        writeln!(out)?;
        writeln!(
            out,
            "Search trips from {} to {}, between {} and {}\n",
            query.departure,
            query.arrival,
            query.from_date_param(),
            query.to_date_param()
        )?;
    }

    let results = search.search(&query).await?;

    writeln!(out, "{}", results.csv()?)?;

    if args.verbose {
        writeln!(out)?;
        writeln!(out, "{} results", results.len())?;
    }

    Ok(results.len())
}
