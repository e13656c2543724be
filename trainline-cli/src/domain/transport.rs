//! Transportation mean filter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Transport choice offered on the command line.
///
/// `Any` is not a transportation mean of its own: it disables filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Transport {
    #[default]
    Train,
    Coach,
    Any,
}

impl Transport {
    /// The filter to hand to the trip search, `None` meaning "no filter".
    pub fn filter(self) -> Option<TransportationMean> {
        match self {
            Transport::Train => Some(TransportationMean::Train),
            Transport::Coach => Some(TransportationMean::Coach),
            Transport::Any => None,
        }
    }
}

/// A transportation mean the trip search can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportationMean {
    Train,
    Coach,
}

impl TransportationMean {
    /// The value sent to the trip search.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportationMean::Train => "train",
            TransportationMean::Coach => "coach",
        }
    }
}

impl fmt::Display for TransportationMean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_means_no_filter() {
        assert_eq!(Transport::Any.filter(), None);
    }

    #[test]
    fn other_choices_pass_through() {
        assert_eq!(Transport::Train.filter(), Some(TransportationMean::Train));
        assert_eq!(Transport::Coach.filter(), Some(TransportationMean::Coach));
        assert_eq!(Transport::Coach.filter().unwrap().as_str(), "coach");
    }

    #[test]
    fn default_is_train() {
        assert_eq!(Transport::default(), Transport::Train);
    }

    #[test]
    fn display() {
        assert_eq!(TransportationMean::Train.to_string(), "train");
        assert_eq!(TransportationMean::Coach.to_string(), "coach");
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&TransportationMean::Coach).unwrap();
        assert_eq!(json, "\"coach\"");
        let mean: TransportationMean = serde_json::from_str("\"train\"").unwrap();
        assert_eq!(mean, TransportationMean::Train);
    }
}
