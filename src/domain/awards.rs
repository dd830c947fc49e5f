use serde::{Deserialize, Serialize};

/// Projection of a winning row: the award year and the raw producer credit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinningCredit {
    pub year: i64,
    pub producers: String,
}

/// One gap between two consecutive wins of the same producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    pub producer: String,
    pub interval: i64,
    pub previous_win: i64,
    pub following_win: i64,
}

/// Producers tied at the shortest and longest gap between consecutive wins.
/// Both sequences are always present; either may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntervalAnalysis {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}
