use super::half_type::HalfType;
use serde::{Deserialize, Serialize};

/// a row in the transition frequency output table: one mode-to-mode
/// transition, its occurrence count across all trips, and the route half
/// it was observed in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransitionRow {
    /// transition string, e.g. "walking -> subway"
    #[serde(rename = "Transition")]
    pub transition: String,
    /// number of times this transition occurred
    #[serde(rename = "Count")]
    pub count: u64,
    /// which route half the transition was observed in
    #[serde(rename = "Type")]
    pub half_type: HalfType,
}
