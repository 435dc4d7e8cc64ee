use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// classification tag for the two portions of a route divided at its
/// temporal midpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HalfType {
    Ascending,
    Descending,
}

impl Display for HalfType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HalfType::Ascending => write!(f, "Ascending"),
            HalfType::Descending => write!(f, "Descending"),
        }
    }
}
