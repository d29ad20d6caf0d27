use serde::{Deserialize, Serialize};

/// Earliest year accepted by the year input.
pub const MIN_YEAR: i32 = 1900;

/// Latest year accepted by the year input.
pub const MAX_YEAR: i32 = 2100;

/// One saved GDP value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub year: i32,
    pub value: f64,
}
