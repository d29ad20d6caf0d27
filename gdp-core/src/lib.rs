pub mod calculations;
pub mod history;
pub mod models;

pub use history::{CurveHistory, GdpHistory, HistoryChange, HistoryError};
pub use models::*;
