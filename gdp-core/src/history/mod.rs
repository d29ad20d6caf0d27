//! Session-scoped stores: saved GDP values by year and the per-function
//! curve history.
//!
//! Both stores live in memory for the lifetime of the dashboard session and
//! are mutated only by the render cycle that owns them.

mod curve_history;
mod gdp_history;

pub use curve_history::CurveHistory;
pub use gdp_history::{GdpHistory, HistoryChange, HistoryError};
