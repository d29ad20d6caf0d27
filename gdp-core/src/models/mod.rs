mod benchmark;
mod component;
mod curve_sample;
mod history_entry;
mod parameter_set;

pub use benchmark::{BENCHMARK_GDP, benchmark_series};
pub use component::{Component, ComponentFunction};
pub use curve_sample::{CurveSample, ParameterSnapshot};
pub use history_entry::{HistoryEntry, MAX_YEAR, MIN_YEAR};
pub use parameter_set::{Drivers, LinearParams, ParameterSet};
