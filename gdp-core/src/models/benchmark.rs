use crate::models::HistoryEntry;

/// Fixed GDP benchmark (billions), 2011 to 2025.
pub const BENCHMARK_GDP: [(i32, f64); 15] = [
    (2011, 20.0),
    (2012, 21.0),
    (2013, 21.5),
    (2014, 22.0),
    (2015, 21.0),
    (2016, 20.5),
    (2017, 20.0),
    (2018, 19.0),
    (2019, 19.5),
    (2020, 18.0),
    (2021, 19.5),
    (2022, 20.5),
    (2023, 20.0),
    (2024, 19.5),
    (2025, 20.0),
];

/// The benchmark as history entries, ascending by year.
pub fn benchmark_series() -> Vec<HistoryEntry> {
    BENCHMARK_GDP
        .iter()
        .map(|&(year, value)| HistoryEntry { year, value })
        .collect()
}
