//! Line-chart requests handed to the presenter.
//!
//! A [`ChartRequest`] carries everything a plotting backend needs to draw a
//! 2-D line chart; this crate never draws pixels itself.

use gdp_core::{ComponentFunction, CurveSample, HistoryEntry};

/// Title, x-label and y-label of the benchmark chart.
pub const BENCHMARK_TITLE: &str = "Evolución histórica del PIB";
pub const BENCHMARK_X_LABEL: &str = "Año";
pub const BENCHMARK_Y_LABEL: &str = "PIB (B)";

/// One line on a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: Option<String>,
    pub color: Option<&'static str>,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

/// Chart of one component, overlaying every recorded curve version.
///
/// Versions are labelled `<symbol> v1`, `<symbol> v2`, ... oldest first.
/// Only the newest version carries the function's colour so earlier ones
/// read as history.
pub fn component_chart(
    function: &ComponentFunction,
    samples: &[CurveSample],
) -> ChartRequest {
    let component = function.component;
    let newest = samples.len();
    let series = samples
        .iter()
        .enumerate()
        .map(|(index, sample)| Series {
            label: Some(format!("{} v{}", component.symbol(), index + 1)),
            color: (index + 1 == newest).then_some(function.color),
            points: sample.points().collect(),
        })
        .collect();

    ChartRequest {
        title: format!("Función {}", component.symbol()),
        x_label: component.driver_label().to_string(),
        y_label: component.symbol().to_string(),
        series,
    }
}

/// Chart of a year → GDP series.
pub fn benchmark_chart(entries: &[HistoryEntry]) -> ChartRequest {
    ChartRequest {
        title: BENCHMARK_TITLE.to_string(),
        x_label: BENCHMARK_X_LABEL.to_string(),
        y_label: BENCHMARK_Y_LABEL.to_string(),
        series: vec![Series {
            label: None,
            color: Some("blue"),
            points: entries
                .iter()
                .map(|entry| (f64::from(entry.year), entry.value))
                .collect(),
        }],
    }
}
