use serde::{Deserialize, Serialize};

/// A sampled component curve, ready to hand to a chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    pub domain: Vec<f64>,
    pub range: Vec<f64>,
}

impl CurveSample {
    /// The curve as ordered `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.domain.iter().copied().zip(self.range.iter().copied())
    }
}

/// The inputs that determine a component's curve.
///
/// Two snapshots are equal when every field compares equal; NaN is treated
/// as equal to NaN so an unchanged NaN coefficient does not count as a new
/// configuration on every render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParameterSnapshot {
    pub intercept: f64,
    pub slope: f64,
    pub driver: f64,
}

impl ParameterSnapshot {
    pub const fn new(
        intercept: f64,
        slope: f64,
        driver: f64,
    ) -> Self {
        Self {
            intercept,
            slope,
            driver,
        }
    }
}

fn same_value(
    a: f64,
    b: f64,
) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for ParameterSnapshot {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        same_value(self.intercept, other.intercept)
            && same_value(self.slope, other.slope)
            && same_value(self.driver, other.driver)
    }
}
