//! Session state for the dashboard.
//!
//! One [`AppState`] is created at start-up and handed to every render cycle.
//! Nothing here is persisted; it lives exactly as long as the process.

use gdp_core::{CurveHistory, Drivers, GdpHistory, ParameterSet};

use crate::config::AppConfig;
use crate::models::{InvalidNumericInput, ParameterForm};

#[derive(Debug, Clone)]
pub struct AppState {
    /// The 12 coefficient fields as typed.
    pub form: ParameterForm,
    /// Fixed independent variables; not editable from the form.
    pub drivers: Drivers,
    /// GDP values saved by year.
    pub gdp_history: GdpHistory,
    /// Every distinct curve drawn per component.
    pub curve_history: CurveHistory,
    /// Whether each cycle also draws the benchmark GDP series.
    pub show_benchmark: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&ParameterSet::default(), true)
    }
}

impl AppState {
    /// Creates a fresh session seeded from `params`.
    pub fn new(
        params: &ParameterSet,
        show_benchmark: bool,
    ) -> Self {
        Self {
            form: ParameterForm::from_parameters(params),
            drivers: params.drivers,
            gdp_history: GdpHistory::new(),
            curve_history: CurveHistory::new(),
            show_benchmark,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.parameters, config.dashboard.show_benchmark)
    }

    /// Parses the form against the current drivers.
    pub fn parameters(&self) -> Result<ParameterSet, InvalidNumericInput> {
        self.form.to_parameters(self.drivers)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_state_starts_with_empty_histories() {
        let state = AppState::default();

        assert!(state.gdp_history.is_empty());
        assert!(state.curve_history.samples(gdp_core::Component::Imports).is_empty());
        assert!(state.show_benchmark);
    }

    #[test]
    fn from_config_seeds_form_and_drivers() {
        let mut config = AppConfig::default();
        config.parameters.worker_consumption.intercept = 6.0;
        config.parameters.drivers.yk = 8.0;
        config.dashboard.show_benchmark = false;

        let state = AppState::from_config(&config);
        let params = state.parameters().unwrap();

        assert_eq!(params.worker_consumption.intercept, 6.0);
        assert_eq!(params.drivers.yk, 8.0);
        assert!(!state.show_benchmark);
    }
}
