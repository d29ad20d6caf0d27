use serde::{Deserialize, Serialize};

use crate::models::{Component, ComponentFunction};

/// Intercept and slope of one affine component function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearParams {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearParams {
    pub const fn new(
        intercept: f64,
        slope: f64,
    ) -> Self {
        Self { intercept, slope }
    }
}

/// A component table as written in a document; either key may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LinearParamsOverride {
    intercept: Option<f64>,
    slope: Option<f64>,
}

impl LinearParamsOverride {
    fn over(
        self,
        base: LinearParams,
    ) -> LinearParams {
        LinearParams {
            intercept: self.intercept.unwrap_or(base.intercept),
            slope: self.slope.unwrap_or(base.slope),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ParameterDocument {
    worker_consumption: LinearParamsOverride,
    capitalist_consumption: LinearParamsOverride,
    investment: LinearParamsOverride,
    government: LinearParamsOverride,
    exports: LinearParamsOverride,
    imports: LinearParamsOverride,
    drivers: Drivers,
}

impl From<ParameterDocument> for ParameterSet {
    fn from(doc: ParameterDocument) -> Self {
        let base = ParameterSet::default();
        Self {
            worker_consumption: doc.worker_consumption.over(base.worker_consumption),
            capitalist_consumption: doc.capitalist_consumption.over(base.capitalist_consumption),
            investment: doc.investment.over(base.investment),
            government: doc.government.over(base.government),
            exports: doc.exports.over(base.exports),
            imports: doc.imports.over(base.imports),
            drivers: doc.drivers,
        }
    }
}

/// Fixed independent variables, one per component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Drivers {
    /// Worker income (Yt).
    pub yt: f64,
    /// Capital income (Yk).
    pub yk: f64,
    /// Profits (π).
    pub pi: f64,
    /// Fiscal revenue (Rf).
    pub rf: f64,
    /// Foreign income driving exports (Yeu).
    pub yeu: f64,
    /// Income driving imports (Ymex).
    pub ymex: f64,
}

impl Default for Drivers {
    fn default() -> Self {
        Self {
            yt: 5.0,
            yk: 5.0,
            pi: 5.0,
            rf: 5.0,
            yeu: 5.0,
            ymex: 5.0,
        }
    }
}

impl Drivers {
    pub fn get(
        &self,
        component: Component,
    ) -> f64 {
        match component {
            Component::WorkerConsumption => self.yt,
            Component::CapitalistConsumption => self.yk,
            Component::Investment => self.pi,
            Component::Government => self.rf,
            Component::Exports => self.yeu,
            Component::Imports => self.ymex,
        }
    }
}

/// The 12 user-editable coefficients plus the fixed drivers.
///
/// Defaults reproduce the 2025 benchmark configuration (GDP = 20).
/// Any table or key omitted from a deserialized document keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ParameterDocument")]
pub struct ParameterSet {
    /// C_t = a + ct * Yt
    pub worker_consumption: LinearParams,
    /// C_k = b + ck * Yk
    pub capitalist_consumption: LinearParams,
    /// I = h + i * π
    pub investment: LinearParams,
    /// G = d + g * Rf
    pub government: LinearParams,
    /// X = e + x * Yeu
    pub exports: LinearParams,
    /// M = f + m * Ymex
    pub imports: LinearParams,
    pub drivers: Drivers,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            worker_consumption: LinearParams::new(4.0, 0.8),
            capitalist_consumption: LinearParams::new(1.0, 0.2),
            investment: LinearParams::new(3.0, 0.4),
            government: LinearParams::new(2.0, 0.4),
            exports: LinearParams::new(2.0, 0.2),
            imports: LinearParams::new(1.0, 0.2),
            drivers: Drivers::default(),
        }
    }
}

impl ParameterSet {
    pub fn params(
        &self,
        component: Component,
    ) -> LinearParams {
        match component {
            Component::WorkerConsumption => self.worker_consumption,
            Component::CapitalistConsumption => self.capitalist_consumption,
            Component::Investment => self.investment,
            Component::Government => self.government,
            Component::Exports => self.exports,
            Component::Imports => self.imports,
        }
    }

    pub fn params_mut(
        &mut self,
        component: Component,
    ) -> &mut LinearParams {
        match component {
            Component::WorkerConsumption => &mut self.worker_consumption,
            Component::CapitalistConsumption => &mut self.capitalist_consumption,
            Component::Investment => &mut self.investment,
            Component::Government => &mut self.government,
            Component::Exports => &mut self.exports,
            Component::Imports => &mut self.imports,
        }
    }

    /// Builds the typed per-function record for `component`.
    pub fn function(
        &self,
        component: Component,
    ) -> ComponentFunction {
        ComponentFunction {
            component,
            evaluator: component.evaluator(),
            params: self.params(component),
            driver: self.drivers.get(component),
            color: component.color(),
        }
    }

    /// All six component functions in display order.
    pub fn functions(&self) -> [ComponentFunction; 6] {
        Component::ALL.map(|c| self.function(c))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_benchmark_configuration() {
        let params = ParameterSet::default();

        assert_eq!(params.worker_consumption, LinearParams::new(4.0, 0.8));
        assert_eq!(params.capitalist_consumption, LinearParams::new(1.0, 0.2));
        assert_eq!(params.investment, LinearParams::new(3.0, 0.4));
        assert_eq!(params.government, LinearParams::new(2.0, 0.4));
        assert_eq!(params.exports, LinearParams::new(2.0, 0.2));
        assert_eq!(params.imports, LinearParams::new(1.0, 0.2));
        assert_eq!(params.drivers, Drivers::default());
    }

    #[test]
    fn params_mut_edits_the_selected_component() {
        let mut params = ParameterSet::default();

        params.params_mut(Component::Exports).slope = -0.5;

        assert_eq!(params.exports.slope, -0.5);
        assert_eq!(params.imports.slope, 0.2);
    }

    #[test]
    fn functions_pair_each_component_with_its_driver() {
        let mut params = ParameterSet::default();
        params.drivers.rf = 7.5;

        let functions = params.functions();

        assert_eq!(functions.len(), 6);
        assert_eq!(functions[3].component, Component::Government);
        assert_eq!(functions[3].driver, 7.5);
        assert_eq!(functions[3].color, "red");
    }

    #[test]
    fn partial_document_keeps_remaining_defaults() {
        let params: ParameterSet = toml::from_str(
            r#"
            [imports]
            intercept = 1.5
            slope = 0.1

            [drivers]
            ymex = 10.0
            "#,
        )
        .unwrap();

        assert_eq!(params.imports, LinearParams::new(1.5, 0.1));
        assert_eq!(params.drivers.ymex, 10.0);
        assert_eq!(params.drivers.yt, 5.0);
        assert_eq!(params.worker_consumption, LinearParams::new(4.0, 0.8));
    }

    #[test]
    fn single_coefficient_keeps_component_default_for_the_other() {
        let params: ParameterSet = toml::from_str(
            r#"
            [imports]
            slope = 0.4

            [worker_consumption]
            intercept = 6.0
            "#,
        )
        .unwrap();

        assert_eq!(params.imports, LinearParams::new(1.0, 0.4));
        assert_eq!(params.worker_consumption, LinearParams::new(6.0, 0.8));
        assert_eq!(params.capitalist_consumption, LinearParams::new(1.0, 0.2));
    }

    #[test]
    fn empty_component_table_is_all_defaults() {
        let params: ParameterSet = toml::from_str("[government]\n").unwrap();

        assert_eq!(params, ParameterSet::default());
    }
}
