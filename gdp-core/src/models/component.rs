use serde::{Deserialize, Serialize};

use crate::calculations::linear_model::{self, Evaluator};
use crate::models::LinearParams;

/// The six macroeconomic components summed into GDP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Component {
    WorkerConsumption,
    CapitalistConsumption,
    Investment,
    Government,
    Exports,
    Imports,
}

impl Component {
    /// Every component, in display order.
    pub const ALL: [Component; 6] = [
        Self::WorkerConsumption,
        Self::CapitalistConsumption,
        Self::Investment,
        Self::Government,
        Self::Exports,
        Self::Imports,
    ];

    /// Function name used for chart titles and curve labels.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::WorkerConsumption => "C_t",
            Self::CapitalistConsumption => "C_k",
            Self::Investment => "I",
            Self::Government => "G",
            Self::Exports => "X",
            Self::Imports => "M",
        }
    }

    /// Name of the evaluated value in the GDP breakdown.
    pub fn result_label(&self) -> &'static str {
        match self {
            Self::WorkerConsumption => "CT",
            Self::CapitalistConsumption => "CK",
            Self::Investment => "I",
            Self::Government => "G",
            Self::Exports => "X",
            Self::Imports => "M",
        }
    }

    /// Names of the (intercept, slope) coefficients.
    pub fn coefficient_labels(&self) -> (&'static str, &'static str) {
        match self {
            Self::WorkerConsumption => ("a", "ct"),
            Self::CapitalistConsumption => ("b", "ck"),
            Self::Investment => ("h", "i"),
            Self::Government => ("d", "g"),
            Self::Exports => ("e", "x"),
            Self::Imports => ("f", "m"),
        }
    }

    /// Label of the independent variable, used as the chart x-axis.
    pub fn driver_label(&self) -> &'static str {
        match self {
            Self::WorkerConsumption => "Yt",
            Self::CapitalistConsumption => "Yk",
            Self::Investment => "π",
            Self::Government => "Rf",
            Self::Exports => "Yeu",
            Self::Imports => "Ymex",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::WorkerConsumption => "blue",
            Self::CapitalistConsumption => "green",
            Self::Investment => "orange",
            Self::Government => "red",
            Self::Exports => "purple",
            Self::Imports => "brown",
        }
    }

    pub fn evaluator(&self) -> Evaluator {
        match self {
            Self::WorkerConsumption => linear_model::worker_consumption,
            Self::CapitalistConsumption => linear_model::capitalist_consumption,
            Self::Investment => linear_model::investment,
            Self::Government => linear_model::government,
            Self::Exports => linear_model::exports,
            Self::Imports => linear_model::imports,
        }
    }

    /// Parses a function symbol (`C_t`, `I`, ...), case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.symbol().eq_ignore_ascii_case(s.trim()))
    }
}

/// Everything needed to evaluate and draw one component function.
#[derive(Debug, Clone, Copy)]
pub struct ComponentFunction {
    pub component: Component,
    pub evaluator: Evaluator,
    pub params: LinearParams,
    pub driver: f64,
    pub color: &'static str,
}

impl ComponentFunction {
    /// Evaluates the function at its configured driver value.
    pub fn value(&self) -> f64 {
        (self.evaluator)(self.params.intercept, self.params.slope, self.driver)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn all_lists_components_in_display_order() {
        let symbols: Vec<_> = Component::ALL.iter().map(Component::symbol).collect();

        assert_eq!(symbols, vec!["C_t", "C_k", "I", "G", "X", "M"]);
    }

    #[test]
    fn parse_accepts_symbols_case_insensitively() {
        assert_eq!(Component::parse("C_t"), Some(Component::WorkerConsumption));
        assert_eq!(Component::parse("c_k"), Some(Component::CapitalistConsumption));
        assert_eq!(Component::parse(" m "), Some(Component::Imports));
        assert_eq!(Component::parse("PIB"), None);
    }

    #[test]
    fn evaluator_matches_component() {
        let value = (Component::Imports.evaluator())(1.0, 0.2, 5.0);

        assert_eq!(value, 2.0);
    }

    #[test]
    fn component_function_value_uses_driver() {
        let function = ComponentFunction {
            component: Component::Investment,
            evaluator: Component::Investment.evaluator(),
            params: LinearParams::new(3.0, 0.4),
            driver: 5.0,
            color: Component::Investment.color(),
        };

        assert_eq!(function.value(), 5.0);
    }
}
