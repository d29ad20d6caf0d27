//! GDP aggregation by the expenditure identity.
//!
//! ```text
//! PIB = CT + CK + I + G + (X - M)
//! ```
//!
//! # Example
//!
//! ```
//! use gdp_core::ParameterSet;
//! use gdp_core::calculations::evaluate_components;
//!
//! let result = evaluate_components(&ParameterSet::default());
//!
//! assert_eq!(result.worker_consumption, 8.0);
//! assert_eq!(result.gdp(), 20.0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::common::format_amount;
use crate::models::{Component, ParameterSet};

/// Evaluated value of every component for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentResult {
    /// CT
    pub worker_consumption: f64,
    /// CK
    pub capitalist_consumption: f64,
    /// I
    pub investment: f64,
    /// G
    pub government: f64,
    /// X
    pub exports: f64,
    /// M
    pub imports: f64,
}

impl ComponentResult {
    pub fn get(
        &self,
        component: Component,
    ) -> f64 {
        match component {
            Component::WorkerConsumption => self.worker_consumption,
            Component::CapitalistConsumption => self.capitalist_consumption,
            Component::Investment => self.investment,
            Component::Government => self.government,
            Component::Exports => self.exports,
            Component::Imports => self.imports,
        }
    }

    /// Net exports, `X - M`.
    pub fn net_exports(&self) -> f64 {
        self.exports - self.imports
    }

    pub fn gdp(&self) -> f64 {
        aggregate(
            self.worker_consumption,
            self.capitalist_consumption,
            self.investment,
            self.government,
            self.exports,
            self.imports,
        )
    }
}

impl fmt::Display for ComponentResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for component in Component::ALL {
            write!(
                f,
                "{}={} ",
                component.result_label(),
                format_amount(self.get(component))
            )?;
        }
        write!(f, "PIB={}", format_amount(self.gdp()))
    }
}

/// Sums the components into GDP; imports subtract, everything else adds.
pub fn aggregate(
    ct: f64,
    ck: f64,
    i: f64,
    g: f64,
    x: f64,
    m: f64,
) -> f64 {
    ct + ck + i + g + (x - m)
}

/// Evaluates all six components at their configured drivers.
pub fn evaluate_components(params: &ParameterSet) -> ComponentResult {
    let [ct, ck, i, g, x, m] = params.functions().map(|function| function.value());

    ComponentResult {
        worker_consumption: ct,
        capitalist_consumption: ck,
        investment: i,
        government: g,
        exports: x,
        imports: m,
    }
}
