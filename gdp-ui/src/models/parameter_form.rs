use std::fmt;

use gdp_core::{Component, Drivers, ParameterSet};
use thiserror::Error;

use crate::utils::{ParseRealError, parse_real};

/// Message shown in place of the GDP readout when a field does not parse.
pub const INVALID_INPUT_MESSAGE: &str = "Error: enter numeric values";

/// Which half of a component's affine function a field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coefficient {
    Intercept,
    Slope,
}

/// Address of one of the 12 coefficient fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey {
    pub component: Component,
    pub coefficient: Coefficient,
}

impl FieldKey {
    pub const fn new(
        component: Component,
        coefficient: Coefficient,
    ) -> Self {
        Self {
            component,
            coefficient,
        }
    }

    /// All 12 fields in form order.
    pub fn all() -> impl Iterator<Item = FieldKey> {
        Component::ALL.into_iter().flat_map(|component| {
            [Coefficient::Intercept, Coefficient::Slope]
                .map(|coefficient| FieldKey::new(component, coefficient))
        })
    }

    /// Bare coefficient name, e.g. `ct`.
    pub fn label(&self) -> &'static str {
        let (intercept, slope) = self.component.coefficient_labels();
        match self.coefficient {
            Coefficient::Intercept => intercept,
            Coefficient::Slope => slope,
        }
    }

    /// Fully qualified field name, e.g. `C_t_ct`.
    pub fn name(&self) -> String {
        format!("{}_{}", self.component.symbol(), self.label())
    }

    /// Parses `C_t_a`, `C_t.a` or a bare coefficient name such as `a` or `ck`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(key) = Self::all().find(|key| key.label() == s) {
            return Some(key);
        }

        let (symbol, label) = s.rsplit_once(['_', '.'])?;
        let component = Component::parse(symbol)?;
        Self::all().find(|key| key.component == component && key.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for FieldKey {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} - {}", self.component.symbol(), self.label())
    }
}

/// A coefficient field that could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{field}: {source}")]
pub struct InvalidNumericInput {
    pub field: String,
    #[source]
    pub source: ParseRealError,
}

/// The 12 coefficient fields exactly as the user typed them.
///
/// Values are kept as strings so a bad entry survives until the next render,
/// where [`ParameterForm::to_parameters`] reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterForm {
    fields: [[String; 2]; 6],
}

impl Default for ParameterForm {
    fn default() -> Self {
        Self::from_parameters(&ParameterSet::default())
    }
}

impl ParameterForm {
    /// Seeds every field from `params`.
    pub fn from_parameters(params: &ParameterSet) -> Self {
        let fields = Component::ALL.map(|component| {
            let p = params.params(component);
            [p.intercept.to_string(), p.slope.to_string()]
        });
        Self { fields }
    }

    fn slot(key: FieldKey) -> (usize, usize) {
        let column = match key.coefficient {
            Coefficient::Intercept => 0,
            Coefficient::Slope => 1,
        };
        (key.component as usize, column)
    }

    pub fn get(
        &self,
        key: FieldKey,
    ) -> &str {
        let (row, column) = Self::slot(key);
        &self.fields[row][column]
    }

    pub fn set(
        &mut self,
        key: FieldKey,
        value: impl Into<String>,
    ) {
        let (row, column) = Self::slot(key);
        self.fields[row][column] = value.into();
    }

    /// Parses every field into a [`ParameterSet`] using the given drivers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNumericInput`] for the first field, in form order,
    /// that is not a number.
    pub fn to_parameters(
        &self,
        drivers: Drivers,
    ) -> Result<ParameterSet, InvalidNumericInput> {
        let mut params = ParameterSet {
            drivers,
            ..ParameterSet::default()
        };

        for key in FieldKey::all() {
            let value = parse_real(self.get(key)).map_err(|source| InvalidNumericInput {
                field: key.name(),
                source,
            })?;
            let target = params.params_mut(key.component);
            match key.coefficient {
                Coefficient::Intercept => target.intercept = value,
                Coefficient::Slope => target.slope = value,
            }
        }

        Ok(params)
    }
}

impl fmt::Display for ParameterForm {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for component in Component::ALL {
            let intercept = FieldKey::new(component, Coefficient::Intercept);
            let slope = FieldKey::new(component, Coefficient::Slope);
            writeln!(
                f,
                "{:<10} {:>10}    {:<10} {:>10}",
                intercept.to_string(),
                self.get(intercept),
                slope.to_string(),
                self.get(slope)
            )?;
        }
        Ok(())
    }
}
