use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::format_amount;
use crate::models::HistoryEntry;

/// Errors returned by [`GdpHistory`] mutations.
#[derive(Debug, Error, PartialEq)]
pub enum HistoryError {
    /// A plain save hit a year that already has a value.
    #[error("year {year} already has a value ({}); confirm to overwrite it", format_amount(*existing))]
    Conflict { year: i32, existing: f64 },

    /// Update or delete of a year with no saved value.
    #[error("no GDP value saved for year {0}")]
    NotFound(i32),
}

/// Successful outcome of a [`GdpHistory`] mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistoryChange {
    Created { year: i32, value: f64 },
    Updated { year: i32, previous: f64, value: f64 },
    Deleted { year: i32, previous: f64 },
}

/// Saved GDP values keyed by year.
///
/// A year is never overwritten silently: [`GdpHistory::save`] requires an
/// explicit confirmation when the year already exists, while
/// [`GdpHistory::update`] is the edit path for rows the user already sees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GdpHistory {
    entries: BTreeMap<i32, f64>,
}

impl GdpHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves `value` for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Conflict`] if the year already has a value and
    /// `confirm_overwrite` is false. The stored value is left unchanged.
    pub fn save(
        &mut self,
        year: i32,
        value: f64,
        confirm_overwrite: bool,
    ) -> Result<HistoryChange, HistoryError> {
        match self.entries.get(&year).copied() {
            None => {
                self.entries.insert(year, value);
                debug!(year, value, "GDP value created");
                Ok(HistoryChange::Created { year, value })
            }
            Some(existing) if !confirm_overwrite => {
                warn!(year, existing, value, "save would overwrite an existing year");
                Err(HistoryError::Conflict { year, existing })
            }
            Some(previous) => {
                self.entries.insert(year, value);
                debug!(year, previous, value, "GDP value overwritten");
                Ok(HistoryChange::Updated {
                    year,
                    previous,
                    value,
                })
            }
        }
    }

    /// Replaces the value of an existing year.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NotFound`] if the year has no saved value.
    pub fn update(
        &mut self,
        year: i32,
        value: f64,
    ) -> Result<HistoryChange, HistoryError> {
        let slot = self
            .entries
            .get_mut(&year)
            .ok_or(HistoryError::NotFound(year))?;
        let previous = std::mem::replace(slot, value);
        debug!(year, previous, value, "GDP value updated");

        Ok(HistoryChange::Updated {
            year,
            previous,
            value,
        })
    }

    /// Removes a year.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NotFound`] if the year has no saved value.
    pub fn delete(
        &mut self,
        year: i32,
    ) -> Result<HistoryChange, HistoryError> {
        let previous = self
            .entries
            .remove(&year)
            .ok_or(HistoryError::NotFound(year))?;
        debug!(year, previous, "GDP value deleted");

        Ok(HistoryChange::Deleted { year, previous })
    }

    pub fn get(
        &self,
        year: i32,
    ) -> Option<f64> {
        self.entries.get(&year).copied()
    }

    /// All entries, ascending by year.
    pub fn list_sorted(&self) -> Vec<HistoryEntry> {
        self.entries
            .iter()
            .map(|(&year, &value)| HistoryEntry { year, value })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
