//! Pure calculations: component evaluation, GDP aggregation and curve
//! sampling.
//!
//! Nothing in this module holds state; every function is deterministic in
//! its arguments.

pub mod common;
pub mod curve_sampler;
pub mod gdp;
pub mod linear_model;

pub use curve_sampler::{DEFAULT_DOMAIN, sample, sample_over};
pub use gdp::{ComponentResult, aggregate, evaluate_components};
pub use linear_model::{Evaluator, evaluate};
