//! LRRAS command-line tools
//!
//! Renders the four index-combination tables as text or LaTeX, and runs the
//! quadratic formula demonstration that compares classical roots with
//! extended-scalar roots.

mod config;
pub mod quadratic;
mod tables;

pub use config::{TableConfig, TableStyle};
pub use quadratic::{solve, QuadraticReport};
pub use tables::{render_all, render_table, IndexTable};

use lrras_core::ScalarError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Scalar error: {0}")]
    Scalar(#[from] ScalarError),

    #[error("Coefficient {name} must be finite, got {value}")]
    InvalidCoefficient { name: &'static str, value: f64 },
}

/// Normalize `re + im·i` in the space with the given raw code
pub fn normalize(re: f64, im: f64, code: i32) -> Result<lrras_core::Scalar, CliError> {
    let scalar = lrras_core::normalize_code(lrras_core::Complex::new(re, im), code)?;
    Ok(scalar)
}
