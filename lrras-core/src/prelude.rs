//! # Prelude — Re-exportações Convenientes
//!
//! ```
//! use lrras_core::prelude::*;
//! ```

// Escalar
pub use crate::scalar::{Scalar, COMPLEX_INFINITY, COMPLEX_NEG_INFINITY};

// Índices
pub use crate::index::{IndexOp, SpaceIndex};

// Geometria
pub use crate::geometry::{is_geometric_negative, rot270, scaled_div, sisqrt, ssqrt};

// Normalização e erros
pub use crate::error::{ScalarError, ScalarResult};
pub use crate::normalize::normalize;

pub use num_complex::Complex;
