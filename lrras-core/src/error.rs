//! Tipos de erro para lrras-core

use num_complex::Complex;
use thiserror::Error;

/// Resultado customizado para construção e normalização de escalares
pub type ScalarResult<T> = Result<T, ScalarError>;

/// Erros de construção de um [`Scalar`](crate::Scalar)
///
/// Ambos são irrecuperáveis no ponto de construção e sobem até o chamador.
#[derive(Debug, Clone, Error)]
pub enum ScalarError {
    /// Resíduo que a normalização não consegue representar (NaN, ou zero
    /// passado diretamente ao construtor bruto).
    #[error("Invalid value {value}: {reason}")]
    InvalidValue {
        value: Complex<f64>,
        reason: &'static str,
    },

    /// Código de índice de espaço fora de {-1, 0, 1, 2}
    #[error("Space index {0} not in {{-1, 0, 1, 2}}")]
    InvalidIndex(i32),
}

impl ScalarError {
    pub(crate) fn nan(value: Complex<f64>) -> Self {
        Self::InvalidValue {
            value,
            reason: "cannot convert NaN to an LRRAS scalar",
        }
    }

    pub(crate) fn zero_residue(value: Complex<f64>) -> Self {
        Self::InvalidValue {
            value,
            reason: "residue cannot be zero; use the zero space index instead",
        }
    }
}
