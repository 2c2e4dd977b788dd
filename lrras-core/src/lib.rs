//! # ♾️ LRRAS-Core
//!
//! Escalar complexo estendido com índice de espaço discreto.
//!
//! > *"Dividir por zero não é erro — é mudança de espaço."*
//!
//! ## O Escalar
//!
//! 1. Todo valor é um par **(resíduo, índice)**
//! 2. O índice é um de **quatro estados**: −∞, 0, ℝ, +∞
//! 3. O resíduo **nunca é zero**: no espaço zero ele conta multiplicidade
//! 4. Toda operação termina no **normalizador**
//!
//! ## Computational Complexity
//!
//! **Todas as operações — O(1):**
//! - Tabelas de índice: `match` exaustivo sobre 16 pares
//! - Normalização: no máximo três testes de ponto flutuante
//! - Operadores: uma operação complexa + uma consulta de tabela
//!
//! Nenhuma operação guarda estado, faz I/O ou bloqueia; qualquer número de
//! threads pode usar os valores sem sincronização.
//!
//! ## Módulos
//!
//! - [`geometry`]: g(c), Rot₂₇₀, ssqrt, sisqrt
//! - [`index`]: [`SpaceIndex`] e as tabelas μ_add, μ_sub, μ_mul, μ_div
//! - [`normalize`]: p(v, i), o ponto único de canonicalização
//! - [`scalar`]: [`Scalar`] e seus operadores
//!
//! ## Quick Start
//!
//! ```
//! use lrras_core::prelude::*;
//!
//! // contagem sem perda no espaço zero
//! let two_zeros = Scalar::ZERO + Scalar::ZERO;
//! assert_eq!(two_zeros.to_string(), "(2, 0)");
//!
//! // ∞ − ∞ = 0
//! assert_eq!(Scalar::INFINITY - Scalar::INFINITY, Scalar::ZERO);
//!
//! // log₁₀(100)
//! let r = Scalar::from(100).log(10.0).unwrap();
//! assert_eq!(r.to_string(), "(2, 1)");
//! ```

pub mod error;
pub mod geometry;
pub mod index;
pub mod normalize;
pub mod scalar;
pub mod prelude;

// Re-exportações de nível superior
pub use error::{ScalarError, ScalarResult};
pub use geometry::{is_geometric_negative, rot270, scaled_div, sisqrt, ssqrt};
pub use index::{
    index_add, index_clamp, index_divide, index_inversion, index_multiply, index_subtract,
    IndexOp, SpaceIndex,
};
pub use normalize::{normalize, normalize_code};
pub use scalar::{format_residue, Scalar, COMPLEX_INFINITY, COMPLEX_NEG_INFINITY};

// Re-exporta o tipo complexo usado na API
pub use num_complex::Complex;

#[cfg(test)]
mod tests;
