//! # Álgebra de Índices
//!
//! Funções puras sobre o domínio de 4 estados do índice de espaço.
//!
//! ```text
//!  código   estado   significado
//!  ──────   ──────   ─────────────────────────────────
//!    -1       N      −∞ com resíduo não nulo
//!     0       Z      zero com resíduo não nulo
//!     1       R      espaço real (resíduo é o valor)
//!     2       P      +∞ com resíduo não nulo
//! ```
//!
//! Cada operador aritmético tem sua tabela (μ_add, μ_sub, μ_mul, μ_div),
//! todas totais sobre os 16 pares e escritas com `match` exaustivo.

use std::fmt;

use crate::error::{ScalarError, ScalarResult};

/// Índice de espaço de um escalar estendido
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(i8)]
pub enum SpaceIndex {
    /// −∞ (código −1)
    NegativeInfinity = -1,
    /// Zero (código 0)
    Zero = 0,
    /// Espaço real (código 1)
    Real = 1,
    /// +∞ (código 2)
    PositiveInfinity = 2,
}

use SpaceIndex::{NegativeInfinity as N, PositiveInfinity as P, Real as R, Zero as Z};

impl SpaceIndex {
    /// Menor código válido
    pub const MIN_CODE: i32 = -1;

    /// Maior código válido
    pub const MAX_CODE: i32 = 2;

    /// Os quatro estados em ordem crescente de código
    pub const ALL: [SpaceIndex; 4] = [N, Z, R, P];

    /// Código numérico (−1..=2)
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Letra do estado: N, Z, R ou P
    pub const fn symbol(self) -> char {
        match self {
            N => 'N',
            Z => 'Z',
            R => 'R',
            P => 'P',
        }
    }

    /// m(i): ordem de infinito do estado
    pub const fn order(self) -> i32 {
        match self {
            N => -1,
            P => 1,
            Z | R => 0,
        }
    }

    /// Um dos dois estados infinitos
    #[inline]
    pub const fn is_infinite(self) -> bool {
        matches!(self, N | P)
    }
}

impl TryFrom<i32> for SpaceIndex {
    type Error = ScalarError;

    fn try_from(code: i32) -> ScalarResult<Self> {
        match code {
            -1 => Ok(N),
            0 => Ok(Z),
            1 => Ok(R),
            2 => Ok(P),
            _ => Err(ScalarError::InvalidIndex(code)),
        }
    }
}

impl From<SpaceIndex> for i32 {
    fn from(index: SpaceIndex) -> Self {
        index.code()
    }
}

impl fmt::Display for SpaceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.code(), f)
    }
}

// =============================================================================
// Tabelas
// =============================================================================

/// μ_add(a, b)
pub const fn index_add(a: SpaceIndex, b: SpaceIndex) -> SpaceIndex {
    match (a, b) {
        (Z, b) => b,
        (a, Z) => a,
        (R, b) => b,
        (a, R) => a,
        (N, N) => N,
        (P, P) => P,
        (N, P) | (P, N) => R,
    }
}

/// μ_sub(a, b)
pub const fn index_subtract(a: SpaceIndex, b: SpaceIndex) -> SpaceIndex {
    match (a, b) {
        (P, P) => R,
        (P, N | Z | R) => P,

        (R, P) => N,
        (R, N) => P,
        (R, Z | R) => R,

        (Z, P) => N,
        (Z, N) => P,
        (Z, b @ (Z | R)) => b,

        (N, N) => R,
        (N, Z | R | P) => N,
    }
}

/// μ_mul(a, b)
pub const fn index_multiply(a: SpaceIndex, b: SpaceIndex) -> SpaceIndex {
    match (a, b) {
        (P, P | R) => P,
        (P, Z | N) => R,

        (R, b) => b,

        (Z, P | N) => R,
        (Z, Z | R) => Z,

        (N, R | N) => N,
        (N, Z | P) => R,
    }
}

/// μ_div(a, b), indexada pelo divisor
pub const fn index_divide(a: SpaceIndex, b: SpaceIndex) -> SpaceIndex {
    match (b, a) {
        (N, R | P) => P,
        (N, N | Z) => R,

        (Z, R | P) => P,
        (Z, N | Z) => R,

        (R, a) => a,

        (P, N | R) => N,
        (P, Z | P) => R,
    }
}

/// μ_inv(i): troca −∞ e +∞, identidade nos demais
pub const fn index_inversion(i: SpaceIndex) -> SpaceIndex {
    match i {
        N => P,
        P => N,
        Z | R => i,
    }
}

/// μ_clamp(i): satura um código bruto no intervalo −1..=2
pub const fn index_clamp(code: i32) -> SpaceIndex {
    match code {
        i32::MIN..=-1 => N,
        0 => Z,
        1 => R,
        2..=i32::MAX => P,
    }
}

// =============================================================================
// Operadores
// =============================================================================

/// Operador aritmético binário e sua tabela de índices
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum IndexOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl IndexOp {
    pub const ALL: [IndexOp; 4] = [
        IndexOp::Add,
        IndexOp::Subtract,
        IndexOp::Multiply,
        IndexOp::Divide,
    ];

    /// Aplica a tabela do operador
    #[inline]
    pub const fn apply(self, a: SpaceIndex, b: SpaceIndex) -> SpaceIndex {
        match self {
            IndexOp::Add => index_add(a, b),
            IndexOp::Subtract => index_subtract(a, b),
            IndexOp::Multiply => index_multiply(a, b),
            IndexOp::Divide => index_divide(a, b),
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            IndexOp::Add => '+',
            IndexOp::Subtract => '-',
            IndexOp::Multiply => '*',
            IndexOp::Divide => '/',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            IndexOp::Add => "add",
            IndexOp::Subtract => "subtract",
            IndexOp::Multiply => "multiply",
            IndexOp::Divide => "divide",
        }
    }
}

// =============================================================================
// Serde
// =============================================================================

impl serde::Serialize for SpaceIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i8(*self as i8)
    }
}

impl<'de> serde::Deserialize<'de> for SpaceIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = i32::deserialize(deserializer)?;
        SpaceIndex::try_from(code).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Testes
// =============================================================================
