//! # Scalar — Escalar Estendido LRRAS
//!
//! Par `(V, I)`: resíduo complexo não nulo e índice de espaço.
//!
//! ```text
//!   I = -1   V·(−∞)   resíduo é o peso do infinito negativo
//!   I =  0   V·0      resíduo é a multiplicidade do zero
//!   I =  1   V        resíduo é o próprio valor
//!   I =  2   V·(+∞)   resíduo é o peso do infinito positivo
//! ```
//!
//! ## Invariantes
//!
//! - `V ≠ 0`, mesmo com `I = 0`
//! - `V` nunca é NaN nem infinito
//! - igualdade é estrutural: `(200, 0) ≠ (2, 0)` embora ambos avaliem a 0
//!
//! Toda operação calcula um valor bruto e um índice bruto e devolve
//! `normalize(valor, índice)`. Nenhum caminho público contorna o
//! normalizador.
//!
//! ## Exemplo
//!
//! ```
//! use lrras_core::prelude::*;
//!
//! // 1 / 0 não falha: vai para o espaço +∞
//! let q = Scalar::ONE / Scalar::ZERO;
//! assert_eq!(q, Scalar::INFINITY);
//!
//! // e volta ao real multiplicando pelo zero
//! assert_eq!(q * Scalar::ZERO, Scalar::ONE);
//! ```

use num_complex::Complex;
use num_traits::Zero;
use std::f64::consts::E;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use tracing::trace;

use crate::error::{ScalarError, ScalarResult};
use crate::geometry::{is_geometric_negative, scaled_div};
use crate::index::{index_add, index_divide, index_multiply, index_subtract, SpaceIndex};
use crate::normalize::{normalize, normalize_code};

/// Sentinela complexa de +∞ devolvida por [`Scalar::to_complex`]
pub const COMPLEX_INFINITY: Complex<f64> = Complex::new(f64::INFINITY, f64::INFINITY);

/// Sentinela complexa de −∞ devolvida por [`Scalar::to_complex`]
pub const COMPLEX_NEG_INFINITY: Complex<f64> = Complex::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

/// Escalar estendido LRRAS
#[derive(Clone, Copy, PartialEq)]
pub struct Scalar {
    residue: Complex<f64>,
    index: SpaceIndex,
}

impl Scalar {
    // =========================================================================
    // Valores Especiais
    // =========================================================================

    /// Zero: (1, 0)
    pub const ZERO: Self = Self::unit(SpaceIndex::Zero);

    /// Um: (1, 1)
    pub const ONE: Self = Self::unit(SpaceIndex::Real);

    /// +∞: (1, 2)
    pub const INFINITY: Self = Self::unit(SpaceIndex::PositiveInfinity);

    /// −∞: (1, −1)
    pub const NEG_INFINITY: Self = Self::unit(SpaceIndex::NegativeInfinity);

    // =========================================================================
    // Construtores
    // =========================================================================

    /// Resíduo unitário no estado dado
    #[inline]
    pub(crate) const fn unit(index: SpaceIndex) -> Self {
        Self {
            residue: Complex::new(1.0, 0.0),
            index,
        }
    }

    /// Construtor bruto com verificação imediata das invariantes.
    ///
    /// Só é alcançável pelo normalizador e pela desserialização.
    pub(crate) fn validated(residue: Complex<f64>, index: SpaceIndex) -> ScalarResult<Self> {
        if residue.is_nan() {
            return Err(ScalarError::nan(residue));
        }
        if residue.is_zero() {
            return Err(ScalarError::zero_residue(residue));
        }
        if !residue.is_finite() {
            return Err(ScalarError::InvalidValue {
                value: residue,
                reason: "residue must be finite; normalize it instead",
            });
        }
        Ok(Self { residue, index })
    }

    /// f(c): escalar no espaço real
    #[inline]
    pub fn create(value: Complex<f64>) -> ScalarResult<Self> {
        normalize(value, SpaceIndex::Real)
    }

    /// f(c, i): escalar no espaço `index`
    #[inline]
    pub fn create_in(value: Complex<f64>, index: SpaceIndex) -> ScalarResult<Self> {
        normalize(value, index)
    }

    /// f(c, i) a partir de um código numérico de índice
    #[inline]
    pub fn create_with_code(value: Complex<f64>, code: i32) -> ScalarResult<Self> {
        normalize_code(value, code)
    }

    // =========================================================================
    // Acesso
    // =========================================================================

    /// Resíduo (valor no espaço real, peso nos demais)
    #[inline]
    pub const fn residue(&self) -> Complex<f64> {
        self.residue
    }

    /// Índice de espaço
    #[inline]
    pub const fn index(&self) -> SpaceIndex {
        self.index
    }

    #[inline]
    pub const fn is_zero_space(&self) -> bool {
        matches!(self.index, SpaceIndex::Zero)
    }

    #[inline]
    pub const fn is_real_space(&self) -> bool {
        matches!(self.index, SpaceIndex::Real)
    }

    #[inline]
    pub const fn is_infinite_space(&self) -> bool {
        self.index.is_infinite()
    }

    // =========================================================================
    // Conversões (com perda)
    // =========================================================================

    /// f⁻¹(s): projeção para um complexo comum
    ///
    /// Descarta o resíduo fora do espaço real.
    pub fn to_complex(&self) -> Complex<f64> {
        match self.index {
            SpaceIndex::Zero => Complex::zero(),
            SpaceIndex::Real => self.residue,
            SpaceIndex::PositiveInfinity => COMPLEX_INFINITY,
            SpaceIndex::NegativeInfinity => COMPLEX_NEG_INFINITY,
        }
    }

    /// Parte real de f⁻¹(s)
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.to_complex().re
    }

    /// Parte real de f⁻¹(s), truncada (satura em ±∞)
    #[inline]
    pub fn to_i64(&self) -> i64 {
        self.to_f64() as i64
    }

    /// Compara f⁻¹(s) com um complexo comum
    #[inline]
    pub fn eq_complex(&self, c: Complex<f64>) -> bool {
        self.to_complex() == c
    }

    // =========================================================================
    // Operações Fundamentais
    // =========================================================================

    /// Adição
    ///
    /// Um zero é absorvido por qualquer operando fora do espaço zero. Um
    /// resíduo geometricamente negativo no segundo operando usa a tabela de
    /// subtração.
    pub fn checked_add(self, rhs: Scalar) -> ScalarResult<Scalar> {
        match (self.index, rhs.index) {
            (SpaceIndex::Zero, b) if b != SpaceIndex::Zero => return Ok(rhs),
            (a, SpaceIndex::Zero) if a != SpaceIndex::Zero => return Ok(self),
            _ => {}
        }

        if is_geometric_negative(rhs.residue) {
            return normalize(
                self.residue - -rhs.residue,
                index_subtract(self.index, rhs.index),
            );
        }

        normalize(self.residue + rhs.residue, index_add(self.index, rhs.index))
    }

    /// Subtração
    pub fn checked_sub(self, rhs: Scalar) -> ScalarResult<Scalar> {
        match (self.index, rhs.index) {
            (SpaceIndex::Real, SpaceIndex::Zero) => return Ok(self),
            (SpaceIndex::Zero, SpaceIndex::Real) => {
                return normalize(-rhs.residue, SpaceIndex::Real);
            }
            _ => {}
        }

        let mut raw = self.residue - rhs.residue;

        if raw.is_zero() {
            if self.index == rhs.index {
                return Ok(Scalar::ZERO);
            }
            // ordens diferentes se cancelaram; uma ordem sobrevive
            trace!(lhs = %self, rhs = %rhs, "residues cancelled across spaces");
            raw = Complex::new(-1.0, 0.0);
        }

        normalize(raw, index_subtract(self.index, rhs.index))
    }

    /// Negação: `ZERO − s`
    #[inline]
    pub fn checked_neg(self) -> ScalarResult<Scalar> {
        Scalar::ZERO.checked_sub(self)
    }

    /// Multiplicação
    #[inline]
    pub fn checked_mul(self, rhs: Scalar) -> ScalarResult<Scalar> {
        normalize(self.residue * rhs.residue, index_multiply(self.index, rhs.index))
    }

    /// Divisão
    ///
    /// Usa [`scaled_div`]: resíduos finitos e não nulos nunca produzem NaN,
    /// e só um quociente que realmente estoura vai para o espaço +∞.
    #[inline]
    pub fn checked_div(self, rhs: Scalar) -> ScalarResult<Scalar> {
        normalize(
            scaled_div(self.residue, rhs.residue),
            index_divide(self.index, rhs.index),
        )
    }

    /// Potência real, preservando o índice
    ///
    /// Resíduo puramente real usa `f64::powf` para evitar artefatos de ramo.
    /// Potência fracionária de real negativo dá NaN e falha.
    pub fn pow(self, n: f64) -> ScalarResult<Scalar> {
        if n == 0.0 {
            return Ok(Scalar::ONE);
        }

        let value = if self.residue.im == 0.0 {
            Complex::new(self.residue.re.powf(n), 0.0)
        } else {
            self.residue.powf(n)
        };

        normalize(value, self.index)
    }

    /// Raiz n-ésima: `pow(1/n)`; `root(0)` é [`Scalar::ONE`]
    pub fn root(self, n: f64) -> ScalarResult<Scalar> {
        if n == 0.0 {
            return Ok(Scalar::ONE);
        }

        self.pow(1.0 / n)
    }

    /// Logaritmo na base `base`, preservando o índice
    pub fn log(self, base: f64) -> ScalarResult<Scalar> {
        let (r, theta) = self.residue.to_polar();
        let magnitude = if base == 10.0 {
            r.log10()
        } else if base == 2.0 {
            r.log2()
        } else if base == E {
            r.ln()
        } else {
            r.ln() / base.ln()
        };

        normalize(Complex::new(magnitude, theta / base.ln()), self.index)
    }

    /// Logaritmo natural
    #[inline]
    pub fn ln(self) -> ScalarResult<Scalar> {
        self.log(E)
    }

    /// Valor absoluto do resíduo, preservando o índice
    pub fn abs(self) -> ScalarResult<Scalar> {
        normalize(Complex::new(self.residue.norm(), 0.0), self.index)
    }
}

// =============================================================================
// Texto
// =============================================================================

/// Forma textual de um resíduo: `3`, `3+2i`, `-2i`, `+1i`, `0`
pub struct ResidueDisplay(pub Complex<f64>);

impl fmt::Display for ResidueDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Complex { re, im } = self.0;

        if re == 0.0 && im == 0.0 {
            return f.write_str("0");
        }
        if re != 0.0 {
            write!(f, "{re}")?;
        }
        if im > 0.0 {
            write!(f, "+{im}i")?;
        } else if im < 0.0 {
            write!(f, "{im}i")?;
        }
        Ok(())
    }
}

/// Formata um resíduo como em `(V, I)`
pub fn format_residue(c: Complex<f64>) -> String {
    ResidueDisplay(c).to_string()
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scalar(V={}, I={})",
            ResidueDisplay(self.residue),
            self.index.symbol()
        )
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", ResidueDisplay(self.residue), self.index)
    }
}

// =============================================================================
// Operadores
// =============================================================================

// Os operadores só entram em pânico se a própria aritmética complexa
// produzir NaN, o que acontece na multiplicação quando `ac` e `bd` estouram
// juntos (∞ − ∞). A divisão é escalonada e não cai nesse caso. Use as
// variantes `checked_*` para tratar o erro.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $checked:ident, $symbol:literal) => {
        impl $trait for Scalar {
            type Output = Scalar;

            /// # Panics
            ///
            /// Se o resíduo bruto for NaN, o que só a multiplicação com
            /// estouro em ambas as componentes produz.
            fn $method(self, rhs: Scalar) -> Scalar {
                match self.$checked(rhs) {
                    Ok(s) => s,
                    Err(e) => panic!("{} {} {}: {}", self, $symbol, rhs, e),
                }
            }
        }
    };
}

impl_binary_op!(Add, add, checked_add, "+");
impl_binary_op!(Sub, sub, checked_sub, "-");
impl_binary_op!(Mul, mul, checked_mul, "*");
impl_binary_op!(Div, div, checked_div, "/");

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        match self.checked_neg() {
            Ok(s) => s,
            Err(e) => panic!("-{}: {}", self, e),
        }
    }
}

impl PartialEq<Complex<f64>> for Scalar {
    fn eq(&self, other: &Complex<f64>) -> bool {
        self.eq_complex(*other)
    }
}

// =============================================================================
// Conversões
// =============================================================================

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        // um i64 vira um f64 finito e nunca NaN; 0 normaliza para ZERO
        Scalar::create(Complex::new(value as f64, 0.0)).unwrap_or(Scalar::ZERO)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::from(i64::from(value))
    }
}

impl TryFrom<f64> for Scalar {
    type Error = ScalarError;

    fn try_from(value: f64) -> ScalarResult<Self> {
        Scalar::create(Complex::new(value, 0.0))
    }
}

impl TryFrom<Complex<f64>> for Scalar {
    type Error = ScalarError;

    fn try_from(value: Complex<f64>) -> ScalarResult<Self> {
        Scalar::create(value)
    }
}

impl From<Scalar> for Complex<f64> {
    fn from(s: Scalar) -> Self {
        s.to_complex()
    }
}

// =============================================================================
// Serde
// =============================================================================

impl serde::Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Scalar", 3)?;
        state.serialize_field("re", &self.residue.re)?;
        state.serialize_field("im", &self.residue.im)?;
        state.serialize_field("index", &self.index)?;
        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct ScalarData {
            re: f64,
            im: f64,
            index: i32,
        }

        let data = ScalarData::deserialize(deserializer)?;
        SpaceIndex::try_from(data.index)
            .and_then(|index| Scalar::validated(Complex::new(data.re, data.im), index))
            .map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Testes
// =============================================================================
