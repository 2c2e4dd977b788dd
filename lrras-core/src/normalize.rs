//! # Normalizador — p(v, i)
//!
//! Ponto único de canonicalização: todo escalar observável passa por aqui.
//!
//! ## Regras (em ordem)
//!
//! 1. `v == 0` → resíduo 1; o *estado* anda um passo em direção ao zero
//!    (código 0 fica em zero, códigos positivos descem, negativos sobem).
//! 2. `v` infinito positivo → resíduo 1, estado um passo em direção a +∞.
//! 3. `v` infinito negativo → `(1, −∞)` a partir do espaço real; nos demais
//!    estados, um passo em direção a −∞.
//! 4. `v` NaN → [`ScalarError::InvalidValue`].
//! 5. Caso contrário `(v, i)` sem alteração.
//!
//! Apenas os caminhos 1–3 deslocam o código, e sempre saturam com
//! [`index_clamp`]. O caminho 5 exige um código já válido.

use num_complex::Complex;
use num_traits::Zero;
use tracing::{debug, trace};

use crate::error::{ScalarError, ScalarResult};
use crate::geometry::is_geometric_negative;
use crate::index::{index_clamp, SpaceIndex};
use crate::scalar::Scalar;

/// p(v, i) com índice tipado
#[inline]
pub fn normalize(value: Complex<f64>, index: SpaceIndex) -> ScalarResult<Scalar> {
    normalize_code(value, index.code())
}

/// p(v, i) sobre um código bruto, possivelmente fora de −1..=2
pub fn normalize_code(value: Complex<f64>, code: i32) -> ScalarResult<Scalar> {
    if value.is_zero() {
        let shifted = match code {
            0 => SpaceIndex::Zero,
            c if c > 0 => index_clamp(c - 1),
            c => index_clamp(c.saturating_add(1)),
        };
        trace!(code, index = %shifted, "zero value collapsed into a space shift");
        return Ok(Scalar::unit(shifted));
    }

    match infinite_direction(value) {
        Some(Direction::Positive) => {
            let shifted = index_clamp(code.saturating_add(1));
            trace!(%value, code, index = %shifted, "positive infinity collapsed into a space shift");
            return Ok(Scalar::unit(shifted));
        }
        Some(Direction::Negative) => {
            if code == SpaceIndex::Real.code() {
                return Ok(Scalar::NEG_INFINITY);
            }
            let shifted = index_clamp(code.saturating_sub(1));
            trace!(%value, code, index = %shifted, "negative infinity collapsed into a space shift");
            return Ok(Scalar::unit(shifted));
        }
        None => {}
    }

    if value.is_nan() {
        debug!(%value, code, "rejecting NaN during normalization");
        return Err(ScalarError::nan(value));
    }

    let index = SpaceIndex::try_from(code)?;
    Scalar::validated(value, index)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Direction {
    Positive,
    Negative,
}

/// Direção de um valor com alguma componente infinita.
///
/// O teste é por componente (estouro de float), não por igualdade com a
/// sentinela `(∞, ∞)`, que já é coberta. Só as componentes infinitas
/// decidem o sinal, então `(NaN, −∞)` é negativo.
fn infinite_direction(value: Complex<f64>) -> Option<Direction> {
    if !value.re.is_infinite() && !value.im.is_infinite() {
        return None;
    }

    let keep = |x: f64| if x.is_infinite() { x } else { 0.0 };
    if is_geometric_negative(Complex::new(keep(value.re), keep(value.im))) {
        Some(Direction::Negative)
    } else {
        Some(Direction::Positive)
    }
}
