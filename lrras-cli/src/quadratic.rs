//! Quadratic formula demonstration
//!
//! Compares the classical two-root formula with a single-root formula
//! built on [`sisqrt`], and with an extended-scalar version that can also
//! answer `0x² + 0x + c = 0` by placing a root in positive-infinity space.

use lrras_core::{format_residue, sisqrt, Complex, Scalar, ScalarResult, SpaceIndex};
use serde::Serialize;
use tracing::debug;

use crate::CliError;

fn nan() -> Complex<f64> {
    Complex::new(f64::NAN, f64::NAN)
}

/// Classical roots `(-b ± √(b² − 4ac)) / 2a`
///
/// Degenerate cases: `0 = 0` gives `(0, NaN)`, the linear case gives
/// `(-c/b, NaN)` and `a = b = 0` with `c ≠ 0` gives `(NaN, NaN)`.
pub fn solve_classical(a: f64, b: f64, c: f64) -> (Complex<f64>, Complex<f64>) {
    if a == 0.0 {
        if b == 0.0 {
            if c == 0.0 {
                return (Complex::new(0.0, 0.0), nan());
            }
            return (nan(), nan());
        }
        return (Complex::new(-c / b, 0.0), nan());
    }

    let discriminant = Complex::new(b * b - 4.0 * a * c, 0.0);
    let root = discriminant.sqrt();
    let minus_b = Complex::new(-b, 0.0);

    ((minus_b + root) / (2.0 * a), (minus_b - root) / (2.0 * a))
}

/// Single root `(-b + sisqrt(b² − 4ac)) / 2a`
pub fn solve_signed(a: f64, b: f64, c: f64) -> Complex<f64> {
    if a == 0.0 {
        if b == 0.0 {
            if c == 0.0 {
                return Complex::new(0.0, 0.0);
            }
            return nan();
        }
        return Complex::new(-c / b, 0.0);
    }

    let discriminant = Complex::new(b * b - 4.0 * a * c, 0.0);
    (Complex::new(-b, 0.0) + sisqrt(discriminant)) / (2.0 * a)
}

/// Extended root
///
/// For `0x² + 0x + c` (with `c ≠ 0`) this is the root of `x² + x + c`
/// placed in positive-infinity space: multiplied by the zero coefficients
/// it falls back into real space, where it cancels `c`.
pub fn solve_scalar(a: f64, b: f64, c: f64) -> ScalarResult<Scalar> {
    if a == 0.0 && b == 0.0 && c != 0.0 {
        let discriminant = Complex::new(1.0 - 4.0 * c, 0.0);
        let root = (Complex::new(-1.0, 0.0) + sisqrt(discriminant)) / 2.0;
        debug!(c, root = %format_residue(root), "impossible equation solved in infinity space");
        return Scalar::create_in(root, SpaceIndex::PositiveInfinity);
    }

    Scalar::create(solve_signed(a, b, c))
}

/// `a·x² + b·x + c` in extended arithmetic
pub fn substitute(a: f64, b: f64, c: f64, x: Scalar) -> ScalarResult<Scalar> {
    let a = Scalar::try_from(a)?;
    let b = Scalar::try_from(b)?;
    let c = Scalar::try_from(c)?;

    a.checked_mul(x.pow(2.0)?)?
        .checked_add(b.checked_mul(x)?)?
        .checked_add(c)
}

/// Everything `lrras solve` reports for one equation
#[derive(Debug, Clone, Serialize)]
pub struct QuadraticReport {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// Classical roots; `None` where the formula has no answer
    pub classical: [Option<String>; 2],
    pub signed: Option<String>,
    pub extended: Scalar,
    /// `a·x² + b·x + c` evaluated at the extended root
    pub substituted: Scalar,
}

impl QuadraticReport {
    /// True when the substitution check landed on zero, up to rounding
    pub fn vanishes(&self) -> bool {
        let s = self.substituted;
        s == Scalar::ZERO || (s.is_real_space() && s.residue().norm() < VANISH_EPS)
    }
}

const VANISH_EPS: f64 = 1e-9;

fn render(c: Complex<f64>) -> Option<String> {
    if c.is_nan() {
        None
    } else {
        Some(format_residue(c))
    }
}

/// Solve one equation every way and check the extended root
pub fn solve(a: f64, b: f64, c: f64) -> Result<QuadraticReport, CliError> {
    for (name, value) in [("a", a), ("b", b), ("c", c)] {
        if !value.is_finite() {
            return Err(CliError::InvalidCoefficient { name, value });
        }
    }

    let (x1, x2) = solve_classical(a, b, c);
    let extended = solve_scalar(a, b, c)?;
    let substituted = substitute(a, b, c, extended)?;

    Ok(QuadraticReport {
        a,
        b,
        c,
        classical: [render(x1), render(x2)],
        signed: render(solve_signed(a, b, c)),
        extended,
        substituted,
    })
}
