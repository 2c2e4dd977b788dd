//! Testes integrados para lrras-core

use crate::prelude::*;
use crate::index::{index_divide, index_multiply};
use crate::scalar::format_residue;

/// Atalho para f(v, i) com resíduo real
fn sc(re: f64, code: i32) -> Scalar {
    Scalar::create_with_code(Complex::new(re, 0.0), code).unwrap()
}

fn real(re: f64) -> Scalar {
    sc(re, 1)
}

// =============================================================================
// Adição
// =============================================================================

#[test]
fn test_lossless_zero_counting() {
    assert_eq!(Scalar::ZERO + Scalar::ZERO, sc(2.0, 0));
}

#[test]
fn test_lossy_zero_addition() {
    assert_eq!(sc(150.0, 0) + Scalar::ONE, Scalar::ONE);
}

#[test]
fn test_infinity_real_addition() {
    assert_eq!(Scalar::INFINITY + real(1.0), sc(2.0, 2));
}

#[test]
fn test_infinity_counting() {
    assert_eq!(Scalar::INFINITY + Scalar::INFINITY, sc(2.0, 2));
    assert_eq!(Scalar::NEG_INFINITY + Scalar::NEG_INFINITY, sc(2.0, -1));
}

#[test]
fn test_zero_absorbed_by_infinities() {
    assert_eq!(Scalar::INFINITY + Scalar::ZERO, Scalar::INFINITY);
    assert_eq!(Scalar::ZERO + Scalar::INFINITY, Scalar::INFINITY);
    assert_eq!(Scalar::NEG_INFINITY + sc(5.0, 0), Scalar::NEG_INFINITY);
    assert_eq!(sc(5.0, 0) + Scalar::NEG_INFINITY, Scalar::NEG_INFINITY);
}

#[test]
fn test_negative_infinity_real_addition() {
    assert_eq!(Scalar::NEG_INFINITY + real(1.0), sc(2.0, -1));
}

#[test]
fn test_infinity_infinity_addition() {
    assert_eq!(sc(3.0, 2) + sc(5.0, 2), sc(8.0, 2));
}

#[test]
fn test_add_opposing_positive_infinities() {
    // resíduo negativo usa a tabela de subtração: P − P = R, e 0 em R cai para Z
    assert_eq!(sc(1.0, 2) + sc(-1.0, 2), Scalar::ZERO);
    assert_eq!(sc(12.0, 2) + sc(-15.0, 2), real(-3.0));
}

#[test]
fn test_traditional_addition() {
    for i in -100..=100i64 {
        for j in -100..=100i64 {
            let s = Scalar::from(i) + Scalar::from(j);
            assert_eq!(s.to_i64(), i + j, "{i} + {j} = {s}");
        }
    }
}

// =============================================================================
// Subtração
// =============================================================================

#[test]
fn test_one_minus_infinity() {
    assert_eq!(Scalar::ONE - Scalar::INFINITY, sc(-1.0, -1));
    assert_eq!(Scalar::ONE - Scalar::create(COMPLEX_INFINITY).unwrap(), sc(-1.0, -1));
}

#[test]
fn test_infinity_minus_infinity_is_zero() {
    assert_eq!(Scalar::INFINITY - Scalar::INFINITY, Scalar::ZERO);
}

#[test]
fn test_infinity_minus_lower_orders() {
    assert_eq!(sc(6.0, 2) - sc(3.0, 0), sc(3.0, 2));
    assert_eq!(sc(6.0, 2) - real(3.0), sc(3.0, 2));
    assert_eq!(sc(6.0, 2) - sc(3.0, -1), sc(3.0, 2));
}

#[test]
fn test_lower_orders_minus_infinity() {
    assert_eq!(sc(6.0, 0) - sc(3.0, 2), sc(3.0, -1));
    assert_eq!(sc(6.0, -1) - sc(3.0, 2), sc(3.0, -1));
}

#[test]
fn test_zero_minus_real() {
    assert_eq!(Scalar::ZERO - Scalar::ONE, real(-1.0));
    assert_eq!(sc(100.0, 0) - Scalar::ONE, real(-1.0));
}

#[test]
fn test_real_minus_zero_is_lossy() {
    assert_eq!(Scalar::ONE - sc(100.0, 0), Scalar::ONE);
}

#[test]
fn test_zero_minus_zero() {
    assert_eq!(Scalar::ZERO - Scalar::ZERO, Scalar::ZERO);
}

#[test]
fn test_cancelled_residues_keep_surviving_order() {
    assert_eq!(sc(1.0, 2) - Scalar::ONE, sc(-1.0, 2));
    assert_eq!(sc(1.0, -1) - Scalar::ONE, sc(-1.0, -1));
    assert_eq!(Scalar::INFINITY - Scalar::ZERO, sc(-1.0, 2));
}

#[test]
fn test_infinity_infinity_subtraction_to_real() {
    assert_eq!(sc(3.0, 2) - sc(5.0, 2), real(-2.0));
}

#[test]
fn test_infinity_minus_real() {
    assert_eq!(Scalar::INFINITY - real(2.0), sc(-1.0, 2));
}

#[test]
fn test_traditional_subtraction() {
    for i in -100..=100i64 {
        for j in -100..=100i64 {
            let s = Scalar::from(i) - Scalar::from(j);
            assert_eq!(s.to_i64(), i - j, "{i} - {j} = {s}");
        }
    }
}

#[test]
fn test_subtraction_inverts_addition_in_real_space() {
    for i in -100..=100i64 {
        for j in -100..=100i64 {
            if i == 0 || j == 0 {
                continue;
            }
            let a = Scalar::from(i);
            let b = Scalar::from(j);
            let diff = a - b;
            let back = diff + b;
            assert_eq!(back, a, "{a} - {b} = {diff}; {diff} + {b} = {back}");
        }
    }
}

// =============================================================================
// Negação
// =============================================================================

#[test]
fn test_negation() {
    assert_eq!(-Scalar::ZERO, Scalar::ZERO);
    assert_eq!(-Scalar::ONE, real(-1.0));
    // ZERO − (1, 2): resíduos se cancelam entre ordens diferentes
    assert_eq!(-Scalar::INFINITY, sc(-1.0, -1));
}

#[test]
fn test_traditional_negation() {
    for i in -100..=100i64 {
        assert_eq!((-Scalar::from(i)).to_i64(), -i);
    }
}

// =============================================================================
// Multiplicação
// =============================================================================

#[test]
fn test_negative_imaginary_by_real() {
    let a = real(3600.0);
    let b = Scalar::create_in(Complex::new(0.0, -1.0), SpaceIndex::NegativeInfinity).unwrap();
    let expected = Scalar::create_in(Complex::new(0.0, -3600.0), SpaceIndex::NegativeInfinity).unwrap();
    assert_eq!(a * b, expected);
}

#[test]
fn test_lossless_zero_multiplication() {
    assert_eq!(sc(10.0, 0) * sc(5.0, 0), sc(50.0, 0));
    assert_eq!(sc(10.0, 0) * real(5.0), sc(50.0, 0));
}

#[test]
fn test_zero_times_infinity_escapes_to_real() {
    assert_eq!(sc(3.0, 0) * sc(4.0, 2), real(12.0));
    assert_eq!(Scalar::ZERO * Scalar::NEG_INFINITY, Scalar::ONE);
}

#[test]
fn test_traditional_multiplication() {
    for i in -100..=100i64 {
        for j in -100..=100i64 {
            let s = Scalar::from(i) * Scalar::from(j);
            assert_eq!(s.to_i64(), i * j, "{i} * {j} = {s}");
        }
    }
}

#[test]
fn test_multiplication_division_symmetry() {
    for i in -20..=20i32 {
        for j in -20..=20i32 {
            if i == 0 || j == 0 {
                continue;
            }
            for x in SpaceIndex::ALL {
                for y in SpaceIndex::ALL {
                    let a = sc(i as f64, x.code());
                    let b = sc(j as f64, y.code());

                    let c = a * b;
                    assert_eq!(c.residue().re, (i * j) as f64, "{a} * {b} = {c}");

                    // só onde a própria tabela de índices é invertível
                    if index_divide(index_multiply(x, y), y) == x {
                        assert_eq!(c / b, a, "{a} * {b} = {c}; {c} / {b}");
                    }
                }
            }
        }
    }
}

// =============================================================================
// Divisão
// =============================================================================

#[test]
fn test_one_over_negative_imaginary_negative_infinity() {
    let b = Scalar::create_in(Complex::new(0.0, -1.0), SpaceIndex::NegativeInfinity).unwrap();
    let expected = Scalar::create_in(Complex::new(0.0, 1.0), SpaceIndex::PositiveInfinity).unwrap();
    assert_eq!(Scalar::ONE / b, expected);
}

#[test]
fn test_division_by_zero_space() {
    assert_eq!(Scalar::ONE / Scalar::ZERO, Scalar::INFINITY);
    assert_eq!(real(10.0) / sc(5.0, 0), sc(2.0, 2));
    assert_eq!(sc(10.0, 0) / sc(5.0, 0), real(2.0));
    assert_eq!(Scalar::ZERO / Scalar::ZERO, Scalar::ONE);
    assert_eq!(sc(2.0, 2) / Scalar::ZERO, sc(2.0, 2));
}

#[test]
fn test_division_by_infinities() {
    assert_eq!(real(5.0) / Scalar::INFINITY, sc(5.0, -1));
    assert_eq!(sc(10.0, 2) / sc(5.0, 2), real(2.0));
    assert_eq!(sc(10.0, 2) / sc(5.0, -1), sc(2.0, 2));
    assert_eq!(sc(10.0, 0) / sc(5.0, -1), real(2.0));
    assert_eq!(real(10.0) / sc(5.0, -1), sc(2.0, 2));
}

#[test]
fn test_zero_over_real_stays_zero() {
    assert_eq!(sc(10.0, 0) / real(5.0), sc(2.0, 0));
}

#[test]
fn test_traditional_division() {
    for i in -100..=100i64 {
        for j in -100..=100i64 {
            if j == 0 {
                continue;
            }
            let s = Scalar::from(i) / Scalar::from(j);
            assert_eq!(s.to_i64(), i / j, "{i} / {j} = {s}");
        }
    }
}

#[test]
fn test_division_near_float_limits() {
    let huge = Scalar::create(Complex::new(1e300, 1e300)).unwrap();
    let big = Scalar::create(Complex::new(1e200, 1e200)).unwrap();
    let q = huge.checked_div(big).unwrap();
    assert!(q.is_real_space());
    assert!((q.residue().re / 1e100 - 1.0).abs() < 1e-12);
    assert_eq!(q.residue().im, 0.0);

    let big = real(1e200);
    assert_eq!(big / big, Scalar::ONE);

    let q = Scalar::ONE / real(1e-200);
    assert!(q.is_real_space(), "{q}");
    assert!((q.to_f64() / 1e200 - 1.0).abs() < 1e-12);
}

#[test]
fn test_division_that_really_overflows_goes_to_infinity() {
    assert_eq!(real(1e300) / real(1e-300), Scalar::INFINITY);
    assert_eq!(real(-1e300) / real(1e-300), Scalar::NEG_INFINITY);
}

// =============================================================================
// Potência, raiz, log, abs
// =============================================================================

#[test]
fn test_sqrt_of_25() {
    assert_eq!(real(25.0).root(2.0).unwrap(), real(5.0));
}

#[test]
fn test_pow_and_root_of_zero_degree() {
    assert_eq!(sc(7.0, 2).pow(0.0).unwrap(), Scalar::ONE);
    assert_eq!(sc(7.0, -1).root(0.0).unwrap(), Scalar::ONE);
}

#[test]
fn test_pow_preserves_index() {
    assert_eq!(sc(3.0, 2).pow(2.0).unwrap(), sc(9.0, 2));
    assert_eq!(sc(-2.0, 0).pow(3.0).unwrap(), sc(-8.0, 0));
}

#[test]
fn test_pow_overflow_and_underflow_shift_space() {
    assert_eq!(real(10.0).pow(400.0).unwrap(), Scalar::INFINITY);
    assert_eq!(real(10.0).pow(-400.0).unwrap(), Scalar::ZERO);
}

#[test]
fn test_complex_pow() {
    let i = Scalar::create(Complex::new(0.0, 1.0)).unwrap();
    let sq = i.pow(2.0).unwrap();
    assert_eq!(sq.index(), SpaceIndex::Real);
    assert!((sq.residue() - Complex::new(-1.0, 0.0)).norm() < 1e-12);
}

#[test]
fn test_root_of_negative_real_is_invalid() {
    assert!(matches!(
        real(-4.0).root(2.0),
        Err(ScalarError::InvalidValue { .. })
    ));
}

#[test]
fn test_log() {
    assert_eq!(real(100.0).log(10.0).unwrap().to_string(), "(2, 1)");
    assert_eq!(real(8.0).log(2.0).unwrap().to_string(), "(3, 1)");
    assert_eq!(Scalar::ONE.ln().unwrap().to_string(), "(1, 0)");
    assert_eq!(Scalar::ZERO.ln().unwrap().to_string(), "(1, 0)");
    assert_eq!(Scalar::INFINITY.ln().unwrap().to_string(), "(1, 1)");
}

#[test]
fn test_abs() {
    let s = Scalar::create(Complex::new(3.0, 4.0)).unwrap();
    assert_eq!(s.abs().unwrap(), real(5.0));
    assert_eq!(sc(-2.0, -1).abs().unwrap(), sc(2.0, -1));
}

// =============================================================================
// Geometria sobre escalares
// =============================================================================

#[test]
fn test_signed_root_of_negative_infinity_residue() {
    let s = sc(-1.0, -1);
    let root = Scalar::create_in(sisqrt(s.residue()), s.index()).unwrap();
    let expected = Scalar::create_in(Complex::new(0.0, -1.0), SpaceIndex::NegativeInfinity).unwrap();
    assert_eq!(root, expected);
}

#[test]
fn test_residue_text_matches_display() {
    let s = Scalar::create(Complex::new(-1.5, 2.0)).unwrap();
    assert_eq!(s.to_string(), format!("({}, 1)", format_residue(s.residue())));
    assert_eq!(s.to_string(), "(-1.5+2i, 1)");
}

#[test]
fn test_operands_are_not_mutated() {
    let a = sc(6.0, 2);
    let b = sc(3.0, 0);
    let _ = a - b;
    let _ = a * b;
    assert_eq!(a, sc(6.0, 2));
    assert_eq!(b, sc(3.0, 0));
}

#[test]
fn test_scalars_cross_threads() {
    let handles: Vec<_> = (1..=8i64)
        .map(|n| std::thread::spawn(move || (Scalar::from(n) / Scalar::ZERO) * Scalar::ZERO))
        .collect();

    for (n, handle) in (1..=8i64).zip(handles) {
        assert_eq!(handle.join().unwrap(), Scalar::from(n));
    }
}
