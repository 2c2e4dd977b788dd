//! # Geometria Complexa
//!
//! Predicados e transformações puras sobre `Complex<f64>` usados pela
//! álgebra de escalares. Não dependem do resto do crate.
//!
//! | Função | Notação | Efeito |
//! |--------|---------|--------|
//! | [`is_geometric_negative`] | g(c) | sinal por quadrante |
//! | [`rot270`] | Rot₂₇₀(c) | (a, b) → (b, −a) |
//! | [`ssqrt`] | ssqrt(c) | raiz que preserva o sinal (resultado real) |
//! | [`sisqrt`] | sisqrt(c) | raiz que preserva o sinal no eixo imaginário |
//! | [`scaled_div`] | a / b | divisão de Smith, sem estouro intermediário |

use num_complex::Complex;

/// g(c): verdadeiro se `re < 0`, ou `re == 0` e `im < 0`.
///
/// Sinal total baseado em quadrante, distinto do sinal da magnitude.
/// Zero (incluindo `-0.0`) não é negativo.
#[inline]
pub fn is_geometric_negative(c: Complex<f64>) -> bool {
    c.re < 0.0 || (c.re == 0.0 && c.im < 0.0)
}

/// Rotação de 270° (três passos de 90°): (a, b) → (b, −a)
///
/// Quatro aplicações devolvem exatamente o valor original.
#[inline]
pub fn rot270(c: Complex<f64>) -> Complex<f64> {
    Complex::new(c.im, -c.re)
}

/// Raiz quadrada que preserva o sinal
///
/// Para `c` geometricamente negativo devolve `−√|c|` (real, negativo);
/// caso contrário a raiz principal.
pub fn ssqrt(c: Complex<f64>) -> Complex<f64> {
    if is_geometric_negative(c) {
        return Complex::new(-c.norm().sqrt(), 0.0);
    }

    c.sqrt()
}

/// Raiz quadrada com índice de sinal
///
/// Para `c` geometricamente negativo devolve `Rot₂₇₀(√|c|)`, isto é
/// `−√|c|·i`; caso contrário a raiz principal. Dá uma única raiz no eixo
/// imaginário sem depender da convenção de corte de ramo.
pub fn sisqrt(c: Complex<f64>) -> Complex<f64> {
    if is_geometric_negative(c) {
        return rot270(Complex::new(c.norm().sqrt(), 0.0));
    }

    c.sqrt()
}

/// Divisão complexa escalonada (algoritmo de Smith)
///
/// A divisão de `num_complex` calcula `c² + d²` antes de dividir, o que
/// estoura para ∞ (ou some para 0) com resíduos perto dos limites de `f64`
/// mesmo quando o quociente é finito. Aqui o divisor é escalonado pela
/// razão entre suas componentes, que nunca passa de 1 em módulo.
///
/// `b` não pode ser zero.
pub fn scaled_div(a: Complex<f64>, b: Complex<f64>) -> Complex<f64> {
    if b.im == 0.0 {
        return Complex::new(a.re / b.re, a.im / b.re);
    }

    if b.im.abs() <= b.re.abs() {
        let r = b.im / b.re;
        let den = b.re + b.im * r;
        Complex::new((a.re + a.im * r) / den, (a.im - a.re * r) / den)
    } else {
        let r = b.re / b.im;
        let den = b.im + b.re * r;
        Complex::new((a.re * r + a.im) / den, (a.im * r - a.re) / den)
    }
}
