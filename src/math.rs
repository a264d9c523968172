use core::ops::Mul;

/// Absolute tolerance below which a value is treated as zero.
pub const EQN_EPS: f64 = 1.0E-9;

/// Returns true if `x` is within `EQN_EPS` of zero.
///
/// Every degeneracy and discriminant decision in the solvers goes through
/// this one predicate.
#[inline]
pub fn is_zero(x: f64) -> bool {
    (x > -EQN_EPS) && (x < EQN_EPS)
}

pub fn sqr<T>(a: T) -> T
where
    T: Copy + Mul<T, Output = T>,
{
    a * a
}

/// Evaluates a polynomial at `x` using Horner's rule.
/// `coeffs` are ordered from the highest-degree term down to the constant.
pub fn eval_poly(coeffs: &[f32], x: f64) -> f64 {
    coeffs
        .iter()
        .fold(0.0, |acc, &c| acc * x + f64::from(c))
}
