use crate::math::eval_poly;
use crate::roots::Roots;
use approx::abs_diff_eq;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Asserts that `roots` has the same length as `expected` and that each root
/// is within `epsilon` of the expected value at the same position.
pub fn assert_roots_close(roots: &Roots, expected: &[f32], epsilon: f32) {
    assert_eq!(
        roots.len(),
        expected.len(),
        "(actual : expected) {:?} : {:?}",
        roots,
        expected
    );
    for (&actual, &wanted) in roots.iter().zip(expected.iter()) {
        assert!(
            abs_diff_eq!(actual, wanted, epsilon = epsilon),
            "(actual : expected) {:?} : {:?}",
            roots,
            expected
        );
    }
}

/// Asserts that the polynomial `coeffs` (highest degree first) evaluates to
/// within `tolerance` of zero at every reported root.
pub fn assert_residuals(coeffs: &[f32], roots: &Roots, tolerance: f64) {
    for &r in roots.iter() {
        let residual = eval_poly(coeffs, f64::from(r));
        assert!(
            residual.abs() < tolerance,
            "p({}) = {} for {:?}, roots {:?}",
            r,
            residual,
            coeffs,
            roots
        );
    }
}

/// Returns the roots in ascending order.
pub fn sorted(roots: &Roots) -> Roots {
    let mut v = roots.to_vec();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
    Roots::from_slots(v.len(), &v)
}
