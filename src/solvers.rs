//! Closed-form solvers for linear, quadric and cubic equations.
//!
//! Each solver reduces to the next lower degree when its leading
//! coefficient is zero (cubic -> quadric -> linear). Inputs and outputs are
//! `f32`; everything in between is computed in `f64`.
//!
//! The `*_into` forms write into a caller-owned buffer and report the number
//! of valid roots at its front. The plain forms return a [`Roots`] value.

use crate::error::Error;
use crate::math::{is_zero, sqr};
use crate::roots::Roots;
use core::f64::consts::PI;
use log::{debug, trace};

/// Buffer capacity required by the linear solver.
pub const LINEAR_CAPACITY: usize = 1;
/// Buffer capacity required by the quadric solver.
pub const QUADRIC_CAPACITY: usize = 2;
/// Buffer capacity required by the cubic solver, whatever degree it reduces to.
pub const CUBIC_CAPACITY: usize = 3;

// s.len() >= 1
fn linear(c1: f32, c0: f32, s: &mut [f32]) -> usize {
    let c1 = f64::from(c1);
    let c0 = f64::from(c0);
    if is_zero(c1) {
        trace!("linear: degenerate, c1 = {}", c1);
        return 0;
    }
    s[0] = (-c0 / c1) as f32;
    1
}

// s.len() >= 2
fn quadric(c2: f32, c1: f32, c0: f32, s: &mut [f32]) -> usize {
    if is_zero(f64::from(c2)) {
        trace!("quadric: c2 is zero, reducing to linear");
        return linear(c1, c0, s);
    }
    let c2 = f64::from(c2);

    // normal form: x^2 + 2px + q = 0
    let p = f64::from(c1) / (2.0 * c2);
    let q = f64::from(c0) / c2;
    let d = sqr(p) - q;

    if is_zero(d) {
        trace!("quadric: double root");
        let root = (-p) as f32;
        s[0] = root;
        s[1] = root;
        1
    } else if d < 0.0 {
        trace!("quadric: no real roots, D = {}", d);
        0
    } else {
        let sqrt_d = d.sqrt();
        s[0] = (sqrt_d - p) as f32;
        s[1] = (-sqrt_d - p) as f32;
        2
    }
}

// s.len() >= 3, even when this reduces to a lower degree.
fn cubic(c3: f32, c2: f32, c1: f32, c0: f32, s: &mut [f32]) -> usize {
    if is_zero(f64::from(c3)) {
        trace!("cubic: c3 is zero, reducing to quadric");
        return quadric(c2, c1, c0, s);
    }
    let c3 = f64::from(c3);

    // normal form: x^3 + Ax^2 + Bx + C = 0
    let a = f64::from(c2) / c3;
    let b = f64::from(c1) / c3;
    let c = f64::from(c0) / c3;

    // substitute x = y - A/3 to eliminate the quadric term: y^3 + py + q = 0
    let sq_a = sqr(a);
    let p = 1.0 / 3.0 * (-1.0 / 3.0 * sq_a + b);
    let q = 1.0 / 2.0 * (2.0 / 27.0 * a * sq_a - 1.0 / 3.0 * a * b + c);

    // Cardano
    let cb_p = p * p * p;
    let d = sqr(q) + cb_p;

    let mut y = [0.0f64; 3];
    let num = if is_zero(d) {
        if is_zero(q) {
            trace!("cubic: triple root");
            1
        } else {
            trace!("cubic: one single and one double root");
            let u = (-q).cbrt();
            y[0] = 2.0 * u;
            y[1] = -u;
            2
        }
    } else if d < 0.0 {
        // casus irreducibilis: three distinct real roots
        trace!("cubic: three real roots, D = {}", d);
        let phi = 1.0 / 3.0 * (-q / (-cb_p).sqrt()).acos();
        let t = 2.0 * (-p).sqrt();
        y[0] = t * phi.cos();
        y[1] = -t * (phi + PI / 3.0).cos();
        y[2] = -t * (phi - PI / 3.0).cos();
        3
    } else {
        trace!("cubic: one real root, D = {}", d);
        let u = (d.sqrt() + q.abs()).cbrt();
        y[0] = if q > 0.0 { -u + p / u } else { u - p / u };
        1
    };

    // resubstitute; all three slots are scratch on this path
    let sub = 1.0 / 3.0 * a;
    for (slot, &y) in s[..CUBIC_CAPACITY].iter_mut().zip(y.iter()) {
        *slot = (y - sub) as f32;
    }
    num
}

fn check_capacity(s: &[f32], needed: usize) -> Result<(), Error> {
    if s.len() < needed {
        debug!("root buffer too small: {} slots, {} needed", s.len(), needed);
        return Err(Error::BufferTooSmall {
            needed,
            actual: s.len(),
        });
    }
    Ok(())
}

/// Solves `c1*x + c0 = 0`, writing the root (if any) to `s[0]`.
///
/// Returns the number of roots written, 0 or 1. A zero `c1` is reported as
/// no root, whatever `c0` is.
pub fn solve_linear_into(c1: f32, c0: f32, s: &mut [f32]) -> Result<usize, Error> {
    check_capacity(s, LINEAR_CAPACITY)?;
    Ok(linear(c1, c0, s))
}

/// Solves `c2*x^2 + c1*x + c0 = 0` into `s`, which must hold at least 2 values.
///
/// Returns 0, 1 or 2. A double root is written to both `s[0]` and `s[1]` and
/// counted once. When there is no real root the buffer is left untouched.
pub fn solve_quadric_into(c2: f32, c1: f32, c0: f32, s: &mut [f32]) -> Result<usize, Error> {
    check_capacity(s, QUADRIC_CAPACITY)?;
    Ok(quadric(c2, c1, c0, s))
}

/// Solves `c3*x^3 + c2*x^2 + c1*x + c0 = 0` into `s`, which must hold at
/// least 3 values even if fewer roots are reported.
///
/// When `c3` is non-zero all three slots are overwritten; slots past the
/// returned count hold no meaningful value.
pub fn solve_cubic_into(
    c3: f32,
    c2: f32,
    c1: f32,
    c0: f32,
    s: &mut [f32],
) -> Result<usize, Error> {
    check_capacity(s, CUBIC_CAPACITY)?;
    Ok(cubic(c3, c2, c1, c0, s))
}

/// Solves `c1*x + c0 = 0`.
pub fn solve_linear(c1: f32, c0: f32) -> Roots {
    let mut s = [0.0f32; LINEAR_CAPACITY];
    let n = linear(c1, c0, &mut s);
    Roots::from_slots(n, &s)
}

/// Solves `c2*x^2 + c1*x + c0 = 0`. A double root is reported once.
pub fn solve_quadric(c2: f32, c1: f32, c0: f32) -> Roots {
    let mut s = [0.0f32; QUADRIC_CAPACITY];
    let n = quadric(c2, c1, c0, &mut s);
    Roots::from_slots(n, &s)
}

/// Solves `c3*x^3 + c2*x^2 + c1*x + c0 = 0`.
///
/// Repeated roots are reported once: a triple root gives `One`, a single plus
/// a double root gives `Two` with the single root first.
pub fn solve_cubic(c3: f32, c2: f32, c1: f32, c0: f32) -> Roots {
    let mut s = [0.0f32; CUBIC_CAPACITY];
    let n = cubic(c3, c2, c1, c0, &mut s);
    Roots::from_slots(n, &s)
}

/// Solves the polynomial whose coefficients are given highest degree first.
///
/// `coeffs.len()` picks the solver: 2 for linear, 3 for quadric, 4 for cubic.
pub fn solve(coeffs: &[f32]) -> Result<Roots, Error> {
    match *coeffs {
        [c1, c0] => Ok(solve_linear(c1, c0)),
        [c2, c1, c0] => Ok(solve_quadric(c2, c1, c0)),
        [c3, c2, c1, c0] => Ok(solve_cubic(c3, c2, c1, c0)),
        _ => {
            debug!("solve: cannot handle {} coefficients", coeffs.len());
            Err(Error::UnsupportedDegree { len: coeffs.len() })
        }
    }
}
