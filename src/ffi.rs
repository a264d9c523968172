//! C ABI entry points, for hosts that load the crate as a shared library.
//!
//! Each function writes into the buffer `s` and returns the number of roots
//! found. `s` must point to at least 1, 2 or 3 writable floats for the
//! linear, quadric and cubic solvers respectively. A null `s` returns -1.

use crate::error::Error;
use crate::solvers::{solve_cubic_into, solve_linear_into, solve_quadric_into};
use crate::solvers::{CUBIC_CAPACITY, LINEAR_CAPACITY, QUADRIC_CAPACITY};
use core::slice;
use log::debug;
use std::os::raw::c_int;

const FFI_ERROR: c_int = -1;

fn to_c_result(result: Result<usize, Error>) -> c_int {
    match result {
        Ok(n) => n as c_int,
        Err(e) => {
            debug!("ffi: {}", e);
            FFI_ERROR
        }
    }
}

/// # Safety
///
/// `s` must be null or valid for writes of 1 `f32`.
#[no_mangle]
pub unsafe extern "C" fn solveLinear(c1: f32, c0: f32, s: *mut f32) -> c_int {
    if s.is_null() {
        return FFI_ERROR;
    }
    let s = slice::from_raw_parts_mut(s, LINEAR_CAPACITY);
    to_c_result(solve_linear_into(c1, c0, s))
}

/// # Safety
///
/// `s` must be null or valid for writes of 2 `f32`s.
#[no_mangle]
pub unsafe extern "C" fn solveQuadric(c2: f32, c1: f32, c0: f32, s: *mut f32) -> c_int {
    if s.is_null() {
        return FFI_ERROR;
    }
    let s = slice::from_raw_parts_mut(s, QUADRIC_CAPACITY);
    to_c_result(solve_quadric_into(c2, c1, c0, s))
}

/// # Safety
///
/// `s` must be null or valid for writes of 3 `f32`s, even if the equation
/// turns out to be of lower degree.
#[no_mangle]
pub unsafe extern "C" fn solveCubic(c3: f32, c2: f32, c1: f32, c0: f32, s: *mut f32) -> c_int {
    if s.is_null() {
        return FFI_ERROR;
    }
    let s = slice::from_raw_parts_mut(s, CUBIC_CAPACITY);
    to_c_result(solve_cubic_into(c3, c2, c1, c0, s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use core::ptr;

    #[test]
    fn ffi_solvers() {
        init_test();
        unsafe {
            let mut s = [0.0f32; 1];
            assert_eq!(solveLinear(2.0, -4.0, s.as_mut_ptr()), 1);
            assert_eq!(s, [2.0]);
            assert_eq!(solveLinear(0.0, -4.0, s.as_mut_ptr()), 0);

            let mut s = [0.0f32; 2];
            assert_eq!(solveQuadric(1.0, 0.0, -4.0, s.as_mut_ptr()), 2);
            assert_eq!(s, [2.0, -2.0]);
            assert_eq!(solveQuadric(1.0, -2.0, 1.0, s.as_mut_ptr()), 1);
            assert_eq!(s, [1.0, 1.0]);

            let mut s = [0.0f32; 3];
            assert_eq!(solveCubic(1.0, 0.0, 0.0, 0.0, s.as_mut_ptr()), 1);
            assert_eq!(s[0], 0.0);
            assert_eq!(solveCubic(1.0, -6.0, 11.0, -6.0, s.as_mut_ptr()), 3);
            assert_residuals(
                &[1.0, -6.0, 11.0, -6.0],
                &crate::Roots::Three(s),
                1.0E-4,
            );
        }
    }

    #[test]
    fn ffi_null_buffer() {
        unsafe {
            assert_eq!(solveLinear(1.0, 1.0, ptr::null_mut()), -1);
            assert_eq!(solveQuadric(1.0, 1.0, 1.0, ptr::null_mut()), -1);
            assert_eq!(solveCubic(1.0, 1.0, 1.0, 1.0, ptr::null_mut()), -1);
        }
    }
}
