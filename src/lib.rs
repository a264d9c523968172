//! Real roots of linear, quadric and cubic equations in closed form.
//!
//! ```
//! use fsolver::{solve_cubic, solve_quadric, Roots};
//!
//! assert_eq!(solve_quadric(1.0, 0.0, -4.0), Roots::Two([2.0, -2.0]));
//! assert_eq!(solve_cubic(1.0, 0.0, 0.0, 0.0), Roots::One([0.0]));
//! ```
//!
//! Complex roots are never reported. Degeneracy is decided with a fixed
//! absolute tolerance, [`math::EQN_EPS`].

#![allow(non_snake_case)]

pub mod error;
pub mod ffi;
pub mod math;
pub mod roots;
pub mod solvers;

#[cfg(test)]
mod testing;

pub use crate::error::Error;
pub use crate::roots::Roots;
pub use crate::solvers::{
    solve, solve_cubic, solve_cubic_into, solve_linear, solve_linear_into, solve_quadric,
    solve_quadric_into,
};
