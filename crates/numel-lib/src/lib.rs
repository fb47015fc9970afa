//! Numel: a dynamically dispatched numeric tower.
//!
//! Values are Booleans, fixed-width Integers, Reals, Complexes, N-dimensional
//! arrays, or strings, behind one [`Value`] union. Mixed-kind operands
//! coerce along a priority ladder before any operator runs, so host code
//! never matches on kinds to do arithmetic.
//!
//! # Example
//!
//! ```
//! use numel_lib::{real, vec};
//!
//! # fn main() -> Result<(), numel_lib::NumError> {
//! let xs = vec(vec![1.0, 2.0, 3.0])?;
//! let doubled = xs.mul(&real(2)?)?;
//! assert_eq!(doubled.to_string(), "[2.0, 4.0, 6.0]");
//! # Ok(())
//! # }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod construct;
pub mod tensor;
pub mod value;


pub use construct::{
    autotype, boolean, complex, complex64, complex128, imag, imag64, imag128, int8, int16, int32,
    int64, integer, real, real32, real64, string, uint8, uint16, uint32, uint64, vec,
};
pub use numel_core::{
    BinOp, CmpOp, ComplexWidth, FloatWidth, IntLayout, IntWidth, Kind, NumError, Scalar, UnOp,
};
pub use tensor::{IntoTensor, Tensor};
pub use value::Value;
