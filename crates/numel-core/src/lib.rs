#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Scalar engine of the numeric tower.
//!
//! Three layers:
//!
//! - [`layout`] — width/signedness descriptors and the wrap/normalize rules
//!   that give scalars fixed-width semantics over wide intermediates.
//! - [`scalar`] — the [`Scalar`] union (Boolean, Integer, Real, Complex)
//!   with casts and literal parsing.
//! - [`coerce`] + [`ops`] — the promotion ladder and operator dispatch that
//!   evaluate mixed-kind arithmetic, comparison, and bitwise operations.
//!
//! Array values and the unified facade live in `numel-lib`, which builds on
//! this crate.

pub mod coerce;
pub mod error;
pub mod kind;
pub mod layout;
pub mod ops;
pub mod scalar;

#[cfg(test)]
mod coerce_tests;
#[cfg(test)]
mod ops_tests;
#[cfg(test)]
mod scalar_tests;

pub use coerce::{coerce, promote_boolean};
pub use error::NumError;
pub use kind::Kind;
pub use layout::{ComplexWidth, FloatWidth, IntLayout, IntWidth};
pub use ops::{BinOp, CmpOp, UnOp, binary, compare, unary};
pub use scalar::{ComplexScalar, IntScalar, RealScalar, Scalar};
