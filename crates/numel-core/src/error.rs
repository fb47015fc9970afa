//! Errors surfaced by constructors, casts, and operator dispatch.

use crate::kind::Kind;

/// Error taxonomy of the numeric tower.
///
/// Every variant propagates synchronously to the caller; nothing is retried,
/// logged, or swallowed internally. Equality comparison is the one boundary
/// that downgrades a would-be error into a boolean result (see
/// `Value::compare` in the facade crate).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumError {
    /// Binary operator invoked on a kind combination with no defined
    /// semantics (e.g. bitwise on Real).
    #[error("unsupported operand kind(s) for {op}: `{lhs}` and `{rhs}`")]
    UnsupportedOperands {
        op: &'static str,
        lhs: Kind,
        rhs: Kind,
    },

    /// Unary operator invoked on a kind with no defined semantics.
    #[error("bad operand kind for unary {op}: `{kind}`")]
    UnsupportedUnary { op: &'static str, kind: Kind },

    /// Narrowing construction: Complex into Integer/Real, or Vector into a
    /// scalar kind.
    #[error("cannot cast `{from}` to `{to}`")]
    Cast { from: Kind, to: Kind },

    /// Text numeral could not be parsed into the target kind.
    #[error("cannot parse {literal:?} as {target}")]
    Parse { literal: String, target: Kind },

    /// Divisor payload is exactly zero, checked before the numeric op runs.
    #[error("division by zero")]
    DivisionByZero,

    /// Array operands have incompatible, non-broadcastable shapes.
    #[error("shapes {lhs:?} and {rhs:?} cannot be broadcast together")]
    ShapeMismatch { lhs: Vec<usize>, rhs: Vec<usize> },
}
