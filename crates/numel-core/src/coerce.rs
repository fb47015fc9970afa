//! Scalar coercion: promote two operands to a common kind and layout.

use num_complex::Complex64;

use crate::kind::Kind;
use crate::scalar::Scalar;

/// Promote `lhs` and `rhs` to a common kind.
///
/// The lower-priority operand widens into the higher-priority kind at that
/// kind's default layout; equal kinds then unify layouts (max width, mixed
/// signedness resolving toward signed). Scalar-to-scalar promotion is total:
/// every scalar kind widens into every higher-priority kind, so this never
/// fails. Failures (strings, arrays, foreign kinds) are decided a level up,
/// before operands reach the scalar engine.
pub fn coerce(lhs: &Scalar, rhs: &Scalar) -> (Scalar, Scalar) {
    let (a, b) = if lhs.priority() >= rhs.priority() {
        (*lhs, widen(rhs, lhs.kind()))
    } else {
        (widen(lhs, rhs.kind()), *rhs)
    };
    unify(a, b)
}

/// Promote a Boolean out of the logical domain into the default Integer.
///
/// Applied after coercion wherever an operator requires an integral domain:
/// a Boolean only survives coercion when both operands were Boolean.
pub fn promote_boolean(s: &Scalar) -> Scalar {
    match s {
        Scalar::Boolean(b) => Scalar::integer(*b as i64),
        other => *other,
    }
}

/// Widen a scalar into `kind` at the kind's default layout. Same-kind and
/// downward requests return the value unchanged.
fn widen(v: &Scalar, kind: Kind) -> Scalar {
    match (v, kind) {
        (Scalar::Boolean(b), Kind::Integer) => Scalar::integer(*b as i64),
        (Scalar::Boolean(b), Kind::Real) => Scalar::real(*b as u8 as f64),
        (Scalar::Boolean(b), Kind::Complex) => {
            Scalar::complex(Complex64::new(*b as u8 as f64, 0.0))
        }
        (Scalar::Integer(i), Kind::Real) => Scalar::real(i.value() as f64),
        (Scalar::Integer(i), Kind::Complex) => {
            Scalar::complex(Complex64::new(i.value() as f64, 0.0))
        }
        (Scalar::Real(r), Kind::Complex) => Scalar::complex(Complex64::new(r.value(), 0.0)),
        _ => *v,
    }
}

/// Unify layouts of a same-kind pair.
fn unify(a: Scalar, b: Scalar) -> (Scalar, Scalar) {
    match (&a, &b) {
        (Scalar::Integer(x), Scalar::Integer(y)) => {
            let layout = x.layout().unify(y.layout());
            (
                Scalar::integer_with(x.value(), layout),
                Scalar::integer_with(y.value(), layout),
            )
        }
        (Scalar::Real(x), Scalar::Real(y)) => {
            let width = x.width().max(y.width());
            (
                Scalar::real_with(x.value(), width),
                Scalar::real_with(y.value(), width),
            )
        }
        (Scalar::Complex(x), Scalar::Complex(y)) => {
            let width = x.width().max(y.width());
            (
                Scalar::complex_with(x.value(), width),
                Scalar::complex_with(y.value(), width),
            )
        }
        _ => (a, b),
    }
}
