//! Operator dispatch over coerced scalar pairs.
//!
//! Result-kind rules:
//! - `+ - *` keep the common (promoted) kind; a Boolean result only occurs
//!   when both operands were Boolean.
//! - `/ // % **` execute in the real domain (Complex if either side is
//!   Complex) and never return an integral kind.
//! - Bitwise operators require an integral common kind and always return
//!   Integer, with Booleans promoted first.

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::coerce::{coerce, promote_boolean};
use crate::error::NumError;
use crate::kind::Kind;
use crate::scalar::Scalar;

/// Binary operator families.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Rem,
    Pow,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
}

impl BinOp {
    /// Operator symbol for error messages.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::FloorDiv => "//",
            BinOp::Rem => "%",
            BinOp::Pow => "**",
            BinOp::BitAnd => "&",
            BinOp::BitOr => "|",
            BinOp::BitXor => "^",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
        }
    }

    pub fn is_bitwise(self) -> bool {
        matches!(
            self,
            BinOp::BitAnd | BinOp::BitOr | BinOp::BitXor | BinOp::Shl | BinOp::Shr
        )
    }

    /// Division-family operators that must reject a zero divisor.
    pub fn is_division(self) -> bool {
        matches!(self, BinOp::Div | BinOp::FloorDiv | BinOp::Rem)
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Comparison operators.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl CmpOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
            CmpOp::Lt => "<",
            CmpOp::Gt => ">",
            CmpOp::Le => "<=",
            CmpOp::Ge => ">=",
        }
    }

    /// `==`/`!=`, the two operators that never propagate coercion failures.
    pub fn is_equality(self) -> bool {
        matches!(self, CmpOp::Eq | CmpOp::Ne)
    }

    /// Evaluate against any partially ordered payload. NaN compares false
    /// under every operator except `!=`.
    pub fn eval<T: PartialOrd>(self, x: &T, y: &T) -> bool {
        match self {
            CmpOp::Eq => x == y,
            CmpOp::Ne => x != y,
            CmpOp::Lt => x < y,
            CmpOp::Gt => x > y,
            CmpOp::Le => x <= y,
            CmpOp::Ge => x >= y,
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum UnOp {
    Neg,
    Pos,
    Abs,
    Invert,
}

impl UnOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Neg => "-",
            UnOp::Pos => "+",
            UnOp::Abs => "abs",
            UnOp::Invert => "~",
        }
    }
}

impl fmt::Display for UnOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ----------------------------------------------------------------------
// Binary dispatch
// ----------------------------------------------------------------------

/// Apply a binary operator to two scalars, coercing first.
pub fn binary(op: BinOp, lhs: &Scalar, rhs: &Scalar) -> Result<Scalar, NumError> {
    let (a, b) = coerce(lhs, rhs);
    if op.is_division() && b.is_zero() {
        return Err(NumError::DivisionByZero);
    }
    match op {
        BinOp::Add | BinOp::Sub | BinOp::Mul => ring_op(op, &a, &b),
        BinOp::Div | BinOp::FloorDiv | BinOp::Rem | BinOp::Pow => field_op(op, &a, &b),
        BinOp::BitAnd | BinOp::BitOr | BinOp::BitXor | BinOp::Shl | BinOp::Shr => {
            bitwise_op(op, &a, &b)
        }
    }
}

/// Apply a comparison operator, coercing first. Ordering on Complex is
/// undefined; equality on Complex is fine.
pub fn compare(op: CmpOp, lhs: &Scalar, rhs: &Scalar) -> Result<bool, NumError> {
    let (a, b) = coerce(lhs, rhs);
    match (&a, &b) {
        (Scalar::Boolean(x), Scalar::Boolean(y)) => Ok(op.eval(x, y)),
        (Scalar::Integer(x), Scalar::Integer(y)) => Ok(op.eval(&x.value(), &y.value())),
        (Scalar::Real(x), Scalar::Real(y)) => Ok(op.eval(&x.value(), &y.value())),
        (Scalar::Complex(x), Scalar::Complex(y)) => {
            if op.is_equality() {
                Ok(match op {
                    CmpOp::Eq => x.value() == y.value(),
                    _ => x.value() != y.value(),
                })
            } else {
                Err(NumError::UnsupportedOperands {
                    op: op.symbol(),
                    lhs: Kind::Complex,
                    rhs: Kind::Complex,
                })
            }
        }
        _ => Err(NumError::UnsupportedOperands {
            op: op.symbol(),
            lhs: a.kind(),
            rhs: b.kind(),
        }),
    }
}

/// Apply a unary operator. `neg`, `pos`, and `abs` preserve the operand's
/// kind; `invert` requires an integral kind and promotes Boolean to Integer.
pub fn unary(op: UnOp, v: &Scalar) -> Result<Scalar, NumError> {
    match op {
        UnOp::Pos => Ok(*v),
        UnOp::Neg => Ok(match v {
            Scalar::Boolean(b) => Scalar::Boolean(*b),
            Scalar::Integer(i) => Scalar::integer_with(i.value().wrapping_neg(), i.layout()),
            Scalar::Real(r) => Scalar::real_with(-r.value(), r.width()),
            Scalar::Complex(c) => Scalar::complex_with(-c.value(), c.width()),
        }),
        UnOp::Abs => Ok(match v {
            Scalar::Boolean(b) => Scalar::Boolean(*b),
            Scalar::Integer(i) => Scalar::integer_with(i.value().wrapping_abs(), i.layout()),
            Scalar::Real(r) => Scalar::real_with(r.value().abs(), r.width()),
            Scalar::Complex(c) => {
                Scalar::complex_with(Complex64::new(c.value().norm(), 0.0), c.width())
            }
        }),
        UnOp::Invert => match v {
            Scalar::Boolean(b) => Ok(Scalar::integer(!(*b as i64))),
            Scalar::Integer(i) => Ok(Scalar::integer_with(!i.value(), i.layout())),
            other => Err(NumError::UnsupportedUnary {
                op: op.symbol(),
                kind: other.kind(),
            }),
        },
    }
}

// ----------------------------------------------------------------------
// Domain evaluation
// ----------------------------------------------------------------------

/// Arithmetic evaluation in the real domain. Bitwise operators have no
/// real-domain semantics and yield `None`.
pub fn real_binary(op: BinOp, x: f64, y: f64) -> Option<f64> {
    match op {
        BinOp::Add => Some(x + y),
        BinOp::Sub => Some(x - y),
        BinOp::Mul => Some(x * y),
        BinOp::Div => Some(x / y),
        BinOp::FloorDiv => Some((x / y).floor()),
        BinOp::Rem => Some(floored_fmod(x, y)),
        BinOp::Pow => Some(x.powf(y)),
        _ => None,
    }
}

/// Arithmetic evaluation in the complex domain. The floor-division family
/// floors both components of the true quotient.
pub fn complex_binary(op: BinOp, x: Complex64, y: Complex64) -> Option<Complex64> {
    match op {
        BinOp::Add => Some(x + y),
        BinOp::Sub => Some(x - y),
        BinOp::Mul => Some(x * y),
        BinOp::Div => Some(x / y),
        BinOp::FloorDiv => Some(complex_floor(x / y)),
        BinOp::Rem => Some(x - y * complex_floor(x / y)),
        BinOp::Pow => Some(x.powc(y)),
        _ => None,
    }
}

/// Floored integer division (quotient rounds toward negative infinity).
pub fn floor_div_int(x: i128, y: i128) -> i128 {
    let q = x.wrapping_div(y);
    if x.wrapping_rem(y) != 0 && (x < 0) != (y < 0) {
        q - 1
    } else {
        q
    }
}

/// Floored integer remainder (sign follows the divisor).
pub fn floor_rem_int(x: i128, y: i128) -> i128 {
    let r = x.wrapping_rem(y);
    if r != 0 && (r < 0) != (y < 0) { r + y } else { r }
}

/// Floored floating remainder (sign follows the divisor).
fn floored_fmod(x: f64, y: f64) -> f64 {
    let r = x % y;
    if r != 0.0 && (r < 0.0) != (y < 0.0) {
        r + y
    } else {
        r
    }
}

fn complex_floor(v: Complex64) -> Complex64 {
    Complex64::new(v.re.floor(), v.im.floor())
}

fn unsupported(op: &'static str, lhs: &Scalar, rhs: &Scalar) -> NumError {
    NumError::UnsupportedOperands {
        op,
        lhs: lhs.kind(),
        rhs: rhs.kind(),
    }
}

// ----------------------------------------------------------------------
// Kind-preserving arithmetic (+ - *)
// ----------------------------------------------------------------------

fn ring_op(op: BinOp, a: &Scalar, b: &Scalar) -> Result<Scalar, NumError> {
    match (a, b) {
        (Scalar::Boolean(x), Scalar::Boolean(y)) => {
            let bits = int_ring(op, *x as i128, *y as i128);
            Ok(Scalar::Boolean(bits != 0))
        }
        (Scalar::Integer(x), Scalar::Integer(y)) => Ok(Scalar::integer_with(
            int_ring(op, x.value(), y.value()),
            x.layout(),
        )),
        (Scalar::Real(x), Scalar::Real(y)) => {
            let v = real_binary(op, x.value(), y.value()).unwrap_or(f64::NAN);
            Ok(Scalar::real_with(v, x.width()))
        }
        (Scalar::Complex(x), Scalar::Complex(y)) => {
            let v = complex_binary(op, x.value(), y.value())
                .unwrap_or(Complex64::new(f64::NAN, f64::NAN));
            Ok(Scalar::complex_with(v, x.width()))
        }
        _ => Err(unsupported(op.symbol(), a, b)),
    }
}

fn int_ring(op: BinOp, x: i128, y: i128) -> i128 {
    match op {
        BinOp::Add => x.wrapping_add(y),
        BinOp::Sub => x.wrapping_sub(y),
        BinOp::Mul => x.wrapping_mul(y),
        _ => 0,
    }
}

// ----------------------------------------------------------------------
// Real/complex-domain arithmetic (/ // % **)
// ----------------------------------------------------------------------

fn field_op(op: BinOp, a: &Scalar, b: &Scalar) -> Result<Scalar, NumError> {
    if let (Scalar::Complex(x), Scalar::Complex(y)) = (a, b) {
        let v = complex_binary(op, x.value(), y.value())
            .ok_or_else(|| unsupported(op.symbol(), a, b))?;
        return Ok(Scalar::complex_with(v, x.width()));
    }
    let v = real_binary(op, a.as_f64(), b.as_f64())
        .ok_or_else(|| unsupported(op.symbol(), a, b))?;
    Ok(match (a, b) {
        (Scalar::Real(x), Scalar::Real(_)) => Scalar::real_with(v, x.width()),
        _ => Scalar::real(v),
    })
}

// ----------------------------------------------------------------------
// Bitwise (& | ^ << >>)
// ----------------------------------------------------------------------

fn bitwise_op(op: BinOp, a: &Scalar, b: &Scalar) -> Result<Scalar, NumError> {
    let (a, b) = (promote_boolean(a), promote_boolean(b));
    let (Scalar::Integer(x), Scalar::Integer(y)) = (&a, &b) else {
        return Err(unsupported(op.symbol(), &a, &b));
    };
    let bits = match op {
        BinOp::BitAnd => x.value() & y.value(),
        BinOp::BitOr => x.value() | y.value(),
        BinOp::BitXor => x.value() ^ y.value(),
        BinOp::Shl | BinOp::Shr => {
            let n = y.value();
            if n < 0 {
                return Err(unsupported(op.symbol(), &a, &b));
            }
            shift(op, x.value(), n)
        }
        _ => return Err(unsupported(op.symbol(), &a, &b)),
    };
    Ok(Scalar::integer_with(bits, x.layout().unify(y.layout())))
}

fn shift(op: BinOp, x: i128, n: i128) -> i128 {
    if n >= 128 {
        return match op {
            BinOp::Shr if x < 0 => -1,
            _ => 0,
        };
    }
    match op {
        BinOp::Shl => x.wrapping_shl(n as u32),
        _ => x.wrapping_shr(n as u32),
    }
}
