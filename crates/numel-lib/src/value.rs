//! The unified dynamically-dispatched value: scalar, tensor, or string.

use std::fmt;

use ndarray::{Array2, ArrayD, IxDyn};
use num_complex::Complex64;
use numel_core::coerce::{coerce, promote_boolean};
use numel_core::ops::{self, floor_div_int, floor_rem_int};
use numel_core::{BinOp, CmpOp, IntLayout, IntWidth, Kind, NumError, Scalar, UnOp};
use serde::{Deserialize, Serialize};

use crate::tensor::{Element, IntoTensor, Tensor};

/// A dynamically-typed value of the tower.
///
/// Operator methods coerce mixed operands before dispatching: scalar kinds
/// promote along the priority ladder, a tensor operand absorbs a scalar
/// partner by broadcasting, and strings only ever combine with strings.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Value {
    Scalar(Scalar),
    Tensor(Tensor),
    Str(String),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Scalar(s) => s.kind(),
            Value::Tensor(_) => Kind::Vector,
            Value::Str(_) => Kind::Str,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_tensor(&self) -> Option<&Tensor> {
        match self {
            Value::Tensor(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Truthiness: nonzero scalar, non-empty string, all-nonzero tensor.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Scalar(s) => s.truthy(),
            Value::Tensor(t) => !t.is_empty() && !t.contains_zero(),
            Value::Str(s) => !s.is_empty(),
        }
    }

    // ------------------------------------------------------------------
    // Binary operators
    // ------------------------------------------------------------------

    /// Apply a binary operator, coercing operands first.
    pub fn binary(&self, op: BinOp, rhs: &Value) -> Result<Value, NumError> {
        match (self, rhs) {
            (Value::Str(a), Value::Str(b)) if op == BinOp::Add => {
                Ok(Value::Str(format!("{a}{b}")))
            }
            (Value::Str(_), _) | (_, Value::Str(_)) => Err(NumError::UnsupportedOperands {
                op: op.symbol(),
                lhs: self.kind(),
                rhs: rhs.kind(),
            }),
            (Value::Scalar(a), Value::Scalar(b)) => ops::binary(op, a, b).map(Value::Scalar),
            _ => {
                let (x, y) = tensor_pair(self, rhs)?;
                x.binary(op, &y).map(Value::Tensor)
            }
        }
    }

    /// Apply a comparison operator. Equality never fails: operand pairs
    /// that cannot coerce are simply unequal.
    pub fn compare(&self, op: CmpOp, rhs: &Value) -> Result<Value, NumError> {
        match self.compare_strict(op, rhs) {
            Ok(v) => Ok(v),
            Err(_) if op == CmpOp::Eq => Ok(Value::Scalar(Scalar::boolean(false))),
            Err(_) if op == CmpOp::Ne => Ok(Value::Scalar(Scalar::boolean(true))),
            Err(e) => Err(e),
        }
    }

    fn compare_strict(&self, op: CmpOp, rhs: &Value) -> Result<Value, NumError> {
        match (self, rhs) {
            (Value::Str(a), Value::Str(b)) if op.is_equality() => {
                Ok(Value::Scalar(Scalar::boolean(op.eval(a, b))))
            }
            (Value::Str(_), _) | (_, Value::Str(_)) => Err(NumError::UnsupportedOperands {
                op: op.symbol(),
                lhs: self.kind(),
                rhs: rhs.kind(),
            }),
            (Value::Scalar(a), Value::Scalar(b)) => {
                ops::compare(op, a, b).map(|v| Value::Scalar(Scalar::boolean(v)))
            }
            _ => {
                let (x, y) = tensor_pair(self, rhs)?;
                x.compare(op, &y).map(Value::Tensor)
            }
        }
    }

    /// Structural equality as a plain boolean: kinds, shapes, and payloads
    /// all agree. Never fails.
    pub fn equals(&self, rhs: &Value) -> bool {
        match (self, rhs) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Scalar(a), Value::Scalar(b)) => {
                ops::compare(CmpOp::Eq, a, b).unwrap_or(false)
            }
            (Value::Tensor(a), Value::Tensor(b)) => a.all_equal(b),
            _ => false,
        }
    }

    /// Apply a unary operator.
    pub fn unary(&self, op: UnOp) -> Result<Value, NumError> {
        match self {
            Value::Scalar(s) => ops::unary(op, s).map(Value::Scalar),
            Value::Tensor(t) => t.unary(op).map(Value::Tensor),
            Value::Str(_) => Err(NumError::UnsupportedUnary {
                op: op.symbol(),
                kind: Kind::Str,
            }),
        }
    }

    /// Augmented assignment: rebind `self` to `self op rhs`.
    ///
    /// `//=` and `%=` stay in the integer domain when both operands are
    /// integral, unlike their binary forms; `/=` always leaves it.
    pub fn apply_inplace(&mut self, op: BinOp, rhs: &Value) -> Result<(), NumError> {
        if let (Value::Scalar(a), Value::Scalar(b)) = (&*self, rhs) {
            if let Some(res) = inplace_intdiv(op, a, b) {
                *self = Value::Scalar(res?);
                return Ok(());
            }
        }
        if matches!(op, BinOp::FloorDiv | BinOp::Rem) {
            if let Ok((x, y)) = tensor_pair(self, rhs) {
                if let Some(res) = x.floored_int(op, &y) {
                    *self = Value::Tensor(res?);
                    return Ok(());
                }
            }
        }
        *self = self.binary(op, rhs)?;
        Ok(())
    }

    /// Membership test: tensors check elements, strings check substrings.
    pub fn contains(&self, needle: &Value) -> bool {
        match (self, needle) {
            (Value::Tensor(t), Value::Scalar(s)) => t.contains(s),
            (Value::Str(s), Value::Str(n)) => s.contains(n.as_str()),
            _ => false,
        }
    }

    /// Index into a tensor along its first axis; `None` elsewhere.
    pub fn index(&self, i: isize) -> Option<Value> {
        match self {
            Value::Tensor(t) => t.index(i),
            _ => None,
        }
    }

    /// Iterate a tensor's leading axis; scalars and strings yield nothing.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        let n = match self {
            Value::Tensor(t) => t.len(),
            _ => 0,
        };
        (0..n).filter_map(move |i| self.index(i as isize))
    }

    // ------------------------------------------------------------------
    // Operator sugar
    // ------------------------------------------------------------------

    pub fn add(&self, rhs: &Value) -> Result<Value, NumError> {
        self.binary(BinOp::Add, rhs)
    }

    pub fn sub(&self, rhs: &Value) -> Result<Value, NumError> {
        self.binary(BinOp::Sub, rhs)
    }

    pub fn mul(&self, rhs: &Value) -> Result<Value, NumError> {
        self.binary(BinOp::Mul, rhs)
    }

    pub fn div(&self, rhs: &Value) -> Result<Value, NumError> {
        self.binary(BinOp::Div, rhs)
    }

    pub fn floor_div(&self, rhs: &Value) -> Result<Value, NumError> {
        self.binary(BinOp::FloorDiv, rhs)
    }

    pub fn rem(&self, rhs: &Value) -> Result<Value, NumError> {
        self.binary(BinOp::Rem, rhs)
    }

    pub fn pow(&self, rhs: &Value) -> Result<Value, NumError> {
        self.binary(BinOp::Pow, rhs)
    }

    pub fn bitand(&self, rhs: &Value) -> Result<Value, NumError> {
        self.binary(BinOp::BitAnd, rhs)
    }

    pub fn bitor(&self, rhs: &Value) -> Result<Value, NumError> {
        self.binary(BinOp::BitOr, rhs)
    }

    pub fn bitxor(&self, rhs: &Value) -> Result<Value, NumError> {
        self.binary(BinOp::BitXor, rhs)
    }

    pub fn shl(&self, rhs: &Value) -> Result<Value, NumError> {
        self.binary(BinOp::Shl, rhs)
    }

    pub fn shr(&self, rhs: &Value) -> Result<Value, NumError> {
        self.binary(BinOp::Shr, rhs)
    }

    pub fn neg(&self) -> Result<Value, NumError> {
        self.unary(UnOp::Neg)
    }

    pub fn abs(&self) -> Result<Value, NumError> {
        self.unary(UnOp::Abs)
    }

    pub fn invert(&self) -> Result<Value, NumError> {
        self.unary(UnOp::Invert)
    }

    pub fn lt(&self, rhs: &Value) -> Result<Value, NumError> {
        self.compare(CmpOp::Lt, rhs)
    }

    pub fn le(&self, rhs: &Value) -> Result<Value, NumError> {
        self.compare(CmpOp::Le, rhs)
    }

    pub fn gt(&self, rhs: &Value) -> Result<Value, NumError> {
        self.compare(CmpOp::Gt, rhs)
    }

    pub fn ge(&self, rhs: &Value) -> Result<Value, NumError> {
        self.compare(CmpOp::Ge, rhs)
    }

    /// Matrix/inner product of two tensors.
    pub fn dot(&self, rhs: &Value) -> Result<Value, NumError> {
        match (self, rhs) {
            (Value::Tensor(a), Value::Tensor(b)) => a.dot(b),
            _ => Err(NumError::UnsupportedOperands {
                op: "dot",
                lhs: self.kind(),
                rhs: rhs.kind(),
            }),
        }
    }

    /// Transpose of a tensor; scalars pass through unchanged.
    pub fn transpose(&self) -> Result<Value, NumError> {
        match self {
            Value::Tensor(t) => Ok(Value::Tensor(t.transpose())),
            Value::Scalar(s) => Ok(Value::Scalar(*s)),
            Value::Str(_) => Err(NumError::UnsupportedUnary {
                op: "transpose",
                kind: Kind::Str,
            }),
        }
    }
}

/// Scalar `//`/`%` over integral operands: the result stays Integer, using
/// floored division. `None` routes the pair to the regular binary form.
fn inplace_intdiv(op: BinOp, a: &Scalar, b: &Scalar) -> Option<Result<Scalar, NumError>> {
    if !matches!(op, BinOp::FloorDiv | BinOp::Rem) {
        return None;
    }
    let (a, b) = coerce(&promote_boolean(a), &promote_boolean(b));
    let (Scalar::Integer(x), Scalar::Integer(y)) = (&a, &b) else {
        return None;
    };
    if y.value() == 0 {
        return Some(Err(NumError::DivisionByZero));
    }
    let v = match op {
        BinOp::FloorDiv => floor_div_int(x.value(), y.value()),
        _ => floor_rem_int(x.value(), y.value()),
    };
    Some(Ok(Scalar::integer_with(v, x.layout())))
}

/// View both operands as tensors, splatting a scalar partner into a
/// 0-dimensional array that broadcasts against the other side. Complex
/// scalars do not splat: the tensor element kinds stop at Complex128 and a
/// silent width collapse would hide precision loss.
fn tensor_pair(lhs: &Value, rhs: &Value) -> Result<(Tensor, Tensor), NumError> {
    match (lhs, rhs) {
        (Value::Tensor(a), Value::Tensor(b)) => Ok((a.clone(), b.clone())),
        (Value::Tensor(a), Value::Scalar(b)) => Ok((a.clone(), splat(b)?)),
        (Value::Scalar(a), Value::Tensor(b)) => Ok((splat(a)?, b.clone())),
        _ => Err(NumError::Cast {
            from: lhs.kind(),
            to: Kind::Vector,
        }),
    }
}

fn splat(s: &Scalar) -> Result<Tensor, NumError> {
    let zero_dim = IxDyn(&[]);
    match s {
        Scalar::Boolean(b) => Ok(Tensor::Boolean(ArrayD::from_elem(zero_dim, *b))),
        Scalar::Integer(i) => Ok(Tensor::Integer(ArrayD::from_elem(zero_dim, i.value() as i64))),
        Scalar::Real(r) => Ok(Tensor::Real(ArrayD::from_elem(zero_dim, r.value()))),
        Scalar::Complex(_) => Err(NumError::Cast {
            from: Kind::Complex,
            to: Kind::Vector,
        }),
    }
}

// ----------------------------------------------------------------------
// Host-type admission
// ----------------------------------------------------------------------

impl From<Scalar> for Value {
    fn from(v: Scalar) -> Value {
        Value::Scalar(v)
    }
}

impl From<Tensor> for Value {
    fn from(v: Tensor) -> Value {
        Value::Tensor(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Scalar(Scalar::boolean(v))
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Value {
        Value::Scalar(Scalar::integer_with(v as i128, IntLayout::new(IntWidth::W8, true)))
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Value {
        Value::Scalar(Scalar::integer_with(v as i128, IntLayout::new(IntWidth::W16, true)))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value::Scalar(Scalar::integer_with(v as i128, IntLayout::new(IntWidth::W32, true)))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Scalar(Scalar::integer(v))
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Value {
        Value::Scalar(Scalar::integer_with(v as i128, IntLayout::new(IntWidth::W8, false)))
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Value {
        Value::Scalar(Scalar::integer_with(v as i128, IntLayout::new(IntWidth::W16, false)))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Value {
        Value::Scalar(Scalar::integer_with(v as i128, IntLayout::new(IntWidth::W32, false)))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Value {
        Value::Scalar(Scalar::integer_with(v as i128, IntLayout::new(IntWidth::W64, false)))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Value {
        Value::Scalar(Scalar::real_with(v as f64, numel_core::FloatWidth::W32))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Scalar(Scalar::real(v))
    }
}

impl From<Complex64> for Value {
    fn from(v: Complex64) -> Value {
        Value::Scalar(Scalar::complex(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Str(v)
    }
}

impl<T: Element> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Value {
        Value::Tensor(T::build(ndarray::Array1::from_vec(v).into_dyn()))
    }
}

/// Nested sequence admission: fixed-length rows cannot be ragged, so the
/// conversion stays total.
impl<T: Element, const N: usize> From<Vec<[T; N]>> for Value {
    fn from(rows: Vec<[T; N]>) -> Value {
        let data = Array2::from_shape_fn((rows.len(), N), |(i, j)| rows[i][j]);
        Value::Tensor(T::build(data.into_dyn()))
    }
}

/// Row vectors can be ragged, so their admission is fallible.
impl<T: Element> TryFrom<Vec<Vec<T>>> for Value {
    type Error = NumError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Value, NumError> {
        rows.into_tensor().map(Value::Tensor)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{s}"),
            Value::Tensor(t) => write!(f, "{t}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}
