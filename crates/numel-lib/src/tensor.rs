//! N-dimensional array values with numpy-style broadcasting.
//!
//! A [`Tensor`] is homogeneous: one element kind for the whole array, with
//! integers stored as `i64` and reals as `f64` regardless of the scalar
//! layout that produced them. Mixed-kind operands promote along the same
//! ladder as scalars before the elementwise loop runs.

use std::fmt;

use ndarray::{Array1, ArrayD, ArrayViewD, Axis, Ix0, Ix1, Ix2, IxDyn, Zip};
use num_complex::Complex64;
use numel_core::ops::{complex_binary, floor_div_int, floor_rem_int, real_binary};
use numel_core::{BinOp, CmpOp, Kind, NumError, Scalar, UnOp};
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A homogeneous N-dimensional array.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Tensor {
    Boolean(ArrayD<bool>),
    Integer(ArrayD<i64>),
    Real(ArrayD<f64>),
    Complex(ArrayD<Complex64>),
}

impl Tensor {
    pub fn boolean(data: ArrayD<bool>) -> Result<Tensor, NumError> {
        guarded(Tensor::Boolean(data))
    }

    pub fn integer(data: ArrayD<i64>) -> Result<Tensor, NumError> {
        guarded(Tensor::Integer(data))
    }

    pub fn real(data: ArrayD<f64>) -> Result<Tensor, NumError> {
        guarded(Tensor::Real(data))
    }

    pub fn complex(data: ArrayD<Complex64>) -> Result<Tensor, NumError> {
        guarded(Tensor::Complex(data))
    }

    /// Kind of the elements, one of the four scalar kinds.
    pub fn elem_kind(&self) -> Kind {
        match self {
            Tensor::Boolean(_) => Kind::Boolean,
            Tensor::Integer(_) => Kind::Integer,
            Tensor::Real(_) => Kind::Real,
            Tensor::Complex(_) => Kind::Complex,
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            Tensor::Boolean(a) => a.shape(),
            Tensor::Integer(a) => a.shape(),
            Tensor::Real(a) => a.shape(),
            Tensor::Complex(a) => a.shape(),
        }
    }

    pub fn rank(&self) -> usize {
        self.shape().len()
    }

    /// Length of the leading axis.
    pub fn len(&self) -> usize {
        self.shape().first().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.shape().iter().any(|&d| d == 0)
    }

    fn priority(&self) -> u8 {
        self.elem_kind().priority().unwrap_or(0)
    }

    /// Whether any element is exactly zero. Used to reject zero divisors
    /// before an elementwise division runs.
    pub fn contains_zero(&self) -> bool {
        match self {
            Tensor::Boolean(a) => a.iter().any(|&v| !v),
            Tensor::Integer(a) => a.iter().any(|&v| v == 0),
            Tensor::Real(a) => a.iter().any(|&v| v == 0.0),
            Tensor::Complex(a) => a.iter().any(|&v| v == Complex64::new(0.0, 0.0)),
        }
    }

    /// Whether any element equals the scalar under numeric equality.
    pub fn contains(&self, needle: &Scalar) -> bool {
        let z = needle.as_complex();
        self.to_complex().iter().any(|&c| c == z)
    }

    // ------------------------------------------------------------------
    // Element-kind views
    // ------------------------------------------------------------------

    fn to_i64(&self) -> Option<ArrayD<i64>> {
        match self {
            Tensor::Boolean(a) => Some(a.mapv(i64::from)),
            Tensor::Integer(a) => Some(a.clone()),
            _ => None,
        }
    }

    fn to_f64(&self) -> Option<ArrayD<f64>> {
        match self {
            Tensor::Boolean(a) => Some(a.mapv(|v| v as u8 as f64)),
            Tensor::Integer(a) => Some(a.mapv(|v| v as f64)),
            Tensor::Real(a) => Some(a.clone()),
            Tensor::Complex(_) => None,
        }
    }

    fn to_complex(&self) -> ArrayD<Complex64> {
        match self {
            Tensor::Complex(a) => a.clone(),
            other => match other.to_f64() {
                Some(a) => a.mapv(|v| Complex64::new(v, 0.0)),
                None => ArrayD::from_elem(IxDyn(&[0]), Complex64::new(0.0, 0.0)),
            },
        }
    }

    // ------------------------------------------------------------------
    // Elementwise operators
    // ------------------------------------------------------------------

    /// Apply a binary operator elementwise, broadcasting shapes and
    /// promoting element kinds first.
    pub fn binary(&self, op: BinOp, other: &Tensor) -> Result<Tensor, NumError> {
        if op.is_division() && other.contains_zero() {
            return Err(NumError::DivisionByZero);
        }
        if op.is_bitwise() {
            return self.bitwise(op, other);
        }
        let p = self.priority().max(other.priority());
        match op {
            BinOp::Add | BinOp::Sub | BinOp::Mul => self.ring(op, other, p),
            _ => self.field(op, other, p),
        }
    }

    fn ring(&self, op: BinOp, other: &Tensor, p: u8) -> Result<Tensor, NumError> {
        if let (Tensor::Boolean(x), Tensor::Boolean(y)) = (self, other) {
            let out = zip2(x, y, |a, b| {
                let (a, b) = (a as i64, b as i64);
                let v = match op {
                    BinOp::Add => a + b,
                    BinOp::Sub => a - b,
                    _ => a * b,
                };
                v != 0
            })?;
            return Ok(Tensor::Boolean(out));
        }
        match p {
            0 | 1 => {
                let (x, y) = self.int_pair(op, other)?;
                let out = zip2(&x, &y, |a, b| match op {
                    BinOp::Add => a.wrapping_add(b),
                    BinOp::Sub => a.wrapping_sub(b),
                    _ => a.wrapping_mul(b),
                })?;
                Ok(Tensor::Integer(out))
            }
            2 => {
                let (x, y) = self.real_pair(op, other)?;
                let out = zip2(&x, &y, |a, b| real_binary(op, a, b).unwrap_or(f64::NAN))?;
                Ok(Tensor::Real(out))
            }
            _ => {
                let out = zip2(&self.to_complex(), &other.to_complex(), |a, b| {
                    complex_binary(op, a, b).unwrap_or(Complex64::new(f64::NAN, f64::NAN))
                })?;
                Ok(Tensor::Complex(out))
            }
        }
    }

    fn field(&self, op: BinOp, other: &Tensor, p: u8) -> Result<Tensor, NumError> {
        if p == 3 {
            let out = zip2(&self.to_complex(), &other.to_complex(), |a, b| {
                complex_binary(op, a, b).unwrap_or(Complex64::new(f64::NAN, f64::NAN))
            })?;
            return Ok(Tensor::Complex(out));
        }
        let (x, y) = self.real_pair(op, other)?;
        let out = zip2(&x, &y, |a, b| real_binary(op, a, b).unwrap_or(f64::NAN))?;
        Ok(Tensor::Real(out))
    }

    fn bitwise(&self, op: BinOp, other: &Tensor) -> Result<Tensor, NumError> {
        let (x, y) = self.int_pair(op, other)?;
        if matches!(op, BinOp::Shl | BinOp::Shr) && y.iter().any(|&n| n < 0) {
            return Err(self.unsupported(op, other));
        }
        let out = zip2(&x, &y, |a, b| match op {
            BinOp::BitAnd => a & b,
            BinOp::BitOr => a | b,
            BinOp::BitXor => a ^ b,
            BinOp::Shl => shift_i64(false, a, b),
            _ => shift_i64(true, a, b),
        })?;
        Ok(Tensor::Integer(out))
    }

    fn int_pair(&self, op: BinOp, other: &Tensor) -> Result<(ArrayD<i64>, ArrayD<i64>), NumError> {
        match (self.to_i64(), other.to_i64()) {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => Err(self.unsupported(op, other)),
        }
    }

    fn real_pair(&self, op: BinOp, other: &Tensor) -> Result<(ArrayD<f64>, ArrayD<f64>), NumError> {
        match (self.to_f64(), other.to_f64()) {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => Err(self.unsupported(op, other)),
        }
    }

    fn unsupported(&self, op: BinOp, other: &Tensor) -> NumError {
        NumError::UnsupportedOperands {
            op: op.symbol(),
            lhs: self.elem_kind(),
            rhs: other.elem_kind(),
        }
    }

    /// Elementwise comparison, producing a Boolean tensor. Ordering is
    /// undefined over Complex elements; equality is fine.
    pub fn compare(&self, op: CmpOp, other: &Tensor) -> Result<Tensor, NumError> {
        let p = self.priority().max(other.priority());
        let out = if p == 3 {
            if !op.is_equality() {
                return Err(NumError::UnsupportedOperands {
                    op: op.symbol(),
                    lhs: self.elem_kind(),
                    rhs: other.elem_kind(),
                });
            }
            let ne = op == CmpOp::Ne;
            zip2(&self.to_complex(), &other.to_complex(), |a, b| (a == b) != ne)?
        } else if p <= 1 {
            let (x, y) = match (self.to_i64(), other.to_i64()) {
                (Some(x), Some(y)) => (x, y),
                _ => {
                    return Err(NumError::UnsupportedOperands {
                        op: op.symbol(),
                        lhs: self.elem_kind(),
                        rhs: other.elem_kind(),
                    });
                }
            };
            zip2(&x, &y, |a, b| op.eval(&a, &b))?
        } else {
            let (x, y) = match (self.to_f64(), other.to_f64()) {
                (Some(x), Some(y)) => (x, y),
                _ => {
                    return Err(NumError::UnsupportedOperands {
                        op: op.symbol(),
                        lhs: self.elem_kind(),
                        rhs: other.elem_kind(),
                    });
                }
            };
            zip2(&x, &y, |a, b| op.eval(&a, &b))?
        };
        Ok(Tensor::Boolean(out))
    }

    /// Whether every elementwise equality holds. Non-comparable operands
    /// (shape mismatch) are simply unequal.
    pub fn all_equal(&self, other: &Tensor) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        match self.compare(CmpOp::Eq, other) {
            Ok(Tensor::Boolean(b)) => b.iter().all(|&v| v),
            _ => false,
        }
    }

    /// Apply a unary operator elementwise.
    pub fn unary(&self, op: UnOp) -> Result<Tensor, NumError> {
        match (op, self) {
            (UnOp::Pos, t) => Ok(t.clone()),
            (UnOp::Neg | UnOp::Abs, Tensor::Boolean(a)) => Ok(Tensor::Boolean(a.clone())),
            (UnOp::Neg, Tensor::Integer(a)) => Ok(Tensor::Integer(a.mapv(i64::wrapping_neg))),
            (UnOp::Neg, Tensor::Real(a)) => Ok(Tensor::Real(a.mapv(|v| -v))),
            (UnOp::Neg, Tensor::Complex(a)) => Ok(Tensor::Complex(a.mapv(|v| -v))),
            (UnOp::Abs, Tensor::Integer(a)) => Ok(Tensor::Integer(a.mapv(i64::wrapping_abs))),
            (UnOp::Abs, Tensor::Real(a)) => Ok(Tensor::Real(a.mapv(f64::abs))),
            (UnOp::Abs, Tensor::Complex(a)) => {
                Ok(Tensor::Complex(a.mapv(|v| Complex64::new(v.norm(), 0.0))))
            }
            (UnOp::Invert, Tensor::Boolean(a)) => Ok(Tensor::Integer(a.mapv(|v| !(v as i64)))),
            (UnOp::Invert, Tensor::Integer(a)) => Ok(Tensor::Integer(a.mapv(|v| !v))),
            (UnOp::Invert, t) => Err(NumError::UnsupportedUnary {
                op: op.symbol(),
                kind: t.elem_kind(),
            }),
        }
    }

    /// Floored integer division or remainder over integral elements, for
    /// in-place operators that must stay in the integer domain. `None` when
    /// the operands are not integral or the operator is not `//`/`%`.
    pub(crate) fn floored_int(
        &self,
        op: BinOp,
        other: &Tensor,
    ) -> Option<Result<Tensor, NumError>> {
        if !matches!(op, BinOp::FloorDiv | BinOp::Rem) {
            return None;
        }
        let x = self.to_i64()?;
        let y = other.to_i64()?;
        if y.iter().any(|&v| v == 0) {
            return Some(Err(NumError::DivisionByZero));
        }
        let out = zip2(&x, &y, |a, b| {
            let v = match op {
                BinOp::FloorDiv => floor_div_int(a as i128, b as i128),
                _ => floor_rem_int(a as i128, b as i128),
            };
            v as i64
        });
        Some(out.map(Tensor::Integer))
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Reverse the axis order (matrix transpose for rank 2).
    pub fn transpose(&self) -> Tensor {
        match self {
            Tensor::Boolean(a) => Tensor::Boolean(a.clone().reversed_axes()),
            Tensor::Integer(a) => Tensor::Integer(a.clone().reversed_axes()),
            Tensor::Real(a) => Tensor::Real(a.clone().reversed_axes()),
            Tensor::Complex(a) => Tensor::Complex(a.clone().reversed_axes()),
        }
    }

    /// Inner/matrix product for rank 1 and 2 operands. Boolean elements
    /// promote to Integer; a rank-1 by rank-1 product yields a scalar.
    pub fn dot(&self, other: &Tensor) -> Result<Value, NumError> {
        let p = self.priority().max(other.priority()).max(1);
        match p {
            1 => {
                let (x, y) = self.int_pair(BinOp::Mul, other)?;
                let out = dot_arrays(&x, &y)?;
                if out.ndim() == 0 {
                    Ok(Value::Scalar(Scalar::integer(scalar_of(out)?)))
                } else {
                    Ok(Value::Tensor(Tensor::Integer(out)))
                }
            }
            2 => {
                let (x, y) = self.real_pair(BinOp::Mul, other)?;
                let out = dot_arrays(&x, &y)?;
                if out.ndim() == 0 {
                    Ok(Value::Scalar(Scalar::real(scalar_of(out)?)))
                } else {
                    Ok(Value::Tensor(Tensor::Real(out)))
                }
            }
            _ => {
                let out = dot_arrays(&self.to_complex(), &other.to_complex())?;
                if out.ndim() == 0 {
                    Ok(Value::Scalar(Scalar::complex(scalar_of(out)?)))
                } else {
                    Ok(Value::Tensor(Tensor::Complex(out)))
                }
            }
        }
    }

    /// Index along the first axis, with negative indices counting from the
    /// end. Rank-1 tensors yield a scalar, higher ranks a sub-tensor.
    pub fn index(&self, i: isize) -> Option<Value> {
        let n = *self.shape().first()? as isize;
        let i = if i < 0 { i + n } else { i };
        if i < 0 || i >= n {
            return None;
        }
        let i = i as usize;
        if self.rank() == 1 {
            let ix = IxDyn(&[i]);
            let s = match self {
                Tensor::Boolean(a) => Scalar::boolean(*a.get(ix)?),
                Tensor::Integer(a) => Scalar::integer(*a.get(ix)?),
                Tensor::Real(a) => Scalar::real(*a.get(ix)?),
                Tensor::Complex(a) => Scalar::complex(*a.get(ix)?),
            };
            return Some(Value::Scalar(s));
        }
        let sub = match self {
            Tensor::Boolean(a) => Tensor::Boolean(a.index_axis(Axis(0), i).to_owned()),
            Tensor::Integer(a) => Tensor::Integer(a.index_axis(Axis(0), i).to_owned()),
            Tensor::Real(a) => Tensor::Real(a.index_axis(Axis(0), i).to_owned()),
            Tensor::Complex(a) => Tensor::Complex(a.index_axis(Axis(0), i).to_owned()),
        };
        Some(Value::Tensor(sub))
    }

    /// Iterate the leading axis: scalars for rank 1, sub-tensors above.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        (0..self.len()).filter_map(move |i| self.index(i as isize))
    }
}

fn guarded(t: Tensor) -> Result<Tensor, NumError> {
    if t.rank() == 0 {
        return Err(NumError::Cast {
            from: t.elem_kind(),
            to: Kind::Vector,
        });
    }
    Ok(t)
}

// ----------------------------------------------------------------------
// Broadcasting
// ----------------------------------------------------------------------

/// Common broadcast shape of two shapes, numpy alignment rules: axes align
/// from the right, each pair must match or one of them must be 1.
pub(crate) fn broadcast_shape(a: &[usize], b: &[usize]) -> Result<Vec<usize>, NumError> {
    let n = a.len().max(b.len());
    let mut out = Vec::with_capacity(n);
    for i in 1..=n {
        let x = if i <= a.len() { a[a.len() - i] } else { 1 };
        let y = if i <= b.len() { b[b.len() - i] } else { 1 };
        if x == y || y == 1 {
            out.push(x);
        } else if x == 1 {
            out.push(y);
        } else {
            return Err(NumError::ShapeMismatch {
                lhs: a.to_vec(),
                rhs: b.to_vec(),
            });
        }
    }
    out.reverse();
    Ok(out)
}

fn zip2<A, B, C>(
    x: &ArrayD<A>,
    y: &ArrayD<B>,
    f: impl Fn(A, B) -> C,
) -> Result<ArrayD<C>, NumError>
where
    A: Copy,
    B: Copy,
{
    let shape = broadcast_shape(x.shape(), y.shape())?;
    let mismatch = || NumError::ShapeMismatch {
        lhs: x.shape().to_vec(),
        rhs: y.shape().to_vec(),
    };
    let xb = x.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    let yb = y.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    Ok(Zip::from(&xb).and(&yb).map_collect(|&a, &b| f(a, b)))
}

fn shift_i64(right: bool, x: i64, n: i64) -> i64 {
    if n >= 64 {
        return if right && x < 0 { -1 } else { 0 };
    }
    if right {
        x.wrapping_shr(n as u32)
    } else {
        x.wrapping_shl(n as u32)
    }
}

// ----------------------------------------------------------------------
// Dot product
// ----------------------------------------------------------------------

fn dot_arrays<A: ndarray::LinalgScalar>(
    x: &ArrayD<A>,
    y: &ArrayD<A>,
) -> Result<ArrayD<A>, NumError> {
    let mismatch = || NumError::ShapeMismatch {
        lhs: x.shape().to_vec(),
        rhs: y.shape().to_vec(),
    };
    match (x.ndim(), y.ndim()) {
        (1, 1) => {
            if x.shape() != y.shape() {
                return Err(mismatch());
            }
            let a = x.view().into_dimensionality::<Ix1>().map_err(|_| mismatch())?;
            let b = y.view().into_dimensionality::<Ix1>().map_err(|_| mismatch())?;
            Ok(ArrayD::from_elem(IxDyn(&[]), a.dot(&b)))
        }
        (2, 1) => {
            if x.shape()[1] != y.shape()[0] {
                return Err(mismatch());
            }
            let a = x.view().into_dimensionality::<Ix2>().map_err(|_| mismatch())?;
            let b = y.view().into_dimensionality::<Ix1>().map_err(|_| mismatch())?;
            Ok(a.dot(&b).into_dyn())
        }
        (1, 2) => {
            if x.shape()[0] != y.shape()[0] {
                return Err(mismatch());
            }
            let a = x.view().into_dimensionality::<Ix1>().map_err(|_| mismatch())?;
            let b = y.view().into_dimensionality::<Ix2>().map_err(|_| mismatch())?;
            Ok(a.dot(&b).into_dyn())
        }
        (2, 2) => {
            if x.shape()[1] != y.shape()[0] {
                return Err(mismatch());
            }
            let a = x.view().into_dimensionality::<Ix2>().map_err(|_| mismatch())?;
            let b = y.view().into_dimensionality::<Ix2>().map_err(|_| mismatch())?;
            Ok(a.dot(&b).into_dyn())
        }
        _ => Err(NumError::UnsupportedOperands {
            op: "dot",
            lhs: Kind::Vector,
            rhs: Kind::Vector,
        }),
    }
}

fn scalar_of<A: Copy>(out: ArrayD<A>) -> Result<A, NumError> {
    out.into_dimensionality::<Ix0>()
        .map(|a| a.into_scalar())
        .map_err(|_| NumError::ShapeMismatch {
            lhs: Vec::new(),
            rhs: Vec::new(),
        })
}

// ----------------------------------------------------------------------
// Construction from host containers
// ----------------------------------------------------------------------

/// Host element types that can populate a tensor.
pub trait Element: Copy {
    fn build(data: ArrayD<Self>) -> Tensor;
}

impl Element for bool {
    fn build(data: ArrayD<bool>) -> Tensor {
        Tensor::Boolean(data)
    }
}

impl Element for i32 {
    fn build(data: ArrayD<i32>) -> Tensor {
        Tensor::Integer(data.mapv(i64::from))
    }
}

impl Element for i64 {
    fn build(data: ArrayD<i64>) -> Tensor {
        Tensor::Integer(data)
    }
}

impl Element for u32 {
    fn build(data: ArrayD<u32>) -> Tensor {
        Tensor::Integer(data.mapv(i64::from))
    }
}

impl Element for f32 {
    fn build(data: ArrayD<f32>) -> Tensor {
        Tensor::Real(data.mapv(f64::from))
    }
}

impl Element for f64 {
    fn build(data: ArrayD<f64>) -> Tensor {
        Tensor::Real(data)
    }
}

impl Element for Complex64 {
    fn build(data: ArrayD<Complex64>) -> Tensor {
        Tensor::Complex(data)
    }
}

/// Conversion into a tensor, fallible for ragged or 0-dimensional input.
pub trait IntoTensor {
    fn into_tensor(self) -> Result<Tensor, NumError>;
}

impl IntoTensor for Tensor {
    fn into_tensor(self) -> Result<Tensor, NumError> {
        Ok(self)
    }
}

impl<T: Element> IntoTensor for Vec<T> {
    fn into_tensor(self) -> Result<Tensor, NumError> {
        Ok(T::build(Array1::from_vec(self).into_dyn()))
    }
}

impl<T: Element> IntoTensor for Vec<Vec<T>> {
    fn into_tensor(self) -> Result<Tensor, NumError> {
        Ok(T::build(from_nested2(self)?))
    }
}

impl<T: Element> IntoTensor for ArrayD<T> {
    fn into_tensor(self) -> Result<Tensor, NumError> {
        guarded(T::build(self))
    }
}

/// Build a rank-2 array out of row vectors, rejecting ragged input.
fn from_nested2<T: Clone>(rows: Vec<Vec<T>>) -> Result<ArrayD<T>, NumError> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    for row in &rows {
        if row.len() != ncols {
            return Err(NumError::ShapeMismatch {
                lhs: vec![ncols],
                rhs: vec![row.len()],
            });
        }
    }
    let data: Vec<T> = rows.into_iter().flatten().collect();
    ArrayD::from_shape_vec(IxDyn(&[nrows, ncols]), data).map_err(|_| NumError::ShapeMismatch {
        lhs: vec![nrows, ncols],
        rhs: Vec::new(),
    })
}

// ----------------------------------------------------------------------
// Display
// ----------------------------------------------------------------------

fn fmt_array<T>(
    f: &mut fmt::Formatter<'_>,
    a: ArrayViewD<'_, T>,
    elem: &dyn Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    if a.ndim() == 0 {
        if let Some(v) = a.first() {
            return elem(f, v);
        }
        return Ok(());
    }
    f.write_str("[")?;
    for (i, sub) in a.outer_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt_array(f, sub, elem)?;
    }
    f.write_str("]")
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tensor::Boolean(a) => fmt_array(f, a.view(), &|f, v| write!(f, "{v}")),
            Tensor::Integer(a) => fmt_array(f, a.view(), &|f, v| write!(f, "{v}")),
            Tensor::Real(a) => fmt_array(f, a.view(), &|f, v| write!(f, "{}", Scalar::real(*v))),
            Tensor::Complex(a) => {
                fmt_array(f, a.view(), &|f, v| write!(f, "{}", Scalar::complex(*v)))
            }
        }
    }
}
