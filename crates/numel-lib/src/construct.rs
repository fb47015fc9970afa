//! Free constructor functions, one per target kind and layout.
//!
//! Each constructor accepts anything admissible as a [`Value`] and casts it
//! into the target kind: host numerics convert, strings parse, and tensors
//! are rejected (an array never narrows into a scalar kind). The fixed-width
//! variants (`int8`..`uint64`, `real32`, `complex64`, ...) pin the layout;
//! the bare forms use the default layouts.

use num_complex::Complex64;
use numel_core::{ComplexWidth, FloatWidth, IntLayout, IntWidth, Kind, NumError, Scalar};

use crate::tensor::IntoTensor;
use crate::value::Value;

/// Admit a host value as-is, picking the kind from the host type.
pub fn autotype(v: impl Into<Value>) -> Value {
    v.into()
}

/// Boolean from truthiness; strings accept `true`/`yes`/`on` style tokens
/// or numerals.
pub fn boolean(v: impl Into<Value>) -> Result<Value, NumError> {
    match v.into() {
        Value::Str(s) => Scalar::parse_boolean(&s).map(Value::Scalar),
        Value::Scalar(s) => Ok(Value::Scalar(s.cast_boolean())),
        Value::Tensor(_) => Err(NumError::Cast {
            from: Kind::Vector,
            to: Kind::Boolean,
        }),
    }
}

fn cast_int(v: Value, layout: IntLayout) -> Result<Value, NumError> {
    match v {
        Value::Str(s) => Scalar::parse_integer(&s, layout).map(Value::Scalar),
        Value::Scalar(s) => s.cast_integer(layout).map(Value::Scalar),
        Value::Tensor(_) => Err(NumError::Cast {
            from: Kind::Vector,
            to: Kind::Integer,
        }),
    }
}

/// Integer at the default 64-bit signed layout.
pub fn integer(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_int(v.into(), IntLayout::default())
}

pub fn int8(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_int(v.into(), IntLayout::new(IntWidth::W8, true))
}

pub fn int16(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_int(v.into(), IntLayout::new(IntWidth::W16, true))
}

pub fn int32(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_int(v.into(), IntLayout::new(IntWidth::W32, true))
}

pub fn int64(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_int(v.into(), IntLayout::new(IntWidth::W64, true))
}

pub fn uint8(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_int(v.into(), IntLayout::new(IntWidth::W8, false))
}

pub fn uint16(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_int(v.into(), IntLayout::new(IntWidth::W16, false))
}

pub fn uint32(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_int(v.into(), IntLayout::new(IntWidth::W32, false))
}

pub fn uint64(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_int(v.into(), IntLayout::new(IntWidth::W64, false))
}

fn cast_real(v: Value, width: FloatWidth) -> Result<Value, NumError> {
    match v {
        Value::Str(s) => Scalar::parse_real(&s, width).map(Value::Scalar),
        Value::Scalar(s) => s.cast_real(width).map(Value::Scalar),
        Value::Tensor(_) => Err(NumError::Cast {
            from: Kind::Vector,
            to: Kind::Real,
        }),
    }
}

/// Real at the default 64-bit width.
pub fn real(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_real(v.into(), FloatWidth::W64)
}

pub fn real32(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_real(v.into(), FloatWidth::W32)
}

pub fn real64(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_real(v.into(), FloatWidth::W64)
}

fn cast_complex(v: Value, width: ComplexWidth) -> Result<Value, NumError> {
    match v {
        Value::Str(s) => Scalar::parse_complex(&s, width).map(Value::Scalar),
        Value::Scalar(s) => Ok(Value::Scalar(s.cast_complex(width))),
        Value::Tensor(_) => Err(NumError::Cast {
            from: Kind::Vector,
            to: Kind::Complex,
        }),
    }
}

/// Complex at the default 128-bit width.
pub fn complex(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_complex(v.into(), ComplexWidth::W128)
}

pub fn complex64(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_complex(v.into(), ComplexWidth::W64)
}

pub fn complex128(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_complex(v.into(), ComplexWidth::W128)
}

fn cast_imag(v: Value, width: ComplexWidth) -> Result<Value, NumError> {
    let m = match cast_real(v, width.component())? {
        Value::Scalar(Scalar::Real(r)) => r.value(),
        _ => 0.0,
    };
    Ok(Value::Scalar(Scalar::complex_with(
        Complex64::new(0.0, m),
        width,
    )))
}

/// Pure imaginary: `imag(2)` is `2i`.
pub fn imag(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_imag(v.into(), ComplexWidth::W128)
}

pub fn imag64(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_imag(v.into(), ComplexWidth::W64)
}

pub fn imag128(v: impl Into<Value>) -> Result<Value, NumError> {
    cast_imag(v.into(), ComplexWidth::W128)
}

/// N-dimensional array from host containers: flat vectors become rank 1,
/// nested vectors rank 2 (rejecting ragged rows), `ArrayD` passes through.
pub fn vec(v: impl IntoTensor) -> Result<Value, NumError> {
    v.into_tensor().map(Value::Tensor)
}

/// String from the display form of any value.
pub fn string(v: impl Into<Value>) -> Value {
    Value::Str(v.into().to_string())
}
