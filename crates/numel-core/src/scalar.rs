//! Boxed 0-dimensional scalar values: Boolean, Integer, Real, Complex.

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::NumError;
use crate::kind::Kind;
use crate::layout::{ComplexWidth, FloatWidth, IntLayout};

/// Fixed-width integer payload.
///
/// The value lives in a wide intermediate and is re-wrapped into the layout
/// on construction, so every `IntScalar` is already in canonical form for
/// its width and signedness.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct IntScalar {
    bits: i128,
    layout: IntLayout,
}

impl IntScalar {
    pub fn new(bits: i128, layout: IntLayout) -> Self {
        IntScalar {
            bits: layout.wrap(bits),
            layout,
        }
    }

    pub fn value(&self) -> i128 {
        self.bits
    }

    pub fn layout(&self) -> IntLayout {
        self.layout
    }
}

/// Fixed-width real payload.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct RealScalar {
    value: f64,
    width: FloatWidth,
}

impl RealScalar {
    pub fn new(value: f64, width: FloatWidth) -> Self {
        RealScalar {
            value: width.normalize(value),
            width,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn width(&self) -> FloatWidth {
        self.width
    }
}

/// Fixed-width complex payload.
///
/// The `re`/`im` views are derived from the payload with the matching
/// component width; they are computed, never stored separately.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ComplexScalar {
    value: Complex64,
    width: ComplexWidth,
}

impl ComplexScalar {
    pub fn new(value: Complex64, width: ComplexWidth) -> Self {
        ComplexScalar {
            value: width.normalize(value),
            width,
        }
    }

    pub fn value(&self) -> Complex64 {
        self.value
    }

    pub fn width(&self) -> ComplexWidth {
        self.width
    }

    /// Real component as a Real scalar of the component width.
    pub fn re(&self) -> RealScalar {
        RealScalar::new(self.value.re, self.width.component())
    }

    /// Imaginary component as a Real scalar of the component width.
    pub fn im(&self) -> RealScalar {
        RealScalar::new(self.value.im, self.width.component())
    }
}

/// A boxed 0-dimensional numeric value.
///
/// One variant per kind, with width/signedness carried as a layout field
/// rather than a type per width. Instances are immutable values; every
/// operation produces a fresh scalar.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Scalar {
    Boolean(bool),
    Integer(IntScalar),
    Real(RealScalar),
    Complex(ComplexScalar),
}

impl Scalar {
    pub fn boolean(v: bool) -> Self {
        Scalar::Boolean(v)
    }

    /// Integer with the default layout (64-bit signed).
    pub fn integer(v: i64) -> Self {
        Scalar::integer_with(v as i128, IntLayout::default())
    }

    pub fn integer_with(bits: i128, layout: IntLayout) -> Self {
        Scalar::Integer(IntScalar::new(bits, layout))
    }

    /// Real with the default width (64 bits).
    pub fn real(v: f64) -> Self {
        Scalar::real_with(v, FloatWidth::W64)
    }

    pub fn real_with(v: f64, width: FloatWidth) -> Self {
        Scalar::Real(RealScalar::new(v, width))
    }

    /// Complex with the default width (128 bits).
    pub fn complex(v: Complex64) -> Self {
        Scalar::complex_with(v, ComplexWidth::W128)
    }

    pub fn complex_with(v: Complex64, width: ComplexWidth) -> Self {
        Scalar::Complex(ComplexScalar::new(v, width))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Scalar::Boolean(_) => Kind::Boolean,
            Scalar::Integer(_) => Kind::Integer,
            Scalar::Real(_) => Kind::Real,
            Scalar::Complex(_) => Kind::Complex,
        }
    }

    /// Promotion priority: Boolean < Integer < Real < Complex.
    pub fn priority(&self) -> u8 {
        match self {
            Scalar::Boolean(_) => 0,
            Scalar::Integer(_) => 1,
            Scalar::Real(_) => 2,
            Scalar::Complex(_) => 3,
        }
    }

    /// Whether the payload is exactly zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Scalar::Boolean(b) => !*b,
            Scalar::Integer(i) => i.value() == 0,
            Scalar::Real(r) => r.value() == 0.0,
            Scalar::Complex(c) => c.value() == Complex64::new(0.0, 0.0),
        }
    }

    /// Truthiness: nonzero payload.
    pub fn truthy(&self) -> bool {
        !self.is_zero()
    }

    /// Real-domain view of the payload; the Complex arm yields the real
    /// component and is only meaningful for operands below Complex priority.
    pub fn as_f64(&self) -> f64 {
        match self {
            Scalar::Boolean(b) => *b as u8 as f64,
            Scalar::Integer(i) => i.value() as f64,
            Scalar::Real(r) => r.value(),
            Scalar::Complex(c) => c.value().re,
        }
    }

    /// Complex-domain view of the payload.
    pub fn as_complex(&self) -> Complex64 {
        match self {
            Scalar::Complex(c) => c.value(),
            other => Complex64::new(other.as_f64(), 0.0),
        }
    }

    // ------------------------------------------------------------------
    // Casting
    // ------------------------------------------------------------------

    /// Truthiness cast; accepts every scalar kind.
    pub fn cast_boolean(&self) -> Scalar {
        Scalar::Boolean(self.truthy())
    }

    /// Cast into an integer of the given layout, truncating reals toward
    /// zero. Complex input is a narrowing cast and fails.
    pub fn cast_integer(&self, layout: IntLayout) -> Result<Scalar, NumError> {
        match self {
            Scalar::Boolean(b) => Ok(Scalar::integer_with(*b as i128, layout)),
            Scalar::Integer(i) => Ok(Scalar::integer_with(i.value(), layout)),
            Scalar::Real(r) => {
                let v = r.value();
                if !v.is_finite() {
                    return Err(NumError::Cast {
                        from: Kind::Real,
                        to: Kind::Integer,
                    });
                }
                Ok(Scalar::integer_with(v.trunc() as i128, layout))
            }
            Scalar::Complex(_) => Err(NumError::Cast {
                from: Kind::Complex,
                to: Kind::Integer,
            }),
        }
    }

    /// Cast into a real of the given width. Complex input is a narrowing
    /// cast and fails.
    pub fn cast_real(&self, width: FloatWidth) -> Result<Scalar, NumError> {
        match self {
            Scalar::Complex(_) => Err(NumError::Cast {
                from: Kind::Complex,
                to: Kind::Real,
            }),
            other => Ok(Scalar::real_with(other.as_f64(), width)),
        }
    }

    /// Cast into a complex of the given width. Always widens.
    pub fn cast_complex(&self, width: ComplexWidth) -> Scalar {
        Scalar::complex_with(self.as_complex(), width)
    }

    // ------------------------------------------------------------------
    // Parsing
    // ------------------------------------------------------------------

    /// Parse a boolean: case-insensitive truthy/falsy tokens first, then
    /// numeral-then-truthiness.
    pub fn parse_boolean(text: &str) -> Result<Scalar, NumError> {
        let t = text.trim().to_ascii_lowercase();
        match t.as_str() {
            "true" | "t" | "y" | "yes" | "on" => return Ok(Scalar::Boolean(true)),
            "false" | "f" | "n" | "no" | "off" => return Ok(Scalar::Boolean(false)),
            _ => {}
        }
        if let Ok(v) = t.parse::<f64>() {
            return Ok(Scalar::Boolean(v != 0.0));
        }
        Err(NumError::Parse {
            literal: text.to_owned(),
            target: Kind::Boolean,
        })
    }

    /// Parse an integer numeral. Fractional text is rejected.
    pub fn parse_integer(text: &str, layout: IntLayout) -> Result<Scalar, NumError> {
        text.trim()
            .parse::<i128>()
            .map(|v| Scalar::integer_with(v, layout))
            .map_err(|_| NumError::Parse {
                literal: text.to_owned(),
                target: Kind::Integer,
            })
    }

    /// Parse a real numeral.
    pub fn parse_real(text: &str, width: FloatWidth) -> Result<Scalar, NumError> {
        text.trim()
            .parse::<f64>()
            .map(|v| Scalar::real_with(v, width))
            .map_err(|_| NumError::Parse {
                literal: text.to_owned(),
                target: Kind::Real,
            })
    }

    /// Parse a complex numeral such as `1`, `2i`, `-1.5+2j`, or `3-j`.
    pub fn parse_complex(text: &str, width: ComplexWidth) -> Result<Scalar, NumError> {
        parse_complex_literal(text)
            .map(|v| Scalar::complex_with(v, width))
            .ok_or_else(|| NumError::Parse {
                literal: text.to_owned(),
                target: Kind::Complex,
            })
    }
}

/// Parse a complex numeral. Both `i` and `j` suffixes are accepted; a bare
/// suffix (`j`, `-j`) means a unit imaginary part.
fn parse_complex_literal(text: &str) -> Option<Complex64> {
    let t: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if t.is_empty() {
        return None;
    }
    let has_suffix = matches!(t.chars().next_back(), Some('i' | 'I' | 'j' | 'J'));
    if !has_suffix {
        return t.parse::<f64>().ok().map(|re| Complex64::new(re, 0.0));
    }
    let body = &t[..t.len() - 1];
    // split at the last sign that is not an exponent sign
    let split = body
        .char_indices()
        .rev()
        .find(|&(idx, c)| {
            (c == '+' || c == '-')
                && idx > 0
                && !matches!(body.as_bytes()[idx - 1], b'e' | b'E')
        })
        .map(|(idx, _)| idx);
    match split {
        Some(idx) => {
            let re: f64 = body[..idx].parse().ok()?;
            let im = parse_signed_unit(&body[idx..])?;
            Some(Complex64::new(re, im))
        }
        None => {
            let im = parse_signed_unit(body)?;
            Some(Complex64::new(0.0, im))
        }
    }
}

fn parse_signed_unit(s: &str) -> Option<f64> {
    match s {
        "" | "+" => Some(1.0),
        "-" => Some(-1.0),
        _ => s.parse().ok(),
    }
}

fn fmt_real(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_finite() && v.fract() == 0.0 {
        write!(f, "{v:.1}")
    } else {
        write!(f, "{v}")
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Boolean(b) => write!(f, "{b}"),
            Scalar::Integer(i) => write!(f, "{}", i.value()),
            Scalar::Real(r) => fmt_real(f, r.value()),
            Scalar::Complex(c) => {
                let v = c.value();
                fmt_real(f, v.re)?;
                if v.im.is_sign_negative() {
                    f.write_str("-")?;
                    fmt_real(f, -v.im)?;
                } else {
                    f.write_str("+")?;
                    fmt_real(f, v.im)?;
                }
                f.write_str("i")
            }
        }
    }
}
