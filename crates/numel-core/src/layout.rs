//! Width and signedness layouts for fixed-width scalar payloads.
//!
//! Fixed-width behavior is a parameter of a scalar, not a type per width:
//! an `Integer` carries an [`IntLayout`] and its payload is re-wrapped into
//! that layout after every operation, which is what makes `uint8` arithmetic
//! wrap at 256 while the math itself runs in a wide intermediate.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Bit width of an integer payload.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize,
)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }

    /// Next wider width, saturating at 64 bits.
    pub fn widened(self) -> IntWidth {
        match self {
            IntWidth::W8 => IntWidth::W16,
            IntWidth::W16 => IntWidth::W32,
            IntWidth::W32 | IntWidth::W64 => IntWidth::W64,
        }
    }
}

/// Width and signedness of an integer payload. Defaults to 64-bit signed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct IntLayout {
    pub width: IntWidth,
    pub signed: bool,
}

impl Default for IntLayout {
    fn default() -> Self {
        IntLayout::new(IntWidth::W64, true)
    }
}

impl IntLayout {
    pub const fn new(width: IntWidth, signed: bool) -> Self {
        IntLayout { width, signed }
    }

    /// Wrap a wide intermediate into this layout (two's complement).
    pub fn wrap(self, bits: i128) -> i128 {
        let w = self.width.bits();
        let mask: u128 = (1u128 << w) - 1;
        let low = (bits as u128) & mask;
        if self.signed {
            let sign_bit = 1u128 << (w - 1);
            if low & sign_bit != 0 {
                (low | !mask) as i128
            } else {
                low as i128
            }
        } else {
            low as i128
        }
    }

    /// dtype-style name, e.g. `uint8`.
    pub fn name(self) -> &'static str {
        match (self.signed, self.width) {
            (true, IntWidth::W8) => "int8",
            (true, IntWidth::W16) => "int16",
            (true, IntWidth::W32) => "int32",
            (true, IntWidth::W64) => "int64",
            (false, IntWidth::W8) => "uint8",
            (false, IntWidth::W16) => "uint16",
            (false, IntWidth::W32) => "uint32",
            (false, IntWidth::W64) => "uint64",
        }
    }

    /// Unify two layouts for a mixed-layout operation.
    ///
    /// Width takes the max. Mixed signedness resolves to signed; when the
    /// unsigned operand is at least as wide as the signed one, the result
    /// widens one step so the unsigned range still fits (capped at 64 bits).
    pub fn unify(self, other: Self) -> Self {
        if self == other {
            return self;
        }
        let width = self.width.max(other.width);
        if self.signed == other.signed {
            return IntLayout::new(width, self.signed);
        }
        let unsigned = if self.signed { other } else { self };
        if unsigned.width == width {
            IntLayout::new(width.widened(), true)
        } else {
            IntLayout::new(width, true)
        }
    }
}

/// Bit width of a real payload. Defaults to 64 bits.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
pub enum FloatWidth {
    W32,
    #[default]
    W64,
}

impl FloatWidth {
    /// Round a value to this width's precision.
    pub fn normalize(self, v: f64) -> f64 {
        match self {
            FloatWidth::W32 => v as f32 as f64,
            FloatWidth::W64 => v,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FloatWidth::W32 => "float32",
            FloatWidth::W64 => "float64",
        }
    }
}

/// Total bit width of a complex payload (two components). Defaults to 128.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
pub enum ComplexWidth {
    W64,
    #[default]
    W128,
}

impl ComplexWidth {
    /// Width of each component.
    pub fn component(self) -> FloatWidth {
        match self {
            ComplexWidth::W64 => FloatWidth::W32,
            ComplexWidth::W128 => FloatWidth::W64,
        }
    }

    /// Round both components to this width's precision.
    pub fn normalize(self, v: Complex64) -> Complex64 {
        let c = self.component();
        Complex64::new(c.normalize(v.re), c.normalize(v.im))
    }

    pub fn name(self) -> &'static str {
        match self {
            ComplexWidth::W64 => "complex64",
            ComplexWidth::W128 => "complex128",
        }
    }
}
