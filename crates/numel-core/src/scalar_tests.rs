use num_complex::Complex64;

use super::*;
use crate::kind::Kind;
use crate::layout::{ComplexWidth, FloatWidth, IntLayout, IntWidth};

fn uint8() -> IntLayout {
    IntLayout::new(IntWidth::W8, false)
}

fn int8() -> IntLayout {
    IntLayout::new(IntWidth::W8, true)
}

#[test]
fn integer_wraps_into_layout_on_construction() {
    assert_eq!(Scalar::integer_with(300, uint8()), Scalar::integer_with(44, uint8()));
    assert_eq!(Scalar::integer_with(130, int8()), Scalar::integer_with(-126, int8()));
    assert_eq!(Scalar::integer_with(-1, uint8()), Scalar::integer_with(255, uint8()));
}

#[test]
fn real_normalizes_to_width() {
    let narrow = Scalar::real_with(0.1, FloatWidth::W32);
    let Scalar::Real(r) = narrow else { panic!() };
    assert_eq!(r.value(), 0.1f32 as f64);
    assert_ne!(r.value(), 0.1);
}

#[test]
fn complex_components_carry_component_width() {
    let c = ComplexScalar::new(Complex64::new(1.5, -2.5), ComplexWidth::W128);
    assert_eq!(c.re().value(), 1.5);
    assert_eq!(c.im().value(), -2.5);
    assert_eq!(c.re().width(), FloatWidth::W64);

    let c = ComplexScalar::new(Complex64::new(0.1, 0.0), ComplexWidth::W64);
    assert_eq!(c.re().value(), 0.1f32 as f64);
    assert_eq!(c.re().width(), FloatWidth::W32);
}

#[test]
fn truthiness() {
    assert!(!Scalar::boolean(false).truthy());
    assert!(Scalar::integer(-3).truthy());
    assert!(!Scalar::real(0.0).truthy());
    assert!(Scalar::complex(Complex64::new(0.0, 0.5)).truthy());
}

// ----------------------------------------------------------------------
// Casts
// ----------------------------------------------------------------------

#[test]
fn cast_boolean_accepts_every_kind() {
    assert_eq!(Scalar::real(2.5).cast_boolean(), Scalar::boolean(true));
    assert_eq!(
        Scalar::complex(Complex64::new(0.0, 0.0)).cast_boolean(),
        Scalar::boolean(false)
    );
}

#[test]
fn cast_integer_truncates_toward_zero() {
    let layout = IntLayout::default();
    assert_eq!(
        Scalar::real(3.9).cast_integer(layout),
        Ok(Scalar::integer(3))
    );
    assert_eq!(
        Scalar::real(-3.9).cast_integer(layout),
        Ok(Scalar::integer(-3))
    );
    assert_eq!(
        Scalar::boolean(true).cast_integer(layout),
        Ok(Scalar::integer(1))
    );
}

#[test]
fn cast_integer_rejects_complex_and_non_finite() {
    assert_eq!(
        Scalar::complex(Complex64::new(1.0, 0.0)).cast_integer(IntLayout::default()),
        Err(NumError::Cast { from: Kind::Complex, to: Kind::Integer })
    );
    assert_eq!(
        Scalar::real(f64::INFINITY).cast_integer(IntLayout::default()),
        Err(NumError::Cast { from: Kind::Real, to: Kind::Integer })
    );
}

#[test]
fn cast_real_rejects_complex() {
    assert_eq!(
        Scalar::integer(7).cast_real(FloatWidth::W64),
        Ok(Scalar::real(7.0))
    );
    assert_eq!(
        Scalar::complex(Complex64::new(1.0, 2.0)).cast_real(FloatWidth::W64),
        Err(NumError::Cast { from: Kind::Complex, to: Kind::Real })
    );
}

#[test]
fn cast_complex_always_widens() {
    assert_eq!(
        Scalar::integer(3).cast_complex(ComplexWidth::W128),
        Scalar::complex(Complex64::new(3.0, 0.0))
    );
}

// ----------------------------------------------------------------------
// Parsing
// ----------------------------------------------------------------------

#[test]
fn parse_boolean_tokens_and_numerals() {
    assert_eq!(Scalar::parse_boolean("True"), Ok(Scalar::boolean(true)));
    assert_eq!(Scalar::parse_boolean("off"), Ok(Scalar::boolean(false)));
    assert_eq!(Scalar::parse_boolean("0.0"), Ok(Scalar::boolean(false)));
    assert_eq!(Scalar::parse_boolean("-2"), Ok(Scalar::boolean(true)));
    assert!(matches!(
        Scalar::parse_boolean("maybe"),
        Err(NumError::Parse { target: Kind::Boolean, .. })
    ));
}

#[test]
fn parse_integer_rejects_fractions() {
    assert_eq!(
        Scalar::parse_integer(" 42 ", IntLayout::default()),
        Ok(Scalar::integer(42))
    );
    assert!(Scalar::parse_integer("4.2", IntLayout::default()).is_err());
}

#[test]
fn parse_real() {
    assert_eq!(
        Scalar::parse_real("-1.5e2", FloatWidth::W64),
        Ok(Scalar::real(-150.0))
    );
    assert!(Scalar::parse_real("pi", FloatWidth::W64).is_err());
}

#[test]
fn parse_complex_forms() {
    let parse = |t: &str| Scalar::parse_complex(t, ComplexWidth::W128);
    assert_eq!(parse("3"), Ok(Scalar::complex(Complex64::new(3.0, 0.0))));
    assert_eq!(parse("2i"), Ok(Scalar::complex(Complex64::new(0.0, 2.0))));
    assert_eq!(parse("-1.5+2j"), Ok(Scalar::complex(Complex64::new(-1.5, 2.0))));
    assert_eq!(parse("3-j"), Ok(Scalar::complex(Complex64::new(3.0, -1.0))));
    assert_eq!(parse("j"), Ok(Scalar::complex(Complex64::new(0.0, 1.0))));
    assert_eq!(parse("1e2+1e-2i"), Ok(Scalar::complex(Complex64::new(100.0, 0.01))));
    assert!(parse("one+twoi").is_err());
}

// ----------------------------------------------------------------------
// Display
// ----------------------------------------------------------------------

#[test]
fn display_forms() {
    insta::assert_snapshot!(Scalar::boolean(true), @"true");
    insta::assert_snapshot!(Scalar::integer(-7), @"-7");
    insta::assert_snapshot!(Scalar::real(3.0), @"3.0");
    insta::assert_snapshot!(Scalar::real(3.25), @"3.25");
    insta::assert_snapshot!(Scalar::complex(Complex64::new(1.0, 2.0)), @"1.0+2.0i");
    insta::assert_snapshot!(Scalar::complex(Complex64::new(0.5, -1.5)), @"0.5-1.5i");
}
