use num_complex::Complex64;

use super::*;
use crate::layout::{FloatWidth, IntLayout, IntWidth};

fn layout(width: IntWidth, signed: bool) -> IntLayout {
    IntLayout::new(width, signed)
}

#[test]
fn lower_priority_operand_widens() {
    let (a, b) = coerce(&Scalar::boolean(true), &Scalar::integer(5));
    assert_eq!(a, Scalar::integer(1));
    assert_eq!(b, Scalar::integer(5));

    let (a, b) = coerce(&Scalar::integer(2), &Scalar::real(0.5));
    assert_eq!(a, Scalar::real(2.0));
    assert_eq!(b, Scalar::real(0.5));

    let (a, b) = coerce(&Scalar::real(1.5), &Scalar::complex(Complex64::new(0.0, 1.0)));
    assert_eq!(a, Scalar::complex(Complex64::new(1.5, 0.0)));
    assert_eq!(b, Scalar::complex(Complex64::new(0.0, 1.0)));
}

#[test]
fn coercion_is_symmetric_in_kind() {
    let x = Scalar::integer(3);
    let y = Scalar::complex(Complex64::new(1.0, 1.0));
    let (a, b) = coerce(&x, &y);
    let (c, d) = coerce(&y, &x);
    assert_eq!(a.kind(), d.kind());
    assert_eq!(b.kind(), c.kind());
}

#[test]
fn same_kind_operands_pass_through() {
    let (a, b) = coerce(&Scalar::boolean(true), &Scalar::boolean(false));
    assert_eq!(a, Scalar::boolean(true));
    assert_eq!(b, Scalar::boolean(false));
}

// ----------------------------------------------------------------------
// Layout unification
// ----------------------------------------------------------------------

#[test]
fn integer_layouts_take_max_width() {
    let x = Scalar::integer_with(1, layout(IntWidth::W8, true));
    let y = Scalar::integer_with(2, layout(IntWidth::W64, true));
    let (a, b) = coerce(&x, &y);
    let (Scalar::Integer(a), Scalar::Integer(b)) = (a, b) else { panic!() };
    assert_eq!(a.layout(), layout(IntWidth::W64, true));
    assert_eq!(b.layout(), layout(IntWidth::W64, true));
}

#[test]
fn mixed_signedness_widens_when_unsigned_is_widest() {
    let x = Scalar::integer_with(200, layout(IntWidth::W8, false));
    let y = Scalar::integer_with(-1, layout(IntWidth::W8, true));
    let (a, _) = coerce(&x, &y);
    let Scalar::Integer(a) = a else { panic!() };
    assert_eq!(a.layout(), layout(IntWidth::W16, true));
    // the uint8 payload survives unchanged in the wider signed layout
    assert_eq!(a.value(), 200);
}

#[test]
fn mixed_signedness_caps_at_sixty_four_bits() {
    let x = Scalar::integer_with(1, layout(IntWidth::W64, false));
    let y = Scalar::integer_with(1, layout(IntWidth::W64, true));
    let (a, _) = coerce(&x, &y);
    let Scalar::Integer(a) = a else { panic!() };
    assert_eq!(a.layout(), layout(IntWidth::W64, true));
}

#[test]
fn narrower_unsigned_fits_in_wider_signed() {
    let x = Scalar::integer_with(255, layout(IntWidth::W8, false));
    let y = Scalar::integer_with(-5, layout(IntWidth::W16, true));
    let (a, b) = coerce(&x, &y);
    let (Scalar::Integer(a), Scalar::Integer(b)) = (a, b) else { panic!() };
    assert_eq!(a.layout(), layout(IntWidth::W16, true));
    assert_eq!(a.value(), 255);
    assert_eq!(b.value(), -5);
}

#[test]
fn real_widths_take_max() {
    let x = Scalar::real_with(1.0, FloatWidth::W32);
    let y = Scalar::real_with(2.0, FloatWidth::W64);
    let (a, _) = coerce(&x, &y);
    let Scalar::Real(a) = a else { panic!() };
    assert_eq!(a.width(), FloatWidth::W64);
}

#[test]
fn promoted_operand_lands_at_default_layout() {
    // an int8 promoted into Real arrives at the default 64-bit width
    let x = Scalar::integer_with(3, layout(IntWidth::W8, true));
    let y = Scalar::real_with(0.5, FloatWidth::W32);
    let (a, _) = coerce(&x, &y);
    let Scalar::Real(a) = a else { panic!() };
    assert_eq!(a.width(), FloatWidth::W64);
}

#[test]
fn promote_boolean_leaves_numerics_alone() {
    assert_eq!(promote_boolean(&Scalar::boolean(true)), Scalar::integer(1));
    assert_eq!(promote_boolean(&Scalar::real(2.5)), Scalar::real(2.5));
}
