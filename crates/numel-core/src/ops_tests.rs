use num_complex::Complex64;

use super::*;
use crate::kind::Kind;
use crate::layout::{FloatWidth, IntLayout, IntWidth};

fn int(v: i64) -> Scalar {
    Scalar::integer(v)
}

fn real(v: f64) -> Scalar {
    Scalar::real(v)
}

fn complex(re: f64, im: f64) -> Scalar {
    Scalar::complex(Complex64::new(re, im))
}

// ----------------------------------------------------------------------
// Arithmetic
// ----------------------------------------------------------------------

#[test]
fn ring_ops_keep_the_common_kind() {
    assert_eq!(binary(BinOp::Add, &int(2), &int(3)), Ok(int(5)));
    assert_eq!(binary(BinOp::Sub, &int(2), &real(0.5)), Ok(real(1.5)));
    assert_eq!(
        binary(BinOp::Mul, &complex(1.0, 2.0), &complex(3.0, 4.0)),
        Ok(complex(-5.0, 10.0))
    );
}

#[test]
fn boolean_arithmetic_stays_boolean() {
    let t = Scalar::boolean(true);
    let f = Scalar::boolean(false);
    assert_eq!(binary(BinOp::Add, &t, &t), Ok(Scalar::boolean(true)));
    assert_eq!(binary(BinOp::Mul, &t, &f), Ok(Scalar::boolean(false)));
    assert_eq!(binary(BinOp::Sub, &t, &t), Ok(Scalar::boolean(false)));
    // a numeric partner promotes the Boolean out of the logical domain
    assert_eq!(binary(BinOp::Add, &t, &int(1)), Ok(int(2)));
}

#[test]
fn division_family_leaves_the_integer_domain() {
    assert_eq!(binary(BinOp::Div, &int(7), &int(2)), Ok(real(3.5)));
    assert_eq!(binary(BinOp::FloorDiv, &int(7), &int(2)), Ok(real(3.0)));
    assert_eq!(binary(BinOp::FloorDiv, &int(-7), &int(2)), Ok(real(-4.0)));
    assert_eq!(binary(BinOp::Pow, &int(2), &int(10)), Ok(real(1024.0)));
    assert_eq!(binary(BinOp::Pow, &int(2), &int(-1)), Ok(real(0.5)));
}

#[test]
fn remainder_sign_follows_the_divisor() {
    assert_eq!(binary(BinOp::Rem, &int(7), &int(3)), Ok(real(1.0)));
    assert_eq!(binary(BinOp::Rem, &int(7), &int(-3)), Ok(real(-2.0)));
    assert_eq!(binary(BinOp::Rem, &int(-7), &int(3)), Ok(real(2.0)));
}

#[test]
fn complex_division_family() {
    let q = binary(BinOp::Div, &complex(1.0, 2.0), &complex(3.0, 4.0));
    assert_eq!(q, Ok(complex(0.44, 0.08)));
    // floor division floors both components of the quotient
    assert_eq!(
        binary(BinOp::FloorDiv, &complex(7.0, 5.0), &complex(2.0, 0.0)),
        Ok(complex(3.0, 2.0))
    );
    // a Real partner is carried into the complex domain
    let r = binary(BinOp::Div, &complex(4.0, 2.0), &real(2.0));
    assert_eq!(r, Ok(complex(2.0, 1.0)));
}

#[test]
fn zero_divisor_is_rejected_before_evaluating() {
    assert_eq!(binary(BinOp::Div, &int(1), &int(0)), Err(NumError::DivisionByZero));
    assert_eq!(binary(BinOp::FloorDiv, &real(1.0), &real(0.0)), Err(NumError::DivisionByZero));
    assert_eq!(
        binary(BinOp::Rem, &complex(1.0, 1.0), &complex(0.0, 0.0)),
        Err(NumError::DivisionByZero)
    );
    // a Boolean divisor coerces to zero as well
    assert_eq!(
        binary(BinOp::Div, &int(1), &Scalar::boolean(false)),
        Err(NumError::DivisionByZero)
    );
}

#[test]
fn fixed_width_arithmetic_wraps() {
    let uint8 = IntLayout::new(IntWidth::W8, false);
    let int8 = IntLayout::new(IntWidth::W8, true);
    assert_eq!(
        binary(BinOp::Add, &Scalar::integer_with(255, uint8), &Scalar::integer_with(1, uint8)),
        Ok(Scalar::integer_with(0, uint8))
    );
    assert_eq!(
        binary(BinOp::Add, &Scalar::integer_with(127, int8), &Scalar::integer_with(1, int8)),
        Ok(Scalar::integer_with(-128, int8))
    );
}

#[test]
fn real_width_survives_field_ops() {
    let x = Scalar::real_with(1.0, FloatWidth::W32);
    let y = Scalar::real_with(4.0, FloatWidth::W32);
    let Ok(Scalar::Real(q)) = binary(BinOp::Div, &x, &y) else { panic!() };
    assert_eq!(q.width(), FloatWidth::W32);
    assert_eq!(q.value(), 0.25);
}

// ----------------------------------------------------------------------
// Bitwise
// ----------------------------------------------------------------------

#[test]
fn bitwise_on_integers() {
    assert_eq!(binary(BinOp::BitAnd, &int(6), &int(3)), Ok(int(2)));
    assert_eq!(binary(BinOp::BitOr, &int(6), &int(3)), Ok(int(7)));
    assert_eq!(binary(BinOp::BitXor, &int(6), &int(3)), Ok(int(5)));
    assert_eq!(binary(BinOp::Shl, &int(1), &int(4)), Ok(int(16)));
    assert_eq!(binary(BinOp::Shr, &int(-8), &int(1)), Ok(int(-4)));
}

#[test]
fn bitwise_promotes_booleans_to_integer() {
    let t = Scalar::boolean(true);
    let f = Scalar::boolean(false);
    assert_eq!(binary(BinOp::BitAnd, &t, &f), Ok(int(0)));
    assert_eq!(binary(BinOp::BitOr, &t, &f), Ok(int(1)));
    assert_eq!(binary(BinOp::BitXor, &t, &int(3)), Ok(int(2)));
}

#[test]
fn bitwise_rejects_non_integral_kinds() {
    assert_eq!(
        binary(BinOp::BitAnd, &real(1.0), &int(1)),
        Err(NumError::UnsupportedOperands { op: "&", lhs: Kind::Real, rhs: Kind::Real })
    );
    assert!(binary(BinOp::Shl, &complex(1.0, 0.0), &int(1)).is_err());
}

#[test]
fn negative_shift_count_is_rejected() {
    assert_eq!(
        binary(BinOp::Shl, &int(1), &int(-1)),
        Err(NumError::UnsupportedOperands { op: "<<", lhs: Kind::Integer, rhs: Kind::Integer })
    );
}

#[test]
fn oversized_shifts_saturate() {
    assert_eq!(binary(BinOp::Shl, &int(1), &int(200)), Ok(int(0)));
    assert_eq!(binary(BinOp::Shr, &int(1), &int(200)), Ok(int(0)));
    // arithmetic right shift sign-fills
    assert_eq!(binary(BinOp::Shr, &int(-1), &int(200)), Ok(int(-1)));
}

// ----------------------------------------------------------------------
// Comparison
// ----------------------------------------------------------------------

#[test]
fn comparison_coerces_first() {
    assert_eq!(compare(CmpOp::Lt, &int(1), &int(2)), Ok(true));
    assert_eq!(compare(CmpOp::Eq, &int(2), &real(2.0)), Ok(true));
    assert_eq!(compare(CmpOp::Ge, &Scalar::boolean(true), &int(1)), Ok(true));
    assert_eq!(compare(CmpOp::Eq, &int(1), &complex(1.0, 0.0)), Ok(true));
}

#[test]
fn nan_compares_false_except_ne() {
    let nan = real(f64::NAN);
    assert_eq!(compare(CmpOp::Eq, &nan, &nan), Ok(false));
    assert_eq!(compare(CmpOp::Le, &nan, &real(1.0)), Ok(false));
    assert_eq!(compare(CmpOp::Ne, &nan, &nan), Ok(true));
}

#[test]
fn complex_supports_equality_but_not_ordering() {
    let x = complex(1.0, 2.0);
    assert_eq!(compare(CmpOp::Eq, &x, &x), Ok(true));
    assert_eq!(compare(CmpOp::Ne, &x, &complex(1.0, -2.0)), Ok(true));
    assert_eq!(
        compare(CmpOp::Lt, &x, &x),
        Err(NumError::UnsupportedOperands { op: "<", lhs: Kind::Complex, rhs: Kind::Complex })
    );
}

// ----------------------------------------------------------------------
// Unary
// ----------------------------------------------------------------------

#[test]
fn neg_pos_abs_preserve_kind() {
    assert_eq!(unary(UnOp::Neg, &int(5)), Ok(int(-5)));
    assert_eq!(unary(UnOp::Pos, &real(-1.5)), Ok(real(-1.5)));
    assert_eq!(unary(UnOp::Abs, &real(-1.5)), Ok(real(1.5)));
    // abs of a complex is its modulus, still a Complex payload
    assert_eq!(unary(UnOp::Abs, &complex(3.0, 4.0)), Ok(complex(5.0, 0.0)));
}

#[test]
fn neg_wraps_in_fixed_width_layouts() {
    let int8 = IntLayout::new(IntWidth::W8, true);
    assert_eq!(
        unary(UnOp::Neg, &Scalar::integer_with(-128, int8)),
        Ok(Scalar::integer_with(-128, int8))
    );
}

#[test]
fn invert_requires_an_integral_kind() {
    assert_eq!(unary(UnOp::Invert, &int(10)), Ok(int(-11)));
    assert_eq!(unary(UnOp::Invert, &Scalar::boolean(true)), Ok(int(-2)));
    assert_eq!(
        unary(UnOp::Invert, &real(1.0)),
        Err(NumError::UnsupportedUnary { op: "~", kind: Kind::Real })
    );
}

// ----------------------------------------------------------------------
// Floored integer helpers (used by the in-place integer path)
// ----------------------------------------------------------------------

#[test]
fn floored_division_rounds_toward_negative_infinity() {
    assert_eq!(ops::floor_div_int(7, 2), 3);
    assert_eq!(ops::floor_div_int(-7, 2), -4);
    assert_eq!(ops::floor_div_int(7, -2), -4);
    assert_eq!(ops::floor_div_int(-7, -2), 3);
}

#[test]
fn floored_remainder_follows_divisor_sign() {
    assert_eq!(ops::floor_rem_int(7, 3), 1);
    assert_eq!(ops::floor_rem_int(-7, 3), 2);
    assert_eq!(ops::floor_rem_int(7, -3), -2);
}
