//! Canonical kind discriminants for the value tower.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminant of the value union.
///
/// The four scalar kinds form a promotion ladder (see [`Kind::priority`]).
/// `Vector` categorically outranks every scalar kind in coercion, and `Str`
/// never coerces with numerics.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Kind {
    Boolean,
    Integer,
    Real,
    Complex,
    Vector,
    Str,
}

impl Kind {
    /// Promotion priority among scalar kinds.
    ///
    /// Mixed-kind scalar operands coerce toward the higher priority, never
    /// downward. Non-scalar kinds have no priority.
    pub fn priority(self) -> Option<u8> {
        match self {
            Kind::Boolean => Some(0),
            Kind::Integer => Some(1),
            Kind::Real => Some(2),
            Kind::Complex => Some(3),
            Kind::Vector | Kind::Str => None,
        }
    }

    /// Whether this kind is a 0-dimensional numeric kind.
    pub fn is_scalar(self) -> bool {
        self.priority().is_some()
    }

    /// Display name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Boolean => "Boolean",
            Kind::Integer => "Integer",
            Kind::Real => "Real",
            Kind::Complex => "Complex",
            Kind::Vector => "Vector",
            Kind::Str => "String",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
