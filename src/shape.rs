//! Shape descriptors produced by the classifier.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::polynomial::Polynomial;

pub type Rational = BigRational;

/// Single alphabetic variable letter.
pub type Symbol = char;

/// The recognized structure of an expression together with its parameters.
///
/// Rational shapes use the partial-fraction naming: `numerator` is `A`, `k` and `a`
/// describe the linear factor `k·x + a`, `m` and `n` the numerator `M·x + N`, `p` and `q`
/// the quadratic `x^2 + p·x + q`, and `power` is the exponent applied to the denominator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Polynomial(Polynomial),
    /// `A / (k·x + a)`
    TypeI {
        numerator: BigInt,
        k: BigInt,
        a: BigInt,
        variable: Symbol,
    },
    /// `A / ((k·x + a)^n)`
    TypeII {
        numerator: BigInt,
        k: BigInt,
        a: BigInt,
        power: u32,
        variable: Symbol,
    },
    /// `(M·x + N) / (x^2 + p·x + q)`
    TypeIII {
        m: BigInt,
        n: BigInt,
        p: BigInt,
        q: BigInt,
        variable: Symbol,
    },
    /// `(M·x + N) / ((x^2 + p·x + q)^n)`
    TypeIV {
        m: BigInt,
        n: BigInt,
        p: BigInt,
        q: BigInt,
        power: u32,
        variable: Symbol,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Polynomial,
    I,
    II,
    III,
    IV,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Polynomial(_) => ShapeKind::Polynomial,
            Shape::TypeI { .. } => ShapeKind::I,
            Shape::TypeII { .. } => ShapeKind::II,
            Shape::TypeIII { .. } => ShapeKind::III,
            Shape::TypeIV { .. } => ShapeKind::IV,
        }
    }

    /// `None` only for a constant polynomial.
    pub fn variable(&self) -> Option<Symbol> {
        match self {
            Shape::Polynomial(poly) => poly.variable(),
            Shape::TypeI { variable, .. }
            | Shape::TypeII { variable, .. }
            | Shape::TypeIII { variable, .. }
            | Shape::TypeIV { variable, .. } => Some(*variable),
        }
    }

    pub fn power(&self) -> Option<u32> {
        match self {
            Shape::TypeII { power, .. } | Shape::TypeIV { power, .. } => Some(*power),
            _ => None,
        }
    }

    pub fn is_rational(&self) -> bool {
        !matches!(self, Shape::Polynomial(_))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ShapeKind::Polynomial => "polynomial",
            ShapeKind::I => "I",
            ShapeKind::II => "II",
            ShapeKind::III => "III",
            ShapeKind::IV => "IV",
        };
        f.write_str(label)
    }
}
