//! Recognizes the structural shape of a polynomial or proper rational function in one
//! variable and extracts the parameters a partial-fraction integrator needs.

pub mod classify;
pub mod error;
pub mod format;
pub mod grammar;
pub mod polynomial;
pub mod shape;

pub use classify::{Classifier, classify, strip_whitespace};
pub use error::{ClassifyError, Result};
pub use format::{describe, pretty};
pub use grammar::{resolve_integer_coefficient, resolve_signed_coefficient};
pub use polynomial::Polynomial;
pub use shape::{Rational, Shape, ShapeKind, Symbol};
