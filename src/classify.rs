use tracing::{debug, trace};

use crate::error::{ClassifyError, Result};
use crate::grammar;
use crate::shape::{Shape, ShapeKind};

type Matcher = fn(&str) -> Option<Shape>;

/// Rational-function templates in priority order; the first match wins.
const RATIONAL_GRAMMARS: [(ShapeKind, Matcher); 4] = [
    (ShapeKind::I, grammar::type_i),
    (ShapeKind::II, grammar::type_ii),
    (ShapeKind::III, grammar::type_iii),
    (ShapeKind::IV, grammar::type_iv),
];

/// Classifier bound to a single expression.
///
/// Holds the raw text and, once [`Classifier::classify`] succeeds, the resulting shape.
#[derive(Clone, Debug)]
pub struct Classifier {
    expression: String,
    shape: Option<Shape>,
}

impl Classifier {
    pub fn new(expression: impl Into<String>) -> Self {
        Classifier {
            expression: expression.into(),
            shape: None,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    pub fn classify(&mut self) -> Result<&Shape> {
        let shape = classify(&self.expression)?;
        Ok(&*self.shape.insert(shape))
    }

    pub fn into_shape(self) -> Option<Shape> {
        self.shape
    }
}

/// Classifies `expression`, ignoring all whitespace.
///
/// Text containing `/` is tried against the rational templates only; anything else
/// must be a polynomial.
pub fn classify(expression: &str) -> Result<Shape> {
    let stripped = strip_whitespace(expression);
    debug!(expression = %stripped, "classifying expression");

    let shape = if stripped.contains('/') {
        match_rational(&stripped)
    } else {
        grammar::polynomial(&stripped)
    };

    match shape {
        Some(shape) => {
            debug!(expression = %stripped, kind = %shape.kind(), "expression classified");
            Ok(shape)
        }
        None => {
            debug!(expression = %stripped, "no shape matched");
            Err(ClassifyError::UnrecognizedShape(stripped))
        }
    }
}

pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

fn match_rational(input: &str) -> Option<Shape> {
    RATIONAL_GRAMMARS.iter().find_map(|(kind, matcher)| {
        let shape = matcher(input);
        if shape.is_none() {
            trace!(%kind, "template rejected expression");
        }
        shape
    })
}
