use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use num_traits::{ToPrimitive, Zero};

use crate::shape::{Rational, Symbol};

/// Exponent to coefficient map of a single-variable polynomial.
///
/// Contributions for an exponent that is already present are summed, never replaced.
/// Sums that cancel to zero stay in the map so the input's degrees remain visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polynomial {
    variable: Option<Symbol>,
    coeffs: BTreeMap<u32, Rational>,
}

impl Polynomial {
    pub fn new(variable: Option<Symbol>) -> Self {
        Polynomial {
            variable,
            coeffs: BTreeMap::new(),
        }
    }

    pub fn from_terms<I>(variable: Option<Symbol>, terms: I) -> Self
    where
        I: IntoIterator<Item = (u32, Rational)>,
    {
        let mut poly = Polynomial::new(variable);
        for (exp, coeff) in terms {
            poly.add_term(exp, coeff);
        }
        poly
    }

    pub fn add_term(&mut self, exp: u32, coeff: Rational) {
        match self.coeffs.entry(exp) {
            Entry::Vacant(entry) => {
                entry.insert(coeff);
            }
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += coeff;
            }
        }
    }

    pub fn variable(&self) -> Option<Symbol> {
        self.variable
    }

    pub fn coefficients(&self) -> &BTreeMap<u32, Rational> {
        &self.coeffs
    }

    pub fn coeff(&self, exp: u32) -> Rational {
        self.coeffs.get(&exp).cloned().unwrap_or_else(Rational::zero)
    }

    pub fn coefficient_f64(&self, exp: u32) -> Option<f64> {
        self.coeffs.get(&exp).and_then(|c| c.to_f64())
    }

    /// Highest exponent with a non-zero coefficient.
    pub fn degree(&self) -> Option<u32> {
        self.coeffs
            .iter()
            .rev()
            .find(|(_, c)| !c.is_zero())
            .map(|(exp, _)| *exp)
    }

    pub fn leading_coeff(&self) -> Rational {
        self.degree()
            .map(|d| self.coeff(d))
            .unwrap_or_else(Rational::zero)
    }

    pub fn is_constant(&self) -> bool {
        self.degree().is_none_or(|d| d == 0)
    }

    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (u32, &Rational)> + '_ {
        self.coeffs.iter().map(|(e, c)| (*e, c))
    }
}

impl std::ops::Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        let mut sum = Polynomial {
            variable: self.variable.or(rhs.variable),
            coeffs: self.coeffs,
        };
        for (exp, coeff) in rhs.coeffs {
            sum.add_term(exp, coeff);
        }
        sum
    }
}
