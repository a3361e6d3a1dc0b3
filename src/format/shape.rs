use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::polynomial::Polynomial;
use crate::shape::{Rational, Shape, Symbol};

// longest decimal expansion tried before falling back to `n/d`
const MAX_DECIMAL_DIGITS: usize = 32;

/// Render a shape back into the compact surface syntax the classifier accepts.
pub fn pretty(shape: &Shape) -> String {
    match shape {
        Shape::Polynomial(poly) => pretty_polynomial(poly),
        Shape::TypeI {
            numerator,
            k,
            a,
            variable,
        } => format!("{numerator}/({})", linear(k, *variable, a)),
        Shape::TypeII {
            numerator,
            k,
            a,
            power,
            variable,
        } => format!("{numerator}/(({})^{power})", linear(k, *variable, a)),
        Shape::TypeIII {
            m,
            n,
            p,
            q,
            variable,
        } => format!(
            "({})/({})",
            linear(m, *variable, n),
            quadratic(*variable, p, q)
        ),
        Shape::TypeIV {
            m,
            n,
            p,
            q,
            power,
            variable,
        } => format!(
            "({})/(({})^{power})",
            linear(m, *variable, n),
            quadratic(*variable, p, q)
        ),
    }
}

pub fn pretty_polynomial(poly: &Polynomial) -> String {
    let var = poly.variable().unwrap_or('x');
    let mut out = String::new();
    for (exp, coeff) in poly.terms().rev() {
        if coeff.is_zero() {
            continue;
        }
        if coeff.is_negative() {
            out.push('-');
        } else if !out.is_empty() {
            out.push('+');
        }
        let magnitude = coeff.abs();
        match exp {
            0 => out.push_str(&show_decimal(&magnitude)),
            _ => {
                if !magnitude.is_one() {
                    out.push_str(&show_decimal(&magnitude));
                }
                out.push(var);
                if exp > 1 {
                    out.push_str(&format!("^{exp}"));
                }
            }
        }
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

fn linear(coeff: &BigInt, var: Symbol, constant: &BigInt) -> String {
    format!("{}{var}{}", leading_coefficient(coeff), signed(constant))
}

fn quadratic(var: Symbol, p: &BigInt, q: &BigInt) -> String {
    format!("{var}^2{}{var}{}", signed_coefficient(p), signed(q))
}

fn leading_coefficient(coeff: &BigInt) -> String {
    if coeff.is_one() {
        String::new()
    } else if *coeff == -BigInt::one() {
        "-".to_string()
    } else {
        coeff.to_string()
    }
}

fn signed_coefficient(coeff: &BigInt) -> String {
    if coeff.is_one() {
        "+".to_string()
    } else if *coeff == -BigInt::one() {
        "-".to_string()
    } else {
        signed(coeff)
    }
}

fn signed(value: &BigInt) -> String {
    if value.is_negative() {
        value.to_string()
    } else {
        format!("+{value}")
    }
}

/// Non-negative rational as a terminating decimal when one exists.
fn show_decimal(r: &Rational) -> String {
    if r.is_integer() {
        return r.to_integer().to_string();
    }
    let ten = Rational::from_integer(BigInt::from(10));
    let mut scaled = r.clone();
    for digits in 1..=MAX_DECIMAL_DIGITS {
        scaled = scaled * ten.clone();
        if scaled.is_integer() {
            let text = format!(
                "{:0>width$}",
                scaled.to_integer().to_string(),
                width = digits + 1
            );
            let (whole, fraction) = text.split_at(text.len() - digits);
            return format!("{whole}.{fraction}");
        }
    }
    format!("{}/{}", r.numer(), r.denom())
}
