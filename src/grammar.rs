//! Structural templates for the recognized shapes.
//!
//! Every matcher works on whitespace-free text and accepts only when the template
//! consumes the whole input. Matchers are independent of each other; the priority
//! order between them lives in [`crate::classify`].

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit0, digit1, one_of, satisfy};
use nom::combinator::{all_consuming, map, map_opt, opt, recognize};
use nom::error::VerboseError;
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded, tuple};
use num_bigint::BigInt;
use num_traits::One;

use crate::polynomial::Polynomial;
use crate::shape::{Rational, Shape, Symbol};

/// Resolves a coefficient token: empty or `+` is 1, `-` is -1, anything else is the
/// signed decimal literal it spells.
pub fn resolve_signed_coefficient(token: &str) -> Option<Rational> {
    let (negative, magnitude) = split_sign(token);
    let value = if magnitude.is_empty() {
        Rational::one()
    } else {
        parse_decimal(magnitude)?
    };
    Some(if negative { -value } else { value })
}

/// [`resolve_signed_coefficient`] restricted to integral values.
pub fn resolve_integer_coefficient(token: &str) -> Option<BigInt> {
    let value = resolve_signed_coefficient(token)?;
    value.is_integer().then(|| value.to_integer())
}

/// `A/(k·x+a)`
pub fn type_i(input: &str) -> Option<Shape> {
    let (_, (numerator, _, den)) = all_consuming(tuple((
        integer,
        char('/'),
        delimited(char('('), linear, char(')')),
    )))(input)
    .ok()?;
    Some(Shape::TypeI {
        numerator,
        k: den.coeff,
        a: den.constant,
        variable: den.variable,
    })
}

/// `A/((k·x+a)^n)`
pub fn type_ii(input: &str) -> Option<Shape> {
    let (_, (numerator, _, (den, power))) = all_consuming(tuple((
        integer,
        char('/'),
        delimited(
            char('('),
            pair(delimited(char('('), linear, char(')')), power),
            char(')'),
        ),
    )))(input)
    .ok()?;
    Some(Shape::TypeII {
        numerator,
        k: den.coeff,
        a: den.constant,
        power,
        variable: den.variable,
    })
}

/// `(M·x+N)/(x^2+p·x+q)`
pub fn type_iii(input: &str) -> Option<Shape> {
    let (_, (num, _, den)) = all_consuming(tuple((
        delimited(char('('), linear, char(')')),
        char('/'),
        delimited(char('('), quadratic, char(')')),
    )))(input)
    .ok()?;
    if num.variable != den.variable {
        return None;
    }
    Some(Shape::TypeIII {
        m: num.coeff,
        n: num.constant,
        p: den.p,
        q: den.q,
        variable: num.variable,
    })
}

/// `(M·x+N)/((x^2+p·x+q)^n)`
pub fn type_iv(input: &str) -> Option<Shape> {
    let (_, (num, _, (den, power))) = all_consuming(tuple((
        delimited(char('('), linear, char(')')),
        char('/'),
        delimited(
            char('('),
            pair(delimited(char('('), quadratic, char(')')), power),
            char(')'),
        ),
    )))(input)
    .ok()?;
    if num.variable != den.variable {
        return None;
    }
    Some(Shape::TypeIV {
        m: num.coeff,
        n: num.constant,
        p: den.p,
        q: den.q,
        power,
        variable: num.variable,
    })
}

/// Sum of `[c]x[^e]` and constant terms, all in one symbol.
pub fn polynomial(input: &str) -> Option<Shape> {
    let (_, (first, rest)) = all_consuming(pair(leading_term, many0(trailing_term)))(input).ok()?;

    let mut variable = None;
    let mut entries = Vec::with_capacity(rest.len() + 1);
    for term in std::iter::once(first).chain(rest) {
        match term {
            Term::Variable {
                coeff,
                variable: name,
                power,
            } => {
                match variable {
                    None => variable = Some(name),
                    Some(seen) if seen != name => return None,
                    Some(_) => {}
                }
                entries.push((power, coeff));
            }
            Term::Constant(coeff) => entries.push((0, coeff)),
        }
    }
    Some(Shape::Polynomial(Polynomial::from_terms(variable, entries)))
}

struct Linear {
    coeff: BigInt,
    variable: Symbol,
    constant: BigInt,
}

struct Quadratic {
    variable: Symbol,
    p: BigInt,
    q: BigInt,
}

enum Term {
    Variable {
        coeff: Rational,
        variable: Symbol,
        power: u32,
    },
    Constant(Rational),
}

impl Term {
    fn variable((coeff, variable, power): (Rational, Symbol, Option<u32>)) -> Self {
        Term::Variable {
            coeff,
            variable,
            power: power.unwrap_or(1),
        }
    }
}

fn linear(input: &str) -> IResult<&str, Linear, VerboseError<&str>> {
    map(
        tuple((integer_coefficient, symbol, signed_integer)),
        |(coeff, variable, constant)| Linear {
            coeff,
            variable,
            constant,
        },
    )(input)
}

fn quadratic(input: &str) -> IResult<&str, Quadratic, VerboseError<&str>> {
    map_opt(
        tuple((
            symbol,
            tag("^2"),
            signed_integer_coefficient,
            symbol,
            signed_integer,
        )),
        |(variable, _, p, linear_var, q)| {
            (variable == linear_var).then_some(Quadratic { variable, p, q })
        },
    )(input)
}

fn leading_term(input: &str) -> IResult<&str, Term, VerboseError<&str>> {
    alt((
        map(tuple((decimal_coefficient, symbol, opt(power))), Term::variable),
        map(
            map_opt(recognize(pair(opt(sign), decimal)), resolve_signed_coefficient),
            Term::Constant,
        ),
    ))(input)
}

fn trailing_term(input: &str) -> IResult<&str, Term, VerboseError<&str>> {
    alt((
        map(
            tuple((signed_decimal_coefficient, symbol, opt(power))),
            Term::variable,
        ),
        map(
            map_opt(recognize(pair(sign, decimal)), resolve_signed_coefficient),
            Term::Constant,
        ),
    ))(input)
}

fn sign(input: &str) -> IResult<&str, char, VerboseError<&str>> {
    one_of("+-")(input)
}

fn symbol(input: &str) -> IResult<&str, Symbol, VerboseError<&str>> {
    satisfy(|c| c.is_ascii_alphabetic())(input)
}

/// `^n` with `n >= 1`.
fn power(input: &str) -> IResult<&str, u32, VerboseError<&str>> {
    preceded(
        char('^'),
        map_opt(digit1, |s: &str| s.parse::<u32>().ok().filter(|n| *n >= 1)),
    )(input)
}

fn integer(input: &str) -> IResult<&str, BigInt, VerboseError<&str>> {
    map_opt(recognize(pair(opt(sign), digit1)), parse_bigint)(input)
}

// trailing constant of a binomial; the sign is what separates it from the symbol
fn signed_integer(input: &str) -> IResult<&str, BigInt, VerboseError<&str>> {
    map_opt(recognize(pair(sign, digit1)), parse_bigint)(input)
}

fn integer_coefficient(input: &str) -> IResult<&str, BigInt, VerboseError<&str>> {
    map_opt(
        recognize(pair(opt(sign), digit0)),
        resolve_integer_coefficient,
    )(input)
}

fn signed_integer_coefficient(input: &str) -> IResult<&str, BigInt, VerboseError<&str>> {
    map_opt(recognize(pair(sign, digit0)), resolve_integer_coefficient)(input)
}

fn decimal(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    recognize(alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    )))(input)
}

fn decimal_coefficient(input: &str) -> IResult<&str, Rational, VerboseError<&str>> {
    map_opt(
        recognize(pair(opt(sign), opt(decimal))),
        resolve_signed_coefficient,
    )(input)
}

fn signed_decimal_coefficient(input: &str) -> IResult<&str, Rational, VerboseError<&str>> {
    map_opt(recognize(pair(sign, opt(decimal))), resolve_signed_coefficient)(input)
}

fn split_sign(token: &str) -> (bool, &str) {
    if let Some(rest) = token.strip_prefix('-') {
        (true, rest)
    } else {
        (false, token.strip_prefix('+').unwrap_or(token))
    }
}

fn parse_bigint(token: &str) -> Option<BigInt> {
    let (negative, digits) = split_sign(token);
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    Some(if negative { -magnitude } else { magnitude })
}

fn parse_decimal(text: &str) -> Option<Rational> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }
    let numer = BigInt::parse_bytes(format!("{whole}{fraction}").as_bytes(), 10)?;
    let denom = num_traits::pow(BigInt::from(10), fraction.len());
    Some(Rational::new(numer, denom))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i64) -> BigInt {
        BigInt::from(value)
    }

    #[test]
    fn coefficient_defaults() {
        assert_eq!(resolve_integer_coefficient(""), Some(int(1)));
        assert_eq!(resolve_integer_coefficient("+"), Some(int(1)));
        assert_eq!(resolve_integer_coefficient("-"), Some(int(-1)));
        assert_eq!(resolve_integer_coefficient("-12"), Some(int(-12)));
        assert_eq!(resolve_integer_coefficient("+3"), Some(int(3)));
        assert_eq!(resolve_integer_coefficient("2.5"), None);
    }

    #[test]
    fn decimal_coefficients_are_exact() {
        assert_eq!(
            resolve_signed_coefficient("-2.5"),
            Some(Rational::new(int(-5), int(2)))
        );
        assert_eq!(
            resolve_signed_coefficient(".25"),
            Some(Rational::new(int(1), int(4)))
        );
        assert_eq!(resolve_signed_coefficient("3."), Some(Rational::from_integer(int(3))));
        assert_eq!(resolve_signed_coefficient("."), None);
        assert_eq!(resolve_signed_coefficient("--1"), None);
    }

    #[test]
    fn power_rejects_zero_and_overflow() {
        assert_eq!(power("^3"), Ok(("", 3)));
        assert!(power("^0").is_err());
        assert!(power("^99999999999").is_err());
    }

    #[test]
    fn linear_requires_signed_constant() {
        let (rest, parsed) = linear("-3y+7").expect("linear binomial");
        assert_eq!(rest, "");
        assert_eq!(parsed.coeff, int(-3));
        assert_eq!(parsed.variable, 'y');
        assert_eq!(parsed.constant, int(7));
        assert!(linear("x7").is_err());
    }

    #[test]
    fn quadratic_requires_one_symbol() {
        let (_, parsed) = quadratic("x^2-x+4").expect("quadratic");
        assert_eq!(parsed.p, int(-1));
        assert_eq!(parsed.q, int(4));
        assert!(quadratic("x^2+3y+1").is_err());
        assert!(quadratic("x^2+1").is_err());
    }
}
