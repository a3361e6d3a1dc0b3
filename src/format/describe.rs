use crate::polynomial::Polynomial;
use crate::shape::Shape;

use super::shape::pretty_polynomial;

/// One-line summary naming the shape and every extracted parameter.
pub fn describe(shape: &Shape) -> String {
    let kind = shape.kind();
    match shape {
        Shape::Polynomial(poly) => format!(
            "{kind}: {{{}}}, variable={} ({})",
            coefficient_list(poly),
            poly.variable().map_or_else(|| "none".to_string(), String::from),
            pretty_polynomial(poly)
        ),
        Shape::TypeI {
            numerator,
            k,
            a,
            variable,
        } => format!("{kind}: A={numerator}, k={k}, a={a}, variable={variable}"),
        Shape::TypeII {
            numerator,
            k,
            a,
            power,
            variable,
        } => format!("{kind}: A={numerator}, k={k}, a={a}, n={power}, variable={variable}"),
        Shape::TypeIII {
            m,
            n,
            p,
            q,
            variable,
        } => format!("{kind}: M={m}, N={n}, p={p}, q={q}, variable={variable}"),
        Shape::TypeIV {
            m,
            n,
            p,
            q,
            power,
            variable,
        } => format!("{kind}: M={m}, N={n}, p={p}, q={q}, n={power}, variable={variable}"),
    }
}

fn coefficient_list(poly: &Polynomial) -> String {
    poly.terms()
        .rev()
        .map(|(exp, coeff)| format!("{exp}: {coeff}"))
        .collect::<Vec<_>>()
        .join(", ")
}
