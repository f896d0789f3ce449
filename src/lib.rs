//! Symbolic first derivatives and numeric evaluation of polynomials in `x`.
//!
//! ```
//! use polynomial_derivatives::{derivative, evaluate};
//!
//! assert_eq!(derivative("3x^4+x").unwrap(), "12x^3+1");
//! assert_eq!(evaluate("2x^3", 2.0).unwrap(), 16.0);
//! ```
use log::debug;

pub mod parsers;
pub mod polynomial;

pub use parsers::ParseError;
pub use polynomial::Polynomial;

/// First derivative of `input` as polynomial text.
pub fn derivative(input: &str) -> Result<String, ParseError> {
    let derivative = input.parse::<Polynomial>()?.derivative();
    debug!("d/dx {input:?} = {derivative:?}");
    Ok(derivative)
}

/// Value of `input` at `x`.
pub fn evaluate(input: &str, x: f64) -> Result<f64, ParseError> {
    let value = input.parse::<Polynomial>()?.evaluate(x);
    debug!("{input:?} at x = {x} is {value}");
    Ok(value)
}

/// Parses `input` once and returns a function evaluating it at any `x`.
pub fn evaluator(input: &str) -> Result<impl Fn(f64) -> f64 + Send + Sync, ParseError> {
    Ok(input.parse::<Polynomial>()?.into_evaluator())
}
