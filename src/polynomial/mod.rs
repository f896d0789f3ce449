use std::str::FromStr;

use crate::parsers::{polynomial::PolynomialParser, ParseError, Parser};

use self::normalize::normalize;
use self::term::Term;

pub mod normalize;
pub mod term;

/// Parse tree of a single-variable polynomial.
///
/// `+` and `-` chains nest to the left, so `a + b - c` is
/// `Difference(Sum(Leaf(a), b), c)`.
#[derive(Debug, PartialEq, Clone)]
pub enum Polynomial {
    Sum(Box<Polynomial>, Term),
    Difference(Box<Polynomial>, Term),
    /// A leading `-` applied to everything after it.
    Negate(Box<Polynomial>),
    Leaf(Term),
}

impl Polynomial {
    /// Derivative text straight from concatenating the term derivatives.
    ///
    /// A negation only prefixes a `-`, it is not distributed over the terms
    /// of the negated chain.
    pub fn raw_derivative(&self) -> String {
        match self {
            Polynomial::Sum(left, right) => {
                format!("{}+{}", left.raw_derivative(), right.derivative())
            }
            Polynomial::Difference(left, right) => {
                format!("{}-{}", left.raw_derivative(), right.derivative())
            }
            Polynomial::Negate(inner) => format!("-{}", inner.raw_derivative()),
            Polynomial::Leaf(term) => term.derivative(),
        }
    }

    /// Derivative text with `--` and `+-` collapsed.
    pub fn derivative(&self) -> String {
        normalize(&self.raw_derivative())
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Polynomial::Sum(left, right) => left.evaluate(x) + right.evaluate(x),
            Polynomial::Difference(left, right) => left.evaluate(x) - right.evaluate(x),
            Polynomial::Negate(inner) => -inner.evaluate(x),
            Polynomial::Leaf(term) => term.evaluate(x),
        }
    }

    /// Turns the tree into a reusable function of `x`.
    pub fn into_evaluator(self) -> impl Fn(f64) -> f64 + Send + Sync {
        move |x| self.evaluate(x)
    }
}

impl FromStr for Polynomial {
    type Err = ParseError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        PolynomialParser::parse(src)
    }
}
