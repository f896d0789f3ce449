use std::borrow::Cow;

use pest::error::{Error as PestError, InputLocation, LineColLocation};
use thiserror::Error;

use self::grammars::polynomial::Rule;

pub mod grammars;
pub mod polynomial;

pub(crate) const INVARIANT_ERROR: &str =
    "Programmer error: parse tree does not match the polynomial grammar.";

/// Raised when the whole input cannot be matched by the polynomial grammar.
///
/// The message points at the furthest position the parser reached and lists
/// what it expected there.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{inner}")]
pub struct ParseError {
    inner: Box<PestError<Rule>>,
}

impl ParseError {
    /// Byte offset into the input where matching failed.
    pub fn position(&self) -> usize {
        match self.inner.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        }
    }

    /// 1-based line and column of the failure.
    pub fn line_col(&self) -> (usize, usize) {
        match self.inner.line_col {
            LineColLocation::Pos(line_col) => line_col,
            LineColLocation::Span(start, _) => start,
        }
    }

    /// The expectation part of the message, without the source excerpt.
    pub fn expected(&self) -> Cow<'_, str> {
        self.inner.variant.message()
    }
}

impl From<PestError<Rule>> for ParseError {
    fn from(error: PestError<Rule>) -> Self {
        ParseError {
            inner: Box::new(error.renamed_rules(rule_name)),
        }
    }
}

fn rule_name(rule: &Rule) -> String {
    let name = match rule {
        Rule::EOI => "end of input",
        Rule::polynomial => "polynomial",
        Rule::negation => "negated polynomial",
        Rule::chain | Rule::term => "term",
        Rule::additive_op => "\"+\" or \"-\"",
        Rule::coeff_var_exp | Rule::coeff_var | Rule::coeff | Rule::coefficient => "coefficient",
        Rule::var_exp | Rule::var => "\"x\"",
        Rule::exponent => "exponent",
        other => return format!("{other:?}"),
    };
    name.to_owned()
}

pub trait Parser {
    type Output;

    fn parse(input: &str) -> Result<Self::Output, ParseError>;
}
