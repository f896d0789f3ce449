use log::{debug, trace};
use pest::iterators::Pair;
use pest::Parser as PestParser;

use super::grammars::polynomial::{PolynomialPestParser, Rule};
use super::{ParseError, Parser, INVARIANT_ERROR};
use crate::polynomial::term::{Coefficient, Exponent, Term};
use crate::polynomial::Polynomial;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Operation {
    Addition,
    Subtraction,
}

pub struct PolynomialParser;

impl Parser for PolynomialParser {
    type Output = Polynomial;

    fn parse(input: &str) -> Result<Polynomial, ParseError> {
        let mut parse_iter = PolynomialPestParser::parse(Rule::polynomial, input)?;
        let parse = parse_iter.next().expect(INVARIANT_ERROR);
        // polynomial = { SOI ~ expression ~ EOI }
        let expression = parse.into_inner().next().expect(INVARIANT_ERROR);
        let polynomial = PolynomialParser::parse_expression(expression);
        debug!("parsed {input:?} as {polynomial:?}");
        Ok(polynomial)
    }
}

impl PolynomialParser {
    // assumes the parses rule is Rule::negation or Rule::chain
    fn parse_expression(parse: Pair<'_, Rule>) -> Polynomial {
        match parse.as_rule() {
            Rule::negation => {
                let inner = parse.into_inner().next().expect(INVARIANT_ERROR);
                Polynomial::Negate(Box::new(PolynomialParser::parse_expression(inner)))
            }
            Rule::chain => PolynomialParser::parse_chain(parse),
            _ => panic!("{}", INVARIANT_ERROR),
        }
    }

    // assumes the parses rule is Rule::chain, folds `term (op term)*` to the left
    fn parse_chain(parse: Pair<'_, Rule>) -> Polynomial {
        let mut pairs = parse.into_inner();
        let first = pairs.next().expect(INVARIANT_ERROR);
        let mut acc = Polynomial::Leaf(PolynomialParser::parse_term(first));

        while let Some(op) = pairs.next() {
            let operation = PolynomialParser::parse_operation(op);
            let term = PolynomialParser::parse_term(pairs.next().expect(INVARIANT_ERROR));
            trace!("folding {operation:?} {term:?}");
            acc = match operation {
                Operation::Addition => Polynomial::Sum(Box::new(acc), term),
                Operation::Subtraction => Polynomial::Difference(Box::new(acc), term),
            };
        }
        acc
    }

    // assumes the parses rule is Rule::additive_op
    fn parse_operation(parse: Pair<'_, Rule>) -> Operation {
        match parse.as_str() {
            "+" => Operation::Addition,
            "-" => Operation::Subtraction,
            _ => panic!("{}", INVARIANT_ERROR),
        }
    }

    // assumes the parses rule is Rule::term
    fn parse_term(parse: Pair<'_, Rule>) -> Term {
        assert_eq!(parse.as_rule(), Rule::term);
        let shape = parse.into_inner().next().expect(INVARIANT_ERROR);
        let rule = shape.as_rule();
        let mut pairs = shape.into_inner();
        match rule {
            Rule::coeff_var_exp => {
                let coeff = pairs.next().expect(INVARIANT_ERROR);
                let exp = pairs.next().expect(INVARIANT_ERROR);
                Term::CoeffVarExp(
                    PolynomialParser::parse_coefficient(coeff.as_str()),
                    PolynomialParser::parse_exponent(exp.as_str()),
                )
            }
            Rule::coeff_var => Term::CoeffVar(PolynomialParser::parse_coefficient(
                pairs.next().expect(INVARIANT_ERROR).as_str(),
            )),
            Rule::coeff => Term::Coeff(PolynomialParser::parse_coefficient(
                pairs.next().expect(INVARIANT_ERROR).as_str(),
            )),
            Rule::var_exp => Term::VarExp(PolynomialParser::parse_exponent(
                pairs.next().expect(INVARIANT_ERROR).as_str(),
            )),
            Rule::var => Term::Var,
            _ => panic!("{}", INVARIANT_ERROR),
        }
    }

    // assumes the input can be parsed as a singular Rule::coefficient nonterminal
    pub fn parse_coefficient(input: &str) -> Coefficient {
        input.parse::<Coefficient>().expect(INVARIANT_ERROR)
    }

    // assumes the input can be parsed as a singular Rule::exponent nonterminal
    pub fn parse_exponent(input: &str) -> Exponent {
        input.parse::<Exponent>().expect(INVARIANT_ERROR)
    }
}
