use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "parsers/grammars/polynomial.pest"]
pub struct PolynomialPestParser;

#[cfg(test)]
mod tests {
    use super::PolynomialPestParser;
    use super::Rule;
    use pest::Parser;
    use pest::{consumes_to, parses_to};

    #[test]
    fn term_alternatives() {
        parses_to! {
            parser: PolynomialPestParser,
            input: "2x^3",
            rule: Rule::term,
            tokens: [
                term(0, 4, [
                    coeff_var_exp(0, 4, [
                        coefficient(0, 1),
                        exponent(3, 4),
                    ])
                ])
            ]
        };

        parses_to! {
            parser: PolynomialPestParser,
            input: "1.5x",
            rule: Rule::term,
            tokens: [
                term(0, 4, [
                    coeff_var(0, 4, [
                        coefficient(0, 3),
                    ])
                ])
            ]
        };

        parses_to! {
            parser: PolynomialPestParser,
            input: "42",
            rule: Rule::term,
            tokens: [
                term(0, 2, [
                    coeff(0, 2, [
                        coefficient(0, 2),
                    ])
                ])
            ]
        };

        parses_to! {
            parser: PolynomialPestParser,
            input: "x^-12",
            rule: Rule::term,
            tokens: [
                term(0, 5, [
                    var_exp(0, 5, [
                        exponent(2, 5),
                    ])
                ])
            ]
        };

        parses_to! {
            parser: PolynomialPestParser,
            input: "x",
            rule: Rule::term,
            tokens: [
                term(0, 1, [
                    var(0, 1),
                ])
            ]
        };
    }

    #[test]
    fn chain_is_flat() {
        parses_to! {
            parser: PolynomialPestParser,
            input: "x+2-3x",
            rule: Rule::polynomial,
            tokens: [
                polynomial(0, 6, [
                    chain(0, 6, [
                        term(0, 1, [
                            var(0, 1),
                        ]),
                        additive_op(1, 2),
                        term(2, 3, [
                            coeff(2, 3, [
                                coefficient(2, 3),
                            ])
                        ]),
                        additive_op(3, 4),
                        term(4, 6, [
                            coeff_var(4, 6, [
                                coefficient(4, 5),
                            ])
                        ]),
                    ]),
                    EOI(6, 6)
                ])
            ]
        };
    }

    #[test]
    fn negation_takes_whole_remainder() {
        parses_to! {
            parser: PolynomialPestParser,
            input: "-x+2",
            rule: Rule::polynomial,
            tokens: [
                polynomial(0, 4, [
                    negation(0, 4, [
                        chain(1, 4, [
                            term(1, 2, [
                                var(1, 2),
                            ]),
                            additive_op(2, 3),
                            term(3, 4, [
                                coeff(3, 4, [
                                    coefficient(3, 4),
                                ])
                            ]),
                        ])
                    ]),
                    EOI(4, 4)
                ])
            ]
        };
    }

    #[test]
    fn whitespace_between_operators() {
        parses_to! {
            parser: PolynomialPestParser,
            input: "- x + 1",
            rule: Rule::polynomial,
            tokens: [
                polynomial(0, 7, [
                    negation(0, 7, [
                        chain(2, 7, [
                            term(2, 3, [
                                var(2, 3),
                            ]),
                            additive_op(4, 5),
                            term(6, 7, [
                                coeff(6, 7, [
                                    coefficient(6, 7),
                                ])
                            ]),
                        ])
                    ]),
                    EOI(7, 7)
                ])
            ]
        };
    }

    #[test]
    fn invalid_polynomials() {
        let inputs = vec!["", "x^", "2x^x", "++", "x+", "2.", "2 x", "x ^2", ".5", "x+-1", "2x^1.5"];
        for input in inputs {
            assert!(
                PolynomialPestParser::parse(Rule::polynomial, input).is_err(),
                "{input:?} should not parse"
            );
        }
    }
}
