#![deny(warnings)]
use polynomial_derivatives::{
    parsers::{polynomial::PolynomialParser, Parser},
    Polynomial,
};
use clap::{Parser as CLI, ValueEnum};

/// Differentiate or evaluate a polynomial in x
#[derive(CLI, Debug)]
#[command(arg_required_else_help(true), author, version, about)]
struct Cli {
    /// What to compute
    #[arg(value_enum)]
    mode: Mode,

    /// Polynomial in x, e.g. "3x^4-2x+1"
    #[arg(allow_hyphen_values = true)]
    polynomial: String,

    /// Point at which the polynomial is evaluated
    #[arg(allow_negative_numbers = true, required_if_eq("mode", "eval"))]
    x: Option<f64>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Mode {
    /// Print the first derivative
    Deriv,
    /// Print the value at x
    Eval,
}

struct CliError(String);

impl std::fmt::Debug for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn run(mode: Mode, polynomial: &Polynomial, x: Option<f64>) -> Result<String, CliError> {
    match mode {
        Mode::Deriv => Ok(polynomial.derivative()),
        Mode::Eval => {
            let x = x.ok_or_else(|| CliError("eval needs a value for x".to_owned()))?;
            Ok(polynomial.evaluate(x).to_string())
        }
    }
}

fn main() -> Result<(), CliError> {
    let args = Cli::parse();

    let polynomial = PolynomialParser::parse(args.polynomial.as_str())
        .map_err(|e| CliError(format!("{e}")))?;

    println!("{}", run(args.mode, &polynomial, args.x)?);
    Ok(())
}
