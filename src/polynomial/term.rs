use std::fmt;
use std::str::FromStr;

/// Non-negative decimal literal multiplying the variable.
#[derive(Default, PartialEq, PartialOrd, Clone, Copy)]
pub struct Coefficient(pub f64);

/// Signed integer power of the variable.
///
/// Held as `f64` so that overlong literals saturate instead of failing; the
/// grammar guarantees the value is integral.
#[derive(Default, PartialEq, PartialOrd, Clone, Copy)]
pub struct Exponent(pub f64);

// -0.0 + 0.0 == +0.0, keeps "-0" out of derivative text
pub(crate) fn render(value: f64) -> String {
    (value + 0.0).to_string()
}

macro_rules! literal_newtype {
    ($name:ident) => {
        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&self.0, f)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&render(self.0))
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseFloatError;

            fn from_str(src: &str) -> Result<Self, Self::Err> {
                src.parse::<f64>().map($name)
            }
        }

        impl From<f64> for $name {
            fn from(val: f64) -> Self {
                $name(val)
            }
        }
    };
}

literal_newtype!(Coefficient);
literal_newtype!(Exponent);

/// A single additive unit of a polynomial.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Term {
    /// `cx^e`
    CoeffVarExp(Coefficient, Exponent),
    /// `cx`
    CoeffVar(Coefficient),
    /// `c`
    Coeff(Coefficient),
    /// `x^e`
    VarExp(Exponent),
    /// `x`
    Var,
}

impl Term {
    /// Derivative of the term as literal text, e.g. `3x^4` gives `12x^3`.
    ///
    /// Nothing is simplified: `x^1` differentiates to `1x^0`.
    pub fn derivative(&self) -> String {
        match self {
            Term::CoeffVarExp(c, e) => format!("{}x^{}", render(e.0 * c.0), render(e.0 - 1.0)),
            Term::CoeffVar(c) => c.to_string(),
            Term::Coeff(_) => "0".to_owned(),
            Term::VarExp(e) => format!("{}x^{}", e, render(e.0 - 1.0)),
            Term::Var => "1".to_owned(),
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Term::CoeffVarExp(c, e) => c.0 * x.powf(e.0),
            Term::CoeffVar(c) => c.0 * x,
            Term::Coeff(c) => c.0,
            Term::VarExp(e) => x.powf(e.0),
            Term::Var => x,
        }
    }
}
