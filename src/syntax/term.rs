/*! Defines the syntax of first-order terms. */

use super::{signature::FuncSig, Const, Error, Func, Sig, Var};
use itertools::Itertools;
use std::fmt;

/// Represents a first-order term, consisting of variables, constants and
/// function applications.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// Is a variable term, wrapping a [variable symbol].
    ///
    /// [variable symbol]: crate::syntax::Var
    Var { variable: Var },

    /// Is a constant term, wrapping a [constant symbol].
    ///
    /// [constant symbol]: crate::syntax::Const
    Const { constant: Const },

    /// Is a composite term, made by applying a `function` on a list of `terms`.
    App { function: Func, terms: Vec<Term> },
}

impl Term {
    /// Returns a list of all variable symbols in the receiver term.
    ///
    /// **Note**: each variable symbol appears only once in the result, even if it
    /// occurs at multiple positions of the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausal::syntax::{Var, Func, Term};
    /// let x = Var::from("x");
    /// let y = Var::from("y");
    ///
    /// // t = f(x, g(y, x)):
    /// let t = Func::from("f").app(vec![
    ///     Term::from(x.clone()),
    ///     Func::from("g").app(vec![Term::from(y.clone()), Term::from(x.clone())]),
    /// ]);
    ///
    /// assert_eq!(vec![&x, &y], t.free_vars());
    /// ```
    pub fn free_vars(&self) -> Vec<&Var> {
        match self {
            Self::Var { variable } => vec![variable],
            Self::Const { .. } => vec![],
            Self::App { terms, .. } => terms.iter().flat_map(|t| t.free_vars()).unique().collect(),
        }
    }

    /// Returns the signature of the function and constant symbols in the receiver,
    /// or an error if a function symbol is applied with inconsistent arities.
    pub(crate) fn signature(&self) -> Result<Sig, Error> {
        let mut sig = Sig::new();
        match self {
            Self::Var { .. } => {}
            Self::Const { constant } => sig.add_constant(constant.clone()),
            Self::App { function, terms } => {
                for term in terms {
                    sig = sig.merge(term.signature()?)?;
                }
                sig.add_function(FuncSig {
                    symbol: function.clone(),
                    arity: terms.len() as u8,
                })?;
            }
        }
        Ok(sig)
    }
}

impl From<Var> for Term {
    fn from(variable: Var) -> Self {
        Self::Var { variable }
    }
}

impl From<Const> for Term {
    fn from(constant: Const) -> Self {
        Self::Const { constant }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Var { variable } => write!(f, "{}", variable),
            Self::Const { constant } => write!(f, "{}", constant),
            Self::App { function, terms } => {
                let terms = terms.iter().map(|t| t.to_string()).collect_vec();
                write!(f, "{}({})", function, terms.join(", "))
            }
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
