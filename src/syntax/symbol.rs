/*! Defines the symbol types [`Var`], [`Const`], [`Func`] and [`Pred`] from which terms
and formulae are built.

[`Var`]: crate::syntax::Var
[`Const`]: crate::syntax::Const
[`Func`]: crate::syntax::Func
[`Pred`]: crate::syntax::Pred
*/

use super::{
    formula::{fof::Fof, Atom},
    term::Term,
};
use std::fmt;

/// Represents a variable symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Var(String);

impl Var {
    /// Returns the name of the receiver symbol.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for Var {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a constant symbol with a given name.
///
/// **Note**: Although nullary functions could act as constants, the two are
/// distinguished at the syntactic level.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Const(String);

impl Const {
    /// Returns the name of the receiver symbol.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for Const {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Const {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}", self.0)
    }
}

impl fmt::Debug for Const {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}", self.0)
    }
}

/// Represents an uninterpreted function symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Func(String);

impl Func {
    /// Returns the name of the receiver symbol.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Applies the receiver on a list of terms. The length of `terms` is assumed
    /// to be the arity of the function; no arity is enforced by construction.
    pub fn app(self, terms: Vec<Term>) -> Term {
        Term::App {
            function: self,
            terms,
        }
    }
}

impl<S: Into<String>> From<S> for Func {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a predicate symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Pred(String);

impl Pred {
    /// Returns the name of the receiver symbol.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Applies the receiver on a list of terms to build an atomic formula. The
    /// length of `terms` is assumed to be the arity of the predicate.
    pub fn app(self, terms: Vec<Term>) -> Fof {
        Atom {
            predicate: self,
            terms,
        }
        .into()
    }
}

impl<S: Into<String>> From<S> for Pred {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn var_to_string() {
        assert_eq!("x", Var::from("x").to_string());
        assert_eq!("y_12", Var::from("y_12").to_string());
    }

    #[test]
    fn const_to_string() {
        assert_eq!("'a", Const::from("a").to_string());
    }

    #[test]
    fn func_to_string() {
        assert_eq!("f", Func::from("f").to_string());
    }

    #[test]
    fn pred_to_string() {
        assert_eq!("P", Pred::from("P").to_string());
    }
}
