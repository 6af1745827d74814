/*! Defines [`Sig`] to represent the signature of first-order formulae.

[`Sig`]: crate::syntax::Sig
*/
use super::{Const, Error, Func, Pred};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Contains the signature information for a function symbol.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FuncSig {
    /// Is the function symbol.
    pub symbol: Func,

    /// Is the arity of the function.
    pub arity: u8,
}

impl fmt::Display for FuncSig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "function: {}, arity: {}", self.symbol, self.arity)
    }
}

/// Contains the signature information for a predicate symbol.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PredSig {
    /// Is the predicate symbol.
    pub symbol: Pred,

    /// Is the arity of the predicate.
    pub arity: u8,
}

impl fmt::Display for PredSig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "predicate: {}, arity: {}", self.symbol, self.arity)
    }
}

/// Is the signature of the symbols appearing in a first-order formula.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Sig {
    /// Is the set of constant symbols.
    constants: HashSet<Const>,

    /// Is the signature of function symbols.
    functions: HashMap<Func, FuncSig>,

    /// Is the signature of predicate symbols.
    predicates: HashMap<Pred, PredSig>,
}

impl Sig {
    /// Creates an empty signature.
    pub(crate) fn new() -> Self {
        Self {
            constants: HashSet::new(),
            functions: HashMap::new(),
            predicates: HashMap::new(),
        }
    }

    /// Inserts a constant in the receiver signature.
    pub(crate) fn add_constant(&mut self, constant: Const) {
        self.constants.insert(constant);
    }

    /// Adds the signature of a function to the receiver, failing if the function
    /// symbol is already present with a different arity.
    pub(crate) fn add_function(&mut self, function: FuncSig) -> Result<(), Error> {
        if let Some(sig) = self.functions.get(&function.symbol) {
            if *sig != function {
                return Err(Error::InconsistentFuncSig {
                    this: sig.clone(),
                    other: function,
                });
            }
        } else {
            self.functions.insert(function.symbol.clone(), function);
        }
        Ok(())
    }

    /// Adds the signature of a predicate to the receiver, failing if the predicate
    /// symbol is already present with a different arity.
    pub(crate) fn add_predicate(&mut self, predicate: PredSig) -> Result<(), Error> {
        if let Some(sig) = self.predicates.get(&predicate.symbol) {
            if *sig != predicate {
                return Err(Error::InconsistentPredSig {
                    this: sig.clone(),
                    other: predicate,
                });
            }
        } else {
            self.predicates.insert(predicate.symbol.clone(), predicate);
        }
        Ok(())
    }

    /// Returns a signature that combines the receiver with the signature of `other`.
    pub(crate) fn merge(mut self, other: Self) -> Result<Self, Error> {
        for c in other.constants {
            self.add_constant(c);
        }
        for f in other.functions.into_iter().map(|(_, sig)| sig) {
            self.add_function(f)?;
        }
        for p in other.predicates.into_iter().map(|(_, sig)| sig) {
            self.add_predicate(p)?;
        }
        Ok(self)
    }

    /// Returns the constants of the receiver signature.
    pub fn constants(&self) -> &HashSet<Const> {
        &self.constants
    }

    /// Returns the functions of the receiver signature.
    pub fn functions(&self) -> &HashMap<Func, FuncSig> {
        &self.functions
    }

    /// Returns the predicates of the receiver signature.
    pub fn predicates(&self) -> &HashMap<Pred, PredSig> {
        &self.predicates
    }
}

impl Default for Sig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Fof, Formula};

    #[test]
    fn merge_consistent_signatures() {
        let mut first = Sig::new();
        first.add_constant(Const::from("a"));
        first
            .add_function(FuncSig {
                symbol: Func::from("f"),
                arity: 2,
            })
            .unwrap();

        let mut second = Sig::new();
        second
            .add_function(FuncSig {
                symbol: Func::from("f"),
                arity: 2,
            })
            .unwrap();
        second
            .add_predicate(PredSig {
                symbol: Pred::from("P"),
                arity: 1,
            })
            .unwrap();

        let merged = first.merge(second).unwrap();
        assert_eq!(1, merged.constants().len());
        assert_eq!(1, merged.functions().len());
        assert_eq!(1, merged.predicates().len());
    }

    #[test]
    fn merge_inconsistent_function_arity() {
        let mut first = Sig::new();
        first
            .add_function(FuncSig {
                symbol: Func::from("f"),
                arity: 1,
            })
            .unwrap();

        let mut second = Sig::new();
        second
            .add_function(FuncSig {
                symbol: Func::from("f"),
                arity: 2,
            })
            .unwrap();

        assert!(first.merge(second).is_err());
    }

    #[test]
    fn formula_signature() {
        let formula: Fof = "P(f(x, 'a)) & Q(x, 'b)".parse().unwrap();
        let sig = formula.signature().unwrap();
        assert_eq!(2, sig.constants().len());
        assert_eq!(2, sig.functions().get(&Func::from("f")).unwrap().arity);
        assert_eq!(1, sig.predicates().get(&Pred::from("P")).unwrap().arity);
        assert_eq!(2, sig.predicates().get(&Pred::from("Q")).unwrap().arity);
    }

    #[test]
    fn formula_inconsistent_predicate_arity() {
        let formula: Fof = "P(x) & P(x, y)".parse().unwrap();
        assert!(formula.signature().is_err());
    }
}
