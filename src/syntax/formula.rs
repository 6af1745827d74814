/*! Defines the building blocks of formulae: the [`Formula`] trait and the generic
connective types that the concrete formula types share.

[`Formula`]: crate::syntax::Formula
*/
pub mod clause;
pub mod fof;
pub mod qff;

use super::signature::PredSig;
pub use super::{Error, Pred, Sig, Term, Var};
use itertools::Itertools;
use std::fmt;

/// Is the precedence of quantified formulae.
pub const PRECEDENCE_EXISTS: u8 = 0;
/// Is the precedence of quantified formulae.
pub const PRECEDENCE_FORALL: u8 = 0;
/// Is the precedence of bi-implications.
pub const PRECEDENCE_IFF: u8 = 1;
/// Is the precedence of implications.
pub const PRECEDENCE_IMPLIES: u8 = 2;
/// Is the precedence of disjunctions.
pub const PRECEDENCE_OR: u8 = 3;
/// Is the precedence of conjunctions.
pub const PRECEDENCE_AND: u8 = 4;
/// Is the precedence of negations.
pub const PRECEDENCE_NOT: u8 = 5;
/// Is the precedence of atomic formulae.
pub const PRECEDENCE_ATOM: u8 = 6;

/// Is the trait of formula types.
pub trait Formula {
    /// Returns the signature of the symbols in the receiver, or an error if
    /// a symbol is used with inconsistent arities.
    fn signature(&self) -> Result<Sig, Error>;

    /// Returns a list of the free variable symbols in the receiver.
    ///
    /// **Note**: each variable symbol appears only once in the result, even if it
    /// occurs at multiple positions of the receiver.
    fn free_vars(&self) -> Vec<&Var>;

    /// Applies a transformation function `f` on the terms of the receiver.
    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self;
}

/// Is the trait of formula types that know their syntactic precedence, used for
/// minimally parenthesized printing.
pub trait FormulaEx: Formula {
    /// Returns the precedence of the receiver's outermost connective.
    fn precedence(&self) -> u8;
}

// Operands of binary connectives and quantifiers are parenthesized unless atomic
// or negated; operands of negation are parenthesized unless atomic.
fn display_operand(operand: &(impl FormulaEx + fmt::Display), threshold: u8) -> String {
    if operand.precedence() < threshold {
        format!("({})", operand)
    } else {
        operand.to_string()
    }
}

fn debug_operand(operand: &(impl FormulaEx + fmt::Debug), threshold: u8) -> String {
    if operand.precedence() < threshold {
        format!("({:?})", operand)
    } else {
        format!("{:?}", operand)
    }
}

/// Represents an atomic formula, obtained by applying a predicate on a list of terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom {
    /// Is the predicate that is applied on the terms of the receiver.
    pub predicate: Pred,

    /// Is the list of terms on which the predicate is applied.
    pub terms: Vec<Term>,
}

impl Formula for Atom {
    fn signature(&self) -> Result<Sig, Error> {
        let mut sig = Sig::new();
        for term in &self.terms {
            sig = sig.merge(term.signature()?)?;
        }
        sig.add_predicate(PredSig {
            symbol: self.predicate.clone(),
            arity: self.terms.len() as u8,
        })?;
        Ok(sig)
    }

    fn free_vars(&self) -> Vec<&Var> {
        self.terms
            .iter()
            .flat_map(|t| t.free_vars())
            .unique()
            .collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Self {
            predicate: self.predicate.clone(),
            terms: self.terms.iter().map(f).collect(),
        }
    }
}

impl FormulaEx for Atom {
    fn precedence(&self) -> u8 {
        PRECEDENCE_ATOM
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let terms = self.terms.iter().map(|t| t.to_string()).collect_vec();
        write!(f, "{}({})", self.predicate, terms.join(", "))
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Represents the negation of a formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Not<F> {
    /// Is the negated formula.
    pub formula: F,
}

impl<F: Formula> Formula for Not<F> {
    fn signature(&self) -> Result<Sig, Error> {
        self.formula.signature()
    }

    fn free_vars(&self) -> Vec<&Var> {
        self.formula.free_vars()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Self {
            formula: self.formula.transform_term(f),
        }
    }
}

impl<F: Formula> FormulaEx for Not<F> {
    fn precedence(&self) -> u8 {
        PRECEDENCE_NOT
    }
}

impl<F: FormulaEx + fmt::Display> fmt::Display for Not<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "¬{}", display_operand(&self.formula, PRECEDENCE_ATOM))
    }
}

impl<F: FormulaEx + fmt::Debug> fmt::Debug for Not<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "~{}", debug_operand(&self.formula, PRECEDENCE_ATOM))
    }
}

/// Represents the conjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct And<F> {
    /// Is the formula on the left of the conjunction.
    pub left: F,

    /// Is the formula on the right of the conjunction.
    pub right: F,
}

impl<F: Formula> Formula for And<F> {
    fn signature(&self) -> Result<Sig, Error> {
        self.left.signature()?.merge(self.right.signature()?)
    }

    fn free_vars(&self) -> Vec<&Var> {
        let mut vs = self.left.free_vars();
        vs.extend(self.right.free_vars());
        vs.into_iter().unique().collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Self {
            left: self.left.transform_term(f),
            right: self.right.transform_term(f),
        }
    }
}

impl<F: Formula> FormulaEx for And<F> {
    fn precedence(&self) -> u8 {
        PRECEDENCE_AND
    }
}

impl<F: FormulaEx + fmt::Display> fmt::Display for And<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ∧ {}",
            display_operand(&self.left, PRECEDENCE_NOT),
            display_operand(&self.right, PRECEDENCE_NOT)
        )
    }
}

impl<F: FormulaEx + fmt::Debug> fmt::Debug for And<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} & {}",
            debug_operand(&self.left, PRECEDENCE_NOT),
            debug_operand(&self.right, PRECEDENCE_NOT)
        )
    }
}

/// Represents the disjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Or<F> {
    /// Is the formula on the left of the disjunction.
    pub left: F,

    /// Is the formula on the right of the disjunction.
    pub right: F,
}

impl<F: Formula> Formula for Or<F> {
    fn signature(&self) -> Result<Sig, Error> {
        self.left.signature()?.merge(self.right.signature()?)
    }

    fn free_vars(&self) -> Vec<&Var> {
        let mut vs = self.left.free_vars();
        vs.extend(self.right.free_vars());
        vs.into_iter().unique().collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Self {
            left: self.left.transform_term(f),
            right: self.right.transform_term(f),
        }
    }
}

impl<F: Formula> FormulaEx for Or<F> {
    fn precedence(&self) -> u8 {
        PRECEDENCE_OR
    }
}

impl<F: FormulaEx + fmt::Display> fmt::Display for Or<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ∨ {}",
            display_operand(&self.left, PRECEDENCE_NOT),
            display_operand(&self.right, PRECEDENCE_NOT)
        )
    }
}

impl<F: FormulaEx + fmt::Debug> fmt::Debug for Or<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} | {}",
            debug_operand(&self.left, PRECEDENCE_NOT),
            debug_operand(&self.right, PRECEDENCE_NOT)
        )
    }
}

/// Represents an implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implies<F> {
    /// Is the premise of the implication.
    pub premise: F,

    /// Is the consequence of the implication.
    pub consequence: F,
}

impl<F: Formula> Formula for Implies<F> {
    fn signature(&self) -> Result<Sig, Error> {
        self.premise.signature()?.merge(self.consequence.signature()?)
    }

    fn free_vars(&self) -> Vec<&Var> {
        let mut vs = self.premise.free_vars();
        vs.extend(self.consequence.free_vars());
        vs.into_iter().unique().collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Self {
            premise: self.premise.transform_term(f),
            consequence: self.consequence.transform_term(f),
        }
    }
}

impl<F: Formula> FormulaEx for Implies<F> {
    fn precedence(&self) -> u8 {
        PRECEDENCE_IMPLIES
    }
}

impl<F: FormulaEx + fmt::Display> fmt::Display for Implies<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} → {}",
            display_operand(&self.premise, PRECEDENCE_NOT),
            display_operand(&self.consequence, PRECEDENCE_NOT)
        )
    }
}

impl<F: FormulaEx + fmt::Debug> fmt::Debug for Implies<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            debug_operand(&self.premise, PRECEDENCE_NOT),
            debug_operand(&self.consequence, PRECEDENCE_NOT)
        )
    }
}

/// Represents a bi-implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iff<F> {
    /// Is the formula on the left of the bi-implication.
    pub left: F,

    /// Is the formula on the right of the bi-implication.
    pub right: F,
}

impl<F: Formula> Formula for Iff<F> {
    fn signature(&self) -> Result<Sig, Error> {
        self.left.signature()?.merge(self.right.signature()?)
    }

    fn free_vars(&self) -> Vec<&Var> {
        let mut vs = self.left.free_vars();
        vs.extend(self.right.free_vars());
        vs.into_iter().unique().collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Self {
            left: self.left.transform_term(f),
            right: self.right.transform_term(f),
        }
    }
}

impl<F: Formula> FormulaEx for Iff<F> {
    fn precedence(&self) -> u8 {
        PRECEDENCE_IFF
    }
}

impl<F: FormulaEx + fmt::Display> fmt::Display for Iff<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ⇔ {}",
            display_operand(&self.left, PRECEDENCE_NOT),
            display_operand(&self.right, PRECEDENCE_NOT)
        )
    }
}

impl<F: FormulaEx + fmt::Debug> fmt::Debug for Iff<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} <=> {}",
            debug_operand(&self.left, PRECEDENCE_NOT),
            debug_operand(&self.right, PRECEDENCE_NOT)
        )
    }
}

/// Represents an existentially quantified formula, binding a single variable.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exists<F> {
    /// Is the variable bound by the quantifier.
    pub variable: Var,

    /// Is the scope of the quantifier.
    pub formula: F,
}

impl<F: Formula> Formula for Exists<F> {
    fn signature(&self) -> Result<Sig, Error> {
        self.formula.signature()
    }

    fn free_vars(&self) -> Vec<&Var> {
        self.formula
            .free_vars()
            .into_iter()
            .filter(|v| self.variable != **v)
            .collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Self {
            variable: self.variable.clone(),
            formula: self.formula.transform_term(f),
        }
    }
}

impl<F: Formula> FormulaEx for Exists<F> {
    fn precedence(&self) -> u8 {
        PRECEDENCE_EXISTS
    }
}

impl<F: FormulaEx + fmt::Display> fmt::Display for Exists<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "∃ {}. {}",
            self.variable,
            display_operand(&self.formula, PRECEDENCE_NOT)
        )
    }
}

impl<F: FormulaEx + fmt::Debug> fmt::Debug for Exists<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "? {}. {}",
            self.variable,
            debug_operand(&self.formula, PRECEDENCE_NOT)
        )
    }
}

/// Represents a universally quantified formula, binding a single variable.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Forall<F> {
    /// Is the variable bound by the quantifier.
    pub variable: Var,

    /// Is the scope of the quantifier.
    pub formula: F,
}

impl<F: Formula> Formula for Forall<F> {
    fn signature(&self) -> Result<Sig, Error> {
        self.formula.signature()
    }

    fn free_vars(&self) -> Vec<&Var> {
        self.formula
            .free_vars()
            .into_iter()
            .filter(|v| self.variable != **v)
            .collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Self {
            variable: self.variable.clone(),
            formula: self.formula.transform_term(f),
        }
    }
}

impl<F: Formula> FormulaEx for Forall<F> {
    fn precedence(&self) -> u8 {
        PRECEDENCE_FORALL
    }
}

impl<F: FormulaEx + fmt::Display> fmt::Display for Forall<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "∀ {}. {}",
            self.variable,
            display_operand(&self.formula, PRECEDENCE_NOT)
        )
    }
}

impl<F: FormulaEx + fmt::Debug> fmt::Debug for Forall<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "! {}. {}",
            self.variable,
            debug_operand(&self.formula, PRECEDENCE_NOT)
        )
    }
}
