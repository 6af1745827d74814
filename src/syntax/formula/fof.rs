/*! Defines the syntax of full first-order formulae. */
use super::*;
use std::fmt;

/// Is an abstract syntax tree (AST) for first-order formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fof {
    /// Is an atomic first-order formula, wrapping an [`Atom`].
    Atom(Atom),

    /// Is the negation of a first-order formula, wrapping a [`Not`].
    Not(Box<Not<Fof>>),

    /// Is a conjunction of two first-order formulae, wrapping an [`And`].
    And(Box<And<Fof>>),

    /// Is a disjunction of two first-order formulae, wrapping an [`Or`].
    Or(Box<Or<Fof>>),

    /// Is an implication between two first-order formulae, wrapping an [`Implies`].
    Implies(Box<Implies<Fof>>),

    /// Is a bi-implication between two first-order formulae, wrapping an [`Iff`].
    Iff(Box<Iff<Fof>>),

    /// Is an existentially quantified first-order formula, wrapping an [`Exists`].
    Exists(Box<Exists<Fof>>),

    /// Is a universally quantified first-order formula, wrapping a [`Forall`].
    Forall(Box<Forall<Fof>>),
}

impl From<Atom> for Fof {
    fn from(value: Atom) -> Self {
        Self::Atom(value)
    }
}

impl From<Not<Fof>> for Fof {
    fn from(value: Not<Fof>) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<And<Fof>> for Fof {
    fn from(value: And<Fof>) -> Self {
        Self::And(Box::new(value))
    }
}

impl From<Or<Fof>> for Fof {
    fn from(value: Or<Fof>) -> Self {
        Self::Or(Box::new(value))
    }
}

impl From<Implies<Fof>> for Fof {
    fn from(value: Implies<Fof>) -> Self {
        Self::Implies(Box::new(value))
    }
}

impl From<Iff<Fof>> for Fof {
    fn from(value: Iff<Fof>) -> Self {
        Self::Iff(Box::new(value))
    }
}

impl From<Exists<Fof>> for Fof {
    fn from(value: Exists<Fof>) -> Self {
        Self::Exists(Box::new(value))
    }
}

impl From<Forall<Fof>> for Fof {
    fn from(value: Forall<Fof>) -> Self {
        Self::Forall(Box::new(value))
    }
}

impl Fof {
    /// Returns the negation of `formula`.
    #[allow(clippy::should_implement_trait)]
    // Disallow `formula.not()` intentionally:
    #[inline(always)]
    pub fn not(formula: Self) -> Self {
        Not { formula }.into()
    }

    /// Returns an existentially quantified formula that binds `variable` over `formula`.
    #[inline(always)]
    pub fn exists(variable: Var, formula: Self) -> Self {
        Exists { variable, formula }.into()
    }

    /// Returns a universally quantified formula that binds `variable` over `formula`.
    #[inline(always)]
    pub fn forall(variable: Var, formula: Self) -> Self {
        Forall { variable, formula }.into()
    }

    /// Returns a conjunction of the receiver and `other`.
    #[inline(always)]
    pub fn and(self, other: Self) -> Self {
        And {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns a disjunction of the receiver and `other`.
    #[inline(always)]
    pub fn or(self, other: Self) -> Self {
        Or {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns an implication with the receiver as premise and `other` as consequence.
    #[inline(always)]
    pub fn implies(self, other: Self) -> Self {
        Implies {
            premise: self,
            consequence: other,
        }
        .into()
    }

    /// Returns a bi-implication between the receiver and `other`.
    #[inline(always)]
    pub fn iff(self, other: Self) -> Self {
        Iff {
            left: self,
            right: other,
        }
        .into()
    }
}

impl Formula for Fof {
    fn signature(&self) -> Result<Sig, Error> {
        match self {
            Self::Atom(this) => this.signature(),
            Self::Not(this) => this.signature(),
            Self::And(this) => this.signature(),
            Self::Or(this) => this.signature(),
            Self::Implies(this) => this.signature(),
            Self::Iff(this) => this.signature(),
            Self::Exists(this) => this.signature(),
            Self::Forall(this) => this.signature(),
        }
    }

    fn free_vars(&self) -> Vec<&Var> {
        match self {
            Self::Atom(this) => this.free_vars(),
            Self::Not(this) => this.free_vars(),
            Self::And(this) => this.free_vars(),
            Self::Or(this) => this.free_vars(),
            Self::Implies(this) => this.free_vars(),
            Self::Iff(this) => this.free_vars(),
            Self::Exists(this) => this.free_vars(),
            Self::Forall(this) => this.free_vars(),
        }
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        match self {
            Self::Atom(this) => this.transform_term(f).into(),
            Self::Not(this) => this.transform_term(f).into(),
            Self::And(this) => this.transform_term(f).into(),
            Self::Or(this) => this.transform_term(f).into(),
            Self::Implies(this) => this.transform_term(f).into(),
            Self::Iff(this) => this.transform_term(f).into(),
            Self::Exists(this) => this.transform_term(f).into(),
            Self::Forall(this) => this.transform_term(f).into(),
        }
    }
}

impl FormulaEx for Fof {
    fn precedence(&self) -> u8 {
        match self {
            Self::Atom(this) => this.precedence(),
            Self::Not(this) => this.precedence(),
            Self::And(this) => this.precedence(),
            Self::Or(this) => this.precedence(),
            Self::Implies(this) => this.precedence(),
            Self::Iff(this) => this.precedence(),
            Self::Exists(this) => this.precedence(),
            Self::Forall(this) => this.precedence(),
        }
    }
}

impl fmt::Display for Fof {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Atom(this) => this.fmt(f),
            Self::Not(this) => this.fmt(f),
            Self::And(this) => this.fmt(f),
            Self::Or(this) => this.fmt(f),
            Self::Implies(this) => this.fmt(f),
            Self::Iff(this) => this.fmt(f),
            Self::Exists(this) => this.fmt(f),
            Self::Forall(this) => this.fmt(f),
        }
    }
}

impl fmt::Debug for Fof {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Atom(this) => this.fmt(f),
            Self::Not(this) => this.fmt(f),
            Self::And(this) => this.fmt(f),
            Self::Or(this) => this.fmt(f),
            Self::Implies(this) => this.fmt(f),
            Self::Iff(this) => this.fmt(f),
            Self::Exists(this) => this.fmt(f),
            Self::Forall(this) => this.fmt(f),
        }
    }
}
