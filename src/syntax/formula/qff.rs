/*! Defines the syntax of quantifier-free formulae in negation normal form, the
shape of the matrix carried by [`Pnf`] and [`Snf`].

[`Pnf`]: crate::transform::Pnf
[`Snf`]: crate::transform::Snf
*/
use super::{clause::Literal, *};
use crate::syntax::Fof;
use std::fmt;

/// Is the type of quantifier-free formulae in negation normal form: [`Literal`]s,
/// combined by conjunctions and disjunctions only.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Qff {
    /// Is a literal, wrapping a [`Literal`].
    Literal(Literal),

    /// Is a conjunction of two quantifier-free formulae, wrapping an [`And`].
    And(Box<And<Qff>>),

    /// Is a disjunction of two quantifier-free formulae, wrapping an [`Or`].
    Or(Box<Or<Qff>>),
}

impl Qff {
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
}

impl From<Literal> for Qff {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<Atom> for Qff {
    fn from(value: Atom) -> Self {
        Self::Literal(Literal::Pos(value))
    }
}

impl From<And<Qff>> for Qff {
    fn from(value: And<Qff>) -> Self {
        Self::And(Box::new(value))
    }
}

impl From<Or<Qff>> for Qff {
    fn from(value: Or<Qff>) -> Self {
        Self::Or(Box::new(value))
    }
}

impl Formula for Qff {
    fn signature(&self) -> Result<Sig, Error> {
        match self {
            Self::Literal(this) => this.signature(),
            Self::And(this) => this.signature(),
            Self::Or(this) => this.signature(),
        }
    }

    fn free_vars(&self) -> Vec<&Var> {
        match self {
            Self::Literal(this) => this.free_vars(),
            Self::And(this) => this.free_vars(),
            Self::Or(this) => this.free_vars(),
        }
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        match self {
            Self::Literal(this) => Self::Literal(this.transform_term(f)),
            Self::And(this) => this.transform_term(f).into(),
            Self::Or(this) => this.transform_term(f).into(),
        }
    }
}

impl FormulaEx for Qff {
    fn precedence(&self) -> u8 {
        match self {
            Self::Literal(this) => this.precedence(),
            Self::And(this) => this.precedence(),
            Self::Or(this) => this.precedence(),
        }
    }
}

impl From<Qff> for Fof {
    fn from(value: Qff) -> Self {
        Fof::from(&value)
    }
}

impl From<&Qff> for Fof {
    fn from(value: &Qff) -> Self {
        match value {
            Qff::Literal(this) => this.into(),
            Qff::And(this) => {
                let left = Fof::from(&this.left);
                let right = Fof::from(&this.right);
                left.and(right)
            }
            Qff::Or(this) => {
                let left = Fof::from(&this.left);
                let right = Fof::from(&this.right);
                left.or(right)
            }
        }
    }
}

impl fmt::Display for Qff {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Fof::from(self).fmt(f)
    }
}

impl fmt::Debug for Qff {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", Fof::from(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Pred;

    fn atom(predicate: &str, var: &str) -> Atom {
        Atom {
            predicate: Pred::from(predicate),
            terms: vec![Term::from(Var::from(var))],
        }
    }

    #[test]
    fn qff_to_string() {
        let formula = Qff::from(atom("P", "x")).and(Qff::from(Literal::Neg(atom("Q", "y"))));
        assert_eq!("P(x) ∧ ¬Q(y)", formula.to_string());
        assert_eq!("P(x) & ~Q(y)", format!("{:?}", formula));

        let formula = Qff::from(atom("P", "x"))
            .or(Qff::from(atom("Q", "y")))
            .and(Qff::from(atom("R", "z")));
        assert_eq!("(P(x) | Q(y)) & R(z)", format!("{:?}", formula));
    }

    #[test]
    fn qff_free_vars() {
        let formula = Qff::from(atom("P", "x")).or(Qff::from(atom("Q", "x")));
        assert_eq!(vec![&Var::from("x")], formula.free_vars());
    }
}
