/*! Defines formulae in Negation Normal Form (NNF) and implements an algorithm for
transforming an [`Fof`] to an [`Nnf`].

[`Fof`]: crate::syntax::Fof
*/
use crate::syntax::{
    formula::{clause::Literal, And, Atom, Exists, Forall, FormulaEx, Not, Or},
    Error, Fof, Formula, Sig, Term, Var,
};

/// Represents a formula in Negation Normal Form (NNF).
///
/// **Hint**: An NNF is a formula where negation is applied only to its atomic
/// sub-formulae.
#[derive(PartialEq, Clone)]
pub enum Nnf {
    /// Is a literal, wrapping a [`Literal`].
    Literal(Literal),

    /// Is a conjunction of two formulae, wrapping an [`And`].
    And(Box<And<Nnf>>),

    /// Is a disjunction of two formulae, wrapping an [`Or`].
    Or(Box<Or<Nnf>>),

    /// Is an existentially quantified NNF, wrapping an [`Exists`].
    Exists(Box<Exists<Nnf>>),

    /// Is a universally quantified NNF, wrapping a [`Forall`].
    Forall(Box<Forall<Nnf>>),
}

impl From<Atom> for Nnf {
    fn from(value: Atom) -> Self {
        Self::Literal(value.into())
    }
}

impl From<Not<Atom>> for Nnf {
    fn from(value: Not<Atom>) -> Self {
        Self::Literal(value.into())
    }
}

impl From<And<Nnf>> for Nnf {
    fn from(value: And<Nnf>) -> Self {
        Self::And(value.into())
    }
}

impl From<Or<Nnf>> for Nnf {
    fn from(value: Or<Nnf>) -> Self {
        Self::Or(value.into())
    }
}

impl From<Exists<Nnf>> for Nnf {
    fn from(value: Exists<Nnf>) -> Self {
        Self::Exists(Box::new(value))
    }
}

impl From<Forall<Nnf>> for Nnf {
    fn from(value: Forall<Nnf>) -> Self {
        Self::Forall(Box::new(value))
    }
}

impl From<Literal> for Nnf {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

/// Is the trait of [`Formula`] types that can be transformed to [`Nnf`].
pub trait ToNnf: Formula {
    /// Transforms `self` to a Negation Normal Form (NNF).
    ///
    /// **Example**:
    /// ```rust
    /// # use clausal::syntax::Fof;
    /// use clausal::transform::ToNnf;
    ///
    /// let formula: Fof = "not (P(x) iff Q(y))".parse().unwrap();
    /// let nnf = formula.nnf();
    ///
    /// assert_eq!("(P(x) ∧ ¬Q(y)) ∨ (¬P(x) ∧ Q(y))", nnf.to_string());
    /// ```
    fn nnf(&self) -> Nnf;
}

impl ToNnf for Fof {
    fn nnf(&self) -> Nnf {
        nnf(self)
    }
}

impl<T: ToNnf> From<T> for Nnf {
    fn from(value: T) -> Self {
        value.nnf()
    }
}

impl Nnf {
    #[inline(always)]
    fn neg(atom: Atom) -> Self {
        Literal::Neg(atom).into()
    }

    #[inline(always)]
    fn and(self, formula: Self) -> Self {
        And {
            left: self,
            right: formula,
        }
        .into()
    }

    #[inline(always)]
    fn or(self, formula: Self) -> Self {
        Or {
            left: self,
            right: formula,
        }
        .into()
    }

    #[inline(always)]
    fn exists(variable: Var, formula: Self) -> Self {
        Exists { variable, formula }.into()
    }

    #[inline(always)]
    fn forall(variable: Var, formula: Self) -> Self {
        Forall { variable, formula }.into()
    }
}

impl Formula for Nnf {
    fn signature(&self) -> Result<Sig, Error> {
        match self {
            Nnf::Literal(this) => this.signature(),
            Nnf::And(this) => this.signature(),
            Nnf::Or(this) => this.signature(),
            Nnf::Exists(this) => this.signature(),
            Nnf::Forall(this) => this.signature(),
        }
    }

    fn free_vars(&self) -> Vec<&Var> {
        match self {
            Self::Literal(this) => this.free_vars(),
            Self::And(this) => this.free_vars(),
            Self::Or(this) => this.free_vars(),
            Self::Exists(this) => this.free_vars(),
            Self::Forall(this) => this.free_vars(),
        }
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        match self {
            Self::Literal(this) => this.transform_term(f).into(),
            Self::And(this) => this.transform_term(f).into(),
            Self::Or(this) => this.transform_term(f).into(),
            Self::Exists(this) => this.transform_term(f).into(),
            Self::Forall(this) => this.transform_term(f).into(),
        }
    }
}

impl FormulaEx for Nnf {
    fn precedence(&self) -> u8 {
        match self {
            Nnf::Literal(this) => this.precedence(),
            Nnf::And(this) => this.precedence(),
            Nnf::Or(this) => this.precedence(),
            Nnf::Exists(this) => this.precedence(),
            Nnf::Forall(this) => this.precedence(),
        }
    }
}

impl std::fmt::Display for Nnf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Fof::from(self).fmt(f)
    }
}

impl std::fmt::Debug for Nnf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", Fof::from(self))
    }
}

impl From<Nnf> for Fof {
    fn from(value: Nnf) -> Self {
        match value {
            Nnf::Literal(lit) => lit.into(),
            Nnf::And(this) => Self::from(this.left).and(this.right.into()),
            Nnf::Or(this) => Self::from(this.left).or(this.right.into()),
            Nnf::Exists(this) => Self::exists(this.variable, this.formula.into()),
            Nnf::Forall(this) => Self::forall(this.variable, this.formula.into()),
        }
    }
}

impl From<&Nnf> for Fof {
    fn from(value: &Nnf) -> Self {
        value.clone().into()
    }
}

// Recursively pushes negation in the formula.
#[inline]
fn push_not(formula: &Fof) -> Nnf {
    match formula {
        Fof::Atom(this) => Nnf::neg(this.clone()),
        Fof::Not(this) => nnf(&this.formula),
        Fof::And(this) => nnf(&Fof::not(this.left.clone())).or(nnf(&Fof::not(this.right.clone()))),
        Fof::Or(this) => nnf(&Fof::not(this.left.clone())).and(nnf(&Fof::not(this.right.clone()))),
        Fof::Implies(this) => nnf(&this.premise).and(nnf(&Fof::not(this.consequence.clone()))),
        Fof::Iff(this) => {
            let left_and_not_right = nnf(&this.left).and(nnf(&Fof::not(this.right.clone())));
            let not_left_and_right = nnf(&Fof::not(this.left.clone())).and(nnf(&this.right));
            left_and_not_right.or(not_left_and_right)
        }
        Fof::Exists(this) => {
            Nnf::forall(this.variable.clone(), nnf(&Fof::not(this.formula.clone())))
        }
        Fof::Forall(this) => {
            Nnf::exists(this.variable.clone(), nnf(&Fof::not(this.formula.clone())))
        }
    }
}

fn nnf(fmla: &Fof) -> Nnf {
    match fmla {
        Fof::Atom(this) => this.clone().into(),
        Fof::Not(this) => push_not(&this.formula),
        Fof::And(this) => nnf(&this.left).and(nnf(&this.right)),
        Fof::Or(this) => nnf(&this.left).or(nnf(&this.right)),
        Fof::Implies(this) => nnf(&Fof::not(this.premise.clone())).or(nnf(&this.consequence)),
        Fof::Iff(this) => {
            let not_left_or_right = nnf(&Fof::not(this.left.clone())).or(nnf(&this.right));
            let left_or_not_right = nnf(&this.left).or(nnf(&Fof::not(this.right.clone())));
            not_left_or_right.and(left_or_not_right)
        }
        Fof::Exists(this) => Nnf::exists(this.variable.clone(), nnf(&this.formula)),
        Fof::Forall(this) => Nnf::forall(this.variable.clone(), nnf(&this.formula)),
    }
}
