/*! Implements a prenex normal form (PNF) for formula types, where all quantifiers
are pulled to the front of a quantifier-free matrix. */
use super::{Error, Nnf};
use crate::syntax::{
    formula::{qff::Qff, Exists, Forall, FormulaEx, PRECEDENCE_EXISTS, PRECEDENCE_FORALL},
    Fof, Formula, Sig, Term, Var,
};
use std::{collections::HashSet, fmt};

/// Represents a formula in prenex normal form, a block of quantifiers over a
/// quantifier-free matrix.
#[derive(Clone, PartialEq)]
pub enum Pnf {
    /// Is the quantifier-free portion of the formula, wrapping a [`Qff`].
    Qff(Qff),

    /// Is an existentially quantified formula, wrapping an [`Exists`].
    Exists(Box<Exists<Pnf>>),

    /// Is a universally quantified formula, wrapping a [`Forall`].
    Forall(Box<Forall<Pnf>>),
}

impl From<Qff> for Pnf {
    fn from(value: Qff) -> Self {
        Self::Qff(value)
    }
}

impl From<Exists<Pnf>> for Pnf {
    fn from(value: Exists<Pnf>) -> Self {
        Self::Exists(Box::new(value))
    }
}

impl From<Forall<Pnf>> for Pnf {
    fn from(value: Forall<Pnf>) -> Self {
        Self::Forall(Box::new(value))
    }
}

/// Is the trait of types that can be transformed to a [`Pnf`].
pub trait ToPnf: Formula {
    /// Transforms the receiver to a prenex normal form. Because no renaming is
    /// performed while hoisting quantifiers, the bound variables of the
    /// receiver must be standardized apart (see [`Nnf::standardize`]) and an
    /// unstandardized variable is reported as an error.
    ///
    /// [`Nnf::standardize`]: crate::transform::Nnf::standardize
    ///
    /// **Example**:
    /// ```rust
    /// # use clausal::syntax::Fof;
    /// use clausal::transform::{ToNnf, ToPnf};
    ///
    /// let formula: Fof = "(!x. P(x)) & (?y. Q(y))".parse().unwrap();
    /// let pnf = formula.nnf().pnf().unwrap();
    /// assert_eq!("∀ x. (∃ y. (P(x) ∧ Q(y)))", pnf.to_string());
    /// ```
    fn pnf(&self) -> Result<Pnf, Error>;
}

impl ToPnf for Nnf {
    fn pnf(&self) -> Result<Pnf, Error> {
        let free = self.free_vars().into_iter().collect();
        let mut bound = HashSet::new();
        check_standardized(self, &free, &mut bound)?;
        Ok(pnf(self))
    }
}

impl Formula for Pnf {
    fn signature(&self) -> Result<Sig, crate::syntax::Error> {
        match self {
            Self::Qff(this) => this.signature(),
            Self::Exists(this) => this.signature(),
            Self::Forall(this) => this.signature(),
        }
    }

    fn free_vars(&self) -> Vec<&Var> {
        match self {
            Self::Qff(this) => this.free_vars(),
            Self::Exists(this) => this.free_vars(),
            Self::Forall(this) => this.free_vars(),
        }
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        match self {
            Self::Qff(this) => this.transform_term(f).into(),
            Self::Exists(this) => Exists {
                variable: this.variable.clone(),
                formula: this.formula.transform_term(f),
            }
            .into(),
            Self::Forall(this) => Forall {
                variable: this.variable.clone(),
                formula: this.formula.transform_term(f),
            }
            .into(),
        }
    }
}

impl FormulaEx for Pnf {
    fn precedence(&self) -> u8 {
        match self {
            Self::Qff(this) => this.precedence(),
            Self::Exists(_) => PRECEDENCE_EXISTS,
            Self::Forall(_) => PRECEDENCE_FORALL,
        }
    }
}

impl fmt::Display for Pnf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Fof::from(self))
    }
}

impl fmt::Debug for Pnf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", Fof::from(self))
    }
}

impl From<Pnf> for Fof {
    fn from(value: Pnf) -> Self {
        match value {
            Pnf::Qff(this) => this.into(),
            Pnf::Exists(this) => Self::exists(this.variable, this.formula.into()),
            Pnf::Forall(this) => Self::forall(this.variable, this.formula.into()),
        }
    }
}

impl From<&Pnf> for Fof {
    fn from(value: &Pnf) -> Self {
        value.clone().into()
    }
}

// Fails if a variable of `formula` is bound more than once or is bound while
// it also occurs free in `formula`.
fn check_standardized<'a>(
    formula: &'a Nnf,
    free: &HashSet<&'a Var>,
    bound: &mut HashSet<&'a Var>,
) -> Result<(), Error> {
    match formula {
        Nnf::Literal(_) => Ok(()),
        Nnf::And(this) => {
            check_standardized(&this.left, free, bound)?;
            check_standardized(&this.right, free, bound)
        }
        Nnf::Or(this) => {
            check_standardized(&this.left, free, bound)?;
            check_standardized(&this.right, free, bound)
        }
        Nnf::Exists(this) => {
            check_binder(&this.variable, free, bound)?;
            check_standardized(&this.formula, free, bound)
        }
        Nnf::Forall(this) => {
            check_binder(&this.variable, free, bound)?;
            check_standardized(&this.formula, free, bound)
        }
    }
}

fn check_binder<'a>(
    variable: &'a Var,
    free: &HashSet<&'a Var>,
    bound: &mut HashSet<&'a Var>,
) -> Result<(), Error> {
    if free.contains(variable) || !bound.insert(variable) {
        Err(Error::UnstandardizedVariable {
            variable: variable.clone(),
        })
    } else {
        Ok(())
    }
}

fn pnf(formula: &Nnf) -> Pnf {
    match formula {
        Nnf::Literal(this) => Pnf::Qff(this.clone().into()),
        Nnf::And(this) => and(pnf(&this.left), pnf(&this.right)),
        Nnf::Or(this) => or(pnf(&this.left), pnf(&this.right)),
        Nnf::Exists(this) => Exists {
            variable: this.variable.clone(),
            formula: pnf(&this.formula),
        }
        .into(),
        Nnf::Forall(this) => Forall {
            variable: this.variable.clone(),
            formula: pnf(&this.formula),
        }
        .into(),
    }
}

// Conjoins two prenex formulae, hoisting the quantifiers of `left` before
// those of `right`.
fn and(left: Pnf, right: Pnf) -> Pnf {
    match left {
        Pnf::Exists(this) => Exists {
            variable: this.variable,
            formula: and(this.formula, right),
        }
        .into(),
        Pnf::Forall(this) => Forall {
            variable: this.variable,
            formula: and(this.formula, right),
        }
        .into(),
        Pnf::Qff(left) => match right {
            Pnf::Exists(this) => Exists {
                variable: this.variable,
                formula: and(Pnf::Qff(left), this.formula),
            }
            .into(),
            Pnf::Forall(this) => Forall {
                variable: this.variable,
                formula: and(Pnf::Qff(left), this.formula),
            }
            .into(),
            Pnf::Qff(right) => Pnf::Qff(left.and(right)),
        },
    }
}

fn or(left: Pnf, right: Pnf) -> Pnf {
    match left {
        Pnf::Exists(this) => Exists {
            variable: this.variable,
            formula: or(this.formula, right),
        }
        .into(),
        Pnf::Forall(this) => Forall {
            variable: this.variable,
            formula: or(this.formula, right),
        }
        .into(),
        Pnf::Qff(left) => match right {
            Pnf::Exists(this) => Exists {
                variable: this.variable,
                formula: or(Pnf::Qff(left), this.formula),
            }
            .into(),
            Pnf::Forall(this) => Forall {
                variable: this.variable,
                formula: or(Pnf::Qff(left), this.formula),
            }
            .into(),
            Pnf::Qff(right) => Pnf::Qff(left.or(right)),
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_debug_string,
        syntax::{Fof, Var},
        transform::{Error, Nnf, ToNnf, ToPnf},
    };

    fn nnf(input: &str) -> Nnf {
        input.parse::<Fof>().unwrap().nnf()
    }

    #[test]
    fn test_pnf() {
        assert_debug_string!("P(x)", nnf("P(x)").pnf().unwrap());
        assert_debug_string!("P(x) & Q(y)", nnf("P(x) & Q(y)").pnf().unwrap());
        assert_debug_string!(
            "! x. (? y. (P(x) | Q(y)))",
            nnf("!x. ?y. (P(x) | Q(y))").pnf().unwrap()
        );
        assert_debug_string!(
            "! x. (! y. (P(x) & Q(y)))",
            nnf("(!x. P(x)) & (!y. Q(y))").pnf().unwrap()
        );
        assert_debug_string!(
            "? x. (! y. (P(x) | Q(y)))",
            nnf("(?x. P(x)) | (!y. Q(y))").pnf().unwrap()
        );
        assert_debug_string!("? y. (P(x) & Q(y))", nnf("P(x) & ?y. Q(y)").pnf().unwrap());
        assert_debug_string!("! y. (P(x) | Q(y))", nnf("P(x) | !y. Q(y)").pnf().unwrap());
    }

    // the quantifiers of the left operand come before those of the right one
    #[test]
    fn pnf_prefix_order() {
        let standardized = nnf("(?x. P(x)) | (!x. Q(x))").standardize().unwrap();
        assert_debug_string!(
            "? x#0. (! x#1. (P(x#0) | Q(x#1)))",
            standardized.pnf().unwrap()
        );
    }

    #[test]
    fn pnf_unstandardized() {
        let result = nnf("(!x. P(x)) & Q(x)").pnf();
        assert!(matches!(
            result,
            Err(Error::UnstandardizedVariable { variable }) if variable == Var::from("x")
        ));

        let result = nnf("(!x. P(x)) & (?x. Q(x))").pnf();
        assert!(matches!(
            result,
            Err(Error::UnstandardizedVariable { variable }) if variable == Var::from("x")
        ));
    }
}
