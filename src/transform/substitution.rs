/*! Provides an interface and the implementation for term substitution and variable renaming.*/
use crate::syntax::{Formula, Term, Var};
use std::collections::HashMap;

/// Is the trait of types that map variables to terms.
pub trait Substitution {
    /// Maps `v` to a [`Term`].
    ///
    /// [`Term`]: crate::syntax::Term
    fn apply(&self, v: &Var) -> Term;
}

/// Any function from [`Var`] to [`Term`] is a substitution.
///
/// [`Var`]: crate::syntax::Var
/// [`Term`]: crate::syntax::Term
impl<F> Substitution for F
where
    F: Fn(&Var) -> Term,
{
    fn apply(&self, v: &Var) -> Term {
        self(v)
    }
}

/// Any map from [`Var`] to [`Term`] is a substitution.
///
/// [`Var`]: crate::syntax::Var
/// [`Term`]: crate::syntax::Term
impl<'a> Substitution for HashMap<&'a Var, Term> {
    fn apply(&self, v: &Var) -> Term {
        self.get(v).cloned().unwrap_or_else(|| v.clone().into())
    }
}

/// Is the trait of types that map variables to variables.
///
/// **Note**: A variable renaming may be regarded as a special case of [`Substitution`].
///
/// [`Substitution`]: crate::transform::Substitution
pub trait VariableRenaming {
    /// Maps `v` to another [`Var`].
    ///
    /// [`Var`]: crate::syntax::Var
    fn apply(&self, v: &Var) -> Var;
}

/// Any function from [`Var`] to [`Var`] is a variable renaming.
///
/// [`Var`]: crate::syntax::Var
impl<F> VariableRenaming for F
where
    F: Fn(&Var) -> Var,
{
    fn apply(&self, v: &Var) -> Var {
        self(v)
    }
}

/// Any map from [`Var`] to [`Var`] is a variable renaming.
///
/// [`Var`]: crate::syntax::Var
impl<'a> VariableRenaming for HashMap<&'a Var, Var> {
    fn apply(&self, v: &Var) -> Var {
        self.get(v).cloned().unwrap_or_else(|| v.clone())
    }
}

impl Term {
    /// Applies a [`VariableRenaming`] on the variable sub-terms of the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// use clausal::syntax::{Func, Term, Var};
    /// use std::collections::HashMap;
    ///
    /// let x = Var::from("x");
    ///
    /// // a variable renaming that maps `x` to `y`:
    /// let mut renaming = HashMap::new();
    /// renaming.insert(&x, Var::from("y"));
    ///
    /// let term = Func::from("f").app(vec![
    ///     Var::from("x").into(),
    ///     Var::from("z").into(),
    /// ]);
    /// assert_eq!("f(y, z)", term.rename_vars(&renaming).to_string());
    /// ```
    pub fn rename_vars(&self, renaming: &impl VariableRenaming) -> Self {
        match self {
            Self::Const { .. } => self.clone(),
            Self::Var { variable } => renaming.apply(variable).into(),
            Self::App { function, terms } => {
                let terms = terms.iter().map(|t| t.rename_vars(renaming)).collect();
                function.clone().app(terms)
            }
        }
    }

    /// Applies a [`Substitution`] on the variable sub-terms of the receiver.
    pub fn substitute(&self, sub: &impl Substitution) -> Self {
        match self {
            Self::Const { .. } => self.clone(),
            Self::Var { variable } => sub.apply(variable),
            Self::App { function, terms } => {
                let terms = terms.iter().map(|t| t.substitute(sub)).collect();
                function.clone().app(terms)
            }
        }
    }
}

/// Is the trait of formula types whose variable sub-terms can be renamed or
/// substituted.
pub trait Substitute: Formula {
    /// Applies a [`VariableRenaming`] on the variable sub-terms of the receiver.
    fn rename_vars(&self, renaming: &impl VariableRenaming) -> Self
    where
        Self: Sized,
    {
        self.transform_term(&|t: &Term| t.rename_vars(renaming))
    }

    /// Applies a [`Substitution`] on the variable sub-terms of the receiver.
    fn substitute(&self, sub: &impl Substitution) -> Self
    where
        Self: Sized,
    {
        self.transform_term(&|t: &Term| t.substitute(sub))
    }
}

impl<T: Formula> Substitute for T {}
