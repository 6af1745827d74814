/*! Implements variable standardization, making every quantified variable of a
formula in negation normal form distinct from all other variables. */
use super::{Error, NameGenerator, Nnf, Substitute};
use crate::syntax::{
    formula::{And, Exists, Forall, Or},
    Formula, Var,
};
use std::collections::{HashMap, HashSet};

impl Nnf {
    /// Returns an equivalent formula where every quantifier binds a variable
    /// that is distinct from all other bound and free variables of the
    /// receiver. Bound variables are renamed apart using `generator`, so a
    /// shared generator keeps the names unique across formulae as well.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausal::syntax::Fof;
    /// use clausal::transform::ToNnf;
    ///
    /// let formula: Fof = "!x. (P(x) & ?x. Q(x))".parse().unwrap();
    /// let standardized = formula.nnf().standardize().unwrap();
    /// assert_eq!("∀ x#0. (P(x#0) ∧ (∃ x#1. Q(x#1)))", standardized.to_string());
    /// ```
    pub fn standardize(&self) -> Result<Self, Error> {
        self.standardize_with(&mut NameGenerator::new())
    }

    /// Is similar to [`Nnf::standardize`] but uses an existing `generator` to
    /// create fresh variable names.
    pub fn standardize_with(&self, generator: &mut NameGenerator) -> Result<Self, Error> {
        let signature = self.signature()?;
        let mut taken: HashSet<String> = signature
            .functions()
            .keys()
            .map(|f| f.name().to_string())
            .chain(signature.constants().iter().map(|c| c.name().to_string()))
            .collect();
        variable_names(self, &mut taken);
        standardize(self, &HashMap::new(), &mut taken, generator)
    }
}

// Collects the names of all (bound and free) variables of `formula` in `names`.
fn variable_names(formula: &Nnf, names: &mut HashSet<String>) {
    match formula {
        Nnf::Literal(this) => {
            names.extend(this.free_vars().into_iter().map(|v| v.name().to_string()))
        }
        Nnf::And(this) => {
            variable_names(&this.left, names);
            variable_names(&this.right, names);
        }
        Nnf::Or(this) => {
            variable_names(&this.left, names);
            variable_names(&this.right, names);
        }
        Nnf::Exists(this) => {
            names.insert(this.variable.name().to_string());
            variable_names(&this.formula, names);
        }
        Nnf::Forall(this) => {
            names.insert(this.variable.name().to_string());
            variable_names(&this.formula, names);
        }
    }
}

fn standardize(
    formula: &Nnf,
    scope: &HashMap<Var, Var>,
    taken: &mut HashSet<String>,
    generator: &mut NameGenerator,
) -> Result<Nnf, Error> {
    match formula {
        Nnf::Literal(this) => {
            let renaming = |v: &Var| scope.get(v).cloned().unwrap_or_else(|| v.clone());
            Ok(this.rename_vars(&renaming).into())
        }
        Nnf::And(this) => {
            let left = standardize(&this.left, scope, taken, generator)?;
            let right = standardize(&this.right, scope, taken, generator)?;
            Ok(And { left, right }.into())
        }
        Nnf::Or(this) => {
            let left = standardize(&this.left, scope, taken, generator)?;
            let right = standardize(&this.right, scope, taken, generator)?;
            Ok(Or { left, right }.into())
        }
        Nnf::Exists(this) => {
            let (variable, scope) = fresh_binder(&this.variable, scope, taken, generator)?;
            let formula = standardize(&this.formula, &scope, taken, generator)?;
            Ok(Exists { variable, formula }.into())
        }
        Nnf::Forall(this) => {
            let (variable, scope) = fresh_binder(&this.variable, scope, taken, generator)?;
            let formula = standardize(&this.formula, &scope, taken, generator)?;
            Ok(Forall { variable, formula }.into())
        }
    }
}

// Creates a fresh name for the bound variable `variable` and extends `scope`
// with the renaming. Fails if the fresh name already occurs in the formula.
fn fresh_binder(
    variable: &Var,
    scope: &HashMap<Var, Var>,
    taken: &mut HashSet<String>,
    generator: &mut NameGenerator,
) -> Result<(Var, HashMap<Var, Var>), Error> {
    let fresh = generator.variable(variable);
    if !taken.insert(fresh.name().to_string()) {
        return Err(Error::NameCollision {
            symbol: fresh.name().to_string(),
        });
    }
    let mut scope = scope.clone();
    scope.insert(variable.clone(), fresh.clone());
    Ok((fresh, scope))
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_debug_string,
        syntax::{Fof, Pred, Var},
        transform::{Error, NameGenerator, Nnf, ToNnf},
    };

    fn nnf(input: &str) -> Nnf {
        input.parse::<Fof>().unwrap().nnf()
    }

    #[test]
    fn test_standardize() {
        assert_debug_string!("P(x) & Q(y)", nnf("P(x) & Q(y)").standardize().unwrap());
        assert_debug_string!(
            "! x#0. (? y#1. P(x#0, y#1))",
            nnf("!x. ?y. P(x, y)").standardize().unwrap()
        );
        // shadowing binders are renamed apart
        assert_debug_string!(
            "! x#0. (P(x#0) & (? x#1. Q(x#1)))",
            nnf("!x. (P(x) & ?x. Q(x))").standardize().unwrap()
        );
        assert_debug_string!(
            "(! x#0. P(x#0)) | (! x#1. P(x#1))",
            nnf("(!x. P(x)) | (!x. P(x))").standardize().unwrap()
        );
        // free variables keep their names
        assert_debug_string!(
            "! x#0. P(x#0, y)",
            nnf("!x. P(x, y)").standardize().unwrap()
        );
        assert_debug_string!(
            "(! x#0. P(x#0)) & Q(x)",
            nnf("(!x. P(x)) & Q(x)").standardize().unwrap()
        );
    }

    #[test]
    fn standardize_with_shares_the_generator() {
        let mut generator = NameGenerator::new();
        assert_debug_string!(
            "! x#0. P(x#0)",
            nnf("!x. P(x)").standardize_with(&mut generator).unwrap()
        );
        assert_debug_string!(
            "? x#1. Q(x#1)",
            nnf("?x. Q(x)").standardize_with(&mut generator).unwrap()
        );
    }

    #[test]
    fn standardize_collision() {
        // `x#0` cannot be parsed, so the colliding variable is built by hand:
        let atom = Pred::from("P").app(vec![
            Var::from("x").into(),
            Var::from("x#0").into(),
        ]);
        let formula = Fof::exists(Var::from("x"), atom).nnf();
        assert!(matches!(
            formula.standardize(),
            Err(Error::NameCollision { .. })
        ));
    }
}
