/*! Implements a Skolem normal form (SNF) for formula types, replacing
existentially quantified variables with Skolem terms. */
use super::{Error, NameGenerator, Pnf, Substitute, ToPnf};
use crate::syntax::{
    formula::{qff::Qff, Forall, FormulaEx, PRECEDENCE_FORALL},
    Fof, Formula, Sig, Term, Var,
};
use std::{
    collections::{HashMap, HashSet},
    fmt,
};

/// Represents a formula in Skolem normal form, a block of universal quantifiers
/// over a quantifier-free matrix.
#[derive(Clone, PartialEq)]
pub enum Snf {
    /// Is the quantifier-free portion of the formula, wrapping a [`Qff`].
    Qff(Qff),

    /// Is a universally quantified formula, wrapping a [`Forall`].
    Forall(Box<Forall<Snf>>),
}

impl From<Qff> for Snf {
    fn from(value: Qff) -> Self {
        Self::Qff(value)
    }
}

impl From<Forall<Snf>> for Snf {
    fn from(value: Forall<Snf>) -> Self {
        Self::Forall(Box::new(value))
    }
}

/// Is the trait of types that can be transformed to an [`Snf`].
pub trait ToSnf: Formula {
    /// Is similar to [`ToSnf::snf`] but uses an existing `generator` to create
    /// Skolem function and constant names.
    fn snf_with(&self, generator: &mut NameGenerator) -> Result<Snf, Error>;

    /// Transforms the receiver to a Skolem normal form. Each existentially
    /// quantified variable is replaced by a Skolem term over the universally
    /// quantified variables and the free variables in scope, or by a Skolem
    /// constant when no such variables exist.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausal::syntax::Fof;
    /// use clausal::transform::{ToNnf, ToSnf};
    ///
    /// let formula: Fof = "?y. P(x, y)".parse().unwrap();
    /// let snf = formula.nnf().snf().unwrap();
    /// assert_eq!("P(x, f#0(x))", snf.to_string());
    /// ```
    fn snf(&self) -> Result<Snf, Error> {
        self.snf_with(&mut NameGenerator::new())
    }
}

impl ToSnf for Pnf {
    fn snf_with(&self, generator: &mut NameGenerator) -> Result<Snf, Error> {
        let signature = self.signature()?;
        let mut taken: HashSet<String> = signature
            .functions()
            .keys()
            .map(|f| f.name().to_string())
            .chain(signature.constants().iter().map(|c| c.name().to_string()))
            .collect();
        variable_names(self, &mut taken);
        let skolem_vars = self.free_vars().into_iter().cloned().collect();
        Snf::new(self.clone(), skolem_vars, &taken, generator)
    }
}

impl<T: ToPnf> ToSnf for T {
    fn snf_with(&self, generator: &mut NameGenerator) -> Result<Snf, Error> {
        self.pnf()?.snf_with(generator)
    }
}

impl Snf {
    fn new(
        pnf: Pnf,
        mut skolem_vars: Vec<Var>,
        taken: &HashSet<String>,
        generator: &mut NameGenerator,
    ) -> Result<Self, Error> {
        match pnf {
            Pnf::Forall(this) => {
                skolem_vars.push(this.variable.clone());
                let formula = Self::new(this.formula, skolem_vars, taken, generator)?;
                Ok(Forall {
                    variable: this.variable,
                    formula,
                }
                .into())
            }
            Pnf::Exists(this) => {
                let term = if skolem_vars.is_empty() {
                    let constant = generator.constant();
                    check_collision(constant.name(), taken)?;
                    constant.into()
                } else {
                    let function = generator.function();
                    check_collision(function.name(), taken)?;
                    let terms = skolem_vars.iter().map(|v| v.clone().into()).collect();
                    function.app(terms)
                };

                let mut map: HashMap<&Var, Term> = HashMap::new();
                map.insert(&this.variable, term);

                let substituted = this.formula.substitute(&map);
                Self::new(substituted, skolem_vars, taken, generator)
            }
            Pnf::Qff(this) => Ok(this.into()),
        }
    }

    /// Consumes the receiver and returns its quantifier-free matrix.
    pub fn into_matrix(self) -> Qff {
        match self {
            Self::Qff(this) => this,
            Self::Forall(this) => this.formula.into_matrix(),
        }
    }
}

// Collects the names of all (bound and free) variables of `pnf` in `names`.
fn variable_names(pnf: &Pnf, names: &mut HashSet<String>) {
    match pnf {
        Pnf::Qff(this) => names.extend(this.free_vars().into_iter().map(|v| v.name().to_string())),
        Pnf::Exists(this) => {
            names.insert(this.variable.name().to_string());
            variable_names(&this.formula, names);
        }
        Pnf::Forall(this) => {
            names.insert(this.variable.name().to_string());
            variable_names(&this.formula, names);
        }
    }
}

fn check_collision(name: &str, taken: &HashSet<String>) -> Result<(), Error> {
    if taken.contains(name) {
        Err(Error::NameCollision {
            symbol: name.to_string(),
        })
    } else {
        Ok(())
    }
}

impl Formula for Snf {
    fn signature(&self) -> Result<Sig, crate::syntax::Error> {
        match self {
            Self::Qff(this) => this.signature(),
            Self::Forall(this) => this.signature(),
        }
    }

    fn free_vars(&self) -> Vec<&Var> {
        match self {
            Self::Qff(this) => this.free_vars(),
            Self::Forall(this) => this.free_vars(),
        }
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        match self {
            Self::Qff(this) => this.transform_term(f).into(),
            Self::Forall(this) => Forall {
                variable: this.variable.clone(),
                formula: this.formula.transform_term(f),
            }
            .into(),
        }
    }
}

impl FormulaEx for Snf {
    fn precedence(&self) -> u8 {
        match self {
            Self::Qff(this) => this.precedence(),
            Self::Forall(_) => PRECEDENCE_FORALL,
        }
    }
}

impl fmt::Display for Snf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Fof::from(self))
    }
}

impl fmt::Debug for Snf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", Fof::from(self))
    }
}

impl From<Snf> for Fof {
    fn from(value: Snf) -> Self {
        match value {
            Snf::Qff(this) => this.into(),
            Snf::Forall(this) => Self::forall(this.variable, this.formula.into()),
        }
    }
}

impl From<&Snf> for Fof {
    fn from(value: &Snf) -> Self {
        value.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_debug_string,
        syntax::{Fof, Func, Pred, Var},
        transform::{Error, NameGenerator, Nnf, ToNnf, ToSnf},
    };

    fn nnf(input: &str) -> Nnf {
        input.parse::<Fof>().unwrap().nnf()
    }

    #[test]
    fn test_snf() {
        assert_debug_string!("P(x)", nnf("P(x)").snf().unwrap());
        assert_debug_string!("! x. P(x)", nnf("!x. P(x)").snf().unwrap());
        assert_debug_string!("P('c#0)", nnf("?x. P(x)").snf().unwrap());
        assert_debug_string!("! x. P(x, f#0(x))", nnf("!x. ?y. P(x, y)").snf().unwrap());
        assert_debug_string!("P('c#0, 'c#1)", nnf("?x. ?y. P(x, y)").snf().unwrap());
        assert_debug_string!(
            "! x. P(x, f#0(x), f#1(x))",
            nnf("!x. ?y. ?z. P(x, y, z)").snf().unwrap()
        );
        assert_debug_string!(
            "! x. (! y. (P(x, y) & Q(f#0(x, y))))",
            nnf("!x. !y. ?z. (P(x, y) & Q(z))").snf().unwrap()
        );
        // an existential before the first universal becomes a constant:
        assert_debug_string!(
            "! x. P('c#0, x, f#1(x))",
            nnf("?u. !x. ?y. P(u, x, y)").snf().unwrap()
        );
    }

    // the free variables in scope parameterize the Skolem term
    #[test]
    fn snf_free_vars() {
        assert_debug_string!("P(x, f#0(x))", nnf("?y. P(x, y)").snf().unwrap());
        assert_debug_string!(
            "! y. P(x, y, f#0(x, y))",
            nnf("!y. ?z. P(x, y, z)").snf().unwrap()
        );
    }

    #[test]
    fn snf_with_shares_the_generator() {
        let mut generator = NameGenerator::new();
        assert_debug_string!("P('c#0)", nnf("?x. P(x)").snf_with(&mut generator).unwrap());
        assert_debug_string!(
            "! x. Q(x, f#1(x))",
            nnf("!x. ?y. Q(x, y)").snf_with(&mut generator).unwrap()
        );
    }

    #[test]
    fn snf_collision() {
        // `f#0` cannot be parsed, so the colliding function is built by hand:
        let atom = Pred::from("P").app(vec![
            Func::from("f#0").app(vec![Var::from("x").into()]),
            Var::from("y").into(),
        ]);
        let formula = Fof::forall(Var::from("x"), Fof::exists(Var::from("y"), atom)).nnf();
        assert!(matches!(formula.snf(), Err(Error::NameCollision { .. })));
    }

    #[test]
    fn snf_unstandardized() {
        assert!(matches!(
            nnf("(!x. P(x)) & (?x. Q(x))").snf(),
            Err(Error::UnstandardizedVariable { .. })
        ));
    }
}
