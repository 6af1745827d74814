/*! Implements a conjunctive normal form (CNF) for formula types and the extraction
of a clause set from a formula in CNF. */
use super::{Error, NameGenerator, Snf, Substitute};
use crate::syntax::{
    formula::{
        clause::{Clause, ClauseSet},
        qff::Qff,
        FormulaEx,
    },
    Fof, Formula, Sig, Term, Var,
};
use std::{collections::HashMap, fmt};

/// Represents a formula in conjunctive normal form, a conjunction of
/// disjunctions of literals.
#[derive(Clone, PartialEq)]
pub struct Cnf(Qff);

/// Is the trait of types that can be transformed to a [`Cnf`].
pub trait ToCnf: Formula {
    /// Transforms the receiver to a conjunctive normal form by distributing
    /// disjunctions over conjunctions.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausal::syntax::Fof;
    /// use clausal::transform::{ToCnf, ToNnf, ToSnf};
    ///
    /// let formula: Fof = "P(x) | Q(y) & R(z)".parse().unwrap();
    /// let cnf = formula.nnf().snf().unwrap().cnf();
    /// assert_eq!("(P(x) ∨ Q(y)) ∧ (P(x) ∨ R(z))", cnf.to_string());
    /// ```
    fn cnf(&self) -> Cnf;
}

impl ToCnf for Qff {
    fn cnf(&self) -> Cnf {
        Cnf(distribute_or(self))
    }
}

impl ToCnf for Snf {
    fn cnf(&self) -> Cnf {
        self.clone().into_matrix().cnf()
    }
}

impl Cnf {
    /// Breaks the receiver into a set of clauses, renaming the variables of
    /// each clause apart with `generator` so that no two clauses of the
    /// result share a variable.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausal::syntax::Fof;
    /// use clausal::transform::{ToCnf, ToNnf, ToSnf};
    ///
    /// let formula: Fof = "(A() -> B()) & (C() | ~D())".parse().unwrap();
    /// let clauses = formula.nnf().snf().unwrap().cnf().clause_set().unwrap();
    /// assert_eq!("{{B(), ~A()}, {C(), ~D()}}", format!("{:?}", clauses));
    /// ```
    pub fn clause_set(&self) -> Result<ClauseSet, Error> {
        self.clause_set_with(&mut NameGenerator::new())
    }

    /// Is similar to [`Cnf::clause_set`] but uses an existing `generator` to
    /// create fresh variable names.
    pub fn clause_set_with(&self, generator: &mut NameGenerator) -> Result<ClauseSet, Error> {
        let clauses = clause_set(&self.0)?;
        let isolated = clauses
            .into_clauses()
            .into_iter()
            .map(|clause| isolate(clause, generator));
        Ok(isolated.into())
    }
}

// Wraps `value` without transforming it. A wrapped formula that is not in
// conjunctive normal form fails at clause extraction.
impl From<Qff> for Cnf {
    fn from(value: Qff) -> Self {
        Self(value)
    }
}

impl From<Cnf> for Qff {
    fn from(value: Cnf) -> Self {
        value.0
    }
}

impl From<Cnf> for Fof {
    fn from(value: Cnf) -> Self {
        value.0.into()
    }
}

impl From<&Cnf> for Fof {
    fn from(value: &Cnf) -> Self {
        value.0.clone().into()
    }
}

impl Formula for Cnf {
    fn signature(&self) -> Result<Sig, crate::syntax::Error> {
        self.0.signature()
    }

    fn free_vars(&self) -> Vec<&Var> {
        self.0.free_vars()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Self(self.0.transform_term(f))
    }
}

impl FormulaEx for Cnf {
    fn precedence(&self) -> u8 {
        self.0.precedence()
    }
}

impl fmt::Display for Cnf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Cnf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

fn distribute_or(formula: &Qff) -> Qff {
    match formula {
        Qff::Literal(_) => formula.clone(),
        Qff::And(this) => distribute_or(&this.left).and(distribute_or(&this.right)),
        Qff::Or(this) => {
            let left = distribute_or(&this.left);
            let right = distribute_or(&this.right);
            if let Qff::And(left) = left {
                let first = left.left.or(right.clone());
                let second = left.right.or(right);
                distribute_or(&first).and(distribute_or(&second))
            } else if let Qff::And(right) = right {
                let first = left.clone().or(right.left);
                let second = left.or(right.right);
                distribute_or(&first).and(distribute_or(&second))
            } else {
                left.or(right)
            }
        }
    }
}

fn clause_set(formula: &Qff) -> Result<ClauseSet, Error> {
    match formula {
        Qff::Literal(this) => Ok(Clause::from(this.clone()).into()),
        Qff::And(this) => {
            let left = clause_set(&this.left)?;
            let right = clause_set(&this.right)?;
            Ok(left.union(&right))
        }
        Qff::Or(this) => {
            let left = clause_set(&this.left)?;
            let right = clause_set(&this.right)?;
            if left.len() == 1 && right.len() == 1 {
                let left = left.into_clauses().into_iter().next().unwrap();
                let right = right.into_clauses().into_iter().next().unwrap();
                Ok(left.union(&right).into())
            } else {
                Err(Error::NotClausal {
                    formula: formula.clone(),
                })
            }
        }
    }
}

// Renames the variables of `clause` to fresh names, so clauses that came from
// the same formula no longer share variables.
fn isolate(clause: Clause, generator: &mut NameGenerator) -> Clause {
    let mut renaming = HashMap::new();
    for variable in clause.free_vars() {
        renaming.insert(variable.clone(), generator.variable(variable));
    }
    let renaming = |v: &Var| renaming.get(v).cloned().unwrap_or_else(|| v.clone());
    clause.rename_vars(&renaming)
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_debug_string,
        syntax::{
            formula::{qff::Qff, Atom},
            Fof,
        },
        transform::{Cnf, Error, NameGenerator, Snf, ToCnf, ToNnf, ToSnf},
    };

    fn cnf(input: &str) -> Cnf {
        input.parse::<Fof>().unwrap().nnf().snf().unwrap().cnf()
    }

    #[test]
    fn test_cnf() {
        assert_debug_string!("P(x)", cnf("P(x)"));
        assert_debug_string!("P(x) & Q(y)", cnf("P(x) & Q(y)"));
        assert_debug_string!("P(x) | Q(y)", cnf("P(x) | Q(y)"));
        assert_debug_string!("~P(x) | Q(y)", cnf("P(x) -> Q(y)"));
        assert_debug_string!(
            "(~P(x) | Q(y)) & (P(x) | ~Q(y))",
            cnf("P(x) <=> Q(y)")
        );
        assert_debug_string!(
            "(P(x) | Q(y)) & (P(x) | R(z))",
            cnf("P(x) | Q(y) & R(z)")
        );
        assert_debug_string!(
            "(P(x) | R(z)) & (Q(y) | R(z))",
            cnf("P(x) & Q(y) | R(z)")
        );
        assert_debug_string!(
            "(~P(x1) | ~Q(y)) & (~P(x2) | ~Q(y))",
            cnf("~((P(x1) | P(x2)) & Q(y))")
        );
        assert_debug_string!(
            "(P(x) | Q(x)) & (P(x) | ~Q(y))",
            cnf("P(x) | ~(Q(x) -> Q(y))")
        );
        assert_debug_string!(
            "((P(x1) | Q(x1)) & (P(x1) | Q(x2))) & ((P(x2) | Q(x1)) & (P(x2) | Q(x2)))",
            cnf("(P(x1) & P(x2)) | (Q(x1) & Q(x2))")
        );
        // the universal prefix is dropped and Skolem terms remain
        assert_debug_string!("P(x, f#0(x))", cnf("!x. ?y. P(x, y)"));
    }

    #[test]
    fn cnf_is_idempotent() {
        let cnf = cnf("P(x) | Q(y) & R(z)");
        assert_eq!(cnf, Qff::from(cnf.clone()).cnf());
    }

    #[test]
    fn test_clause_set() {
        let clauses = cnf("A()").clause_set().unwrap();
        assert_eq!("{{A()}}", format!("{:?}", clauses));

        let clauses = cnf("P(x)").clause_set().unwrap();
        assert_eq!("{{P(x#0)}}", format!("{:?}", clauses));

        let clauses = cnf("(A() -> B()) & (C() | ~D())").clause_set().unwrap();
        assert_eq!("{{B(), ~A()}, {C(), ~D()}}", format!("{:?}", clauses));

        let clauses = cnf("P(x) -> Q(y)").clause_set().unwrap();
        assert_eq!("{{Q(y#0), ~P(x#1)}}", format!("{:?}", clauses));
    }

    // no two clauses of a clause set share a variable
    #[test]
    fn clause_set_isolates_variables() {
        let clauses = cnf("(P(x) | Q(x)) & (R(x) | S(x))").clause_set().unwrap();
        assert_eq!(
            "{{P(x#0), Q(x#0)}, {R(x#1), S(x#1)}}",
            format!("{:?}", clauses)
        );
    }

    #[test]
    fn clause_set_with_shares_the_generator() {
        let mut generator = NameGenerator::new();
        let clauses = cnf("P(x)").clause_set_with(&mut generator).unwrap();
        assert_eq!("{{P(x#0)}}", format!("{:?}", clauses));
        let clauses = cnf("Q(y)").clause_set_with(&mut generator).unwrap();
        assert_eq!("{{Q(y#1)}}", format!("{:?}", clauses));
    }

    #[test]
    fn clause_set_not_clausal() {
        let p: Qff = Atom {
            predicate: "P".into(),
            terms: vec![],
        }
        .into();
        let q: Qff = Atom {
            predicate: "Q".into(),
            terms: vec![],
        }
        .into();
        let r: Qff = Atom {
            predicate: "R".into(),
            terms: vec![],
        }
        .into();

        // a conjunction under a disjunction is not clausal unless distributed
        let formula = Cnf::from(p.or(q.and(r)));
        assert!(matches!(
            formula.clause_set(),
            Err(Error::NotClausal { .. })
        ));
    }

    #[test]
    fn snf_to_cnf() {
        let snf: Snf = "?x. !y. (P(x) & Q(y))"
            .parse::<Fof>()
            .unwrap()
            .nnf()
            .snf()
            .unwrap();
        assert_debug_string!("P('c#0) & Q(y)", snf.cnf());
    }
}
