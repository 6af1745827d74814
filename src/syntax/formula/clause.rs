/*! Defines literals, clauses and clause sets, the output vocabulary of the
clausal normalization pipeline. */
use super::{Atom, Formula, FormulaEx, Not};
use crate::syntax::{Error, Fof, Sig, Term, Var};
use itertools::Itertools;
use std::{collections::BTreeSet, fmt, ops::Deref};

/// A literal is an [`Atom`] or its negation.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Literal {
    /// Wraps a (positive) [`Atom`].
    Pos(Atom),

    /// Wraps the negation of an [`Atom`].
    Neg(Atom),
}

impl From<Atom> for Literal {
    fn from(value: Atom) -> Self {
        Self::Pos(value)
    }
}

impl From<Not<Atom>> for Literal {
    fn from(value: Not<Atom>) -> Self {
        Self::Neg(value.formula)
    }
}

impl Formula for Literal {
    fn signature(&self) -> Result<Sig, Error> {
        match self {
            Self::Pos(this) | Self::Neg(this) => this.signature(),
        }
    }

    fn free_vars(&self) -> Vec<&Var> {
        match self {
            Self::Pos(this) | Self::Neg(this) => this.free_vars(),
        }
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        match self {
            Self::Pos(this) => Self::Pos(this.transform_term(f)),
            Self::Neg(this) => Self::Neg(this.transform_term(f)),
        }
    }
}

impl FormulaEx for Literal {
    fn precedence(&self) -> u8 {
        match self {
            Self::Pos(this) => this.precedence(),
            Self::Neg(_) => super::PRECEDENCE_NOT,
        }
    }
}

impl From<Literal> for Fof {
    fn from(value: Literal) -> Self {
        Fof::from(&value)
    }
}

impl From<&Literal> for Fof {
    fn from(value: &Literal) -> Self {
        match value {
            Literal::Pos(this) => this.clone().into(),
            Literal::Neg(this) => Fof::not(this.clone().into()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pos(this) => write!(f, "{}", this),
            Self::Neg(this) => write!(f, "¬{}", this),
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pos(this) => write!(f, "{:?}", this),
            Self::Neg(this) => write!(f, "~{:?}", this),
        }
    }
}

/// Represents a clause, a set of [`Literal`]s interpreted as their disjunction.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause(BTreeSet<Literal>);

impl Clause {
    /// Returns the literals of the receiver clause.
    pub fn literals(&self) -> &BTreeSet<Literal> {
        &self.0
    }

    /// Consumes the receiver and returns its underlying set of [`Literal`]s.
    pub fn into_literals(self) -> BTreeSet<Literal> {
        self.0
    }

    /// Returns a clause containing all literals in the receiver and `other`.
    pub fn union(&self, other: &Self) -> Self {
        self.0.union(&other.0).cloned().into()
    }
}

impl Deref for Clause {
    type Target = BTreeSet<Literal>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Literal> for Clause {
    fn from(value: Literal) -> Self {
        vec![value].into_iter().into()
    }
}

impl<I> From<I> for Clause
where
    I: IntoIterator<Item = Literal>,
{
    fn from(value: I) -> Self {
        Self(value.into_iter().collect())
    }
}

impl Default for Clause {
    fn default() -> Self {
        Self(BTreeSet::new())
    }
}

impl Formula for Clause {
    fn signature(&self) -> Result<Sig, Error> {
        let mut sig = Sig::new();
        for literal in &self.0 {
            sig = sig.merge(literal.signature()?)?;
        }
        Ok(sig)
    }

    fn free_vars(&self) -> Vec<&Var> {
        self.0
            .iter()
            .flat_map(|l| l.free_vars())
            .unique()
            .collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        self.0.iter().map(|lit| lit.transform_term(f)).into()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let literals = self.0.iter().map(|l| l.to_string()).collect_vec();
        write!(f, "{{{}}}", literals.join(", "))
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let literals = self.0.iter().map(|l| format!("{:?}", l)).collect_vec();
        write!(f, "{{{}}}", literals.join(", "))
    }
}

/// Represents a set of [`Clause`]s, interpreted as their conjunction.
#[derive(Clone, PartialEq, Eq)]
pub struct ClauseSet(BTreeSet<Clause>);

impl ClauseSet {
    /// Returns the clauses of the receiver.
    pub fn clauses(&self) -> &BTreeSet<Clause> {
        &self.0
    }

    /// Consumes the receiver and returns its underlying set of clauses.
    pub fn into_clauses(self) -> BTreeSet<Clause> {
        self.0
    }

    /// Returns a clause set containing all clauses in the receiver and `other`.
    pub fn union(&self, other: &Self) -> Self {
        self.0.union(&other.0).cloned().into()
    }

    /// Returns a new clause set obtained by removing every clause that is
    /// subsumed by another clause of the receiver.
    pub fn simplify(&self) -> Self {
        self.iter()
            .filter(|c1| !self.iter().any(|c2| *c1 != c2 && c2.is_subset(c1)))
            .cloned()
            .collect_vec()
            .into()
    }
}

impl From<Clause> for ClauseSet {
    fn from(value: Clause) -> Self {
        vec![value].into_iter().into()
    }
}

impl<I> From<I> for ClauseSet
where
    I: IntoIterator<Item = Clause>,
{
    fn from(value: I) -> Self {
        Self(value.into_iter().collect())
    }
}

impl Deref for ClauseSet {
    type Target = BTreeSet<Clause>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for ClauseSet {
    fn default() -> Self {
        Self(BTreeSet::new())
    }
}

impl Formula for ClauseSet {
    fn signature(&self) -> Result<Sig, Error> {
        let mut sig = Sig::new();
        for clause in &self.0 {
            sig = sig.merge(clause.signature()?)?;
        }
        Ok(sig)
    }

    fn free_vars(&self) -> Vec<&Var> {
        self.0
            .iter()
            .flat_map(|c| c.free_vars())
            .unique()
            .collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        self.0.iter().map(|clause| clause.transform_term(f)).into()
    }
}

impl fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let clauses = self.0.iter().map(|c| c.to_string()).collect_vec();
        write!(f, "{{{}}}", clauses.join(", "))
    }
}

impl fmt::Debug for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let clauses = self.0.iter().map(|c| format!("{:?}", c)).collect_vec();
        write!(f, "{{{}}}", clauses.join(", "))
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
    fn literal_to_string() {
        assert_eq!("P(x)", format!("{:?}", Literal::Pos(atom("P", "x"))));
        assert_eq!("~P(x)", format!("{:?}", Literal::Neg(atom("P", "x"))));
        assert_eq!("¬P(x)", Literal::Neg(atom("P", "x")).to_string());
    }

    #[test]
    fn clause_to_string() {
        let clause = Clause::from(vec![
            Literal::Pos(atom("Q", "y")),
            Literal::Pos(atom("P", "x")),
            Literal::Neg(atom("P", "x")),
        ]);
        assert_eq!("{P(x), Q(y), ~P(x)}", format!("{:?}", clause));
    }

    #[test]
    fn clause_duplicates_collapse() {
        let clause = Clause::from(vec![
            Literal::Pos(atom("P", "x")),
            Literal::Pos(atom("P", "x")),
        ]);
        assert_eq!(1, clause.len());
    }

    #[test]
    fn clause_union() {
        let left = Clause::from(Literal::Pos(atom("P", "x")));
        let right = Clause::from(Literal::Neg(atom("Q", "y")));
        assert_eq!("{P(x), ~Q(y)}", format!("{:?}", left.union(&right)));
    }

    #[test]
    fn clause_set_to_string() {
        let clauses = ClauseSet::from(vec![
            Clause::from(Literal::Pos(atom("Q", "y"))),
            Clause::from(Literal::Pos(atom("P", "x"))),
        ]);
        assert_eq!("{{P(x)}, {Q(y)}}", format!("{:?}", clauses));
    }

    #[test]
    fn clause_set_simplify() {
        let clauses = ClauseSet::from(vec![
            Clause::from(Literal::Pos(atom("P", "x"))),
            Clause::from(vec![
                Literal::Pos(atom("P", "x")),
                Literal::Pos(atom("Q", "y")),
            ]),
        ]);
        assert_eq!("{{P(x)}}", format!("{:?}", clauses.simplify()));
    }

    #[test]
    fn clause_free_vars() {
        let clause = Clause::from(vec![
            Literal::Pos(atom("P", "x")),
            Literal::Neg(atom("Q", "x")),
        ]);
        assert_eq!(vec![&Var::from("x")], clause.free_vars());
    }
}
