/*! Implements a normalizer that takes first-order formulae through the full
clausification pipeline. */
use super::{Error, NameGenerator, ToCnf, ToNnf, ToPnf, ToSnf};
use crate::syntax::{formula::clause::ClauseSet, Fof};

/// Transforms first-order formulae to equisatisfiable sets of clauses. A
/// normalizer owns the [`NameGenerator`] that creates standardized variable
/// names, Skolem function and constant names, and the fresh variable names of
/// the final clauses, so the names stay unique across all formulae normalized
/// by the same instance.
#[derive(Debug, Default)]
pub struct Normalizer {
    generator: NameGenerator,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            generator: NameGenerator::new(),
        }
    }

    /// Transforms `formula` to a set of clauses, interpreted as the
    /// conjunction of the disjunctions of their literals.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausal::syntax::Fof;
    /// use clausal::transform::Normalizer;
    ///
    /// let mut normalizer = Normalizer::new();
    /// let formula: Fof = "!x. (P(x) -> ?y. Q(x, y))".parse().unwrap();
    /// let clauses = normalizer.normalize(&formula).unwrap();
    /// assert_eq!("{{Q(x#3, f#2(x#3)), ~P(x#3)}}", format!("{:?}", clauses));
    /// ```
    pub fn normalize(&mut self, formula: &Fof) -> Result<ClauseSet, Error> {
        let standardized = formula
            .eliminate_implications()
            .nnf()
            .standardize_with(&mut self.generator)?;
        let snf = standardized.pnf()?.snf_with(&mut self.generator)?;
        snf.cnf().clause_set_with(&mut self.generator)
    }
}

#[cfg(test)]
mod tests {
    use super::Normalizer;
    use crate::{
        syntax::{Fof, Pred, Var},
        transform::Error,
    };

    fn normalize(input: &str) -> String {
        let formula = input.parse::<Fof>().unwrap();
        format!("{:?}", Normalizer::new().normalize(&formula).unwrap())
    }

    #[test]
    fn test_normalize() {
        assert_eq!("{{P()}}", normalize("P()"));
        assert_eq!("{{P(x#0)}}", normalize("P(x)"));
        assert_eq!("{{B(), ~A()}, {C(), ~D()}}", normalize("(A() -> B()) & (C() | ~D())"));
        assert_eq!("{{P(x#0)}, {Q(x#1)}}", normalize("P(x) & Q(x)"));
        assert_eq!("{{P('c#1)}}", normalize("?y. P(y)"));
        assert_eq!("{{P(x#3, f#2(x#3))}}", normalize("!x. ?y. P(x, y)"));
        assert_eq!(
            "{{Q(x#3, f#2(x#3)), ~P(x#3)}}",
            normalize("!x. (P(x) -> ?y. Q(x, y))")
        );
        assert_eq!(
            "{{P(x#0), ~Q(x#0)}, {Q(x#1), ~P(x#1)}}",
            normalize("P(x) <=> Q(x)")
        );
    }

    #[test]
    fn normalize_keeps_names_unique_across_formulae() {
        let mut normalizer = Normalizer::new();
        let formula: Fof = "?x. P(x)".parse().unwrap();
        assert_eq!(
            "{{P('c#1)}}",
            format!("{:?}", normalizer.normalize(&formula).unwrap())
        );
        assert_eq!(
            "{{P('c#3)}}",
            format!("{:?}", normalizer.normalize(&formula).unwrap())
        );
    }

    #[test]
    fn normalize_collision() {
        // a symbol of the shape of a generated name must be built by hand:
        let atom = Pred::from("P").app(vec![
            Var::from("x").into(),
            Var::from("x#0").into(),
        ]);
        let formula = Fof::exists(Var::from("x"), atom);
        assert!(matches!(
            Normalizer::new().normalize(&formula),
            Err(Error::NameCollision { .. })
        ));
    }
}
