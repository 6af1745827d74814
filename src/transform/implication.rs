/*! Implements elimination of implication and equivalence connectives, as the
first rewriting step towards a normal form. */
use crate::syntax::Fof;

impl Fof {
    /// Rewrites the receiver bottom-up so the result contains no implication
    /// or equivalence: `P -> Q` becomes `¬P ∨ Q` and `P ⇔ Q` becomes
    /// `(¬P ∨ Q) ∧ (¬Q ∨ P)`. The transformation is idempotent.
    ///
    /// **Example**:
    /// ```rust
    /// use clausal::syntax::Fof;
    ///
    /// let formula: Fof = "P(x) -> Q(y)".parse().unwrap();
    /// assert_eq!("¬P(x) ∨ Q(y)", formula.eliminate_implications().to_string());
    /// ```
    pub fn eliminate_implications(&self) -> Self {
        match self {
            Self::Atom(_) => self.clone(),
            Self::Not(this) => Self::not(this.formula.eliminate_implications()),
            Self::And(this) => this
                .left
                .eliminate_implications()
                .and(this.right.eliminate_implications()),
            Self::Or(this) => this
                .left
                .eliminate_implications()
                .or(this.right.eliminate_implications()),
            Self::Implies(this) => {
                let premise = this.premise.eliminate_implications();
                let consequence = this.consequence.eliminate_implications();
                Self::not(premise).or(consequence)
            }
            Self::Iff(this) => {
                let left = this.left.eliminate_implications();
                let right = this.right.eliminate_implications();
                let left_to_right = Self::not(left.clone()).or(right.clone());
                let right_to_left = Self::not(right).or(left);
                left_to_right.and(right_to_left)
            }
            Self::Exists(this) => Self::exists(
                this.variable.clone(),
                this.formula.eliminate_implications(),
            ),
            Self::Forall(this) => Self::forall(
                this.variable.clone(),
                this.formula.eliminate_implications(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_debug_string;
    use crate::syntax::Fof;

    fn eliminate(input: &str) -> Fof {
        input.parse::<Fof>().unwrap().eliminate_implications()
    }

    #[test]
    fn eliminate_implications() {
        assert_debug_string!("P(x)", eliminate("P(x)"));
        assert_debug_string!("~P(x)", eliminate("~P(x)"));
        assert_debug_string!("P(x) & Q(y)", eliminate("P(x) & Q(y)"));
        assert_debug_string!("P(x) | Q(y)", eliminate("P(x) | Q(y)"));
        assert_debug_string!("~P(x) | Q(y)", eliminate("P(x) -> Q(y)"));
        assert_debug_string!(
            "(~P(x) | Q(y)) & (~Q(y) | P(x))",
            eliminate("P(x) <=> Q(y)")
        );
        assert_debug_string!("! x. (~P(x) | Q(x))", eliminate("! x. P(x) -> Q(x)"));
        assert_debug_string!("? x. (~P(x) | Q(x))", eliminate("? x. P(x) -> Q(x)"));
        // nested occurrences are rewritten bottom-up:
        assert_debug_string!(
            "~(~P(x) | Q(y)) | R(z)",
            eliminate("(P(x) -> Q(y)) -> R(z)")
        );
        assert_debug_string!(
            "~(~P(x) | ~Q(y)) | ~R(z)",
            eliminate("(P(x) -> ~Q(y)) -> ~R(z)")
        );
    }

    #[test]
    fn eliminate_implications_is_idempotent() {
        for input in &[
            "P(x) -> Q(y)",
            "P(x) <=> Q(y)",
            "! x. (P(x) -> ? y. Q(y))",
            "(P(x) <=> Q(y)) -> R(z)",
        ] {
            let once = eliminate(input);
            assert_eq!(once, once.eliminate_implications());
        }
    }

    #[test]
    fn eliminated_form_has_no_implications() {
        fn check(formula: &Fof) {
            match formula {
                Fof::Atom(_) => {}
                Fof::Not(this) => check(&this.formula),
                Fof::And(this) => {
                    check(&this.left);
                    check(&this.right);
                }
                Fof::Or(this) => {
                    check(&this.left);
                    check(&this.right);
                }
                Fof::Implies(_) | Fof::Iff(_) => panic!("unexpected implication"),
                Fof::Exists(this) => check(&this.formula),
                Fof::Forall(this) => check(&this.formula),
            }
        }

        check(&eliminate(
            "! x. ((P(x) <=> Q(x)) -> ? y. (R(y) <=> P(y)))",
        ));
    }
}
