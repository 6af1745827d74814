/*! Implements the transformations that take a first-order formula to an
equisatisfiable set of clauses. */
mod cnf;
mod generator;
mod implication;
mod nnf;
mod normalize;
mod pnf;
mod snf;
mod standardize;
mod substitution;

pub use cnf::{Cnf, ToCnf};
pub use generator::NameGenerator;
pub use nnf::{Nnf, ToNnf};
pub use normalize::Normalizer;
pub use pnf::{Pnf, ToPnf};
pub use snf::{Snf, ToSnf};
pub use substitution::{Substitute, Substitution, VariableRenaming};

use crate::syntax::{formula::qff::Qff, Var};
use thiserror::Error;

/// Is the type of errors arising from inconsistencies when transforming formula types.
#[derive(Error, Debug)]
pub enum Error {
    /// Is returned when prenexing a formula whose bound variables are not
    /// standardized apart.
    #[error("variable `{}` is bound more than once or shadows a free variable", .variable.to_string())]
    UnstandardizedVariable { variable: Var },

    /// Is returned when a generated name clashes with a symbol that already
    /// occurs in the formula.
    #[error("generated symbol `{symbol}` already occurs in the formula")]
    NameCollision { symbol: String },

    /// Is returned when a formula that is not in conjunctive normal form is
    /// broken into clauses.
    #[error("formula `{}` is not clausal", .formula.to_string())]
    NotClausal { formula: Qff },

    /// Is a wrapper around syntactic errors discovered while validating a formula.
    #[error("{}", .source.to_string())]
    Syntax {
        #[from]
        source: crate::syntax::Error,
    },
}
