/*! Defines an abstract syntax tree (AST) for first-order terms and formulae. */

pub mod formula;
pub mod signature;
mod symbol;
pub mod term;

pub use formula::{fof::Fof, Formula};
pub use signature::Sig;
pub use symbol::{Const, Func, Pred, Var};
pub use term::Term;

use signature::{FuncSig, PredSig};
use thiserror::Error;

/// Is the type of errors arising from inconsistencies in the syntax of formulae.
#[derive(Error, PartialEq, Eq, Debug)]
pub enum Error {
    /// Is returned when a function symbol is used with two different arities.
    #[error("the function symbol `{}` is used with inconsistent arities {} and {}", .this.symbol, .this.arity, .other.arity)]
    InconsistentFuncSig { this: FuncSig, other: FuncSig },

    /// Is returned when a predicate symbol is used with two different arities.
    #[error("the predicate symbol `{}` is used with inconsistent arities {} and {}", .this.symbol, .this.arity, .other.arity)]
    InconsistentPredSig { this: PredSig, other: PredSig },
}
