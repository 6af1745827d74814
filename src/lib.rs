/*! Provides a parser for first-order formulae and a pipeline of syntactic
transformations that normalizes them into equisatisfiable sets of clauses in
conjunctive normal form (CNF).

The pipeline eliminates implications, pushes negations down to atoms,
standardizes bound variables apart, moves quantifiers into a prenex prefix,
skolemizes existential variables, distributes disjunctions over conjunctions,
and finally extracts clauses with pairwise disjoint variables:

```rust
use clausal::{syntax::Fof, transform::Normalizer};

let formula: Fof = "(A() -> B()) & (C() | ~D())".parse().unwrap();
let clauses = Normalizer::new().normalize(&formula).unwrap();
assert_eq!("{{B(), ~A()}, {C(), ~D()}}", format!("{:?}", clauses));
```
*/
#[macro_use]
extern crate lalrpop_util;

pub mod parser;
pub mod syntax;
#[cfg(test)]
pub mod test_macros;
pub mod transform;
