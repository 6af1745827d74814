/*! Provides a generator of fresh names for the transformations that invent
symbols, namely variable standardization, Skolemization and clause isolation. */
use crate::syntax::{Const, Func, Var};

// Separates the base of a generated name from its index. The character is not
// accepted by the lexer, so generated names never collide with parsed input.
const SEPARATOR: char = '#';

/// Generates fresh variable, function and constant names off a single shared
/// counter, so no two generated names are ever equal.
///
/// **Example**:
/// ```rust
/// use clausal::transform::NameGenerator;
///
/// let mut generator = NameGenerator::new();
///
/// assert_eq!("x#0", generator.variable(&"x".into()).name());
/// assert_eq!("f#1", generator.function().name());
/// assert_eq!("c#2", generator.constant().name());
/// ```
#[derive(Debug, Default)]
pub struct NameGenerator {
    counter: u32,
}

impl NameGenerator {
    /// Creates a new generator with its counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints a fresh variable derived from the base name of `variable`.
    pub fn variable(&mut self, variable: &Var) -> Var {
        let base = Self::base(variable.name());
        Var::from(format!("{}{}{}", base, SEPARATOR, self.next_index()))
    }

    /// Mints a fresh (Skolem) function name.
    pub fn function(&mut self) -> Func {
        Func::from(format!("f{}{}", SEPARATOR, self.next_index()))
    }

    /// Mints a fresh (Skolem) constant name.
    pub fn constant(&mut self) -> Const {
        Const::from(format!("c{}{}", SEPARATOR, self.next_index()))
    }

    /// Restarts the counter.
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    fn next_index(&mut self) -> u32 {
        let index = self.counter;
        self.counter += 1;
        index
    }

    // The base of an already generated name is the name it was derived from.
    fn base(name: &str) -> &str {
        match name.find(SEPARATOR) {
            Some(index) => &name[..index],
            None => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_names() {
        let mut generator = NameGenerator::new();
        assert_eq!(Var::from("x#0"), generator.variable(&"x".into()));
        assert_eq!(Var::from("y#1"), generator.variable(&"y".into()));
        assert_eq!(Func::from("f#2"), generator.function());
        assert_eq!(Const::from("c#3"), generator.constant());
    }

    #[test]
    fn generated_names_strip_previous_indices() {
        let mut generator = NameGenerator::new();
        let first = generator.variable(&"x".into());
        assert_eq!(Var::from("x#1"), generator.variable(&first));
    }

    #[test]
    fn reset_restarts_the_counter() {
        let mut generator = NameGenerator::new();
        generator.variable(&"x".into());
        generator.reset();
        assert_eq!(Var::from("x#0"), generator.variable(&"x".into()));
    }
}
