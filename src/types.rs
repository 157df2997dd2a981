//! Type-safe wrappers for gate input variables and arities.
//!
//! Catalog gates draw their inputs from the fixed alphabet `A`, `B`, `C`, `D`,
//! and a gate with arity `N` uses only the first `N` letters.
use std::fmt;

use crate::error::{Error, Result};

/// An input variable of a gate (`A`, `B`, `C` or `D`).
///
/// Internally 0-indexed: `A` is 0, `D` is 3. The index doubles as the variable's
/// position in a truth-table row, where `A` is the most significant input.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u8);

impl Var {
    pub const A: Var = Var(0);
    pub const B: Var = Var(1);
    pub const C: Var = Var(2);
    pub const D: Var = Var(3);

    /// Number of distinct variables.
    pub const COUNT: usize = 4;

    /// Creates a variable from its 0-based index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 4`.
    pub fn new(index: usize) -> Self {
        assert!(index < Self::COUNT, "Variable index must be < {}", Self::COUNT);
        Var(index as u8)
    }

    /// Maps a letter (`A`..`D`, either case) to its variable.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Var::A),
            'B' => Some(Var::B),
            'C' => Some(Var::C),
            'D' => Some(Var::D),
            _ => None,
        }
    }

    /// Returns the raw 0-based index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Upper-case letter naming this variable.
    pub fn letter(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Number of inputs of a gate.
///
/// # Invariants
///
/// - Always one of 2, 3, 4
/// - A truth table of arity `N` has exactly `2^N` rows
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Arity(u8);

impl Arity {
    pub const TWO: Arity = Arity(2);
    pub const THREE: Arity = Arity(3);
    pub const FOUR: Arity = Arity(4);

    /// All supported arities, ascending.
    pub const ALL: [Arity; 3] = [Arity::TWO, Arity::THREE, Arity::FOUR];

    /// Creates an arity, rejecting anything outside `2..=4`.
    pub fn new(n: usize) -> Result<Self> {
        match n {
            2..=4 => Ok(Arity(n as u8)),
            _ => Err(Error::InvalidArity(n)),
        }
    }

    /// Returns the number of inputs as a `usize`.
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Number of truth-table rows (`2^N`).
    pub fn rows(self) -> usize {
        1 << self.0
    }

    /// Checks whether `var` is one of this arity's leading variables.
    pub fn contains(self, var: Var) -> bool {
        var.index() < self.get()
    }

    /// The leading `N` variables, in order.
    pub fn vars(self) -> impl Iterator<Item = Var> {
        (0..self.get()).map(Var::new)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Arity> for usize {
    fn from(arity: Arity) -> Self {
        arity.get()
    }
}

impl TryFrom<usize> for Arity {
    type Error = Error;

    fn try_from(n: usize) -> Result<Self> {
        Arity::new(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_letters() {
        assert_eq!(Var::A.letter(), 'A');
        assert_eq!(Var::D.letter(), 'D');
        assert_eq!(Var::from_char('c'), Some(Var::C));
        assert_eq!(Var::from_char('B'), Some(Var::B));
        assert_eq!(Var::from_char('E'), None);
        assert!(Var::A < Var::B);
    }

    #[test]
    #[should_panic(expected = "Variable index must be < 4")]
    fn test_var_out_of_range_panics() {
        Var::new(4);
    }

    #[test]
    fn test_arity_bounds() {
        assert!(matches!(Arity::new(1), Err(Error::InvalidArity(1))));
        assert!(matches!(Arity::new(5), Err(Error::InvalidArity(5))));
        assert_eq!(Arity::new(3).unwrap(), Arity::THREE);
    }

    #[test]
    fn test_arity_rows_and_vars() {
        assert_eq!(Arity::TWO.rows(), 4);
        assert_eq!(Arity::THREE.rows(), 8);
        assert_eq!(Arity::FOUR.rows(), 16);

        let vars: Vec<Var> = Arity::THREE.vars().collect();
        assert_eq!(vars, vec![Var::A, Var::B, Var::C]);
        assert!(Arity::THREE.contains(Var::C));
        assert!(!Arity::THREE.contains(Var::D));
    }
}
