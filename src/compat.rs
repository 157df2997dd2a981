//! Subset compatibility between two gate functions.
//!
//! A polymorphic gate realises one function under HVDD and another under LVDD.
//! The pair is usable when one function's satisfying set contains the other's:
//!
//! - [`SubsetDirection::HvddSubset`]: `f_hvdd => f_lvdd` holds on every input,
//! - [`SubsetDirection::LvddSubset`]: `f_lvdd => f_hvdd` holds on every input.
//!
//! With at most four inputs there are at most 16 rows, so the implication is
//! checked exhaustively rather than symbolically.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::ast::Expr;
use crate::catalog::{Catalog, GateDefinition};
use crate::error::{Error, Result};
use crate::truth_table::row_input;
use crate::types::{Arity, Var};

/// Which gate's function must be contained in the other's.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SubsetDirection {
    /// The HVDD function implies the LVDD function.
    HvddSubset,
    /// The LVDD function implies the HVDD function.
    LvddSubset,
}

impl SubsetDirection {
    pub const ALL: [SubsetDirection; 2] = [SubsetDirection::HvddSubset, SubsetDirection::LvddSubset];

    pub fn as_str(self) -> &'static str {
        match self {
            SubsetDirection::HvddSubset => "hvdd_subset",
            SubsetDirection::LvddSubset => "lvdd_subset",
        }
    }
}

impl fmt::Display for SubsetDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubsetDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hvdd_subset" | "hvdd" => Ok(SubsetDirection::HvddSubset),
            "lvdd_subset" | "lvdd" => Ok(SubsetDirection::LvddSubset),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

/// Checks whether `gate1` (HVDD) and `gate2` (LVDD) satisfy `direction`.
///
/// Fails with [`Error::UnknownGate`] if either name is missing from `catalog`,
/// and with [`Error::ArityMismatch`] if the gates have different arities.
pub fn is_compatible(catalog: &Catalog, gate1: &str, gate2: &str, direction: SubsetDirection) -> Result<bool> {
    let g1 = catalog.lookup(gate1)?;
    let g2 = catalog.lookup(gate2)?;
    check_gates(g1, g2, direction)
}

/// Same as [`is_compatible`], for definitions already looked up.
pub fn check_gates(hvdd: &GateDefinition, lvdd: &GateDefinition, direction: SubsetDirection) -> Result<bool> {
    if hvdd.arity() != lvdd.arity() {
        return Err(Error::ArityMismatch {
            context: format!("`{}` vs `{}`", hvdd.name(), lvdd.name()),
            expected: hvdd.arity().get(),
            found: lvdd.arity().get(),
        });
    }
    let (sub, sup) = match direction {
        SubsetDirection::HvddSubset => (hvdd, lvdd),
        SubsetDirection::LvddSubset => (lvdd, hvdd),
    };
    let result = sub.truth_table().implies(sup.truth_table());
    debug!(
        "is_compatible({}, {}, {}) = {}",
        hvdd.name(),
        lvdd.name(),
        direction,
        result
    );
    Ok(result)
}

/// Checks `f => g` by evaluating both trees on every row of `arity`.
///
/// Does not use precomputed truth tables, so it serves as an independent check
/// of [`TruthTable::implies`][crate::truth_table::TruthTable::implies].
///
/// # Panics
///
/// Panics if either expression references a variable beyond `arity`.
pub fn implies_pointwise(f: &Expr, g: &Expr, arity: Arity) -> bool {
    for var in f.max_var().into_iter().chain(g.max_var()) {
        assert!(
            arity.contains(var),
            "Expression references {} but arity is {}",
            var,
            arity
        );
    }
    (0..arity.rows()).all(|index| {
        let assignment = |v: Var| row_input(arity, index, v);
        !f.eval(assignment) || g.eval(assignment)
    })
}
