//! Enumeration of polymorphic gate combinations.

use std::fmt;

use log::info;

use crate::catalog::{Catalog, GateDefinition};
use crate::compat::{check_gates, SubsetDirection};
use crate::error::Result;
use crate::truth_table::render_pair;
use crate::types::Arity;

/// An (HVDD gate, LVDD gate) pair borrowed from a [`Catalog`].
///
/// Both gates have the same arity and are distinct. Two combinations are equal
/// iff they name the same pair.
#[derive(Debug, Copy, Clone)]
pub struct PolymorphicGateCombination<'c> {
    hvdd: &'c GateDefinition,
    lvdd: &'c GateDefinition,
}

impl<'c> PolymorphicGateCombination<'c> {
    pub fn hvdd(&self) -> &'c GateDefinition {
        self.hvdd
    }

    pub fn lvdd(&self) -> &'c GateDefinition {
        self.lvdd
    }

    pub fn hvdd_name(&self) -> &'c str {
        self.hvdd.name()
    }

    pub fn hvdd_expression(&self) -> &'c str {
        self.hvdd.expression()
    }

    pub fn lvdd_name(&self) -> &'c str {
        self.lvdd.name()
    }

    pub fn lvdd_expression(&self) -> &'c str {
        self.lvdd.expression()
    }

    /// Combined identifier `{hvdd}_{lvdd}`.
    pub fn id(&self) -> String {
        format!("{}_{}", self.hvdd.name(), self.lvdd.name())
    }

    pub fn arity(&self) -> Arity {
        self.hvdd.arity()
    }

    /// Side-by-side truth table of both gates.
    pub fn truth_table(&self) -> String {
        render_pair(
            self.hvdd.name(),
            self.hvdd.truth_table(),
            self.lvdd.name(),
            self.lvdd.truth_table(),
        )
    }
}

impl PartialEq for PolymorphicGateCombination<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.hvdd.name() == other.hvdd.name() && self.lvdd.name() == other.lvdd.name()
    }
}

impl Eq for PolymorphicGateCombination<'_> {}

impl fmt::Display for PolymorphicGateCombination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.id())?;
        writeln!(f, "PolymorphicGateCombination(")?;
        writeln!(f, "\tHVDD: {} ({}),", self.hvdd_name(), self.hvdd_expression())?;
        writeln!(f, "\tLVDD: {} ({})", self.lvdd_name(), self.lvdd_expression())?;
        write!(f, ")")
    }
}

/// Produces every compatible ordered pair of distinct gates with the given arity.
///
/// The HVDD gate runs over the outer loop and the LVDD gate over the inner loop,
/// both in catalog declaration order, so the result is deterministic. `(g1, g2)`
/// and `(g2, g1)` are checked independently.
pub fn generate_combinations(
    catalog: &Catalog,
    arity: Arity,
    direction: SubsetDirection,
) -> Result<Vec<PolymorphicGateCombination<'_>>> {
    let gates = catalog.all_of_arity(arity);
    let mut combinations = Vec::new();
    for &hvdd in &gates {
        for &lvdd in &gates {
            if hvdd.name() == lvdd.name() {
                continue;
            }
            if check_gates(hvdd, lvdd, direction)? {
                combinations.push(PolymorphicGateCombination { hvdd, lvdd });
            }
        }
    }
    info!(
        "{} combinations for {} gates of arity {} ({})",
        combinations.len(),
        gates.len(),
        arity,
        direction
    );
    Ok(combinations)
}

/// Concatenates [`generate_combinations`] over `arities`, in the given order.
pub fn generate_all<'c>(
    catalog: &'c Catalog,
    arities: &[Arity],
    direction: SubsetDirection,
) -> Result<Vec<PolymorphicGateCombination<'c>>> {
    let mut all = Vec::new();
    for &arity in arities {
        all.extend(generate_combinations(catalog, arity, direction)?);
    }
    Ok(all)
}
