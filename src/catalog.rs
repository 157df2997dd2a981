//! The gate catalog: named threshold-gate functions and their arities.
//!
//! # Naming
//!
//! Threshold gates follow the `THmn` convention: at least `m` of `n` inputs must be
//! asserted, so the arity is the second digit (`TH23` and `TH23w2` are both 3-input).
//! A `w`-suffix marks weighted variants. A few gates do not follow the convention
//! at all; their arity lives in an explicit exception table, consulted *before*
//! the name is parsed.
//!
//! # Validation
//!
//! [`Catalog::from_entries`] parses every expression once and checks it only uses
//! variables its arity provides. Malformed data is rejected there, once, so queries
//! never fail because of a bad entry.

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

use crate::ast::Expr;
use crate::error::{Error, Result};
use crate::parser::parse_expr;
use crate::truth_table::{evaluate, TruthTable};
use crate::types::Arity;

/// Built-in gates, in canonical (declaration) order.
pub const BUILTIN_GATES: &[(&str, &str)] = &[
    ("TH12", "A | B"),
    ("TH22", "A & B"),
    ("TH13", "A | B | C"),
    ("TH23", "(A & B) | (A & C) | (B & C)"),
    ("TH33", "A & B & C"),
    ("TH23w2", "A | (B & C)"),
    ("TH33w2", "(A & B) | (A & C)"),
    ("TH14", "A | B | C | D"),
    ("TH24", "(A & B) | (A & C) | (A & D) | (B & C) | (B & D) | (C & D)"),
    ("TH34", "(A & B & C) | (A & B & D) | (A & C & D) | (B & C & D)"),
    ("TH44", "A & B & C & D"),
    ("TH24w2", "A | (B & C) | (B & D) | (C & D)"),
    ("TH34w2", "(A & B) | (A & C) | (A & D) | (B & C & D)"),
    ("TH44w2", "(A & B & C) | (A & B & D) | (A & C & D)"),
    ("TH34w3", "A | (B & C & D)"),
    ("TH44w3", "(A & B) | (A & C) | (A & D)"),
    ("TH24w22", "A | B | (C & D)"),
    ("TH34w22", "(A & B) | (A & C) | (A & D) | (B & C) | (B & D)"),
    ("TH44w22", "(A & B & C) | (A & B & D) | (A & C & D) | (B & C)"),
    ("TH54w22", "A & B & C | A & B & D"),
    ("TH34w32", "A | B | (C & D)"),
    ("TH54w32", "A & B | A & C & D | B & C & D"),
    ("TH44w322", "A & B | A & C | A & D | B & C"),
    ("TH54w322", "A & B & C | A & B & D | C & D"),
    ("THxor0", "A & B | C & D"),
    ("THand0", "A & B | B & C | A & D"),
    ("TH24comp", "A & C | B & C | A & D | B & D"),
];

/// Gates whose arity cannot be read off their name.
pub const ARITY_EXCEPTIONS: &[(&str, Arity)] = &[
    ("THxor0", Arity::FOUR),
    ("THand0", Arity::FOUR),
    ("TH24comp", Arity::FOUR),
];

static BUILTIN: Lazy<Catalog> = Lazy::new(|| match Catalog::from_entries(BUILTIN_GATES.iter().copied()) {
    Ok(catalog) => catalog,
    Err(e) => panic!("built-in gate catalog is invalid: {}", e),
});

/// Determines a gate's arity from its name.
///
/// The exception table wins; otherwise the name must look like `TH<digit><digit>...`
/// and the second digit is the arity.
pub fn derive_arity(name: &str) -> Result<Arity> {
    if let Some(&(_, arity)) = ARITY_EXCEPTIONS.iter().find(|(n, _)| *n == name) {
        return Ok(arity);
    }
    match name.as_bytes() {
        [b'T', b'H', m, n, ..] if m.is_ascii_digit() && n.is_ascii_digit() => Arity::new((n - b'0') as usize),
        _ => Err(Error::UnknownArity(name.to_string())),
    }
}

/// A named gate function.
#[derive(Debug, Clone)]
pub struct GateDefinition {
    name: String,
    expression: String,
    expr: Expr,
    arity: Arity,
    table: TruthTable,
}

impl GateDefinition {
    /// Parses and validates a single gate.
    pub fn new(name: impl Into<String>, expression: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let expression = expression.into();
        let arity = derive_arity(&name)?;
        let expr = parse_expr(&expression)?;
        if let Some(var) = expr.max_var() {
            if !arity.contains(var) {
                return Err(Error::VariableOutOfRange {
                    gate: name,
                    var: var.letter(),
                    arity: arity.get(),
                });
            }
        }
        let table = evaluate(&expr, arity);
        debug!("gate {} (arity {}): {} -> {:0width$b}", name, arity, expr, table.bits(), width = arity.rows());
        Ok(Self {
            name,
            expression,
            expr,
            arity,
            table,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expression text exactly as authored.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Parsed expression tree.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Truth table over the gate's own arity, computed at load time.
    pub fn truth_table(&self) -> &TruthTable {
        &self.table
    }

    /// Evaluates the gate at an explicitly requested arity.
    ///
    /// The request must match the declared arity: a smaller one cannot represent
    /// the function and a larger one would invent inputs the gate does not have.
    pub fn evaluate_at(&self, arity: Arity) -> Result<TruthTable> {
        if arity != self.arity {
            return Err(Error::ArityMismatch {
                context: format!("evaluation of `{}`", self.name),
                expected: self.arity.get(),
                found: arity.get(),
            });
        }
        Ok(evaluate(&self.expr, arity))
    }
}

/// Immutable, ordered collection of gate definitions.
#[derive(Debug, Clone)]
pub struct Catalog {
    gates: Vec<GateDefinition>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The built-in catalog, initialised on first use and shared afterwards.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Builds a catalog from `(name, expression)` pairs, keeping their order.
    pub fn from_entries<I, N, E>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, E)>,
        N: Into<String>,
        E: Into<String>,
    {
        let mut gates = Vec::new();
        let mut index = HashMap::new();
        for (name, expression) in entries {
            let gate = GateDefinition::new(name, expression)?;
            if index.contains_key(gate.name()) {
                return Err(Error::DuplicateGate(gate.name));
            }
            index.insert(gate.name.clone(), gates.len());
            gates.push(gate);
        }
        debug!("loaded catalog with {} gates", gates.len());
        Ok(Self { gates, index })
    }

    /// Looks up a gate by name.
    pub fn lookup(&self, name: &str) -> Result<&GateDefinition> {
        self.index
            .get(name)
            .map(|&i| &self.gates[i])
            .ok_or_else(|| Error::UnknownGate(name.to_string()))
    }

    /// Gates with the given arity, in declaration order.
    pub fn all_of_arity(&self, arity: Arity) -> Vec<&GateDefinition> {
        self.gates.iter().filter(|g| g.arity == arity).collect()
    }

    /// All gates, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &GateDefinition> {
        self.gates.iter()
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a GateDefinition;
    type IntoIter = std::slice::Iter<'a, GateDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}
