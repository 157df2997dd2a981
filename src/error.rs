//! Error type shared by every module of the crate.

use std::io;

use thiserror::Error;

/// Errors raised by catalog construction, queries, and export.
///
/// Catalog-shaped errors ([`MalformedExpression`][Error::MalformedExpression],
/// [`VariableOutOfRange`][Error::VariableOutOfRange], [`DuplicateGate`][Error::DuplicateGate],
/// [`UnknownArity`][Error::UnknownArity]) are only produced while a [`Catalog`][crate::catalog::Catalog]
/// is being built. Everything after that point trusts the loaded data.
#[derive(Debug, Error)]
pub enum Error {
    /// Gate name not present in the catalog.
    #[error("unknown gate `{0}`")]
    UnknownGate(String),

    /// Two gates (or a gate and a requested table size) disagree on arity.
    #[error("arity mismatch in {context}: expected {expected} inputs, found {found}")]
    ArityMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    /// Subset direction outside `hvdd_subset` / `lvdd_subset`.
    #[error("invalid subset direction `{0}` (expected `hvdd_subset` or `lvdd_subset`)")]
    InvalidDirection(String),

    /// Input count outside the supported 2..=4 range.
    #[error("invalid arity {0} (expected 2, 3 or 4)")]
    InvalidArity(usize),

    /// Gate name neither follows the `THmn` convention nor appears in the exception table.
    #[error("cannot derive arity from gate name `{0}`")]
    UnknownArity(String),

    #[error("duplicate gate `{0}` in catalog")]
    DuplicateGate(String),

    /// Expression text could not be parsed.
    #[error("malformed expression `{expr}` at offset {position}: {message}")]
    MalformedExpression {
        expr: String,
        position: usize,
        message: String,
    },

    /// Expression references a variable that the gate's arity does not provide.
    #[error("gate `{gate}` references variable {var} but has only {arity} inputs")]
    VariableOutOfRange { gate: String, var: char, arity: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
