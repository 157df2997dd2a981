//! # poly-mtncl: polymorphic threshold gates for dual-supply MTNCL
//!
//! A **polymorphic gate** is one physical circuit that realises two different boolean
//! functions depending on its supply: one under **HVDD** and another under **LVDD**.
//! For threshold (`THmn`) gates the two functions are usable together when one function's
//! satisfying set is contained in the other's.
//!
//! This crate holds a fixed catalog of threshold-gate functions and finds every ordered
//! (HVDD, LVDD) pair of equal arity that satisfies such a subset relation.
//!
//! ## Basic Usage
//!
//! ```rust
//! use poly_mtncl::catalog::Catalog;
//! use poly_mtncl::combination::generate_combinations;
//! use poly_mtncl::compat::{is_compatible, SubsetDirection};
//! use poly_mtncl::types::Arity;
//!
//! let catalog = Catalog::builtin();
//!
//! // TH22 = A & B implies TH12 = A | B, but not the other way around.
//! assert!(is_compatible(catalog, "TH22", "TH12", SubsetDirection::HvddSubset).unwrap());
//! assert!(!is_compatible(catalog, "TH12", "TH22", SubsetDirection::HvddSubset).unwrap());
//!
//! let pairs = generate_combinations(catalog, Arity::TWO, SubsetDirection::HvddSubset).unwrap();
//! assert_eq!(pairs.len(), 1);
//! assert_eq!(pairs[0].id(), "TH22_TH12");
//! ```
//!
//! ## Core Components
//!
//! - **[`catalog`]**: the named gate functions, arity derivation, load-time validation.
//! - **[`truth_table`]**: exhaustive evaluation of a gate function (at most 16 rows).
//! - **[`compat`]**: the subset relation between two gates.
//! - **[`combination`]**: enumeration of compatible pairs.
//! - **[`export`]**: CSV output and the text listing.

pub mod ast;
pub mod catalog;
pub mod combination;
pub mod compat;
pub mod error;
pub mod export;
pub mod parser;
pub mod truth_table;
pub mod types;

pub use catalog::{Catalog, GateDefinition};
pub use combination::{generate_all, generate_combinations, PolymorphicGateCombination};
pub use compat::{is_compatible, SubsetDirection};
pub use error::{Error, Result};
pub use truth_table::{evaluate, TruthTable};
pub use types::{Arity, Var};
