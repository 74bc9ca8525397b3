//! Domain layer - pure calculation logic with no external dependencies.
//!
//! This layer contains the core concepts and invariants of the layered
//! calculator:
//! - Operation kinds and their parsing boundary
//! - Calculation requests and their cache identity
//! - The `Evaluator` abstraction the layers compose around
//! - The base arithmetic engines
//! - Small self-contained building blocks (person records, running sums)
//!
//! All types in this layer are pure and easily testable.

pub mod accumulator;
pub mod arithmetic;
pub mod error;
pub mod evaluator;
pub mod operation;
pub mod person;
pub mod request;
