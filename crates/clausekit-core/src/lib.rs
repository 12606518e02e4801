//! # Clausekit Core
//!
//! Core types for clausekit: the serializable clause record, the closed
//! operation set, predicate fragments and the query-handle contract.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clause;
pub mod error;
/// Operation names and combinators
#[allow(missing_docs)]
pub mod operation;
/// Predicate fragments
#[allow(missing_docs)]
pub mod predicate;
pub mod query;

pub use clause::Clause;
pub use error::{Error, Result};
pub use operation::{Combinator, Operation};
pub use predicate::{Comparison, Predicate};
pub use query::{Query, QueryHandle, Statement};
