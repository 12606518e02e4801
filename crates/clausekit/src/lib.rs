//! # Clausekit
//!
//! A declarative query-filter builder. Compose named predicate operations
//! against columns, combine them with AND/OR, hand the resulting query to
//! an executor, and serialize the composition to JSON so an equivalent
//! filter can be rebuilt later.
//!
//! ## Quick Start
//!
//! ```rust
//! use clausekit::{parse, Filter, Query};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut filter = Filter::new(Query::table("users"));
//!     filter
//!         .contains("Farcha", "name", "AND")
//!         .after("2000-01-01", "birth_date", "AND")
//!         .is("Angger Pangestu", "name", "OR");
//!
//!     // Store the filter somewhere...
//!     let encoded = filter.build()?;
//!
//!     // ...and rebuild it against a fresh query later
//!     let restored = parse(Query::table("users"), &encoded)?;
//!     assert_eq!(restored.clauses(), filter.clauses());
//!     assert_eq!(restored.to_sql().to_sql(), filter.to_sql().to_sql());
//!     Ok(())
//! }
//! ```
//!
//! ## Operations
//!
//! | Method | Predicate |
//! |---|---|
//! | `contains` / `does_not_contains` | `LIKE` / `NOT LIKE %value%` |
//! | `start_with` / `end_with` | `LIKE value%` / `LIKE %value` |
//! | `is` / `equal` / `at` | `=` |
//! | `is_not` | `!=` |
//! | `not_equal` | `<>` |
//! | `less_than` / `before` | `<` |
//! | `more_than` / `after` | `>` |
//! | `less_than_equal` / `more_than_equal` | `<=` / `>=` |
//!
//! Every method takes `(value, column, operator)`; an operator of `"or"`
//! in any case attaches with OR, anything else with AND. Values are bound
//! as parameters and never written into the statement text.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Filter serialization
pub mod codec;
pub mod config;
/// Dynamic dispatch of decoded clauses
#[allow(missing_docs)]
pub mod dispatch;
/// Filter accumulator
#[allow(missing_docs)]
pub mod filter;
/// Input limits for parsing serialized filters
#[allow(missing_docs)]
pub mod limits;
pub mod logging;
/// Predicate translation
pub mod translate;

// Re-export core types
pub use clausekit_core::query::{Column, ExecutionContext, Executor, Row, Value};
pub use clausekit_core::{
    Clause, Combinator, Comparison, Error, Operation, Predicate, Query, QueryHandle, Result,
    Statement,
};

pub use codec::{parse, parse_with_config};
pub use config::{FilterConfig, UnknownOperationPolicy};
pub use dispatch::{Dispatch, Dispatcher, ReplayStats};
pub use filter::Filter;
pub use limits::InputLimits;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
