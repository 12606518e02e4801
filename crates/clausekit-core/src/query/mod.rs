/// Query handle module
///
/// The in-progress query a filter attaches predicates to, and an
/// in-memory executor for it.
/// Abstract Syntax Tree types
#[allow(missing_docs)]
pub mod ast;
/// Query executor
#[allow(missing_docs)]
pub mod executor;
/// Query handle trait and in-memory query
#[allow(missing_docs)]
pub mod handle;

// Re-export main types
pub use ast::Expression;
pub use executor::{like, Column, ExecutionContext, Executor, Row, Value};
pub use handle::{Query, QueryHandle, Statement};
