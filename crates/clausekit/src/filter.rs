/// Filter accumulator
///
/// A `Filter` owns a query handle and the ordered log of clauses applied
/// to it. Every operation appends to the log and attaches the matching
/// predicate to the handle; the log is what `build` serializes.
use crate::codec;
use crate::translate::translate;
use clausekit_core::{Clause, Operation, Query, QueryHandle, Result};
use tracing::debug;

/// Fluent filter builder bound to one query handle.
///
/// # Examples
///
/// ```rust
/// use clausekit::{Filter, Query};
///
/// let mut filter = Filter::new(Query::table("users"));
/// filter
///     .contains("Farcha", "name", "AND")
///     .after("2000-01-01", "birth_date", "AND")
///     .is("Angger Pangestu", "name", "OR");
///
/// let statement = filter.to_sql().to_sql();
/// assert_eq!(
///     statement.sql,
///     "SELECT * FROM users WHERE ((name LIKE ? AND birth_date > ?) OR name = ?)"
/// );
/// assert_eq!(statement.params, vec!["%Farcha%", "2000-01-01", "Angger Pangestu"]);
/// ```
#[derive(Debug, Clone)]
pub struct Filter<Q: QueryHandle = Query> {
    query: Q,
    encoded: Vec<Clause>,
}

impl<Q: QueryHandle> Filter<Q> {
    /// Binds a new, empty filter to an existing query handle.
    pub fn new(query: Q) -> Self {
        Self {
            query,
            encoded: Vec::new(),
        }
    }

    /// Logs `operation` and attaches its predicate to the query.
    ///
    /// The logged `function_name` is always `operation`'s own name, even for
    /// aliases that share another operation's comparison.
    pub fn apply(
        &mut self,
        operation: Operation,
        value: &str,
        column: &str,
        operator: &str,
    ) -> &mut Self {
        self.encoded
            .push(Clause::new(operation.name(), value, column, operator));

        let (predicate, combinator) = translate(operation, value, column, operator);
        debug!(
            %operation,
            column = %predicate.column,
            comparison = %predicate.comparison,
            %combinator,
            "attach predicate"
        );
        self.query.attach(predicate, combinator);
        self
    }

    /// `column LIKE %value%`
    pub fn contains(&mut self, value: &str, column: &str, operator: &str) -> &mut Self {
        self.apply(Operation::Contains, value, column, operator)
    }

    /// `column NOT LIKE %value%`
    pub fn does_not_contains(&mut self, value: &str, column: &str, operator: &str) -> &mut Self {
        self.apply(Operation::DoesNotContains, value, column, operator)
    }

    /// `column = value`
    pub fn is(&mut self, value: &str, column: &str, operator: &str) -> &mut Self {
        self.apply(Operation::Is, value, column, operator)
    }

    /// `column != value`
    pub fn is_not(&mut self, value: &str, column: &str, operator: &str) -> &mut Self {
        self.apply(Operation::IsNot, value, column, operator)
    }

    /// `column LIKE value%`
    pub fn start_with(&mut self, value: &str, column: &str, operator: &str) -> &mut Self {
        self.apply(Operation::StartWith, value, column, operator)
    }

    /// `column LIKE %value`
    pub fn end_with(&mut self, value: &str, column: &str, operator: &str) -> &mut Self {
        self.apply(Operation::EndWith, value, column, operator)
    }

    /// Same predicate as [`Filter::is`], logged as `Equal`.
    pub fn equal(&mut self, value: &str, column: &str, operator: &str) -> &mut Self {
        self.apply(Operation::Equal, value, column, operator)
    }

    /// `column <> value`
    pub fn not_equal(&mut self, value: &str, column: &str, operator: &str) -> &mut Self {
        self.apply(Operation::NotEqual, value, column, operator)
    }

    /// `column < value`
    pub fn less_than(&mut self, value: &str, column: &str, operator: &str) -> &mut Self {
        self.apply(Operation::LessThan, value, column, operator)
    }

    /// `column > value`
    pub fn more_than(&mut self, value: &str, column: &str, operator: &str) -> &mut Self {
        self.apply(Operation::MoreThan, value, column, operator)
    }

    /// `column <= value`
    pub fn less_than_equal(&mut self, value: &str, column: &str, operator: &str) -> &mut Self {
        self.apply(Operation::LessThanEqual, value, column, operator)
    }

    /// `column >= value`
    pub fn more_than_equal(&mut self, value: &str, column: &str, operator: &str) -> &mut Self {
        self.apply(Operation::MoreThanEqual, value, column, operator)
    }

    /// Temporal `column = value`
    pub fn at(&mut self, value: &str, column: &str, operator: &str) -> &mut Self {
        self.apply(Operation::At, value, column, operator)
    }

    /// Temporal `column < value`
    pub fn before(&mut self, value: &str, column: &str, operator: &str) -> &mut Self {
        self.apply(Operation::Before, value, column, operator)
    }

    /// Temporal `column > value`
    pub fn after(&mut self, value: &str, column: &str, operator: &str) -> &mut Self {
        self.apply(Operation::After, value, column, operator)
    }

    /// The query handle, ready for the caller to execute.
    pub fn to_sql(&self) -> &Q {
        &self.query
    }

    /// Releases the query handle, dropping the clause log.
    pub fn into_inner(self) -> Q {
        self.query
    }

    /// The clause log, in call order.
    pub fn clauses(&self) -> &[Clause] {
        &self.encoded
    }

    pub fn len(&self) -> usize {
        self.encoded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoded.is_empty()
    }

    /// Drops every attached predicate and empties the clause log.
    ///
    /// The existing handle is reset in place, never replaced.
    pub fn clear(&mut self) -> &mut Self {
        debug!(clauses = self.encoded.len(), "clear filter");
        self.query.clear_predicates();
        self.encoded.clear();
        self
    }

    /// Serializes the clause log as a JSON array.
    pub fn build(&self) -> Result<String> {
        codec::encode(&self.encoded)
    }

    /// Like [`Filter::build`], indented for humans.
    pub fn build_pretty(&self) -> Result<String> {
        codec::encode_pretty(&self.encoded)
    }
}
