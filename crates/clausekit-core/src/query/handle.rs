/// Query handles
///
/// A query handle is the in-progress query a filter attaches predicates to.
/// `Query` is the in-memory implementation executed by [`super::Executor`].
use super::ast::Expression;
use crate::operation::Combinator;
use crate::predicate::Predicate;
use std::fmt;
use tracing::trace;

/// The contract a filter needs from the query it builds.
pub trait QueryHandle {
    /// Attaches a predicate with AND semantics.
    fn and_where(&mut self, predicate: Predicate);

    /// Attaches a predicate with OR semantics.
    fn or_where(&mut self, predicate: Predicate);

    /// Drops every attached predicate, in place.
    fn clear_predicates(&mut self);

    /// Attaches a predicate under the given combinator.
    fn attach(&mut self, predicate: Predicate, combinator: Combinator) {
        match combinator {
            Combinator::And => self.and_where(predicate),
            Combinator::Or => self.or_where(predicate),
        }
    }
}

impl<Q: QueryHandle + ?Sized> QueryHandle for &mut Q {
    fn and_where(&mut self, predicate: Predicate) {
        (**self).and_where(predicate);
    }

    fn or_where(&mut self, predicate: Predicate) {
        (**self).or_where(predicate);
    }

    fn clear_predicates(&mut self) {
        (**self).clear_predicates();
    }
}

/// Executable form of a query: statement text plus ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<String>,
}

/// In-memory query against a single table.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    table: String,
    condition: Option<Expression>,
}

impl Query {
    /// Creates a query selecting every row of `table`.
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            condition: None,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// The accumulated WHERE condition, if any predicate is attached.
    pub fn condition(&self) -> Option<&Expression> {
        self.condition.as_ref()
    }

    /// Renders the statement with `?` placeholders and its bound parameters.
    pub fn to_sql(&self) -> Statement {
        match &self.condition {
            Some(condition) => Statement {
                sql: format!("SELECT * FROM {} WHERE {}", self.table, condition),
                params: condition.params(),
            },
            None => Statement {
                sql: format!("SELECT * FROM {}", self.table),
                params: Vec::new(),
            },
        }
    }

    fn push(&mut self, predicate: Predicate, op: Combinator) {
        trace!(table = %self.table, column = %predicate.column, %op, "attach predicate");
        // The first predicate opens the condition whatever its combinator.
        match &mut self.condition {
            Some(current) => current.push(op, predicate),
            None => self.condition = Some(Expression::new(predicate)),
        }
    }
}

impl QueryHandle for Query {
    fn and_where(&mut self, predicate: Predicate) {
        self.push(predicate, Combinator::And);
    }

    fn or_where(&mut self, predicate: Predicate) {
        self.push(predicate, Combinator::Or);
    }

    fn clear_predicates(&mut self) {
        self.condition = None;
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sql().sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Comparison;

    #[test]
    fn test_empty_query() {
        let query = Query::table("users");
        let statement = query.to_sql();
        assert_eq!(statement.sql, "SELECT * FROM users");
        assert!(statement.params.is_empty());
    }

    #[test]
    fn test_first_or_opens_condition() {
        let mut query = Query::table("users");
        query.or_where(Predicate::new("name", Comparison::Eq, "Bob"));
        assert_eq!(query.to_sql().sql, "SELECT * FROM users WHERE name = ?");
    }

    #[test]
    fn test_clear_in_place() {
        let mut query = Query::table("users");
        query.and_where(Predicate::new("age", Comparison::Lt, "30"));
        query.and_where(Predicate::new("age", Comparison::Gt, "10"));
        assert_eq!(query.condition().map(Expression::predicate_count), Some(2));

        query.clear_predicates();
        assert!(query.condition().is_none());
        assert_eq!(query.table_name(), "users");
    }

    #[test]
    fn test_attach_through_mut_reference() {
        fn attach_both<H: QueryHandle>(mut handle: H) {
            handle.attach(Predicate::new("a", Comparison::Eq, "1"), Combinator::And);
            handle.attach(Predicate::new("b", Comparison::Eq, "2"), Combinator::Or);
        }

        let mut query = Query::table("users");
        attach_both(&mut query);
        let statement = query.to_sql();
        assert_eq!(statement.sql, "SELECT * FROM users WHERE (a = ? OR b = ?)");
        assert_eq!(statement.params, vec!["1", "2"]);
    }
}
