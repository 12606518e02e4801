/// Query executor
///
/// Evaluates a [`Query`] against in-memory tables. Bound values arrive as
/// text; the executor coerces them to the column's value type the way a
/// SQL store with type affinity would.
use super::ast::Expression;
use super::handle::Query;
use crate::error::Result;
use crate::predicate::{Comparison, Predicate};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Query result row
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub columns: Vec<Column>,
    pub values: Vec<Value>,
}

impl Row {
    /// Builds a row from `(column, value)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        let (columns, values) = pairs
            .into_iter()
            .map(|(name, value)| (Column { name: name.into() }, value))
            .unzip();
        Row { columns, values }
    }

    /// Value stored under `name`, if the row has that column.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .and_then(|idx| self.values.get(idx))
    }
}

/// Column metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
}

/// Value types stored in rows
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
}

impl Value {
    /// Compare this stored value with a bound text parameter.
    ///
    /// The parameter is coerced to this value's type; a parameter that does
    /// not coerce never matches. NULL never matches.
    pub fn compare_text(&self, bound: &str, op: Comparison) -> bool {
        if op.is_pattern() {
            return match self {
                Value::Null => false,
                other => {
                    let matched = like(&other.to_string(), bound);
                    if op == Comparison::Like {
                        matched
                    } else {
                        !matched
                    }
                }
            };
        }

        let ordering = match self {
            Value::Integer(a) => match bound.trim().parse::<i64>() {
                Ok(b) => Some(a.cmp(&b)),
                Err(_) => bound
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .and_then(|b| (*a as f64).partial_cmp(&b)),
            },
            Value::Float(a) => bound
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(|b| a.partial_cmp(&b)),
            Value::String(a) => Some(a.as_str().cmp(bound)),
            Value::Boolean(a) => parse_bool(bound).map(|b| a.cmp(&b)),
            Value::Null => None,
        };

        match ordering {
            Some(ordering) => match op {
                Comparison::Eq => ordering == Ordering::Equal,
                Comparison::NotEqBang | Comparison::NotEqAngle => ordering != Ordering::Equal,
                Comparison::Lt => ordering == Ordering::Less,
                Comparison::Le => ordering != Ordering::Greater,
                Comparison::Gt => ordering == Ordering::Greater,
                Comparison::Ge => ordering != Ordering::Less,
                Comparison::Like | Comparison::NotLike => false,
            },
            None => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "{}", s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => write!(f, "NULL"),
        }
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim() {
        t if t.eq_ignore_ascii_case("true") || t == "1" => Some(true),
        t if t.eq_ignore_ascii_case("false") || t == "0" => Some(false),
        _ => None,
    }
}

/// SQL LIKE matching: `%` spans any run, `_` matches one character,
/// ASCII letters compare case-insensitively.
pub fn like(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    let (mut t, mut p) = (0, 0);
    // Position of the last `%` seen and the text index it was tried at.
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && pattern[p] == '%' {
            backtrack = Some((p, t));
            p += 1;
        } else if p < pattern.len()
            && (pattern[p] == '_' || pattern[p].eq_ignore_ascii_case(&text[t]))
        {
            p += 1;
            t += 1;
        } else if let Some((star, from)) = backtrack {
            p = star + 1;
            t = from + 1;
            backtrack = Some((star, from + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&c| c == '%')
}

/// Query execution context
#[derive(Clone, Default)]
pub struct ExecutionContext {
    /// Table name to rows
    pub data: HashMap<String, Vec<Row>>,
}

impl ExecutionContext {
    /// Creates a new execution context
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a table.
    pub fn with_table(mut self, name: impl Into<String>, rows: Vec<Row>) -> Self {
        self.data.insert(name.into(), rows);
        self
    }
}

/// Query executor
pub struct Executor {
    context: ExecutionContext,
}

impl Executor {
    /// Create new executor
    pub fn new(context: ExecutionContext) -> Self {
        Self { context }
    }

    /// Execute a query, returning the matching rows in table order.
    ///
    /// An unknown table yields no rows.
    pub fn execute(&self, query: &Query) -> Result<Vec<Row>> {
        let rows = self
            .context
            .data
            .get(query.table_name())
            .map(Vec::as_slice)
            .unwrap_or_default();

        let result: Vec<Row> = match query.condition() {
            Some(condition) => rows
                .iter()
                .filter(|row| evaluate_condition(row, condition))
                .cloned()
                .collect(),
            None => rows.to_vec(),
        };

        debug!(table = query.table_name(), matched = result.len(), "query executed");
        Ok(result)
    }

    /// Execute a query and return only the first matching row.
    pub fn first(&self, query: &Query) -> Result<Option<Row>> {
        Ok(self.execute(query)?.into_iter().next())
    }
}

fn evaluate_condition(row: &Row, condition: &Expression) -> bool {
    condition.evaluate(|predicate| evaluate_predicate(row, predicate))
}

fn evaluate_predicate(row: &Row, predicate: &Predicate) -> bool {
    row.get(&predicate.column)
        .is_some_and(|value| value.compare_text(&predicate.value, predicate.comparison))
}
