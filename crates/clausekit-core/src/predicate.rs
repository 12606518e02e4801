/// Predicate fragments
///
/// A predicate is a column, a comparison and a bound value. Only the column
/// and the comparison operator ever reach the statement text; the value
/// travels separately as a parameter.
use std::fmt;

/// Comparison operators a predicate can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// LIKE
    Like,
    /// NOT LIKE
    NotLike,
    /// =
    Eq,
    /// != (style used by `IsNot`)
    NotEqBang,
    /// <> (style used by `NotEqual`)
    NotEqAngle,
    /// <
    Lt,
    /// >
    Gt,
    /// <=
    Le,
    /// >=
    Ge,
}

impl Comparison {
    /// SQL spelling of the operator.
    pub fn as_sql(self) -> &'static str {
        match self {
            Comparison::Like => "LIKE",
            Comparison::NotLike => "NOT LIKE",
            Comparison::Eq => "=",
            Comparison::NotEqBang => "!=",
            Comparison::NotEqAngle => "<>",
            Comparison::Lt => "<",
            Comparison::Gt => ">",
            Comparison::Le => "<=",
            Comparison::Ge => ">=",
        }
    }

    /// Whether this comparison matches against a wildcard pattern.
    pub fn is_pattern(self) -> bool {
        matches!(self, Comparison::Like | Comparison::NotLike)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_sql())
    }
}

/// A predicate fragment ready to attach to a query handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: String,
    pub comparison: Comparison,
    /// Bound parameter, already wildcard-wrapped for pattern comparisons
    pub value: String,
}

impl Predicate {
    pub fn new(column: impl Into<String>, comparison: Comparison, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            comparison,
            value: value.into(),
        }
    }

    /// Expression template with a single `?` placeholder for the value.
    pub fn template(&self) -> String {
        format!("{} {} ?", self.column, self.comparison)
    }
}
