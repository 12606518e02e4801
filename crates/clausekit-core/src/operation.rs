/// Operation names and combinators
///
/// The closed set of fifteen filter operations and the two-way logical
/// combinator used to attach them.
use std::fmt;

/// A named filter operation.
///
/// `IsNot` and `NotEqual` both mean "not equal" but render different SQL
/// operators; they stay separate so previously serialized filters replay
/// to the same statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Contains,
    DoesNotContains,
    Is,
    IsNot,
    StartWith,
    EndWith,
    Equal,
    NotEqual,
    LessThan,
    MoreThan,
    LessThanEqual,
    MoreThanEqual,
    At,
    Before,
    After,
}

impl Operation {
    /// Every operation, in registry order.
    pub const ALL: [Operation; 15] = [
        Operation::Contains,
        Operation::DoesNotContains,
        Operation::Is,
        Operation::IsNot,
        Operation::StartWith,
        Operation::EndWith,
        Operation::Equal,
        Operation::NotEqual,
        Operation::LessThan,
        Operation::MoreThan,
        Operation::LessThanEqual,
        Operation::MoreThanEqual,
        Operation::At,
        Operation::Before,
        Operation::After,
    ];

    /// The serialized `function_name` of this operation.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Contains => "Contains",
            Operation::DoesNotContains => "DoesNotContains",
            Operation::Is => "Is",
            Operation::IsNot => "IsNot",
            Operation::StartWith => "StartWith",
            Operation::EndWith => "EndWith",
            Operation::Equal => "Equal",
            Operation::NotEqual => "NotEqual",
            Operation::LessThan => "LessThan",
            Operation::MoreThan => "MoreThan",
            Operation::LessThanEqual => "LessThanEqual",
            Operation::MoreThanEqual => "MoreThanEqual",
            Operation::At => "At",
            Operation::Before => "Before",
            Operation::After => "After",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a predicate joins the predicates already attached to a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    /// `"or"` in any case selects `Or`; every other string selects `And`.
    pub fn resolve(operator: &str) -> Combinator {
        if operator.eq_ignore_ascii_case("or") {
            Combinator::Or
        } else {
            Combinator::And
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::And => write!(f, "AND"),
            Combinator::Or => write!(f, "OR"),
        }
    }
}
