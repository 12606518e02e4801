/// Predicate translation
///
/// Maps an operation and its raw arguments to the predicate fragment that
/// gets attached to the query, plus the combinator to attach it with.
use clausekit_core::{Combinator, Comparison, Operation, Predicate};

/// Wildcard marker used by pattern operations.
pub const WILDCARD: char = '%';

/// Translates one operation call into a predicate and its combinator.
///
/// The value is only ever placed in the predicate's bound parameter; the
/// expression template is built from the column and comparison alone.
pub fn translate(
    operation: Operation,
    value: &str,
    column: &str,
    operator: &str,
) -> (Predicate, Combinator) {
    let (bound, comparison) = match operation {
        Operation::Contains => (wrap_both(value), Comparison::Like),
        Operation::DoesNotContains => (wrap_both(value), Comparison::NotLike),
        Operation::Is => (value.to_string(), Comparison::Eq),
        Operation::IsNot => (value.to_string(), Comparison::NotEqBang),
        Operation::StartWith => (format!("{}{}", value, WILDCARD), Comparison::Like),
        Operation::EndWith => (format!("{}{}", WILDCARD, value), Comparison::Like),
        // Equal has no comparison of its own
        Operation::Equal => return translate(Operation::Is, value, column, operator),
        Operation::NotEqual => (value.to_string(), Comparison::NotEqAngle),
        Operation::LessThan => (value.to_string(), Comparison::Lt),
        Operation::MoreThan => (value.to_string(), Comparison::Gt),
        Operation::LessThanEqual => (value.to_string(), Comparison::Le),
        Operation::MoreThanEqual => (value.to_string(), Comparison::Ge),
        Operation::At => (value.to_string(), Comparison::Eq),
        Operation::Before => (value.to_string(), Comparison::Lt),
        Operation::After => (value.to_string(), Comparison::Gt),
    };

    (
        Predicate::new(column, comparison, bound),
        Combinator::resolve(operator),
    )
}

fn wrap_both(value: &str) -> String {
    format!("{}{}{}", WILDCARD, value, WILDCARD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_operations_wrap_value_once() {
        let cases = [
            (Operation::Contains, "%Farcha%", Comparison::Like),
            (Operation::DoesNotContains, "%Farcha%", Comparison::NotLike),
            (Operation::StartWith, "Farcha%", Comparison::Like),
            (Operation::EndWith, "%Farcha", Comparison::Like),
        ];

        for (operation, expected, comparison) in cases {
            let (predicate, _) = translate(operation, "Farcha", "name", "AND");
            assert_eq!(predicate.value, expected, "{}", operation);
            assert_eq!(predicate.value.matches("Farcha").count(), 1);
            assert_eq!(predicate.comparison, comparison);
            assert!(!predicate.template().contains("Farcha"));
        }
    }

    #[test]
    fn test_comparison_table() {
        let cases = [
            (Operation::Is, Comparison::Eq),
            (Operation::IsNot, Comparison::NotEqBang),
            (Operation::Equal, Comparison::Eq),
            (Operation::NotEqual, Comparison::NotEqAngle),
            (Operation::LessThan, Comparison::Lt),
            (Operation::MoreThan, Comparison::Gt),
            (Operation::LessThanEqual, Comparison::Le),
            (Operation::MoreThanEqual, Comparison::Ge),
            (Operation::At, Comparison::Eq),
            (Operation::Before, Comparison::Lt),
            (Operation::After, Comparison::Gt),
        ];

        for (operation, comparison) in cases {
            let (predicate, _) = translate(operation, "22", "age", "AND");
            assert_eq!(predicate.comparison, comparison, "{}", operation);
            assert_eq!(predicate.value, "22");
            assert_eq!(predicate.column, "age");
        }
    }

    #[test]
    fn test_equal_matches_is() {
        assert_eq!(
            translate(Operation::Equal, "22", "age", "or"),
            translate(Operation::Is, "22", "age", "or")
        );
    }

    #[test]
    fn test_combinator_from_operator() {
        assert_eq!(translate(Operation::Is, "1", "a", "Or").1, Combinator::Or);
        assert_eq!(translate(Operation::Is, "1", "a", "and").1, Combinator::And);
        assert_eq!(translate(Operation::Is, "1", "a", "nand").1, Combinator::And);
    }

    #[test]
    fn test_hostile_value_stays_bound() {
        let (predicate, _) = translate(Operation::Contains, "x' OR '1'='1", "name", "AND");
        assert_eq!(predicate.template(), "name LIKE ?");
        assert_eq!(predicate.value, "%x' OR '1'='1%");
    }
}
