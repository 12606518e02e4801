/// Abstract Syntax Tree (AST) node types for accumulated filter conditions
///
/// Conditions are built left to right: every new predicate combines with
/// the condition accumulated so far, so `a AND b OR c` is `((a AND b) OR c)`.
/// The chain is stored flat, so rendering, evaluation and drop all run in
/// loops regardless of how many predicates are attached.
use crate::operation::Combinator;
use crate::predicate::Predicate;
use std::fmt;

/// Boolean expression for the WHERE clause
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    first: Predicate,
    rest: Vec<(Combinator, Predicate)>,
}

impl Expression {
    /// Opens a condition with a single predicate.
    pub fn new(first: Predicate) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Joins `predicate` onto everything accumulated so far.
    pub fn push(&mut self, op: Combinator, predicate: Predicate) {
        self.rest.push((op, predicate));
    }

    pub fn first(&self) -> &Predicate {
        &self.first
    }

    /// Predicates after the first, each with the combinator that joined it.
    pub fn rest(&self) -> &[(Combinator, Predicate)] {
        &self.rest
    }

    /// Every predicate in attach order.
    pub fn predicates(&self) -> impl Iterator<Item = &Predicate> + '_ {
        std::iter::once(&self.first).chain(self.rest.iter().map(|(_, p)| p))
    }

    /// Bound parameters in placeholder order.
    pub fn params(&self) -> Vec<String> {
        self.predicates().map(|p| p.value.clone()).collect()
    }

    /// Number of predicates in the condition.
    pub fn predicate_count(&self) -> usize {
        1 + self.rest.len()
    }

    /// Folds the condition left to right, evaluating each predicate with `eval`.
    pub fn evaluate<F>(&self, mut eval: F) -> bool
    where
        F: FnMut(&Predicate) -> bool,
    {
        let mut result = eval(&self.first);
        for (op, predicate) in &self.rest {
            result = match op {
                Combinator::And => result && eval(predicate),
                Combinator::Or => result || eval(predicate),
            };
        }
        result
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.rest.len() {
            f.write_str("(")?;
        }
        f.write_str(&self.first.template())?;
        for (op, predicate) in &self.rest {
            write!(f, " {} {})", op, predicate.template())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Comparison;

    fn sample() -> Expression {
        let mut expr = Expression::new(Predicate::new("name", Comparison::Like, "%a%"));
        expr.push(Combinator::And, Predicate::new("age", Comparison::Gt, "20"));
        expr.push(Combinator::Or, Predicate::new("name", Comparison::Eq, "b"));
        expr
    }

    #[test]
    fn test_left_to_right_rendering() {
        let expr = sample();
        assert_eq!(expr.to_string(), "((name LIKE ? AND age > ?) OR name = ?)");
        assert_eq!(expr.params(), vec!["%a%", "20", "b"]);
        assert_eq!(expr.predicate_count(), 3);
    }

    #[test]
    fn test_single_predicate_has_no_parentheses() {
        let expr = Expression::new(Predicate::new("id", Comparison::Eq, "1"));
        assert_eq!(expr.to_string(), "id = ?");
        assert!(expr.rest().is_empty());
    }

    #[test]
    fn test_evaluate_folds_left() {
        // ((false AND true) OR true) is true; (false AND (true OR true)) would be false
        let expr = sample();
        let mut seen = Vec::new();
        let result = expr.evaluate(|p| {
            seen.push(p.column.clone());
            p.column != "name" || p.value == "b"
        });
        assert!(result);
        assert_eq!(seen, vec!["name", "name"]);
    }

    #[test]
    fn test_long_chain_renders_and_drops() {
        let mut expr = Expression::new(Predicate::new("id", Comparison::Eq, "0"));
        for i in 1..200_000 {
            expr.push(Combinator::Or, Predicate::new("id", Comparison::Eq, i.to_string()));
        }
        let rendered = expr.to_string();
        assert!(rendered.starts_with("(((("));
        assert!(rendered.ends_with(" OR id = ?)"));
        assert_eq!(expr.params().len(), 200_000);
        assert!(expr.evaluate(|p| p.value == "199999"));
        let copy = expr.clone();
        assert_eq!(copy, expr);
    }
}
