/// Dynamic dispatch of decoded clauses
///
/// Replays a decoded clause log against a fresh filter by looking each
/// `function_name` up in a closed registry of filter methods.
use crate::config::{FilterConfig, UnknownOperationPolicy};
use crate::filter::Filter;
use clausekit_core::{Clause, Error, Operation, QueryHandle, Result};
use std::collections::HashMap;
use tracing::warn;

/// A filter method taking `(value, column, operator)`.
pub type OperationFn<Q> = for<'a> fn(&'a mut Filter<Q>, &str, &str, &str) -> &'a mut Filter<Q>;

/// Outcome of dispatching one clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The clause was replayed through this operation
    Applied(Operation),
    /// No operation is registered under the clause's name
    Skipped,
}

/// Counters from a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub applied: usize,
    pub skipped: usize,
}

/// Registry from operation name to filter method.
pub struct Dispatcher<Q: QueryHandle> {
    registry: HashMap<&'static str, (Operation, OperationFn<Q>)>,
}

impl<Q: QueryHandle> Dispatcher<Q> {
    /// Creates a dispatcher knowing every operation in `Operation::ALL`.
    pub fn new() -> Self {
        let registry = Operation::ALL
            .into_iter()
            .map(|op| (op.name(), (op, method::<Q>(op))))
            .collect();
        Self { registry }
    }

    pub fn lookup(&self, name: &str) -> Option<OperationFn<Q>> {
        self.registry.get(name).map(|&(_, call)| call)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Replays one clause onto `filter`.
    ///
    /// An unknown name leaves the filter untouched.
    pub fn dispatch(&self, filter: &mut Filter<Q>, clause: &Clause) -> Dispatch {
        match self.registry.get(clause.function_name.as_str()) {
            Some(&(op, call)) => {
                call(filter, &clause.value, &clause.column, &clause.operator);
                Dispatch::Applied(op)
            }
            None => Dispatch::Skipped,
        }
    }

    /// Replays `clauses` in order, applying the configured unknown-operation
    /// policy.
    ///
    /// Under `Reject` every name is checked before the first clause is
    /// replayed, so a rejected log leaves `filter` untouched.
    pub fn replay(
        &self,
        filter: &mut Filter<Q>,
        clauses: &[Clause],
        config: &FilterConfig,
    ) -> Result<ReplayStats> {
        if config.unknown_operations == UnknownOperationPolicy::Reject {
            if let Some(unknown) = clauses
                .iter()
                .find(|c| self.lookup(&c.function_name).is_none())
            {
                return Err(Error::UnknownOperation(unknown.function_name.clone()));
            }
        }

        let mut stats = ReplayStats::default();
        for clause in clauses {
            match self.dispatch(filter, clause) {
                Dispatch::Applied(_) => stats.applied += 1,
                Dispatch::Skipped => {
                    warn!(
                        function_name = %clause.function_name,
                        column = %clause.column,
                        "skipping clause with unknown operation"
                    );
                    if let Some(hook) = &config.on_unknown {
                        hook(clause);
                    }
                    stats.skipped += 1;
                }
            }
        }

        Ok(stats)
    }
}

impl<Q: QueryHandle> Default for Dispatcher<Q> {
    fn default() -> Self {
        Self::new()
    }
}

fn method<Q: QueryHandle>(op: Operation) -> OperationFn<Q> {
    match op {
        Operation::Contains => Filter::<Q>::contains,
        Operation::DoesNotContains => Filter::<Q>::does_not_contains,
        Operation::Is => Filter::<Q>::is,
        Operation::IsNot => Filter::<Q>::is_not,
        Operation::StartWith => Filter::<Q>::start_with,
        Operation::EndWith => Filter::<Q>::end_with,
        Operation::Equal => Filter::<Q>::equal,
        Operation::NotEqual => Filter::<Q>::not_equal,
        Operation::LessThan => Filter::<Q>::less_than,
        Operation::MoreThan => Filter::<Q>::more_than,
        Operation::LessThanEqual => Filter::<Q>::less_than_equal,
        Operation::MoreThanEqual => Filter::<Q>::more_than_equal,
        Operation::At => Filter::<Q>::at,
        Operation::Before => Filter::<Q>::before,
        Operation::After => Filter::<Q>::after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausekit_core::Query;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_registry_is_complete() {
        let dispatcher = Dispatcher::<Query>::new();
        assert_eq!(dispatcher.len(), 15);
        for op in Operation::ALL {
            assert!(dispatcher.lookup(op.name()).is_some(), "{}", op);
        }
        assert!(dispatcher.lookup("Bogus").is_none());
    }

    #[test]
    fn test_dispatch_replays_positionally() {
        let dispatcher = Dispatcher::new();
        let mut filter = Filter::new(Query::table("users"));
        let clause = Clause::new("StartWith", "Bing", "name", "AND");

        assert_eq!(
            dispatcher.dispatch(&mut filter, &clause),
            Dispatch::Applied(Operation::StartWith)
        );
        assert_eq!(filter.clauses(), &[clause]);
        assert_eq!(filter.to_sql().to_sql().params, vec!["Bing%"]);
    }

    #[test]
    fn test_unknown_is_skipped_and_reported() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let config = FilterConfig::default().on_unknown(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let clauses = vec![
            Clause::new("Bogus", "1", "x", "AND"),
            Clause::new("Is", "1", "x", "AND"),
            Clause::new("is", "1", "x", "AND"),
        ];
        let mut filter = Filter::new(Query::table("t"));
        let stats = Dispatcher::new()
            .replay(&mut filter, &clauses, &config)
            .unwrap();

        assert_eq!(stats, ReplayStats { applied: 1, skipped: 2 });
        assert_eq!(seen.load(Ordering::SeqCst), 2);
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn test_reject_fails_before_replay() {
        let clauses = vec![
            Clause::new("Is", "1", "x", "AND"),
            Clause::new("Bogus", "1", "x", "AND"),
        ];
        let mut filter = Filter::new(Query::table("t"));
        let err = Dispatcher::new()
            .replay(&mut filter, &clauses, &FilterConfig::strict())
            .unwrap_err();

        assert!(matches!(err, Error::UnknownOperation(ref name) if name == "Bogus"));
        assert!(filter.is_empty());
        assert!(filter.to_sql().condition().is_none());
    }
}
