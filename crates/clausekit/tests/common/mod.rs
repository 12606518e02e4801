// Common test utilities for filter integration tests

use clausekit::{ExecutionContext, Executor, Filter, Query, Row, Value};

/// Three users with overlapping names, ages and birth dates
pub struct UsersFixture {
    pub executor: Executor,
}

impl UsersFixture {
    pub fn new() -> Self {
        let rows = vec![
            user(1, "Miqdad Farcha", 22, "1999-01-20"),
            user(2, "Angger Pangestu", 21, "1999-08-17"),
            user(3, "Bing Farcha", 20, "2001-03-05"),
        ];
        let context = ExecutionContext::new().with_table("users", rows);

        Self {
            executor: Executor::new(context),
        }
    }

    pub fn filter(&self) -> Filter {
        Filter::new(Query::table("users"))
    }

    /// Runs the filter's query and returns matching names in table order.
    pub fn names(&self, filter: &Filter) -> Vec<String> {
        self.executor
            .execute(filter.to_sql())
            .expect("Failed to execute query")
            .iter()
            .filter_map(|row| match row.get("name") {
                Some(Value::String(name)) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, filter: &Filter) -> usize {
        self.names(filter).len()
    }
}

impl Default for UsersFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn user(id: i64, name: &str, age: i64, birth_date: &str) -> Row {
    Row::from_pairs([
        ("id", Value::Integer(id)),
        ("name", Value::String(name.to_string())),
        ("age", Value::Integer(age)),
        ("birth_date", Value::String(birth_date.to_string())),
    ])
}
