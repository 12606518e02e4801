/// Filter Demo
///
/// Builds a filter, runs it against an in-memory table, stores it as JSON
/// and rebuilds it.
use clausekit::logging::LogConfig;
use clausekit::{parse, ExecutionContext, Executor, Filter, Query, Row, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = LogConfig::debug().init()?;

    println!("=== Clausekit Filter Demo ===\n");

    let context = ExecutionContext::new().with_table(
        "users",
        vec![
            user("Miqdad Farcha", 22, "1999-01-20"),
            user("Angger Pangestu", 21, "1999-08-17"),
            user("Bing Farcha", 20, "2001-03-05"),
        ],
    );
    let executor = Executor::new(context);

    let mut filter = Filter::new(Query::table("users"));
    filter
        .contains("Farcha", "name", "AND")
        .after("2000-01-01", "birth_date", "AND")
        .is("Angger Pangestu", "name", "OR");

    let statement = filter.to_sql().to_sql();
    println!("SQL:    {}", statement.sql);
    println!("Params: {:?}\n", statement.params);

    for row in executor.execute(filter.to_sql())? {
        if let Some(name) = row.get("name") {
            println!("  match: {}", name);
        }
    }

    let encoded = filter.build_pretty()?;
    println!("\nEncoded filter:\n{}\n", encoded);

    let restored = parse(Query::table("users"), &encoded)?;
    println!(
        "Restored {} clauses, {} rows match",
        restored.len(),
        executor.execute(restored.to_sql())?.len()
    );

    Ok(())
}

fn user(name: &str, age: i64, birth_date: &str) -> Row {
    Row::from_pairs([
        ("name", Value::String(name.to_string())),
        ("age", Value::Integer(age)),
        ("birth_date", Value::String(birth_date.to_string())),
    ])
}
