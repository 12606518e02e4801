#![no_main]

use arbitrary::Arbitrary;
use clausekit::{parse, Filter, Operation, Query};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Call {
    operation: u8,
    value: String,
    column: String,
    operator: String,
}

fuzz_target!(|calls: Vec<Call>| {
    // Stay under the default clause limit
    if calls.len() > 256 {
        return;
    }

    let mut filter = Filter::new(Query::table("t"));
    for call in &calls {
        let operation = Operation::ALL[call.operation as usize % Operation::ALL.len()];
        filter.apply(operation, &call.value, &call.column, &call.operator);
    }

    let encoded = filter.build().expect("build must succeed");
    let parsed = parse(Query::table("t"), &encoded).expect("round-trip must parse");
    assert_eq!(parsed.clauses(), filter.clauses());
    assert_eq!(parsed.to_sql(), filter.to_sql());
});
