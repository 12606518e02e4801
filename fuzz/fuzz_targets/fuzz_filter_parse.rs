#![no_main]

use clausekit::{parse, Query};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string (ignore invalid UTF-8)
    if let Ok(input) = std::str::from_utf8(data) {
        // Any input either parses or returns an error - never panics
        if let Ok(filter) = parse(Query::table("t"), input) {
            filter.build().expect("parsed filter must rebuild");
        }
    }
});
