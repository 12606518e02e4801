/// Filter serialization
///
/// A filter serializes to a JSON array of clause objects, one per logged
/// operation and in call order:
///
/// ```json
/// [{"column":"name","function_name":"Contains","value":"Farcha","operator":"AND","group":null}]
/// ```
///
/// Parsing decodes the whole array first and only then replays it, so a
/// malformed document never leaves a half-built filter behind.
use crate::config::FilterConfig;
use crate::dispatch::{Dispatcher, ReplayStats};
use crate::filter::Filter;
use crate::limits::InputLimits;
use clausekit_core::{Clause, Error, QueryHandle, Result};
use tracing::info;

/// Encodes a clause log as compact JSON.
pub fn encode(clauses: &[Clause]) -> Result<String> {
    serde_json::to_string(clauses).map_err(Error::Encode)
}

/// Encodes a clause log as indented JSON.
pub fn encode_pretty(clauses: &[Clause]) -> Result<String> {
    serde_json::to_string_pretty(clauses).map_err(Error::Encode)
}

/// Decodes a clause log, enforcing `limits`.
pub fn decode(input: &str, limits: &InputLimits) -> Result<Vec<Clause>> {
    limits.validate_input(input)?;
    let clauses: Vec<Clause> = serde_json::from_str(input).map_err(Error::Decode)?;
    limits.validate_clauses(&clauses)?;
    Ok(clauses)
}

/// Rebuilds a filter from serialized text, bound to `handle`.
///
/// Clauses naming an unknown operation are skipped. No input limits apply,
/// so anything [`Filter::build`] produced parses back; use
/// [`parse_with_config`] with [`InputLimits`] for untrusted text.
///
/// # Examples
///
/// ```rust
/// use clausekit::{parse, Filter, Query};
///
/// let mut original = Filter::new(Query::table("users"));
/// original.less_than("22", "age", "AND").is_not("Bob", "name", "OR");
/// let text = original.build()?;
///
/// let parsed = parse(Query::table("users"), &text)?;
/// assert_eq!(parsed.clauses(), original.clauses());
/// assert_eq!(parsed.to_sql(), original.to_sql());
/// # Ok::<(), clausekit::Error>(())
/// ```
pub fn parse<Q: QueryHandle>(handle: Q, input: &str) -> Result<Filter<Q>> {
    parse_with_config(handle, input, &FilterConfig::default()).map(|(filter, _)| filter)
}

/// Rebuilds a filter from serialized text under `config`, returning replay
/// counters alongside it.
pub fn parse_with_config<Q: QueryHandle>(
    handle: Q,
    input: &str,
    config: &FilterConfig,
) -> Result<(Filter<Q>, ReplayStats)> {
    let clauses = decode(input, &config.limits)?;

    let mut filter = Filter::new(handle);
    let stats = Dispatcher::new().replay(&mut filter, &clauses, config)?;

    info!(
        decoded = clauses.len(),
        applied = stats.applied,
        skipped = stats.skipped,
        "filter parsed"
    );
    Ok((filter, stats))
}
