//! Parse configuration.

use crate::limits::InputLimits;
use clausekit_core::Clause;
use std::fmt;
use std::sync::Arc;

/// What `parse` does with a clause whose `function_name` is not one of the
/// known operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownOperationPolicy {
    /// Skip the clause: nothing is attached and nothing is logged
    #[default]
    Skip,
    /// Fail the whole parse with `Error::UnknownOperation`
    Reject,
}

/// Callback invoked for every clause skipped under `UnknownOperationPolicy::Skip`.
pub type UnknownOperationHook = Arc<dyn Fn(&Clause) + Send + Sync>;

/// Configuration for parsing serialized filters.
///
/// The default accepts anything `Filter::build` can produce. Install
/// `InputLimits::default()` (or tighter) when the text comes from outside
/// the process.
#[derive(Clone)]
pub struct FilterConfig {
    /// Handling of unknown operation names
    pub unknown_operations: UnknownOperationPolicy,
    /// Bounds on the serialized input, unbounded unless set
    pub limits: InputLimits,
    /// Optional diagnostic hook for skipped clauses
    pub on_unknown: Option<UnknownOperationHook>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            unknown_operations: UnknownOperationPolicy::default(),
            limits: InputLimits::unbounded(),
            on_unknown: None,
        }
    }
}

impl fmt::Debug for FilterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterConfig")
            .field("unknown_operations", &self.unknown_operations)
            .field("limits", &self.limits)
            .field("on_unknown", &self.on_unknown.is_some())
            .finish()
    }
}

impl FilterConfig {
    /// Configuration that rejects unknown operation names.
    pub fn strict() -> Self {
        Self {
            unknown_operations: UnknownOperationPolicy::Reject,
            ..Default::default()
        }
    }

    /// Set the unknown-operation policy
    pub fn with_unknown_operations(mut self, policy: UnknownOperationPolicy) -> Self {
        self.unknown_operations = policy;
        self
    }

    /// Set input limits, e.g. `InputLimits::default()` for untrusted text
    pub fn with_limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Install a hook called with every skipped clause
    pub fn on_unknown<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Clause) + Send + Sync + 'static,
    {
        self.on_unknown = Some(Arc::new(hook));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = FilterConfig::default();
        assert_eq!(config.unknown_operations, UnknownOperationPolicy::Skip);
        assert_eq!(config.limits, InputLimits::unbounded());
        assert!(config.on_unknown.is_none());
    }

    #[test]
    fn test_config_builders() {
        let config = FilterConfig::default()
            .with_unknown_operations(UnknownOperationPolicy::Reject)
            .with_limits(InputLimits::default().with_max_clauses(3))
            .on_unknown(|_| {});
        assert_eq!(config.unknown_operations, UnknownOperationPolicy::Reject);
        assert_eq!(config.limits.max_clauses, 3);
        assert!(format!("{:?}", config).contains("on_unknown: true"));
        assert_eq!(
            FilterConfig::strict().unknown_operations,
            UnknownOperationPolicy::Reject
        );
    }
}
