/// Input limits for parsing serialized filters
///
/// Serialized filters from outside the process can be bounded before any
/// clause is replayed by passing limits to `parse_with_config`. Plain
/// `parse` is unbounded, so it always accepts what `Filter::build` emits.
use clausekit_core::{Clause, Error, Result};

/// Upper bounds enforced by `parse_with_config`.
///
/// `Default` gives a preset suited to untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    /// Maximum length of the serialized text, in bytes
    pub max_input_len: usize,
    /// Maximum number of top-level clauses
    pub max_clauses: usize,
    /// Maximum length of any single clause value, in bytes
    pub max_value_len: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_input_len: 1024 * 1024, // 1 MB
            max_clauses: 1024,
            max_value_len: 64 * 1024, // 64 KB
        }
    }
}

impl InputLimits {
    /// Limits that accept anything.
    pub fn unbounded() -> Self {
        Self {
            max_input_len: usize::MAX,
            max_clauses: usize::MAX,
            max_value_len: usize::MAX,
        }
    }

    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = max;
        self
    }

    pub fn with_max_clauses(mut self, max: usize) -> Self {
        self.max_clauses = max;
        self
    }

    pub fn with_max_value_len(mut self, max: usize) -> Self {
        self.max_value_len = max;
        self
    }

    /// Validates serialized filter text before decoding.
    ///
    /// # Errors
    ///
    /// Returns Error::InvalidInput if the text is longer than allowed
    #[inline]
    pub fn validate_input(&self, input: &str) -> Result<()> {
        if input.len() > self.max_input_len {
            return Err(Error::InvalidInput(format!(
                "Filter length {} exceeds maximum {}",
                input.len(),
                self.max_input_len
            )));
        }

        Ok(())
    }

    /// Validates a decoded clause list before replay.
    ///
    /// # Errors
    ///
    /// Returns Error::InvalidInput on too many clauses or an oversized value
    pub fn validate_clauses(&self, clauses: &[Clause]) -> Result<()> {
        if clauses.len() > self.max_clauses {
            return Err(Error::InvalidInput(format!(
                "Clause count {} exceeds maximum {}",
                clauses.len(),
                self.max_clauses
            )));
        }

        if let Some((idx, clause)) = clauses
            .iter()
            .enumerate()
            .find(|(_, c)| c.value.len() > self.max_value_len)
        {
            return Err(Error::InvalidInput(format!(
                "Value of clause {} ({} bytes) exceeds maximum {}",
                idx,
                clause.value.len(),
                self.max_value_len
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input() {
        let limits = InputLimits::default().with_max_input_len(8);

        // Valid
        assert!(limits.validate_input("[]").is_ok());

        // Too long
        assert!(limits.validate_input(&"a".repeat(9)).is_err());
    }

    #[test]
    fn test_validate_clauses() {
        let limits = InputLimits::default()
            .with_max_clauses(2)
            .with_max_value_len(4);
        let clause = Clause::new("Is", "1234", "a", "AND");

        assert!(limits.validate_clauses(&[]).is_ok());
        assert!(limits.validate_clauses(&[clause.clone(), clause.clone()]).is_ok());

        // Too many
        let err = limits
            .validate_clauses(&[clause.clone(), clause.clone(), clause])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        // Oversized value
        let big = Clause::new("Is", "12345", "a", "AND");
        assert!(limits.validate_clauses(&[big]).is_err());
    }

    #[test]
    fn test_unbounded() {
        let limits = InputLimits::unbounded();
        assert!(limits.validate_input(&"a".repeat(2 * 1024 * 1024)).is_ok());
    }
}
