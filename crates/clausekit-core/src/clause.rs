//! Clause records
//!
//! A `Clause` is one logged filter operation. The ordered list of clauses
//! is the source of truth for serialization and replay.
use serde::{Deserialize, Serialize};

/// One recorded filter operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// Target column; opaque, never validated
    pub column: String,
    /// Name of the operation that produced this clause
    pub function_name: String,
    /// Operand, always carried as text
    pub value: String,
    /// Logical combinator as written by the caller ("AND", "OR", ...)
    pub operator: String,
    /// Nested clause group.
    ///
    /// Carried through encode/decode untouched. Nothing populates or
    /// replays it yet.
    #[serde(default)]
    pub group: Option<Vec<Clause>>,
}

impl Clause {
    /// Creates a clause with no nested group.
    pub fn new(
        function_name: impl Into<String>,
        value: impl Into<String>,
        column: impl Into<String>,
        operator: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            function_name: function_name.into(),
            value: value.into(),
            operator: operator.into(),
            group: None,
        }
    }

    /// Number of clauses nested under this one, recursively.
    pub fn nested_len(&self) -> usize {
        self.group
            .as_deref()
            .map(|group| group.iter().map(|c| 1 + c.nested_len()).sum())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_is_stable() {
        let clause = Clause::new("Contains", "Farcha", "name", "AND");
        let json = serde_json::to_string(&clause).unwrap();
        assert_eq!(
            json,
            r#"{"column":"name","function_name":"Contains","value":"Farcha","operator":"AND","group":null}"#
        );
    }

    #[test]
    fn test_group_may_be_absent_null_or_array() {
        let absent: Clause =
            serde_json::from_str(r#"{"column":"x","function_name":"Is","value":"1","operator":"AND"}"#)
                .unwrap();
        assert_eq!(absent.group, None);

        let null: Clause = serde_json::from_str(
            r#"{"column":"x","function_name":"Is","value":"1","operator":"AND","group":null}"#,
        )
        .unwrap();
        assert_eq!(null.group, None);

        let nested: Clause = serde_json::from_str(
            r#"{"column":"x","function_name":"Is","value":"1","operator":"AND","group":[
                {"column":"y","function_name":"Is","value":"2","operator":"OR","group":[]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(nested.nested_len(), 1);
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let result = serde_json::from_str::<Clause>(r#"{"column":"x","function_name":"Is"}"#);
        assert!(result.is_err());
    }
}
