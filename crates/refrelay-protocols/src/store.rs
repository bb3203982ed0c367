//! Reference store protocol.
//!
//! The store owns the `references` rows; the relay only filters them by
//! equality and patches single rows by `id`.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::StoreError;

/// Equality conditions against the reference table, AND-combined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceFilter {
    conditions: Vec<(String, Value)>,
}

impl ReferenceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from a caller map. Null-valued entries are dropped.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self {
            conditions: map.into_iter().filter(|(_, v)| !v.is_null()).collect(),
        }
    }

    /// Add an equality condition. A null value is ignored.
    pub fn eq(mut self, column: impl Into<String>, value: Value) -> Self {
        if !value.is_null() {
            self.conditions.push((column.into(), value));
        }
        self
    }

    pub fn conditions(&self) -> &[(String, Value)] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Whether `row` satisfies every condition.
    pub fn matches(&self, row: &Value) -> bool {
        self.conditions
            .iter()
            .all(|(column, value)| row.get(column) == Some(value))
    }
}

/// Remote table of reference rows.
#[async_trait]
pub trait ReferenceStore: Send + Sync {
    /// Return all rows matching the filter.
    async fn filter(&self, filter: &ReferenceFilter) -> Result<Vec<Value>, StoreError>;

    /// Apply `update` to the row whose primary key equals `id`.
    ///
    /// Returns the first updated row, or `None` when no row matched.
    async fn update(&self, id: &Value, update: &Map<String, Value>) -> Result<Option<Value>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_from_map_drops_nulls() {
        let filter = ReferenceFilter::from_map(as_map(json!({"status": null, "year": 2020})));
        assert_eq!(filter.conditions().len(), 1);
        assert_eq!(filter.conditions()[0].0, "year");
    }

    #[test]
    fn test_from_empty_map() {
        let filter = ReferenceFilter::from_map(Map::new());
        assert!(filter.is_empty());
    }

    #[test]
    fn test_eq_builder_ignores_null() {
        let filter = ReferenceFilter::new()
            .eq("status", json!("done"))
            .eq("reviewer", Value::Null);
        assert_eq!(filter.conditions(), &[("status".to_string(), json!("done"))]);
    }

    #[test]
    fn test_matches() {
        let filter = ReferenceFilter::new().eq("status", json!("done"));
        assert!(filter.matches(&json!({"id": 1, "status": "done"})));
        assert!(!filter.matches(&json!({"id": 2, "status": "pending"})));
        assert!(!filter.matches(&json!({"id": 3})));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(ReferenceFilter::new().matches(&json!({"id": 1})));
    }
}
