//! PostgREST query-string construction.

use serde_json::Value;

use refrelay_protocols::error::StoreError;
use refrelay_protocols::store::ReferenceFilter;

/// Render one equality condition as a PostgREST query pair.
///
/// Strings are sent verbatim; numbers and booleans use their JSON text.
pub fn eq_param(column: &str, value: &Value) -> Result<(String, String), StoreError> {
    let rendered = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => {
            return Err(StoreError::InvalidFilter {
                column: column.to_string(),
                reason: "only scalar values are supported".to_string(),
            });
        }
    };
    Ok((column.to_string(), format!("eq.{}", rendered)))
}

/// Query pairs for a full read: `select=*` plus one pair per condition.
pub fn filter_params(filter: &ReferenceFilter) -> Result<Vec<(String, String)>, StoreError> {
    let mut params = vec![("select".to_string(), "*".to_string())];
    for (column, value) in filter.conditions() {
        params.push(eq_param(column, value)?);
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_eq_param_string() {
        let (column, value) = eq_param("status", &json!("done")).unwrap();
        assert_eq!(column, "status");
        assert_eq!(value, "eq.done");
    }

    #[test]
    fn test_eq_param_number_and_bool() {
        assert_eq!(eq_param("year", &json!(2021)).unwrap().1, "eq.2021");
        assert_eq!(eq_param("score", &json!(0.5)).unwrap().1, "eq.0.5");
        assert_eq!(eq_param("flagged", &json!(true)).unwrap().1, "eq.true");
    }

    #[test]
    fn test_eq_param_rejects_composites() {
        assert!(matches!(
            eq_param("tags", &json!(["a"])),
            Err(StoreError::InvalidFilter { .. })
        ));
        assert!(eq_param("meta", &json!({"a": 1})).is_err());
    }

    #[test]
    fn test_filter_params_empty() {
        let params = filter_params(&ReferenceFilter::new()).unwrap();
        assert_eq!(params, vec![("select".to_string(), "*".to_string())]);
    }

    #[test]
    fn test_filter_params_multiple() {
        let filter = ReferenceFilter::new()
            .eq("status", json!("done"))
            .eq("year", json!(2020));
        let params = filter_params(&filter).unwrap();
        assert_eq!(params.len(), 3);
        assert!(params.contains(&("status".to_string(), "eq.done".to_string())));
        assert!(params.contains(&("year".to_string(), "eq.2020".to_string())));
    }
}
