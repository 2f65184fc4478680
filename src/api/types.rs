use serde::Deserialize;
use serde_json::Value;

/// Response from `GET /companies`
#[derive(Debug, Deserialize)]
pub struct CompanyResults {
    pub results: Vec<Company>,
}

#[derive(Debug, Deserialize)]
pub struct Company {
    pub company_name: String,
    pub company_id: Value,
}

/// Response from `GET /company/<id>/metrics`
#[derive(Debug, Deserialize)]
pub struct MetricResults {
    pub results: Vec<Metric>,
}

#[derive(Debug, Deserialize)]
pub struct Metric {
    pub metric_name: String,
    pub metric_id: Value,
    pub metric_description: String,
}

/// Response from `GET /company/<id>/metric/<id>/entities`
#[derive(Debug, Deserialize)]
pub struct EntityResults {
    pub results: Vec<Entity>,
}

#[derive(Debug, Deserialize)]
pub struct Entity {
    pub entity_name: String,
    pub entity_id: Value,
}

/// Response from `GET /company/<id>/metric/<id>/entity/<id>/queries`
#[derive(Debug, Deserialize)]
pub struct QueryResults {
    pub queries: Vec<Value>,
}

/// Response from `GET /data`
#[derive(Debug, Deserialize)]
pub struct TimeSeries {
    pub data: Vec<Value>,
}

/// Response from `GET /forecasts`
#[derive(Debug, Deserialize)]
pub struct ForecastResults {
    pub results: Vec<Value>,
}

/// Response from `GET .../forecast`
#[derive(Debug, Deserialize)]
pub struct Forecast {
    pub forecast_metric_name: String,
    pub data: Vec<Value>,
}

/// Response from `GET .../forecast/history`
#[derive(Debug, Deserialize)]
pub struct ForecastHistory {
    pub description: String,
    pub data: Vec<Value>,
}

/// Identifier fields come back as strings or numbers depending on the
/// endpoint; render both without JSON quoting.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_to_string_unquotes_strings() {
        assert_eq!(scalar_to_string(&json!("42")), "42");
        assert_eq!(scalar_to_string(&json!(42)), "42");
        assert_eq!(scalar_to_string(&json!(null)), "null");
    }

    #[test]
    fn test_company_results_deserialize() {
        let body = json!({
            "results": [
                {"company_name": "Acme", "company_id": "42"},
                {"company_name": "Globex", "company_id": 7}
            ]
        });

        let parsed: CompanyResults = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].company_name, "Acme");
        assert_eq!(scalar_to_string(&parsed.results[1].company_id), "7");
    }
}
