use serde::Deserialize;
use serde_json::Value;

// Only the fields we use; the service sends more (station, DMS strings, error estimate).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoidResponse {
    pub geoid_height: Option<f64>,
    pub geoid_model: Option<Value>,
}
