use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod bounds;
pub mod env;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Key holding the ride identifier in an incoming request.
pub const RIDE_ID_KEY: &str = "ride_id";
/// Substituted when a request carries no ride identifier.
pub const UNKNOWN_RIDE_ID: &str = "unknown";

pub const STATUS_OK: u16 = 200;

/// Pull the ride identifier out of a request, verbatim.
/// Anything other than an object with a `ride_id` key yields `"unknown"`.
pub fn ride_id(request: &Value) -> Value {
    request
        .get(RIDE_ID_KEY)
        .cloned()
        .unwrap_or_else(|| Value::from(UNKNOWN_RIDE_ID))
}

/// The JSON object carried in the response body.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WaitPrediction {
    pub ride_id: Value,
    pub predicted_wait_time: u32,
}

impl WaitPrediction {
    pub fn new(ride_id: Value, predicted_wait_time: u32) -> Self {
        WaitPrediction {
            ride_id,
            predicted_wait_time,
        }
    }
}

impl From<WaitPrediction> for Value {
    fn from(prediction: WaitPrediction) -> Self {
        serde_json::json!({
            "ride_id": prediction.ride_id,
            "predicted_wait_time": prediction.predicted_wait_time,
        })
    }
}

/// Response handed back to the invocation framework.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    // Serialised `WaitPrediction`
    pub body: String,
}

impl ApiResponse {
    pub fn ok(prediction: WaitPrediction) -> Self {
        ApiResponse {
            status_code: STATUS_OK,
            body: Value::from(prediction).to_string(),
        }
    }

    /// Parse the body back into a prediction.
    pub fn prediction(&self) -> Result<WaitPrediction, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
