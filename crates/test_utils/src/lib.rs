use estimator::WaitEstimator;
use lambda_runtime::{Context, LambdaEvent};
use model::ApiResponse;
use serde_json::Value;

/// Test request id set on every synthetic context
pub const TEST_REQUEST_ID: &str = "test-request-id";

/// Create a Lambda event wrapping `payload` with a default context
pub fn lambda_event_with_payload(payload: Value) -> LambdaEvent<Value> {
    let mut context: Context = Context::default();
    context.request_id = TEST_REQUEST_ID.to_string();

    LambdaEvent::new(payload, context)
}

/// An estimator which always returns the same number of minutes.
#[derive(Debug, Clone, Copy)]
pub struct FixedEstimator(pub u32);

impl WaitEstimator for FixedEstimator {
    fn name(&self) -> &'static str {
        "FixedEstimator"
    }

    fn estimate_wait(&self, _request: &Value) -> u32 {
        self.0
    }
}

/// Parse a response body as untyped JSON, panicking if it isn't valid
pub fn prediction_body(response: &ApiResponse) -> Value {
    serde_json::from_str(&response.body).expect("Response body should be valid JSON")
}
