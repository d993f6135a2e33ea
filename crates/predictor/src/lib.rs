use estimator::WaitEstimator;
use lambda_runtime::Context;
use model::{ApiResponse, WaitPrediction};
use serde_json::Value;

mod event_handler;

pub use event_handler::{PredictionLambdaEvent, handle_event};

/// Answers ride wait-time requests using a `WaitEstimator`.
///
/// Holds no per-request state, so a single instance can serve every
/// invocation a Lambda execution environment receives.
///
/// ```ignore
/// use estimator::UniformEstimator;
/// use lambda_runtime::{service_fn, LambdaEvent};
/// use predictor::{handle_event, WaitTimePredictor};
/// use serde_json::Value;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Error> {
///     let predictor = WaitTimePredictor::new(UniformEstimator::default());
///     let predictor_ref = &predictor;
///
///     lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
///         handle_event(predictor_ref, event).await
///     }))
///     .await
/// }
/// ```
pub struct WaitTimePredictor<Estimator: WaitEstimator> {
    estimator: Estimator,
}

impl<Estimator: WaitEstimator> WaitTimePredictor<Estimator> {
    pub fn new(estimator: Estimator) -> Self {
        WaitTimePredictor { estimator }
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    /// Build the response for a single request.
    /// Never fails; a request without a `ride_id` is answered for `"unknown"`.
    pub fn handle(&self, request: &Value, _context: &Context) -> ApiResponse {
        let ride_id: Value = model::ride_id(request);
        let predicted_wait_time: u32 = self.estimator.estimate_wait(request);

        ApiResponse::ok(WaitPrediction::new(ride_id, predicted_wait_time))
    }
}
