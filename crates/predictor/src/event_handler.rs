use crate::WaitTimePredictor;
use estimator::WaitEstimator;
use lambda_runtime::tracing::Span;
use lambda_runtime::{Context, Error, LambdaEvent, tracing};
use model::ApiResponse;
use serde_json::Value;

pub type PredictionLambdaEvent = LambdaEvent<Value>;

/// Handler for the outer Lambda event, designed for use with `lambda_runtime::run()`.
///
/// Always returns `Ok`; the `Result` only satisfies the runtime's service signature.
pub async fn handle_event<Estimator: WaitEstimator>(
    predictor: &WaitTimePredictor<Estimator>,
    event: PredictionLambdaEvent,
) -> Result<ApiResponse, Error> {
    let (request, context): (Value, Context) = event.into_parts();

    let span: Span = tracing::span!(
        tracing::Level::INFO,
        "Prediction",
        request_id = %context.request_id
    );

    let response: ApiResponse = span.in_scope(|| {
        let response: ApiResponse = predictor.handle(&request, &context);

        tracing::debug!(
            estimator = predictor.estimator().name(),
            body = response.body.as_str(),
            "Predicted wait time"
        );

        response
    });

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::WaitPrediction;
    use serde_json::json;
    use test_utils::{FixedEstimator, lambda_event_with_payload};

    #[tokio::test]
    async fn event_handler_answers_request() {
        let predictor = WaitTimePredictor::new(FixedEstimator(42));
        let event: PredictionLambdaEvent = lambda_event_with_payload(json!({"ride_id": "ride-42"}));

        let response: ApiResponse = handle_event(&predictor, event)
            .await
            .expect("Handler never fails");

        assert_eq!(200, response.status_code);
        assert_eq!(
            WaitPrediction::new(json!("ride-42"), 42),
            response.prediction().expect("Body should parse")
        );
    }

    #[tokio::test]
    async fn event_handler_accepts_empty_event() {
        let predictor = WaitTimePredictor::new(FixedEstimator(10));

        let response: ApiResponse = handle_event(&predictor, lambda_event_with_payload(json!({})))
            .await
            .expect("Handler never fails");

        assert_eq!(
            WaitPrediction::new(json!("unknown"), 10),
            response.prediction().expect("Body should parse")
        );
    }

    #[tokio::test]
    async fn response_serialises_for_the_runtime() {
        let predictor = WaitTimePredictor::new(FixedEstimator(64));

        let event: PredictionLambdaEvent = lambda_event_with_payload(json!({"ride_id": 7}));

        let response: ApiResponse = handle_event(&predictor, event)
            .await
            .expect("Handler never fails");
        let wire: Value = serde_json::to_value(&response).expect("Response should serialise");

        assert_eq!(json!(200), wire["statusCode"]);
        assert_eq!(
            json!({"ride_id": 7, "predicted_wait_time": 64}),
            serde_json::from_str::<Value>(wire["body"].as_str().unwrap_or_default())
                .expect("Body should be JSON")
        );
    }
}
