use estimator::UniformEstimator;
use lambda_runtime::{LambdaEvent, service_fn, tracing};
use model::Error;
use model::bounds::WaitTimeBounds;
use predictor::{WaitTimePredictor, handle_event};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Bad bounds fail the cold start rather than an invocation
    let bounds: WaitTimeBounds = WaitTimeBounds::from_env()?;

    tracing::info!(
        min = bounds.min(),
        max = bounds.max(),
        "Starting wait time predictor"
    );

    let predictor: WaitTimePredictor<UniformEstimator> =
        WaitTimePredictor::new(UniformEstimator::new(bounds));
    let predictor_ref: &WaitTimePredictor<UniformEstimator> = &predictor;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_event(predictor_ref, event).await
    }))
    .await
}
