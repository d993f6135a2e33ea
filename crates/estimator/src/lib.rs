use serde_json::Value;

pub mod uniform;

pub use uniform::UniformEstimator;

/// Produces a wait-time estimate, in minutes, for a ride request.
///
/// The predictor only depends on this trait, so the random placeholder
/// can be swapped for a real model without touching the response contract.
pub trait WaitEstimator: Send + Sync {
    fn name(&self) -> &'static str;

    fn estimate_wait(&self, request: &Value) -> u32;
}
