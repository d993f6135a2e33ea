use crate::WaitEstimator;
use model::bounds::WaitTimeBounds;
use rand::Rng;
use serde_json::Value;

/// Draws each estimate uniformly from the configured bounds.
/// Uses the thread-local generator, so concurrent callers never share one.
#[derive(Debug, Clone, Default)]
pub struct UniformEstimator {
    bounds: WaitTimeBounds,
}

impl UniformEstimator {
    pub fn new(bounds: WaitTimeBounds) -> Self {
        UniformEstimator { bounds }
    }

    pub fn bounds(&self) -> &WaitTimeBounds {
        &self.bounds
    }
}

impl WaitEstimator for UniformEstimator {
    fn name(&self) -> &'static str {
        "UniformEstimator"
    }

    fn estimate_wait(&self, _request: &Value) -> u32 {
        rand::rng().random_range(self.bounds.range())
    }
}
