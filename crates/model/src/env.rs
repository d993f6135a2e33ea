/// Environment variable overriding the inclusive lower bound of a prediction, in minutes
pub const PREDICTED_WAIT_MIN_MINUTES: &str = "PREDICTED_WAIT_MIN_MINUTES";
/// Environment variable overriding the inclusive upper bound of a prediction, in minutes
pub const PREDICTED_WAIT_MAX_MINUTES: &str = "PREDICTED_WAIT_MAX_MINUTES";
