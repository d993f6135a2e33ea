use crate::env::{PREDICTED_WAIT_MAX_MINUTES, PREDICTED_WAIT_MIN_MINUTES};
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

pub const DEFAULT_MIN_WAIT_MINUTES: u32 = 10;
pub const DEFAULT_MAX_WAIT_MINUTES: u32 = 120;

/// Inclusive range of minutes a prediction may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitTimeBounds {
    min: u32,
    max: u32,
}

impl Default for WaitTimeBounds {
    fn default() -> Self {
        WaitTimeBounds {
            min: DEFAULT_MIN_WAIT_MINUTES,
            max: DEFAULT_MAX_WAIT_MINUTES,
        }
    }
}

impl WaitTimeBounds {
    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedBounds { min, max });
        }

        Ok(WaitTimeBounds { min, max })
    }

    /// Read the bounds from the process environment, falling back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the bounds through `lookup`, which returns `None` for an unset variable.
    pub fn from_lookup<Lookup>(lookup: Lookup) -> Result<Self, ConfigError>
    where
        Lookup: Fn(&str) -> Option<String>,
    {
        let min: u32 =
            parse_minutes(&lookup, PREDICTED_WAIT_MIN_MINUTES, DEFAULT_MIN_WAIT_MINUTES)?;
        let max: u32 =
            parse_minutes(&lookup, PREDICTED_WAIT_MAX_MINUTES, DEFAULT_MAX_WAIT_MINUTES)?;

        Self::new(min, max)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    pub fn contains(&self, minutes: u32) -> bool {
        self.range().contains(&minutes)
    }
}

fn parse_minutes<Lookup>(
    lookup: &Lookup,
    key: &'static str,
    default: u32,
) -> Result<u32, ConfigError>
where
    Lookup: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidMinutes { key, value: raw }),
    }
}

/// Errors arising from loading configuration at start-up.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    // The variable was set but isn't a whole number of minutes
    InvalidMinutes { key: &'static str, value: String },
    // The lower bound is above the upper bound
    InvertedBounds { min: u32, max: u32 },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidMinutes { key, value } => {
                write!(f, "{key} must be a whole number of minutes, got {value:?}")
            }
            ConfigError::InvertedBounds { min, max } => {
                write!(f, "minimum wait {min} is greater than maximum wait {max}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let bounds = WaitTimeBounds::from_lookup(lookup_from(&[])).expect("Defaults are valid");

        assert_eq!(WaitTimeBounds::default(), bounds);
        assert_eq!(10..=120, bounds.range());
    }

    #[test]
    fn reads_overrides() {
        let bounds = WaitTimeBounds::from_lookup(lookup_from(&[
            (PREDICTED_WAIT_MIN_MINUTES, "5"),
            (PREDICTED_WAIT_MAX_MINUTES, " 30 "),
        ]))
        .expect("Overrides are valid");

        assert_eq!(5, bounds.min());
        assert_eq!(30, bounds.max());
    }

    #[test]
    fn rejects_non_numeric_minutes() {
        let result =
            WaitTimeBounds::from_lookup(lookup_from(&[(PREDICTED_WAIT_MAX_MINUTES, "soon")]));

        assert_eq!(
            Err(ConfigError::InvalidMinutes {
                key: PREDICTED_WAIT_MAX_MINUTES,
                value: "soon".to_string(),
            }),
            result
        );
    }

    #[test]
    fn rejects_inverted_bounds() {
        let result =
            WaitTimeBounds::from_lookup(lookup_from(&[(PREDICTED_WAIT_MIN_MINUTES, "200")]));

        assert_eq!(Err(ConfigError::InvertedBounds { min: 200, max: 120 }), result);
    }

    #[test]
    fn single_value_range_is_allowed() {
        let bounds = WaitTimeBounds::new(42, 42).expect("Equal bounds are valid");

        assert!(bounds.contains(42));
        assert!(!bounds.contains(43));
    }
}
