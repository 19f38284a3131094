//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the front ends. Request
//! handling never reads environment variables.

use crate::constants::DEFAULT_ANALYSIS_DELAY_MS;
use crate::{AssessmentError, AssessmentResult};
use std::time::Duration;

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    analysis_delay: Duration,
}

impl CoreConfig {
    pub fn new(analysis_delay: Duration) -> Self {
        Self { analysis_delay }
    }

    /// Cosmetic pause before results are revealed. Zero disables it.
    pub fn analysis_delay(&self) -> Duration {
        self.analysis_delay
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS))
    }
}

/// Parse the analysis delay from an optional millisecond value.
///
/// If `value` is `None` or empty/whitespace, returns the default delay.
pub fn analysis_delay_from_env_value(value: Option<String>) -> AssessmentResult<Duration> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS)),
        Some(v) => v
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| AssessmentError::InvalidAnalysisDelay(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_delay_uses_default() {
        assert_eq!(
            analysis_delay_from_env_value(None).unwrap(),
            Duration::from_millis(2_000)
        );
        assert_eq!(
            analysis_delay_from_env_value(Some("  ".into())).unwrap(),
            Duration::from_millis(2_000)
        );
    }

    #[test]
    fn explicit_delay_is_parsed() {
        assert_eq!(
            analysis_delay_from_env_value(Some(" 0 ".into())).unwrap(),
            Duration::ZERO
        );
        assert_eq!(
            analysis_delay_from_env_value(Some("750".into())).unwrap(),
            Duration::from_millis(750)
        );
    }

    #[test]
    fn invalid_delay_is_rejected() {
        let err = analysis_delay_from_env_value(Some("soon".into())).expect_err("should reject");
        assert!(matches!(err, AssessmentError::InvalidAnalysisDelay(v) if v == "soon"));
        assert!(analysis_delay_from_env_value(Some("-5".into())).is_err());
    }
}
