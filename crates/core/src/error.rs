#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("at least one symptom is required")]
    NoSymptoms,
    #[error("age is required")]
    MissingAge,
    #[error("age must be a whole number between {min} and {max}, got {value:?}")]
    InvalidAge { value: String, min: u8, max: u8 },
    #[error("duration is required")]
    MissingDuration,
    #[error("unknown duration: {0:?}")]
    UnknownDuration(String),
    #[error("invalid analysis delay: {0:?}")]
    InvalidAnalysisDelay(String),
    #[error("failed to serialize assessment: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize assessment: {0}")]
    Deserialization(serde_json::Error),
}

pub type AssessmentResult<T> = std::result::Result<T, AssessmentError>;
