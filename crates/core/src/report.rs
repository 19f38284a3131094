//! The symptom report captured by the assessment form.
//!
//! A [`SymptomReport`] is built once by [`AssessmentForm::submit`](crate::form::AssessmentForm::submit)
//! and never changes afterwards. Its serialised form is the session payload, so field names
//! follow the form (`additionalInfo`, age as a string, kebab-style duration values).

use crate::constants::{MAX_AGE_YEARS, MIN_AGE_YEARS};
use crate::{AssessmentError, AssessmentResult};
use chrono::{DateTime, Utc};
use cura_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Age of the person the report is about, in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(u8);

impl Age {
    /// Creates an age, rejecting values outside the form bounds.
    pub fn new(years: u8) -> AssessmentResult<Self> {
        if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&years) {
            return Err(invalid_age(years.to_string()));
        }
        Ok(Self(years))
    }

    pub fn years(self) -> u8 {
        self.0
    }
}

fn invalid_age(value: String) -> AssessmentError {
    AssessmentError::InvalidAge {
        value,
        min: MIN_AGE_YEARS,
        max: MAX_AGE_YEARS,
    }
}

impl FromStr for Age {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AssessmentError::MissingAge);
        }
        let years = trimmed
            .parse::<u8>()
            .map_err(|_| invalid_age(trimmed.to_string()))?;
        Self::new(years)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// The form field is a string input, so the payload carries the age as a string.
impl Serialize for Age {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawAge {
            Text(String),
            Number(u64),
        }

        match RawAge::deserialize(deserializer)? {
            RawAge::Text(text) => text.parse().map_err(serde::de::Error::custom),
            RawAge::Number(n) => u8::try_from(n)
                .map_err(|_| invalid_age(n.to_string()))
                .and_then(Age::new)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// How long the symptoms have been present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymptomDuration {
    #[serde(rename = "hours")]
    Hours,
    #[serde(rename = "1-day")]
    OneDay,
    #[serde(rename = "2-3-days")]
    TwoToThreeDays,
    #[serde(rename = "week")]
    Week,
    #[serde(rename = "weeks")]
    Weeks,
    #[serde(rename = "months")]
    Months,
}

impl SymptomDuration {
    /// All durations in the order the form offers them.
    pub const ALL: [SymptomDuration; 6] = [
        SymptomDuration::Hours,
        SymptomDuration::OneDay,
        SymptomDuration::TwoToThreeDays,
        SymptomDuration::Week,
        SymptomDuration::Weeks,
        SymptomDuration::Months,
    ];

    /// Value used on the wire and in the session payload.
    pub const fn as_str(self) -> &'static str {
        match self {
            SymptomDuration::Hours => "hours",
            SymptomDuration::OneDay => "1-day",
            SymptomDuration::TwoToThreeDays => "2-3-days",
            SymptomDuration::Week => "week",
            SymptomDuration::Weeks => "weeks",
            SymptomDuration::Months => "months",
        }
    }

    /// Human-readable label shown by the form.
    pub const fn label(self) -> &'static str {
        match self {
            SymptomDuration::Hours => "A few hours",
            SymptomDuration::OneDay => "1 day",
            SymptomDuration::TwoToThreeDays => "2-3 days",
            SymptomDuration::Week => "About a week",
            SymptomDuration::Weeks => "Several weeks",
            SymptomDuration::Months => "Several months",
        }
    }
}

impl FromStr for SymptomDuration {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AssessmentError::MissingDuration);
        }
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == trimmed)
            .ok_or_else(|| AssessmentError::UnknownDuration(trimmed.to_string()))
    }
}

impl fmt::Display for SymptomDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted symptom assessment.
///
/// Deserialising goes through [`SymptomReport::new`], so a stored payload is held to the same
/// rules as a fresh submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSymptomReport")]
pub struct SymptomReport {
    symptoms: Vec<NonEmptyText>,
    age: Age,
    duration: SymptomDuration,
    #[serde(default)]
    additional_info: String,
    timestamp: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSymptomReport {
    symptoms: Vec<NonEmptyText>,
    age: Age,
    duration: SymptomDuration,
    #[serde(default)]
    additional_info: String,
    timestamp: DateTime<Utc>,
}

impl TryFrom<RawSymptomReport> for SymptomReport {
    type Error = AssessmentError;

    fn try_from(raw: RawSymptomReport) -> Result<Self, Self::Error> {
        SymptomReport::new(
            raw.symptoms,
            raw.age,
            raw.duration,
            raw.additional_info,
            raw.timestamp,
        )
    }
}

impl SymptomReport {
    /// Builds a report from already-validated parts.
    ///
    /// Symptoms keep their order; exact duplicates after the first are dropped.
    pub fn new(
        symptoms: Vec<NonEmptyText>,
        age: Age,
        duration: SymptomDuration,
        additional_info: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> AssessmentResult<Self> {
        let mut unique: Vec<NonEmptyText> = Vec::with_capacity(symptoms.len());
        for symptom in symptoms {
            if !unique.contains(&symptom) {
                unique.push(symptom);
            }
        }
        if unique.is_empty() {
            return Err(AssessmentError::NoSymptoms);
        }

        Ok(Self {
            symptoms: unique,
            age,
            duration,
            additional_info: additional_info.into(),
            timestamp,
        })
    }

    pub fn symptoms(&self) -> &[NonEmptyText] {
        &self.symptoms
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn duration(&self) -> SymptomDuration {
        self.duration
    }

    /// Free-text notes; empty when none were given.
    pub fn additional_info(&self) -> &str {
        &self.additional_info
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
