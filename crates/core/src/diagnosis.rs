//! Candidate conditions returned by the classifier.
//!
//! Probabilities are illustrative whole-number percentages fixed per condition. They are not
//! derived from any model and are not expected to sum to anything.

use crate::constants::DIAGNOSES_PER_ASSESSMENT;
use serde::Serialize;
use std::fmt;

/// Severity tier attached to a candidate condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate condition with its canned probability, severity and description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnosis {
    pub condition: &'static str,
    /// Whole-number percentage.
    pub probability: u8,
    pub severity: Severity,
    pub description: &'static str,
}

/// Exactly three candidates, highest probability first.
pub type Triad = [Diagnosis; DIAGNOSES_PER_ASSESSMENT];

pub const UPPER_RESPIRATORY_INFECTION: Diagnosis = Diagnosis {
    condition: "Upper Respiratory Infection",
    probability: 75,
    severity: Severity::Medium,
    description: "Common viral infection affecting nose, throat, and sinuses",
};

pub const COMMON_COLD: Diagnosis = Diagnosis {
    condition: "Common Cold",
    probability: 60,
    severity: Severity::Low,
    description: "Mild viral infection of the upper respiratory tract",
};

pub const INFLUENZA: Diagnosis = Diagnosis {
    condition: "Flu (Influenza)",
    probability: 45,
    severity: Severity::Medium,
    description: "Viral infection that attacks respiratory system",
};

pub const TENSION_HEADACHE: Diagnosis = Diagnosis {
    condition: "Tension Headache",
    probability: 70,
    severity: Severity::Low,
    description: "Most common type of headache caused by stress or muscle tension",
};

pub const MIGRAINE: Diagnosis = Diagnosis {
    condition: "Migraine",
    probability: 55,
    severity: Severity::Medium,
    description: "Severe headache often accompanied by other symptoms",
};

pub const DEHYDRATION: Diagnosis = Diagnosis {
    condition: "Dehydration",
    probability: 40,
    severity: Severity::Low,
    description: "Insufficient fluid levels in the body",
};

pub const VIRAL_SYNDROME: Diagnosis = Diagnosis {
    condition: "Viral Syndrome",
    probability: 65,
    severity: Severity::Low,
    description: "General viral infection with various symptoms",
};

pub const STRESS_RESPONSE: Diagnosis = Diagnosis {
    condition: "Stress Response",
    probability: 50,
    severity: Severity::Low,
    description: "Physical symptoms related to psychological stress",
};

pub const SLEEP_DEPRIVATION: Diagnosis = Diagnosis {
    condition: "Sleep Deprivation",
    probability: 35,
    severity: Severity::Low,
    description: "Physical effects of insufficient sleep",
};

/// Respiratory illness candidates.
pub const RESPIRATORY_TRIAD: Triad = [UPPER_RESPIRATORY_INFECTION, COMMON_COLD, INFLUENZA];

/// Headache candidates.
pub const HEADACHE_TRIAD: Triad = [TENSION_HEADACHE, MIGRAINE, DEHYDRATION];

/// Fallback candidates for anything the other rules do not cover.
pub const GENERIC_VIRAL_TRIAD: Triad = [VIRAL_SYNDROME, STRESS_RESPONSE, SLEEP_DEPRIVATION];
