//! Results assembled from a submitted report.
//!
//! The report is passed in directly; nothing is read from shared state here. The session
//! hand-off in [`crate::session`] is a thin wrapper over [`render_results`].

use crate::advice::{AdviceSheet, ADVICE_SHEET};
use crate::classifier::classify;
use crate::diagnosis::{Diagnosis, Severity, Triad};
use crate::report::SymptomReport;
use serde::Serialize;

/// Summary block describing what was reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentSummary {
    pub age: u8,
    pub duration: &'static str,
    pub duration_label: &'static str,
    /// Severity of the primary diagnosis.
    pub severity_level: Severity,
    pub symptoms: Vec<String>,
    /// Empty when no notes were given.
    pub additional_info: String,
    pub submitted_at: String,
}

/// Everything the results view shows for one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResults {
    pub summary: AssessmentSummary,
    pub diagnoses: Triad,
    pub advice: AdviceSheet,
}

impl AssessmentResults {
    /// The highest-probability candidate.
    pub fn primary(&self) -> &Diagnosis {
        &self.diagnoses[0]
    }
}

/// Classifies the report and attaches the summary and advice.
pub fn render_results(report: &SymptomReport) -> AssessmentResults {
    let diagnoses = classify(report.symptoms());
    let primary = diagnoses[0];

    let summary = AssessmentSummary {
        age: report.age().years(),
        duration: report.duration().as_str(),
        duration_label: report.duration().label(),
        severity_level: primary.severity,
        symptoms: report
            .symptoms()
            .iter()
            .map(|s| s.as_str().to_owned())
            .collect(),
        additional_info: report.additional_info().to_owned(),
        submitted_at: report.timestamp().to_rfc3339(),
    };

    tracing::debug!(
        primary = primary.condition,
        severity = %primary.severity,
        "results rendered"
    );

    AssessmentResults {
        summary,
        diagnoses,
        advice: ADVICE_SHEET,
    }
}
