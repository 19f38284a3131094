//! Assessment form state.
//!
//! Collects symptoms one at a time along with age, duration and optional notes, then
//! validates everything on [`AssessmentForm::submit`] to produce a [`SymptomReport`].

use crate::report::{Age, SymptomDuration, SymptomReport};
use crate::{AssessmentError, AssessmentResult};
use chrono::{DateTime, Utc};
use cura_types::NonEmptyText;

/// Quick-add symptoms offered next to the free-text input, in display order.
pub const COMMON_SYMPTOMS: [&str; 12] = [
    "Fever",
    "Headache",
    "Cough",
    "Sore throat",
    "Fatigue",
    "Nausea",
    "Dizziness",
    "Chest pain",
    "Abdominal pain",
    "Joint pain",
    "Rash",
    "Shortness of breath",
];

/// Mutable form state prior to submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentForm {
    symptoms: Vec<NonEmptyText>,
    age: String,
    duration: String,
    additional_info: String,
}

impl AssessmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a symptom. Blank input and exact duplicates are ignored.
    ///
    /// Returns `true` when the symptom was added.
    pub fn add_symptom(&mut self, symptom: impl AsRef<str>) -> bool {
        let Ok(symptom) = NonEmptyText::new(symptom) else {
            return false;
        };
        if self.symptoms.contains(&symptom) {
            return false;
        }
        self.symptoms.push(symptom);
        true
    }

    /// Removes a symptom by exact match. Returns `true` if something was removed.
    pub fn remove_symptom(&mut self, symptom: impl AsRef<str>) -> bool {
        let target = symptom.as_ref().trim();
        let before = self.symptoms.len();
        self.symptoms.retain(|s| s.as_str() != target);
        self.symptoms.len() != before
    }

    pub fn symptoms(&self) -> &[NonEmptyText] {
        &self.symptoms
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.age = age.into();
    }

    pub fn set_duration(&mut self, duration: impl Into<String>) {
        self.duration = duration.into();
    }

    pub fn set_additional_info(&mut self, info: impl Into<String>) {
        self.additional_info = info.into();
    }

    /// Whether the required fields are filled in. Value checks happen on submit.
    pub fn can_submit(&self) -> bool {
        !self.symptoms.is_empty() && !self.age.trim().is_empty() && !self.duration.trim().is_empty()
    }

    /// Validates the form and builds the report, stamped with `timestamp`.
    pub fn submit(self, timestamp: DateTime<Utc>) -> AssessmentResult<SymptomReport> {
        if self.symptoms.is_empty() {
            return Err(AssessmentError::NoSymptoms);
        }
        let age: Age = self.age.parse()?;
        let duration: SymptomDuration = self.duration.parse()?;

        let report = SymptomReport::new(
            self.symptoms,
            age,
            duration,
            self.additional_info.trim(),
            timestamp,
        )?;
        tracing::info!(
            symptom_count = report.symptoms().len(),
            duration = %report.duration(),
            "assessment submitted"
        );
        Ok(report)
    }

    /// Validates the form and stamps the report with the current time.
    pub fn submit_now(self) -> AssessmentResult<SymptomReport> {
        self.submit(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled_form() -> AssessmentForm {
        let mut form = AssessmentForm::new();
        form.add_symptom("Cough");
        form.add_symptom("Fever");
        form.set_age("42");
        form.set_duration("1-day");
        form
    }

    #[test]
    fn add_symptom_ignores_blank_and_duplicates() {
        let mut form = AssessmentForm::new();
        assert!(form.add_symptom("Headache"));
        assert!(!form.add_symptom("Headache"));
        assert!(!form.add_symptom(" Headache "));
        assert!(!form.add_symptom(""));
        assert!(!form.add_symptom("   "));
        // Matching is exact, so a different case is a different symptom.
        assert!(form.add_symptom("headache"));
        assert_eq!(form.symptoms().len(), 2);
    }

    #[test]
    fn remove_symptom_only_removes_exact_match() {
        let mut form = filled_form();
        assert!(!form.remove_symptom("cough"));
        assert!(form.remove_symptom("Cough"));
        assert_eq!(form.symptoms(), &[NonEmptyText::new("Fever").unwrap()]);
        assert!(!form.remove_symptom("Cough"));
    }

    #[test]
    fn can_submit_requires_symptom_age_and_duration() {
        let mut form = AssessmentForm::new();
        assert!(!form.can_submit());
        form.add_symptom("Rash");
        assert!(!form.can_submit());
        form.set_age("30");
        assert!(!form.can_submit());
        form.set_duration("weeks");
        assert!(form.can_submit());
    }

    #[test]
    fn submit_builds_report() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let mut form = filled_form();
        form.set_additional_info("  started after a long flight ");
        let report = form.submit(ts).unwrap();

        assert_eq!(report.age().years(), 42);
        assert_eq!(report.duration(), SymptomDuration::OneDay);
        assert_eq!(report.additional_info(), "started after a long flight");
        assert_eq!(report.timestamp(), ts);
        let names: Vec<&str> = report.symptoms().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["Cough", "Fever"]);
    }

    #[test]
    fn submit_reports_each_missing_field() {
        let ts = Utc::now();

        let mut form = filled_form();
        form.remove_symptom("Cough");
        form.remove_symptom("Fever");
        assert!(matches!(form.submit(ts), Err(AssessmentError::NoSymptoms)));

        let mut form = filled_form();
        form.set_age(" ");
        assert!(matches!(form.submit(ts), Err(AssessmentError::MissingAge)));

        let mut form = filled_form();
        form.set_age("0");
        assert!(matches!(form.submit(ts), Err(AssessmentError::InvalidAge { .. })));

        let mut form = filled_form();
        form.set_duration("");
        assert!(matches!(form.submit(ts), Err(AssessmentError::MissingDuration)));

        let mut form = filled_form();
        form.set_duration("years");
        assert!(matches!(form.submit(ts), Err(AssessmentError::UnknownDuration(_))));
    }

    #[test]
    fn long_symptom_is_kept_and_classified() {
        let long = format!("high fever {}", "x".repeat(600));
        let mut form = filled_form();
        form.remove_symptom("Fever");
        assert!(form.add_symptom(&long));

        let report = form.submit_now().unwrap();
        assert_eq!(report.symptoms().len(), 2);
        assert_eq!(report.symptoms()[1].as_str(), long);
        assert_eq!(
            crate::render_results(&report).primary().condition,
            "Upper Respiratory Infection"
        );

        let mut form = AssessmentForm::new();
        assert!(form.add_symptom("y".repeat(501)));
        form.set_age("30");
        form.set_duration("week");
        assert!(form.submit_now().is_ok());
    }

    #[test]
    fn common_symptoms_can_all_be_added() {
        let mut form = AssessmentForm::new();
        for symptom in COMMON_SYMPTOMS {
            assert!(form.add_symptom(symptom));
        }
        assert_eq!(form.symptoms().len(), COMMON_SYMPTOMS.len());
    }
}
