//! Session-scoped hand-off between the assessment form and the results view.
//!
//! The form writes the serialised report under [`ASSESSMENT_SESSION_KEY`]; the results view
//! reads it back. A later submission overwrites the earlier one. When nothing has been stored,
//! the results view redirects to the form instead of rendering.
//!
//! Callers that already hold a [`SymptomReport`] should call
//! [`render_results`](crate::results::render_results) directly.

use crate::constants::{ASSESSMENT_ROUTE, ASSESSMENT_SESSION_KEY};
use crate::report::SymptomReport;
use crate::results::{render_results, AssessmentResults};
use crate::{AssessmentError, AssessmentResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// Minimal string key/value store scoped to one browsing session.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: String);
}

/// In-memory [`SessionStore`]. Last write wins.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        let items = self.items.read().unwrap_or_else(|e| e.into_inner());
        items.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: String) {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.insert(key.to_owned(), value);
    }
}

/// What the results view should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// No report is stored; send the user back to the form.
    Redirect { to: &'static str },
    Ready(Box<AssessmentResults>),
}

/// Serialises `report` into the session, replacing any earlier report.
pub fn store_report(store: &impl SessionStore, report: &SymptomReport) -> AssessmentResult<()> {
    let payload = serde_json::to_string(report).map_err(AssessmentError::Serialization)?;
    store.set_item(ASSESSMENT_SESSION_KEY, payload);
    Ok(())
}

/// Reads the stored report, if any.
pub fn load_report(store: &impl SessionStore) -> AssessmentResult<Option<SymptomReport>> {
    store
        .get_item(ASSESSMENT_SESSION_KEY)
        .map(|payload| serde_json::from_str(&payload).map_err(AssessmentError::Deserialization))
        .transpose()
}

/// Resolves the results view from session state.
pub fn results_view(store: &impl SessionStore) -> AssessmentResult<ResultsView> {
    match load_report(store)? {
        Some(report) => Ok(ResultsView::Ready(Box::new(render_results(&report)))),
        None => {
            tracing::debug!("no stored assessment, redirecting to form");
            Ok(ResultsView::Redirect {
                to: ASSESSMENT_ROUTE,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::AssessmentForm;

    fn report(symptoms: &[&str]) -> SymptomReport {
        let mut form = AssessmentForm::new();
        for s in symptoms {
            form.add_symptom(s);
        }
        form.set_age("51");
        form.set_duration("week");
        form.submit_now().unwrap()
    }

    #[test]
    fn empty_session_redirects_to_form() {
        let store = MemorySessionStore::new();
        assert_eq!(
            results_view(&store).unwrap(),
            ResultsView::Redirect {
                to: "/symptom-assessment"
            }
        );
    }

    #[test]
    fn stored_report_renders_results() {
        let store = MemorySessionStore::new();
        let report = report(&["Headache", "Fatigue"]);
        store_report(&store, &report).unwrap();

        assert_eq!(load_report(&store).unwrap(), Some(report.clone()));
        match results_view(&store).unwrap() {
            ResultsView::Ready(results) => assert_eq!(*results, render_results(&report)),
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[test]
    fn later_submission_overwrites_earlier() {
        let store = MemorySessionStore::new();
        store_report(&store, &report(&["Cough", "Fever"])).unwrap();
        let second = report(&["Rash"]);
        store_report(&store, &second).unwrap();

        assert_eq!(load_report(&store).unwrap(), Some(second));
    }

    #[test]
    fn payload_uses_session_key_and_form_fields() {
        let store = MemorySessionStore::new();
        store_report(&store, &report(&["Cough"])).unwrap();
        let raw = store.get_item("assessmentData").expect("payload stored");
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["age"], "51");
        assert_eq!(value["duration"], "week");
        assert!(value.get("additionalInfo").is_some());
    }

    #[test]
    fn corrupt_payload_is_an_error() {
        let store = MemorySessionStore::new();
        store.set_item(ASSESSMENT_SESSION_KEY, "{not json".into());
        assert!(matches!(
            results_view(&store),
            Err(AssessmentError::Deserialization(_))
        ));
    }

    #[test]
    fn stored_payload_without_symptoms_is_an_error() {
        let store = MemorySessionStore::new();
        store.set_item(
            ASSESSMENT_SESSION_KEY,
            r#"{"symptoms":[],"age":"40","duration":"week","timestamp":"2026-03-01T09:30:00Z"}"#
                .into(),
        );
        assert!(matches!(
            load_report(&store),
            Err(AssessmentError::Deserialization(_))
        ));
    }
}
