//! Request and response bodies for the Cura APIs.
//!
//! These are plain owned types with OpenAPI schemas. Conversions from the core result types
//! live here so every front end renders the same JSON.

use cura_core::{
    AdviceSheet, AssessmentForm, AssessmentResults, AssessmentSummary, Diagnosis, LifestyleAdvice,
    Medicine,
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommonSymptomsRes {
    pub symptoms: Vec<String>,
}

/// A symptom assessment as submitted by the form.
///
/// Every field is optional on the wire. Missing values are left blank so the form validation
/// reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AssessmentReq {
    pub symptoms: Vec<String>,
    /// Age in whole years, 1 to 120. A JSON number is accepted too.
    #[serde(deserialize_with = "string_or_number")]
    pub age: String,
    /// One of `hours`, `1-day`, `2-3-days`, `week`, `weeks`, `months`.
    pub duration: String,
    pub additional_info: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAge {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match RawAge::deserialize(deserializer)? {
        RawAge::Text(text) => text,
        RawAge::Integer(n) => n.to_string(),
        RawAge::Float(n) => n.to_string(),
    })
}

impl AssessmentReq {
    /// Replays the request into a form so it goes through the same validation.
    pub fn into_form(self) -> AssessmentForm {
        let mut form = AssessmentForm::new();
        for symptom in &self.symptoms {
            form.add_symptom(symptom);
        }
        form.set_age(self.age);
        form.set_duration(self.duration);
        form.set_additional_info(self.additional_info);
        form
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoreAssessmentRes {
    pub stored: bool,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosisRes {
    pub condition: String,
    pub probability: u8,
    pub severity: String,
    pub description: String,
}

impl From<&Diagnosis> for DiagnosisRes {
    fn from(d: &Diagnosis) -> Self {
        Self {
            condition: d.condition.into(),
            probability: d.probability,
            severity: d.severity.to_string(),
            description: d.description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SummaryRes {
    pub age: u8,
    pub duration: String,
    pub duration_label: String,
    pub severity_level: String,
    pub symptoms: Vec<String>,
    pub additional_info: String,
    pub submitted_at: String,
}

impl From<&AssessmentSummary> for SummaryRes {
    fn from(s: &AssessmentSummary) -> Self {
        Self {
            age: s.age,
            duration: s.duration.into(),
            duration_label: s.duration_label.into(),
            severity_level: s.severity_level.to_string(),
            symptoms: s.symptoms.clone(),
            additional_info: s.additional_info.clone(),
            submitted_at: s.submitted_at.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MedicineRes {
    pub name: String,
    pub dosage: String,
    pub purpose: String,
}

impl From<&Medicine> for MedicineRes {
    fn from(m: &Medicine) -> Self {
        Self {
            name: m.name.into(),
            dosage: m.dosage.into(),
            purpose: m.purpose.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LifestyleAdviceRes {
    pub title: String,
    pub description: String,
}

impl From<&LifestyleAdvice> for LifestyleAdviceRes {
    fn from(a: &LifestyleAdvice) -> Self {
        Self {
            title: a.title.into(),
            description: a.description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdviceRes {
    pub medicines: Vec<MedicineRes>,
    pub home_remedies: Vec<String>,
    pub lifestyle_advice: Vec<LifestyleAdviceRes>,
    pub notice: String,
}

impl From<&AdviceSheet> for AdviceRes {
    fn from(a: &AdviceSheet) -> Self {
        Self {
            medicines: a.medicines.iter().map(MedicineRes::from).collect(),
            home_remedies: a.home_remedies.iter().map(|r| r.to_string()).collect(),
            lifestyle_advice: a
                .lifestyle_advice
                .iter()
                .map(LifestyleAdviceRes::from)
                .collect(),
            notice: a.notice.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssessmentRes {
    pub summary: SummaryRes,
    pub diagnoses: Vec<DiagnosisRes>,
    pub advice: AdviceRes,
}

impl From<&AssessmentResults> for AssessmentRes {
    fn from(r: &AssessmentResults) -> Self {
        Self {
            summary: SummaryRes::from(&r.summary),
            diagnoses: r.diagnoses.iter().map(DiagnosisRes::from).collect(),
            advice: AdviceRes::from(&r.advice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(symptoms: &[&str]) -> AssessmentReq {
        AssessmentReq {
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            age: "27".into(),
            duration: "hours".into(),
            additional_info: String::new(),
        }
    }

    #[test]
    fn request_defaults_missing_notes() {
        let req: AssessmentReq =
            serde_json::from_str(r#"{"symptoms":["Fever"],"age":"3","duration":"1-day"}"#)
                .unwrap();
        assert_eq!(req.additional_info, "");
    }

    #[test]
    fn request_leaves_missing_fields_to_form_validation() {
        let req: AssessmentReq = serde_json::from_str(r#"{"symptoms":["Fever"]}"#).unwrap();
        assert_eq!(req.age, "");
        assert_eq!(req.duration, "");
        assert!(matches!(
            req.into_form().submit_now(),
            Err(cura_core::AssessmentError::MissingAge)
        ));

        let req: AssessmentReq = serde_json::from_str("{}").unwrap();
        assert!(req.symptoms.is_empty());
    }

    #[test]
    fn request_accepts_numeric_age() {
        let req: AssessmentReq =
            serde_json::from_str(r#"{"symptoms":["Rash"],"age":34,"duration":"week"}"#).unwrap();
        assert_eq!(req.age, "34");
        assert_eq!(req.into_form().submit_now().unwrap().age().years(), 34);

        let req: AssessmentReq =
            serde_json::from_str(r#"{"symptoms":["Rash"],"age":-2,"duration":"week"}"#).unwrap();
        assert!(matches!(
            req.into_form().submit_now(),
            Err(cura_core::AssessmentError::InvalidAge { .. })
        ));
    }

    #[test]
    fn long_symptom_reaches_the_classifier() {
        let long = format!("high fever {}", "x".repeat(600));
        let report = request(&["Cough", long.as_str()]).into_form().submit_now().unwrap();
        assert_eq!(report.symptoms().len(), 2);
        let results = cura_core::render_results(&report);
        assert_eq!(results.primary().condition, "Upper Respiratory Infection");
    }

    #[test]
    fn into_form_skips_blank_and_duplicate_symptoms() {
        let form = request(&["Cough", "", "Cough", "Fever"]).into_form();
        assert_eq!(form.symptoms().len(), 2);
        assert!(form.can_submit());
    }

    #[test]
    fn assessment_res_mirrors_core_results() {
        let report = request(&["Cough", "Fever"]).into_form().submit_now().unwrap();
        let results = cura_core::render_results(&report);
        let res = AssessmentRes::from(&results);

        assert_eq!(res.diagnoses.len(), 3);
        assert_eq!(res.diagnoses[0].condition, "Upper Respiratory Infection");
        assert_eq!(res.diagnoses[0].severity, "Medium");
        assert_eq!(res.summary.severity_level, "Medium");
        assert_eq!(res.summary.duration_label, "A few hours");
        assert_eq!(res.advice.medicines.len(), 3);
        assert_eq!(res.advice.home_remedies.len(), 5);
    }

    #[test]
    fn wire_shape_matches_core_serialisation() {
        for notes in ["", "worse at night"] {
            let mut req = request(&["Headache", "Fatigue"]);
            req.additional_info = notes.into();
            let results = cura_core::render_results(&req.into_form().submit_now().unwrap());

            assert_eq!(
                serde_json::to_value(&results).unwrap(),
                serde_json::to_value(AssessmentRes::from(&results)).unwrap()
            );
        }
    }
}
