//! Keyword rule table mapping reported symptoms to three candidate conditions.
//!
//! Rules are evaluated top to bottom and the first whose predicate holds wins. The last rule
//! always holds, so classification is total: every input, including an empty one, yields
//! exactly three diagnoses.

use crate::diagnosis::{Triad, GENERIC_VIRAL_TRIAD, HEADACHE_TRIAD, RESPIRATORY_TRIAD};

/// Symptoms matched exactly (case-insensitively) to flag a respiratory complaint.
pub const RESPIRATORY_SYMPTOMS: [&str; 3] = ["cough", "sore throat", "shortness of breath"];

/// Substring flagging a fever.
pub const FEVER_KEYWORD: &str = "fever";

/// Substring flagging a headache.
pub const HEADACHE_KEYWORD: &str = "headache";

/// Substring flagging fatigue.
pub const FATIGUE_KEYWORD: &str = "fatigue";

/// Keyword flags derived from a symptom list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymptomSignals {
    pub respiratory: bool,
    pub fever: bool,
    pub headache: bool,
    pub fatigue: bool,
}

impl SymptomSignals {
    pub fn from_symptoms<S: AsRef<str>>(symptoms: &[S]) -> Self {
        let mut signals = Self::default();
        for symptom in symptoms {
            let lowered = symptom.as_ref().to_lowercase();
            signals.respiratory |= RESPIRATORY_SYMPTOMS.contains(&lowered.as_str());
            signals.fever |= lowered.contains(FEVER_KEYWORD);
            signals.headache |= lowered.contains(HEADACHE_KEYWORD);
            signals.fatigue |= lowered.contains(FATIGUE_KEYWORD);
        }
        signals
    }
}

/// One entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&SymptomSignals) -> bool,
    pub diagnoses: Triad,
}

fn respiratory_with_fever(signals: &SymptomSignals) -> bool {
    signals.respiratory && signals.fever
}

fn headache_with_fatigue(signals: &SymptomSignals) -> bool {
    signals.headache && signals.fatigue
}

fn always(_: &SymptomSignals) -> bool {
    true
}

/// Rules in evaluation order. The final rule matches everything.
pub static RULES: [Rule; 3] = [
    Rule {
        name: "respiratory illness",
        applies: respiratory_with_fever,
        diagnoses: RESPIRATORY_TRIAD,
    },
    Rule {
        name: "headache",
        applies: headache_with_fatigue,
        diagnoses: HEADACHE_TRIAD,
    },
    Rule {
        name: "generic viral",
        applies: always,
        diagnoses: GENERIC_VIRAL_TRIAD,
    },
];

/// Returns the first rule whose predicate holds for `symptoms`.
pub fn matching_rule<S: AsRef<str>>(symptoms: &[S]) -> &'static Rule {
    let signals = SymptomSignals::from_symptoms(symptoms);
    // Last rule is a catch-all.
    let rule = RULES
        .iter()
        .find(|rule| (rule.applies)(&signals))
        .unwrap_or(&RULES[RULES.len() - 1]);

    tracing::debug!(
        rule = rule.name,
        symptom_count = symptoms.len(),
        ?signals,
        "symptom rule matched"
    );
    rule
}

/// Classifies a symptom list into three candidate conditions, highest probability first.
pub fn classify<S: AsRef<str>>(symptoms: &[S]) -> Triad {
    matching_rule(symptoms).diagnoses
}
