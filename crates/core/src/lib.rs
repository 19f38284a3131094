//! # Cura Core
//!
//! Core logic for the Cura Gennie symptom checker.
//!
//! This crate contains pure data operations:
//! - The assessment form and the [`SymptomReport`] it produces
//! - The keyword rule table that maps symptoms to three candidate conditions
//! - Fixed advice content and results assembly
//! - The session hand-off between the form and the results view
//!
//! **No API concerns**: HTTP servers and command-line handling belong in `api-rest` and `cura-cli`.

pub mod advice;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod diagnosis;
pub mod error;
pub mod form;
pub mod report;
pub mod results;
pub mod session;

pub use advice::{AdviceSheet, LifestyleAdvice, Medicine, ADVICE_SHEET};
pub use classifier::{classify, matching_rule, Rule, SymptomSignals, RULES};
pub use config::CoreConfig;
pub use constants::*;
pub use diagnosis::{Diagnosis, Severity, Triad};
pub use error::{AssessmentError, AssessmentResult};
pub use form::{AssessmentForm, COMMON_SYMPTOMS};
pub use report::{Age, SymptomDuration, SymptomReport};
pub use results::{render_results, AssessmentResults, AssessmentSummary};
pub use session::{results_view, store_report, MemorySessionStore, ResultsView, SessionStore};

pub use cura_types::{NonEmptyText, TextError};
