//! Constants used throughout the Cura core crate.
//!
//! Keeps session keys, routes and form bounds in one place so the front ends agree on them.

/// Session storage key holding the serialised [`SymptomReport`](crate::SymptomReport).
pub const ASSESSMENT_SESSION_KEY: &str = "assessmentData";

/// Route of the assessment form. Visiting the results view without a stored report lands here.
pub const ASSESSMENT_ROUTE: &str = "/symptom-assessment";

/// Default cosmetic pause before results are revealed, in milliseconds.
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2_000;

/// Youngest age accepted by the assessment form.
pub const MIN_AGE_YEARS: u8 = 1;

/// Oldest age accepted by the assessment form.
pub const MAX_AGE_YEARS: u8 = 120;

/// Number of candidate conditions the classifier always returns.
pub const DIAGNOSES_PER_ASSESSMENT: usize = 3;
