use clap::{Parser, Subcommand};
use cura_core::{
    config::analysis_delay_from_env_value, render_results, AdviceSheet, AssessmentForm,
    AssessmentResult, AssessmentResults, CoreConfig, ADVICE_SHEET, COMMON_SYMPTOMS,
};
use std::fmt::Write as _;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "cura")]
#[command(about = "Cura Gennie symptom checker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a set of symptoms
    Assess {
        /// Symptom to report (repeatable)
        #[arg(short, long = "symptom", required = true)]
        symptoms: Vec<String>,
        /// Age in whole years (1-120)
        #[arg(long)]
        age: String,
        /// How long the symptoms have lasted: hours, 1-day, 2-3-days, week, weeks, months
        #[arg(long)]
        duration: String,
        /// Any other relevant details
        #[arg(long, default_value = "")]
        notes: String,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
        /// Skip the analysis pause
        #[arg(long)]
        no_delay: bool,
    },
    /// List the quick-add symptoms
    Symptoms,
    /// Show the general advice given with every assessment
    Advice,
}

/// Resolves configuration from the environment. Called once before any command runs.
fn load_config() -> AssessmentResult<CoreConfig> {
    let delay = analysis_delay_from_env_value(std::env::var("CURA_ANALYSIS_DELAY_MS").ok())?;
    Ok(CoreConfig::new(delay))
}

fn analysis_delay(cfg: &CoreConfig, no_delay: bool) -> Duration {
    if no_delay {
        Duration::ZERO
    } else {
        cfg.analysis_delay()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = load_config()?;

    match cli.command {
        Some(Commands::Assess {
            symptoms,
            age,
            duration,
            notes,
            json,
            no_delay,
        }) => {
            let mut form = AssessmentForm::new();
            for symptom in &symptoms {
                form.add_symptom(symptom);
            }
            form.set_age(age);
            form.set_duration(duration);
            form.set_additional_info(notes);

            let report = match form.submit_now() {
                Ok(report) => report,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(2);
                }
            };
            let results = render_results(&report);

            let delay = analysis_delay(&cfg, no_delay);
            if !delay.is_zero() {
                eprintln!("Analyzing your symptoms...");
                std::thread::sleep(delay);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print!("{}", render_text(&results));
            }
        }
        Some(Commands::Symptoms) => {
            for symptom in COMMON_SYMPTOMS {
                println!("{}", symptom);
            }
        }
        Some(Commands::Advice) => {
            print!("{}", render_advice(&ADVICE_SHEET));
        }
        None => {
            println!("Use 'cura --help' for commands");
        }
    }

    Ok(())
}

fn render_text(results: &AssessmentResults) -> String {
    let summary = &results.summary;
    let mut out = String::new();

    let _ = writeln!(out, "Assessment Summary");
    let _ = writeln!(out, "  Age: {} years", summary.age);
    let _ = writeln!(out, "  Duration: {}", summary.duration_label);
    let _ = writeln!(out, "  Severity Level: {}", summary.severity_level);
    let _ = writeln!(out, "  Reported Symptoms: {}", summary.symptoms.join(", "));
    if !summary.additional_info.is_empty() {
        let _ = writeln!(out, "  Notes: {}", summary.additional_info);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Possible Diagnoses");
    for diagnosis in &results.diagnoses {
        let _ = writeln!(
            out,
            "  {:<30} {:>3}%  [{}]",
            diagnosis.condition, diagnosis.probability, diagnosis.severity
        );
        let _ = writeln!(out, "      {}", diagnosis.description);
    }

    let _ = writeln!(out);
    out.push_str(&render_advice(&results.advice));
    out
}

fn render_advice(advice: &AdviceSheet) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Recommended Medicines");
    for medicine in advice.medicines {
        let _ = writeln!(
            out,
            "  {} ({}): {}",
            medicine.name, medicine.dosage, medicine.purpose
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Home Remedies");
    for remedy in advice.home_remedies {
        let _ = writeln!(out, "  - {}", remedy);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Lifestyle Advice");
    for item in advice.lifestyle_advice {
        let _ = writeln!(out, "  {}: {}", item.title, item.description);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Important Notice");
    let _ = writeln!(out, "  {}", advice.notice);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn assess_collects_repeated_symptoms() {
        let cli = Cli::try_parse_from([
            "cura", "assess", "-s", "Cough", "--symptom", "Fever", "--age", "30", "--duration",
            "1-day",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Assess {
                symptoms, no_delay, ..
            }) => {
                assert_eq!(symptoms, ["Cough", "Fever"]);
                assert!(!no_delay);
            }
            _ => panic!("expected assess command"),
        }
    }

    #[test]
    fn assess_requires_a_symptom() {
        let parsed = Cli::try_parse_from(["cura", "assess", "--age", "30", "--duration", "week"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn no_delay_overrides_configured_pause() {
        let cfg = CoreConfig::new(Duration::from_millis(750));
        assert_eq!(analysis_delay(&cfg, false), Duration::from_millis(750));
        assert_eq!(analysis_delay(&cfg, true), Duration::ZERO);
        assert_eq!(analysis_delay(&CoreConfig::default(), false), Duration::from_millis(2_000));
    }

    #[test]
    fn text_output_lists_diagnoses_and_advice() {
        let mut form = AssessmentForm::new();
        form.add_symptom("Headache");
        form.add_symptom("Fatigue");
        form.set_age("45");
        form.set_duration("weeks");
        let results = render_results(&form.submit_now().unwrap());

        let text = render_text(&results);
        assert!(text.contains("Duration: Several weeks"));
        assert!(text.contains("Severity Level: Low"));
        assert!(text.contains("Tension Headache"));
        assert!(text.contains("70%"));
        assert!(text.contains("Paracetamol (500mg every 6 hours)"));
        assert!(text.contains("Important Notice"));
    }
}
