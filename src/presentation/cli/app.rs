use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// clinwatch — radiology/laboratory discrepancy monitor
///
/// Flags patients whose imaging reports contradict their inflammatory
/// markers and records a graded alert with a short explanation.
#[derive(Parser, Debug)]
#[command(name = "clinwatch")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a patient for radiology/laboratory discrepancies
    #[command(alias = "a")]
    Analyze {
        patient_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a patient's alert history, newest first
    #[command(alias = "al")]
    Alerts {
        patient_id: String,

        /// Only show the N most recent alerts
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List a patient's reports, lab results and notes
    #[command(alias = "r")]
    Records {
        patient_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Store an imaging report (radiology, ct, mri, xray, echo)
    AddReport {
        patient_id: String,
        category: String,
        content: String,
    },

    /// Store a lab result
    AddLab {
        patient_id: String,
        test_name: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        unit: String,
    },

    /// Store a clinical note
    AddNote { patient_id: String, content: String },
}
