use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use clinwatch::application::config::AppConfig;
use clinwatch::application::services::analysis::AnalysisService;
use clinwatch::application::services::insight::InsightGenerator;
use clinwatch::domain::rules::RuleEngine;
use clinwatch::domain::value_objects::thresholds::MarkerThresholds;
use clinwatch::infrastructure::ai::create_explanation_service;
use clinwatch::infrastructure::persistence::sqlite_store::SqliteStore;
use clinwatch::presentation::cli::app::{Cli, Commands};
use clinwatch::presentation::cli::commands::add::{run_add_lab, run_add_note, run_add_report};
use clinwatch::presentation::cli::commands::alerts::run_alerts;
use clinwatch::presentation::cli::commands::analyze::run_analyze;
use clinwatch::presentation::cli::commands::records::run_records;

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };

    // Manual DI — main.rs is the only place that knows concrete types
    let store = SqliteStore::new(&config.database.path)?;

    match cli.command {
        Commands::Analyze { patient_id, json } => {
            let rule_engine = RuleEngine::default();
            let thresholds = MarkerThresholds::from(&config.thresholds);
            let explainer = create_explanation_service(&config.ai);
            let insight =
                InsightGenerator::new(&*explainer, Duration::from_secs(config.ai.timeout_secs));
            let service =
                AnalysisService::new(&store, &store, &rule_engine, &thresholds, &insight);
            run_analyze(&service, &patient_id, json).await?;
        }
        Commands::Alerts {
            patient_id,
            limit,
            json,
        } => run_alerts(&store, &patient_id, limit, json)?,
        Commands::Records { patient_id, json } => run_records(&store, &patient_id, json)?,
        Commands::AddReport {
            patient_id,
            category,
            content,
        } => run_add_report(&store, &patient_id, &category, &content)?,
        Commands::AddLab {
            patient_id,
            test_name,
            value,
            unit,
        } => run_add_lab(&store, &patient_id, &test_name, value, &unit)?,
        Commands::AddNote {
            patient_id,
            content,
        } => run_add_note(&store, &patient_id, &content)?,
    }

    Ok(())
}
