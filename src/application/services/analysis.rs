use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregator::{aggregate, fetch_records};
use super::insight::{build_request, InsightGenerator};
use crate::domain::entities::Alert;
use crate::domain::ports::store::{AlertStore, RecordStore, StoreError};
use crate::domain::rules::{ClinicalSignal, RuleEngine};
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::MarkerThresholds;

pub const NO_DATA_MESSAGE: &str = "No data found for this patient.";
pub const NO_DISCREPANCY_MESSAGE: &str = "No clinically significant discrepancy detected.";

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("failed to read patient records: {0}")]
    RecordsUnavailable(#[source] StoreError),
    #[error("failed to persist alert: {0}")]
    PersistenceFailed(#[source] StoreError),
}

/// How a single analysis invocation ended.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// The patient has no reports, labs or notes.
    NoData,
    /// Records exist but no rule matched.
    NoDiscrepancy,
    /// A rule matched and the alert was persisted.
    Alerted(Alert),
}

/// One element of the externally observable response list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    pub severity: Severity,
    pub message: String,
}

impl AnalysisOutcome {
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::NoData | Self::NoDiscrepancy => Severity::Info,
            Self::Alerted(alert) => alert.severity,
        }
    }

    /// The single-element response list returned to callers.
    #[must_use]
    pub fn to_response(&self) -> Vec<AlertResponse> {
        let response = match self {
            Self::NoData => AlertResponse {
                patient_id: None,
                severity: Severity::Info,
                message: NO_DATA_MESSAGE.to_string(),
            },
            Self::NoDiscrepancy => AlertResponse {
                patient_id: None,
                severity: Severity::Info,
                message: NO_DISCREPANCY_MESSAGE.to_string(),
            },
            Self::Alerted(alert) => AlertResponse {
                patient_id: Some(alert.patient_id.clone()),
                severity: alert.severity,
                message: alert.message.clone(),
            },
        };
        vec![response]
    }
}

/// Orchestrates one analysis: aggregate → extract → classify → explain → record.
pub struct AnalysisService<'a> {
    records: &'a dyn RecordStore,
    alerts: &'a dyn AlertStore,
    rule_engine: &'a RuleEngine,
    thresholds: &'a MarkerThresholds,
    insight: &'a InsightGenerator<'a>,
}

impl<'a> AnalysisService<'a> {
    #[must_use]
    pub const fn new(
        records: &'a dyn RecordStore,
        alerts: &'a dyn AlertStore,
        rule_engine: &'a RuleEngine,
        thresholds: &'a MarkerThresholds,
        insight: &'a InsightGenerator<'a>,
    ) -> Self {
        Self {
            records,
            alerts,
            rule_engine,
            thresholds,
            insight,
        }
    }

    /// Run the discrepancy pipeline for one patient.
    ///
    /// At most one alert is created per call. Explanation failures are
    /// absorbed by the insight generator and never surface here.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::RecordsUnavailable` if the records cannot be
    /// read, and `AnalysisError::PersistenceFailed` if the alert cannot be
    /// stored.
    pub async fn analyze(&self, patient_id: &str) -> Result<AnalysisOutcome, AnalysisError> {
        tracing::info!(patient_id, "Analyzing patient records");

        let records =
            fetch_records(self.records, patient_id).map_err(AnalysisError::RecordsUnavailable)?;
        tracing::debug!(
            reports = records.reports.len(),
            labs = records.labs.len(),
            notes = records.notes.len(),
            "Records fetched"
        );

        let Some(aggregated) = aggregate(records) else {
            tracing::info!(patient_id, "No data found");
            return Ok(AnalysisOutcome::NoData);
        };

        let signal = ClinicalSignal::extract(&aggregated.imaging_text, &aggregated.labs);
        tracing::debug!(
            crp = ?signal.crp,
            wbc = ?signal.wbc,
            infection_negative = signal.infection_negative,
            "Signal extracted"
        );

        let Some(classification) = self.rule_engine.classify(&signal, self.thresholds) else {
            tracing::info!(patient_id, "No clinically significant discrepancy");
            return Ok(AnalysisOutcome::NoDiscrepancy);
        };
        tracing::debug!(
            rule = classification.rule,
            severity = %classification.severity,
            "Classified"
        );
        if !classification.severity.is_persisted() {
            return Ok(AnalysisOutcome::NoDiscrepancy);
        }

        let request = build_request(
            &aggregated.imaging_text,
            &signal,
            &aggregated.clinical_notes,
        );
        let explanation = self.insight.explain(&request).await;

        let message = format!("{} {}", classification.template, explanation);
        let alert = self
            .alerts
            .create_alert(patient_id, classification.severity, &message)
            .map_err(AnalysisError::PersistenceFailed)?;

        tracing::info!(
            patient_id,
            alert_id = %alert.id,
            severity = %alert.severity,
            "Alert recorded"
        );
        Ok(AnalysisOutcome::Alerted(alert))
    }
}
