use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::domain::entities::{Alert, ClinicalNote, ImagingReport, LabResult};
use crate::domain::ports::store::{AlertStore, RecordStore, RecordWriter, StoreError};
use crate::domain::value_objects::report_category::ReportCategory;
use crate::domain::value_objects::severity::Severity;

use super::migrations;

/// SQLite-backed persistent store for patient records and alerts.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Create a new `SQLite` store at the given path.
    ///
    /// Expands `~`, creates parent directories, opens connection,
    /// sets WAL mode and pragmas, and initializes schema.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if the database cannot be opened or initialized.
    pub fn new(path: &str) -> Result<Self, StoreError> {
        let expanded = shellexpand::tilde(path);
        let db_path = PathBuf::from(expanded.as_ref());

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        }

        let conn =
            Connection::open(&db_path).map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        conn.pragma_update(None, "synchronous", "NORMAL")
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        conn.pragma_update(None, "busy_timeout", 5000)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        migrations::initialize_schema(&conn).map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn read_conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))
    }

    fn write_conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))
    }

    fn query_patient<T>(
        &self,
        sql: &str,
        patient_id: &str,
        parse: fn(&rusqlite::Row<'_>) -> Result<T, rusqlite::Error>,
    ) -> Result<Vec<T>, StoreError> {
        let conn = self.read_conn()?;

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![patient_id], parse)
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        drop(stmt);
        drop(conn);
        Ok(rows)
    }
}

fn conversion_error(
    column: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
}

fn parse_id(row: &rusqlite::Row<'_>, column: usize) -> Result<Uuid, rusqlite::Error> {
    let raw: String = row.get(column)?;
    Uuid::parse_str(&raw).map_err(|e| conversion_error(column, e))
}

fn parse_timestamp(row: &rusqlite::Row<'_>, column: usize) -> Result<DateTime<Utc>, rusqlite::Error> {
    let raw: String = row.get(column)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(column, e))
}

fn parse_report_row(row: &rusqlite::Row<'_>) -> Result<ImagingReport, rusqlite::Error> {
    let category: Option<String> = row.get(2)?;
    Ok(ImagingReport {
        id: parse_id(row, 0)?,
        patient_id: row.get(1)?,
        category: category.as_deref().map(ReportCategory::parse),
        content: row.get(3)?,
        created_at: parse_timestamp(row, 4)?,
    })
}

fn parse_lab_row(row: &rusqlite::Row<'_>) -> Result<LabResult, rusqlite::Error> {
    Ok(LabResult {
        id: parse_id(row, 0)?,
        patient_id: row.get(1)?,
        test_name: row.get(2)?,
        value: row.get(3)?,
        unit: row.get(4)?,
        created_at: parse_timestamp(row, 5)?,
    })
}

fn parse_note_row(row: &rusqlite::Row<'_>) -> Result<ClinicalNote, rusqlite::Error> {
    Ok(ClinicalNote {
        id: parse_id(row, 0)?,
        patient_id: row.get(1)?,
        content: row.get(2)?,
        created_at: parse_timestamp(row, 3)?,
    })
}

fn parse_alert_row(row: &rusqlite::Row<'_>) -> Result<Alert, rusqlite::Error> {
    let severity_str: String = row.get(2)?;
    let severity: Severity = severity_str.parse().map_err(|e: String| {
        conversion_error(2, std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })?;

    Ok(Alert {
        id: parse_id(row, 0)?,
        patient_id: row.get(1)?,
        severity,
        message: row.get(3)?,
        created_at: parse_timestamp(row, 4)?,
    })
}

// Ordering by rowid keeps store iteration order equal to insertion order.
impl RecordStore for SqliteStore {
    fn fetch_reports(&self, patient_id: &str) -> Result<Vec<ImagingReport>, StoreError> {
        self.query_patient(
            "SELECT id, patient_id, category, content, created_at \
             FROM reports WHERE patient_id = ?1 ORDER BY rowid",
            patient_id,
            parse_report_row,
        )
    }

    fn fetch_labs(&self, patient_id: &str) -> Result<Vec<LabResult>, StoreError> {
        self.query_patient(
            "SELECT id, patient_id, test_name, value, unit, created_at \
             FROM lab_results WHERE patient_id = ?1 ORDER BY rowid",
            patient_id,
            parse_lab_row,
        )
    }

    fn fetch_notes(&self, patient_id: &str) -> Result<Vec<ClinicalNote>, StoreError> {
        self.query_patient(
            "SELECT id, patient_id, content, created_at \
             FROM clinical_notes WHERE patient_id = ?1 ORDER BY rowid",
            patient_id,
            parse_note_row,
        )
    }
}

impl RecordWriter for SqliteStore {
    fn add_report(
        &self,
        patient_id: &str,
        category: Option<ReportCategory>,
        content: &str,
    ) -> Result<ImagingReport, StoreError> {
        let report = ImagingReport::new(patient_id, category, content);
        let conn = self.write_conn()?;

        conn.execute(
            "INSERT INTO reports (id, patient_id, category, content, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                report.id.to_string(),
                report.patient_id,
                report.category.map(|c| c.as_str()),
                report.content,
                report.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        drop(conn);
        Ok(report)
    }

    fn add_lab(
        &self,
        patient_id: &str,
        test_name: Option<&str>,
        value: f64,
        unit: &str,
    ) -> Result<LabResult, StoreError> {
        let lab = LabResult::new(patient_id, test_name.map(str::to_string), value, unit);
        let conn = self.write_conn()?;

        conn.execute(
            "INSERT INTO lab_results (id, patient_id, test_name, value, unit, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                lab.id.to_string(),
                lab.patient_id,
                lab.test_name,
                lab.value,
                lab.unit,
                lab.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        drop(conn);
        Ok(lab)
    }

    fn add_note(&self, patient_id: &str, content: &str) -> Result<ClinicalNote, StoreError> {
        let note = ClinicalNote::new(patient_id, content);
        let conn = self.write_conn()?;

        conn.execute(
            "INSERT INTO clinical_notes (id, patient_id, content, created_at) \
             VALUES (?1, ?2, ?3, ?4)",
            params![
                note.id.to_string(),
                note.patient_id,
                note.content,
                note.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        drop(conn);
        Ok(note)
    }
}

impl AlertStore for SqliteStore {
    fn create_alert(
        &self,
        patient_id: &str,
        severity: Severity,
        message: &str,
    ) -> Result<Alert, StoreError> {
        let alert = Alert::new(patient_id, severity, message);
        let conn = self.write_conn()?;

        conn.execute(
            "INSERT INTO alerts (id, patient_id, severity, message, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                alert.id.to_string(),
                alert.patient_id,
                alert.severity.to_string(),
                alert.message,
                alert.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        drop(conn);
        Ok(alert)
    }

    fn alerts_for_patient(&self, patient_id: &str) -> Result<Vec<Alert>, StoreError> {
        self.query_patient(
            "SELECT id, patient_id, severity, message, created_at \
             FROM alerts WHERE patient_id = ?1 ORDER BY rowid DESC",
            patient_id,
            parse_alert_row,
        )
    }

    fn all_alerts(&self) -> Result<Vec<Alert>, StoreError> {
        let conn = self.read_conn()?;

        let mut stmt = conn
            .prepare(
                "SELECT id, patient_id, severity, message, created_at \
                 FROM alerts ORDER BY rowid DESC",
            )
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        let alerts = stmt
            .query_map([], parse_alert_row)
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        drop(stmt);
        drop(conn);
        Ok(alerts)
    }
}
