use rusqlite::Connection;

/// Initialize the database schema, creating tables if they don't exist.
///
/// # Errors
/// Returns `rusqlite::Error` if any SQL statement fails.
pub fn initialize_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS reports (
            id          TEXT    PRIMARY KEY,
            patient_id  TEXT    NOT NULL,
            category    TEXT,
            content     TEXT    NOT NULL,
            created_at  TEXT    NOT NULL
        );

        CREATE TABLE IF NOT EXISTS lab_results (
            id          TEXT    PRIMARY KEY,
            patient_id  TEXT    NOT NULL,
            test_name   TEXT,
            value       REAL    NOT NULL,
            unit        TEXT    NOT NULL,
            created_at  TEXT    NOT NULL
        );

        CREATE TABLE IF NOT EXISTS clinical_notes (
            id          TEXT    PRIMARY KEY,
            patient_id  TEXT    NOT NULL,
            content     TEXT    NOT NULL,
            created_at  TEXT    NOT NULL
        );

        CREATE TABLE IF NOT EXISTS alerts (
            id          TEXT    PRIMARY KEY,
            patient_id  TEXT    NOT NULL,
            severity    TEXT    NOT NULL,
            message     TEXT    NOT NULL,
            created_at  TEXT    NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_reports_patient ON reports(patient_id);
        CREATE INDEX IF NOT EXISTS idx_lab_results_patient ON lab_results(patient_id);
        CREATE INDEX IF NOT EXISTS idx_clinical_notes_patient ON clinical_notes(patient_id);
        CREATE INDEX IF NOT EXISTS idx_alerts_patient ON alerts(patient_id);",
    )?;
    Ok(())
}
