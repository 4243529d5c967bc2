use crate::errors::ServerError;
use rusqlite::{params, Connection};

#[derive(Debug)]
pub struct LoadRun {
    pub id: i64,
    pub source: String,
    pub started_at: i64,
    pub finished_at: Option<i64>,
    pub records_seen: Option<i64>,
    pub success: bool,
    pub error_message: Option<String>,
}

pub fn start_load_run(conn: &Connection, source: &str, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        "INSERT INTO load_runs (source, started_at, success) VALUES (?, ?, 0)",
        params![source, now],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn end_load_run(
    conn: &Connection,
    run_id: i64,
    now: i64,
    records: usize,
    success: bool,
    error: Option<String>,
) -> Result<(), ServerError> {
    conn.execute(
        "UPDATE load_runs SET finished_at = ?, records_seen = ?, success = ?, error_message = ? WHERE id = ?",
        params![now, records as i64, success, error, run_id],
    )?;
    Ok(())
}

pub fn recent_load_runs(conn: &Connection, limit: usize) -> Result<Vec<LoadRun>, ServerError> {
    let mut stmt = conn.prepare(
        "SELECT id, source, started_at, finished_at, records_seen, success, error_message
         FROM load_runs ORDER BY id DESC LIMIT ?",
    )?;

    let rows = stmt.query_map(params![limit as i64], |row| {
        Ok(LoadRun {
            id: row.get(0)?,
            source: row.get(1)?,
            started_at: row.get(2)?,
            finished_at: row.get(3)?,
            records_seen: row.get(4)?,
            success: row.get(5)?,
            error_message: row.get(6)?,
        })
    })?;

    let mut runs = Vec::new();
    for r in rows {
        runs.push(r?);
    }
    Ok(runs)
}
