use log::info;

use crate::DbPool;

const STATEMENTS: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS admins (
        username        TEXT PRIMARY KEY NOT NULL COLLATE NOCASE,
        password_hash   TEXT NOT NULL,
        session_version INTEGER NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS events (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        name            TEXT NOT NULL UNIQUE COLLATE NOCASE,
        date            TEXT NOT NULL,
        time            TEXT NOT NULL,
        venue           TEXT NOT NULL,
        description     TEXT
    )",
    "CREATE TABLE IF NOT EXISTS bookings (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        event_name      TEXT NOT NULL COLLATE NOCASE REFERENCES events (name) ON DELETE CASCADE,
        user_name       TEXT NOT NULL,
        user_phone      TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_bookings_event_name ON bookings (event_name)",
];

/// Creates the admins, events and bookings tables if they are missing.
pub async fn init(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("database schema is ready");
    Ok(())
}
