use sqlx::sqlite::SqliteQueryResult;

use crate::{
    dto::NewEventDto,
    models::{Event, EventSummary},
    DbPool,
};

pub async fn create(event: &NewEventDto, pool: &DbPool) -> Result<SqliteQueryResult, sqlx::Error> {
    sqlx::query(
        "INSERT INTO events (name, date, time, venue, description)
        VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(&event.name)
    .bind(event.date)
    .bind(event.time)
    .bind(&event.venue)
    .bind(&event.description)
    .execute(pool)
    .await
}

pub async fn get_all(pool: &DbPool) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        "SELECT id, name, date, time, venue, description FROM events ORDER BY date, time",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_all_with_booking_counts(pool: &DbPool) -> Result<Vec<EventSummary>, sqlx::Error> {
    sqlx::query_as::<_, EventSummary>(
        "SELECT e.id, e.name, e.date, e.time, e.venue, e.description, COUNT(b.id) AS booking_count
        FROM events e
        LEFT JOIN bookings b ON b.event_name = e.name
        GROUP BY e.id
        ORDER BY e.date, e.time",
    )
    .fetch_all(pool)
    .await
}

// bookings go with it through ON DELETE CASCADE
pub async fn delete_by_name(name: &str, pool: &DbPool) -> Result<u64, sqlx::Error> {
    let res = sqlx::query("DELETE FROM events WHERE name = ?1")
        .bind(name)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

/// `None` when no event with this name exists.
pub async fn count_bookings(name: &str, pool: &DbPool) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT (SELECT COUNT(*) FROM bookings b WHERE b.event_name = e.name)
        FROM events e
        WHERE e.name = ?1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await
}
