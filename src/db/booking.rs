use sqlx::sqlite::SqliteQueryResult;

use crate::{dto::NewBookingDto, models::Booking, DbPool};

pub async fn create(booking: &NewBookingDto, pool: &DbPool) -> Result<SqliteQueryResult, sqlx::Error> {
    sqlx::query("INSERT INTO bookings (event_name, user_name, user_phone) VALUES (?1, ?2, ?3)")
        .bind(&booking.event_name)
        .bind(&booking.user_name)
        .bind(&booking.user_phone)
        .execute(pool)
        .await
}

pub async fn get_for_event(event_name: &str, pool: &DbPool) -> Result<Vec<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>(
        "SELECT id, event_name, user_name, user_phone FROM bookings WHERE event_name = ?1 ORDER BY id",
    )
    .bind(event_name)
    .fetch_all(pool)
    .await
}
