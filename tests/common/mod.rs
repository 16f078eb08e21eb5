#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use event_tickets::{
    db::{self, init_db_pool},
    dto::NewEventDto,
    DbPool,
};

/// Fresh in-memory database with the schema applied. A single connection
/// keeps the in-memory database alive for the whole test.
pub async fn test_pool() -> DbPool {
    let pool = init_db_pool("sqlite::memory:", 1)
        .await
        .expect("failed to open in-memory sqlite");
    db::schema::init(&pool).await.expect("failed to create schema");
    pool
}

pub fn new_event(name: &str, date: (i32, u32, u32), time: (u32, u32)) -> NewEventDto {
    NewEventDto {
        name: name.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
        venue: "Hall A".to_string(),
        description: None,
    }
}

pub fn gala() -> NewEventDto {
    new_event("Gala", (2025, 12, 1), (19, 0))
}
