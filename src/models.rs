use chrono::{NaiveDate, NaiveTime};
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow, serde::Serialize, serde::Deserialize)]
pub struct Admin {
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, serde::Serialize, serde::Deserialize)]
pub struct Booking {
    pub id: i64,
    pub event_name: String,
    pub user_name: String,
    pub user_phone: String,
}

/// Dashboard row: an event together with how many tickets it has sold.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, serde::Serialize)]
pub struct EventSummary {
    #[sqlx(flatten)]
    pub event: Event,
    pub booking_count: i64,
}
