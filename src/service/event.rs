use log::{info, warn};

use crate::{
    db,
    dto::NewEventDto,
    errors::AppError,
    models::{Event, EventSummary},
    DbPool,
};

pub async fn create_event(dto: NewEventDto, pool: &DbPool) -> Result<u64, AppError> {
    let res = db::event::create(&dto, pool).await;
    match res {
        Ok(query_result) => {
            info!("created event '{}' on {} {}", dto.name, dto.date, dto.time);
            Ok(query_result.rows_affected())
        }
        Err(err) => match AppError::from(err) {
            AppError::DuplicateKey { .. } => {
                warn!("event '{}' already exists", dto.name);
                Err(AppError::DuplicateKey {
                    message: format!("Error: An event with the name '{}' already exists.", dto.name),
                })
            }
            other => Err(other),
        },
    }
}

pub async fn list_events(pool: &DbPool) -> Result<Vec<Event>, AppError> {
    Ok(db::event::get_all(pool).await?)
}

pub async fn list_event_summaries(pool: &DbPool) -> Result<Vec<EventSummary>, AppError> {
    Ok(db::event::get_all_with_booking_counts(pool).await?)
}

/// Deleting an unknown event is not an error; the returned row count is 0.
pub async fn delete_event(name: &str, pool: &DbPool) -> Result<u64, AppError> {
    let rows_affected = db::event::delete_by_name(name, pool).await?;
    if rows_affected == 0 {
        warn!("delete requested for unknown event '{}'", name);
    } else {
        info!("deleted event '{}' and its bookings", name);
    }
    Ok(rows_affected)
}

pub async fn count_bookings(name: &str, pool: &DbPool) -> Result<Option<i64>, AppError> {
    Ok(db::event::count_bookings(name, pool).await?)
}
