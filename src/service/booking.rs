use log::{info, warn};

use crate::{db, dto::NewBookingDto, errors::AppError, models::Booking, DbPool};

/// Inserts without checking capacity or duplicates. An unknown event is
/// rejected by the foreign key, not by a lookup beforehand.
pub async fn create_booking(dto: NewBookingDto, pool: &DbPool) -> Result<u64, AppError> {
    match db::booking::create(&dto, pool).await {
        Ok(query_result) => {
            info!("booked a ticket for '{}' to '{}'", dto.user_name, dto.event_name);
            Ok(query_result.rows_affected())
        }
        Err(err) => {
            let err = AppError::from(err);
            if let AppError::ForeignKeyViolation { .. } = err {
                warn!("booking rejected, event '{}' does not exist", dto.event_name);
            }
            Err(err)
        }
    }
}

pub async fn list_bookings(event_name: &str, pool: &DbPool) -> Result<Vec<Booking>, AppError> {
    Ok(db::booking::get_for_event(event_name, pool).await?)
}
