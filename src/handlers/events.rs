use actix_web::{get, http::StatusCode, post, web, HttpResponse, ResponseError};
use log::{error, info, warn};

use super::page;
use crate::{
    dto::BookingForm,
    service,
    views::{self, Notice},
    DbPool,
};

async fn events_page(pool: &DbPool, mut notices: Vec<Notice>, mut status: StatusCode) -> HttpResponse {
    let events = match service::event::list_events(pool).await {
        Ok(events) => events,
        Err(err) => {
            error!("[{} : {}] failed to list events: {}", file!(), line!(), err);
            notices.push(Notice::from(&err));
            status = err.status_code();
            Vec::new()
        }
    };
    page(status, views::events::render_events_page(&events, &notices))
}

#[get("/")]
pub async fn index(pool_state: web::Data<DbPool>) -> HttpResponse {
    events_page(pool_state.get_ref(), Vec::new(), StatusCode::OK).await
}

#[get("/events")]
pub async fn get_all(pool_state: web::Data<DbPool>) -> HttpResponse {
    events_page(pool_state.get_ref(), Vec::new(), StatusCode::OK).await
}

#[post("/events/book")]
pub async fn book(form: web::Form<BookingForm>, pool_state: web::Data<DbPool>) -> HttpResponse {
    let conn: &DbPool = pool_state.get_ref();
    let dto = match form.into_inner().validate() {
        Ok(dto) => dto,
        Err(err) => {
            warn!("booking form rejected: {}", err);
            return events_page(conn, vec![Notice::from(&err)], err.status_code()).await;
        }
    };
    let (user_name, event_name) = (dto.user_name.clone(), dto.event_name.clone());
    match service::booking::create_booking(dto, conn).await {
        Ok(_) => {
            info!("RESPONSE /EVENTS/BOOK: booking for '{}'", event_name);
            let notice = Notice::Success(format!(
                "Ticket booked for {} for the event '{}'!",
                user_name, event_name
            ));
            events_page(conn, vec![notice], StatusCode::OK).await
        }
        Err(err) => {
            error!("[{} : {}] booking failed: {}", file!(), line!(), err);
            events_page(conn, vec![Notice::from(&err)], err.status_code()).await
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(get_all).service(book);
}
