pub mod admin;
pub mod events;

use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse,
};

pub fn page(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header(ContentType::html())
        .body(body)
}
