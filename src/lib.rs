pub mod config;
pub mod db;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod service;
pub mod views;

use sqlx::{sqlite::Sqlite, Pool};

pub type DbPool = Pool<Sqlite>;

pub const SESSION_COOKIE: &str = "admin_session";
pub const SESSION_TTL_SECS: i64 = 8 * 60 * 60;
