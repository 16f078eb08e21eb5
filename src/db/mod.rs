pub mod admin;
pub mod booking;
pub mod event;
pub mod schema;

use std::str::FromStr;

use crate::DbPool;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use url::Url;

pub async fn init_db_pool(db_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    info!("database url: {}", redact_url(db_url));
    let options = SqliteConnectOptions::from_str(db_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool: DbPool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    info!("{}", "Connected to sqlite".to_string());
    Ok(pool)
}

/// Connection string with any password replaced, fit for logs.
pub fn redact_url(db_url: &str) -> String {
    match Url::parse(db_url) {
        Ok(mut url) if url.password().is_some() => {
            if url.set_password(Some("***")).is_err() {
                return format!("{}://***", url.scheme());
            }
            url.to_string()
        }
        Ok(_) => db_url.to_string(),
        Err(_) => "<unparseable database url>".to_string(),
    }
}
