use actix_web::{web, App, HttpServer};
use log::{error, info};

use event_tickets::{
    config::Config,
    db::{self, init_db_pool},
    handlers,
    service::{self, session::SessionKeys},
    DbPool,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    service::log::init_logger();

    let config = Config::from_env().map_err(|e| {
        error!("failed to load configuration: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let pool: DbPool = init_db_pool(&config.database_url, config.db_max_connections)
        .await
        .map_err(|e| {
            error!(
                "failed to open database '{}': {}",
                db::redact_url(&config.database_url),
                e
            );
            std::io::Error::other(e.to_string())
        })?;
    db::schema::init(&pool).await.map_err(|e| {
        error!("failed to initialize schema: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let keys = SessionKeys::new(config.session_secret.as_bytes(), config.session_ttl_secs);

    info!("listening on http://{}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(keys.clone()))
            .wrap(service::session::SessionMiddleware {
                keys: keys.clone(),
                db_pool: pool.clone(),
            })
            .wrap(service::log::LoggerMiddleware)
            .configure(handlers::events::init_routes)
            .configure(handlers::admin::init_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
