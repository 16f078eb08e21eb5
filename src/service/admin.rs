use log::{info, warn};

use crate::{dto::NewAdminDto, errors::AppError, models::Admin, db, DbPool};

use super::crypto;

pub async fn create_admin(dto: NewAdminDto, pool: &DbPool) -> Result<(), AppError> {
    let NewAdminDto { username, password } = dto;
    let admin = Admin {
        password_hash: crypto::get_sha3_256_hash(&password),
        username,
    };
    match db::admin::create(&admin, pool).await {
        Ok(_) => {
            info!("created admin account '{}'", admin.username);
            Ok(())
        }
        Err(err) => match AppError::from(err) {
            AppError::DuplicateKey { .. } => {
                warn!("admin account '{}' already exists", admin.username);
                Err(AppError::DuplicateKey {
                    message: "Username already exists.".to_string(),
                })
            }
            other => Err(other),
        },
    }
}

/// True iff the account exists and the password digest matches. An unknown
/// username and a wrong password are indistinguishable to the caller.
pub async fn verify_admin(username: &str, password: &str, pool: &DbPool) -> Result<bool, AppError> {
    let admin = db::admin::get_by_username(username, pool).await?;
    Ok(match admin {
        Some(admin) => crypto::matches_hash(password, &admin.password_hash),
        None => false,
    })
}

/// Version a new session token must carry; `None` for an unknown admin.
pub async fn session_version(username: &str, pool: &DbPool) -> Result<Option<i64>, AppError> {
    Ok(db::admin::get_session_version(username, pool).await?)
}

/// Invalidates every session token issued to this admin so far.
pub async fn end_sessions(username: &str, pool: &DbPool) -> Result<(), AppError> {
    db::admin::bump_session_version(username, pool).await?;
    info!("ended sessions of admin '{}'", username);
    Ok(())
}
