use sqlx::sqlite::SqliteQueryResult;

use crate::{models::Admin, DbPool};

pub async fn create(admin: &Admin, pool: &DbPool) -> Result<SqliteQueryResult, sqlx::Error> {
    sqlx::query("INSERT INTO admins (username, password_hash) VALUES (?1, ?2)")
        .bind(&admin.username)
        .bind(&admin.password_hash)
        .execute(pool)
        .await
}

pub async fn get_by_username(username: &str, pool: &DbPool) -> Result<Option<Admin>, sqlx::Error> {
    sqlx::query_as::<_, Admin>("SELECT username, password_hash FROM admins WHERE username = ?1")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// `None` when the admin does not exist.
pub async fn get_session_version(username: &str, pool: &DbPool) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT session_version FROM admins WHERE username = ?1")
        .bind(username)
        .fetch_optional(pool)
        .await
}

pub async fn bump_session_version(username: &str, pool: &DbPool) -> Result<u64, sqlx::Error> {
    let res = sqlx::query("UPDATE admins SET session_version = session_version + 1 WHERE username = ?1")
        .bind(username)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
