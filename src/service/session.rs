use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{DecodingKey, EncodingKey};
use log::{debug, error};

use crate::{db, DbPool, SESSION_COOKIE};

/// The authenticated admin of the current browser session. Present in the
/// request extensions only when a valid session cookie was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub username: String,
}

#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    pub ttl_secs: i64,
}

impl SessionKeys {
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_secs,
        }
    }
}

pub fn session_cookie(token: String, keys: &SessionKeys) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(keys.ttl_secs))
        .finish()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// Accepts a session cookie only when its signature is valid, it has not
/// expired, and its version still matches the admin's row.
pub struct SessionMiddleware {
    pub keys: SessionKeys,
    pub db_pool: DbPool,
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
            keys: self.keys.clone(),
            db_pool: self.db_pool.clone(),
        }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: Rc<S>,
    keys: SessionKeys,
    db_pool: DbPool,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let claims = match req.cookie(SESSION_COOKIE) {
            Some(cookie) => match jwt::decode_claims(&self.keys, cookie.value()) {
                Ok(data) => Some(data.claims),
                Err(err) => {
                    debug!("ignoring session cookie: {}", err);
                    None
                }
            },
            None => None,
        };
        let service = Rc::clone(&self.service);
        let pool = self.db_pool.clone();
        Box::pin(async move {
            if let Some(claims) = claims {
                match db::admin::get_session_version(&claims.sub, &pool).await {
                    Ok(Some(version)) if version == claims.ver => {
                        req.extensions_mut().insert(AdminSession {
                            username: claims.sub,
                        });
                    }
                    Ok(_) => debug!("ignoring revoked session of '{}'", claims.sub),
                    Err(err) => error!("failed to check session of '{}': {}", claims.sub, err),
                }
            }
            let res = service.call(req).await?;
            Ok(res)
        })
    }
}

pub mod jwt {
    use chrono::Utc;
    use jsonwebtoken::{decode, encode, errors::Error, Algorithm, Header, TokenData, Validation};

    use super::SessionKeys;
    use crate::{dto::SessionClaims, errors::AppError};

    pub fn create(keys: &SessionKeys, username: &str, version: i64) -> Result<String, AppError> {
        let exp = (Utc::now().timestamp() + keys.ttl_secs).max(0) as usize;
        let claims = SessionClaims::new(username, version, exp);
        encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding).map_err(|err| AppError::Session {
            reason: err.to_string(),
        })
    }

    /// Fails on a bad signature or an expired token.
    pub fn decode_claims(keys: &SessionKeys, token: &str) -> Result<TokenData<SessionClaims>, Error> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<SessionClaims>(token, &keys.decoding, &validation)
    }
}
