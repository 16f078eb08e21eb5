use actix_web::{get, http::StatusCode, post, web, HttpResponse, ResponseError};
use log::{error, info, warn};

use super::page;
use crate::{
    dto::{AdminPageQuery, DeleteEventForm, LoginDto, LoginForm, NewEventForm, SignUpForm},
    errors::AppError,
    service::{
        self,
        session::{self, jwt, AdminSession, SessionKeys},
    },
    views::{
        admin::{render_dashboard, render_login, render_signup, DashboardView},
        Notice,
    },
    DbPool,
};

fn login_page(notices: Vec<Notice>, status: StatusCode) -> HttpResponse {
    page(status, render_login(&notices))
}

fn unauthorized() -> HttpResponse {
    let err = AppError::Unauthorized;
    warn!("admin action attempted without a session");
    login_page(
        vec![Notice::Error("Please log in as an admin first.".to_string())],
        err.status_code(),
    )
}

async fn dashboard(
    pool: &DbPool,
    session: &AdminSession,
    selected_event: Option<String>,
    mut notices: Vec<Notice>,
    mut status: StatusCode,
) -> HttpResponse {
    let mut view = DashboardView {
        username: session.username.clone(),
        ..Default::default()
    };
    match service::event::list_event_summaries(pool).await {
        Ok(summaries) => view.summaries = summaries,
        Err(err) => {
            error!("[{} : {}] failed to load events: {}", file!(), line!(), err);
            notices.push(Notice::from(&err));
            status = err.status_code();
        }
    }

    // a stale selection (e.g. a just-deleted event) falls back to the first event
    let selected_event = selected_event
        .filter(|name| view.summaries.iter().any(|s| &s.event.name == name))
        .or_else(|| view.summaries.first().map(|s| s.event.name.clone()));
    if let Some(name) = &selected_event {
        match service::booking::list_bookings(name, pool).await {
            Ok(bookings) => view.bookings = bookings,
            Err(err) => {
                error!("[{} : {}] failed to load bookings for '{}': {}", file!(), line!(), name, err);
                notices.push(Notice::from(&err));
                status = err.status_code();
            }
        }
    }
    view.selected_event = selected_event;

    page(status, render_dashboard(&view, &notices))
}

#[get("/admin")]
pub async fn admin_page(
    query: web::Query<AdminPageQuery>,
    session: Option<web::ReqData<AdminSession>>,
    pool_state: web::Data<DbPool>,
) -> HttpResponse {
    let query = query.into_inner();
    match session {
        Some(session) => {
            dashboard(pool_state.get_ref(), &session, query.event, Vec::new(), StatusCode::OK).await
        }
        None if query.wants_signup() => page(StatusCode::OK, render_signup(&[])),
        None => login_page(Vec::new(), StatusCode::OK),
    }
}

#[post("/admin/login")]
pub async fn login(
    form: web::Form<LoginForm>,
    pool_state: web::Data<DbPool>,
    keys: web::Data<SessionKeys>,
) -> HttpResponse {
    let conn: &DbPool = pool_state.get_ref();
    let LoginDto { username, password } = match form.into_inner().validate() {
        Ok(dto) => dto,
        Err(err) => return login_page(vec![Notice::from(&err)], err.status_code()),
    };
    match service::admin::verify_admin(&username, &password, conn).await {
        Ok(true) => {}
        Ok(false) => {
            warn!("failed login attempt for '{}'", username);
            return login_page(
                vec![Notice::Error("Incorrect username or password.".to_string())],
                StatusCode::UNAUTHORIZED,
            );
        }
        Err(err) => {
            error!("[{} : {}] login failed: {}", file!(), line!(), err);
            return login_page(vec![Notice::from(&err)], err.status_code());
        }
    }

    let token = match service::admin::session_version(&username, conn).await {
        Ok(Some(version)) => jwt::create(keys.get_ref(), &username, version),
        // removed between the two statements
        Ok(None) => Err(AppError::Unauthorized),
        Err(err) => Err(err),
    };
    let token = match token {
        Ok(token) => token,
        Err(err) => {
            error!("[{} : {}] failed to issue session: {}", file!(), line!(), err);
            return login_page(vec![Notice::from(&err)], err.status_code());
        }
    };
    info!("admin '{}' logged in", username);
    let session = AdminSession { username };
    let notices = vec![Notice::Success("Logged in successfully!".to_string())];
    let mut response = dashboard(conn, &session, None, notices, StatusCode::OK).await;
    if let Err(err) = response.add_cookie(&session::session_cookie(token, keys.get_ref())) {
        error!("[{} : {}] failed to set session cookie: {}", file!(), line!(), err);
    }
    response
}

#[post("/admin/signup")]
pub async fn signup(form: web::Form<SignUpForm>, pool_state: web::Data<DbPool>) -> HttpResponse {
    let dto = match form.into_inner().validate() {
        Ok(dto) => dto,
        Err(err) => return page(err.status_code(), render_signup(&[Notice::from(&err)])),
    };
    match service::admin::create_admin(dto, pool_state.get_ref()).await {
        Ok(()) => login_page(
            vec![Notice::Success("Admin account created successfully!".to_string())],
            StatusCode::OK,
        ),
        Err(err) => {
            error!("[{} : {}] sign up failed: {}", file!(), line!(), err);
            page(err.status_code(), render_signup(&[Notice::from(&err)]))
        }
    }
}

#[post("/admin/logout")]
pub async fn logout(
    session: Option<web::ReqData<AdminSession>>,
    pool_state: web::Data<DbPool>,
) -> HttpResponse {
    if let Some(session) = session {
        // copies of the old cookie must stop working too
        if let Err(err) = service::admin::end_sessions(&session.username, pool_state.get_ref()).await {
            error!("[{} : {}] failed to end sessions of '{}': {}", file!(), line!(), session.username, err);
        }
        info!("admin '{}' logged out", session.username);
    }
    let mut response = login_page(
        vec![Notice::Info("You have been logged out.".to_string())],
        StatusCode::OK,
    );
    if let Err(err) = response.add_cookie(&session::removal_cookie()) {
        error!("[{} : {}] failed to clear session cookie: {}", file!(), line!(), err);
    }
    response
}

#[post("/admin/events")]
pub async fn create_event(
    form: web::Form<NewEventForm>,
    session: Option<web::ReqData<AdminSession>>,
    pool_state: web::Data<DbPool>,
) -> HttpResponse {
    let Some(session) = session else {
        return unauthorized();
    };
    let conn: &DbPool = pool_state.get_ref();
    let dto = match form.into_inner().validate() {
        Ok(dto) => dto,
        Err(err) => {
            return dashboard(conn, &session, None, vec![Notice::from(&err)], err.status_code()).await
        }
    };
    let name = dto.name.clone();
    match service::event::create_event(dto, conn).await {
        Ok(_) => {
            let notice = Notice::Success(format!("Event '{}' added successfully!", name));
            dashboard(conn, &session, None, vec![notice], StatusCode::OK).await
        }
        Err(err) => {
            error!("[{} : {}] failed to create event '{}': {}", file!(), line!(), name, err);
            dashboard(conn, &session, None, vec![Notice::from(&err)], err.status_code()).await
        }
    }
}

#[post("/admin/events/delete")]
pub async fn delete_event(
    form: web::Form<DeleteEventForm>,
    session: Option<web::ReqData<AdminSession>>,
    pool_state: web::Data<DbPool>,
) -> HttpResponse {
    let Some(session) = session else {
        return unauthorized();
    };
    let conn: &DbPool = pool_state.get_ref();
    let name = form.into_inner().name;
    if name.trim().is_empty() {
        let err = AppError::validation("Please select an event to delete.");
        return dashboard(conn, &session, None, vec![Notice::from(&err)], err.status_code()).await;
    }

    let booking_count = match service::event::count_bookings(&name, conn).await {
        Ok(count) => count,
        Err(err) => {
            error!("[{} : {}] failed to count bookings of '{}': {}", file!(), line!(), name, err);
            return dashboard(conn, &session, None, vec![Notice::from(&err)], err.status_code()).await;
        }
    };
    match service::event::delete_event(&name, conn).await {
        Ok(0) => {
            let notice = Notice::Info(format!("Event '{}' no longer exists.", name));
            dashboard(conn, &session, None, vec![notice], StatusCode::OK).await
        }
        Ok(_) => {
            let notice = Notice::Success(format!(
                "Event '{}' and all its bookings ({}) have been deleted.",
                name,
                booking_count.unwrap_or(0)
            ));
            dashboard(conn, &session, None, vec![notice], StatusCode::OK).await
        }
        Err(err) => {
            error!("[{} : {}] failed to delete event '{}': {}", file!(), line!(), name, err);
            dashboard(conn, &session, None, vec![Notice::from(&err)], err.status_code()).await
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(admin_page)
        .service(login)
        .service(signup)
        .service(logout)
        .service(create_event)
        .service(delete_event);
}
