mod common;

use actix_web::{
    body::MessageBody,
    cookie::Cookie,
    dev::ServiceResponse,
    http::StatusCode,
    test, web, App,
};
use common::test_pool;
use event_tickets::{
    handlers,
    service::session::{SessionKeys, SessionMiddleware},
    DbPool, SESSION_COOKIE,
};

macro_rules! spawn_app {
    ($pool:expr) => {{
        let pool: DbPool = $pool;
        let keys = SessionKeys::new(b"test-secret", 3600);
        test::init_service(
            App::new()
                .app_data(web::Data::new(pool.clone()))
                .app_data(web::Data::new(keys.clone()))
                .wrap(SessionMiddleware { keys, db_pool: pool })
                .configure(handlers::events::init_routes)
                .configure(handlers::admin::init_routes),
        )
        .await
    }};
}

macro_rules! sign_up_and_log_in {
    ($app:expr, $username:expr, $password:expr) => {{
        let req = test::TestRequest::post()
            .uri("/admin/signup")
            .set_form(&[("username", $username), ("password", $password)])
            .to_request();
        assert_eq!(test::call_service($app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/admin/login")
            .set_form(&[("username", $username), ("password", $password)])
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        session_cookie_of(&resp).expect("login must set the session cookie")
    }};
}

async fn body_text(resp: ServiceResponse<impl MessageBody>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn session_cookie_of(resp: &ServiceResponse<impl MessageBody>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

#[actix_web::test]
async fn public_page_without_events() {
    let app = spawn_app!(test_pool().await);
    for uri in ["/", "/events"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.contains("Upcoming Events"));
        assert!(html.contains("There are no upcoming events at the moment."));
    }
}

#[actix_web::test]
async fn admin_page_offers_login_and_signup() {
    let app = spawn_app!(test_pool().await);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Admin Login"));

    let req = test::TestRequest::get().uri("/admin?mode=signup").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(body_text(resp).await.contains("Create New Admin Account"));
}

#[actix_web::test]
async fn signup_requires_both_fields() {
    let app = spawn_app!(test_pool().await);
    let req = test::TestRequest::post()
        .uri("/admin/signup")
        .set_form(&[("username", "alice"), ("password", "")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("Please enter both username and password."));
}

#[actix_web::test]
async fn wrong_password_is_rejected_without_session() {
    let app = spawn_app!(test_pool().await);
    let req = test::TestRequest::post()
        .uri("/admin/signup")
        .set_form(&[("username", "alice"), ("password", "secret")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Admin account created successfully!"));

    let req = test::TestRequest::post()
        .uri("/admin/login")
        .set_form(&[("username", "alice"), ("password", "wrong")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(session_cookie_of(&resp).is_none());
    assert!(body_text(resp).await.contains("Incorrect username or password."));
}

#[actix_web::test]
async fn admin_actions_require_a_session() {
    let app = spawn_app!(test_pool().await);
    let req = test::TestRequest::post()
        .uri("/admin/events")
        .set_form(&[
            ("name", "Gala"),
            ("date", "2025-12-01"),
            ("time", "19:00"),
            ("venue", "Hall A"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let forged = Cookie::new(SESSION_COOKIE, "not-a-token");
    let req = test::TestRequest::post()
        .uri("/admin/events/delete")
        .cookie(forged)
        .set_form(&[("name", "Gala")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn booking_unknown_event_reports_error() {
    let app = spawn_app!(test_pool().await);
    let req = test::TestRequest::post()
        .uri("/events/book")
        .set_form(&[("event_name", "Ghost"), ("user_name", "Bob"), ("user_phone", "555-0100")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn admin_and_visitor_round_trip() {
    let app = spawn_app!(test_pool().await);

    let req = test::TestRequest::post()
        .uri("/admin/signup")
        .set_form(&[("username", "alice"), ("password", "secret")])
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/admin/login")
        .set_form(&[("username", "alice"), ("password", "secret")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let session = session_cookie_of(&resp).expect("login must set the session cookie");
    let html = body_text(resp).await;
    assert!(html.contains("Logged in successfully!"));
    assert!(html.contains("No events have been added yet."));

    let req = test::TestRequest::post()
        .uri("/admin/events")
        .cookie(session.clone())
        .set_form(&[
            ("name", "Gala"),
            ("date", "2025-12-01"),
            ("time", "19:00"),
            ("venue", "Hall A"),
            ("description", ""),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Event 'Gala' added successfully!"));

    // same name again is a duplicate
    let req = test::TestRequest::post()
        .uri("/admin/events")
        .cookie(session.clone())
        .set_form(&[
            ("name", "Gala"),
            ("date", "2026-01-01"),
            ("time", "10:00"),
            ("venue", "Hall B"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert!(body_text(resp).await.contains("An event with the name 'Gala' already exists."));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/events").to_request()).await;
    let html = body_text(resp).await;
    assert!(html.contains("<h3>Gala</h3>"));
    assert!(html.contains("Monday, 01 December 2025"));
    assert!(html.contains("07:00 PM"));

    let req = test::TestRequest::post()
        .uri("/events/book")
        .set_form(&[("event_name", "Gala"), ("user_name", "Bob"), ("user_phone", "555-0100")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Ticket booked for Bob for the event 'Gala'!"));

    let req = test::TestRequest::get()
        .uri("/admin?event=Gala")
        .cookie(session.clone())
        .to_request();
    let html = body_text(test::call_service(&app, req).await).await;
    assert!(html.contains("<td>Gala</td><td>2025-12-01</td><td>19:00</td><td>Hall A</td><td>1</td>"));
    assert!(html.contains("<td>Bob</td><td>555-0100</td>"));

    let req = test::TestRequest::post()
        .uri("/admin/events/delete")
        .cookie(session.clone())
        .set_form(&[("name", "Gala")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Event 'Gala' and all its bookings (1) have been deleted."));
    assert!(html.contains("No events have been added yet."));

    let req = test::TestRequest::post()
        .uri("/admin/logout")
        .cookie(session)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cleared = session_cookie_of(&resp).expect("logout must clear the session cookie");
    assert_eq!(cleared.value(), "");
    assert!(body_text(resp).await.contains("Admin Login"));
}

#[actix_web::test]
async fn padded_username_logs_in_as_typed_at_sign_up() {
    let app = spawn_app!(test_pool().await);
    let session = sign_up_and_log_in!(&app, "alice ", "secret");

    // the trimmed account is the same one
    let req = test::TestRequest::post()
        .uri("/admin/login")
        .set_form(&[("username", "alice"), ("password", "secret")])
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/admin").cookie(session).to_request();
    assert!(body_text(test::call_service(&app, req).await).await.contains("Admin Dashboard"));
}

#[actix_web::test]
async fn login_requires_both_fields() {
    let app = spawn_app!(test_pool().await);
    let req = test::TestRequest::post()
        .uri("/admin/login")
        .set_form(&[("username", "  "), ("password", "secret")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(session_cookie_of(&resp).is_none());
    assert!(body_text(resp).await.contains("Please enter both username and password."));
}

#[actix_web::test]
async fn old_cookie_is_rejected_after_logout() {
    let app = spawn_app!(test_pool().await);
    let session = sign_up_and_log_in!(&app, "alice", "secret");

    let req = test::TestRequest::post()
        .uri("/admin/logout")
        .cookie(session.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/admin/events")
        .cookie(session)
        .set_form(&[
            ("name", "Gala"),
            ("date", "2025-12-01"),
            ("time", "19:00"),
            ("venue", "Hall A"),
        ])
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    // a fresh login works again
    let req = test::TestRequest::post()
        .uri("/admin/login")
        .set_form(&[("username", "alice"), ("password", "secret")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    let fresh = session_cookie_of(&resp).expect("login must set the session cookie");
    let req = test::TestRequest::get().uri("/admin").cookie(fresh).to_request();
    assert!(body_text(test::call_service(&app, req).await).await.contains("Admin Dashboard"));
}
