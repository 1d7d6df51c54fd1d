//! HTTP tests: pages and API through the full actix app with cookie sessions.

mod common;

use actix_web::{
    body::MessageBody,
    cookie::{Cookie, Key},
    dev::ServiceResponse,
    http::StatusCode,
    test::{self, TestRequest},
    web::Data,
    App, HttpRequest,
};
use async_trait::async_trait;
use common::{panel_title, stat_value};
use serde_json::{json, Value};
use std::sync::Arc;
use tourney_pro_web::{
    web, AppState, AuthError, InMemoryStore, ProfileStats, Session, SessionResolver, StatsStore,
    StoreError, UserId,
};

struct FaultyResolver;

#[async_trait(?Send)]
impl SessionResolver for FaultyResolver {
    async fn resolve_session(&self, _req: &HttpRequest) -> Result<Option<Session>, AuthError> {
        Err(AuthError::Unavailable("auth backend down".to_string()))
    }
}

struct BrokenStore;

#[async_trait(?Send)]
impl StatsStore for BrokenStore {
    async fn count_participations(&self, _user_id: &UserId) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("db down".to_string()))
    }

    async fn count_matches_won(&self, _user_id: &UserId) -> Result<u64, StoreError> {
        Ok(0)
    }

    async fn count_tournaments_organized(&self, _user_id: &UserId) -> Result<u64, StoreError> {
        Ok(0)
    }
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(web::session_middleware(Key::generate(), false))
                .app_data(Data::new($state))
                .configure(web::configure),
        )
        .await
    };
}

/// Sign in through the API and return the session cookie.
macro_rules! sign_in {
    ($app:expr, $body:expr) => {{
        let req = TestRequest::post()
            .uri("/api/session")
            .set_json($body)
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let cookie: Cookie<'static> = resp
            .response()
            .cookies()
            .next()
            .expect("session cookie")
            .into_owned();
        cookie
    }};
}

fn ann_body() -> Value {
    json!({ "user": { "id": "u1", "name": "Ann", "email": "ann@x.com" } })
}

async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = app!(AppState::in_memory());
    let resp: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/health").to_request(),
    )
    .await;
    assert_eq!(resp, json!({ "ok": true, "service": "tourney-pro-web" }));
}

#[actix_web::test]
async fn profile_without_session_asks_to_sign_in() {
    let app = app!(AppState::in_memory());
    let req = TestRequest::get().uri("/dashboard/profile").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Authentication Required"));
    assert!(html.contains("Please sign in to view your profile"));
    assert!(html.contains("<title>TourneyPro</title>"));
}

#[actix_web::test]
async fn profile_with_session_but_no_user_is_not_found() {
    let app = app!(AppState::in_memory());
    let cookie = sign_in!(app, json!({}));
    let req = TestRequest::get()
        .uri("/dashboard/profile")
        .cookie(cookie)
        .to_request();
    let html = body_text(test::call_service(&app, req).await).await;
    assert_eq!(panel_title(&html), Some("User Profile Not Found"));
}

#[actix_web::test]
async fn profile_renders_counts_from_store() {
    let store = Arc::new(InMemoryStore::new());
    let app = app!(AppState::with_store(store.clone()));
    let ann = sign_in!(app, ann_body());
    let bob = sign_in!(app, json!({ "user": { "id": "u2", "name": "Bob" } }));

    let mut tournament_ids = Vec::new();
    for name in ["Cup A", "Cup B", "Cup C"] {
        let req = TestRequest::post()
            .uri("/api/tournaments")
            .cookie(bob.clone())
            .set_json(json!({ "name": name }))
            .to_request();
        let t: Value = test::call_and_read_body_json(&app, req).await;
        tournament_ids.push(t["id"].as_str().unwrap().to_string());
    }
    for id in &tournament_ids {
        let req = TestRequest::post()
            .uri(&format!("/api/tournaments/{id}/participants"))
            .cookie(ann.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
    let req = TestRequest::post()
        .uri(&format!("/api/tournaments/{}/matches", tournament_ids[0]))
        .cookie(bob.clone())
        .set_json(json!({ "winner_id": "u1" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = TestRequest::get()
        .uri("/dashboard/profile")
        .cookie(ann.clone())
        .to_request();
    let html = body_text(test::call_service(&app, req).await).await;
    assert!(html.contains("<h1 class=\"text-2xl font-bold\">Ann</h1>"));
    assert!(html.contains("ann@x.com"));
    assert_eq!(stat_value(&html, "Tournaments Joined"), Some("3"));
    assert_eq!(stat_value(&html, "Matches Won"), Some("1"));
    assert_eq!(stat_value(&html, "Tournaments Organized"), Some("0"));

    let req = TestRequest::get()
        .uri("/api/profile/stats")
        .cookie(ann)
        .to_request();
    let stats: ProfileStats = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        stats,
        ProfileStats {
            tournaments_joined: 3,
            matches_won: 1,
            tournaments_organized: 0,
        }
    );
}

#[actix_web::test]
async fn resolver_fault_renders_auth_error_panel() {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::new(Arc::new(FaultyResolver), store.clone(), store);
    let app = app!(state);
    let req = TestRequest::get().uri("/dashboard/profile").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert_eq!(panel_title(&html), Some("Authentication Error"));
    assert!(html.contains("Failed to load session. Please try again later."));
}

#[actix_web::test]
async fn store_fault_on_profile_is_a_server_error() {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState {
        stats: Arc::new(BrokenStore),
        ..AppState::with_store(store)
    };
    let app = app!(state);
    let cookie = sign_in!(app, ann_body());
    let req = TestRequest::get()
        .uri("/dashboard/profile")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_text(resp).await;
    assert!(!html.contains("Statistics"));
}

#[actix_web::test]
async fn home_page_notifies_on_resolver_fault() {
    let store = Arc::new(InMemoryStore::new());
    let app = app!(AppState::new(Arc::new(FaultyResolver), store.clone(), store));
    let resp = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("notification-error"));
    assert!(html.contains("Sign in"));
}

#[actix_web::test]
async fn sign_out_clears_the_session() {
    let app = app!(AppState::in_memory());
    let cookie = sign_in!(app, ann_body());
    let req = TestRequest::delete()
        .uri("/api/session")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let cleared = resp
        .response()
        .cookies()
        .next()
        .expect("removal cookie")
        .into_owned();
    let req = TestRequest::get()
        .uri("/dashboard/profile")
        .cookie(cleared)
        .to_request();
    let html = body_text(test::call_service(&app, req).await).await;
    assert!(html.contains("Authentication Required"));
}

#[actix_web::test]
async fn expired_session_counts_as_signed_out() {
    let app = app!(AppState::in_memory());
    let cookie = sign_in!(
        app,
        json!({ "user": { "id": "u1" }, "max_age_secs": -60 })
    );
    let req = TestRequest::get()
        .uri("/dashboard/profile")
        .cookie(cookie)
        .to_request();
    let html = body_text(test::call_service(&app, req).await).await;
    assert!(html.contains("Authentication Required"));
}

#[actix_web::test]
async fn api_requires_sign_in() {
    let app = app!(AppState::in_memory());
    let req = TestRequest::post()
        .uri("/api/tournaments")
        .set_json(json!({ "name": "Cup" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Authentication required" }));

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/profile/stats").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn api_rejects_blank_names_and_unknown_tournaments() {
    let app = app!(AppState::in_memory());
    let cookie = sign_in!(app, ann_body());
    let req = TestRequest::post()
        .uri("/api/tournaments")
        .cookie(cookie.clone())
        .set_json(json!({ "name": "   " }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = TestRequest::post()
        .uri(&format!("/api/tournaments/{}/participants", uuid::Uuid::new_v4()))
        .cookie(cookie)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn favicon_is_no_content() {
    let app = app!(AppState::in_memory());
    let req = TestRequest::get().uri("/favicon.ico").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn get_tournament_returns_it_or_404() {
    let app = app!(AppState::in_memory());
    let cookie = sign_in!(app, ann_body());
    let req = TestRequest::post()
        .uri("/api/tournaments")
        .cookie(cookie)
        .set_json(json!({ "name": "Summer Open" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap();

    let req = TestRequest::get()
        .uri(&format!("/api/tournaments/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["name"], "Summer Open");
    assert_eq!(fetched["organizer_id"], "u1");

    let req = TestRequest::get()
        .uri(&format!("/api/tournaments/{}", uuid::Uuid::new_v4()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn home_page_greets_signed_in_user() {
    let app = app!(AppState::in_memory());
    let cookie = sign_in!(app, ann_body());
    let req = TestRequest::get().uri("/").cookie(cookie).to_request();
    let html = body_text(test::call_service(&app, req).await).await;
    assert!(html.contains("<li class=\"notification notification-info\">Signed in as Ann</li>"));
    assert!(html.contains("<span class=\"nav-user\">Ann</span>"));
}
