//! Server-rendered pages, each wrapped in the shell.

use super::{AppState, PageError};
use crate::profile::load_view_state;
use crate::view::home::HomePage;
use crate::view::profile;
use crate::view::shell::{NotificationKind, Shell};
use actix_web::{get, web::Data, HttpRequest, HttpResponse};
use askama::Template;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Home page. The session lookup only feeds the shell and a notification here.
#[get("/")]
pub(super) async fn index(
    req: HttpRequest,
    state: Data<AppState>,
) -> Result<HttpResponse, PageError> {
    let mut shell = Shell::default();
    match state.resolver.resolve_session(&req).await {
        Ok(session) => shell.session.identity = session.and_then(|s| s.user),
        Err(e) => {
            log::warn!("Session resolution failed on home page: {}", e);
            shell
                .notifications
                .push(NotificationKind::Error, "Failed to load session.");
        }
    }
    if let Some(identity) = &shell.session.identity {
        let notice = format!("Signed in as {}", identity.display_label());
        shell.notifications.push(NotificationKind::Info, notice);
    }
    Ok(html(HomePage { shell }.render()?))
}

/// Profile page. Store faults are returned as errors (default 500 response).
#[get("/dashboard/profile")]
pub(super) async fn profile_page(
    req: HttpRequest,
    state: Data<AppState>,
) -> Result<HttpResponse, PageError> {
    let view_state = load_view_state(state.resolver.as_ref(), state.stats.as_ref(), &req).await?;
    let shell = Shell::new(view_state.identity().cloned());
    Ok(html(profile::render(shell, &view_state)?))
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
pub(super) async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}
