//! Single binary web server: server-rendered pages, static files from /static, JSON API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST, PORT, SESSION_SECRET, STATIC_DIR, COOKIE_SECURE.

use actix_files::Files;
use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use tourney_pro_web::{web, AppState, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let key = config.session_key();
    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(AppState::in_memory());
    let static_dir = config.static_dir.clone();
    let cookie_secure = config.cookie_secure;

    HttpServer::new(move || {
        App::new()
            .wrap(web::session_middleware(key.clone(), cookie_secure))
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(web::configure)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
