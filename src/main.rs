use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};
use std::sync::Arc;

use meetapp::api::HttpMeetupClient;
use meetapp::config::AppConfig;
use meetapp::handlers;
use meetapp::session;
use meetapp::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let client = HttpMeetupClient::from_config(&config).map_err(|e| {
        log::error!("Failed to set up meetup API client: {e}");
        std::io::Error::other(e)
    })?;

    let state = web::Data::new(AppState::new(Arc::new(client), config.display_settings()));
    let secret_key = session::cookie_key(config.session_key.as_deref());

    log::info!("Meetup API at {}", config.api_url);
    log::info!("Starting server at http://{}", config.bind);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::meetup_handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(config.bind.as_str())?
    .run()
    .await
}
