pub mod meetup_handlers;

use actix_web::HttpResponse;

/// Default 404 page for unknown routes.
pub async fn not_found() -> HttpResponse {
    let html = include_str!("../../templates/errors/404.html");
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
