use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};

use privacy_banner::frontend::{render_banner, render_page};

fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// Full page, or just the banner when htmx swaps it in.
#[get("/")]
pub async fn index(req: HttpRequest) -> impl Responder {
    if is_htmx(&req) {
        html(render_banner())
    } else {
        html(render_page())
    }
}

#[get("/banner")]
pub async fn banner() -> impl Responder {
    html(render_banner())
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(banner).service(health);
}
