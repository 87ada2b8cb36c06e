use actix_web::http::StatusCode;
use actix_web::{get, web, HttpRequest, Responder};
use leptos::prelude::*;

use crate::frontend::pages::{HomePage, NotFound};
use crate::frontend::{render_html, shell};
use crate::web::helpers::html;
use crate::web::state::AppState;

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    let body = render_html(state.styles.clone(), || shell(view! { <HomePage/> }));
    html(StatusCode::OK, body)
}

/// Default service: anything no other route matched.
pub async fn not_found(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    log::debug!("No route for {}", req.path());
    let body = render_html(state.styles.clone(), || shell(view! { <NotFound/> }));
    html(StatusCode::NOT_FOUND, body)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
}
