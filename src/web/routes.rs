use actix_files::Files;
use actix_web::web::{self, Data};

use crate::web::handlers;
use crate::web::state::AppState;

/// Registers the shared state, every page route, `/static` and the 404
/// fallback. Pass the result to `App::configure`.
pub fn configure(state: Data<AppState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let static_dir = state.static_dir.clone();

        cfg.app_data(state);
        handlers::public::configure(cfg);
        cfg.service(Files::new("/static", static_dir).prefer_utf8(true))
            .default_service(web::to(handlers::public::not_found));
    }
}
