use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use medwatch_site::common::{ServerError, SiteConfig};
use medwatch_site::web::routes;
use medwatch_site::web::state::AppState;

#[actix_web::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run().await.inspect_err(|e| log::error!("{e}"))
}

async fn run() -> Result<(), ServerError> {
    let config = SiteConfig::from_env()?;
    log::info!(
        "Serving on http://{} (theme: {}, static: {})",
        config.bind_addr,
        config.theme,
        config.static_dir.display()
    );

    let state = Data::new(AppState::from_config(&config));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(routes::configure(state.clone()))
    })
    .bind(config.bind_addr)?
    .run()
    .await?;

    Ok(())
}
