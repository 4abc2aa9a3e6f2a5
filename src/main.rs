mod web;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

use privacy_banner::common::GeneralError;
use privacy_banner::config::ServerConfig;
use privacy_banner::content::{self, PRIVACY_FEATURES};

#[actix_web::main]
async fn main() -> Result<(), GeneralError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    if let Err(e) = content::validate(PRIVACY_FEATURES) {
        tracing::error!(%e, "privacy feature list is malformed");
        return Err(e.into());
    }

    let serve_static = config.static_dir.is_dir();
    if !serve_static {
        tracing::warn!(dir = %config.static_dir.display(), "static directory not found, /static is disabled");
    }

    tracing::info!(
        addr = %config.bind_addr,
        features = PRIVACY_FEATURES.len(),
        "serving privacy banner"
    );

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::default())
            .configure(web::routes::configure);

        if serve_static {
            app.service(Files::new("/static", static_dir.clone()).prefer_utf8(true))
        } else {
            app
        }
    })
    .bind(config.bind_addr)?
    .run()
    .await?;

    Ok(())
}
