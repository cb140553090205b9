use crate::app_config::AppConfig;
use crate::serving::app_state::AppState;
use crate::serving::show_register::show_register;
use crate::serving::show_survey::show_survey;
use crate::serving::upstream::HttpUpstream;
use crate::serving::welcome::welcome;
use actix_web::{middleware, web, App, HttpServer};
use std::io;
use std::sync::Arc;

pub(crate) fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(welcome)
        .service(show_register)
        .service(show_survey);
}

pub async fn serve() -> io::Result<()> {
    let config = AppConfig::default();
    let address = format!("{}:{}", config.binding, config.port);
    let upstream = Arc::new(HttpUpstream::new(config.upstream_timeout));

    let state = AppState::new(config, upstream).map_err(|e| {
        error!(target: "surveys", "Unable to start: {}", e);
        io::Error::new(io::ErrorKind::InvalidData, e.to_string())
    })?;
    info!(target: "surveys", "Listening on {}", address);

    HttpServer::new(move || {
        App::new()
            .data(state.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes)
    })
    .bind(address)?
    .run()
    .await
}
