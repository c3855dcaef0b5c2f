use actix_web::{middleware, web, App, HttpServer};
use std::io;

use crate::handlers;
use crate::state::WebState;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/check", web::post().to(handlers::check));
}

pub async fn run_server(state: WebState, host: &str, port: u16) -> io::Result<()> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(app_config)
    })
    .bind((host, port))?;

    log::info!("Symptom checker listening on http://{}:{}", host, port);
    server.run().await
}
