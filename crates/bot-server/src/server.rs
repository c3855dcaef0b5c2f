use actix_web::{middleware, web, App, HttpServer};
use std::io;

use crate::handlers;
use crate::state::AppState;

/// Routes of the chat UI. Shared with the integration tests.
pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::page::index)).service(
        web::scope("/api")
            .route("/chat", web::post().to(handlers::chat::send))
            .route("/retry", web::post().to(handlers::chat::retry))
            .route("/undo", web::post().to(handlers::chat::undo))
            .route("/examples", web::get().to(handlers::page::examples))
            .route("/health", web::get().to(handlers::page::health)),
    );
}

pub struct ServerOptions {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

pub async fn run_server(state: AppState, options: ServerOptions) -> io::Result<()> {
    let state = web::Data::new(state);
    let url = format!("http://{}:{}", options.host, options.port);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(app_config)
    })
    .bind((options.host.as_str(), options.port))?;

    log::info!("Web chatbot ready, interface available at {}", url);
    log::info!("Press Ctrl+C to stop");

    if options.open_browser {
        if let Err(error) = webbrowser::open(&url) {
            log::warn!("Could not open a browser at {}: {}", url, error);
        }
    }

    server.run().await
}
