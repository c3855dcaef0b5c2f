pub mod handlers;
pub mod server;
pub mod state;

pub use server::{app_config, run_server, ServerOptions};
pub use state::AppState;
