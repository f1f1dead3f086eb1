//! HTTP surface: landing page, metrics and health

pub mod builder;
mod handlers;
pub mod server;
pub mod state;


pub use builder::run_server;
pub use server::HttpServer;
pub use state::AppState;
