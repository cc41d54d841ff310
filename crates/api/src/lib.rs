pub mod routes;
pub mod state;
pub mod ws;

use axum::Router;

pub use state::{AppState, GameConfig};

pub fn module_ready() -> bool {
    true
}

pub fn app(config: GameConfig) -> Router {
    routes::router(AppState::new(config))
}
