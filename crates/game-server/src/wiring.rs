use api::GameConfig;
use axum::{routing::get, Router};

pub fn build_app(config: GameConfig) -> Router {
    debug_assert!(runtime::module_ready());
    debug_assert!(api::module_ready());
    debug_assert!(ui::module_ready());

    api::app(config).route("/health", get(healthcheck))
}

async fn healthcheck() -> &'static str {
    "ok"
}
