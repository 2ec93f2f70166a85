use axum::Router;
use axum::routing::get;

use crate::features::echo::{handle_echo, handle_healthcheck};

pub const ECHO_PATH: &str = "/api/v1/";
pub const HEALTH_PATH: &str = "/api/health";

pub fn build_router() -> Router {
    Router::new()
        .route(HEALTH_PATH, get(handle_healthcheck))
        .route(ECHO_PATH, get(handle_echo))
}
