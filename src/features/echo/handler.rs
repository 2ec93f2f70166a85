use axum::Json;
use axum::extract::RawQuery;
use serde_json::{Value, json};

use crate::core::error::AppError;
use crate::features::echo::dto::EchoResponseDto;
use crate::features::echo::parser::parse_query;

pub async fn handle_echo(RawQuery(query): RawQuery) -> Result<Json<EchoResponseDto>, AppError> {
    let raw = query.unwrap_or_default();
    let data = parse_query(&raw).map_err(|err| {
        tracing::warn!(query = %raw, error = %err, "rejected query string");
        AppError::from(err)
    })?;

    tracing::info!(params = data.len(), "echoing query parameters");
    Ok(Json(EchoResponseDto::success(data)))
}

pub async fn handle_healthcheck() -> Result<Json<Value>, AppError> {
    Ok(Json(json!({ "status": "ok" })))
}
