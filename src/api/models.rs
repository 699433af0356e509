use crate::catalog::CityCatalog;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CityCatalog>,
}

/// Query parameters of `GET /cafe`, kept as raw text until validated
#[derive(Debug, Default)]
pub struct CafeQuery {
    pub city: Option<String>,
    pub count: Option<String>,
    pub search: Option<String>,
}

impl CafeQuery {
    /// Build from decoded query pairs. The first occurrence of a key wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "city" => &mut query.city,
                "count" => &mut query.count,
                "search" => &mut query.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Requested result limit. `None` means no limit.
    pub fn limit(&self) -> Result<Option<usize>, AppError> {
        match self.count.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<usize>()
                .map(Some)
                .map_err(|_| AppError::IncorrectCount),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub total_cities: usize,
    pub total_cafes: usize,
}

/// Application error type, rendered as a plain-text 400
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("unknown city")]
    UnknownCity,
    #[error("incorrect count")]
    IncorrectCount,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
