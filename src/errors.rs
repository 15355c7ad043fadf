use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

/// Error returned by request handlers; rendered into a response in one place.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("user {0} not found")]
    UserNotFound(i32),
    #[error("invalid user id: {0}")]
    InvalidUserId(String),
    #[error("no route for {0}")]
    RouteNotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UserNotFound(_) | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidUserId(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Database(e) => {
                error!(error = %e, "data access failed");
                "internal server error".to_string()
            }
            AppError::UserNotFound(id) => {
                warn!(user_id = id, "user not found");
                self.to_string()
            }
            AppError::InvalidUserId(_) | AppError::RouteNotFound(_) => self.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_message() {
        let err = AppError::UserNotFound(7);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "user 7 not found");
    }

    #[test]
    fn bad_input_and_unknown_routes_map_to_client_errors() {
        assert_eq!(
            AppError::InvalidUserId("abc".into()).status(),
            StatusCode::BAD_REQUEST
        );
        let err = AppError::RouteNotFound("/nope".into());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "no route for /nope");
    }

    #[test]
    fn database_errors_map_to_500() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let res = err.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
