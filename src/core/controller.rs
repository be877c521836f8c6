use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use sqlx::SqlitePool;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: Configuration, pool: SqlitePool) -> AppState {
        AppState {
            config,
            pool,
        }
    }
}

#[derive(Debug)]
pub struct ServerError {
    pub status: StatusCode,
    pub errors: Vec<String>,
}

impl ServerError {
    pub fn new(status: StatusCode, message: String) -> Self {
        Self { status, errors: vec![message] }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "errors": self.errors }))).into_response()
    }
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    ServerError::new(StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Database { message, .. } => {
                ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            CommandError::DuplicateKey { message } => {
                ServerError::new(StatusCode::CONFLICT, message)
            }
            CommandError::NotFound { message } => {
                ServerError::new(StatusCode::NOT_FOUND, message)
            }
            CommandError::Runtime { message, .. } => {
                ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            CommandError::Validation { messages } => {
                ServerError { status: StatusCode::BAD_REQUEST, errors: messages }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_not_found_to_404() {
        let err = ServerError::from(CommandError::NotFound { message: "test".to_string() });
        assert_eq!(StatusCode::NOT_FOUND, err.status);
    }

    #[tokio::test]
    async fn test_should_map_duplicate_key_to_409() {
        let err = ServerError::from(CommandError::DuplicateKey { message: "test".to_string() });
        assert_eq!(StatusCode::CONFLICT, err.status);
    }

    #[tokio::test]
    async fn test_should_map_validation_to_400_with_messages() {
        let err = ServerError::from(CommandError::Validation {
            messages: vec!["isbn is required".to_string(), "pages must be of type integer".to_string()],
        });
        assert_eq!(StatusCode::BAD_REQUEST, err.status);
        assert_eq!(2, err.errors.len());
    }

    #[tokio::test]
    async fn test_should_map_database_to_500() {
        let err = ServerError::from(CommandError::Database { message: "test".to_string(), reason_code: None, retryable: false });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, err.status);
    }
}
