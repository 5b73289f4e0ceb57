use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, app, run, run_with_listener, spawn_with_listener};

mod auth;
mod expenses;
mod server;
mod statistics;

pub mod types {
    pub mod auth {
        pub use api_types::auth::{
            AuthResponse, LoginRequest, LogoutResponse, MeResponse, RegisterNew,
        };
    }

    pub mod expense {
        pub use api_types::expense::{ExpenseDeleted, ExpenseNew, ExpenseView};
    }

    pub mod stats {
        pub use api_types::stats::StatsResponse;
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        // Duplicate usernames and bad credentials report as 400 alongside
        // plain validation failures, matching what the frontend expects.
        EngineError::InvalidInput(_)
        | EngineError::ExistingKey(_)
        | EngineError::InvalidCredentials(_) => StatusCode::BAD_REQUEST,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
