//! Request and response bodies shared between the server and its clients.
//!
//! All bodies are JSON with camelCase field names, matching what the web
//! frontend sends and expects.

use serde::{Deserialize, Serialize};

pub mod auth {
    use super::*;

    /// Missing fields deserialize as empty strings so the engine's
    /// validation reports them as a 400 rather than a body rejection.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct RegisterNew {
        pub username: String,
        pub password: String,
        pub name: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct LoginRequest {
        pub username: String,
        pub password: String,
    }

    /// Returned by both `/api/register` and `/api/login`.
    ///
    /// The session token rides in the body; subsequent requests send it as
    /// `Authorization: Bearer <token>`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct AuthResponse {
        pub success: bool,
        pub name: String,
        pub token: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LogoutResponse {
        pub success: bool,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MeResponse {
        pub logged_in: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
    }
}

pub mod expense {
    use super::*;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    /// Missing fields deserialize to values the engine rejects, so a
    /// missing description or amount reports as a plain validation failure
    /// instead of a body rejection.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ExpenseNew {
        pub description: String,
        pub amount: f64,
        /// Defaults to `"other"` when absent or blank.
        pub category: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseView {
        pub id: Uuid,
        pub description: String,
        pub amount: f64,
        pub category: String,
        /// Day key in `%Y-%m-%d` form, derived from `created_at`.
        pub date: String,
        pub created_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseDeleted {
        pub success: bool,
    }
}

pub mod stats {
    use super::*;
    use std::collections::BTreeMap;

    /// Aggregate view over one user's expenses.
    ///
    /// `last7_days` always carries exactly seven day keys, zero-filled, so
    /// chart rendering gets a fixed-width window.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct StatsResponse {
        pub total: f64,
        pub count: usize,
        pub by_category: BTreeMap<String, f64>,
        pub last7_days: BTreeMap<String, f64>,
        pub by_month: BTreeMap<String, f64>,
    }
}
