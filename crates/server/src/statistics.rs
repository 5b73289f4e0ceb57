//! Statistics API endpoints.

use api_types::stats::StatsResponse;
use axum::{Extension, Json, extract::State};

use crate::{ServerError, server::ServerState};
use engine::users;

/// Handle requests for user statistics.
pub async fn get_stats(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
) -> Result<Json<StatsResponse>, ServerError> {
    let stats = state.engine.stats(&user.username).await?;

    Ok(Json(StatsResponse {
        total: stats.total,
        count: stats.count,
        by_category: stats.by_category,
        last7_days: stats.last7_days,
        by_month: stats.by_month,
    }))
}
