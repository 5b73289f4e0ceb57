//! Expense API endpoints.

use api_types::expense::{ExpenseDeleted, ExpenseNew, ExpenseView};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};
use engine::users;

fn view(expense: engine::Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        description: expense.description,
        amount: expense.amount,
        category: expense.category,
        date: expense.date,
        created_at: expense.created_at,
    }
}

pub async fn list(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let expenses = state.engine.expenses(&user.username).await?;
    Ok(Json(expenses.into_iter().map(view).collect()))
}

pub async fn create(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<Json<ExpenseView>, ServerError> {
    let expense = state
        .engine
        .add_expense(
            &user.username,
            &payload.description,
            payload.amount,
            payload.category.as_deref(),
        )
        .await?;

    Ok(Json(view(expense)))
}

/// Delete one of the caller's expenses.
///
/// Ids that are malformed, unknown, or owned by someone else all report
/// success, so the endpoint never confirms whether a record exists.
pub async fn remove(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ExpenseDeleted>, ServerError> {
    if let Ok(expense_id) = Uuid::parse_str(&id) {
        state
            .engine
            .remove_expense(&user.username, expense_id)
            .await?;
    }

    Ok(Json(ExpenseDeleted { success: true }))
}
