//! Expense primitives.
//!
//! An `Expense` is a single spending entry owned by one user. Records are
//! created and deleted, never updated: correcting one means delete and
//! recreate.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, ResultEngine, stats};

/// Sentinel category used when the caller supplies none.
pub const DEFAULT_CATEGORY: &str = "other";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    /// Day key derived from `created_at` by [`stats::day_label`]. The same
    /// formatter produces the 7-day bucket keys, so the two can never drift.
    pub date: String,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        user_id: String,
        description: String,
        amount: f64,
        category: Option<String>,
        created_at: DateTime<Utc>,
    ) -> ResultEngine<Self> {
        let description = description.trim().to_string();
        if description.is_empty() {
            return Err(EngineError::InvalidInput(
                "description must not be empty".to_string(),
            ));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(EngineError::InvalidInput(
                "amount must be a positive number".to_string(),
            ));
        }

        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            description,
            amount,
            category,
            date: stats::day_label(created_at.date_naive()),
            created_at,
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Username"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Expense> for ActiveModel {
    fn from(expense: &Expense) -> Self {
        Self {
            id: ActiveValue::Set(expense.id.to_string()),
            user_id: ActiveValue::Set(expense.user_id.clone()),
            description: ActiveValue::Set(expense.description.clone()),
            amount: ActiveValue::Set(expense.amount),
            category: ActiveValue::Set(expense.category.clone()),
            date: ActiveValue::Set(expense.date.clone()),
            created_at: ActiveValue::Set(expense.created_at),
        }
    }
}

impl TryFrom<Model> for Expense {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::KeyNotFound("expense not exists".to_string()))?,
            user_id: model.user_id,
            description: model.description,
            amount: model.amount,
            category: model.category,
            date: model.date,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_description() {
        let err = Expense::new(
            "alice".to_string(),
            "   ".to_string(),
            10.0,
            None,
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn rejects_non_positive_amount() {
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = Expense::new(
                "alice".to_string(),
                "coffee".to_string(),
                amount,
                None,
                Utc::now(),
            )
            .unwrap_err();
            assert!(matches!(err, EngineError::InvalidInput(_)));
        }
    }

    #[test]
    fn blank_category_falls_back_to_sentinel() {
        let expense = Expense::new(
            "alice".to_string(),
            "coffee".to_string(),
            3.5,
            Some("  ".to_string()),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(expense.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn date_matches_creation_day() {
        let created_at = Utc::now();
        let expense = Expense::new(
            "alice".to_string(),
            "coffee".to_string(),
            3.5,
            Some("food".to_string()),
            created_at,
        )
        .unwrap();
        assert_eq!(expense.date, stats::day_label(created_at.date_naive()));
    }
}
