//! CRUD over a user's expense collection.

use chrono::Utc;
use sea_orm::{QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{Engine, Expense, ResultEngine, expenses};

impl Engine {
    /// Validate and persist a new expense for `user_id`.
    pub async fn add_expense(
        &self,
        user_id: &str,
        description: &str,
        amount: f64,
        category: Option<&str>,
    ) -> ResultEngine<Expense> {
        let expense = Expense::new(
            user_id.to_string(),
            description.to_string(),
            amount,
            category.map(str::to_string),
            Utc::now(),
        )?;

        expenses::ActiveModel::from(&expense)
            .insert(&self.database)
            .await?;
        Ok(expense)
    }

    /// All expenses owned by `user_id`, newest first.
    pub async fn expenses(&self, user_id: &str) -> ResultEngine<Vec<Expense>> {
        let models = expenses::Entity::find()
            .filter(expenses::Column::UserId.eq(user_id))
            .order_by_desc(expenses::Column::CreatedAt)
            .all(&self.database)
            .await?;

        models.into_iter().map(Expense::try_from).collect()
    }

    /// Delete an expense, but only when `user_id` owns it.
    ///
    /// Missing and foreign-owned ids are a silent no-op, so a caller can
    /// never probe for another user's record ids.
    pub async fn remove_expense(&self, user_id: &str, expense_id: Uuid) -> ResultEngine<()> {
        expenses::Entity::delete_many()
            .filter(expenses::Column::Id.eq(expense_id.to_string()))
            .filter(expenses::Column::UserId.eq(user_id))
            .exec(&self.database)
            .await?;
        Ok(())
    }
}
