//! Statistics over a user's expenses.

use chrono::Utc;

use crate::{Engine, ResultEngine, Stats, stats};

impl Engine {
    /// Aggregate statistics for `user_id`, with the 7-day window ending on
    /// the current UTC calendar day.
    pub async fn stats(&self, user_id: &str) -> ResultEngine<Stats> {
        let expenses = self.expenses(user_id).await?;
        Ok(stats::aggregate(&expenses, Utc::now().date_naive()))
    }
}
