//! Domain logic for the expense tracker.
//!
//! The [`Engine`] owns the database connection and exposes the auth,
//! expense, and statistics operations the HTTP layer calls. Entities live
//! in their own modules; operations are grouped under `ops`.

use sea_orm::DatabaseConnection;

pub use error::EngineError;
pub use expenses::{DEFAULT_CATEGORY, Expense};
pub use ops::SessionOpened;
pub use stats::Stats;

mod error;
pub mod expenses;
mod ops;
pub mod sessions;
pub mod stats;
pub mod users;
mod util;

type ResultEngine<T> = Result<T, EngineError>;

#[derive(Clone, Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`, checking that the database is reachable.
    pub async fn build(self) -> ResultEngine<Engine> {
        self.database.ping().await?;
        Ok(Engine {
            database: self.database,
        })
    }
}
