//! Registration, login, and session lifecycle.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveValue, ConnectionTrait, TransactionTrait, prelude::*};

use crate::{
    Engine, EngineError, ResultEngine,
    sessions::{self, SESSION_TTL_DAYS},
    users, util,
};

use super::with_tx;

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 4;

/// A freshly opened session, returned by register and login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOpened {
    pub token: String,
    /// The user's display name.
    pub name: String,
}

impl Engine {
    /// Create a new user and open a session for it.
    ///
    /// The user row and its first session are written in one transaction,
    /// so a duplicate username leaves no partial record behind.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> ResultEngine<SessionOpened> {
        let username = username.trim();
        let name = name.trim();
        if username.is_empty() || password.is_empty() || name.is_empty() {
            return Err(EngineError::InvalidInput(
                "username, password and name are required".to_string(),
            ));
        }
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(EngineError::InvalidInput(format!(
                "username must be at least {MIN_USERNAME_LEN} characters"
            )));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(EngineError::InvalidInput(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        with_tx!(self, |tx| {
            match users::Entity::find_by_id(username).one(&tx).await? {
                Some(_) => Err(EngineError::ExistingKey(username.to_string())),
                None => {
                    let now = Utc::now();
                    users::ActiveModel {
                        username: ActiveValue::Set(username.to_string()),
                        password_hash: ActiveValue::Set(util::hash_password(password)),
                        name: ActiveValue::Set(name.to_string()),
                        created_at: ActiveValue::Set(now),
                    }
                    .insert(&tx)
                    .await?;

                    let token = Self::open_session(&tx, username, now).await?;
                    Ok(SessionOpened {
                        token,
                        name: name.to_string(),
                    })
                }
            }
        })
    }

    /// Check credentials and open a session.
    ///
    /// Unknown usernames and wrong passwords fail differently: the former
    /// is a [`EngineError::KeyNotFound`], the latter
    /// [`EngineError::InvalidCredentials`].
    pub async fn login(&self, username: &str, password: &str) -> ResultEngine<SessionOpened> {
        let username = username.trim();
        let user = users::Entity::find_by_id(username)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(username.to_string()))?;

        if !util::verify_password(password, &user.password_hash) {
            return Err(EngineError::InvalidCredentials(
                "wrong password".to_string(),
            ));
        }

        let token = Self::open_session(&self.database, username, Utc::now()).await?;
        Ok(SessionOpened {
            token,
            name: user.name,
        })
    }

    /// Invalidate a session. Idempotent: an unknown token is still success.
    pub async fn logout(&self, token: &str) -> ResultEngine<()> {
        sessions::Entity::delete_by_id(token)
            .exec(&self.database)
            .await?;
        Ok(())
    }

    /// Resolve a session token to its user.
    ///
    /// Expired sessions are removed on read. Absent, invalid, and expired
    /// tokens all resolve to `None` rather than an error.
    pub async fn session_user(&self, token: &str) -> ResultEngine<Option<users::Model>> {
        let Some(session) = sessions::Entity::find_by_id(token).one(&self.database).await? else {
            return Ok(None);
        };

        if session.expires_at <= Utc::now() {
            sessions::Entity::delete_by_id(token)
                .exec(&self.database)
                .await?;
            return Ok(None);
        }

        Ok(users::Entity::find_by_id(&session.username)
            .one(&self.database)
            .await?)
    }

    async fn open_session<C: ConnectionTrait>(
        db: &C,
        username: &str,
        now: DateTime<Utc>,
    ) -> ResultEngine<String> {
        let token = util::new_token();
        sessions::ActiveModel {
            token: ActiveValue::Set(token.clone()),
            username: ActiveValue::Set(username.to_string()),
            created_at: ActiveValue::Set(now),
            expires_at: ActiveValue::Set(now + Duration::days(SESSION_TTL_DAYS)),
        }
        .insert(db)
        .await?;
        Ok(token)
    }
}
