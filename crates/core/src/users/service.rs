//! User service - registration and lookup

use std::sync::Arc;

use agendaia_domain::{AgendaError, NewUser, Result, User};
use tracing::info;

use super::ports::UserRepository;
use crate::id_ports::IdGenerator;

/// Registers users (each with a fresh, empty agenda) and looks them up
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl UserService {
    /// Create a new user service
    pub fn new(repository: Arc<dyn UserRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }

    /// Register a user. E-mail addresses are unique (case-insensitive).
    pub async fn create_user(&self, params: NewUser) -> Result<User> {
        if self.repository.get_by_email(&params.email).await?.is_some() {
            return Err(AgendaError::AlreadyExists(format!(
                "user with email {}",
                params.email.trim()
            )));
        }
        let user = User::create_with_id(self.ids.next_id(), params)?;
        let stored = self.repository.create(user).await?;

        info!(user_id = stored.id(), account_type = %stored.account_type(), "user created");
        Ok(stored)
    }

    pub async fn get_user(&self, id: &str) -> Result<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AgendaError::NotFound(format!("user {id}")))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.get_by_email(email).await
    }
}
