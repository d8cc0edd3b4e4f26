//! User repository backed by the in-memory document store

use std::sync::Arc;

use agendaia_core::users::ports::UserRepository as UserRepositoryPort;
use agendaia_domain::constants::USERS_COLLECTION;
use agendaia_domain::{Result as DomainResult, User};
use async_trait::async_trait;

use super::memory_store::MemoryStore;

/// Document-store implementation of `UserRepository`
pub struct InMemoryUserRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryUserRepository {
    /// Create a new repository instance
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepositoryPort for InMemoryUserRepository {
    async fn create(&self, user: User) -> DomainResult<User> {
        self.store.insert(USERS_COLLECTION, user.id(), &user)?;
        tracing::debug!(user_id = user.id(), "user document inserted");
        Ok(user)
    }

    async fn get_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        self.store.get(USERS_COLLECTION, id)
    }

    async fn get_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let email = email.trim();
        let mut matches =
            self.store.find(USERS_COLLECTION, |user: &User| user.email().eq_ignore_ascii_case(email))?;
        Ok(if matches.is_empty() { None } else { Some(matches.swap_remove(0)) })
    }

    async fn save(&self, user: User) -> DomainResult<()> {
        if !self.store.replace(USERS_COLLECTION, user.id(), &user)? {
            self.store.insert(USERS_COLLECTION, user.id(), &user)?;
        }
        tracing::debug!(user_id = user.id(), events = user.events().len(), "user document saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use agendaia_domain::NewUser;

    use super::*;

    #[tokio::test]
    async fn test_lookup_by_id_and_email() {
        let repo = InMemoryUserRepository::new(Arc::new(MemoryStore::new("test")));
        let ana = User::create_with_id("u-1", NewUser::new("Ana", "ana@example.com")).unwrap();
        repo.create(ana.clone()).await.unwrap();

        assert_eq!(repo.get_by_id("u-1").await.unwrap(), Some(ana.clone()));
        assert_eq!(repo.get_by_email(" ANA@example.com ").await.unwrap(), Some(ana));
        assert_eq!(repo.get_by_email("luis@example.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_keeps_the_agenda() {
        let repo = InMemoryUserRepository::new(Arc::new(MemoryStore::new("test")));
        let mut ana = User::create_with_id("u-1", NewUser::new("Ana", "ana@example.com")).unwrap();
        repo.create(ana.clone()).await.unwrap();

        ana.create_event(agendaia_domain::NewEvent::new(
            "Standup",
            chrono::NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        ))
        .unwrap();
        repo.save(ana.clone()).await.unwrap();

        let stored = repo.get_by_id("u-1").await.unwrap().unwrap();
        assert_eq!(stored.events().len(), 1);
        assert_eq!(stored, ana);
    }
}
