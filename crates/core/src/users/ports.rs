//! Port interfaces for user management
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for user operations.

use agendaia_domain::{Result, User};
use async_trait::async_trait;

/// Trait for user persistence and retrieval
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user and return the stored record
    async fn create(&self, user: User) -> Result<User>;

    /// Get user by ID
    async fn get_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Get user by email
    async fn get_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Replace the stored user, agenda included; inserts it when absent
    async fn save(&self, user: User) -> Result<()>;
}
