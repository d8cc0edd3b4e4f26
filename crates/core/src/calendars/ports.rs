//! Port interfaces for calendar persistence

use agendaia_domain::{Calendar, Result};
use async_trait::async_trait;

/// Trait for calendar persistence. Calendars are keyed by name.
#[async_trait]
pub trait CalendarRepository: Send + Sync {
    /// Store a new calendar and return the stored record
    async fn create(&self, calendar: Calendar) -> Result<Calendar>;

    /// Get calendar by name
    async fn get_by_name(&self, name: &str) -> Result<Option<Calendar>>;

    /// Replace the stored calendar with the same name
    async fn save(&self, calendar: Calendar) -> Result<()>;
}
