//! Calendar service - persisted, conflict-checked calendars
//!
//! Every read-check-save cycle on a calendar runs under that calendar's
//! mutex, so concurrent inserts never overwrite each other and two
//! conflicting events cannot both be admitted.

use std::collections::HashMap;
use std::sync::Arc;

use agendaia_domain::{insert_all, AgendaError, Calendar, Event, InsertReport, Result};
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::ports::CalendarRepository;

/// Creates calendars and admits events into them under the conflict rule
pub struct CalendarService {
    repository: Arc<dyn CalendarRepository>,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl CalendarService {
    /// Create a new calendar service
    pub fn new(repository: Arc<dyn CalendarRepository>) -> Self {
        Self { repository, locks: Mutex::new(HashMap::new()) }
    }

    async fn lock_for(&self, name: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        Arc::clone(locks.entry(name.to_string()).or_default())
    }

    /// Create an empty calendar. Names are unique.
    pub async fn create_calendar(&self, name: &str) -> Result<Calendar> {
        let lock = self.lock_for(name).await;
        let _guard = lock.lock().await;

        if self.repository.get_by_name(name).await?.is_some() {
            return Err(AgendaError::AlreadyExists(format!("calendar {name}")));
        }
        let calendar = self.repository.create(Calendar::new(name)?).await?;

        info!(calendar = calendar.name(), "calendar created");
        Ok(calendar)
    }

    pub async fn get_calendar(&self, name: &str) -> Result<Calendar> {
        self.repository
            .get_by_name(name)
            .await?
            .ok_or_else(|| AgendaError::NotFound(format!("calendar {name}")))
    }

    /// Add `event` to the named calendar.
    ///
    /// Returns `Ok(false)` when the event conflicts with an existing one; the
    /// stored calendar is then left untouched.
    pub async fn add_event(&self, calendar_name: &str, event: Event) -> Result<bool> {
        let lock = self.lock_for(calendar_name).await;
        let _guard = lock.lock().await;

        let mut calendar = self.get_calendar(calendar_name).await?;

        let blockers: Vec<String> =
            calendar.conflicts_for(&event).iter().map(|e| e.id().to_string()).collect();
        let event_id = event.id().to_string();

        if !calendar.add_event(event) {
            warn!(
                calendar = calendar_name,
                event_id = %event_id,
                conflicts = ?blockers,
                "event rejected by calendar"
            );
            return Ok(false);
        }
        self.repository.save(calendar).await?;

        info!(calendar = calendar_name, event_id = %event_id, "event added to calendar");
        Ok(true)
    }

    /// Add events in order; the ones that conflict are reported back
    pub async fn import_events(
        &self,
        calendar_name: &str,
        events: Vec<Event>,
    ) -> Result<InsertReport> {
        let lock = self.lock_for(calendar_name).await;
        let _guard = lock.lock().await;

        let mut calendar = self.get_calendar(calendar_name).await?;
        let report = insert_all(&mut calendar, events);
        if report.inserted > 0 {
            self.repository.save(calendar).await?;
        }

        info!(
            calendar = calendar_name,
            inserted = report.inserted,
            rejected = report.rejected.len(),
            "events imported into calendar"
        );
        Ok(report)
    }
}
