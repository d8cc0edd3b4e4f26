//! Mock repository implementations for testing
//!
//! In-memory mocks for the core repository ports and a deterministic id
//! generator, enabling service tests without a real store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use agendaia_core::{CalendarRepository, EventQuery, EventRepository, IdGenerator, UserRepository};
use agendaia_domain::{AgendaError, Calendar, Event, Result as DomainResult, User};
use async_trait::async_trait;

/// In-memory mock for `EventRepository`.
#[derive(Default, Clone)]
pub struct MockEventRepository {
    events: Arc<Mutex<Vec<Event>>>,
}

impl MockEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the mock with an already-built event
    pub fn with_event(self, event: Event) -> Self {
        self.events.lock().unwrap().push(event);
        self
    }

    pub fn stored(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventRepository for MockEventRepository {
    async fn create(&self, event: Event) -> DomainResult<Event> {
        let mut events = self.events.lock().unwrap();
        if events.iter().any(|e| e.id() == event.id()) {
            return Err(AgendaError::AlreadyExists(format!("event {}", event.id())));
        }
        events.push(event.clone());
        Ok(event)
    }

    async fn find(&self, query: &EventQuery) -> DomainResult<Vec<Event>> {
        Ok(self.events.lock().unwrap().iter().filter(|e| query.matches(e)).cloned().collect())
    }

    async fn get(&self, id: &str) -> DomainResult<Option<Event>> {
        Ok(self.events.lock().unwrap().iter().find(|e| e.id() == id).cloned())
    }

    async fn update(&self, event: Event) -> DomainResult<()> {
        let mut events = self.events.lock().unwrap();
        match events.iter_mut().find(|e| e.id() == event.id()) {
            Some(slot) => {
                *slot = event;
                Ok(())
            }
            None => Err(AgendaError::NotFound(format!("event {}", event.id()))),
        }
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.id() != id);
        Ok(events.len() != before)
    }
}

/// In-memory mock for `UserRepository`.
#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: User) -> Self {
        self.users.lock().unwrap().push(user);
        self
    }

    pub fn stored(&self, id: &str) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| u.id() == id).cloned()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: User) -> DomainResult<User> {
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id() == id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let email = email.trim();
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email().eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn save(&self, user: User) -> DomainResult<()> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id() == user.id()) {
            Some(slot) => *slot = user,
            None => users.push(user),
        }
        Ok(())
    }
}

/// In-memory mock for `CalendarRepository`.
#[derive(Default, Clone)]
pub struct MockCalendarRepository {
    calendars: Arc<Mutex<Vec<Calendar>>>,
}

impl MockCalendarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self, name: &str) -> Option<Calendar> {
        self.calendars.lock().unwrap().iter().find(|c| c.name() == name).cloned()
    }
}

#[async_trait]
impl CalendarRepository for MockCalendarRepository {
    async fn create(&self, calendar: Calendar) -> DomainResult<Calendar> {
        self.calendars.lock().unwrap().push(calendar.clone());
        Ok(calendar)
    }

    async fn get_by_name(&self, name: &str) -> DomainResult<Option<Calendar>> {
        let found = self.stored(name);
        // Let other tasks interleave between the read and a later save
        tokio::task::yield_now().await;
        Ok(found)
    }

    async fn save(&self, calendar: Calendar) -> DomainResult<()> {
        let mut calendars = self.calendars.lock().unwrap();
        match calendars.iter_mut().find(|c| c.name() == calendar.name()) {
            Some(slot) => *slot = calendar,
            None => calendars.push(calendar),
        }
        Ok(())
    }
}

/// Hands out `{prefix}-1`, `{prefix}-2`, ...
pub struct SequentialIds {
    prefix: &'static str,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: AtomicU64::new(1) }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        format!("{}-{}", self.prefix, self.next.fetch_add(1, Ordering::SeqCst))
    }
}
