//! Agenda service - per-user agendas behind one lock per owner
//!
//! Mutations of a user's agenda take that user's write lock; reads
//! (`list_events`, `search`, `statistics`, filters) share its read lock, so
//! reads of one agenda run concurrently with each other but never with a
//! mutation. Different users never contend.
//!
//! With a [`UserRepository`] attached, every mutation is written back before
//! it becomes visible, and users missing from the registry are loaded from
//! the repository on first access.

use std::collections::HashMap;
use std::sync::Arc;

use agendaia_domain::constants::DEFAULT_EVENT_DURATION_MINUTES;
use agendaia_domain::{
    insert_all, AgendaError, AgendaStatistics, Event, EventFilter, EventUpdate, InsertReport,
    NewEvent, Result, User,
};
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::id_ports::IdGenerator;
use crate::users::ports::UserRepository;

type SharedUser = Arc<RwLock<User>>;

/// Registry of live users and their agendas
pub struct AgendaService {
    users: RwLock<HashMap<String, SharedUser>>,
    ids: Arc<dyn IdGenerator>,
    repository: Option<Arc<dyn UserRepository>>,
    default_duration_minutes: u32,
}

impl AgendaService {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            ids,
            repository: None,
            default_duration_minutes: DEFAULT_EVENT_DURATION_MINUTES,
        }
    }

    /// Duration given to events created without one
    pub fn with_default_duration(mut self, minutes: u32) -> Self {
        self.default_duration_minutes = minutes;
        self
    }

    /// Persist agendas through `repository`
    pub fn with_repository(mut self, repository: Arc<dyn UserRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Start tracking `user`. A user id can only be registered once.
    pub async fn register(&self, user: User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.contains_key(user.id()) {
            return Err(AgendaError::AlreadyExists(format!("user {}", user.id())));
        }
        self.persist(&user).await?;

        info!(user_id = user.id(), "user registered with agenda service");
        users.insert(user.id().to_string(), Arc::new(RwLock::new(user)));
        Ok(())
    }

    /// Stop tracking a user and hand back its final state. A persisted user
    /// is loaded again on its next access.
    pub async fn unregister(&self, user_id: &str) -> Result<User> {
        let shared = self
            .users
            .write()
            .await
            .remove(user_id)
            .ok_or_else(|| AgendaError::NotFound(format!("user {user_id}")))?;

        let user = shared.read().await.clone();
        info!(user_id, events = user.events().len(), "user unregistered from agenda service");
        Ok(user)
    }

    /// Whether the user is currently held in memory
    pub async fn is_registered(&self, user_id: &str) -> bool {
        self.users.read().await.contains_key(user_id)
    }

    /// Snapshot of a registered user, agenda included
    pub async fn user(&self, user_id: &str) -> Result<User> {
        let shared = self.shared(user_id).await?;
        let user = shared.read().await;
        Ok(user.clone())
    }

    async fn shared(&self, user_id: &str) -> Result<SharedUser> {
        if let Some(shared) = self.users.read().await.get(user_id).cloned() {
            return Ok(shared);
        }

        let not_found = || AgendaError::NotFound(format!("user {user_id}"));
        let Some(repository) = &self.repository else {
            return Err(not_found());
        };
        let stored = repository.get_by_id(user_id).await?.ok_or_else(not_found)?;

        let mut users = self.users.write().await;
        let shared = users
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(RwLock::new(stored)));
        debug!(user_id, "agenda loaded from user repository");
        Ok(Arc::clone(shared))
    }

    async fn persist(&self, user: &User) -> Result<()> {
        match &self.repository {
            Some(repository) => repository.save(user.clone()).await,
            None => Ok(()),
        }
    }

    /// Apply `change` to a copy of the user's state, persist it, then publish
    /// it. On any error the in-memory agenda is left as it was.
    async fn mutate<T, F>(&self, user_id: &str, change: F) -> Result<T>
    where
        T: Send,
        F: FnOnce(&mut User) -> Result<T> + Send,
    {
        let shared = self.shared(user_id).await?;
        let mut user = shared.write().await;

        let mut next = user.clone();
        let outcome = change(&mut next)?;
        self.persist(&next).await?;
        *user = next;
        Ok(outcome)
    }

    /// Append an already-built event to the user's agenda
    pub async fn add_event(&self, user_id: &str, event: Event) -> Result<Event> {
        let added = self
            .mutate(user_id, |user| Ok(user.agenda_mut().add_event(event)?.clone()))
            .await?;

        debug!(user_id, event_id = added.id(), "event added to agenda");
        Ok(added)
    }

    /// Build an event with a generated id and append it to the user's agenda
    pub async fn create_event(&self, user_id: &str, mut params: NewEvent) -> Result<Event> {
        params.duration_minutes.get_or_insert(self.default_duration_minutes);
        let event = Event::create_with_id(self.ids.next_id(), params)?;
        self.add_event(user_id, event).await
    }

    /// Remove an event; `false` when the agenda had no such id
    pub async fn remove_event(&self, user_id: &str, event_id: &str) -> Result<bool> {
        let removed =
            self.mutate(user_id, |user| Ok(user.agenda_mut().remove_event(event_id))).await?;

        debug!(user_id, event_id, removed, "event removal requested");
        Ok(removed)
    }

    pub async fn update_event(
        &self,
        user_id: &str,
        event_id: &str,
        changes: EventUpdate,
    ) -> Result<Event> {
        self.mutate(user_id, |user| Ok(user.agenda_mut().update_event(event_id, changes)?.clone()))
            .await
    }

    pub async fn cancel_event(&self, user_id: &str, event_id: &str) -> Result<Event> {
        self.mutate(user_id, |user| Ok(user.agenda_mut().cancel_event(event_id)?.clone())).await
    }

    /// Add events in order. Duplicated ids come back in the report.
    pub async fn import(&self, user_id: &str, events: Vec<Event>) -> Result<InsertReport> {
        let report =
            self.mutate(user_id, |user| Ok(insert_all(user.agenda_mut(), events))).await?;

        info!(
            user_id,
            inserted = report.inserted,
            rejected = report.rejected.len(),
            "events imported into agenda"
        );
        Ok(report)
    }

    pub async fn list_events(&self, user_id: &str) -> Result<Vec<Event>> {
        let shared = self.shared(user_id).await?;
        let user = shared.read().await;
        Ok(user.events().to_vec())
    }

    /// Case-insensitive substring search over title, description and location
    pub async fn search(&self, user_id: &str, text: &str) -> Result<Vec<Event>> {
        let shared = self.shared(user_id).await?;
        let user = shared.read().await;
        Ok(user.agenda().search(text).into_iter().cloned().collect())
    }

    pub async fn events_on_date(&self, user_id: &str, date: NaiveDate) -> Result<Vec<Event>> {
        let shared = self.shared(user_id).await?;
        let user = shared.read().await;
        Ok(user.agenda().events_on_date(date).into_iter().cloned().collect())
    }

    pub async fn filter(&self, user_id: &str, filter: &EventFilter) -> Result<Vec<Event>> {
        filter.validate()?;
        let shared = self.shared(user_id).await?;
        let user = shared.read().await;
        Ok(filter.apply(user.events())?.into_iter().cloned().collect())
    }

    pub async fn statistics(&self, user_id: &str) -> Result<AgendaStatistics> {
        let shared = self.shared(user_id).await?;
        let user = shared.read().await;
        Ok(user.agenda().statistics())
    }
}
