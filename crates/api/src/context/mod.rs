//! Application context - dependency injection container

use std::path::Path;
use std::sync::Arc;

use agendaia_core::{AgendaService, CalendarService, EventService, NotificationService, UserService};
use agendaia_domain::{Config, Result};
use agendaia_infra::{
    config, init_logging, InMemoryCalendarRepository, InMemoryEventRepository,
    InMemoryUserRepository, LogNotifier, MemoryStore, UuidIdGenerator,
};
use tracing::{info, warn};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub store: Arc<MemoryStore>,

    // Core services
    pub events: Arc<EventService>,
    pub users: Arc<UserService>,
    pub calendars: Arc<CalendarService>,
    pub agendas: Arc<AgendaService>,
    pub notifications: Arc<NotificationService>,
}

impl AppContext {
    /// Wire every service against a fresh store
    pub fn new(config: Config) -> Self {
        let store = Arc::new(MemoryStore::new(config.storage.database_name.clone()));
        Self::with_store(config, store)
    }

    /// Wire every service against an existing store, e.g. one restored from
    /// a snapshot
    pub fn with_store(config: Config, store: Arc<MemoryStore>) -> Self {
        let ids = Arc::new(UuidIdGenerator::new());
        let duration = config.scheduling.default_event_duration_minutes;

        let events = EventService::new(
            Arc::new(InMemoryEventRepository::new(Arc::clone(&store))),
            ids.clone(),
        )
        .with_default_duration(duration);
        let user_repository = Arc::new(InMemoryUserRepository::new(Arc::clone(&store)));
        let users = UserService::new(user_repository.clone(), ids.clone());
        let calendars =
            CalendarService::new(Arc::new(InMemoryCalendarRepository::new(Arc::clone(&store))));
        let agendas = AgendaService::new(ids)
            .with_default_duration(duration)
            .with_repository(user_repository);
        let notifications = NotificationService::new(Arc::new(LogNotifier::new()))
            .with_enabled(config.notifications.enabled)
            .with_default_method(config.notifications.default_method);

        info!(
            database = store.database_name(),
            backend = %config.storage.backend,
            default_event_duration_minutes = duration,
            "application context ready"
        );

        Self {
            config,
            store,
            events: Arc::new(events),
            users: Arc::new(users),
            calendars: Arc::new(calendars),
            agendas: Arc::new(agendas),
            notifications: Arc::new(notifications),
        }
    }

    /// Read `.env`, load configuration, install logging and wire services
    ///
    /// # Errors
    /// Returns `AgendaError::Config` when no usable configuration is found.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(agendaia_domain::AgendaError::Config(format!(
                    "Failed to read .env file: {e}"
                )));
            }
        }

        let config = config::load()?;
        Self::install_logging(&config);
        Ok(Self::new(config))
    }

    /// Same as [`AppContext::from_env`] but with an explicit config file
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let config = config::load_from_file(Some(path.to_path_buf()))?;
        Self::install_logging(&config);
        Ok(Self::new(config))
    }

    fn install_logging(config: &Config) {
        // A subscriber installed by the host process wins
        if let Err(e) = init_logging(&config.logging) {
            warn!(error = %e, "logging not initialised");
        }
    }

    /// Persist the whole store to `path`
    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        self.store.save_snapshot(path)
    }
}
