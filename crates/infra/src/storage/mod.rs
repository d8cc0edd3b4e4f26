//! Storage implementations

pub mod calendar_repository;
pub mod event_repository;
pub mod memory_store;
pub mod user_repository;

pub use calendar_repository::InMemoryCalendarRepository;
pub use event_repository::InMemoryEventRepository;
pub use memory_store::MemoryStore;
pub use user_repository::InMemoryUserRepository;
