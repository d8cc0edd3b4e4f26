//! Per-user agendas

pub mod service;

pub use service::AgendaService;
