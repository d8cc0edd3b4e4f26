//! Identifier generation

use agendaia_core::IdGenerator;
use uuid::Uuid;

/// Time-ordered UUID v7 identifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}
