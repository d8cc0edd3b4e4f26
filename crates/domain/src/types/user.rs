//! User types
//!
//! A user exclusively owns one agenda, created together with the user.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Agenda, Event, NewEvent};
use crate::impl_domain_status_conversions;
use crate::{AgendaError, Result};

/// Account tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Standard,
    Premium,
}

impl_domain_status_conversions!(AccountType {
    Standard => "standard",
    Premium => "premium",
});

/// Parameters for registering a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub account_type: AccountType,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), account_type: AccountType::default() }
    }

    pub fn with_account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = account_type;
        self
    }
}

/// Agenda owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: String,
    name: String,
    email: String,
    account_type: AccountType,
    agenda: Agenda,
}

impl User {
    /// Create a user with an empty agenda and a generated UUIDv7 id
    pub fn create(params: NewUser) -> Result<Self> {
        Self::create_with_id(Uuid::now_v7().to_string(), params)
    }

    /// # Errors
    /// Returns `AgendaError::InvalidArgument` for a blank id or name, or an
    /// email without `@`.
    pub fn create_with_id(id: impl Into<String>, params: NewUser) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(AgendaError::InvalidArgument("user id must not be empty".into()));
        }
        if params.name.trim().is_empty() {
            return Err(AgendaError::InvalidArgument("user name must not be empty".into()));
        }
        let email = params.email.trim();
        if !is_plausible_email(email) {
            return Err(AgendaError::InvalidArgument(format!("invalid email address: {email}")));
        }

        Ok(Self {
            id,
            name: params.name,
            email: email.to_string(),
            account_type: params.account_type,
            agenda: Agenda::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    pub fn agenda_mut(&mut self) -> &mut Agenda {
        &mut self.agenda
    }

    /// Build an event and add it to this user's agenda
    pub fn create_event(&mut self, params: NewEvent) -> Result<&Event> {
        let event = Event::create(params)?;
        self.agenda.add_event(event)
    }

    pub fn events(&self) -> &[Event] {
        self.agenda.list_events()
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    #[test]
    fn create_starts_with_empty_agenda() {
        let user = User::create(NewUser::new("Ana", "ana@example.com")).unwrap();

        assert!(user.agenda().is_empty());
        assert_eq!(user.account_type(), AccountType::Standard);
        assert!(!user.id().is_empty());
    }

    #[test]
    fn create_validates_name_and_email() {
        assert!(matches!(
            User::create(NewUser::new("", "ana@example.com")),
            Err(AgendaError::InvalidArgument(_))
        ));
        assert!(matches!(
            User::create(NewUser::new("Ana", "not-an-email")),
            Err(AgendaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn create_event_lands_in_owned_agenda() {
        let mut user = User::create(
            NewUser::new("Luis", "luis@example.com").with_account_type(AccountType::Premium),
        )
        .unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

        let id = user.create_event(NewEvent::new("Kickoff", date, time)).unwrap().id().to_string();

        assert_eq!(user.events().len(), 1);
        assert_eq!(user.events()[0].id(), id);
    }

    #[test]
    fn account_type_round_trips_through_strings() {
        assert_eq!("Premium".parse::<AccountType>().unwrap(), AccountType::Premium);
        assert_eq!(AccountType::Standard.to_string(), "standard");
        assert!("gold".parse::<AccountType>().is_err());
    }
}
