//! Event catalogue commands (persisted events)

use agendaia_core::EventQuery;
use agendaia_domain::{Event, EventFilter, EventUpdate, NewEvent};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Payload for creating an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

impl From<CreateEventRequest> for NewEvent {
    fn from(request: CreateEventRequest) -> Self {
        let mut params = NewEvent::new(request.title, request.date, request.time);
        if let Some(description) = request.description {
            params = params.with_description(description);
        }
        if let Some(location) = request.location {
            params = params.with_location(location);
        }
        if let Some(minutes) = request.duration_minutes {
            params = params.with_duration(minutes);
        }
        params
    }
}

pub async fn create_event(ctx: &AppContext, request: CreateEventRequest) -> Result<Event, String> {
    execute_logged("events::create_event", ctx.events.create_event(request.into())).await
}

pub async fn get_event(ctx: &AppContext, id: &str) -> Result<Event, String> {
    execute_logged("events::get_event", ctx.events.get_event(id)).await
}

/// Events matching the optional date and free-text criteria
pub async fn find_events(
    ctx: &AppContext,
    date: Option<NaiveDate>,
    text: Option<String>,
) -> Result<Vec<Event>, String> {
    let query = EventQuery { date, text, state: None };
    execute_logged("events::find_events", async move { ctx.events.find_events(&query).await })
        .await
}

pub async fn filter_events(ctx: &AppContext, filter: EventFilter) -> Result<Vec<Event>, String> {
    execute_logged("events::filter_events", async move {
        ctx.events.filter_events(&EventQuery::all(), &filter).await
    })
    .await
}

pub async fn update_event(
    ctx: &AppContext,
    id: &str,
    changes: EventUpdate,
) -> Result<Event, String> {
    execute_logged("events::update_event", ctx.events.update_event(id, changes)).await
}

pub async fn cancel_event(ctx: &AppContext, id: &str) -> Result<Event, String> {
    execute_logged("events::cancel_event", ctx.events.cancel_event(id)).await
}

pub async fn delete_event(ctx: &AppContext, id: &str) -> Result<bool, String> {
    execute_logged("events::delete_event", ctx.events.delete_event(id)).await
}
