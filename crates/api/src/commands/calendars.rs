//! Calendar commands

use agendaia_domain::{Calendar, Event};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

pub async fn create_calendar(ctx: &AppContext, name: &str) -> Result<Calendar, String> {
    execute_logged("calendars::create_calendar", ctx.calendars.create_calendar(name)).await
}

/// Place a catalogue event in a calendar; `false` when it conflicts
pub async fn add_event_to_calendar(
    ctx: &AppContext,
    calendar_name: &str,
    event_id: &str,
) -> Result<bool, String> {
    execute_logged("calendars::add_event", async move {
        let event = ctx.events.get_event(event_id).await?;
        ctx.calendars.add_event(calendar_name, event).await
    })
    .await
}

pub async fn list_calendar_events(
    ctx: &AppContext,
    calendar_name: &str,
) -> Result<Vec<Event>, String> {
    execute_logged("calendars::list_events", async move {
        let calendar = ctx.calendars.get_calendar(calendar_name).await?;
        Ok(calendar.list_events().to_vec())
    })
    .await
}
