//! Per-user agenda commands

use agendaia_domain::{AgendaStatistics, Event, EventFilter, EventUpdate};
use chrono::NaiveDate;

use super::events::CreateEventRequest;
use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Add an event to a user's agenda and send the scheduled notice
pub async fn add_agenda_event(
    ctx: &AppContext,
    user_id: &str,
    request: CreateEventRequest,
) -> Result<Event, String> {
    execute_logged("agenda::add_event", async move {
        let event = ctx.agendas.create_event(user_id, request.into()).await?;
        let user = ctx.agendas.user(user_id).await?;
        ctx.notifications.notify_event_scheduled(&user, &event).await;
        Ok(event)
    })
    .await
}

pub async fn list_agenda(ctx: &AppContext, user_id: &str) -> Result<Vec<Event>, String> {
    execute_logged("agenda::list_events", ctx.agendas.list_events(user_id)).await
}

pub async fn search_agenda(
    ctx: &AppContext,
    user_id: &str,
    text: &str,
) -> Result<Vec<Event>, String> {
    execute_logged("agenda::search", ctx.agendas.search(user_id, text)).await
}

pub async fn agenda_on_date(
    ctx: &AppContext,
    user_id: &str,
    date: NaiveDate,
) -> Result<Vec<Event>, String> {
    execute_logged("agenda::events_on_date", ctx.agendas.events_on_date(user_id, date)).await
}

pub async fn filter_agenda(
    ctx: &AppContext,
    user_id: &str,
    filter: EventFilter,
) -> Result<Vec<Event>, String> {
    execute_logged("agenda::filter", async move { ctx.agendas.filter(user_id, &filter).await })
        .await
}

pub async fn update_agenda_event(
    ctx: &AppContext,
    user_id: &str,
    event_id: &str,
    changes: EventUpdate,
) -> Result<Event, String> {
    execute_logged("agenda::update_event", ctx.agendas.update_event(user_id, event_id, changes))
        .await
}

/// Cancel an agenda event; the owner is told only when the state changed
pub async fn cancel_agenda_event(
    ctx: &AppContext,
    user_id: &str,
    event_id: &str,
) -> Result<Event, String> {
    execute_logged("agenda::cancel_event", async move {
        let user = ctx.agendas.user(user_id).await?;
        let already_cancelled =
            user.agenda().get_event(event_id).is_some_and(Event::is_cancelled);

        let event = ctx.agendas.cancel_event(user_id, event_id).await?;
        if !already_cancelled {
            ctx.notifications.notify_event_cancelled(&user, &event).await;
        }
        Ok(event)
    })
    .await
}

pub async fn remove_agenda_event(
    ctx: &AppContext,
    user_id: &str,
    event_id: &str,
) -> Result<bool, String> {
    execute_logged("agenda::remove_event", ctx.agendas.remove_event(user_id, event_id)).await
}

pub async fn agenda_statistics(
    ctx: &AppContext,
    user_id: &str,
) -> Result<AgendaStatistics, String> {
    execute_logged("agenda::statistics", ctx.agendas.statistics(user_id)).await
}
