//! Integration tests for `EventService` against mock ports

mod support;

use std::sync::Arc;

use agendaia_core::{EventQuery, EventService};
use agendaia_domain::{AgendaError, EventFilter, EventState, EventUpdate, NewEvent};
use support::repositories::{MockEventRepository, SequentialIds};
use support::{date, event, time};

fn service(repo: &MockEventRepository) -> EventService {
    EventService::new(Arc::new(repo.clone()), Arc::new(SequentialIds::new("evt")))
}

#[tokio::test]
async fn create_event_assigns_id_and_default_duration() {
    let repo = MockEventRepository::new();
    let service = service(&repo).with_default_duration(45);

    let created = service
        .create_event(NewEvent::new("Planning", date(2024, 3, 4), time(10, 0)))
        .await
        .unwrap();

    assert_eq!(created.id(), "evt-1");
    assert_eq!(created.duration_minutes(), 45);
    assert_eq!(repo.stored(), vec![created]);
}

#[tokio::test]
async fn explicit_duration_is_kept() {
    let repo = MockEventRepository::new();
    let created = service(&repo)
        .create_event(NewEvent::new("Workshop", date(2024, 3, 4), time(10, 0)).with_duration(180))
        .await
        .unwrap();

    assert_eq!(created.duration_minutes(), 180);
}

#[tokio::test]
async fn blank_title_is_rejected_before_storing() {
    let repo = MockEventRepository::new();
    let err = service(&repo)
        .create_event(NewEvent::new("   ", date(2024, 3, 4), time(10, 0)))
        .await
        .unwrap_err();

    assert!(matches!(err, AgendaError::InvalidArgument(_)));
    assert!(repo.stored().is_empty());
}

#[tokio::test]
async fn filter_events_combines_query_and_calendar_filter() {
    // 2024-03-04 and 2024-03-11 are Mondays, 2024-03-05 is a Tuesday
    let repo = MockEventRepository::new()
        .with_event(event("a", "Team sync", date(2024, 3, 4), time(9, 0)))
        .with_event(event("b", "Team retro", date(2024, 3, 5), time(9, 0)))
        .with_event(event("c", "Lunch", date(2024, 3, 11), time(13, 0)))
        .with_event(event("d", "Team sync", date(2024, 3, 11), time(9, 0)));
    let service = service(&repo);

    let mondays = service
        .filter_events(&EventQuery::all().matching("team"), &EventFilter::new().weekday(0))
        .await
        .unwrap();

    let ids: Vec<&str> = mondays.iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec!["a", "d"]);
}

#[tokio::test]
async fn invalid_filter_fails_fast() {
    let repo = MockEventRepository::new();
    let err = service(&repo)
        .filter_events(&EventQuery::all(), &EventFilter::new().month(13))
        .await
        .unwrap_err();

    assert!(matches!(err, AgendaError::InvalidArgument(_)));
}

#[tokio::test]
async fn update_and_cancel_are_persisted() {
    let repo =
        MockEventRepository::new().with_event(event("a", "Demo", date(2024, 3, 4), time(9, 0)));
    let service = service(&repo);

    let updated = service.update_event("a", EventUpdate::default().title("Demo day")).await.unwrap();
    assert_eq!(updated.title(), "Demo day");

    let cancelled = service.cancel_event("a").await.unwrap();
    assert_eq!(cancelled.state(), EventState::Cancelled);

    let stored = service.get_event("a").await.unwrap();
    assert_eq!(stored.title(), "Demo day");
    assert!(stored.is_cancelled());

    let active = service.find_events(&EventQuery::all().with_state(EventState::Active)).await;
    assert!(active.unwrap().is_empty());
}

#[tokio::test]
async fn missing_event_is_not_found() {
    let repo = MockEventRepository::new();
    let service = service(&repo);

    assert!(matches!(service.get_event("nope").await, Err(AgendaError::NotFound(_))));
    assert!(matches!(service.cancel_event("nope").await, Err(AgendaError::NotFound(_))));
    assert!(!service.delete_event("nope").await.unwrap());
}
