//! Integration tests for `UserService` and `CalendarService`

mod support;

use std::sync::Arc;

use agendaia_core::{CalendarService, UserService};
use agendaia_domain::{AccountType, AgendaError, NewUser};
use support::repositories::{MockCalendarRepository, MockUserRepository, SequentialIds};
use support::{date, event, time};
use tokio::task::JoinSet;

#[tokio::test]
async fn users_get_generated_ids_and_empty_agendas() {
    let service = UserService::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(SequentialIds::new("usr")),
    );

    let user = service
        .create_user(NewUser::new("Ana", "ana@example.com").with_account_type(AccountType::Premium))
        .await
        .unwrap();

    assert_eq!(user.id(), "usr-1");
    assert!(user.agenda().is_empty());
    assert_eq!(service.get_user("usr-1").await.unwrap(), user);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let existing = support::user("usr-0", "Ana", "ana@example.com");
    let service = UserService::new(
        Arc::new(MockUserRepository::new().with_user(existing)),
        Arc::new(SequentialIds::new("usr")),
    );

    let err = service.create_user(NewUser::new("Other Ana", "ANA@example.com")).await.unwrap_err();
    assert!(matches!(err, AgendaError::AlreadyExists(_)));
}

#[tokio::test]
async fn malformed_email_is_invalid() {
    let service = UserService::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(SequentialIds::new("usr")),
    );

    let err = service.create_user(NewUser::new("Ana", "not-an-email")).await.unwrap_err();
    assert!(matches!(err, AgendaError::InvalidArgument(_)));
}

#[tokio::test]
async fn calendar_rejects_overlap_and_keeps_store_untouched() {
    let repo = MockCalendarRepository::new();
    let service = CalendarService::new(Arc::new(repo.clone()));
    service.create_calendar("Work").await.unwrap();

    let day = date(2024, 3, 4);
    assert!(service.add_event("Work", event("a", "Standup", day, time(9, 0))).await.unwrap());
    assert!(!service.add_event("Work", event("b", "Review", day, time(9, 30))).await.unwrap());
    assert!(service.add_event("Work", event("c", "Lunch", day, time(10, 0))).await.unwrap());

    let stored = repo.stored("Work").unwrap();
    let ids: Vec<&str> = stored.list_events().iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[tokio::test]
async fn import_reports_rejected_events() {
    let service = CalendarService::new(Arc::new(MockCalendarRepository::new()));
    service.create_calendar("Home").await.unwrap();

    let day = date(2024, 6, 1);
    let report = service
        .import_events(
            "Home",
            vec![
                event("a", "Gym", day, time(8, 0)),
                event("b", "Breakfast", day, time(8, 30)),
                event("c", "Market", day, time(11, 0)),
            ],
        )
        .await
        .unwrap();

    assert_eq!(report.inserted, 2);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].id(), "b");
    assert_eq!(service.get_calendar("Home").await.unwrap().list_events().len(), 2);
}

#[tokio::test]
async fn calendar_names_are_unique_and_required() {
    let service = CalendarService::new(Arc::new(MockCalendarRepository::new()));
    service.create_calendar("Work").await.unwrap();

    assert!(matches!(service.create_calendar("Work").await, Err(AgendaError::AlreadyExists(_))));
    assert!(matches!(service.create_calendar("  ").await, Err(AgendaError::InvalidArgument(_))));
    assert!(matches!(
        service.add_event("Missing", event("x", "X", date(2024, 1, 1), time(9, 0))).await,
        Err(AgendaError::NotFound(_))
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_inserts_into_one_calendar_are_all_kept() {
    let repo = MockCalendarRepository::new();
    let service = Arc::new(CalendarService::new(Arc::new(repo.clone())));
    service.create_calendar("Work").await.unwrap();

    let day = date(2024, 3, 4);
    let mut tasks = JoinSet::new();
    for hour in 8..16u32 {
        let calendar = Arc::clone(&service);
        tasks.spawn(async move {
            let id = format!("slot-{hour}");
            calendar.add_event("Work", event(&id, "Slot", day, time(hour, 0))).await
        });
    }

    let mut accepted = 0;
    while let Some(joined) = tasks.join_next().await {
        if joined.unwrap().unwrap() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 8);
    assert_eq!(repo.stored("Work").unwrap().list_events().len(), 8);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_conflicting_inserts_admit_exactly_one() {
    let repo = MockCalendarRepository::new();
    let service = Arc::new(CalendarService::new(Arc::new(repo.clone())));
    service.create_calendar("Work").await.unwrap();

    let day = date(2024, 3, 4);
    let mut tasks = JoinSet::new();
    for i in 0..8u32 {
        let calendar = Arc::clone(&service);
        tasks.spawn(async move {
            let id = format!("clash-{i}");
            calendar.add_event("Work", event(&id, "Clash", day, time(9, 0))).await
        });
    }

    let mut accepted = 0;
    while let Some(joined) = tasks.join_next().await {
        if joined.unwrap().unwrap() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 1);
    assert_eq!(repo.stored("Work").unwrap().list_events().len(), 1);
}
