use chrono::{Local, NaiveDate, TimeZone};
use lifelog_core::{
    completion_percent, filter_goals, goal_stats, DeadlineWindow, Goal, GoalDraft, GoalQuery,
    GoalService, GoalStatusFilter, MemoryDocumentStore, SessionContext,
};

fn goal(title: &str, current: f64, target: f64, deadline: Option<&str>) -> Goal {
    Goal {
        id: title.to_string(),
        user_id: "u".to_string(),
        title: title.to_string(),
        description: None,
        target_value: target,
        current_value: current,
        unit: "units".to_string(),
        category: "learning".to_string(),
        deadline: deadline.map(str::to_string),
        completed: false,
        created_at: "2024-06-01".to_string(),
        updated_at: "2024-06-01".to_string(),
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 6).unwrap()
}

fn ctx() -> SessionContext {
    let now = Local.with_ymd_and_hms(2024, 6, 6, 9, 0, 0).unwrap();
    SessionContext::at("u", now)
}

#[test]
fn ordering_puts_incomplete_first_then_highest_progress() {
    let mut done = goal("done", 10.0, 10.0, None);
    done.completed = true;
    let goals = vec![
        done,
        goal("barely", 1.0, 10.0, None),
        goal("almost", 9.0, 10.0, None),
    ];

    let sorted = filter_goals(&goals, &GoalQuery::default(), today()).unwrap();
    let titles: Vec<&str> = sorted.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["almost", "barely", "done"]);
}

#[test]
fn default_query_is_idempotent() {
    let mut done = goal("done", 10.0, 10.0, None);
    done.completed = true;
    let goals = vec![
        done,
        goal("barely", 1.0, 10.0, Some("2024-06-20")),
        goal("almost", 9.0, 10.0, None),
    ];

    let once = filter_goals(&goals, &GoalQuery::default(), today()).unwrap();
    let twice = filter_goals(&once, &GoalQuery::default(), today()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn status_facet_distinguishes_not_started_from_in_progress() {
    let goals = vec![goal("untouched", 0.0, 10.0, None), goal("going", 3.0, 10.0, None)];

    let not_started = filter_goals(
        &goals,
        &GoalQuery {
            status: Some(GoalStatusFilter::NotStarted),
            ..GoalQuery::default()
        },
        today(),
    )
    .unwrap();
    assert_eq!(not_started.len(), 1);
    assert_eq!(not_started[0].title, "untouched");

    let in_progress = filter_goals(
        &goals,
        &GoalQuery {
            status: Some(GoalStatusFilter::InProgress),
            ..GoalQuery::default()
        },
        today(),
    )
    .unwrap();
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].title, "going");
}

#[test]
fn deadline_buckets_overlap_for_near_deadlines() {
    // Due in 3 days: inside both the week and month windows.
    let goals = vec![goal("soon", 0.0, 10.0, Some("2024-06-09"))];

    for window in [DeadlineWindow::ThisWeek, DeadlineWindow::ThisMonth] {
        let hits = filter_goals(
            &goals,
            &GoalQuery {
                deadline: Some(window),
                ..GoalQuery::default()
            },
            today(),
        )
        .unwrap();
        assert_eq!(hits.len(), 1, "expected a hit for {window:?}");
    }

    let future = filter_goals(
        &goals,
        &GoalQuery {
            deadline: Some(DeadlineWindow::Future),
            ..GoalQuery::default()
        },
        today(),
    )
    .unwrap();
    assert!(future.is_empty());
}

#[test]
fn overdue_bucket_excludes_completed_goals() {
    let mut finished_late = goal("finished", 10.0, 10.0, Some("2024-06-01"));
    finished_late.completed = true;
    let goals = vec![finished_late, goal("late", 2.0, 10.0, Some("2024-06-01"))];

    let overdue = filter_goals(
        &goals,
        &GoalQuery {
            deadline: Some(DeadlineWindow::Overdue),
            ..GoalQuery::default()
        },
        today(),
    )
    .unwrap();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].title, "late");
}

#[test]
fn no_deadline_bucket_selects_goals_without_one() {
    let goals = vec![
        goal("dated", 0.0, 10.0, Some("2024-07-01")),
        goal("open-ended", 0.0, 10.0, None),
    ];
    let hits = filter_goals(
        &goals,
        &GoalQuery {
            deadline: Some(DeadlineWindow::NoDeadline),
            ..GoalQuery::default()
        },
        today(),
    )
    .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "open-ended");
}

#[test]
fn progress_update_clamps_stored_value_but_completes_on_raw_reading() {
    let store = MemoryDocumentStore::new();
    let service = GoalService::new(&store);
    let ctx = ctx();

    let created = service
        .create(
            &ctx,
            GoalDraft {
                title: "read pages".to_string(),
                description: None,
                target_value: 100.0,
                unit: "pages".to_string(),
                category: "learning".to_string(),
                deadline: None,
            },
        )
        .unwrap();
    assert_eq!(created.current_value, 0.0);
    assert!(!created.completed);

    let over = service.update_progress(&ctx, &created, 150.0);
    assert_eq!(over.current_value, 100.0);
    assert!(over.completed);

    let under = service.update_progress(&ctx, &over, -5.0);
    assert_eq!(under.current_value, 0.0);
    assert!(!under.completed);
}

#[test]
fn direct_edit_past_the_target_is_not_reclamped() {
    let store = MemoryDocumentStore::new();
    let service = GoalService::new(&store);
    let ctx = ctx();

    let mut edited = goal("overfilled", 0.0, 100.0, None);
    edited.current_value = 150.0;
    let saved = service.save(&ctx, &edited).unwrap();
    assert_eq!(saved.current_value, 150.0);
    assert!(!saved.completed);
    assert_eq!(completion_percent(&saved), 150.0);

    // The next progress update applies the clamp again.
    let updated = service.update_progress(&ctx, &saved, 120.0);
    assert_eq!(updated.current_value, 100.0);
    assert!(updated.completed);
}

#[test]
fn progress_update_with_negative_target_does_not_panic() {
    let store = MemoryDocumentStore::new();
    let service = GoalService::new(&store);
    let ctx = ctx();

    let broken = goal("broken", 0.0, -10.0, None);
    let updated = service.update_progress(&ctx, &broken, 5.0);
    assert_eq!(updated.current_value, 0.0);
    assert!(updated.completed);
    assert_eq!(completion_percent(&updated), 0.0);
}

#[test]
fn stats_mean_progress_is_uncapped_per_goal() {
    let goals = vec![goal("half", 5.0, 10.0, None), goal("over", 15.0, 10.0, None)];
    let stats = goal_stats(&goals, today()).unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.in_progress, 2);
    assert_eq!(stats.mean_progress, 100.0);
}

#[test]
fn stats_count_overdue_only_when_incomplete() {
    let mut done = goal("done", 10.0, 10.0, Some("2024-06-01"));
    done.completed = true;
    let goals = vec![done, goal("late", 1.0, 10.0, Some("2024-06-01"))];
    let stats = goal_stats(&goals, today()).unwrap();
    assert_eq!(stats.overdue, 1);
    assert_eq!(stats.completed, 1);
}
