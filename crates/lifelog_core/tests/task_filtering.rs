use lifelog_core::{
    filter_tasks, task_stats, CompletionFilter, Priority, Task, TaskCategory, TaskQuery,
};

fn task(title: &str, priority: Priority, category: TaskCategory, created_at: &str) -> Task {
    Task {
        id: title.to_string(),
        user_id: "u".to_string(),
        title: title.to_string(),
        description: None,
        completed: false,
        priority,
        category,
        due_date: None,
        created_at: created_at.to_string(),
        updated_at: created_at.to_string(),
    }
}

fn sample_tasks() -> Vec<Task> {
    vec![
        task(
            "file taxes",
            Priority::High,
            TaskCategory::Personal,
            "2024-06-01T08:00:00+00:00",
        ),
        task(
            "review PR",
            Priority::High,
            TaskCategory::Work,
            "2024-06-03T08:00:00+00:00",
        ),
        task(
            "morning run",
            Priority::Medium,
            TaskCategory::Hobbies,
            "2024-06-02T08:00:00+00:00",
        ),
        task(
            "water plants",
            Priority::Low,
            TaskCategory::Personal,
            "2024-06-04T08:00:00+00:00",
        ),
    ]
}

#[test]
fn default_query_returns_all_in_priority_then_recency_order() {
    let sorted = filter_tasks(&sample_tasks(), &TaskQuery::default()).unwrap();
    let titles: Vec<&str> = sorted.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["review PR", "file taxes", "morning run", "water plants"]
    );
}

#[test]
fn default_query_is_idempotent() {
    let once = filter_tasks(&sample_tasks(), &TaskQuery::default()).unwrap();
    let twice = filter_tasks(&once, &TaskQuery::default()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn search_matches_title_and_description_case_insensitively() {
    let mut tasks = sample_tasks();
    tasks[0].description = Some("Submit the Federal forms".to_string());

    let query = TaskQuery {
        search: "FEDERAL".to_string(),
        ..TaskQuery::default()
    };
    let hits = filter_tasks(&tasks, &query).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "file taxes");
}

#[test]
fn facets_compose_as_conjunction() {
    let query = TaskQuery {
        category: Some(TaskCategory::Personal),
        priority: Some(Priority::High),
        ..TaskQuery::default()
    };
    let hits = filter_tasks(&sample_tasks(), &query).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "file taxes");
}

#[test]
fn status_facet_splits_completed_and_pending() {
    let mut tasks = sample_tasks();
    tasks[2].completed = true;

    let completed = filter_tasks(
        &tasks,
        &TaskQuery {
            status: Some(CompletionFilter::Completed),
            ..TaskQuery::default()
        },
    )
    .unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].title, "morning run");

    let pending = filter_tasks(
        &tasks,
        &TaskQuery {
            status: Some(CompletionFilter::Pending),
            ..TaskQuery::default()
        },
    )
    .unwrap();
    assert_eq!(pending.len(), 3);
}

#[test]
fn no_match_yields_empty_not_error() {
    let query = TaskQuery {
        search: "nonexistent".to_string(),
        ..TaskQuery::default()
    };
    assert!(filter_tasks(&sample_tasks(), &query).unwrap().is_empty());
}

#[test]
fn stats_group_pending_work_by_priority() {
    let mut tasks = sample_tasks();
    tasks[0].completed = true;

    let stats = task_stats(&tasks);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.high_pending, 1);
    assert_eq!(stats.medium_pending, 1);
    assert_eq!(stats.low_pending, 1);
}
