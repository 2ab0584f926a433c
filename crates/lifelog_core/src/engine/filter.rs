//! Multi-criteria filtering and entity-specific ordering.
//!
//! # Responsibility
//! - Turn a record list plus filter criteria into the ordered view a
//!   screen displays, without touching the source list.
//!
//! # Invariants
//! - An all-defaults query is the identity filter: it returns the whole
//!   input in the entity's defined sort order, idempotently.
//! - Free-text search is a case-insensitive substring match; any listed
//!   text field matching admits the record.
//! - Facets are exact matches; `None` means "all".

use crate::engine::{calendar_day, completion_percent, instant, EngineResult};
use crate::model::{Event, Goal, JournalEntry, Mood, Priority, Task, TaskCategory};
use chrono::{DateTime, Days, FixedOffset, NaiveDate};
use std::cmp::Reverse;

/// How many events the dashboard's upcoming list shows.
pub const UPCOMING_EVENTS_LIMIT: usize = 3;

/// Completed/pending facet shared by task-like filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionFilter {
    Completed,
    Pending,
}

/// Task list criteria. Default is the identity filter.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub search: String,
    pub category: Option<TaskCategory>,
    pub priority: Option<Priority>,
    pub status: Option<CompletionFilter>,
}

/// Goal status facet beyond plain completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatusFilter {
    Completed,
    InProgress,
    NotStarted,
}

/// Deadline bucket facet, evaluated against "today" at day granularity.
/// Buckets are independent: a single query selects exactly one, and a goal
/// due in three days matches `ThisWeek` and `ThisMonth` alike when queried
/// separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineWindow {
    Overdue,
    ThisWeek,
    ThisMonth,
    Future,
    NoDeadline,
}

/// Goal list criteria. Default is the identity filter.
#[derive(Debug, Clone, Default)]
pub struct GoalQuery {
    pub search: String,
    /// Exact category label; categories are free-form for goals.
    pub category: Option<String>,
    pub status: Option<GoalStatusFilter>,
    pub deadline: Option<DeadlineWindow>,
}

/// Journal list criteria. Default is the identity filter.
#[derive(Debug, Clone, Default)]
pub struct JournalQuery {
    pub search: String,
    /// Matches entries whose `date` starts with this prefix (e.g. a
    /// `YYYY-MM` month or `YYYY-MM-DD` day). Empty means "all".
    pub date_prefix: String,
    pub mood: Option<Mood>,
    /// Case-insensitive substring matched against each tag. Empty means
    /// "all".
    pub tag: String,
}

fn matches_search(search: &str, fields: &[Option<&str>]) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filters and orders tasks: priority descending, then `created_at`
/// descending within the same priority.
pub fn filter_tasks(tasks: &[Task], query: &TaskQuery) -> EngineResult<Vec<Task>> {
    let mut keyed: Vec<(Task, DateTime<FixedOffset>)> = Vec::new();
    for task in tasks {
        if !matches_search(
            &query.search,
            &[Some(task.title.as_str()), task.description.as_deref()],
        ) {
            continue;
        }
        if query.category.is_some_and(|category| task.category != category) {
            continue;
        }
        if query.priority.is_some_and(|priority| task.priority != priority) {
            continue;
        }
        match query.status {
            Some(CompletionFilter::Completed) if !task.completed => continue,
            Some(CompletionFilter::Pending) if task.completed => continue,
            _ => {}
        }
        let created = instant("createdAt", &task.created_at)?;
        keyed.push((task.clone(), created));
    }

    keyed.sort_by_key(|(task, created)| (Reverse(task.priority.weight()), Reverse(*created)));
    Ok(keyed.into_iter().map(|(task, _)| task).collect())
}

fn deadline_bucket_matches(
    goal: &Goal,
    window: DeadlineWindow,
    today: NaiveDate,
) -> EngineResult<bool> {
    let Some(deadline) = goal.deadline.as_deref() else {
        return Ok(window == DeadlineWindow::NoDeadline);
    };
    let day = calendar_day("deadline", deadline)?;
    let week_end = today + Days::new(7);
    let month_end = today + Days::new(30);

    Ok(match window {
        DeadlineWindow::Overdue => day < today && !goal.completed,
        DeadlineWindow::ThisWeek => day >= today && day <= week_end,
        DeadlineWindow::ThisMonth => day >= today && day <= month_end,
        DeadlineWindow::Future => day > month_end,
        DeadlineWindow::NoDeadline => false,
    })
}

/// Filters and orders goals: incomplete before completed, then completion
/// percentage descending within each group.
pub fn filter_goals(goals: &[Goal], query: &GoalQuery, today: NaiveDate) -> EngineResult<Vec<Goal>> {
    let mut filtered: Vec<Goal> = Vec::new();
    for goal in goals {
        if !matches_search(
            &query.search,
            &[
                Some(goal.title.as_str()),
                goal.description.as_deref(),
                Some(goal.category.as_str()),
            ],
        ) {
            continue;
        }
        if query
            .category
            .as_deref()
            .is_some_and(|category| goal.category != category)
        {
            continue;
        }
        let status_ok = match query.status {
            None => true,
            Some(GoalStatusFilter::Completed) => goal.completed,
            Some(GoalStatusFilter::InProgress) => !goal.completed && goal.current_value > 0.0,
            Some(GoalStatusFilter::NotStarted) => !goal.completed && goal.current_value == 0.0,
        };
        if !status_ok {
            continue;
        }
        if let Some(window) = query.deadline {
            if !deadline_bucket_matches(goal, window, today)? {
                continue;
            }
        }
        filtered.push(goal.clone());
    }

    filtered.sort_by(|a, b| {
        a.completed.cmp(&b.completed).then_with(|| {
            completion_percent(b)
                .total_cmp(&completion_percent(a))
        })
    });
    Ok(filtered)
}

/// Filters and orders journal entries by `date` descending.
pub fn filter_journal(
    entries: &[JournalEntry],
    query: &JournalQuery,
) -> EngineResult<Vec<JournalEntry>> {
    let tag_needle = query.tag.to_lowercase();
    let mut keyed: Vec<(JournalEntry, DateTime<FixedOffset>)> = Vec::new();
    for entry in entries {
        let tag_search_hit = !query.search.is_empty()
            && entry
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query.search.to_lowercase()));
        if !matches_search(
            &query.search,
            &[Some(entry.title.as_str()), Some(entry.content.as_str())],
        ) && !tag_search_hit
        {
            continue;
        }
        if !query.date_prefix.is_empty() && !entry.date.starts_with(&query.date_prefix) {
            continue;
        }
        if query.mood.is_some_and(|mood| entry.mood != Some(mood)) {
            continue;
        }
        if !tag_needle.is_empty()
            && !entry
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&tag_needle))
        {
            continue;
        }
        let date = instant("date", &entry.date)?;
        keyed.push((entry.clone(), date));
    }

    keyed.sort_by_key(|(_, date)| Reverse(*date));
    Ok(keyed.into_iter().map(|(entry, _)| entry).collect())
}

/// Derives the dashboard's upcoming-events list: events still running or
/// ahead (`end_date` day >= today), soonest start first, capped to
/// [`UPCOMING_EVENTS_LIMIT`].
pub fn upcoming_events(events: &[Event], today: NaiveDate) -> EngineResult<Vec<Event>> {
    let mut keyed: Vec<(Event, DateTime<FixedOffset>)> = Vec::new();
    for event in events {
        if calendar_day("endDate", &event.end_date)? < today {
            continue;
        }
        let start = instant("startDate", &event.start_date)?;
        keyed.push((event.clone(), start));
    }

    keyed.sort_by_key(|(_, start)| *start);
    Ok(keyed
        .into_iter()
        .take(UPCOMING_EVENTS_LIMIT)
        .map(|(event, _)| event)
        .collect())
}
