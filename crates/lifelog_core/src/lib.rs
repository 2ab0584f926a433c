//! Core domain logic for Lifelog.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod engine;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod service;
pub mod session;

pub use config::{Config, ConfigError};
pub use engine::filter::{
    filter_goals, filter_journal, filter_tasks, upcoming_events, CompletionFilter, DeadlineWindow,
    GoalQuery, GoalStatusFilter, JournalQuery, TaskQuery,
};
pub use engine::stats::{
    dashboard_summary, goal_stats, habit_stats, mood_stats, task_stats, weekly_mood_trend,
    DashboardSummary, GoalStats, HabitStats, MoodStats, TaskStats,
};
pub use engine::streak::toggle_completion;
pub use engine::{completion_percent, EngineError, EngineResult};
pub use gateway::{DocumentStore, HttpDocumentStore, MemoryDocumentStore};
pub use logging::{init_logging, logging_status};
pub use model::{
    Event, Frequency, Goal, Habit, JournalEntry, Mood, MoodEntry, Priority, Task, TaskCategory,
    User,
};
pub use service::{
    EventDraft, EventService, GoalDraft, GoalService, HabitDraft, HabitService, JournalDraft,
    JournalService, MoodService, ServiceError, TaskDraft, TaskService,
};
pub use session::{AuthError, AuthService, SessionContext, GUEST_USER_ID};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
