//! Aggregate statistics for dashboard and stat cards.
//!
//! # Responsibility
//! - Compute the summary counters each view shows, from scratch on every
//!   call; nothing here is cached.
//!
//! # Invariants
//! - Empty inputs yield zeroed stats (mean progress 0, longest streak 0,
//!   dominant mood neutral), never division errors.
//! - Dominant-mood ties break toward the mood encountered first in entry
//!   order, making the result deterministic for a given list.

use crate::engine::streak::day_key;
use crate::engine::{calendar_day, completion_percent, EngineResult};
use crate::model::{Event, Goal, Habit, JournalEntry, Mood, MoodEntry, Task};
use chrono::{Datelike, Days, NaiveDate};

/// Fallback chart score for days without a mood entry.
const NEUTRAL_SCORE: u8 = 3;

/// Task counters: completion plus open work grouped by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub high_pending: usize,
    pub medium_pending: usize,
    pub low_pending: usize,
}

pub fn task_stats(tasks: &[Task]) -> TaskStats {
    let mut stats = TaskStats {
        total: tasks.len(),
        ..TaskStats::default()
    };
    for task in tasks {
        if task.completed {
            stats.completed += 1;
            continue;
        }
        match task.priority {
            crate::model::Priority::High => stats.high_pending += 1,
            crate::model::Priority::Medium => stats.medium_pending += 1,
            crate::model::Priority::Low => stats.low_pending += 1,
        }
    }
    stats
}

/// Goal counters and mean completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GoalStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub overdue: usize,
    /// Mean of per-goal completion percentages; 0 when there are no goals.
    pub mean_progress: f64,
}

pub fn goal_stats(goals: &[Goal], today: NaiveDate) -> EngineResult<GoalStats> {
    let mut stats = GoalStats {
        total: goals.len(),
        ..GoalStats::default()
    };
    let mut progress_sum = 0.0;
    for goal in goals {
        if goal.completed {
            stats.completed += 1;
        } else if goal.current_value > 0.0 {
            stats.in_progress += 1;
        }
        if !goal.completed {
            if let Some(deadline) = goal.deadline.as_deref() {
                if calendar_day("deadline", deadline)? < today {
                    stats.overdue += 1;
                }
            }
        }
        progress_sum += completion_percent(goal);
    }
    if !goals.is_empty() {
        stats.mean_progress = progress_sum / goals.len() as f64;
    }
    Ok(stats)
}

/// Habit counters derived from stored streaks and completion days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HabitStats {
    pub total: usize,
    pub active_streaks: usize,
    pub completed_today: usize,
    pub longest_streak: u32,
}

pub fn habit_stats(habits: &[Habit], today: NaiveDate) -> HabitStats {
    let today_key = day_key(today);
    let mut stats = HabitStats {
        total: habits.len(),
        ..HabitStats::default()
    };
    for habit in habits {
        if habit.streak > 0 {
            stats.active_streaks += 1;
        }
        if habit.completed_dates.iter().any(|date| date == &today_key) {
            stats.completed_today += 1;
        }
        stats.longest_streak = stats.longest_streak.max(habit.streak);
    }
    stats
}

/// Mood counters over a user's full entry history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodStats {
    pub total: usize,
    /// Entries whose day falls in the inclusive window `[today-7, today]`.
    pub last_seven_days: usize,
    pub dominant: Mood,
}

pub fn mood_stats(entries: &[MoodEntry], today: NaiveDate) -> EngineResult<MoodStats> {
    let window_start = today - Days::new(7);
    let mut last_seven_days = 0;
    // First-seen order decides ties, so counts live in an insertion-ordered
    // list rather than a map.
    let mut counts: Vec<(Mood, usize)> = Vec::new();

    for entry in entries {
        let day = calendar_day("date", &entry.date)?;
        if day >= window_start && day <= today {
            last_seven_days += 1;
        }
        match counts.iter_mut().find(|(mood, _)| *mood == entry.mood) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.mood, 1)),
        }
    }

    let mut dominant = Mood::Neutral;
    let mut best = 0;
    for (mood, count) in counts {
        if count > best {
            dominant = mood;
            best = count;
        }
    }

    Ok(MoodStats {
        total: entries.len(),
        last_seven_days,
        dominant,
    })
}

/// Chart scores for the trailing seven calendar days, oldest to newest and
/// ending today. Days without an entry read as neutral (3).
pub fn weekly_mood_trend(entries: &[MoodEntry], today: NaiveDate) -> EngineResult<[u8; 7]> {
    let mut days: Vec<(NaiveDate, Mood)> = Vec::with_capacity(entries.len());
    for entry in entries {
        days.push((calendar_day("date", &entry.date)?, entry.mood));
    }

    let mut trend = [NEUTRAL_SCORE; 7];
    for (slot, offset) in (0..7).rev().enumerate() {
        let day = today - Days::new(offset);
        if let Some((_, mood)) = days.iter().find(|(entry_day, _)| *entry_day == day) {
            trend[slot] = mood.score();
        }
    }
    Ok(trend)
}

/// Cross-entity overview shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub tasks_completed: usize,
    pub tasks_total: usize,
    /// Events starting within the inclusive window `[today, today+7]`.
    pub upcoming_events: usize,
    /// Journal entries dated in the current Sunday-start calendar week.
    pub journal_entries_this_week: usize,
    pub mean_goal_progress: f64,
    pub longest_habit_streak: u32,
    pub weekly_mood: [u8; 7],
}

pub fn dashboard_summary(
    tasks: &[Task],
    events: &[Event],
    journal: &[JournalEntry],
    goals: &[Goal],
    habits: &[Habit],
    moods: &[MoodEntry],
    today: NaiveDate,
) -> EngineResult<DashboardSummary> {
    let tasks_completed = tasks.iter().filter(|task| task.completed).count();

    let horizon = today + Days::new(7);
    let mut upcoming = 0;
    for event in events {
        let start = calendar_day("startDate", &event.start_date)?;
        if start >= today && start <= horizon {
            upcoming += 1;
        }
    }

    let week_start = today - Days::new(u64::from(today.weekday().num_days_from_sunday()));
    let week_end = week_start + Days::new(6);
    let mut journal_entries_this_week = 0;
    for entry in journal {
        let day = calendar_day("date", &entry.date)?;
        if day >= week_start && day <= week_end {
            journal_entries_this_week += 1;
        }
    }

    Ok(DashboardSummary {
        tasks_completed,
        tasks_total: tasks.len(),
        upcoming_events: upcoming,
        journal_entries_this_week,
        mean_goal_progress: goal_stats(goals, today)?.mean_progress,
        longest_habit_streak: habit_stats(habits, today).longest_streak,
        weekly_mood: weekly_mood_trend(moods, today)?,
    })
}
