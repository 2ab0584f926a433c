//! Habit completion toggling and streak maintenance.
//!
//! # Responsibility
//! - Apply the mark-done / undo-done toggle for one calendar day and keep
//!   the stored `streak` counter in step.
//!
//! # Invariants
//! - `completed_dates` stays sorted and duplicate-free.
//! - The streak rule is a local increment: it looks at yesterday only,
//!   never at the full run length. Toggling arbitrary past days can
//!   therefore desynchronize `streak` from the longest actual run; that is
//!   a known property of the stored data and must not be "repaired" here.

use crate::model::Habit;
use chrono::{Days, NaiveDate};

/// Day key format used inside `completed_dates`.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Toggles completion of `habit` for `day` and returns the updated record.
///
/// Undoing a completed day decrements the streak (floored at zero). Marking
/// a new day increments the streak when yesterday is already completed or
/// the streak was zero, and resets it to 1 when a gap is detected.
/// `recorded_at` becomes the new `updated_at`; the caller persists the
/// returned record wholesale.
pub fn toggle_completion(habit: &Habit, day: NaiveDate, recorded_at: &str) -> Habit {
    let key = day_key(day);
    let mut updated = habit.clone();

    if habit.completed_dates.iter().any(|date| date == &key) {
        updated.completed_dates.retain(|date| date != &key);
        updated.streak = habit.streak.saturating_sub(1);
    } else {
        updated.completed_dates.push(key);
        updated.completed_dates.sort();
        updated.completed_dates.dedup();

        let yesterday = day_key(day - Days::new(1));
        let continues = habit.completed_dates.iter().any(|date| date == &yesterday);
        updated.streak = if continues || habit.streak == 0 {
            habit.streak + 1
        } else {
            1
        };
    }

    updated.updated_at = recorded_at.to_string();
    updated
}

#[cfg(test)]
mod tests {
    use super::toggle_completion;
    use crate::model::{Frequency, Habit};
    use chrono::NaiveDate;

    fn habit(streak: u32, completed_dates: &[&str]) -> Habit {
        Habit {
            id: "h".to_string(),
            user_id: "u".to_string(),
            name: "stretch".to_string(),
            description: None,
            frequency: Frequency::Daily,
            streak,
            completed_dates: completed_dates.iter().map(|d| d.to_string()).collect(),
            created_at: "2024-01-01".to_string(),
            updated_at: "2024-01-01".to_string(),
        }
    }

    fn day(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn gap_resets_streak_to_one() {
        let updated = toggle_completion(&habit(1, &["2024-01-01"]), day("2024-01-03"), "t");
        assert_eq!(updated.streak, 1);
        assert_eq!(updated.completed_dates, vec!["2024-01-01", "2024-01-03"]);
    }

    #[test]
    fn consecutive_day_extends_streak() {
        let updated = toggle_completion(
            &habit(2, &["2024-01-01", "2024-01-02"]),
            day("2024-01-03"),
            "t",
        );
        assert_eq!(updated.streak, 3);
    }

    #[test]
    fn zero_streak_increments_even_after_gap() {
        let updated = toggle_completion(&habit(0, &["2023-12-01"]), day("2024-01-03"), "t");
        assert_eq!(updated.streak, 1);
    }

    #[test]
    fn undo_removes_day_and_decrements() {
        let updated = toggle_completion(
            &habit(2, &["2024-01-02", "2024-01-03"]),
            day("2024-01-03"),
            "t",
        );
        assert_eq!(updated.streak, 1);
        assert_eq!(updated.completed_dates, vec!["2024-01-02"]);
    }

    #[test]
    fn undo_floors_streak_at_zero() {
        let updated = toggle_completion(&habit(0, &["2024-01-03"]), day("2024-01-03"), "t");
        assert_eq!(updated.streak, 0);
        assert!(updated.completed_dates.is_empty());
    }

    #[test]
    fn toggle_sets_updated_at() {
        let updated = toggle_completion(&habit(0, &[]), day("2024-01-03"), "2024-01-03T09:00:00+00:00");
        assert_eq!(updated.updated_at, "2024-01-03T09:00:00+00:00");
    }
}
