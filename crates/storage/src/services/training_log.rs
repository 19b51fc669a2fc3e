use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::schedule::{TimelineEntry, WeekResponse, WeekStats};
use crate::error::Result;
use crate::models::{CategoryColor, ScheduledWorkoutDetail};
use crate::repository::schedule::ScheduleRepository;

/// Monday-to-Sunday week containing `day`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Week {
    pub fn containing(day: NaiveDate) -> Self {
        let offset = i64::from(day.weekday().num_days_from_monday());
        let start = day - Duration::days(offset);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..7).map(move |i| self.start + Duration::days(i))
    }

    pub fn iso_week_number(&self) -> u32 {
        self.start.iso_week().week()
    }
}

pub fn summarize(workouts: &[ScheduledWorkoutDetail]) -> WeekStats {
    let completed = workouts.iter().filter(|w| w.completed).count() as i64;
    let total_time: i64 = workouts
        .iter()
        .filter_map(|w| w.trained_time)
        .map(i64::from)
        .sum();
    let total_distance: Decimal = workouts.iter().filter_map(|w| w.distance).sum();

    WeekStats {
        completed,
        total_time,
        total_distance,
    }
}

pub async fn get_week(pool: &PgPool, user_id: Uuid, day: NaiveDate) -> Result<WeekResponse> {
    let week = Week::containing(day);
    let repo = ScheduleRepository::new(pool);
    let workouts = repo.list_between(user_id, week.start, week.end).await?;
    let stats = summarize(&workouts);

    Ok(WeekResponse {
        week_number: week.iso_week_number(),
        week_start: week.start,
        week_end: week.end,
        stats,
        workouts: workouts.into_iter().map(Into::into).collect(),
    })
}

/// Completed workouts of a calendar year, one entry per workout
pub async fn get_year_timeline(pool: &PgPool, user_id: Uuid, year: i32) -> Result<Vec<TimelineEntry>> {
    let (Some(start), Some(end)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return Ok(Vec::new());
    };

    let repo = ScheduleRepository::new(pool);
    let completed = repo.list_completed_between(user_id, start, end).await?;

    Ok(completed
        .into_iter()
        .map(|(scheduled_date, category)| TimelineEntry {
            scheduled_date,
            category,
            color: CategoryColor::from(category).hex().to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutCategory;
    use rust_decimal::Decimal;

    fn detail(completed: bool, trained_time: Option<i32>, distance: Option<Decimal>) -> ScheduledWorkoutDetail {
        ScheduledWorkoutDetail {
            id: Uuid::new_v4(),
            workout_id: Uuid::new_v4(),
            scheduled_date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
            completed,
            trained_time,
            distance,
            pace: None,
            notes: None,
            joy_rating: None,
            workout_name: "5x1000m".to_string(),
            category: WorkoutCategory::Interval,
            duration: Some(45),
            effort: Some(8),
            description: None,
        }
    }

    #[test]
    fn test_week_starts_on_monday() {
        // 2025-03-12 is a Wednesday
        let week = Week::containing(NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
        assert_eq!(week.start, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(week.end, NaiveDate::from_ymd_opt(2025, 3, 16).unwrap());
        assert_eq!(week.days().count(), 7);
    }

    #[test]
    fn test_week_of_a_sunday_and_a_monday() {
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
        assert_eq!(Week::containing(sunday).start, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());

        let monday = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(Week::containing(monday).start, monday);
    }

    #[test]
    fn test_week_across_year_boundary() {
        let week = Week::containing(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(week.start, NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
        assert_eq!(week.iso_week_number(), 1);
    }

    #[test]
    fn test_summary_counts_completed_and_sums_actuals() {
        let workouts = vec![
            detail(true, Some(45), Some(Decimal::new(105, 1))),
            detail(true, Some(30), None),
            detail(false, None, None),
        ];

        let stats = summarize(&workouts);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.total_time, 75);
        assert_eq!(stats.total_distance, Decimal::new(105, 1));
    }

    #[test]
    fn test_summary_of_empty_week() {
        let stats = summarize(&[]);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.total_time, 0);
        assert_eq!(stats.total_distance, Decimal::ZERO);
    }
}
