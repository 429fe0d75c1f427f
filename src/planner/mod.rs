pub mod allocator;
pub mod ledger;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Serialize, Deserialize};
use crate::config::planner::PlannerConfig;
use crate::curriculum::{active_curriculum, Category, LessonTemplate};
use crate::profile::LearnerProfile;
use self::allocator::{DailyAllocator, DayAllocation};
use self::ledger::ReviewLesson;

pub const FREE_PRACTICE_TITLE: &str = "Pratique Libre / Improvisation";
pub const FREE_PRACTICE_DESCRIPTION: &str = "Appliquez les concepts appris sur un backing track.";

/// What a task asks the learner to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskKind {
    #[default]
    Lesson,
    Review,
    FreePractice,
}

/// One scheduled practice item. Completion is tracked outside, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: Category,
    /// Allotted time, may be less than the lesson's nominal duration.
    pub duration_minutes: u32,
    pub is_review: bool,
    #[serde(default)]
    pub kind: TaskKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_lesson_id: Option<String>,
}

impl Task {
    pub(crate) fn lesson(day_index: u32, cursor: usize, template: &LessonTemplate, minutes: u32) -> Self {
        Task {
            id: format!("lesson-{}-{}", day_index, cursor),
            title: template.title.to_string(),
            description: template.description.to_string(),
            category: template.category,
            duration_minutes: minutes,
            is_review: false,
            kind: TaskKind::Lesson,
            original_lesson_id: None,
        }
    }

    pub(crate) fn review(day_index: u32, lesson: &ReviewLesson, minutes: u32) -> Self {
        let compact: String = lesson.title.chars().filter(|c| !c.is_whitespace()).collect();
        Task {
            id: format!("review-{}-{}", day_index, compact),
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            category: lesson.category,
            duration_minutes: minutes,
            is_review: true,
            kind: TaskKind::Review,
            original_lesson_id: Some(lesson.lesson_id.clone()),
        }
    }

    pub(crate) fn free_practice(day_index: u32, minutes: u32) -> Self {
        Task {
            id: format!("free-{}", day_index),
            title: FREE_PRACTICE_TITLE.to_string(),
            description: FREE_PRACTICE_DESCRIPTION.to_string(),
            category: Category::Improvisation,
            duration_minutes: minutes,
            is_review: false,
            kind: TaskKind::FreePractice,
            original_lesson_id: None,
        }
    }

    /// Open-ended practice added once the curriculum is used up.
    pub fn is_free_practice(&self) -> bool {
        self.kind == TaskKind::FreePractice
    }

    /// First exposure to a curriculum lesson.
    pub fn is_new_lesson(&self) -> bool {
        self.kind == TaskKind::Lesson
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub date: NaiveDate,
    /// 1-based position in the plan.
    pub day_index: u32,
    pub tasks: Vec<Task>,
    pub is_rest_day: bool,
    pub week_number: u32,
}

impl DayPlan {
    pub fn total_minutes(&self) -> u32 {
        self.tasks.iter().map(|t| t.duration_minutes).sum()
    }
}

/// The whole plan, one entry per day of the horizon.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    pub days: Vec<DayPlan>,
}

impl Schedule {
    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Day by 1-based index.
    pub fn day(&self, day_index: u32) -> Option<&DayPlan> {
        let pos = usize::try_from(day_index).ok()?.checked_sub(1)?;
        self.days.get(pos)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayPlan> {
        self.days.iter()
    }

    /// Every task with the day it is scheduled on.
    pub fn tasks(&self) -> impl Iterator<Item = (&DayPlan, &Task)> {
        self.days.iter().flat_map(|d| d.tasks.iter().map(move |t| (d, t)))
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks().map(|(_, t)| t).find(|t| t.id == id)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a DayPlan;
    type IntoIter = std::slice::Iter<'a, DayPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// Generate the plan with the canonical planner settings.
pub fn generate(catalog: &[LessonTemplate], profile: &LearnerProfile) -> Schedule {
    generate_with_config(catalog, profile, &PlannerConfig::default())
}

/// Generate the plan. Pure: the same inputs always give the same schedule.
pub fn generate_with_config(
    catalog: &[LessonTemplate],
    profile: &LearnerProfile,
    config: &PlannerConfig,
) -> Schedule {
    let curriculum = active_curriculum(catalog, profile);
    let allocator = DailyAllocator::new(&curriculum, config);
    let mut state = allocator.initial_state();
    let mut days = Vec::with_capacity(config.horizon_days as usize);

    for day_index in 1..=config.horizon_days {
        let elapsed = day_index - 1;
        // Start dates at the very end of the calendar are a caller error.
        let date = profile
            .start_date
            .checked_add_days(Days::new(u64::from(elapsed)))
            .unwrap_or(NaiveDate::MAX);
        let week_number = elapsed / 7 + 1;

        if !profile.weekly_availability.is_available(date.weekday()) {
            days.push(DayPlan {
                date,
                day_index,
                tasks: Vec::new(),
                is_rest_day: true,
                week_number,
            });
            continue;
        }

        let DayAllocation { tasks, state: next } =
            allocator.allocate(day_index, profile.daily_minutes, state);
        state = next;

        days.push(DayPlan {
            date,
            day_index,
            tasks,
            is_rest_day: false,
            week_number,
        });
    }

    tracing::info!(
        start_date = %profile.start_date,
        days = days.len(),
        active_lessons = curriculum.len(),
        cursor = state.cursor,
        unrealized_reviews = state.ledger.len(),
        "Generated practice schedule"
    );

    Schedule { days }
}
