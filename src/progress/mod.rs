use std::collections::BTreeMap;
use chrono::NaiveDate;
use serde::{Serialize, Deserialize};
use crate::curriculum::Category;
use crate::planner::{DayPlan, Schedule, Task};

/// Which tasks the learner has ticked, keyed by task id.
/// Owned by the caller; the planner never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionLog {
    pub done: BTreeMap<String, bool>,
}

impl CompletionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_done(&self, task_id: &str) -> bool {
        self.done.get(task_id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, task_id: impl Into<String>, done: bool) {
        self.done.insert(task_id.into(), done);
    }

    /// Flip a task and return its new state.
    pub fn toggle(&mut self, task_id: &str) -> bool {
        let next = !self.is_done(task_id);
        self.done.insert(task_id.to_string(), next);
        next
    }
}

/// The plan for a calendar date, if it falls inside the schedule.
pub fn day_for_date(schedule: &Schedule, date: NaiveDate) -> Option<&DayPlan> {
    schedule.iter().find(|d| d.date == date)
}

/// Day index for `date`, or 1 when the date is outside the plan.
pub fn current_day_index(schedule: &Schedule, date: NaiveDate) -> u32 {
    day_for_date(schedule, date).map_or(1, |d| d.day_index)
}

/// All days of the given 1-based week.
pub fn week_days(schedule: &Schedule, week_number: u32) -> Vec<&DayPlan> {
    schedule.iter().filter(|d| d.week_number == week_number).collect()
}

/// How far through the plan `day_index` is, 0 to 100.
pub fn progress_percentage(day_index: u32, total_days: u32) -> f64 {
    if total_days == 0 {
        return 0.0;
    }
    (f64::from(day_index) / f64::from(total_days) * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayProgress {
    pub done: usize,
    pub total: usize,
}

impl DayProgress {
    pub fn of(day: &DayPlan, log: &CompletionLog) -> Self {
        DayProgress {
            done: day.tasks.iter().filter(|t| log.is_done(&t.id)).count(),
            total: day.tasks.len(),
        }
    }

    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.done as f64 / self.total as f64
        }
    }

    /// Rest days and empty days never count as done.
    pub fn all_done(&self) -> bool {
        self.total > 0 && self.done == self.total
    }
}

/// A task together with the date it is scheduled on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedTask {
    pub date: NaiveDate,
    pub task: Task,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    pub total: usize,
    pub done: usize,
    pub tasks: Vec<DatedTask>,
}

/// Per-category totals over the whole schedule. Every category is present.
pub fn stats_by_category(schedule: &Schedule, log: &CompletionLog) -> BTreeMap<Category, CategoryStats> {
    let mut stats: BTreeMap<Category, CategoryStats> = Category::ALL
        .iter()
        .map(|c| (*c, CategoryStats::default()))
        .collect();

    for (day, task) in schedule.tasks() {
        let entry = stats.entry(task.category).or_default();
        entry.total += 1;
        if log.is_done(&task.id) {
            entry.done += 1;
        }
        entry.tasks.push(DatedTask {
            date: day.date,
            task: task.clone(),
        });
    }

    stats
}
