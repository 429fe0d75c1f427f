use std::collections::BTreeMap;
use std::sync::Arc;
use chrono::NaiveDate;
use parking_lot::RwLock;
use crate::curriculum::{catalog, Category, LessonTemplate};
use crate::planner::{generate_with_config, DayPlan, Schedule};
use crate::config::planner::PlannerConfig;
use crate::profile::LearnerProfile;
use crate::progress::{self, CategoryStats, CompletionLog};

/// Application-wide planner state.
/// The schedule is only ever replaced wholesale when the profile changes;
/// the completion log passes through regeneration untouched.
#[derive(Clone)]
pub struct PlannerState {
    catalog: &'static [LessonTemplate],
    config: Arc<PlannerConfig>,
    profile: Arc<RwLock<LearnerProfile>>,
    schedule: Arc<RwLock<Schedule>>,
    completion: Arc<RwLock<CompletionLog>>,
}

impl PlannerState {
    /// Build state for the built-in catalog and canonical settings.
    pub fn new(profile: LearnerProfile, completion: CompletionLog) -> Self {
        Self::with_config(catalog(), PlannerConfig::default(), profile, completion)
    }

    pub fn with_config(
        catalog: &'static [LessonTemplate],
        config: PlannerConfig,
        profile: LearnerProfile,
        completion: CompletionLog,
    ) -> Self {
        let schedule = generate_with_config(catalog, &profile, &config);
        PlannerState {
            catalog,
            config: Arc::new(config),
            profile: Arc::new(RwLock::new(profile)),
            schedule: Arc::new(RwLock::new(schedule)),
            completion: Arc::new(RwLock::new(completion)),
        }
    }

    pub fn profile(&self) -> LearnerProfile {
        self.profile.read().clone()
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule.read().clone()
    }

    pub fn completion(&self) -> CompletionLog {
        self.completion.read().clone()
    }

    /// Replace the profile and regenerate the whole schedule.
    pub fn update_profile(&self, profile: LearnerProfile) {
        let schedule = generate_with_config(self.catalog, &profile, &self.config);
        // Lock order: profile, then schedule.
        let mut profile_guard = self.profile.write();
        let mut schedule_guard = self.schedule.write();
        *profile_guard = profile;
        *schedule_guard = schedule;
        tracing::info!("Profile updated, schedule regenerated");
    }

    /// Flip a task's completion and return its new state.
    pub fn toggle_task(&self, task_id: &str) -> bool {
        let done = self.completion.write().toggle(task_id);
        tracing::debug!(task_id = task_id, done = done, "Task toggled");
        done
    }

    /// Plan for a calendar date, if it is inside the schedule.
    pub fn today(&self, date: NaiveDate) -> Option<DayPlan> {
        progress::day_for_date(&self.schedule.read(), date).cloned()
    }

    pub fn category_stats(&self) -> BTreeMap<Category, CategoryStats> {
        let schedule = self.schedule.read();
        let completion = self.completion.read();
        progress::stats_by_category(&schedule, &completion)
    }
}
