pub mod config;
pub mod curriculum;
pub mod error;
pub mod logging;
pub mod planner;
pub mod profile;
pub mod progress;
pub mod state;
pub mod store;

pub use curriculum::{catalog, Category, LessonTemplate};
pub use error::PlanError;
pub use planner::{generate, generate_with_config, DayPlan, Schedule, Task, TaskKind};
pub use profile::LearnerProfile;

#[cfg(test)]
#[path = "../tests/unit/task_kind.rs"]
mod task_kind_tests;

/// Load the saved profile, build the plan and print today's practice as JSON.
pub fn run() -> Result<(), PlanError> {
    // Initialize structured logging first
    logging::init_logging();
    tracing::info!("BassMaster planner starting");

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| PlanError::new(
            format!("Failed to create async runtime: {}", e),
            "startup"
        ))?;

    rt.block_on(async {
        let store = store::SettingsStore::default_location();
        let today = chrono::Local::now().date_naive();

        let profile = match store.load_profile().await? {
            Some(profile) => profile,
            None => {
                tracing::info!(dir = ?store.dir(), "No saved settings, using onboarding defaults");
                LearnerProfile::new(today)
            }
        };
        let completion = store.load_completion().await;

        let planner = state::PlannerState::with_config(
            catalog(),
            config::planner::get_planner_config().clone(),
            profile,
            completion,
        );

        let schedule = planner.schedule();
        let day_index = progress::current_day_index(&schedule, today);
        let total_days = u32::try_from(schedule.len()).unwrap_or(u32::MAX);
        tracing::info!(
            day_index = day_index,
            total_days = total_days,
            progress = progress::progress_percentage(day_index, total_days),
            "Plan ready"
        );

        let json = serde_json::to_string_pretty(&planner.today(today))?;
        println!("{}", json);
        Ok::<(), PlanError>(())
    })
}
