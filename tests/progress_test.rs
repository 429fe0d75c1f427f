use chrono::NaiveDate;
use bassmaster::curriculum::{catalog, Category};
use bassmaster::planner::generate;
use bassmaster::profile::{LearnerProfile, WeeklyAvailability};
use bassmaster::progress::{
    current_day_index, day_for_date, progress_percentage, stats_by_category, week_days,
    CompletionLog, DayProgress,
};
use bassmaster::state::PlannerState;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn profile() -> LearnerProfile {
    // Monday to Saturday, Sunday off.
    LearnerProfile::new(start())
}

#[test]
fn test_completion_log_toggle() {
    let mut log = CompletionLog::new();
    assert!(!log.is_done("lesson-1-0"));
    assert!(log.toggle("lesson-1-0"));
    assert!(log.is_done("lesson-1-0"));
    assert!(!log.toggle("lesson-1-0"));
    assert!(!log.is_done("lesson-1-0"));

    log.set("free-3", true);
    let json = serde_json::to_string(&log).unwrap();
    assert_eq!(json, r#"{"free-3":true,"lesson-1-0":false}"#);
}

#[test]
fn test_day_lookup_by_date() {
    let schedule = generate(catalog(), &profile());
    let day = day_for_date(&schedule, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()).unwrap();
    assert_eq!(day.day_index, 10);
    assert_eq!(current_day_index(&schedule, day.date), 10);

    let before = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    assert!(day_for_date(&schedule, before).is_none());
    assert_eq!(current_day_index(&schedule, before), 1);
}

#[test]
fn test_week_days() {
    let schedule = generate(catalog(), &profile());
    let week2 = week_days(&schedule, 2);
    let indices: Vec<u32> = week2.iter().map(|d| d.day_index).collect();
    assert_eq!(indices, (8..=14).collect::<Vec<u32>>());

    // 90 days: twelve full weeks and a partial 13th.
    assert_eq!(week_days(&schedule, 13).len(), 6);
    assert!(week_days(&schedule, 14).is_empty());
}

#[test]
fn test_progress_percentage_is_clamped() {
    assert_eq!(progress_percentage(45, 90), 50.0);
    assert_eq!(progress_percentage(90, 90), 100.0);
    assert_eq!(progress_percentage(120, 90), 100.0);
    assert_eq!(progress_percentage(0, 90), 0.0);
    assert_eq!(progress_percentage(3, 0), 0.0);
}

#[test]
fn test_day_progress() {
    let schedule = generate(catalog(), &profile());
    let day1 = schedule.day(1).unwrap();
    let mut log = CompletionLog::new();

    let progress = DayProgress::of(day1, &log);
    assert_eq!(progress.total, 3);
    assert_eq!(progress.fraction(), 0.0);
    assert!(!progress.all_done());

    log.set(day1.tasks[0].id.clone(), true);
    assert!((DayProgress::of(day1, &log).fraction() - 1.0 / 3.0).abs() < 1e-9);

    for task in &day1.tasks {
        log.set(task.id.clone(), true);
    }
    assert!(DayProgress::of(day1, &log).all_done());

    let sunday = schedule.day(7).unwrap();
    assert!(sunday.is_rest_day);
    assert!(!DayProgress::of(sunday, &log).all_done());
}

#[test]
fn test_stats_cover_every_category() {
    let schedule = generate(catalog(), &profile());
    let mut log = CompletionLog::new();
    log.set("lesson-1-0", true);
    log.set("lesson-1-2", true);

    let stats = stats_by_category(&schedule, &log);
    assert_eq!(stats.keys().copied().collect::<Vec<_>>(), Category::ALL.to_vec());

    let total: usize = stats.values().map(|s| s.total).sum();
    assert_eq!(total, schedule.tasks().count());
    assert_eq!(stats[&Category::Technique].done, 1);
    assert_eq!(stats[&Category::Rhythm].done, 1);
    assert_eq!(stats[&Category::Theory].done, 0);

    let technique = &stats[&Category::Technique];
    assert_eq!(technique.tasks.len(), technique.total);
    assert_eq!(technique.tasks[0].date, start());
    assert_eq!(technique.tasks[0].task.title, "Posture & Main Droite");
}

#[test]
fn test_stats_on_empty_schedule() {
    let mut p = profile();
    p.weekly_availability = WeeklyAvailability::default();
    let schedule = generate(catalog(), &p);
    let stats = stats_by_category(&schedule, &CompletionLog::new());
    assert_eq!(stats.len(), 6);
    assert!(stats.values().all(|s| s.total == 0 && s.done == 0));
}

#[test]
fn test_planner_state_regenerates_and_keeps_completion() {
    let state = PlannerState::new(profile(), CompletionLog::new());
    assert_eq!(state.schedule().len(), 90);
    assert!(state.toggle_task("lesson-1-0"));

    let mut changed = profile();
    changed.daily_minutes = 30;
    state.update_profile(changed.clone());

    assert_eq!(state.profile(), changed);
    assert_eq!(state.schedule(), generate(catalog(), &changed));
    assert!(state.completion().is_done("lesson-1-0"));
    assert_eq!(state.category_stats()[&Category::Technique].done, 1);

    let today = state.today(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()).unwrap();
    assert_eq!(today.day_index, 2);
    assert!(state.today(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).is_none());
}
