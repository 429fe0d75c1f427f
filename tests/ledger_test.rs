use bassmaster::curriculum::{Category, LessonTemplate};
use bassmaster::config::planner::PlannerConfig;
use bassmaster::planner::allocator::DailyAllocator;
use bassmaster::planner::ledger::{ReviewEntry, ReviewLedger, ReviewLesson};

fn lesson(title: &str, minutes: u32) -> ReviewLesson {
    ReviewLesson {
        lesson_id: format!("lesson-1-{}", title),
        title: title.to_string(),
        description: String::new(),
        category: Category::Technique,
        duration_minutes: minutes,
    }
}

fn due_days(entries: &[ReviewEntry]) -> Vec<u32> {
    entries.iter().map(|e| e.due_day).collect()
}

#[test]
fn test_schedule_enqueues_one_entry_per_interval() {
    let mut ledger = ReviewLedger::default();
    assert!(ledger.is_empty());
    ledger.schedule(&lesson("Octaves", 15), 5);

    assert_eq!(ledger.len(), 6);
    assert_eq!(ledger.intervals(), &[1, 3, 7, 14, 30, 60]);
    assert_eq!(due_days(&ledger.due_on(1000)), vec![6, 8, 12, 19, 35, 65]);
}

#[test]
fn test_due_on_includes_overdue_entries() {
    let mut ledger = ReviewLedger::default();
    ledger.schedule(&lesson("Octaves", 15), 1);

    assert!(ledger.due_on(1).is_empty());
    assert_eq!(due_days(&ledger.due_on(2)), vec![2]);
    assert_eq!(due_days(&ledger.due_on(5)), vec![2, 4]);
    // Nothing consumed, so querying does not change the ledger.
    assert_eq!(ledger.len(), 6);
}

#[test]
fn test_dedupe_keeps_first_position_and_latest_entry() {
    let mut ledger = ReviewLedger::default();
    let mut old = lesson("Alpha", 20);
    old.description = "old".into();
    let mut new = lesson("Alpha", 20);
    new.description = "new".into();

    ledger.schedule(&old, 1);
    ledger.schedule(&lesson("Beta", 10), 1);
    ledger.schedule(&new, 2);

    let unique = ReviewLedger::dedupe(ledger.due_on(10));
    let titles: Vec<&str> = unique.iter().map(|e| e.lesson.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta"]);
    assert_eq!(unique[0].lesson.description, "new");
    assert_eq!(unique[0].due_day, 9);
}

#[test]
fn test_consume_only_removes_due_entries() {
    let mut ledger = ReviewLedger::default();
    ledger.schedule(&lesson("Alpha", 20), 1);
    ledger.schedule(&lesson("Beta", 10), 1);

    ledger.consume("Alpha", 4);
    assert_eq!(ledger.len(), 10);
    let remaining_alpha: Vec<u32> = ledger
        .due_on(1000)
        .iter()
        .filter(|e| e.lesson.title == "Alpha")
        .map(|e| e.due_day)
        .collect();
    assert_eq!(remaining_alpha, vec![8, 15, 31, 61]);

    ledger.consume("Missing", 100);
    assert_eq!(ledger.len(), 10);
}

#[test]
fn test_review_minutes_round_up() {
    assert_eq!(lesson("a", 15).review_minutes(), 8);
    assert_eq!(lesson("b", 20).review_minutes(), 10);
    assert_eq!(lesson("c", 25).review_minutes(), 13);
    assert_eq!(lesson("d", 1).review_minutes(), 1);
}

#[test]
fn test_allocator_threads_state_between_days() {
    let curriculum = [
        LessonTemplate::lesson("Alpha", Category::Technique, 15, "a"),
        LessonTemplate::lesson("Beta", Category::Rhythm, 15, "b"),
        LessonTemplate::lesson("Gamma", Category::Theory, 15, "c"),
    ];
    let config = PlannerConfig::default();
    let allocator = DailyAllocator::new(&curriculum, &config);

    let day1 = allocator.allocate(1, 20, allocator.initial_state());
    let ids: Vec<&str> = day1.tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["lesson-1-0"]);
    assert_eq!(day1.state.cursor, 1);
    assert_eq!(day1.state.ledger.len(), 6);

    // Same state replayed gives the same day.
    let again = allocator.allocate(1, 20, allocator.initial_state());
    assert_eq!(again.tasks, day1.tasks);

    let day2 = allocator.allocate(2, 20, day1.state);
    let summary: Vec<(bool, &str, u32)> = day2
        .tasks
        .iter()
        .map(|t| (t.is_review, t.title.as_str(), t.duration_minutes))
        .collect();
    // Cap is floor(20 * 0.6) = 12, so the 8 minute review fits; 12 left for Beta.
    assert_eq!(summary, vec![(true, "Alpha", 8), (false, "Beta", 12)]);
    assert_eq!(day2.state.cursor, 2);
    assert!(!allocator.is_exhausted(&day2.state));
}

#[test]
fn test_allocator_skips_reviews_over_cap_but_tries_later_ones() {
    let curriculum = [LessonTemplate::lesson("Next", Category::Theory, 20, "n")];
    let config = PlannerConfig::default();
    let allocator = DailyAllocator::new(&curriculum, &config);

    let mut state = allocator.initial_state();
    state.ledger.schedule(&lesson("Big", 30), 0);
    state.ledger.schedule(&lesson("Small", 10), 0);

    // Cap is 12: Big (15) does not fit, Small (5) does.
    let day = allocator.allocate(1, 20, state);
    let titles: Vec<&str> = day.tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Small", "Next"]);
    assert_eq!(day.tasks[1].duration_minutes, 15);
    let big_left = day.state.ledger.due_on(1).iter().filter(|e| e.lesson.title == "Big").count();
    assert_eq!(big_left, 1);
}
