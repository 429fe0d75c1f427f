use crate::curriculum::{Category, LessonTemplate};
use crate::planner::ledger::ReviewLesson;
use crate::planner::{Task, TaskKind, FREE_PRACTICE_TITLE};

fn template() -> LessonTemplate {
    LessonTemplate::lesson("Walking Bass", Category::Rhythm, 25, "Noires sur une grille")
}

fn introduced() -> ReviewLesson {
    ReviewLesson {
        lesson_id: "lesson-4-2".into(),
        title: "Walking Bass".into(),
        description: "Noires sur une grille".into(),
        category: Category::Rhythm,
        duration_minutes: 25,
    }
}

#[test]
fn test_lesson_task() {
    let task = Task::lesson(4, 2, &template(), 20);
    assert_eq!(task.id, "lesson-4-2");
    assert_eq!(task.kind, TaskKind::Lesson);
    assert_eq!(task.duration_minutes, 20);
    assert!(task.is_new_lesson());
    assert!(!task.is_free_practice());
    assert!(task.original_lesson_id.is_none());
}

#[test]
fn test_review_task_links_back() {
    let task = Task::review(5, &introduced(), 13);
    assert_eq!(task.id, "review-5-WalkingBass");
    assert_eq!(task.kind, TaskKind::Review);
    assert!(task.is_review);
    assert!(!task.is_new_lesson());
    assert_eq!(task.original_lesson_id.as_deref(), Some("lesson-4-2"));
}

#[test]
fn test_free_practice_task() {
    let task = Task::free_practice(40, 35);
    assert_eq!(task.id, "free-40");
    assert_eq!(task.kind, TaskKind::FreePractice);
    assert_eq!(task.title, FREE_PRACTICE_TITLE);
    assert_eq!(task.category, Category::Improvisation);
    assert!(task.is_free_practice());
    assert!(!task.is_new_lesson());
}

#[test]
fn test_kind_survives_id_rewrites() {
    let mut filler = Task::free_practice(7, 30);
    filler.id = "custom-7".into();
    assert!(filler.is_free_practice());

    let mut lesson = Task::lesson(1, 0, &template(), 25);
    lesson.id = "free-style-1".into();
    assert!(lesson.is_new_lesson());
    assert!(!lesson.is_free_practice());
}

#[test]
fn test_review_minutes_round_up_without_overflow() {
    let mut lesson = introduced();
    assert_eq!(lesson.review_minutes(), 13);
    lesson.duration_minutes = u32::MAX;
    assert_eq!(lesson.review_minutes(), u32::MAX / 2 + 1);
}
