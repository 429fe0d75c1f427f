use std::collections::HashSet;
use crate::config::planner::PlannerConfig;
use crate::curriculum::LessonTemplate;
use crate::planner::ledger::{ReviewLedger, ReviewLesson};
use crate::planner::Task;

/// Running state threaded from one practice day to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationState {
    /// Position of the next lesson to introduce in the active curriculum.
    pub cursor: usize,
    pub ledger: ReviewLedger,
}

/// Tasks for one day plus the state to hand to the next one.
#[derive(Debug, Clone)]
pub struct DayAllocation {
    pub tasks: Vec<Task>,
    pub state: AllocationState,
}

/// Fills one practice day: due reviews first, then new lessons, then free practice.
pub struct DailyAllocator<'a> {
    curriculum: &'a [LessonTemplate],
    config: &'a PlannerConfig,
}

impl<'a> DailyAllocator<'a> {
    pub fn new(curriculum: &'a [LessonTemplate], config: &'a PlannerConfig) -> Self {
        DailyAllocator { curriculum, config }
    }

    /// Cursor at the first lesson, empty ledger.
    pub fn initial_state(&self) -> AllocationState {
        AllocationState {
            cursor: 0,
            ledger: ReviewLedger::new(self.config.review_intervals.clone()),
        }
    }

    pub fn is_exhausted(&self, state: &AllocationState) -> bool {
        state.cursor >= self.curriculum.len()
    }

    pub fn allocate(&self, day_index: u32, budget_minutes: u32, state: AllocationState) -> DayAllocation {
        let exhausted_at_start = self.is_exhausted(&state);
        let AllocationState { mut cursor, mut ledger } = state;
        let mut tasks = Vec::new();
        let mut remaining = budget_minutes;

        // Reviews. The cap lifts to the whole budget once nothing new is left.
        let review_cap = if exhausted_at_start {
            budget_minutes
        } else {
            self.config.review_cap(budget_minutes)
        };
        let mut review_used: u32 = 0;
        let mut reviewed_today: HashSet<String> = HashSet::new();

        for entry in ReviewLedger::dedupe(ledger.due_on(day_index)) {
            let minutes = entry.lesson.review_minutes();
            if review_used.saturating_add(minutes) > review_cap {
                continue;
            }
            review_used += minutes;
            remaining = remaining.saturating_sub(minutes);
            ledger.consume(&entry.lesson.title, day_index);
            reviewed_today.insert(entry.lesson.title.clone());
            tasks.push(Task::review(day_index, &entry.lesson, minutes));
        }

        // New lessons, truncated to fit rather than skipped.
        while remaining > self.config.new_lesson_min_remaining && cursor < self.curriculum.len() {
            let template = &self.curriculum[cursor];

            if reviewed_today.contains(template.title) {
                // The cursor still moves on, so this lesson is never introduced.
                tracing::warn!(
                    day = day_index,
                    title = template.title,
                    "Lesson already reviewed today, skipping it for the rest of the plan"
                );
            } else {
                let minutes = template.duration_minutes.min(remaining);
                let task = Task::lesson(day_index, cursor, template, minutes);
                ledger.schedule(
                    &ReviewLesson {
                        lesson_id: task.id.clone(),
                        title: template.title.to_string(),
                        description: template.description.to_string(),
                        category: template.category,
                        duration_minutes: template.duration_minutes,
                    },
                    day_index,
                );
                remaining = remaining.saturating_sub(minutes);
                tasks.push(task);
            }

            cursor += 1;
        }

        if cursor >= self.curriculum.len() && remaining > self.config.filler_min_remaining {
            tasks.push(Task::free_practice(day_index, remaining));
            remaining = 0;
        }

        tracing::debug!(
            day = day_index,
            task_count = tasks.len(),
            review_minutes = review_used,
            unused_minutes = remaining,
            cursor = cursor,
            pending_reviews = ledger.len(),
            "Allocated practice day"
        );

        DayAllocation {
            tasks,
            state: AllocationState { cursor, ledger },
        }
    }
}
