use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use crate::config::planner::REVIEW_INTERVALS;
use crate::curriculum::Category;

/// The lesson a review refers back to, as it was introduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewLesson {
    /// Id of the new-lesson task that introduced it.
    pub lesson_id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Nominal (untruncated) duration of the lesson.
    pub duration_minutes: u32,
}

impl ReviewLesson {
    /// Reviews take half the nominal duration, rounded up.
    pub fn review_minutes(&self) -> u32 {
        self.duration_minutes / 2 + self.duration_minutes % 2
    }
}

/// One pending review obligation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewEntry {
    pub lesson: ReviewLesson,
    pub due_day: u32,
    /// Insertion order; later entries win when deduplicating.
    pub seq: u64,
}

/// Pending reviews, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewLedger {
    intervals: Vec<u32>,
    entries: Vec<ReviewEntry>,
    next_seq: u64,
}

impl ReviewLedger {
    pub fn new(intervals: Vec<u32>) -> Self {
        ReviewLedger {
            intervals,
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Enqueue one review per interval after `introduced_on`.
    pub fn schedule(&mut self, lesson: &ReviewLesson, introduced_on: u32) {
        for interval in &self.intervals {
            self.entries.push(ReviewEntry {
                lesson: lesson.clone(),
                due_day: introduced_on + interval,
                seq: self.next_seq,
            });
            self.next_seq += 1;
        }
    }

    /// Every entry due on or before `day`, in insertion order.
    /// Overdue entries stay here until consumed.
    pub fn due_on(&self, day: u32) -> Vec<ReviewEntry> {
        self.entries
            .iter()
            .filter(|e| e.due_day <= day)
            .cloned()
            .collect()
    }

    /// One entry per lesson title. Keeps the position of the first occurrence
    /// and the payload of the most recently enqueued one.
    pub fn dedupe(entries: Vec<ReviewEntry>) -> Vec<ReviewEntry> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut unique: Vec<ReviewEntry> = Vec::with_capacity(entries.len());

        for entry in entries {
            match index.get(&entry.lesson.title) {
                Some(&pos) => {
                    if entry.seq >= unique[pos].seq {
                        unique[pos] = entry;
                    }
                }
                None => {
                    index.insert(entry.lesson.title.clone(), unique.len());
                    unique.push(entry);
                }
            }
        }

        unique
    }

    /// Drop every entry for `title` that is due on or before `day`.
    /// Later obligations for the same lesson stay queued.
    pub fn consume(&mut self, title: &str, day: u32) {
        self.entries
            .retain(|e| !(e.lesson.title == title && e.due_day <= day));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn intervals(&self) -> &[u32] {
        &self.intervals
    }
}

impl Default for ReviewLedger {
    fn default() -> Self {
        Self::new(REVIEW_INTERVALS.to_vec())
    }
}
