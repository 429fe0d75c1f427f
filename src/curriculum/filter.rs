use crate::curriculum::LessonTemplate;
use crate::profile::LearnerProfile;

/// Lessons of `catalog` that apply to `profile`, in catalog order.
///
/// A lesson is dropped when it needs more strings than the learner's bass has,
/// or when it introduces a skill the learner already masters. An empty result
/// is valid: the planner then only schedules reviews and free practice.
pub fn active_curriculum(catalog: &[LessonTemplate], profile: &LearnerProfile) -> Vec<LessonTemplate> {
    let strings = profile.bass_type.strings();

    let active: Vec<LessonTemplate> = catalog
        .iter()
        .filter(|lesson| lesson.min_strings.map_or(true, |min| min <= strings))
        .filter(|lesson| {
            lesson
                .required_skill
                .map_or(true, |skill| !profile.known_skills.is_mastered(skill))
        })
        .copied()
        .collect();

    if active.len() != catalog.len() {
        tracing::debug!(
            strings = strings,
            active_count = active.len(),
            total_count = catalog.len(),
            "Filtered curriculum for profile"
        );
    }

    active
}
