use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Skill keys a learner can tick during onboarding.
pub const SKILL_KEYS: [&str; 13] = [
    "holding_posture",
    "tuning",
    "alternate_plucking",
    "raking",
    "floating_thumb",
    "shifting",
    "hammer_pull",
    "notes_first_5_frets",
    "major_scale_shape",
    "intervals_basic",
    "slap_basic",
    "tapping",
    "chords",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("unsupported string count '{0}', expected 4, 5 or 6")]
    UnsupportedStringCount(String),
}

/// Number of strings on the learner's bass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StringCount {
    Four,
    Five,
    Six,
}

impl StringCount {
    pub fn strings(self) -> u8 {
        match self {
            StringCount::Four => 4,
            StringCount::Five => 5,
            StringCount::Six => 6,
        }
    }
}

impl TryFrom<String> for StringCount {
    type Error = ProfileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim() {
            "4" => Ok(StringCount::Four),
            "5" => Ok(StringCount::Five),
            "6" => Ok(StringCount::Six),
            _ => Err(ProfileError::UnsupportedStringCount(value)),
        }
    }
}

impl From<StringCount> for String {
    fn from(count: StringCount) -> String {
        count.strings().to_string()
    }
}

impl fmt::Display for StringCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.strings())
    }
}

/// Which weekdays the learner practices on. A missing day means "not available".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WeeklyAvailability {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

impl WeeklyAvailability {
    pub fn every_day() -> Self {
        WeeklyAvailability {
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
            saturday: true,
            sunday: true,
        }
    }

    /// Monday to Saturday, Sunday off.
    pub fn six_days() -> Self {
        WeeklyAvailability { sunday: false, ..Self::every_day() }
    }

    pub fn is_available(&self, day: Weekday) -> bool {
        match day {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    pub fn set(&mut self, day: Weekday, available: bool) {
        let slot = match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *slot = available;
    }
}

/// Skills the learner already masters, keyed by skill key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnownSkills {
    pub skills: BTreeMap<String, bool>,
}

impl KnownSkills {
    pub fn new() -> Self {
        let skills = SKILL_KEYS
            .iter()
            .map(|key| (key.to_string(), false))
            .collect();
        Self { skills }
    }

    pub fn is_mastered(&self, key: &str) -> bool {
        self.skills.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: impl Into<String>, mastered: bool) {
        self.skills.insert(key.into(), mastered);
    }
}

impl Default for KnownSkills {
    fn default() -> Self {
        Self::new()
    }
}

/// Learner settings the schedule is generated from.
///
/// Preconditions, not validated here: `daily_minutes` should be > 0 for any
/// content to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    pub start_date: NaiveDate,
    #[serde(default)]
    pub weekly_availability: WeeklyAvailability,
    pub daily_minutes: u32,
    #[serde(default)]
    pub user_name: String,
    pub bass_type: StringCount,
    #[serde(default)]
    pub known_skills: KnownSkills,
}

impl LearnerProfile {
    /// Onboarding defaults: Monday to Saturday, one hour a day, 4-string bass.
    pub fn new(start_date: NaiveDate) -> Self {
        LearnerProfile {
            start_date,
            weekly_availability: WeeklyAvailability::six_days(),
            daily_minutes: 60,
            user_name: String::new(),
            bass_type: StringCount::Four,
            known_skills: KnownSkills::new(),
        }
    }
}
