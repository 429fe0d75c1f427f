use anyhow::Context;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Planning horizon in days.
pub const HORIZON_DAYS: u32 = 90;

/// Spaced-repetition offsets, in days after a lesson is introduced.
pub const REVIEW_INTERVALS: [u32; 6] = [1, 3, 7, 14, 30, 60];

/// Tunables of the schedule generator.
///
/// `Default` carries the canonical values; `generate` always uses them so a
/// given profile maps to one schedule. Only the binary reads `planner.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub horizon_days: u32,
    pub review_intervals: Vec<u32>,
    /// Share of the daily budget reviews may take while new lessons remain.
    pub review_share_percent: u32,
    /// New lessons are only started while strictly more than this is left.
    pub new_lesson_min_remaining: u32,
    /// Free practice is only added while strictly more than this is left.
    pub filler_min_remaining: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            horizon_days: HORIZON_DAYS,
            review_intervals: REVIEW_INTERVALS.to_vec(),
            review_share_percent: 60,
            new_lesson_min_remaining: 10,
            filler_min_remaining: 15,
        }
    }
}

impl PlannerConfig {
    /// Review cap for a day while new content remains: floor(budget * share).
    /// Never more than the budget, whatever the configured share.
    pub fn review_cap(&self, budget_minutes: u32) -> u32 {
        let share = u64::from(self.review_share_percent.min(100));
        let cap = u64::from(budget_minutes) * share / 100;
        u32::try_from(cap).unwrap_or(budget_minutes).min(budget_minutes)
    }

    /// Reject settings the allocator cannot honour.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.review_share_percent > 100 {
            anyhow::bail!(
                "review_share_percent must be at most 100, got {}",
                self.review_share_percent
            );
        }
        if self.review_intervals.iter().any(|&interval| interval == 0) {
            anyhow::bail!("review_intervals must all be at least 1 day");
        }
        Ok(())
    }

    /// Parse a config from a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<PlannerConfig> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = toml::from_str::<PlannerConfig>(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("validating {}", path.display()))?;
        Ok(config)
    }
}

fn load_planner_config_internal() -> PlannerConfig {
    let config_path = super::data_dir().join("planner.toml");

    if !config_path.exists() {
        tracing::debug!(path = ?config_path, "No planner.toml, using defaults");
        return PlannerConfig::default();
    }

    match PlannerConfig::from_file(&config_path) {
        Ok(config) => {
            tracing::info!(path = ?config_path, "Loaded planner config");
            config
        }
        Err(e) => {
            tracing::warn!(
                path = ?config_path,
                error = %format!("{:#}", e),
                "Failed to load planner.toml, using defaults"
            );
            PlannerConfig::default()
        }
    }
}

lazy_static! {
    static ref PLANNER_CONFIG: PlannerConfig = load_planner_config_internal();
}

/// Get the cached planner configuration (loaded once on first use)
pub fn get_planner_config() -> &'static PlannerConfig {
    &PLANNER_CONFIG
}
