use std::path::{Path, PathBuf};
use crate::error::PlanError;
use crate::profile::LearnerProfile;
use crate::progress::CompletionLog;

const SETTINGS_FILE: &str = "settings.json";
const COMPLETION_FILE: &str = "tasks.json";

/// JSON files holding the learner's settings and ticked tasks.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SettingsStore { dir: dir.into() }
    }

    /// Store in the platform data directory.
    pub fn default_location() -> Self {
        Self::new(crate::config::data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    fn completion_path(&self) -> PathBuf {
        self.dir.join(COMPLETION_FILE)
    }

    /// Load saved settings. `Ok(None)` when nothing was saved yet.
    pub async fn load_profile(&self) -> Result<Option<LearnerProfile>, PlanError> {
        let path = self.settings_path();
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                serde_json::from_str(&content)
                    .map_err(|e| PlanError::new(
                        format!("Failed to parse {}: {}", SETTINGS_FILE, e),
                        "json_parse"
                    ).with_context(format!("path: {:?}", path)))
                    .map(Some)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(None)
            }
            Err(e) => Err(PlanError::from(e).with_context(format!("path: {:?}", path))),
        }
    }

    pub async fn save_profile(&self, profile: &LearnerProfile) -> Result<(), PlanError> {
        let json = serde_json::to_string_pretty(profile)
            .map_err(|e| PlanError::new(
                format!("Failed to serialize settings: {}", e),
                "json_serialize"
            ))?;
        self.write(&self.settings_path(), json).await
    }

    /// Load ticked tasks, falling back to an empty log on missing or corrupt data.
    pub async fn load_completion(&self) -> CompletionLog {
        let path = self.completion_path();
        match tokio::fs::read_to_string(&path).await {
            Ok(data) => {
                match serde_json::from_str::<CompletionLog>(&data) {
                    Ok(log) => log,
                    Err(e) => {
                        tracing::warn!(
                            path = ?path,
                            error = %e,
                            "Failed to parse tasks.json, starting empty"
                        );
                        CompletionLog::new()
                    }
                }
            }
            Err(e) => {
                tracing::debug!(
                    path = ?path,
                    error = %e,
                    "Failed to read tasks.json, starting empty"
                );
                CompletionLog::new()
            }
        }
    }

    pub async fn save_completion(&self, log: &CompletionLog) -> Result<(), PlanError> {
        let json = serde_json::to_string_pretty(log)
            .map_err(|e| PlanError::new(
                format!("Failed to serialize completion log: {}", e),
                "json_serialize"
            ))?;
        self.write(&self.completion_path(), json).await
    }

    async fn write(&self, path: &Path, json: String) -> Result<(), PlanError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PlanError::from(e).with_context(format!("path: {:?}", self.dir)))?;

        tokio::fs::write(path, json)
            .await
            .map_err(|e| PlanError::from(e).with_context(format!("path: {:?}", path)))?;

        Ok(())
    }
}
