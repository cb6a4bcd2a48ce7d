//! Scenario files: named map labels with spawn layouts.
//!
//! Scenarios are plain data loaded from RON (`*.ron`) or JSON (`*.json`)
//! files. Applying one to a session goes through the same
//! [`game_core::ScenarioAction`] as a client-submitted overlay.

use std::collections::BTreeMap;
use std::path::Path;

use game_core::{Position, ScenarioAction};
use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};

/// Map label plus one spawn cell per entity slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(alias = "mapLabel")]
    pub map_label: String,
    pub positions: Vec<Position>,
}

impl Scenario {
    pub fn new(map_label: impl Into<String>, positions: Vec<Position>) -> Self {
        Self {
            map_label: map_label.into(),
            positions,
        }
    }

    pub fn to_action(&self) -> ScenarioAction {
        ScenarioAction::new(Some(self.map_label.clone()), Some(self.positions.clone()))
    }

    /// Load a scenario, picking the format from the file extension.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let invalid = |reason: String| RuntimeError::InvalidScenario {
            path: path.to_path_buf(),
            reason,
        };

        let content = std::fs::read_to_string(path)
            .map_err(|e| invalid(format!("failed to read file: {}", e)))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => {
                ron::from_str(&content).map_err(|e| invalid(format!("failed to parse RON: {}", e)))
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| invalid(format!("failed to parse JSON: {}", e))),
            _ => Err(invalid("unsupported extension (expected .ron or .json)".into())),
        }
    }
}

/// Scenarios indexed by name (the file stem).
#[derive(Clone, Debug, Default)]
pub struct ScenarioLibrary {
    scenarios: BTreeMap<String, Scenario>,
}

impl ScenarioLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `.ron` / `.json` file in `dir`. Other files are skipped.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(dir).map_err(|e| RuntimeError::InvalidScenario {
            path: dir.to_path_buf(),
            reason: format!("failed to read directory: {}", e),
        })?;

        let mut library = Self::new();
        for entry in entries {
            let path = entry
                .map_err(|e| RuntimeError::InvalidScenario {
                    path: dir.to_path_buf(),
                    reason: format!("failed to read directory entry: {}", e),
                })?
                .path();

            let is_scenario = matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("ron" | "json")
            );
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if !is_scenario || !path.is_file() {
                continue;
            }

            let scenario = Scenario::load_from_file(&path)?;
            tracing::debug!(name, map = %scenario.map_label, "loaded scenario");
            library.insert(name, scenario);
        }

        tracing::info!(count = library.len(), dir = %dir.display(), "scenario library loaded");
        Ok(library)
    }

    pub fn insert(&mut self, name: impl Into<String>, scenario: Scenario) {
        self.scenarios.insert(name.into(), scenario);
    }

    pub fn get(&self, name: &str) -> Result<&Scenario> {
        self.scenarios
            .get(name)
            .ok_or_else(|| RuntimeError::ScenarioNotFound {
                name: name.to_string(),
            })
    }

    /// Scenario names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.scenarios.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
