use core::convert::Infallible;

use crate::action::ActionTransition;
use crate::state::{Position, Session};

/// Administrative overlay of a map label and spawn layout.
///
/// Runs in any phase and never touches stats, turn owner or phase. Positions
/// are trusted as given; a list shorter than the roster is ignored, extra
/// entries are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScenarioAction {
    pub map_label: Option<String>,
    pub positions: Option<Vec<Position>>,
}

impl ScenarioAction {
    pub fn new(map_label: Option<String>, positions: Option<Vec<Position>>) -> Self {
        Self {
            map_label,
            positions,
        }
    }

    fn usable_positions<'a>(&'a self, session: &Session) -> Option<&'a [Position]> {
        self.positions
            .as_deref()
            .filter(|positions| positions.len() >= session.entity_count())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScenarioOutcome {
    pub positions_applied: bool,
    pub map_changed: bool,
}

impl ActionTransition for ScenarioAction {
    type Error = Infallible;
    type Result = ScenarioOutcome;

    fn apply(&self, session: &mut Session) -> Result<Self::Result, Self::Error> {
        let mut outcome = ScenarioOutcome::default();

        if let Some(positions) = self.usable_positions(session) {
            for (slot, &position) in session.entities.iter_mut().zip(positions) {
                slot.teleport(position);
            }
            outcome.positions_applied = true;
        }

        if let Some(label) = &self.map_label {
            session.map_label.clone_from(label);
            outcome.map_changed = true;
        }

        Ok(outcome)
    }
}
