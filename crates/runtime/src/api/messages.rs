//! Request and response records exchanged with transports.
//!
//! Actor indices arrive as signed integers so that a negative index is a rule
//! rejection (`InvalidActor`) rather than a decoding failure.

use serde::{Deserialize, Serialize};

use game_core::{
    Action, AttackAction, EndTurnAction, EntityId, EntitySlot, GameError, MoveAction, Outcome,
    Phase, Position, ScenarioAction, Session, SessionError,
};

use super::RuntimeError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub actor: i64,
    pub path: Vec<Position>,
}

impl MoveRequest {
    pub fn into_action(self) -> Result<Action, SessionError> {
        let actor = EntityId::from_wire(self.actor)?;
        Ok(MoveAction::new(actor, self.path).into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRequest {
    pub attacker: i64,
    pub target: i64,
}

impl AttackRequest {
    pub fn into_action(self) -> Result<Action, SessionError> {
        let attacker = EntityId::from_wire(self.attacker)?;
        let target = EntityId::from_wire(self.target)?;
        Ok(AttackAction::new(attacker, target).into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndTurnRequest {
    pub actor: i64,
}

impl EndTurnRequest {
    pub fn into_action(self) -> Result<Action, SessionError> {
        let actor = EntityId::from_wire(self.actor)?;
        Ok(EndTurnAction::new(actor).into())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRequest {
    #[serde(default)]
    pub map_label: Option<String>,
    #[serde(default)]
    pub positions: Option<Vec<Position>>,
}

impl ScenarioRequest {
    pub fn into_action(self) -> Action {
        ScenarioAction::new(self.map_label, self.positions).into()
    }
}

/// `{ok, error?}` reply to every mutating request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Stable machine-readable code for rule rejections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl OperationResponse {
    pub fn ok() -> Self {
        Self {
            ok: true,
            error: None,
            code: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            code: None,
        }
    }

    pub fn rejected(error: &SessionError) -> Self {
        Self {
            ok: false,
            error: Some(error.to_string()),
            code: Some(error.error_code().to_string()),
        }
    }

    pub fn from_result<T>(result: &Result<T, RuntimeError>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(RuntimeError::Rejected(error)) => Self::rejected(error),
            Err(error) => Self::failure(error.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySnapshot {
    pub position: Position,
    pub last_path: Vec<Position>,
    pub health: u32,
    pub max_health: u32,
    pub strength: u32,
}

impl From<&EntitySlot> for EntitySnapshot {
    fn from(slot: &EntitySlot) -> Self {
        Self {
            position: slot.position,
            last_path: slot.last_path.clone(),
            health: slot.health,
            max_health: slot.max_health,
            strength: slot.strength,
        }
    }
}

/// Full read model of one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub entities: Vec<EntitySnapshot>,
    pub turn_owner: u32,
    pub phase: Phase,
    pub map_label: String,
    pub outcome: Outcome,
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        Self {
            entities: session.entities.iter().map(EntitySnapshot::from).collect(),
            turn_owner: session.turn_owner.0,
            phase: session.phase,
            map_label: session.map_label.clone(),
            outcome: session.outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::GameConfig;
    use serde_json::json;

    #[test]
    fn move_request_decodes_wire_shape() {
        let request: MoveRequest = serde_json::from_value(json!({
            "actor": 0,
            "path": [{"q": 4, "r": 4}, {"q": 5, "r": 4}]
        }))
        .unwrap();

        assert_eq!(
            request.into_action(),
            Ok(Action::Move(MoveAction::new(
                EntityId(0),
                vec![Position::new(4, 4), Position::new(5, 4)]
            )))
        );
    }

    #[test]
    fn negative_indices_become_invalid_actor() {
        let request = AttackRequest {
            attacker: 0,
            target: -2,
        };
        assert_eq!(
            request.into_action(),
            Err(SessionError::InvalidActor { actor: -2 })
        );
    }

    #[test]
    fn scenario_request_fields_are_optional() {
        let request: ScenarioRequest = serde_json::from_value(json!({"mapLabel": "dunes"})).unwrap();
        assert_eq!(request.map_label.as_deref(), Some("dunes"));
        assert_eq!(request.positions, None);
    }

    #[test]
    fn responses_omit_absent_fields() {
        assert_eq!(
            serde_json::to_value(OperationResponse::ok()).unwrap(),
            json!({"ok": true})
        );

        let rejected = OperationResponse::rejected(&SessionError::EmptyPath);
        assert_eq!(
            serde_json::to_value(rejected).unwrap(),
            json!({"ok": false, "error": "empty path", "code": "EMPTY_PATH"})
        );
    }

    #[test]
    fn snapshot_uses_camel_case_fields() {
        let session = Session::new(&GameConfig::default()).unwrap();
        let value = serde_json::to_value(SessionSnapshot::from(&session)).unwrap();

        assert_eq!(value["turnOwner"], json!(0));
        assert_eq!(value["phase"], json!("planning"));
        assert_eq!(value["mapLabel"], json!("default"));
        assert_eq!(value["entities"][1]["position"], json!({"q": 6, "r": 3}));
        assert_eq!(value["entities"][1]["lastPath"], json!([{"q": 6, "r": 3}]));
        assert_eq!(value["entities"][1]["maxHealth"], json!(10));
        assert_eq!(value["outcome"], json!({"status": "inProgress"}));
    }
}
