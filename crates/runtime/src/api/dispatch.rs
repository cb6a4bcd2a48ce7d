//! Transport-neutral request routing.
//!
//! A [`GameRequest`] names an operation (`op`) and, where relevant, the game it
//! targets. [`dispatch`] resolves the game through a [`SessionStore`] and
//! folds every outcome into one flat [`GameResponse`].

use serde::{Deserialize, Serialize};

use game_core::{Action, SessionError};

use super::messages::{
    AttackRequest, EndTurnRequest, MoveRequest, OperationResponse, ScenarioRequest,
    SessionSnapshot,
};
use super::{Result, RuntimeError, SessionHandle, SessionId};
use crate::store::SessionStore;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum GameRequest {
    /// Start a new game, optionally laid out from a library scenario.
    #[serde(rename_all = "camelCase")]
    CreateGame {
        #[serde(default)]
        scenario: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    State { game_id: SessionId },
    #[serde(rename_all = "camelCase")]
    Move {
        game_id: SessionId,
        #[serde(flatten)]
        request: MoveRequest,
    },
    #[serde(rename_all = "camelCase")]
    Attack {
        game_id: SessionId,
        #[serde(flatten)]
        request: AttackRequest,
    },
    #[serde(rename_all = "camelCase")]
    EndTurn {
        game_id: SessionId,
        #[serde(flatten)]
        request: EndTurnRequest,
    },
    #[serde(rename_all = "camelCase")]
    Scenario {
        game_id: SessionId,
        #[serde(flatten)]
        request: ScenarioRequest,
    },
    ListScenarios,
    #[serde(rename_all = "camelCase")]
    CloseGame { game_id: SessionId },
}

impl GameRequest {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateGame { .. } => "createGame",
            Self::State { .. } => "state",
            Self::Move { .. } => "move",
            Self::Attack { .. } => "attack",
            Self::EndTurn { .. } => "endTurn",
            Self::Scenario { .. } => "scenario",
            Self::ListScenarios => "listScenarios",
            Self::CloseGame { .. } => "closeGame",
        }
    }
}

/// Reply envelope: `{ok, error?, code?}` plus the payload of read operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    #[serde(flatten)]
    pub status: OperationResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<SessionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<SessionSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<Vec<String>>,
}

impl GameResponse {
    pub const INVALID_REQUEST: &'static str = "invalid request";

    fn status(status: OperationResponse) -> Self {
        Self {
            status,
            game_id: None,
            state: None,
            scenarios: None,
        }
    }

    pub fn invalid_request() -> Self {
        Self::status(OperationResponse::failure(Self::INVALID_REQUEST))
    }

    pub fn is_ok(&self) -> bool {
        self.status.ok
    }
}

impl<T> From<&Result<T>> for GameResponse {
    fn from(result: &Result<T>) -> Self {
        Self::status(OperationResponse::from_result(result))
    }
}

/// Route one request to its session and build the reply.
pub async fn dispatch(store: &SessionStore, request: GameRequest) -> GameResponse {
    let op = request.as_str();
    match route(store, request).await {
        Ok(response) => response,
        Err(error) => {
            tracing::debug!(op, %error, "request failed");
            GameResponse::from(&Err::<(), _>(error))
        }
    }
}

async fn route(store: &SessionStore, request: GameRequest) -> Result<GameResponse> {
    let ok = || GameResponse::status(OperationResponse::ok());

    match request {
        GameRequest::CreateGame { scenario } => {
            let handle = match scenario {
                Some(name) => store.create_with_scenario(&name).await?,
                None => store.create().await?,
            };
            Ok(GameResponse {
                game_id: Some(handle.id().clone()),
                ..ok()
            })
        }
        GameRequest::State { game_id } => {
            let session = store.get(&game_id).await?.snapshot().await?;
            Ok(GameResponse {
                state: Some(SessionSnapshot::from(&session)),
                ..ok()
            })
        }
        GameRequest::Move { game_id, request } => {
            let handle = store.get(&game_id).await?;
            execute(&handle, request.into_action()).await
        }
        GameRequest::Attack { game_id, request } => {
            let handle = store.get(&game_id).await?;
            execute(&handle, request.into_action()).await
        }
        GameRequest::EndTurn { game_id, request } => {
            let handle = store.get(&game_id).await?;
            execute(&handle, request.into_action()).await
        }
        GameRequest::Scenario { game_id, request } => {
            let handle = store.get(&game_id).await?;
            execute(&handle, Ok(request.into_action())).await
        }
        GameRequest::ListScenarios => Ok(GameResponse {
            scenarios: Some(store.scenarios().names()),
            ..ok()
        }),
        GameRequest::CloseGame { game_id } => {
            store.remove(&game_id).await?;
            Ok(ok())
        }
    }
}

async fn execute(
    handle: &SessionHandle,
    action: std::result::Result<Action, SessionError>,
) -> Result<GameResponse> {
    let action = action.map_err(RuntimeError::Rejected)?;
    handle.execute(action).await?;
    Ok(GameResponse::status(OperationResponse::ok()))
}
