//! Engine error type.
//!
//! Every failing operation returns one of these and leaves the stored game
//! exactly as it was.

use thiserror::Error;

use crate::store::StoreError;

/// What a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Game,
    Player,
}

impl std::fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotFoundKind::Game => f.write_str("game"),
            NotFoundKind::Player => f.write_str("player"),
        }
    }
}

/// Errors returned by the deck engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0} not found: {1}")]
    NotFound(NotFoundKind, String),

    #[error("You cannot participate in a game you do not belong")]
    NotParticipant,

    #[error("It is not your turn to play")]
    NotYourTurn,

    #[error("store error: {0}")]
    Store(#[source] StoreError),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::GameNotFound(id) => EngineError::NotFound(NotFoundKind::Game, id.0),
            StoreError::PlayerNotFound(id) => EngineError::NotFound(NotFoundKind::Player, id.0),
            other => EngineError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameId, PlayerId};

    #[test]
    fn test_messages() {
        assert_eq!(
            EngineError::NotParticipant.to_string(),
            "You cannot participate in a game you do not belong"
        );
        assert_eq!(EngineError::NotYourTurn.to_string(), "It is not your turn to play");
        assert_eq!(
            EngineError::NotFound(NotFoundKind::Game, "g-1".into()).to_string(),
            "game not found: g-1"
        );
    }

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let err = EngineError::from(StoreError::GameNotFound(GameId::new("nope")));
        assert!(matches!(err, EngineError::NotFound(NotFoundKind::Game, ref id) if id == "nope"));

        let err = EngineError::from(StoreError::PlayerNotFound(PlayerId::new("p")));
        assert!(matches!(err, EngineError::NotFound(NotFoundKind::Player, _)));
    }

    #[test]
    fn test_other_store_errors_pass_through() {
        let err = EngineError::from(StoreError::AlreadyJoined {
            game: GameId::new("g"),
            player: PlayerId::new("p"),
        });
        assert!(matches!(err, EngineError::Store(StoreError::AlreadyJoined { .. })));
    }
}
