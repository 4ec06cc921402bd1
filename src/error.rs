//! Error types shared by the board, rules engine and driver.

/// Reasons a move is rejected. The board is never modified when one of
/// these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("pit {pit} is outside the player's range")]
    OutOfRange { pit: usize },

    #[error("pit {pit} is empty")]
    EmptyPit { pit: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Top-level error for the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MancalaError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::OutOfRange { pit: 9 }.to_string(),
            "pit 9 is outside the player's range"
        );
        assert_eq!(MoveError::EmptyPit { pit: 2 }.to_string(), "pit 2 is empty");
        assert_eq!(MoveError::GameOver.to_string(), "the game is already over");
    }

    #[test]
    fn test_mancala_error_wraps_move_error() {
        let err: MancalaError = MoveError::GameOver.into();
        assert_eq!(err.to_string(), "illegal move: the game is already over");
    }

    #[test]
    fn test_invalid_configuration_display() {
        let err = MancalaError::InvalidConfiguration("stones_per_pit must be > 0".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: stones_per_pit must be > 0"
        );
    }
}
