use crate::constants::{
    DEFAULT_PITS_PER_PLAYER, DEFAULT_STONES_PER_PIT, MAX_PITS_PER_PLAYER, MAX_TOTAL_STONES,
};
use crate::error::MancalaError;

/// Board dimensions for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub pits_per_player: usize,
    pub stones_per_pit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            pits_per_player: DEFAULT_PITS_PER_PLAYER,
            stones_per_pit: DEFAULT_STONES_PER_PIT,
        }
    }
}

impl GameConfig {
    pub fn new(pits_per_player: usize, stones_per_pit: u32) -> Self {
        GameConfig {
            pits_per_player,
            stones_per_pit,
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), MancalaError> {
        if self.pits_per_player == 0 {
            return Err(MancalaError::InvalidConfiguration(
                "pits_per_player must be > 0".into(),
            ));
        }
        if self.pits_per_player > MAX_PITS_PER_PLAYER {
            return Err(MancalaError::InvalidConfiguration(format!(
                "pits_per_player must be <= {MAX_PITS_PER_PLAYER}"
            )));
        }
        if self.stones_per_pit == 0 {
            return Err(MancalaError::InvalidConfiguration(
                "stones_per_pit must be > 0".into(),
            ));
        }
        let pits = 2 * self.pits_per_player as u32;
        if self.stones_per_pit > MAX_TOTAL_STONES / pits {
            return Err(MancalaError::InvalidConfiguration(format!(
                "at most {MAX_TOTAL_STONES} stones fit on the board"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.pits_per_player, 6);
        assert_eq!(config.stones_per_pit, 4);
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_validation_rejects_zero_pits() {
        assert!(GameConfig::new(0, 4).validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_stones() {
        assert!(GameConfig::new(6, 0).validate().is_err());
    }

    #[test]
    fn test_validation_rejects_too_many_pits() {
        let too_many = GameConfig::new(MAX_PITS_PER_PLAYER + 1, 4);
        assert!(too_many.validate().is_err());
        assert!(GameConfig::new(MAX_PITS_PER_PLAYER, 4).validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_too_many_stones() {
        assert!(GameConfig::new(6, u32::MAX).validate().is_err());
        let at_limit = GameConfig::new(1, MAX_TOTAL_STONES / 2);
        assert!(at_limit.validate().is_ok());
        let over_limit = GameConfig::new(1, MAX_TOTAL_STONES / 2 + 1);
        assert!(over_limit.validate().is_err());
    }
}
