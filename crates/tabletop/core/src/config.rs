use crate::action::TransitionError;
use crate::state::Level;

/// Rules constants shared by transitions and catalog tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TabletopConfig;

impl TabletopConfig {
    /// Highest scenario and monster level.
    pub const MAX_LEVEL: Level = 7;

    /// Number of character levels covered by a hit-point table.
    pub const CHARACTER_LEVELS: usize = 9;

    pub fn check_level(level: Level) -> Result<(), TransitionError> {
        if level > Self::MAX_LEVEL {
            return Err(TransitionError::LevelOutOfRange {
                level,
                max: Self::MAX_LEVEL,
            });
        }
        Ok(())
    }
}
