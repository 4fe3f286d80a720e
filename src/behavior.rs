//! Numbered behavior dispatch.
//!
//! The simulator selects behaviors by numeric id. This module maps those
//! ids onto the movement-command leaf operations; each step overwrites the
//! shared command, it never accumulates.

use crate::commands::{self, MovementCommand};
use crate::error::{Result, YantraError};

/// Behavior id for the stop behavior.
pub const BEHAVIOR_STOP: i32 = 0;
/// Behavior id for the advance accuracy behavior.
pub const BEHAVIOR_TEST_ADVANCE: i32 = 20;
/// Behavior id for the twist accuracy behavior.
pub const BEHAVIOR_TEST_TWIST: i32 = 21;

/// Motion magnitudes handed to the leaf operations.
#[derive(Clone, Copy, Debug)]
pub struct MotionParams {
    /// Forward displacement per advance command (meters)
    pub max_advance: f32,
    /// Rotation per turn command (radians)
    pub max_turn_angle: f32,
}

/// A behavior the simulator can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// Zero both motion axes
    Stop,
    /// Pure forward advance
    TestAdvance,
    /// Pure in-place turn
    TestTwist,
}

impl Behavior {
    /// Resolve a numbered behavior id.
    pub fn from_id(id: i32) -> Result<Self> {
        match id {
            BEHAVIOR_STOP => Ok(Self::Stop),
            BEHAVIOR_TEST_ADVANCE => Ok(Self::TestAdvance),
            BEHAVIOR_TEST_TWIST => Ok(Self::TestTwist),
            other => Err(YantraError::UnknownBehavior(other)),
        }
    }

    /// The numeric id of this behavior.
    pub fn id(self) -> i32 {
        match self {
            Self::Stop => BEHAVIOR_STOP,
            Self::TestAdvance => BEHAVIOR_TEST_ADVANCE,
            Self::TestTwist => BEHAVIOR_TEST_TWIST,
        }
    }

    /// Run one behavior step, overwriting `cmd` with this behavior's
    /// command.
    pub fn step(self, cmd: &mut MovementCommand, params: &MotionParams) {
        match self {
            Self::Stop => *cmd = MovementCommand::zero(),
            Self::TestAdvance => commands::advance(cmd, params.max_advance),
            Self::TestTwist => commands::turn(cmd, params.max_turn_angle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> MotionParams {
        MotionParams {
            max_advance: 0.04,
            max_turn_angle: 0.7857,
        }
    }

    #[test]
    fn test_id_roundtrip() {
        for behavior in [Behavior::Stop, Behavior::TestAdvance, Behavior::TestTwist] {
            assert_eq!(Behavior::from_id(behavior.id()).unwrap(), behavior);
        }
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        assert!(matches!(
            Behavior::from_id(99),
            Err(YantraError::UnknownBehavior(99))
        ));
    }

    #[test]
    fn test_step_dispatches_to_leaves() {
        let mut cmd = MovementCommand::zero();

        Behavior::TestAdvance.step(&mut cmd, &params());
        assert_eq!(cmd.advance, 0.04);
        assert_eq!(cmd.twist, 0.0);

        Behavior::TestTwist.step(&mut cmd, &params());
        assert_eq!(cmd.advance, 0.0);
        assert_eq!(cmd.twist, 0.7857);

        Behavior::Stop.step(&mut cmd, &params());
        assert_eq!(cmd, MovementCommand::zero());
    }
}
