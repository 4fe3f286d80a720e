//! Robot pose and movement-command execution.
//!
//! This is the motion-execution layer that consumes movement commands.
//! A command turns the robot in place first, then displaces it along the
//! resulting heading, matching the simulator's step semantics.

use crate::angles::normalize_angle;
use crate::commands::MovementCommand;

/// Robot pose in the world frame.
///
/// Position in meters, heading in radians, CCW positive from +X.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    /// Heading in [-π, π]
    pub theta: f32,
}

impl Pose {
    /// Create a pose, normalizing the heading.
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self {
            x,
            y,
            theta: normalize_angle(theta),
        }
    }

    /// Pose at the origin facing +X.
    pub const fn origin() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }

    /// Execute one movement command.
    ///
    /// Rotates by `twist`, then advances by `advance` along the new
    /// heading.
    pub fn apply(&mut self, cmd: &MovementCommand) {
        self.theta = normalize_angle(self.theta + cmd.twist);
        self.x += cmd.advance * self.theta.cos();
        self.y += cmd.advance * self.theta.sin();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_advance_moves_along_heading() {
        let mut pose = Pose::origin();
        let mut cmd = MovementCommand::zero();

        commands::advance(&mut cmd, 2.5);
        pose.apply(&cmd);

        assert_relative_eq!(pose.x, 2.5);
        assert_relative_eq!(pose.y, 0.0);
        assert_relative_eq!(pose.theta, 0.0);
    }

    #[test]
    fn test_turn_rotates_in_place() {
        let mut pose = Pose::origin();
        let mut cmd = MovementCommand::zero();

        commands::turn(&mut cmd, FRAC_PI_2);
        pose.apply(&cmd);

        assert_relative_eq!(pose.x, 0.0);
        assert_relative_eq!(pose.y, 0.0);
        assert_relative_eq!(pose.theta, FRAC_PI_2);
    }

    #[test]
    fn test_turn_then_advance_displaces_along_new_heading() {
        let mut pose = Pose::origin();
        let mut cmd = MovementCommand::zero();

        commands::turn(&mut cmd, FRAC_PI_2);
        pose.apply(&cmd);
        commands::advance(&mut cmd, 1.0);
        pose.apply(&cmd);

        assert_relative_eq!(pose.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(pose.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_combined_command_turns_before_displacing() {
        // A command carrying both axes rotates first, then advances
        // along the post-turn heading.
        let mut pose = Pose::origin();
        let cmd = MovementCommand {
            advance: 1.0,
            twist: PI,
        };

        pose.apply(&cmd);

        assert_relative_eq!(pose.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(pose.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_heading_stays_normalized() {
        let mut pose = Pose::new(0.0, 0.0, 3.0);
        let cmd = MovementCommand {
            advance: 0.0,
            twist: 1.0,
        };

        pose.apply(&cmd);

        // 3.0 + 1.0 wraps past π
        assert_relative_eq!(pose.theta, 4.0 - 2.0 * PI, epsilon = 1e-6);
    }
}
