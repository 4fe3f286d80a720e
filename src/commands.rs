//! Movement command leaf operations.
//!
//! These are the leaf steps of the behavior layer. Each one overwrites the
//! caller-owned movement command so that only one motion axis is active:
//! a pure forward advance or a pure in-place turn. The consumer is the
//! motion-execution layer ([`crate::pose`]).

/// Movement command shared between the behavior layer and the
/// motion-execution layer.
///
/// `advance` is the commanded forward displacement in meters, `twist` the
/// commanded rotation in radians. The caller owns the structure for its
/// whole lifetime; the operations below only mutate an existing instance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MovementCommand {
    /// Commanded forward linear magnitude (meters)
    pub advance: f32,
    /// Commanded rotational magnitude (radians)
    pub twist: f32,
}

impl MovementCommand {
    /// An all-zero command (no motion).
    pub const fn zero() -> Self {
        Self {
            advance: 0.0,
            twist: 0.0,
        }
    }
}

/// Command a pure forward advance.
///
/// Sets `advance` to `max_advance` and zeroes `twist`. The magnitude is
/// passed through unvalidated; negative and non-finite values are
/// accepted as-is. Cannot fail.
pub fn advance(cmd: &mut MovementCommand, max_advance: f32) {
    cmd.advance = max_advance;
    cmd.twist = 0.0;

    tracing::debug!("inside advance");
}

/// Command a pure in-place turn.
///
/// Sets `twist` to `max_turn_angle` and zeroes `advance`. No validation,
/// cannot fail.
pub fn turn(cmd: &mut MovementCommand, max_turn_angle: f32) {
    cmd.advance = 0.0;
    cmd.twist = max_turn_angle;

    tracing::debug!("inside turn");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_sets_advance_and_zeroes_twist() {
        let mut cmd = MovementCommand::zero();
        advance(&mut cmd, 2.5);

        assert_eq!(cmd.advance, 2.5);
        assert_eq!(cmd.twist, 0.0);
    }

    #[test]
    fn test_turn_sets_twist_and_zeroes_advance() {
        let mut cmd = MovementCommand {
            advance: 2.5,
            twist: 0.0,
        };
        turn(&mut cmd, 1.2);

        assert_eq!(cmd.advance, 0.0);
        assert_eq!(cmd.twist, 1.2);
    }

    #[test]
    fn test_last_write_wins() {
        let mut cmd = MovementCommand::zero();

        advance(&mut cmd, 0.3);
        turn(&mut cmd, 0.7);
        assert_eq!(cmd, MovementCommand { advance: 0.0, twist: 0.7 });

        advance(&mut cmd, 0.1);
        assert_eq!(cmd, MovementCommand { advance: 0.1, twist: 0.0 });
    }

    #[test]
    fn test_no_accumulation_on_repeated_calls() {
        let mut cmd = MovementCommand::zero();

        advance(&mut cmd, 0.5);
        advance(&mut cmd, 0.5);
        assert_eq!(cmd.advance, 0.5);

        turn(&mut cmd, -0.25);
        turn(&mut cmd, -0.25);
        assert_eq!(cmd.twist, -0.25);
    }

    #[test]
    fn test_magnitudes_pass_through_unvalidated() {
        let mut cmd = MovementCommand::zero();

        advance(&mut cmd, -4.0);
        assert_eq!(cmd.advance, -4.0);

        turn(&mut cmd, f32::INFINITY);
        assert_eq!(cmd.twist, f32::INFINITY);

        advance(&mut cmd, f32::NAN);
        assert!(cmd.advance.is_nan());
        assert_eq!(cmd.twist, 0.0);
    }
}
