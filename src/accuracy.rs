//! Behavior accuracy tests.
//!
//! Runs a motion behavior repeatedly from a known start pose and compares
//! the expected result of each command against the executed one. Each
//! repetition starts over from the configured position with a zeroed
//! heading, so every recorded pair measures a single command. The raw
//! pairs can be saved as a whitespace-separated `.dat` file for offline
//! plotting.

use std::io::Write;
use std::path::Path;

use crate::angles::format_real;
use crate::behavior::{Behavior, MotionParams};
use crate::commands::MovementCommand;
use crate::error::{Result, YantraError};
use crate::noise::NoiseGenerator;
use crate::pose::Pose;
use crate::stats::error_stats;

/// Which motion axis a test exercises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestKind {
    /// Forward displacement accuracy
    Advance,
    /// In-place rotation accuracy
    Turn,
}

impl TestKind {
    /// The behavior that drives this test.
    pub fn behavior(self) -> Behavior {
        match self {
            Self::Advance => Behavior::TestAdvance,
            Self::Turn => Behavior::TestTwist,
        }
    }

    /// The test a behavior corresponds to, if it is an accuracy behavior.
    pub fn from_behavior(behavior: Behavior) -> Option<Self> {
        match behavior {
            Behavior::TestAdvance => Some(Self::Advance),
            Behavior::TestTwist => Some(Self::Turn),
            Behavior::Stop => None,
        }
    }
}

/// Error statistics for one tracked quantity.
#[derive(Clone, Copy, Debug)]
pub struct QuantityStats {
    pub label: &'static str,
    pub err_mean: f32,
    pub err_var: f32,
}

/// Recorded (expected, actual) pairs.
#[derive(Clone, Debug)]
pub enum AccuracyData {
    /// Heading pairs from a turn test
    Turn(Vec<(f32, f32)>),
    /// X and Y pairs from an advance test
    Advance {
        x: Vec<(f32, f32)>,
        y: Vec<(f32, f32)>,
    },
}

/// Result of an accuracy run.
#[derive(Clone, Debug)]
pub struct AccuracyReport {
    pub kind: TestKind,
    pub data: AccuracyData,
    pub summary: Vec<QuantityStats>,
}

/// Accuracy test runner.
pub struct AccuracyTest {
    kind: TestKind,
    params: MotionParams,
    steps: usize,
    start_x: f32,
    start_y: f32,
    noise: Option<(NoiseGenerator, f32)>,
}

impl AccuracyTest {
    /// Create a runner for `steps` repetitions.
    ///
    /// At least three repetitions are required for the error variance
    /// divisor.
    pub fn new(kind: TestKind, params: MotionParams, steps: usize) -> Result<Self> {
        if steps < 3 {
            return Err(YantraError::InvalidParameter(format!(
                "accuracy test needs at least 3 steps, got {}",
                steps
            )));
        }
        Ok(Self {
            kind,
            params,
            steps,
            start_x: 0.0,
            start_y: 0.0,
            noise: None,
        })
    }

    /// Set the start position (heading is always zeroed per repetition).
    pub fn with_start(mut self, x: f32, y: f32) -> Self {
        self.start_x = x;
        self.start_y = y;
        self
    }

    /// Perturb the commanded magnitude with gaussian noise.
    pub fn with_noise(mut self, generator: NoiseGenerator, stddev: f32) -> Self {
        self.noise = Some((generator, stddev));
        self
    }

    /// Run the repetitions and collect the report.
    pub fn run(mut self) -> AccuracyReport {
        let behavior = self.kind.behavior();
        tracing::info!(
            "Accuracy test: behavior {}, {} steps",
            behavior.id(),
            self.steps
        );

        match self.kind {
            TestKind::Turn => self.run_turn(behavior),
            TestKind::Advance => self.run_advance(behavior),
        }
    }

    fn run_turn(&mut self, behavior: Behavior) -> AccuracyReport {
        let expected = self.params.max_turn_angle;
        let mut pairs = Vec::with_capacity(self.steps);

        for _ in 0..self.steps {
            let mut pose = Pose::new(self.start_x, self.start_y, 0.0);
            let mut cmd = MovementCommand::zero();

            behavior.step(&mut cmd, &self.params);
            self.perturb(&mut cmd);
            pose.apply(&cmd);

            pairs.push((expected, pose.theta));
        }

        let (err_mean, err_var) = error_stats(&pairs);
        AccuracyReport {
            kind: TestKind::Turn,
            data: AccuracyData::Turn(pairs),
            summary: vec![QuantityStats {
                label: "theta",
                err_mean,
                err_var,
            }],
        }
    }

    fn run_advance(&mut self, behavior: Behavior) -> AccuracyReport {
        // With the heading zeroed, the whole displacement lands on X
        let expected_x = self.start_x + self.params.max_advance;
        let expected_y = self.start_y;

        let mut pairs_x = Vec::with_capacity(self.steps);
        let mut pairs_y = Vec::with_capacity(self.steps);

        for _ in 0..self.steps {
            let mut pose = Pose::new(self.start_x, self.start_y, 0.0);
            let mut cmd = MovementCommand::zero();

            behavior.step(&mut cmd, &self.params);
            self.perturb(&mut cmd);
            pose.apply(&cmd);

            pairs_x.push((expected_x, pose.x));
            pairs_y.push((expected_y, pose.y));
        }

        let (x_mean, x_var) = error_stats(&pairs_x);
        let (y_mean, y_var) = error_stats(&pairs_y);
        AccuracyReport {
            kind: TestKind::Advance,
            data: AccuracyData::Advance {
                x: pairs_x,
                y: pairs_y,
            },
            summary: vec![
                QuantityStats {
                    label: "x",
                    err_mean: x_mean,
                    err_var: x_var,
                },
                QuantityStats {
                    label: "y",
                    err_mean: y_mean,
                    err_var: y_var,
                },
            ],
        }
    }

    /// Add actuation noise to the active axis of the command.
    fn perturb(&mut self, cmd: &mut MovementCommand) {
        if let Some((generator, stddev)) = &mut self.noise {
            match self.kind {
                TestKind::Advance => cmd.advance += generator.gaussian(*stddev),
                TestKind::Turn => cmd.twist += generator.gaussian(*stddev),
            }
        }
    }
}

/// Write the recorded pairs as a whitespace-separated `.dat` file.
pub fn save_dat(report: &AccuracyReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)?;

    match &report.data {
        AccuracyData::Turn(pairs) => {
            writeln!(file, "Expected Real")?;
            for (expected, real) in pairs {
                writeln!(file, "{} {}", format_real(*expected), format_real(*real))?;
            }
        }
        AccuracyData::Advance { x, y } => {
            writeln!(file, "Expected_X Expected_Y Real_X Real_Y")?;
            for ((ex, rx), (ey, ry)) in x.iter().zip(y) {
                writeln!(
                    file,
                    "{} {} {} {}",
                    format_real(*ex),
                    format_real(*ey),
                    format_real(*rx),
                    format_real(*ry)
                )?;
            }
        }
    }

    Ok(())
}
