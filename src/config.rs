//! Configuration loading for YantraSim

use serde::Deserialize;
use std::path::Path;

use crate::angles::parse_angle;
use crate::behavior::{Behavior, MotionParams};
use crate::canvas::CanvasConverter;
use crate::error::{Result, YantraError};

/// Main configuration structure
#[derive(Clone, Debug, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Motion magnitudes for the behavior leaves
#[derive(Clone, Debug, Deserialize)]
pub struct MotionConfig {
    /// Forward displacement per advance command in meters (default: 0.04)
    #[serde(default = "default_max_advance")]
    pub max_advance: f32,

    /// Rotation per turn command. Accepts the angle entry grammar:
    /// radians, `deg`/`d` or `pi` suffixed (default: 0.7857 rad)
    #[serde(default = "default_max_turn_angle")]
    pub max_turn_angle: String,
}

/// Simulation run settings
#[derive(Clone, Debug, Deserialize)]
pub struct SimulationConfig {
    /// Numbered behavior to run (default: 20, the advance accuracy
    /// behavior)
    #[serde(default = "default_behavior")]
    pub behavior: i32,

    /// Number of repetitions (default: 10)
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Start X position in meters (default: 0.0)
    #[serde(default)]
    pub start_x: f32,

    /// Start Y position in meters (default: 0.0)
    #[serde(default)]
    pub start_y: f32,

    /// Perturb commanded magnitudes with gaussian noise (default: false)
    #[serde(default)]
    pub add_noise: bool,

    /// Actuation noise standard deviation (default: 0.01)
    #[serde(default = "default_noise_stddev")]
    pub noise_stddev: f32,

    /// Random seed for reproducible noise, 0 = random each run
    #[serde(default)]
    pub random_seed: u64,
}

/// World-to-canvas display mapping
#[derive(Clone, Debug, Deserialize)]
pub struct CanvasConfig {
    /// World width in meters (default: 4.0)
    #[serde(default = "default_map_width")]
    pub map_width: f32,

    /// World height in meters (default: 5.0)
    #[serde(default = "default_map_height")]
    pub map_height: f32,

    /// Canvas width in pixels (default: 400)
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f32,

    /// Canvas height in pixels (default: 500)
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f32,
}

/// Output configuration
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Path for the recorded accuracy data file
    #[serde(default = "default_dat_path")]
    pub dat_path: String,
}

// Default value functions
fn default_max_advance() -> f32 {
    0.04
}
fn default_max_turn_angle() -> String {
    "0.7857".to_string()
}
fn default_behavior() -> i32 {
    crate::behavior::BEHAVIOR_TEST_ADVANCE
}
fn default_steps() -> usize {
    10
}
fn default_noise_stddev() -> f32 {
    0.01
}
fn default_map_width() -> f32 {
    4.0
}
fn default_map_height() -> f32 {
    5.0
}
fn default_canvas_width() -> f32 {
    400.0
}
fn default_canvas_height() -> f32 {
    500.0
}
fn default_dat_path() -> String {
    "output/accuracy.dat".to_string()
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            max_advance: default_max_advance(),
            max_turn_angle: default_max_turn_angle(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            behavior: default_behavior(),
            steps: default_steps(),
            start_x: 0.0,
            start_y: 0.0,
            add_noise: false,
            noise_stddev: default_noise_stddev(),
            random_seed: 0,
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            map_width: default_map_width(),
            map_height: default_map_height(),
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dat_path: default_dat_path(),
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            motion: MotionConfig::default(),
            simulation: SimulationConfig::default(),
            canvas: CanvasConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| YantraError::Config(format!("Failed to read config file: {}", e)))?;
        let config: SimConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the motion magnitudes, parsing the turn-angle entry.
    pub fn motion_params(&self) -> Result<MotionParams> {
        Ok(MotionParams {
            max_advance: self.motion.max_advance,
            max_turn_angle: parse_angle(&self.motion.max_turn_angle)?,
        })
    }

    /// Resolve the configured behavior id.
    pub fn behavior(&self) -> Result<Behavior> {
        Behavior::from_id(self.simulation.behavior)
    }

    /// Build the world-to-canvas converter for the configured map.
    pub fn converter(&self) -> CanvasConverter {
        CanvasConverter::new(
            0.0,
            self.canvas.map_width,
            0.0,
            self.canvas.map_height,
            self.canvas.canvas_width,
            self.canvas.canvas_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_resolve() {
        let config = SimConfig::default();
        let params = config.motion_params().unwrap();

        assert_relative_eq!(params.max_advance, 0.04);
        assert_relative_eq!(params.max_turn_angle, 0.7857);
        assert_eq!(config.behavior().unwrap(), Behavior::TestAdvance);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: SimConfig = toml::from_str(
            r#"
            [motion]
            max_turn_angle = "90deg"

            [simulation]
            behavior = 21
            steps = 25
            add_noise = true
            random_seed = 42
            "#,
        )
        .unwrap();

        let params = config.motion_params().unwrap();
        assert_relative_eq!(
            params.max_turn_angle,
            std::f32::consts::FRAC_PI_2,
            epsilon = 1e-6
        );
        // Unspecified fields keep their defaults
        assert_relative_eq!(params.max_advance, 0.04);
        assert_eq!(config.behavior().unwrap(), Behavior::TestTwist);
        assert_eq!(config.simulation.steps, 25);
        assert!(config.simulation.add_noise);
        assert_eq!(config.output.dat_path, "output/accuracy.dat");
    }

    #[test]
    fn test_bad_angle_entry_fails_resolution() {
        let config: SimConfig = toml::from_str(
            r#"
            [motion]
            max_turn_angle = "sideways"
            "#,
        )
        .unwrap();

        assert!(config.motion_params().is_err());
    }

    #[test]
    fn test_converter_uses_map_and_canvas_size() {
        let config = SimConfig::default();
        let converter = config.converter();

        // World origin lands on the bottom-left canvas corner
        let (cx, cy) = converter.to_canvas(0.0, 0.0);
        assert_relative_eq!(cx, 0.0);
        assert_relative_eq!(cy, 500.0);

        let (cx, cy) = converter.to_canvas(4.0, 5.0);
        assert_relative_eq!(cx, 400.0);
        assert_relative_eq!(cy, 0.0);
    }
}
