//! YantraSim - Behavior and motion core for a mobile-robot simulator
//!
//! This library provides the movement-command layer of a differential
//! drive robot simulator:
//!
//! - [`commands`]: the leaf operations that overwrite the shared
//!   movement command (pure advance / pure in-place turn)
//! - [`behavior`]: numbered behavior dispatch onto those leaves
//! - [`pose`]: the kinematic executor consuming the commands
//! - [`accuracy`]: the behavior accuracy test workflow with recorded
//!   expected-versus-executed pairs
//!
//! Supporting modules cover angle entry parsing ([`angles`]), world to
//! canvas display mapping ([`canvas`]), error statistics ([`stats`]),
//! seeded actuation noise ([`noise`]) and TOML configuration
//! ([`config`]). Everything is synchronous and single-threaded; callers
//! own the command structure and any concurrency discipline around it.

pub mod accuracy;
pub mod angles;
pub mod behavior;
pub mod canvas;
pub mod commands;
pub mod config;
pub mod error;
pub mod noise;
pub mod pose;
pub mod stats;

// Re-export commonly used types
pub use behavior::{Behavior, MotionParams};
pub use commands::MovementCommand;
pub use config::SimConfig;
pub use error::{Result, YantraError};
pub use pose::Pose;
