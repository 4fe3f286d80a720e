//! Angle utilities shared across the simulator.

use std::f32::consts::PI;

use crate::error::{Result, YantraError};

/// Normalize angle to [-π, π]
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle;
    while a > PI {
        a -= 2.0 * PI;
    }
    while a < -PI {
        a += 2.0 * PI;
    }
    a
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}

/// Convert multiples of π to radians.
#[inline]
pub fn pirad_to_rad(pirad: f32) -> f32 {
    pirad * PI
}

/// Parse an angle entry into radians.
///
/// Plain values are radians. A `deg` or `d` suffix marks degrees, a `pi`
/// suffix marks multiples of π: `"90deg"`, `"45d"`, `"0.5pi"`, `"1.5708"`.
pub fn parse_angle(entry: &str) -> Result<f32> {
    let trimmed = entry.trim();

    let (value, convert): (&str, fn(f32) -> f32) = if let Some(v) = trimmed.strip_suffix("deg") {
        (v, deg_to_rad)
    } else if let Some(v) = trimmed.strip_suffix("pi") {
        (v, pirad_to_rad)
    } else if let Some(v) = trimmed.strip_suffix('d') {
        (v, deg_to_rad)
    } else {
        (trimmed, |rad| rad)
    };

    value
        .trim()
        .parse::<f32>()
        .map(convert)
        .map_err(|_| YantraError::InvalidParameter(format!("bad angle entry '{}'", entry)))
}

/// Format a value the way recorded test data expects it (4 decimals).
pub fn format_real(val: f32) -> String {
    format!("{:.4}", val)
}
