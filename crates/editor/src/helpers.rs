//! Helpers for the presentation boundary
//!
//! Properties panels show rotations in whole degrees and use stepped number
//! inputs; these functions convert such input into part patches.

use shared::{PartPatch, Vec3, Vec3Patch};

/// Decimal places kept by number inputs
pub const INPUT_PRECISION: i32 = 3;

/// Transform axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn all() -> [Axis; 3] {
        [Axis::X, Axis::Y, Axis::Z]
    }

    /// Patch touching only this axis
    pub fn patch(&self, value: f64) -> Vec3Patch {
        match self {
            Axis::X => Vec3Patch::x(value),
            Axis::Y => Vec3Patch::y(value),
            Axis::Z => Vec3Patch::z(value),
        }
    }

    /// Component of `v` on this axis
    pub fn get(&self, v: &Vec3) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Whole degrees as shown in the properties panel
pub fn radians_to_display_degrees(radians: f64) -> f64 {
    radians.to_degrees().round()
}

/// Round to [`INPUT_PRECISION`] decimal places
pub fn round_to_precision(value: f64) -> f64 {
    let factor = 10f64.powi(INPUT_PRECISION);
    (value * factor).round() / factor
}

/// Snap to the nearest multiple of `step` (unchanged for non-positive steps)
pub fn snap_to_step(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    round_to_precision((value / step).round() * step)
}

/// Clamp with optional bounds
pub fn clamp_optional(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let mut v = value;
    if let Some(min) = min {
        v = v.max(min);
    }
    if let Some(max) = max {
        v = v.min(max);
    }
    v
}

/// Position edit on one axis
pub fn position_patch(axis: Axis, value: f64) -> PartPatch {
    PartPatch::position(axis.patch(value))
}

/// Rotation edit on one axis, entered in degrees
pub fn rotation_degrees_patch(axis: Axis, degrees: f64) -> PartPatch {
    PartPatch::rotation(axis.patch(degrees_to_radians(degrees)))
}

/// Scale edit on one axis
pub fn scale_patch(axis: Axis, value: f64) -> PartPatch {
    PartPatch::scale(axis.patch(value))
}
