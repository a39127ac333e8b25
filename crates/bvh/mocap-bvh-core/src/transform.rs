//! Quaternion helpers and the per-frame joint transform.
//!
//! Quaternions are plain `[f64; 4]` arrays in (x, y, z, w) component order.
//! The per-axis constructors take degrees (the unit of BVH rotation
//! samples) and apply the half-angle convention; composition is the
//! Hamilton product, applied in channel declaration order by the motion
//! grammar.

use serde::{Deserialize, Serialize};

/// The identity rotation (x, y, z, w).
pub const IDENTITY_QUAT: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

/// One joint's resolved pose for one frame: an accumulated rotation plus
/// the static offset with accumulated position samples folded in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointTransform {
    /// Rotation quaternion (x, y, z, w).
    pub rotation: [f64; 4],
    /// Translation (x, y, z).
    pub translation: [f64; 3],
}

impl JointTransform {
    /// The identity rotation at the given static offset; the seed every
    /// joint's channel samples are folded into.
    pub fn at_offset(offset: [f64; 3]) -> Self {
        JointTransform {
            rotation: IDENTITY_QUAT,
            translation: offset,
        }
    }
}

/// Hamilton product `a * b` of two (x, y, z, w) quaternions.
#[inline]
pub fn quat_mul(a: [f64; 4], b: [f64; 4]) -> [f64; 4] {
    [
        a[3] * b[0] + a[0] * b[3] + a[1] * b[2] - a[2] * b[1],
        a[3] * b[1] - a[0] * b[2] + a[1] * b[3] + a[2] * b[0],
        a[3] * b[2] + a[0] * b[1] - a[1] * b[0] + a[2] * b[3],
        a[3] * b[3] - a[0] * b[0] - a[1] * b[1] - a[2] * b[2],
    ]
}

#[inline]
fn half_angle(degrees: f64) -> (f64, f64) {
    (degrees.to_radians() * 0.5).sin_cos()
}

/// Rotation of `degrees` about the X axis.
#[inline]
pub fn quat_about_x(degrees: f64) -> [f64; 4] {
    let (sin, cos) = half_angle(degrees);
    [sin, 0.0, 0.0, cos]
}

/// Rotation of `degrees` about the Y axis.
#[inline]
pub fn quat_about_y(degrees: f64) -> [f64; 4] {
    let (sin, cos) = half_angle(degrees);
    [0.0, sin, 0.0, cos]
}

/// Rotation of `degrees` about the Z axis.
#[inline]
pub fn quat_about_z(degrees: f64) -> [f64; 4] {
    let (sin, cos) = half_angle(degrees);
    [0.0, 0.0, sin, cos]
}
