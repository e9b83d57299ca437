//! Distance, yaw and bearing

use crate::error::GeometryError;
use serde::{Deserialize, Serialize};

/// Point in the scene-local planar frame (meters)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position2D {
    pub x: f64,
    pub y: f64,
}

impl Position2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Position2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Orientation as a quaternion, scalar first: `[w, x, y, z]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Pure rotation about the vertical axis
    pub fn from_yaw(yaw_rad: f64) -> Self {
        let half = yaw_rad / 2.0;
        Self::new(half.cos(), 0.0, 0.0, half.sin())
    }

    pub fn norm(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    fn normalized(&self) -> Result<Self, GeometryError> {
        let norm = self.norm();
        if !norm.is_finite() || norm <= f64::EPSILON {
            return Err(GeometryError::InvalidOrientation { norm });
        }
        Ok(Self::new(
            self.w / norm,
            self.x / norm,
            self.y / norm,
            self.z / norm,
        ))
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from([w, x, y, z]: [f64; 4]) -> Self {
        Self { w, x, y, z }
    }
}

/// Euclidean distance between two points
pub fn distance(a: Position2D, b: Position2D) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Planar heading (radians) of an orientation.
///
/// Computed as `atan2(R[1,0], R[0,0])` of the rotation matrix, so pitch and
/// roll are ignored.
pub fn yaw(orientation: &Quaternion) -> Result<f64, GeometryError> {
    let q = orientation.normalized()?;
    let r10 = 2.0 * (q.x * q.y + q.w * q.z);
    let r00 = 1.0 - 2.0 * (q.y * q.y + q.z * q.z);
    Ok(r10.atan2(r00))
}

/// Signed angle (degrees) from the ego forward vector to `target`.
///
/// Counter-clockwise positive, in `(-180, 180]`.
pub fn bearing(ego_pos: Position2D, ego_yaw: f64, target: Position2D) -> f64 {
    let vx = target.x - ego_pos.x;
    let vy = target.y - ego_pos.y;
    let fx = ego_yaw.cos();
    let fy = ego_yaw.sin();

    let dot = fx * vx + fy * vy;
    let cross = fx * vy - fy * vx;
    let deg = cross.atan2(dot).to_degrees();

    // atan2 yields -pi for a negative-zero cross product
    if deg <= -180.0 {
        180.0
    } else {
        deg
    }
}
