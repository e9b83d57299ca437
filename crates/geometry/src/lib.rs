//! Planar Geometry Helpers
//!
//! Distance, heading and bearing computations in a scene-local planar frame.

mod error;
mod planar;

pub use error::GeometryError;
pub use planar::{bearing, distance, yaw, Position2D, Quaternion};
