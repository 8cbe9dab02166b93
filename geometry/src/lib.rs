//! Geometry primitives of the scene core: planes, segments, spheres, boxes and frustums.

mod bounds3;
mod camera;
mod depth_range;
mod error;
mod frustum;
mod line;
mod plane;
mod projection;
mod ray;
mod sphere;

pub use bounds3::*;
pub use camera::*;
pub use depth_range::*;
pub use error::*;
pub use frustum::*;
pub use line::*;
pub use plane::*;
pub use projection::*;
pub use ray::*;
pub use sphere::*;

/// All geometry is computed in single precision to stay bit compatible with the renderer.
pub type Scalar = f32;

pub const EPSILON: Scalar = Scalar::EPSILON;

pub type Matrix3 = glam::Mat3;
pub type Matrix4 = glam::Mat4;
pub type Vector3 = glam::Vec3;
pub type Vector4 = glam::Vec4;
pub type Quaternion = glam::Quat;
pub type Point3 = Vector3;

pub trait Contains<Other> {
    fn contains(&self, other: Other) -> bool;
}
