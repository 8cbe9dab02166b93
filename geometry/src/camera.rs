use crate::{Matrix4, Point3, Scalar, Vector3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Point3,
    pub target: Point3,
    pub up: Vector3,
    /// Vertical field of view in degrees.
    pub fovy: Scalar,
}

impl Camera {
    pub const DEFAULT_FOVY: Scalar = 45.0;

    pub fn new(eye: impl Into<Point3>, target: impl Into<Point3>) -> Self {
        Self {
            eye: eye.into(),
            target: target.into(),
            up: Vector3::Y,
            fovy: Self::DEFAULT_FOVY,
        }
    }

    pub fn view_matrix(&self) -> Matrix4 {
        Matrix4::look_at_rh(self.eye, self.target, self.up)
    }
}
