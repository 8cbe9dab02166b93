use crate::{Matrix4, Scalar};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub aspect: Scalar,
    pub near: Scalar,
    pub far: Scalar,
}

impl Projection {
    pub fn new(aspect: Scalar, near: Scalar, far: Scalar) -> Self {
        Self { aspect, near, far }
    }

    /// Create a right-handed perspective projection matrix with a [0, 1] depth range.
    pub fn perspective_matrix(&self, fovy: Scalar) -> Matrix4 {
        Matrix4::perspective_rh(fovy.to_radians(), self.aspect, self.near, self.far)
    }
}
