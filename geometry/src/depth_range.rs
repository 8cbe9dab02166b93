use crate::Scalar;

/// The normalized device depth range a projection maps `near` and `far` to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthRange {
    pub near: Scalar,
    pub far: Scalar,
}

impl DepthRange {
    /// wgpu, Vulkan, Direct3D and glam's `*_rh` / `*_lh` projections.
    pub const ZERO_TO_ONE: Self = Self::new(0.0, 1.0);
    /// OpenGL style projections.
    pub const MINUS_ONE_TO_ONE: Self = Self::new(-1.0, 1.0);

    pub const fn new(near: Scalar, far: Scalar) -> Self {
        Self { near, far }
    }
}

impl Default for DepthRange {
    fn default() -> Self {
        Self::ZERO_TO_ONE
    }
}

impl From<(Scalar, Scalar)> for DepthRange {
    fn from((near, far): (Scalar, Scalar)) -> Self {
        Self::new(near, far)
    }
}
