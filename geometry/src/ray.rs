use crate::{EPSILON, Plane, Point3, Scalar, Vector3};

// Ray in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub dir: Vector3,
}

impl Ray {
    pub fn new(origin: impl Into<Point3>, dir: impl Into<Vector3>) -> Self {
        Self {
            origin: origin.into(),
            dir: dir.into(),
        }
    }

    pub fn from_points(origin: impl Into<Point3>, target: impl Into<Point3>) -> Option<Self> {
        let origin = origin.into();
        let target = target.into();

        let dir = target - origin;
        if dir.length_squared() < EPSILON * 1e-6 {
            return None;
        }
        Some(Self::new(origin, dir.normalize()))
    }

    pub fn at(&self, t: Scalar) -> Point3 {
        self.origin + self.dir * t
    }

    /// The ray parameter at which the plane is hit, `None` if it is missed.
    ///
    /// A ray that starts on a parallel plane hits at `0`.
    pub fn distance_to_plane(&self, plane: &Plane) -> Option<Scalar> {
        let denom = plane.normal.dot(self.dir);
        if denom == 0.0 {
            return (plane.distance_to_point(self.origin) == 0.0).then_some(0.0);
        }
        let t = -plane.distance_to_point(self.origin) / denom;
        (t >= 0.0).then_some(t)
    }

    pub fn intersect_plane(&self, plane: &Plane) -> Option<Point3> {
        self.distance_to_plane(plane).map(|t| self.at(t))
    }
}
