use serde_tuple::{Deserialize_tuple, Serialize_tuple};

use crate::{Contains, Plane, Point3, Vector3};

/// An axis aligned box.
#[derive(Debug, Copy, Clone, PartialEq, Serialize_tuple, Deserialize_tuple)]
pub struct Bounds3 {
    pub min: Point3,
    pub max: Point3,
}

impl Bounds3 {
    pub fn new(min: impl Into<Point3>, max: impl Into<Point3>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    /// The smallest box containing all points, `None` if there are none.
    pub fn from_points(points: impl IntoIterator<Item = Point3>) -> Option<Self> {
        points.into_iter().fold(None, |current, p| {
            Some(match current {
                Some(Bounds3 { min, max }) => Self::new(min.min(p), max.max(p)),
                None => Self::new(p, p),
            })
        })
    }

    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    /// `true` if the plane passes through or touches the box.
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        // Project the box's extreme corners onto the normal and check if the plane's offset lies
        // in between.
        let n = plane.normal;
        let (mut min, mut max) = (0.0, 0.0);
        for axis in 0..3 {
            if n[axis] > 0.0 {
                min += n[axis] * self.min[axis];
                max += n[axis] * self.max[axis];
            } else {
                min += n[axis] * self.max[axis];
                max += n[axis] * self.min[axis];
            }
        }
        min <= -plane.constant && max >= -plane.constant
    }
}

impl Contains<Point3> for Bounds3 {
    fn contains(&self, point: Point3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube() -> Bounds3 {
        Bounds3::new(Vector3::ZERO, Vector3::ONE)
    }

    #[test]
    fn from_points_encloses_all() {
        let bounds = Bounds3::from_points([
            Vector3::new(1.0, -2.0, 3.0),
            Vector3::new(-1.0, 4.0, 0.0),
            Vector3::new(0.5, 0.5, 5.0),
        ])
        .unwrap();
        assert_eq!(bounds.min, Vector3::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, Vector3::new(1.0, 4.0, 5.0));
        assert_eq!(bounds.size(), Vector3::new(2.0, 6.0, 5.0));
        assert_eq!(bounds.center(), Vector3::new(0.0, 1.0, 2.5));

        assert_eq!(Bounds3::from_points([]), None);
    }

    #[test]
    fn contains_includes_the_boundary() {
        let cube = unit_cube();
        assert!(cube.contains(Vector3::splat(0.5)));
        assert!(cube.contains(Vector3::ONE));
        assert!(!cube.contains(Vector3::new(0.5, 1.5, 0.5)));
    }

    #[test]
    fn intersects_plane() {
        let cube = unit_cube();
        assert!(cube.intersects_plane(&Plane::new(Vector3::X, -0.5)));
        assert!(cube.intersects_plane(&Plane::new(Vector3::NEG_X, 0.5)));
        // Touching a face.
        assert!(cube.intersects_plane(&Plane::new(Vector3::Y, -1.0)));
        assert!(!cube.intersects_plane(&Plane::new(Vector3::Z, -2.0)));

        let diagonal = Plane::new(Vector3::ONE, 0.0).normalized().unwrap();
        assert!(diagonal.intersects_bounds(&cube));
        assert!(!diagonal.translated(Vector3::splat(-0.1)).intersects_bounds(&cube));
    }
}
