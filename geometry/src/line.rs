use approx::{AbsDiffEq, RelativeEq};
use prism_util::{Field, StructuredText};
use serde_tuple::{Deserialize_tuple, Serialize_tuple};

use crate::{Matrix4, Point3, Scalar, Vector3};

/// A directed segment from `start` to `end`.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize_tuple, Deserialize_tuple)]
pub struct Line3 {
    pub start: Point3,
    pub end: Point3,
}

impl Line3 {
    pub fn new(start: impl Into<Point3>, end: impl Into<Point3>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn delta(&self) -> Vector3 {
        self.end - self.start
    }

    /// The point at parameter `t`, `0` being `start` and `1` being `end`.
    ///
    /// `t` is not restricted to the segment.
    pub fn at(&self, t: Scalar) -> Point3 {
        self.start + self.delta() * t
    }

    pub fn center(&self) -> Point3 {
        (self.start + self.end) * 0.5
    }

    pub fn length(&self) -> Scalar {
        self.delta().length()
    }

    pub fn length_squared(&self) -> Scalar {
        self.delta().length_squared()
    }

    /// The parameter of the point on the line closest to `point`.
    ///
    /// With `clamp` the result is restricted to the segment. A zero length segment returns `0`.
    pub fn closest_point_to_point_parameter(&self, point: Point3, clamp: bool) -> Scalar {
        let delta = self.delta();
        let length_squared = delta.length_squared();
        if length_squared == 0.0 {
            return 0.0;
        }
        let t = (point - self.start).dot(delta) / length_squared;
        if clamp { t.clamp(0.0, 1.0) } else { t }
    }

    pub fn closest_point_to_point(&self, point: Point3, clamp: bool) -> Point3 {
        self.at(self.closest_point_to_point_parameter(point, clamp))
    }

    pub fn apply_matrix(&mut self, matrix: &Matrix4) -> &mut Self {
        self.start = matrix.transform_point3(self.start);
        self.end = matrix.transform_point3(self.end);
        self
    }
}

impl From<Line3> for (Point3, Point3) {
    fn from(l: Line3) -> Self {
        (l.start, l.end)
    }
}

impl From<(Point3, Point3)> for Line3 {
    fn from((start, end): (Point3, Point3)) -> Self {
        Self::new(start, end)
    }
}

impl StructuredText for Line3 {
    fn type_name(&self) -> &'static str {
        "Line3"
    }

    fn fields(&self) -> Vec<Field> {
        vec![Field::new("start", self.start), Field::new("end", self.end)]
    }
}

impl AbsDiffEq for Line3 {
    type Epsilon = Scalar;

    fn default_epsilon() -> Scalar {
        Scalar::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Scalar) -> bool {
        self.start.abs_diff_eq(other.start, epsilon) && self.end.abs_diff_eq(other.end, epsilon)
    }
}

impl RelativeEq for Line3 {
    fn default_max_relative() -> Scalar {
        Scalar::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Scalar, max_relative: Scalar) -> bool {
        self.start.relative_eq(&other.start, epsilon, max_relative)
            && self.end.relative_eq(&other.end, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn line() -> Line3 {
        Line3::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(3.0, 2.0, 3.0))
    }

    #[test]
    fn delta_points_from_start_to_end() {
        assert_eq!(line().delta(), Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(line().length(), 2.0);
        assert_eq!(line().length_squared(), 4.0);
    }

    #[test]
    fn at_and_center() {
        let l = line();
        assert_eq!(l.at(0.0), l.start);
        assert_eq!(l.at(1.0), l.end);
        assert_eq!(l.at(-1.0), Vector3::new(-1.0, 2.0, 3.0));
        assert_eq!(l.center(), Vector3::new(2.0, 2.0, 3.0));
    }

    #[test]
    fn closest_point_clamps_to_the_segment() {
        let l = line();
        let beyond_end = Vector3::new(10.0, 5.0, 3.0);

        assert_eq!(l.closest_point_to_point_parameter(beyond_end, false), 4.5);
        assert_eq!(l.closest_point_to_point_parameter(beyond_end, true), 1.0);
        assert_eq!(l.closest_point_to_point(beyond_end, true), l.end);
        assert_eq!(
            l.closest_point_to_point(Vector3::new(2.5, -7.0, 0.0), true),
            Vector3::new(2.5, 2.0, 3.0)
        );
    }

    #[test]
    fn zero_length_segment_has_parameter_zero() {
        let p = Vector3::new(1.0, 1.0, 1.0);
        let l = Line3::new(p, p);
        assert_eq!(l.closest_point_to_point_parameter(Vector3::ZERO, false), 0.0);
        assert_eq!(l.closest_point_to_point(Vector3::ZERO, true), p);
    }

    #[test]
    fn apply_matrix_transforms_both_endpoints() {
        let mut l = line();
        let matrix = Matrix4::from_translation(Vector3::new(0.0, 0.0, -3.0))
            * Matrix4::from_scale(Vector3::splat(2.0));
        l.apply_matrix(&matrix);
        assert_abs_diff_eq!(
            l,
            Line3::new(Vector3::new(2.0, 4.0, 3.0), Vector3::new(6.0, 4.0, 3.0)),
            epsilon = 1e-6
        );
    }

    #[test]
    fn tuple_conversions() {
        let l: Line3 = (Vector3::X, Vector3::Y).into();
        let (start, end) = l.into();
        assert_eq!((start, end), (Vector3::X, Vector3::Y));
    }

    #[test]
    fn serializes_as_tuple() {
        let json = serde_json::to_string(&Line3::new(Vector3::ZERO, Vector3::Z)).unwrap();
        assert_eq!(json, "[[0.0,0.0,0.0],[0.0,0.0,1.0]]");
        let back: Line3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Line3::new(Vector3::ZERO, Vector3::Z));
    }
}
