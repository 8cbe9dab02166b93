use approx::{AbsDiffEq, RelativeEq};
use prism_util::{Field, StructuredText};
use serde_tuple::{Deserialize_tuple, Serialize_tuple};

use crate::{Bounds3, GeometryError, Line3, Matrix3, Matrix4, Point3, Scalar, Sphere, Vector3};

/// A plane in Hessian normal form: all points `p` with `normal · p + constant == 0`.
///
/// The normal is _not_ guaranteed to be of unit length. Construction from raw coefficients,
/// [`Plane::from_normal_and_coplanar_point`] and [`Plane::apply_matrix`] keep whatever length
/// they are given or produce. Distances are only Euclidean for unit normals, use
/// [`Plane::normalize`] or [`Plane::normalized`] where this matters.
///
/// `PartialEq` is exact, there is no tolerance involved. Use the `approx` traits for that.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize_tuple, Deserialize_tuple)]
pub struct Plane {
    pub normal: Vector3,
    pub constant: Scalar,
}

impl Plane {
    pub fn new(normal: impl Into<Vector3>, constant: Scalar) -> Self {
        Self {
            normal: normal.into(),
            constant,
        }
    }

    /// A plane from the coefficients of `x·a + y·b + z·c + w = 0`.
    pub const fn from_coefficients(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self {
            normal: Vector3::new(x, y, z),
            constant: w,
        }
    }

    pub fn from_normal_and_coplanar_point(
        normal: impl Into<Vector3>,
        point: impl Into<Point3>,
    ) -> Self {
        let mut plane = Self::default();
        plane.set_from_normal_and_coplanar_point(normal, point);
        plane
    }

    /// See [`Plane::set_from_coplanar_points`].
    pub fn from_coplanar_points(a: Point3, b: Point3, c: Point3) -> Result<Self, GeometryError> {
        let mut plane = Self::default();
        plane.set_from_coplanar_points(a, b, c)?;
        Ok(plane)
    }

    pub fn set(&mut self, normal: impl Into<Vector3>, constant: Scalar) -> &mut Self {
        self.normal = normal.into();
        self.constant = constant;
        self
    }

    pub fn set_coefficients(&mut self, x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> &mut Self {
        self.set(Vector3::new(x, y, z), w)
    }

    /// Sets the plane so that it passes through `point`. `normal` is used as is.
    pub fn set_from_normal_and_coplanar_point(
        &mut self,
        normal: impl Into<Vector3>,
        point: impl Into<Point3>,
    ) -> &mut Self {
        let normal = normal.into();
        let point: Point3 = point.into();
        self.normal = normal;
        self.constant = (-point).dot(normal);
        self
    }

    /// Sets the plane through three points. The normal is of unit length and its orientation
    /// follows the right-handed winding of `a`, `b`, `c`.
    ///
    /// Collinear points fail with [`GeometryError::DegenerateNormal`] and leave the plane
    /// unchanged.
    pub fn set_from_coplanar_points(
        &mut self,
        a: Point3,
        b: Point3,
        c: Point3,
    ) -> Result<&mut Self, GeometryError> {
        let normal = (c - b)
            .cross(a - b)
            .try_normalize()
            .ok_or(GeometryError::DegenerateNormal)?;
        Ok(self.set_from_normal_and_coplanar_point(normal, a))
    }

    /// Scales normal and constant so that the normal is of unit length.
    ///
    /// A zero or non-finite normal fails with [`GeometryError::DegenerateNormal`] and leaves the
    /// plane unchanged.
    pub fn normalize(&mut self) -> Result<&mut Self, GeometryError> {
        let length = self.normal.length();
        if length == 0.0 || !length.is_finite() {
            return Err(GeometryError::DegenerateNormal);
        }
        let inverse_length = 1.0 / length;
        self.normal *= inverse_length;
        self.constant *= inverse_length;
        Ok(self)
    }

    pub fn normalized(mut self) -> Result<UnitPlane, GeometryError> {
        self.normalize()?;
        Ok(UnitPlane(self))
    }

    /// Flips the orientation. The plane's surface stays the same.
    pub fn negate(&mut self) -> &mut Self {
        self.normal = -self.normal;
        self.constant = -self.constant;
        self
    }

    /// Moves the plane by `offset` without changing its orientation.
    pub fn translate(&mut self, offset: Vector3) -> &mut Self {
        self.constant -= offset.dot(self.normal);
        self
    }

    /// Transforms the plane by an affine matrix.
    ///
    /// The normal is transformed by the inverse transpose of the matrix's linear part, so
    /// non-uniform scale and shear are handled, but the resulting normal is generally not of unit
    /// length anymore.
    ///
    /// Fails with [`GeometryError::SingularMatrix`] if the linear part can not be inverted and
    /// with [`GeometryError::DegenerateNormal`] if the plane has a zero normal. The plane is left
    /// unchanged in both cases.
    pub fn apply_matrix(&mut self, matrix: &Matrix4) -> Result<&mut Self, GeometryError> {
        let linear = Matrix3::from_mat4(*matrix);
        let determinant = linear.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(GeometryError::SingularMatrix);
        }
        let length_squared = self.normal.length_squared();
        if length_squared == 0.0 {
            return Err(GeometryError::DegenerateNormal);
        }

        // Foot of the perpendicular from the origin, equal to `coplanar_point()` for unit normals.
        let point = self.normal * (-self.constant / length_squared);
        let normal = linear.inverse().transpose() * self.normal;
        let point = matrix.transform_point3(point);
        Ok(self.set_from_normal_and_coplanar_point(normal, point))
    }

    /// Signed distance, positive on the side the normal points to.
    pub fn distance_to_point(&self, point: Point3) -> Scalar {
        self.normal.dot(point) + self.constant
    }

    /// Signed distance to the nearest point of the sphere's surface.
    pub fn distance_to_sphere(&self, sphere: &Sphere) -> Scalar {
        self.distance_to_point(sphere.center) - sphere.radius
    }

    /// The displacement from the projection of `point` on the plane to `point`.
    pub fn ortho_point(&self, point: Point3) -> Vector3 {
        self.normal * self.distance_to_point(point)
    }

    pub fn project_point(&self, point: Point3) -> Point3 {
        point - self.ortho_point(point)
    }

    /// The foot of the perpendicular from the origin. Only on the plane for unit normals.
    pub fn coplanar_point(&self) -> Point3 {
        self.normal * -self.constant
    }

    /// `true` if the segment's endpoints lie strictly on opposite sides.
    ///
    /// An endpoint exactly on the plane does not count as crossing.
    pub fn intersects_line(&self, line: &Line3) -> bool {
        let start = self.distance_to_point(line.start);
        let end = self.distance_to_point(line.end);
        (start < 0.0 && end > 0.0) || (start > 0.0 && end < 0.0)
    }

    /// Intersects the segment `line` with the plane.
    pub fn intersect_line(&self, line: &Line3) -> LineIntersection {
        let direction = line.delta();
        let cos_angle = self.normal.dot(direction);

        if cos_angle == 0.0 {
            if self.distance_to_point(line.start) == 0.0 {
                return LineIntersection::Coincident(line.start);
            }
            return LineIntersection::NoIntersection;
        }

        let t = -(line.start.dot(self.normal) + self.constant) / cos_angle;
        if !(0.0..=1.0).contains(&t) {
            return LineIntersection::NoIntersection;
        }

        LineIntersection::Point(line.start + direction * t)
    }

    /// `true` if the sphere touches or crosses the plane.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        self.distance_to_point(sphere.center).abs() <= sphere.radius
    }

    pub fn intersects_bounds(&self, bounds: &Bounds3) -> bool {
        bounds.intersects_plane(self)
    }
}

impl From<Plane> for (Vector3, Scalar) {
    fn from(p: Plane) -> Self {
        (p.normal, p.constant)
    }
}

impl From<(Vector3, Scalar)> for Plane {
    fn from((normal, constant): (Vector3, Scalar)) -> Self {
        Self::new(normal, constant)
    }
}

impl StructuredText for Plane {
    fn type_name(&self) -> &'static str {
        "Plane"
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("normal", self.normal),
            Field::new("constant", self.constant),
        ]
    }
}

impl AbsDiffEq for Plane {
    type Epsilon = Scalar;

    fn default_epsilon() -> Scalar {
        Scalar::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Scalar) -> bool {
        self.normal.abs_diff_eq(other.normal, epsilon)
            && self.constant.abs_diff_eq(&other.constant, epsilon)
    }
}

impl RelativeEq for Plane {
    fn default_max_relative() -> Scalar {
        Scalar::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Scalar, max_relative: Scalar) -> bool {
        self.normal.relative_eq(&other.normal, epsilon, max_relative)
            && self.constant.relative_eq(&other.constant, epsilon, max_relative)
    }
}

/// A [`Plane`] with a unit length normal, so that its distances are Euclidean.
#[derive(Copy, Clone, PartialEq, Debug, derive_more::Deref, derive_more::Into)]
pub struct UnitPlane(Plane);

impl UnitPlane {
    pub fn plane(&self) -> &Plane {
        &self.0
    }

    pub fn negated(mut self) -> Self {
        self.0.negate();
        self
    }

    pub fn translated(mut self, offset: Vector3) -> Self {
        self.0.translate(offset);
        self
    }
}

impl TryFrom<Plane> for UnitPlane {
    type Error = GeometryError;

    fn try_from(plane: Plane) -> Result<Self, Self::Error> {
        plane.normalized()
    }
}

/// The result of intersecting a segment with a plane.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum LineIntersection {
    /// The segment crosses or touches the plane at a single point.
    Point(Point3),
    /// The segment lies in the plane. Carries the segment's start.
    Coincident(Point3),
    /// Parallel and off the plane, or the crossing lies outside the segment.
    NoIntersection,
}

impl LineIntersection {
    pub fn point(&self) -> Option<Point3> {
        match *self {
            LineIntersection::Point(p) | LineIntersection::Coincident(p) => Some(p),
            LineIntersection::NoIntersection => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.point().is_some()
    }
}
