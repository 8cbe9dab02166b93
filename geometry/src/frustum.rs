use log::debug;

use crate::{
    Bounds3, Camera, Contains, DepthRange, GeometryError, Matrix4, Plane, Point3, Projection,
    Sphere, UnitPlane, Vector3, Vector4,
};

/// A view volume bounded by six planes, all with normals pointing inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub planes: [UnitPlane; 6],
}

impl Frustum {
    pub const LEFT: usize = 0;
    pub const RIGHT: usize = 1;
    pub const BOTTOM: usize = 2;
    pub const TOP: usize = 3;
    pub const NEAR: usize = 4;
    pub const FAR: usize = 5;

    pub fn new(planes: [UnitPlane; 6]) -> Self {
        Self { planes }
    }

    /// Extracts the clipping planes of a (view-) projection matrix.
    ///
    /// `depth_range` is the clip space depth range the matrix maps `near` and `far` to.
    pub fn from_matrix(matrix: &Matrix4, depth_range: DepthRange) -> Result<Self, GeometryError> {
        let [x, y, z, w] = [0, 1, 2, 3].map(|i| matrix.row(i));

        let rows = [
            w + x,
            w - x,
            w + y,
            w - y,
            z - w * depth_range.near,
            w * depth_range.far - z,
        ];

        let planes = rows.map(|row| plane_from_row(row).normalized());
        if let Some(i) = planes.iter().position(Result::is_err) {
            debug!("Frustum plane {i} is degenerate, matrix: {matrix}");
        }

        let [left, right, bottom, top, near, far] = planes;
        Ok(Self::new([left?, right?, bottom?, top?, near?, far?]))
    }

    pub fn from_camera(camera: &Camera, projection: &Projection) -> Result<Self, GeometryError> {
        let view_projection = projection.perspective_matrix(camera.fovy) * camera.view_matrix();
        Self::from_matrix(&view_projection, DepthRange::ZERO_TO_ONE)
    }

    pub fn plane(&self, index: usize) -> &UnitPlane {
        &self.planes[index]
    }

    /// `true` if the sphere is at least partially inside.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(sphere.center) >= -sphere.radius)
    }

    /// `true` if the box is at least partially inside.
    ///
    /// Conservative: Boxes near the frustum's edges may be reported as intersecting even if they
    /// are outside.
    pub fn intersects_bounds(&self, bounds: &Bounds3) -> bool {
        self.planes.iter().all(|plane| {
            // The corner furthest along the normal.
            let n = plane.normal;
            let corner = Vector3::select(n.cmpgt(Vector3::ZERO), bounds.max, bounds.min);
            plane.distance_to_point(corner) >= 0.0
        })
    }
}

impl Contains<Point3> for Frustum {
    fn contains(&self, point: Point3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }
}

fn plane_from_row(row: Vector4) -> Plane {
    Plane::from_coefficients(row.x, row.y, row.z, row.w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_frustum() -> Frustum {
        let camera = Camera::new(Vector3::new(0.0, 0.0, 5.0), Vector3::ZERO);
        let projection = Projection::new(1.0, 0.1, 100.0);
        Frustum::from_camera(&camera, &projection).unwrap()
    }

    #[test]
    fn contains_points_in_view() {
        let frustum = camera_frustum();
        assert!(frustum.contains(Vector3::ZERO));
        assert!(frustum.contains(Vector3::new(1.0, 1.0, -10.0)));

        // Behind the camera, beyond far and far to the side.
        assert!(!frustum.contains(Vector3::new(0.0, 0.0, 6.0)));
        assert!(!frustum.contains(Vector3::new(0.0, 0.0, -200.0)));
        assert!(!frustum.contains(Vector3::new(100.0, 0.0, 0.0)));
    }

    #[test]
    fn planes_are_unit_length_and_face_inside() {
        let frustum = camera_frustum();
        for plane in &frustum.planes {
            approx::assert_relative_eq!(plane.normal.length(), 1.0, epsilon = 1e-5);
            assert!(plane.distance_to_point(Vector3::ZERO) > 0.0);
        }

        // The near plane is 0.1 in front of the eye.
        let near = frustum.plane(Frustum::NEAR);
        approx::assert_abs_diff_eq!(near.normal, Vector3::NEG_Z, epsilon = 1e-5);
        approx::assert_abs_diff_eq!(
            near.distance_to_point(Vector3::new(0.0, 0.0, 4.9)),
            0.0,
            epsilon = 1e-3
        );
    }

    #[test]
    fn intersects_sphere() {
        let frustum = camera_frustum();
        assert!(frustum.intersects_sphere(&Sphere::new(Vector3::ZERO, 1.0)));
        assert!(!frustum.intersects_sphere(&Sphere::new(Vector3::new(0.0, 0.0, 6.0), 0.5)));
        // Behind the camera, but reaching through the near plane.
        assert!(frustum.intersects_sphere(&Sphere::new(Vector3::new(0.0, 0.0, 6.0), 2.0)));
    }

    #[test]
    fn intersects_bounds() {
        let frustum = camera_frustum();
        assert!(frustum.intersects_bounds(&Bounds3::new(Vector3::splat(-1.0), Vector3::ONE)));
        assert!(frustum.intersects_bounds(&Bounds3::new(
            Vector3::new(-1000.0, -1000.0, -1.0),
            Vector3::new(1000.0, 1000.0, 1.0)
        )));
        assert!(!frustum.intersects_bounds(&Bounds3::new(
            Vector3::new(50.0, -1.0, -1.0),
            Vector3::new(51.0, 1.0, 1.0)
        )));
    }

    #[test]
    fn opengl_depth_range_moves_the_near_plane() {
        let projection = Matrix4::perspective_rh_gl(90f32.to_radians(), 1.0, 1.0, 10.0);
        let frustum = Frustum::from_matrix(&projection, DepthRange::MINUS_ONE_TO_ONE).unwrap();

        assert!(frustum.contains(Vector3::new(0.0, 0.0, -1.5)));
        assert!(!frustum.contains(Vector3::new(0.0, 0.0, -0.5)));
        assert!(!frustum.contains(Vector3::new(0.0, 0.0, -10.5)));
    }

    #[test]
    fn degenerate_matrix_is_rejected() {
        assert_eq!(
            Frustum::from_matrix(&Matrix4::ZERO, DepthRange::default()),
            Err(GeometryError::DegenerateNormal)
        );
    }
}
