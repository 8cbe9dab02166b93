use approx::{AbsDiffEq, RelativeEq};
use log::warn;
use prism_util::{Field, StructuredText};
use serde_tuple::{Deserialize_tuple, Serialize_tuple};

use crate::{Contains, Point3, Scalar};

/// A bounding sphere.
///
/// The radius is expected to be non-negative, but this is not enforced.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize_tuple, Deserialize_tuple)]
pub struct Sphere {
    pub center: Point3,
    pub radius: Scalar,
}

impl Sphere {
    pub fn new(center: impl Into<Point3>, radius: Scalar) -> Self {
        if radius < 0.0 {
            warn!("Sphere created with a negative radius: {radius}");
        }
        Self {
            center: center.into(),
            radius,
        }
    }
}

impl Contains<Point3> for Sphere {
    fn contains(&self, point: Point3) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

impl StructuredText for Sphere {
    fn type_name(&self) -> &'static str {
        "Sphere"
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("center", self.center),
            Field::new("radius", self.radius),
        ]
    }
}

impl AbsDiffEq for Sphere {
    type Epsilon = Scalar;

    fn default_epsilon() -> Scalar {
        Scalar::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Scalar) -> bool {
        self.center.abs_diff_eq(other.center, epsilon)
            && self.radius.abs_diff_eq(&other.radius, epsilon)
    }
}

impl RelativeEq for Sphere {
    fn default_max_relative() -> Scalar {
        Scalar::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Scalar, max_relative: Scalar) -> bool {
        self.center.relative_eq(&other.center, epsilon, max_relative)
            && self.radius.relative_eq(&other.radius, epsilon, max_relative)
    }
}
