use std::fmt;

use log::warn;
use prism_util::{Field, Structured, StructuredText};
use serde::{Deserialize, Serialize};

/// A light that emits from a single point in all directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub intensity: f32,
    /// The range of the light. `0` is unlimited.
    pub distance: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            distance: 0.0,
        }
    }
}

impl PointLight {
    pub fn new(intensity: f32, distance: f32) -> Self {
        if intensity < 0.0 {
            warn!("Point light with negative intensity: {intensity}");
        }
        if distance < 0.0 {
            warn!("Point light with negative distance: {distance}");
        }
        Self {
            intensity,
            distance,
        }
    }

    pub fn with_intensity(self, intensity: f32) -> Self {
        Self { intensity, ..self }
    }

    pub fn with_distance(self, distance: f32) -> Self {
        Self { distance, ..self }
    }
}

impl StructuredText for PointLight {
    fn type_name(&self) -> &'static str {
        "PointLight"
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("intensity", self.intensity),
            Field::new("distance", self.distance),
        ]
    }
}

impl fmt::Display for PointLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Structured(self), f)
    }
}
