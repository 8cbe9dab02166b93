//! Light attribute records.

mod point_light;

pub use point_light::*;
