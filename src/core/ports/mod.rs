//! Traits the core computes through.

pub mod colour_map;
pub mod fractal_algorithm;
pub mod pixel_surface;
