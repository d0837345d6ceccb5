//! Axis-aligned bounding boxes tagged with the origin of their coordinate
//! system, and conversion between origins.

pub mod consts;
pub mod primitives;
