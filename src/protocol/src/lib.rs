pub mod pointer;
pub mod surface;

pub type V2 = nalgebra::Vector2<f32>;

/// Nominal frame delta. Hosts pass this instead of a measured delta so
/// tearing and bounce dynamics stay deterministic across frame rates.
pub const NOMINAL_DT: f32 = 0.016;
