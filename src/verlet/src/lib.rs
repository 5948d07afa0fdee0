pub mod cloth;
pub mod config;
pub mod constraint;
pub mod point;

pub type V2 = nalgebra::Vector2<f32>;
