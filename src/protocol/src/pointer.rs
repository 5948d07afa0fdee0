use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
	Primary,
	Auxiliary,
	Secondary,
}

/// Read-only pointer snapshot handed to the physics once per tick.
/// Only the input adapter mutates pointer state, and only between ticks.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
	pub pos: V2,
	pub ppos: V2,
	pub down: bool,
	pub button: Button,
	/// Drag radius: points closer than this follow a primary-button drag.
	pub influence: f32,
	/// Cut radius: points closer than this lose all their constraints.
	pub cut: f32,
}

impl Default for PointerState {
	fn default() -> Self {
		Self {
			pos: V2::new(0., 0.),
			ppos: V2::new(0., 0.),
			down: false,
			button: Button::Primary,
			influence: 36.,
			cut: 8.,
		}
	}
}

impl PointerState {
	/// Displacement of the last sample, consumed by drag-following.
	pub fn delta(&self) -> V2 {
		self.pos - self.ppos
	}
}
