use protocol::pointer::{Button, PointerState};
use protocol::V2;

/// Pointer input adapter. Samples arrive in screen space and are
/// translated to surface-local space by subtracting the surface
/// offset; every sample shifts current to previous first, which is
/// the displacement drag-following consumes.
///
/// The secondary button is a simulation control (cutting); hosts are
/// expected to suppress their context menu for it.
pub struct PointerTracker {
	state: PointerState,
	offset: V2,
}

impl Default for PointerTracker {
	fn default() -> Self {
		Self {
			state: PointerState::default(),
			offset: V2::new(0., 0.),
		}
	}
}

impl PointerTracker {
	/// Top-left corner of the render surface in screen space.
	pub fn with_offset(mut self, offset: V2) -> Self {
		self.offset = offset;
		self
	}

	pub fn with_radii(mut self, influence: f32, cut: f32) -> Self {
		self.state.influence = influence;
		self.state.cut = cut;
		self
	}

	fn sample(&mut self, p: V2) {
		self.state.ppos = self.state.pos;
		self.state.pos = p - self.offset;
	}

	pub fn press(&mut self, p: V2, button: Button) {
		self.state.button = button;
		self.state.down = true;
		self.sample(p);
	}

	pub fn moved(&mut self, p: V2) {
		self.sample(p);
	}

	pub fn release(&mut self) {
		self.state.down = false;
	}

	/// Read-only snapshot for one tick.
	pub fn snapshot(&self) -> PointerState {
		self.state
	}
}
