use crate::config::ClothConfig;
use crate::V2;
use protocol::pointer::{Button, PointerState};

/// A cloth mass point. Velocity is implicit in pos - ppos.
#[derive(Clone, Debug)]
pub struct Point {
	pub pos: V2,
	pub ppos: V2,
	force: V2,
	pin: Option<V2>,
	/// Ids of the constraints this point owns, in attach order.
	links: Vec<usize>,
}

impl Point {
	pub fn new(pos: V2) -> Self {
		Self {
			pos,
			ppos: pos,
			force: V2::new(0., 0.),
			pin: None,
			links: Vec::new(),
		}
	}

	/// Anchor the point at a fixed coordinate. Zero is a valid target;
	/// only an unset pin leaves the point simulated.
	pub fn pin(&mut self, target: V2) {
		self.pin = Some(target);
	}

	pub fn pin_target(&self) -> Option<V2> {
		self.pin
	}

	pub fn is_pinned(&self) -> bool {
		self.pin.is_some()
	}

	pub fn add_force(&mut self, f: V2) {
		self.force += f;
	}

	pub fn push_link(&mut self, cid: usize) {
		self.links.push(cid);
	}

	pub fn remove_link(&mut self, cid: usize) {
		if let Some(k) = self.links.iter().position(|&id| id == cid) {
			self.links.remove(k);
		}
	}

	pub fn take_links(&mut self) -> Vec<usize> {
		std::mem::take(&mut self.links)
	}

	pub fn links(&self) -> &[usize] {
		&self.links
	}

	pub fn link_count(&self) -> usize {
		self.links.len()
	}

	/// A point that owns no constraints is torn free of the mesh.
	pub fn is_torn(&self) -> bool {
		self.links.is_empty()
	}

	/// Damped Verlet step with pointer interaction and boundary bounce.
	/// Returns true when the pointer cut radius hit the point; the
	/// caller empties the link list and releases the arena slots.
	pub fn integrate(&mut self, dt2: f32, cfg: &ClothConfig, ptr: &PointerState) -> bool {
		if self.pin.is_some() {
			return false;
		}

		let mut cut = false;
		if ptr.down {
			let dist = (self.pos - ptr.pos).magnitude();
			if ptr.button == Button::Primary && dist < ptr.influence {
				// follow the drag rigidly for one step
				self.ppos = self.pos - ptr.delta();
			} else if dist < ptr.cut {
				cut = true;
			}
		}

		self.add_force(V2::new(0., cfg.gravity));

		let next = self.pos + (self.pos - self.ppos) * cfg.friction + self.force * dt2;
		self.ppos = self.pos;
		self.pos = next;
		self.force = V2::new(0., 0.);

		if self.pos[0] >= cfg.width {
			self.ppos[0] = cfg.width + (cfg.width - self.ppos[0]) * cfg.bounce;
			self.pos[0] = cfg.width;
		} else if self.pos[0] <= 0. {
			self.ppos[0] *= -cfg.bounce;
			self.pos[0] = 0.;
		}

		if self.pos[1] >= cfg.height {
			self.ppos[1] = cfg.height + (cfg.height - self.ppos[1]) * cfg.bounce;
			self.pos[1] = cfg.height;
		} else if self.pos[1] <= 0. {
			self.ppos[1] *= -cfg.bounce;
			self.pos[1] = 0.;
		}

		cut
	}
}
