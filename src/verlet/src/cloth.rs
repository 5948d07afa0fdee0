use crate::config::ClothConfig;
use crate::constraint::{Constraint, ConstraintArena};
use crate::point::Point;
use crate::V2;
use protocol::pointer::PointerState;

/// The cloth mesh: a row-major point grid plus the constraint arena.
/// Built once; a reset or zero-gravity switch is a full rebuild.
pub struct Cloth {
	config: ClothConfig,
	points: Vec<Point>,
	constraints: ConstraintArena,
}

impl Cloth {
	/// Build the grid. Point (x, y) lives at index x + y * (cloth_x + 1)
	/// and attaches a constraint to its left and above neighbors. With
	/// `free` unset the whole top row is pinned where it was built.
	pub fn new(config: &ClothConfig, free: bool) -> Self {
		let cols = config.cloth_x + 1;
		let rows = config.cloth_y + 1;
		let start_x = config.width / 2. - config.cloth_x as f32 * config.spacing / 2.;

		let mut cloth = Self {
			config: *config,
			points: Vec::with_capacity(cols * rows),
			constraints: ConstraintArena::default(),
		};

		for y in 0..rows {
			for x in 0..cols {
				let pos = V2::new(
					start_x + x as f32 * config.spacing,
					config.start_y + y as f32 * config.spacing,
				);
				let mut point = Point::new(pos);
				if !free && y == 0 {
					point.pin(pos);
				}
				cloth.points.push(point);
				let idx = cloth.points.len() - 1;
				if x != 0 {
					cloth.attach(idx, idx - 1);
				}
				if y != 0 {
					cloth.attach(idx, x + (y - 1) * cols);
				}
			}
		}

		log::info!(
			"built cloth: {} points, {} constraints, free: {}",
			cloth.points.len(),
			cloth.constraints.len(),
			free,
		);
		cloth
	}

	/// Create a constraint owned by `owner` with rest length `spacing`.
	fn attach(&mut self, owner: usize, other: usize) {
		let cid = self
			.constraints
			.insert(Constraint::new(owner, other, self.config.spacing));
		self.points[owner].push_link(cid);
	}

	pub fn config(&self) -> &ClothConfig {
		&self.config
	}

	pub fn cols(&self) -> usize {
		self.config.cloth_x + 1
	}

	pub fn index(&self, x: usize, y: usize) -> usize {
		x + y * self.cols()
	}

	pub fn points(&self) -> &[Point] {
		&self.points
	}

	pub fn points_mut(&mut self) -> &mut [Point] {
		&mut self.points
	}

	pub fn point(&self, idx: usize) -> &Point {
		&self.points[idx]
	}

	pub fn constraint_count(&self) -> usize {
		self.constraints.len()
	}

	/// One relaxation sweep. Pinned points snap to their target and do
	/// not dispatch; every other point relaxes its owned constraints in
	/// order. A constraint stretched past the tear distance detaches
	/// here, mid-sweep.
	pub fn relax_pass(&mut self) {
		for i in 0..self.points.len() {
			if let Some(target) = self.points[i].pin_target() {
				self.points[i].pos = target;
				continue;
			}
			let mut k = 0;
			while k < self.points[i].link_count() {
				let cid = self.points[i].links()[k];
				if self.relax(cid) {
					self.points[i].remove_link(cid);
					self.constraints.remove(cid);
				} else {
					k += 1;
				}
			}
		}
	}

	/// Relax one constraint. Returns true when it tore.
	fn relax(&mut self, cid: usize) -> bool {
		let c = match self.constraints.get(cid) {
			Some(c) => *c,
			None => return true,
		};
		let d = self.points[c.a].pos - self.points[c.b].pos;
		let dist = d.magnitude();
		// coincident endpoints already satisfy the constraint
		if !dist.is_normal() {
			return false;
		}
		// sticks do not resist compression below rest length
		if dist < c.rest {
			return false;
		}
		let torn = dist > self.config.tear_dist;

		let diff = (c.rest - dist) / dist;
		let mul = diff * 0.5 * (1. - c.rest / dist);
		let dp = d * mul;

		// the tearing evaluation still applies its correction
		if !self.points[c.a].is_pinned() {
			self.points[c.a].pos += dp;
		}
		if !self.points[c.b].is_pinned() {
			self.points[c.b].pos -= dp;
		}
		torn
	}

	/// Verlet-integrate one point; on a pointer cut, drop every
	/// constraint the point owns.
	pub fn integrate_point(&mut self, idx: usize, dt2: f32, ptr: &PointerState) {
		let cfg = self.config;
		if self.points[idx].integrate(dt2, &cfg, ptr) {
			for cid in self.points[idx].take_links() {
				self.constraints.remove(cid);
			}
		}
	}

	/// Integrate the whole grid with one squared timestep.
	pub fn integrate(&mut self, dt2: f32, ptr: &PointerState) {
		for i in 0..self.points.len() {
			self.integrate_point(i, dt2, ptr);
		}
	}

	/// Segments for the constraints owned by one point, in link order.
	pub fn segments_of(&self, idx: usize) -> Vec<(V2, V2)> {
		self.points[idx]
			.links()
			.iter()
			.filter_map(|cid| self.constraints.get(*cid))
			.map(|c| (self.points[c.a].pos, self.points[c.b].pos))
			.collect()
	}

	/// The four corner indices of grid cell (x, y):
	/// top-left, top-right, bottom-left, bottom-right.
	pub fn cell(&self, x: usize, y: usize) -> [usize; 4] {
		[
			self.index(x, y),
			self.index(x + 1, y),
			self.index(x, y + 1),
			self.index(x + 1, y + 1),
		]
	}
}
