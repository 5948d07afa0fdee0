/// Simulation parameters, passed explicitly so independent cloths can
/// run side by side with different tunings.
#[derive(Clone, Copy, Debug)]
pub struct ClothConfig {
	/// Relaxation passes per tick. More passes approximate stiffer
	/// fabric without shrinking the timestep.
	pub accuracy: usize,
	pub gravity: f32,
	/// Grid cells per axis; the point grid is one larger.
	pub cloth_x: usize,
	pub cloth_y: usize,
	/// Rest length of every constraint, and the grid pitch.
	pub spacing: f32,
	/// A constraint stretched past this detaches.
	pub tear_dist: f32,
	/// Velocity damping applied each integration step.
	pub friction: f32,
	/// Restitution at the surface boundaries.
	pub bounce: f32,
	pub width: f32,
	pub height: f32,
	/// Vertical offset of the top row.
	pub start_y: f32,
}

impl Default for ClothConfig {
	fn default() -> Self {
		Self {
			accuracy: 5,
			gravity: 400.,
			cloth_x: 50,
			cloth_y: 50,
			spacing: 8.,
			tear_dist: 15.,
			friction: 0.99,
			bounce: 0.5,
			width: 700.,
			height: 400.,
			start_y: 20.,
		}
	}
}

impl ClothConfig {
	pub fn with_grid(mut self, cloth_x: usize, cloth_y: usize) -> Self {
		self.cloth_x = cloth_x;
		self.cloth_y = cloth_y;
		self
	}

	pub fn with_spacing(mut self, spacing: f32) -> Self {
		self.spacing = spacing;
		self
	}

	pub fn with_gravity(mut self, gravity: f32) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_surface(mut self, width: f32, height: f32) -> Self {
		self.width = width;
		self.height = height;
		self
	}

	pub fn with_accuracy(mut self, accuracy: usize) -> Self {
		self.accuracy = accuracy;
		self
	}
}
