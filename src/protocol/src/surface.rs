use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub x: f32,
	pub y: f32,
	pub w: f32,
	pub h: f32,
}

impl Rect {
	pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
		Self { x, y, w, h }
	}

	pub fn is_empty(&self) -> bool {
		self.w <= 0. || self.h <= 0.
	}
}

/// Source for draw_image. Concrete pixel access stays in the host
/// backend; the render code only needs dimensions for sampling math.
pub trait Image {
	fn width(&self) -> u32;
	fn height(&self) -> u32;
}

/// 2D drawing surface contract. The simulation emits calls against this
/// trait; rasterization is the host's problem.
pub trait Surface {
	fn clear(&mut self);
	fn begin_path(&mut self);
	fn move_to(&mut self, p: V2);
	fn line_to(&mut self, p: V2);
	fn close_path(&mut self);
	fn stroke(&mut self);
	fn save(&mut self);
	fn restore(&mut self);
	/// Clip subsequent drawing to the current path, until restore.
	fn clip(&mut self);
	/// Draw the src rect of image stretched into the dst rect.
	fn draw_image(&mut self, image: &dyn Image, src: Rect, dst: Rect);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawOp {
	Clear,
	BeginPath,
	MoveTo(V2),
	LineTo(V2),
	ClosePath,
	Stroke,
	Save,
	Restore,
	Clip,
	DrawImage(Rect, Rect),
}

/// Surface backend that records draw calls instead of rasterizing.
/// Used by tests and the headless frontend.
#[derive(Default)]
pub struct TraceSurface {
	pub ops: Vec<DrawOp>,
}

impl TraceSurface {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn count(&self, f: impl Fn(&DrawOp) -> bool) -> usize {
		self.ops.iter().filter(|op| f(op)).count()
	}
}

impl Surface for TraceSurface {
	fn clear(&mut self) {
		self.ops.clear();
		self.ops.push(DrawOp::Clear);
	}

	fn begin_path(&mut self) {
		self.ops.push(DrawOp::BeginPath);
	}

	fn move_to(&mut self, p: V2) {
		self.ops.push(DrawOp::MoveTo(p));
	}

	fn line_to(&mut self, p: V2) {
		self.ops.push(DrawOp::LineTo(p));
	}

	fn close_path(&mut self) {
		self.ops.push(DrawOp::ClosePath);
	}

	fn stroke(&mut self) {
		self.ops.push(DrawOp::Stroke);
	}

	fn save(&mut self) {
		self.ops.push(DrawOp::Save);
	}

	fn restore(&mut self) {
		self.ops.push(DrawOp::Restore);
	}

	fn clip(&mut self) {
		self.ops.push(DrawOp::Clip);
	}

	fn draw_image(&mut self, _image: &dyn Image, src: Rect, dst: Rect) {
		self.ops.push(DrawOp::DrawImage(src, dst));
	}
}
