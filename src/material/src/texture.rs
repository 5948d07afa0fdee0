use image::RgbaImage;
use protocol::surface::{Image, Rect};

/// A decoded texture. Render code samples it through normalized UV
/// coordinates; pixel data is only touched by host backends.
pub struct Texture {
	image: RgbaImage,
}

impl Texture {
	pub fn open(path: &str) -> Result<Self, image::ImageError> {
		let image = image::open(path)?.into_rgba8();
		Ok(Self { image })
	}

	pub fn from_image(image: RgbaImage) -> Self {
		Self { image }
	}

	pub fn width(&self) -> u32 {
		self.image.width()
	}

	pub fn height(&self) -> u32 {
		self.image.height()
	}

	pub fn image(&self) -> &RgbaImage {
		&self.image
	}

	/// Pixel rect covering the normalized UV window [u1, u2] x [v1, v2].
	pub fn source_rect(&self, u1: f32, v1: f32, u2: f32, v2: f32) -> Rect {
		let w = self.width() as f32;
		let h = self.height() as f32;
		Rect::new(u1 * w, v1 * h, (u2 - u1) * w, (v2 - v1) * h)
	}
}

impl Image for Texture {
	fn width(&self) -> u32 {
		self.image.width()
	}

	fn height(&self) -> u32 {
		self.image.height()
	}
}
