use std::sync::{Arc, RwLock};

use crate::texture::Texture;

/// Holder for a texture that becomes ready at some point, or never.
/// Loading happens on a background thread; the render path polls
/// readiness every frame instead of awaiting. A failed decode is
/// logged and leaves the slot empty, so rendering falls back to
/// wireframe permanently.
#[derive(Clone, Default)]
pub struct TextureSlot {
	inner: Arc<RwLock<Option<Arc<Texture>>>>,
}

impl TextureSlot {
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn load(path: &str) -> Self {
		let slot = Self::empty();
		let inner = slot.inner.clone();
		let path = path.to_string();
		std::thread::spawn(move || match Texture::open(&path) {
			Ok(tex) => {
				log::info!("texture {} ready, {}x{}", path, tex.width(), tex.height());
				*inner.write().unwrap() = Some(Arc::new(tex));
			}
			Err(e) => {
				log::warn!("texture {} failed to load: {}", path, e);
			}
		});
		slot
	}

	/// Install a texture directly, skipping the loader thread.
	pub fn set(&self, tex: Texture) {
		*self.inner.write().unwrap() = Some(Arc::new(tex));
	}

	pub fn get(&self) -> Option<Arc<Texture>> {
		self.inner.read().unwrap().clone()
	}

	pub fn ready(&self) -> bool {
		self.inner.read().unwrap().is_some()
	}
}
