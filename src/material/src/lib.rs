pub mod slot;
pub mod texture;

pub use slot::TextureSlot;
pub use texture::Texture;
