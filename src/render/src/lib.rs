pub mod textured;
pub mod wireframe;

use material::Texture;
use protocol::pointer::PointerState;
use protocol::surface::Surface;
use verlet::cloth::Cloth;

/// Per-frame render strategy. The choice is made once per tick from
/// texture readiness; each path is a plain function from cloth state
/// to surface calls.
pub enum FrameMode<'a> {
	Wireframe,
	Textured(&'a Texture),
}

/// Draw one frame. Both paths run the integration step as a side
/// effect: the wireframe path uses the caller's delta, the textured
/// path a fixed nominal one (preserved behavior, not an oversight).
pub fn draw_frame(
	cloth: &mut Cloth,
	ptr: &PointerState,
	mode: FrameMode,
	dt: f32,
	surface: &mut dyn Surface,
) {
	match mode {
		FrameMode::Wireframe => wireframe::draw(cloth, ptr, dt, surface),
		FrameMode::Textured(tex) => textured::draw(cloth, ptr, tex, surface),
	}
}
