use protocol::pointer::PointerState;
use protocol::surface::Surface;
use verlet::cloth::Cloth;

/// Stroke every constraint as a line segment, batched into a single
/// path. Each point integrates just before its own segments are
/// emitted, so later segments see partially advanced positions;
/// this matches the observed frame order.
pub fn draw(cloth: &mut Cloth, ptr: &PointerState, dt: f32, surface: &mut dyn Surface) {
	let dt2 = dt * dt;
	surface.begin_path();
	for i in 0..cloth.points().len() {
		cloth.integrate_point(i, dt2, ptr);
		for (a, b) in cloth.segments_of(i) {
			surface.move_to(a);
			surface.line_to(b);
		}
	}
	surface.stroke();
}
