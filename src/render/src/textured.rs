use material::Texture;
use protocol::pointer::PointerState;
use protocol::surface::{Rect, Surface};
use protocol::{NOMINAL_DT, V2};
use verlet::cloth::Cloth;

/// Inward UV bias, in cells, hiding seams between adjacent quads.
const SEAM_BIAS: f32 = 0.02;
/// Screen-space quad expansion around its centroid; closes hairline
/// gaps at the cost of slight overlap.
const EXPAND: f32 = 1.05;
/// Quads deformed past this many spacings are about to tear; skip
/// them instead of smearing the texture across the gap.
const MAX_STRETCH: f32 = 3.;

/// Map each intact grid cell to its rectangle of the source texture,
/// clipped to the cell's deformed screen polygon.
///
/// Integration here uses the fixed nominal delta rather than the
/// frame delta the wireframe path gets; unifying the two would change
/// visible tearing and bounce dynamics.
pub fn draw(cloth: &mut Cloth, ptr: &PointerState, tex: &Texture, surface: &mut dyn Surface) {
	cloth.integrate(NOMINAL_DT * NOMINAL_DT, ptr);

	let cx = cloth.config().cloth_x;
	let cy = cloth.config().cloth_y;
	let spacing = cloth.config().spacing;

	for y in 0..cy {
		for x in 0..cx {
			let corners = cloth.cell(x, y);
			if corners.iter().any(|&i| cloth.point(i).is_torn()) {
				continue;
			}
			let ps: Vec<V2> = corners.iter().map(|&i| cloth.point(i).pos).collect();

			let mut max_dist = 0f32;
			for i in 0..4 {
				for j in (i + 1)..4 {
					let d = (ps[i] - ps[j]).magnitude();
					if d > max_dist {
						max_dist = d;
					}
				}
			}
			if max_dist > MAX_STRETCH * spacing {
				continue;
			}

			let u1 = ((x as f32 - SEAM_BIAS) / cx as f32).max(0.);
			let v1 = ((y as f32 - SEAM_BIAS) / cy as f32).max(0.);
			let u2 = ((x as f32 + 1. + SEAM_BIAS) / cx as f32).min(1.);
			let v2 = ((y as f32 + 1. + SEAM_BIAS) / cy as f32).min(1.);

			let center = (ps[0] + ps[1] + ps[2] + ps[3]) / 4.;
			let ep: Vec<V2> = ps.iter().map(|&p| center + (p - center) * EXPAND).collect();

			surface.save();
			surface.begin_path();
			surface.move_to(ep[0]);
			surface.line_to(ep[1]);
			surface.line_to(ep[3]);
			surface.line_to(ep[2]);
			surface.close_path();
			surface.clip();

			let src = tex.source_rect(u1, v1, u2, v2);
			let min_x = ep.iter().map(|p| p[0]).fold(f32::INFINITY, f32::min);
			let min_y = ep.iter().map(|p| p[1]).fold(f32::INFINITY, f32::min);
			let max_x = ep.iter().map(|p| p[0]).fold(f32::NEG_INFINITY, f32::max);
			let max_y = ep.iter().map(|p| p[1]).fold(f32::NEG_INFINITY, f32::max);
			let dst = Rect::new(min_x, min_y, max_x - min_x, max_y - min_y);

			if !src.is_empty() && !dst.is_empty() {
				surface.draw_image(tex, src, dst);
			}
			surface.restore();
		}
	}
}
