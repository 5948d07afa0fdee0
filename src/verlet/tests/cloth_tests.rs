use protocol::pointer::{Button, PointerState};
use protocol::V2;
use verlet::cloth::Cloth;
use verlet::config::ClothConfig;

fn small_config() -> ClothConfig {
	ClothConfig::default().with_grid(2, 2).with_spacing(8.)
}

fn dist(cloth: &Cloth, a: usize, b: usize) -> f32 {
	(cloth.point(a).pos - cloth.point(b).pos).magnitude()
}

#[test]
fn grid_has_expected_points_and_constraints() {
	let cloth = Cloth::new(&small_config(), false);
	assert_eq!(cloth.points().len(), 9);
	// cy * (cx + 1) + cx * (cy + 1)
	assert_eq!(cloth.constraint_count(), 12);
}

#[test]
fn constraint_count_formula_holds() {
	let config = ClothConfig::default().with_grid(3, 5);
	let cloth = Cloth::new(&config, true);
	assert_eq!(cloth.points().len(), 4 * 6);
	assert_eq!(cloth.constraint_count(), 5 * 4 + 3 * 6);
}

#[test]
fn top_row_pinned_at_build_coordinates() {
	let config = small_config();
	let cloth = Cloth::new(&config, false);
	let start_x = config.width / 2. - config.cloth_x as f32 * config.spacing / 2.;
	let corner = cloth.point(cloth.index(0, 0));
	assert_eq!(corner.pin_target(), Some(V2::new(start_x, config.start_y)));
	for x in 0..=config.cloth_x {
		assert!(cloth.point(cloth.index(x, 0)).is_pinned());
	}
	for x in 0..=config.cloth_x {
		assert!(!cloth.point(cloth.index(x, 1)).is_pinned());
	}
}

#[test]
fn free_grid_has_no_pins() {
	let cloth = Cloth::new(&small_config(), true);
	assert!(cloth.points().iter().all(|p| !p.is_pinned()));
}

#[test]
fn pinned_point_snaps_back_every_pass() {
	let mut cloth = Cloth::new(&small_config(), false);
	let idx = cloth.index(0, 0);
	let target = cloth.point(idx).pin_target().unwrap();
	cloth.points_mut()[idx].pos = V2::new(999., 999.);
	cloth.relax_pass();
	assert_eq!(cloth.point(idx).pos, target);
}

#[test]
fn relaxation_converges_toward_rest_length() {
	let config = ClothConfig::default().with_grid(1, 0);
	let mut cloth = Cloth::new(&config, true);
	// stretch below the tear distance: 8 < 12 < 15
	let b = cloth.index(1, 0);
	cloth.points_mut()[b].pos += V2::new(4., 0.);
	let mut err = (dist(&cloth, 0, b) - config.spacing).abs();
	for _ in 0..10 {
		cloth.relax_pass();
		let next = (dist(&cloth, 0, b) - config.spacing).abs();
		assert!(next <= err + 1e-6);
		err = next;
	}
	assert_eq!(cloth.constraint_count(), 1);
}

#[test]
fn compressed_constraint_is_left_alone() {
	let config = ClothConfig::default().with_grid(1, 0);
	let mut cloth = Cloth::new(&config, true);
	let b = cloth.index(1, 0);
	cloth.points_mut()[b].pos -= V2::new(5., 0.);
	let before = dist(&cloth, 0, b);
	cloth.relax_pass();
	assert!((dist(&cloth, 0, b) - before).abs() < 1e-6);
}

#[test]
fn overstretch_tears_the_constraint() {
	let config = ClothConfig::default().with_grid(1, 0);
	let mut cloth = Cloth::new(&config, true);
	let b = cloth.index(1, 0);
	cloth.points_mut()[b].pos += V2::new(20., 0.); // 28 > tear_dist
	cloth.relax_pass();
	assert_eq!(cloth.constraint_count(), 0);
	assert!(cloth.point(b).is_torn());
	// detached constraints never resolve again
	let frozen = cloth.point(b).pos;
	cloth.relax_pass();
	assert_eq!(cloth.point(b).pos, frozen);
}

#[test]
fn coincident_points_relax_without_nan() {
	let config = ClothConfig::default().with_grid(1, 0);
	let mut cloth = Cloth::new(&config, true);
	let b = cloth.index(1, 0);
	let pos = cloth.point(0).pos;
	cloth.points_mut()[b].pos = pos;
	cloth.relax_pass();
	assert!(cloth.point(0).pos[0].is_finite());
	assert!(cloth.point(b).pos[0].is_finite());
	assert_eq!(cloth.point(0).pos, pos);
	assert_eq!(cloth.point(b).pos, pos);
	assert_eq!(cloth.constraint_count(), 1);
}

#[test]
fn cut_press_empties_link_list() {
	let mut cloth = Cloth::new(&small_config(), true);
	// center point of the 3x3 grid owns two constraints (left + above)
	let idx = cloth.index(1, 1);
	assert_eq!(cloth.point(idx).link_count(), 2);
	let before = cloth.constraint_count();
	let ptr = PointerState {
		pos: cloth.point(idx).pos,
		ppos: cloth.point(idx).pos,
		down: true,
		button: Button::Secondary,
		..Default::default()
	};
	cloth.integrate_point(idx, 0.016 * 0.016, &ptr);
	assert!(cloth.point(idx).is_torn());
	assert_eq!(cloth.constraint_count(), before - 2);
	// later passes must not touch the removed constraints
	cloth.relax_pass();
	assert_eq!(cloth.constraint_count(), before - 2);
}

#[test]
fn hanging_cloth_sags_under_gravity() {
	let mut cloth = Cloth::new(&small_config(), false);
	let bottom = cloth.index(1, 2);
	let y0 = cloth.point(bottom).pos[1];
	let ptr = PointerState::default();
	for _ in 0..30 {
		for _ in 0..cloth.config().accuracy {
			cloth.relax_pass();
		}
		cloth.integrate(0.016 * 0.016, &ptr);
	}
	assert!(cloth.point(bottom).pos[1] > y0);
	// no NaN crept in anywhere
	assert!(cloth
		.points()
		.iter()
		.all(|p| p.pos[0].is_finite() && p.pos[1].is_finite()));
}

#[test]
fn points_never_escape_the_surface() {
	let config = ClothConfig::default()
		.with_grid(4, 4)
		.with_surface(100., 60.);
	let mut cloth = Cloth::new(&config, true);
	let ptr = PointerState::default();
	for _ in 0..120 {
		for _ in 0..config.accuracy {
			cloth.relax_pass();
		}
		cloth.integrate(0.016 * 0.016, &ptr);
	}
	for p in cloth.points() {
		assert!(p.pos[0] >= 0. && p.pos[0] <= config.width);
		assert!(p.pos[1] >= 0. && p.pos[1] <= config.height);
	}
}
