use std::time::SystemTime;

use protocol::pointer::PointerState;
use protocol::NOMINAL_DT;
use verlet::cloth::Cloth;
use verlet::config::ClothConfig;

fn main() {
	let start = SystemTime::now();
	let config = ClothConfig::default();
	let mut cloth = Cloth::new(&config, false);
	let ptr = PointerState::default();
	let rframes = 600;
	for _ in 0..rframes {
		for _ in 0..config.accuracy {
			cloth.relax_pass();
		}
		cloth.integrate(NOMINAL_DT * NOMINAL_DT, &ptr);
	}
	let time = rframes as f32 * NOMINAL_DT;
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	eprintln!("{:.3}%", duration as f32 / time / 1e4);
}
