use std::sync::mpsc::channel;
use std::thread;
use std::time::Duration;

use protocol::pointer::Button;
use protocol::surface::TraceSurface;
use protocol::V2;
use verlet::config::ClothConfig;
use viewer::{ControlMessage, Viewer};

/// Runs the simulation without a window: scripted pointer input, draw
/// calls recorded instead of rasterized. Useful for smoke-testing the
/// whole stack and for profiling with a real grid size.
fn main() {
	env_logger::init();

	let (tx, rx) = channel();
	thread::spawn(move || {
		thread::sleep(Duration::from_millis(500));
		// drag across the middle of the cloth with the primary button
		tx.send(ControlMessage::Press(V2::new(350., 150.), Button::Primary))
			.unwrap();
		for i in 1..=20 {
			thread::sleep(Duration::from_millis(16));
			tx.send(ControlMessage::Move(V2::new(350. + i as f32 * 6., 150.)))
				.unwrap();
		}
		tx.send(ControlMessage::Release).unwrap();

		// then cut a path through it with the secondary button
		thread::sleep(Duration::from_millis(200));
		tx.send(ControlMessage::Press(V2::new(250., 100.), Button::Secondary))
			.unwrap();
		for i in 1..=20 {
			thread::sleep(Duration::from_millis(16));
			tx.send(ControlMessage::Move(V2::new(250., 100. + i as f32 * 8.)))
				.unwrap();
		}
		tx.send(ControlMessage::Release).unwrap();

		thread::sleep(Duration::from_millis(500));
		tx.send(ControlMessage::ZeroGravity).unwrap();
		thread::sleep(Duration::from_millis(500));
		tx.send(ControlMessage::Stop).unwrap();
	});

	let mut viewer = Viewer::new(ClothConfig::default());
	let mut surface = TraceSurface::new();
	viewer.run(&mut surface, rx);

	log::info!(
		"final frame: {} draw ops, {} constraints left",
		surface.ops.len(),
		viewer.cloth().constraint_count(),
	);
}
