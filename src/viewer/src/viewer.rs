use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, SystemTime};

use material::TextureSlot;
use protocol::surface::Surface;
use protocol::NOMINAL_DT;
use render::FrameMode;
use verlet::cloth::Cloth;
use verlet::config::ClothConfig;

use crate::control_message::ControlMessage;
use crate::pointer::PointerTracker;

/// Owns one simulation and drives it tick by tick against a surface.
/// The host frame driver calls `tick` (or hands control to `run` for
/// a self-paced loop); all input mutation happens between ticks.
pub struct Viewer {
	config: ClothConfig,
	cloth: Cloth,
	pointer: PointerTracker,
	texture: TextureSlot,
}

impl Viewer {
	pub fn new(config: ClothConfig) -> Self {
		Self {
			config,
			cloth: Cloth::new(&config, false),
			pointer: PointerTracker::default(),
			texture: TextureSlot::empty(),
		}
	}

	/// Start loading a texture in the background; frames keep falling
	/// back to wireframe until it is ready.
	pub fn with_texture(mut self, path: &str) -> Self {
		self.texture = TextureSlot::load(path);
		self
	}

	pub fn with_texture_slot(mut self, slot: TextureSlot) -> Self {
		self.texture = slot;
		self
	}

	pub fn with_pointer(mut self, pointer: PointerTracker) -> Self {
		self.pointer = pointer;
		self
	}

	pub fn cloth(&self) -> &Cloth {
		&self.cloth
	}

	pub fn pointer_mut(&mut self) -> &mut PointerTracker {
		&mut self.pointer
	}

	/// Zero-gravity mode: full rebuild, unpinned, floating.
	pub fn zero_g(&mut self) {
		self.config.gravity = 0.;
		self.cloth = Cloth::new(&self.config, true);
	}

	/// Rebuild hanging from the pinned top row with current settings.
	pub fn reset(&mut self) {
		self.cloth = Cloth::new(&self.config, false);
	}

	/// One frame: clear, relax `accuracy` times, then render with
	/// whichever strategy the texture slot readiness selects.
	pub fn tick(&mut self, surface: &mut dyn Surface) {
		surface.clear();
		for _ in 0..self.config.accuracy {
			self.cloth.relax_pass();
		}
		let ptr = self.pointer.snapshot();
		match self.texture.get() {
			Some(tex) => render::draw_frame(
				&mut self.cloth,
				&ptr,
				FrameMode::Textured(&tex),
				NOMINAL_DT,
				surface,
			),
			None => render::draw_frame(
				&mut self.cloth,
				&ptr,
				FrameMode::Wireframe,
				NOMINAL_DT,
				surface,
			),
		}
	}

	fn handle(&mut self, msg: ControlMessage) -> bool {
		match msg {
			ControlMessage::Press(p, button) => self.pointer.press(p, button),
			ControlMessage::Move(p) => self.pointer.moved(p),
			ControlMessage::Release => self.pointer.release(),
			ControlMessage::ZeroGravity => self.zero_g(),
			ControlMessage::Reset => self.reset(),
			ControlMessage::Stop => return false,
		}
		true
	}

	/// Self-paced loop at the nominal frame rate. Control messages are
	/// drained before each tick, never during one. Returns on `Stop`
	/// or when the sender hangs up.
	pub fn run(&mut self, surface: &mut dyn Surface, rx: Receiver<ControlMessage>) {
		let rtime = (NOMINAL_DT * 1e6) as u64;
		let mut start_time = SystemTime::now();
		loop {
			loop {
				match rx.try_recv() {
					Ok(msg) => {
						if !self.handle(msg) {
							log::info!("viewer stopped");
							return;
						}
					}
					Err(TryRecvError::Empty) => break,
					Err(TryRecvError::Disconnected) => {
						log::info!("control channel closed");
						return;
					}
				}
			}
			self.tick(surface);

			let next_time = SystemTime::now();
			let dt = next_time
				.duration_since(start_time)
				.unwrap_or_default()
				.as_micros() as u64;
			if dt < rtime {
				std::thread::sleep(Duration::from_micros(rtime - dt));
			}
			start_time = next_time;
		}
	}
}
