use protocol::pointer::Button;
use protocol::V2;

/// Host-to-simulation messages, drained between ticks so pointer state
/// never changes mid-step.
pub enum ControlMessage {
	/// Pointer pressed at screen coordinates with the given button.
	Press(V2, Button),
	/// Pointer moved to screen coordinates.
	Move(V2),
	Release,
	/// Drop gravity to zero and rebuild the cloth unpinned.
	ZeroGravity,
	/// Rebuild the cloth hanging from its pinned top row.
	Reset,
	Stop,
}
