pub mod control_message;
pub mod pointer;
pub mod viewer;

pub use control_message::ControlMessage;
pub use pointer::PointerTracker;
pub use viewer::Viewer;
