pub mod events;
mod message_log;
mod overlay;
mod session;
mod synthesizer;

pub use message_log::*;
pub use overlay::*;
pub use session::*;
pub use synthesizer::*;
