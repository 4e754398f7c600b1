mod event;
mod menu;
mod message;
mod overlay;
mod persona;
mod sender;
mod speech;

pub use event::*;
pub use menu::*;
pub use message::*;
pub use overlay::*;
pub use persona::*;
pub use sender::*;
pub use speech::*;
