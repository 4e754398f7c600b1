pub mod personas;
pub mod speech;
