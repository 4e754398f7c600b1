pub mod cli;
pub mod menus;
pub mod ui;
