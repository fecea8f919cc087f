pub mod commands;
pub mod controller;
pub mod parse;
pub mod state;

pub use controller::LibraryController;
pub use state::{Library, LibrarySnapshot};
