// Application state, key handling and background requests

pub mod actions;
pub mod input;
pub mod state;

pub use actions::{AppActions, AppMessage};
pub use input::handle_input;
pub use state::App;
