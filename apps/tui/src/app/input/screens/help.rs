use crate::app::state::App;
use crossterm::event::KeyCode;

/// F1 toggles the overlay. While it is open every key except F10 stops here.
pub fn handle_help_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::F(1) => app.show_help = !app.show_help,
        KeyCode::Esc if app.show_help => app.show_help = false,
        KeyCode::F(10) => return false,
        _ => return app.show_help,
    }
    true
}
