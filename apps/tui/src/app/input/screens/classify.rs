use crate::app::input::helpers::edit_text;
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_classify_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        app.submit_audio();
        return;
    }

    if edit_text(&mut app.classify.path_input, key) {
        app.status_message.clear();
    }
}
