use crate::app::input::helpers::edit_text;
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_chat_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        app.submit_prompt();
        return;
    }

    if edit_text(&mut app.chat.input, key) {
        app.status_message.clear();
    }
}
