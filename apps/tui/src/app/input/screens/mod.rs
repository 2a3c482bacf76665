use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use crossterm::event::KeyCode;
use econ_dash::Tab;

mod chat;
mod classify;
mod help;
mod indicators;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_keys(app, key) {
        return;
    }

    if handle_global_keys(app, key) {
        return;
    }

    match app.tab {
        Tab::Indicators => indicators::handle_indicators_input(app, key),
        Tab::Chat => chat::handle_chat_input(app, key),
        Tab::Classify => classify::handle_classify_input(app, key),
    }
}

fn handle_global_keys(app: &mut App, key: KeyCode) -> bool {
    let count = Tab::ALL.len();
    let next = match key {
        KeyCode::F(10) => {
            app.running = false;
            return true;
        }
        KeyCode::F(5) => {
            app.retry();
            return true;
        }
        KeyCode::Tab => wrap_increment(app.tab.index(), count),
        KeyCode::BackTab => wrap_decrement(app.tab.index(), count),
        _ => return false,
    };

    if let Some(tab) = Tab::from_index(next) {
        app.select_tab(tab);
    }
    true
}
