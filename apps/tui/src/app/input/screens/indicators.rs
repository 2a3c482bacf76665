use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use crossterm::event::KeyCode;
use econ_dash::Indicator;

const PAGE_ROWS: isize = 5;

pub fn handle_indicators_input(app: &mut App, key: KeyCode) {
    let count = Indicator::ALL.len();
    match key {
        KeyCode::Left => {
            select_index(app, wrap_decrement(app.indicator.index(), count));
        }
        KeyCode::Right => {
            select_index(app, wrap_increment(app.indicator.index(), count));
        }
        KeyCode::Char(c @ '1'..='3') => {
            select_index(app, (c as usize) - ('1' as usize));
        }
        KeyCode::Char('r') => app.retry(),
        KeyCode::Up => app.scroll_table(-1),
        KeyCode::Down => app.scroll_table(1),
        KeyCode::PageUp => app.scroll_table(-PAGE_ROWS),
        KeyCode::PageDown => app.scroll_table(PAGE_ROWS),
        KeyCode::Home => app.table_scroll = 0,
        KeyCode::End => app.scroll_table(isize::MAX),
        KeyCode::Char('q') => app.running = false,
        _ => {}
    }
}

fn select_index(app: &mut App, index: usize) {
    if let Some(indicator) = Indicator::from_index(index) {
        app.select_indicator(indicator);
    }
}
