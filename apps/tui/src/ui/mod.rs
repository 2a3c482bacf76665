// UI module for econ-dash
// Splits the frame and hands each region to a screen or widget

pub mod screens;
pub mod widgets;

use crate::app::App;
use econ_dash::Tab;
use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Screen
            Constraint::Length(3), // Status
            Constraint::Length(3), // Navigation
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    match app.tab {
        Tab::Indicators => screens::indicators::render_indicators(app, f, layout[0]),
        Tab::Chat => screens::chat::render_chat(app, f, layout[0]),
        Tab::Classify => screens::classify::render_classify(app, f, layout[0]),
    }

    widgets::status::render_status_bar(app, f, layout[1]);
    widgets::nav::render_nav_tabs(app, f, layout[2]);

    if app.show_help {
        let area = f.area();
        screens::help::render_help_popup(f, area);
    }
}
