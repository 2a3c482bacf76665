use crate::app::App;
use crate::ui::widgets::charts::render_indicator_chart;
use crate::ui::widgets::nav::render_indicator_tabs;
use crate::ui::widgets::status::{render_error, render_loading, render_placeholder};
use crate::ui::widgets::tables::render_series_table;
use econ_dash::fetch::FetchState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

pub fn render_indicators(app: &App, f: &mut Frame<'_>, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(5)])
        .split(area);

    render_indicator_tabs(app, f, layout[0]);

    let body = layout[1];
    match app.indicator_state(app.indicator) {
        None => render_placeholder(f, body, " Indicators ", "Select an indicator to load it"),
        Some(FetchState::Loading) => {
            let label = format!("Loading {} data...", app.indicator.label());
            render_loading(app, f, body, &label);
        }
        Some(FetchState::Error(message)) => {
            render_error(f, body, message, "Press r to retry");
        }
        Some(FetchState::Success(dataset)) => {
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
                .split(body);
            render_indicator_chart(dataset, f, split[0]);
            render_series_table(dataset, app.table_scroll, f, split[1]);
        }
    }
}
