use crate::app::App;
use econ_dash::{Indicator, Tab};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

const HIGHLIGHT: Color = Color::Rgb(0, 0, 238);

/// Bottom navigation between the three screens.
pub fn render_nav_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = Tab::ALL
        .iter()
        .map(|tab| TextLine::from(tab.label()))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(app.tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

pub fn render_indicator_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = Indicator::ALL
        .iter()
        .enumerate()
        .map(|(i, indicator)| TextLine::from(format!("{} {}", i + 1, indicator.label())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.indicator.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD))
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}
