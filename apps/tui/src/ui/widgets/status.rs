use crate::app::App;
use econ_dash::Tab;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, WhichUse, BRAILLE_SIX};

pub fn render_status_bar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let status = if app.status_message.is_empty() {
        Span::styled(key_hints(app.tab), Style::default().fg(Color::Gray))
    } else {
        Span::styled(app.status_message.as_str(), Style::default().fg(Color::Yellow))
    };

    f.render_widget(Paragraph::new(TextLine::from(status)).block(block), area);
}

const fn key_hints(tab: Tab) -> &'static str {
    match tab {
        Tab::Indicators => "←/→ indicator | ↑/↓ scroll | r retry | Tab next screen | F1 help | q quit",
        Tab::Chat => "Type a prompt | Enter send | Esc clear | F5 resend | Tab next screen | F1 help",
        Tab::Classify => "Type a file path | Enter upload | Esc clear | F5 retry | Tab next screen | F1 help",
    }
}

/// Spinner shown while a request is in flight.
pub fn render_loading(app: &App, f: &mut Frame<'_>, area: Rect, label: &str) {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, spinner, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(u16::try_from(label.chars().count() + 2).unwrap_or(u16::MAX)),
        Constraint::Fill(1),
    ])
    .areas(row);

    let throbber = Throbber::default()
        .label(label.to_string())
        .style(Style::default().fg(Color::Cyan))
        .throbber_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);

    let mut state = app.throbber.clone();
    f.render_stateful_widget(throbber, spinner, &mut state);
}

/// Error panel with the user-facing message and how to recover.
pub fn render_error(f: &mut Frame<'_>, area: Rect, message: &str, hint: &str) {
    let block = Block::default()
        .title(" Error ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let text = Text::from(vec![
        TextLine::from(""),
        TextLine::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(hint.to_string(), Style::default().fg(Color::Gray))),
    ]);

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Bordered placeholder for screens with nothing to show yet.
pub fn render_placeholder(f: &mut Frame<'_>, area: Rect, title: &str, message: &str) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new(message.to_string())
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}
