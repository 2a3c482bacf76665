use crate::app::App;
use crate::ui::widgets::charts::render_pie_chart;
use crate::ui::widgets::status::{render_error, render_loading, render_placeholder};
use econ_dash::api::ChatReply;
use econ_dash::fetch::FetchState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_chat(app: &App, f: &mut Frame<'_>, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_prompt_input(app, f, layout[0]);

    let body = layout[1];
    match app.chat.reply.state() {
        None => render_placeholder(
            f,
            body,
            " Reply ",
            "Ask a question, e.g. \"CO2 emissions by sector as a pie chart\"",
        ),
        Some(FetchState::Loading) => render_loading(app, f, body, "Waiting for reply..."),
        Some(FetchState::Error(message)) => render_error(f, body, message, "Press F5 to resend"),
        Some(FetchState::Success(ChatReply::Pie(pie))) => render_pie_chart(pie, f, body),
        Some(FetchState::Success(ChatReply::Text(text))) => render_text_reply(app, text, f, body),
    }
}

fn render_prompt_input(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Prompt ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let cursor = cursor_char(app.animation_counter);
    let line = TextLine::from(vec![
        Span::styled("> ", Style::default().fg(Color::Green)),
        Span::raw(app.chat.input.as_str()),
        Span::styled(cursor, Style::default().fg(Color::Green)),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_text_reply(app: &App, text: &str, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Reply ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = Vec::new();
    if let Some(prompt) = &app.chat.last_prompt {
        lines.push(TextLine::from(Span::styled(
            format!("You: {prompt}"),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )));
        lines.push(TextLine::from(""));
    }
    lines.extend(text.lines().map(|line| TextLine::from(line.to_string())));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Blinking block cursor driven by the animation phase.
pub fn cursor_char(animation_counter: f64) -> &'static str {
    if animation_counter.sin() >= 0.0 {
        "█"
    } else {
        " "
    }
}
