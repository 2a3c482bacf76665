use crate::cli::CliArgs;
use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(80, 80, area);
    f.render_widget(Clear, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Press F1 or Esc to close",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };

    f.render_widget(hint, hint_area);
}

fn key_line(key: &'static str, action: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" - {action}")),
    ])
}

fn heading(title: &'static str) -> TextLine<'static> {
    TextLine::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "World Bank Indicator Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Charts world GDP growth, CO2 emissions and agricultural land, forwards questions to a chat backend and classifies audio clips.",
        ),
        TextLine::from(""),
        heading("Everywhere:"),
        key_line("Tab / Shift+Tab", "Next / previous screen"),
        key_line("F1", "Toggle this help popup"),
        key_line("F5", "Retry the last request on this screen"),
        key_line("F10", "Quit application"),
        TextLine::from(""),
        heading("API screen:"),
        key_line("←/→ or 1-3", "Switch indicator"),
        key_line("↑/↓ PgUp/PgDn Home/End", "Scroll the data table"),
        key_line("r", "Reload the current indicator"),
        key_line("q", "Quit application"),
        TextLine::from(""),
        heading("Chat and Classify screens:"),
        key_line("Enter", "Send prompt / upload file"),
        key_line("Backspace", "Delete a character"),
        key_line("Esc", "Clear the input"),
        TextLine::from(""),
        heading("CLI Options:"),
    ];

    let help_text = CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}
