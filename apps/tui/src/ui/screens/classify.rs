use crate::app::App;
use crate::ui::screens::chat::cursor_char;
use crate::ui::widgets::status::{render_error, render_loading, render_placeholder};
use econ_dash::fetch::FetchState;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_classify(app: &App, f: &mut Frame<'_>, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Path input
            Constraint::Length(1), // Selected file
            Constraint::Min(5),    // Result
        ])
        .split(area);

    render_path_input(app, f, layout[0]);

    let selected = app.classify.selected_name().map_or_else(
        || Span::styled("No file selected", Style::default().fg(Color::Gray)),
        |name| Span::styled(format!("Selected: {name}"), Style::default().fg(Color::White)),
    );
    f.render_widget(Paragraph::new(TextLine::from(selected)), layout[1]);

    let body = layout[2];
    match app.classify.result.state() {
        None => render_placeholder(
            f,
            body,
            " Prediction ",
            "Enter the path to a .wav file and press Enter to classify it",
        ),
        Some(FetchState::Loading) => render_loading(app, f, body, "Classifying audio..."),
        Some(FetchState::Error(message)) => render_error(f, body, message, "Press F5 to retry"),
        Some(FetchState::Success(result)) => {
            let label_style = Style::default().fg(Color::Gray);
            let value_style = Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
            let text = Text::from(vec![
                TextLine::from(""),
                TextLine::from(vec![
                    Span::styled("Prediction: ", label_style),
                    Span::styled(result.label.as_str(), value_style),
                ]),
                TextLine::from(vec![
                    Span::styled("Confidence: ", label_style),
                    Span::styled(result.confidence_percent(), value_style),
                ]),
            ]);
            let paragraph = Paragraph::new(text)
                .block(
                    Block::default()
                        .title(" Prediction ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Cyan)),
                )
                .alignment(Alignment::Center);
            f.render_widget(paragraph, body);
        }
    }
}

fn render_path_input(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Audio file ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let line = TextLine::from(vec![
        Span::styled("> ", Style::default().fg(Color::Green)),
        Span::raw(app.classify.path_input.as_str()),
        Span::styled(
            cursor_char(app.animation_counter),
            Style::default().fg(Color::Green),
        ),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}
