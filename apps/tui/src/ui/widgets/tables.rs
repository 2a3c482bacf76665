use econ_dash::api::IndicatorDataset;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

/// Year / value rows, oldest first, with `selected` highlighted.
pub fn render_series_table(
    dataset: &IndicatorDataset,
    selected: usize,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let indicator = dataset.indicator;
    let header = Row::new(vec![Cell::from("Year"), Cell::from("Value")]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = dataset.series.len();
    // Borders plus header
    let max_visible_rows = usize::from(area.height.saturating_sub(3));
    let offset = scroll_offset(total_rows, max_visible_rows, selected);

    let rows = dataset
        .series
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(i, point)| {
            let style = if i == selected {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(point.year.to_string()),
                Cell::from(indicator.format_value(point.value)),
            ])
            .style(style)
        });

    let title = if total_rows == 0 {
        " Data ".to_string()
    } else {
        format!(" Data ({} of {}) ", selected.min(total_rows - 1) + 1, total_rows)
    };

    let table = Table::new(rows, [Constraint::Length(6), Constraint::Min(12)])
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .column_spacing(2);

    f.render_widget(table, area);
}
