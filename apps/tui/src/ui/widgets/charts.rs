use econ_dash::api::{IndicatorDataset, PieData};
use econ_dash::series::value_bounds;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap};
use ratatui::Frame;

const SLICE_COLORS: [Color; 8] = [
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::Rgb(0, 0, 238),
    Color::Red,
    Color::LightBlue,
    Color::Gray,
];

pub const fn slice_color(index: usize) -> Color {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

/// Year-over-value line chart for a loaded indicator.
pub fn render_indicator_chart(dataset: &IndicatorDataset, f: &mut Frame<'_>, area: Rect) {
    let indicator = dataset.indicator;
    let points: Vec<(f64, f64)> = dataset
        .series
        .iter()
        .map(|point| (f64::from(point.year), point.value))
        .collect();

    let [x_min, x_max] = year_bounds(&points);
    let [y_min, y_max] = value_bounds(&dataset.series);
    let y_mid = (y_min + y_max) / 2.0;

    let x_labels = vec![
        Span::raw(format!("{x_min:.0}")),
        Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
        Span::raw(format!("{x_max:.0}")),
    ];
    let y_labels = vec![
        Span::raw(indicator.format_value(y_min)),
        Span::raw(indicator.format_value(y_mid)),
        Span::raw(indicator.format_value(y_max)),
    ];

    let datasets = vec![Dataset::default()
        .name(indicator.label())
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" {} ", indicator.title()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .title("Year")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(indicator.axis_unit())
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn year_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let first = points.first().map_or(0.0, |p| p.0);
    let last = points.last().map_or(0.0, |p| p.0);
    if (last - first).abs() < f64::EPSILON {
        [first - 1.0, last + 1.0]
    } else {
        [first.min(last), first.max(last)]
    }
}

/// Share of each slice in percent, in slice order.
pub fn slice_percentages(pie: &PieData) -> Vec<f64> {
    let total = pie.total();
    pie.slices
        .iter()
        .map(|(_, value)| {
            if total > 0.0 {
                value / total * 100.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Pie drawn on a canvas with a percentage legend beside it.
pub fn render_pie_chart(pie: &PieData, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", pie.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 4 || inner.height < 4 {
        return;
    }

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    render_pie_canvas(pie, f, split[0]);
    render_pie_legend(pie, f, split[1]);
}

fn render_pie_canvas(pie: &PieData, f: &mut Frame<'_>, area: Rect) {
    let total = pie.total();
    // Terminal cells are about twice as tall as wide
    let aspect = f64::from(area.width) / (2.0 * f64::from(area.height.max(1)));

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .paint(|ctx| {
                if total <= 0.0 {
                    return;
                }
                let mut start = 0.0_f64;
                for (index, (_, value)) in pie.slices.iter().enumerate() {
                    let sweep = value / total * 360.0;
                    let color = slice_color(index);
                    let mut angle = start;
                    while angle < start + sweep {
                        let radians = angle.to_radians();
                        ctx.draw(&CanvasLine {
                            x1: 0.0,
                            y1: 0.0,
                            x2: radians.cos(),
                            y2: radians.sin(),
                            color,
                        });
                        angle += 0.5;
                    }
                    start += sweep;
                }
            })
            .x_bounds([-1.1 * aspect, 1.1 * aspect])
            .y_bounds([-1.1, 1.1]),
        area,
    );
}

fn render_pie_legend(pie: &PieData, f: &mut Frame<'_>, area: Rect) {
    let lines: Vec<TextLine<'_>> = pie
        .slices
        .iter()
        .zip(slice_percentages(pie))
        .enumerate()
        .map(|(index, ((label, _), percent))| {
            TextLine::from(vec![
                Span::styled("■ ", Style::default().fg(slice_color(index))),
                Span::styled(label.as_str(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {percent:.1}%"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true }),
        area,
    );
}
