use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use econ_dash::api::{IndicatorDataset, WorldBankClient};
use econ_dash::config::AppConfig;
use econ_dash::Indicator;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::error;

use crate::app::{handle_input, App, AppMessage};
use crate::ui;

/// Fetch one indicator and print it without the UI
pub async fn run_headless(config: &AppConfig, indicator: Indicator, json: bool) -> Result<()> {
    let client = WorldBankClient::new(config.http_client()?, config.worldbank_base_url.clone());

    let dataset = client
        .fetch(indicator, config.chart_window)
        .await
        .map_err(|e| {
            error!(indicator = indicator.code(), error = %e, "headless fetch failed");
            eyre!("{}", e.user_message())
        })?;

    if json {
        render_headless_json(&dataset)?;
    } else {
        render_headless_table(&dataset);
    }

    Ok(())
}

fn render_headless_table(dataset: &IndicatorDataset) {
    let indicator = dataset.indicator;

    println!("\n{}", indicator.title());
    println!("{}", "=".repeat(indicator.title().len()));
    if let Some(updated) = &dataset.meta.last_updated {
        println!("Last updated: {updated}");
    }
    println!("Fetched: {}", dataset.fetched_at.format("%Y-%m-%d %H:%M:%S"));
    println!();
    println!("{:<6} | {:>16}", "Year", "Value");
    for point in &dataset.series {
        println!(
            "{:<6} | {:>16}",
            point.year,
            indicator.format_value(point.value)
        );
    }
}

fn render_headless_json(dataset: &IndicatorDataset) -> Result<()> {
    let report = HeadlessReport::from(dataset);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");
    Ok(())
}

#[derive(Debug, serde::Serialize)]
struct HeadlessReport {
    indicator: String,
    code: String,
    title: String,
    last_updated: Option<String>,
    fetched_at: String,
    points: Vec<HeadlessPoint>,
}

#[derive(Debug, serde::Serialize)]
struct HeadlessPoint {
    year: i32,
    value: f64,
}

impl From<&IndicatorDataset> for HeadlessReport {
    fn from(dataset: &IndicatorDataset) -> Self {
        let indicator = dataset.indicator;
        Self {
            indicator: indicator.as_str().to_string(),
            code: indicator.code().to_string(),
            title: indicator.title().to_string(),
            last_updated: dataset.meta.last_updated.clone(),
            fetched_at: dataset.fetched_at.to_rfc3339(),
            points: dataset
                .series
                .iter()
                .map(|point| HeadlessPoint {
                    year: point.year,
                    value: point.value,
                })
                .collect(),
        }
    }
}

/// Run the main application event loop
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    while app.running {
        app.update();

        // Land any finished requests before drawing
        while let Ok(message) = rx.try_recv() {
            app.handle_message(message);
        }

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {
                    // Ignore non-key events
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use econ_dash::api::PageMeta;
    use econ_dash::series::Observation;

    #[test]
    fn report_keeps_series_order_and_metadata() {
        let dataset = IndicatorDataset {
            indicator: Indicator::Co2,
            meta: PageMeta {
                last_updated: Some("2024-06-28".to_string()),
                ..PageMeta::default()
            },
            records: Vec::new(),
            series: vec![
                Observation { year: 2019, value: 10.0 },
                Observation { year: 2020, value: 12.5 },
            ],
            fetched_at: chrono::Local::now(),
        };

        let report = HeadlessReport::from(&dataset);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["indicator"], "co2");
        assert_eq!(json["code"], "EN.GHG.CO2.AG.MT.CE.AR5");
        assert_eq!(json["last_updated"], "2024-06-28");
        assert_eq!(json["points"][0]["year"], 2019);
        assert_eq!(json["points"][1]["value"], 12.5);
    }
}
