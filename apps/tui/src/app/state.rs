use std::path::PathBuf;
use std::time::{Duration, Instant};

use econ_dash::api::{ChatReply, IndicatorDataset, PredictionResult};
use econ_dash::fetch::{Applied, FetchMachine, FetchState};
use econ_dash::{Indicator, Tab};
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, info};

use crate::app::actions::{AppActions, AppMessage};

const THROBBER_STEP: Duration = Duration::from_millis(100);

#[derive(Debug, Default)]
pub struct ChatState {
    pub input: String,
    pub last_prompt: Option<String>,
    pub reply: FetchMachine<ChatReply>,
}

#[derive(Debug, Default)]
pub struct ClassifyState {
    pub path_input: String,
    pub selected: Option<PathBuf>,
    pub result: FetchMachine<PredictionResult>,
}

impl ClassifyState {
    pub fn selected_name(&self) -> Option<String> {
        self.selected.as_ref().map(|path| {
            path.file_name().map_or_else(
                || path.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
        })
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub tab: Tab,
    pub indicator: Indicator,
    pub indicators: [FetchMachine<IndicatorDataset>; 3],
    pub table_scroll: usize,
    pub chat: ChatState,
    pub classify: ClassifyState,
    pub status_message: String,
    pub show_help: bool,
    pub chart_window: usize,
    pub throbber: ThrobberState,
    pub animation_counter: f64,
    pub last_frame: Instant,
    last_throbber_step: Instant,
    pub actions: AppActions,
}

impl App {
    pub fn new(actions: AppActions, indicator: Indicator, chart_window: usize) -> Self {
        Self {
            running: true,
            tab: Tab::Indicators,
            indicator,
            indicators: [FetchMachine::new(), FetchMachine::new(), FetchMachine::new()],
            table_scroll: 0,
            chat: ChatState::default(),
            classify: ClassifyState::default(),
            status_message: String::new(),
            show_help: false,
            chart_window,
            throbber: ThrobberState::default(),
            animation_counter: 0.0,
            last_frame: Instant::now(),
            last_throbber_step: Instant::now(),
            actions,
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Cursor blink phase, wraps at 2*PI
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        if now.duration_since(self.last_throbber_step) >= THROBBER_STEP {
            self.throbber.calc_next();
            self.last_throbber_step = now;
        }
    }

    pub const fn indicator_state(
        &self,
        indicator: Indicator,
    ) -> Option<&FetchState<IndicatorDataset>> {
        self.indicators[indicator.index()].state()
    }

    pub fn current_dataset(&self) -> Option<&IndicatorDataset> {
        match self.indicator_state(self.indicator) {
            Some(FetchState::Success(dataset)) => Some(dataset),
            _ => None,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.status_message.clear();
        if tab == Tab::Indicators {
            self.ensure_loaded(self.indicator);
        }
    }

    /// Shows `indicator`, loading it on first visit.
    pub fn select_indicator(&mut self, indicator: Indicator) {
        if self.indicator != indicator {
            self.table_scroll = 0;
        }
        self.indicator = indicator;
        self.ensure_loaded(indicator);
    }

    pub fn ensure_loaded(&mut self, indicator: Indicator) {
        if !self.indicators[indicator.index()].has_started() {
            self.load_indicator(indicator);
        }
    }

    pub fn load_indicator(&mut self, indicator: Indicator) {
        let ticket = self.indicators[indicator.index()].begin();
        info!(indicator = indicator.code(), "loading indicator");
        self.actions
            .fetch_indicator(indicator, self.chart_window, ticket);
    }

    /// Re-runs whatever the current screen last attempted.
    /// Chat and classify wait for an in-flight request to land first.
    pub fn retry(&mut self) {
        match self.tab {
            Tab::Indicators => {
                self.table_scroll = 0;
                self.load_indicator(self.indicator);
            }
            Tab::Chat => {
                if self.chat.reply.is_loading() {
                    return;
                }
                if let Some(prompt) = self.chat.last_prompt.clone() {
                    self.send_prompt(prompt);
                }
            }
            Tab::Classify => {
                if self.classify.result.is_loading() {
                    return;
                }
                if let Some(path) = self.classify.selected.clone() {
                    self.start_classification(path);
                }
            }
        }
    }

    pub fn submit_prompt(&mut self) {
        let prompt = self.chat.input.trim().to_string();
        if prompt.is_empty() {
            self.status_message = "Enter a prompt first".to_string();
            return;
        }
        if self.chat.reply.is_loading() {
            return;
        }
        self.chat.input.clear();
        self.send_prompt(prompt);
    }

    fn send_prompt(&mut self, prompt: String) {
        self.status_message.clear();
        let ticket = self.chat.reply.begin();
        self.chat.last_prompt = Some(prompt.clone());
        self.actions.ask(prompt, ticket);
    }

    /// Takes the typed path as the new selection and uploads it.
    pub fn submit_audio(&mut self) {
        let raw = self.classify.path_input.trim();
        if raw.is_empty() {
            self.status_message = "Please select an audio file first".to_string();
            return;
        }
        if self.classify.result.is_loading() {
            return;
        }
        let path = PathBuf::from(raw);
        self.classify.result.reset();
        self.classify.selected = Some(path.clone());
        self.start_classification(path);
    }

    fn start_classification(&mut self, path: PathBuf) {
        self.status_message.clear();
        let ticket = self.classify.result.begin();
        self.actions.classify(path, ticket);
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::IndicatorLoaded {
                indicator,
                ticket,
                result,
            } => {
                let machine = &mut self.indicators[indicator.index()];
                if machine.complete(ticket, result) == Applied::Accepted {
                    if let Some(FetchState::Success(dataset)) = machine.state() {
                        self.status_message = format!(
                            "{} updated at {}",
                            indicator.label(),
                            dataset.fetched_at.format("%H:%M:%S")
                        );
                    }
                } else {
                    debug!(indicator = indicator.code(), "ignored stale indicator result");
                }
            }
            AppMessage::ChatAnswered { ticket, result } => {
                self.chat.reply.complete(ticket, result);
            }
            AppMessage::PredictionReady { ticket, result } => {
                self.classify.result.complete(ticket, result);
            }
        }
    }

    pub fn scroll_table(&mut self, delta: isize) {
        let rows = self.current_dataset().map_or(0, |d| d.series.len());
        let max = rows.saturating_sub(1);
        self.table_scroll = self.table_scroll.saturating_add_signed(delta).min(max);
    }
}

/// App wired to unroutable endpoints; spawned requests never succeed.
#[cfg(test)]
pub fn test_app() -> (App, tokio::sync::mpsc::UnboundedReceiver<AppMessage>) {
    let config = econ_dash::config::AppConfig {
        worldbank_base_url: "http://127.0.0.1:9".to_string(),
        predict_url: "http://127.0.0.1:9/predict".to_string(),
        llm_url: "http://127.0.0.1:9/ask".to_string(),
        ..econ_dash::config::AppConfig::default()
    };
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let actions = AppActions::new(&config, tx).unwrap();
    (App::new(actions, Indicator::Gdp, config.chart_window), rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use econ_dash::api::{ApiError, PageMeta};
    use econ_dash::series::Observation;

    fn dataset(indicator: Indicator) -> IndicatorDataset {
        IndicatorDataset {
            indicator,
            meta: PageMeta::default(),
            records: Vec::new(),
            series: vec![
                Observation { year: 2020, value: 1.0 },
                Observation { year: 2021, value: 2.0 },
                Observation { year: 2022, value: 3.0 },
            ],
            fetched_at: chrono::Local::now(),
        }
    }

    #[tokio::test]
    async fn first_visit_loads_once() {
        let (mut app, _rx) = test_app();
        app.select_tab(Tab::Indicators);
        assert!(app.indicators[Indicator::Gdp.index()].is_loading());

        app.select_indicator(Indicator::Co2);
        app.select_indicator(Indicator::Co2);
        assert!(app.indicators[Indicator::Co2.index()].is_loading());
        assert!(!app.indicators[Indicator::AgriLand.index()].has_started());
    }

    #[tokio::test]
    async fn stale_indicator_result_is_ignored() {
        let (mut app, _rx) = test_app();
        let machine = &mut app.indicators[Indicator::Gdp.index()];
        let old = machine.begin();
        let new = machine.begin();

        app.handle_message(AppMessage::IndicatorLoaded {
            indicator: Indicator::Gdp,
            ticket: new,
            result: Err(ApiError::Timeout),
        });
        app.handle_message(AppMessage::IndicatorLoaded {
            indicator: Indicator::Gdp,
            ticket: old,
            result: Ok(dataset(Indicator::Gdp)),
        });

        assert_eq!(
            app.indicator_state(Indicator::Gdp).map(ToString::to_string),
            Some("Error(Request timed out)".to_string())
        );
    }

    #[tokio::test]
    async fn success_sets_status_and_scroll_is_bounded() {
        let (mut app, _rx) = test_app();
        let ticket = app.indicators[Indicator::Gdp.index()].begin();
        app.handle_message(AppMessage::IndicatorLoaded {
            indicator: Indicator::Gdp,
            ticket,
            result: Ok(dataset(Indicator::Gdp)),
        });

        assert!(app.status_message.starts_with("GDP updated at"));
        app.scroll_table(10);
        assert_eq!(app.table_scroll, 2);
        app.scroll_table(-5);
        assert_eq!(app.table_scroll, 0);
    }

    #[tokio::test]
    async fn empty_prompt_is_not_sent() {
        let (mut app, _rx) = test_app();
        app.chat.input = "   ".to_string();
        app.submit_prompt();
        assert!(!app.chat.reply.has_started());
        assert_eq!(app.status_message, "Enter a prompt first");
    }

    #[tokio::test]
    async fn new_audio_selection_discards_previous_result() {
        let (mut app, _rx) = test_app();
        let ticket = app.classify.result.begin();
        app.handle_message(AppMessage::PredictionReady {
            ticket,
            result: Ok(PredictionResult {
                label: "horn".to_string(),
                confidence: 0.8,
            }),
        });

        app.classify.path_input = "/tmp/next.wav".to_string();
        app.submit_audio();

        assert!(app.classify.result.is_loading());
        assert_eq!(app.classify.selected_name().as_deref(), Some("next.wav"));
    }

    #[tokio::test]
    async fn retry_waits_for_in_flight_chat() {
        let (mut app, _rx) = test_app();
        app.select_tab(Tab::Chat);
        app.chat.last_prompt = Some("gdp by year".to_string());
        let ticket = app.chat.reply.begin();

        app.retry();

        let reply = ChatReply::Text("ok".to_string());
        assert_eq!(app.chat.reply.complete(ticket, Ok(reply)), Applied::Accepted);
    }

    #[tokio::test]
    async fn retry_waits_for_in_flight_classification() {
        let (mut app, _rx) = test_app();
        app.select_tab(Tab::Classify);
        app.classify.selected = Some(PathBuf::from("/tmp/clip.wav"));
        let ticket = app.classify.result.begin();

        app.retry();

        let result = Ok(PredictionResult {
            label: "siren".to_string(),
            confidence: 0.5,
        });
        assert_eq!(app.classify.result.complete(ticket, result), Applied::Accepted);
    }

    #[tokio::test]
    async fn retry_resends_last_prompt_once_settled() {
        let (mut app, _rx) = test_app();
        app.select_tab(Tab::Chat);
        app.chat.last_prompt = Some("gdp by year".to_string());
        let ticket = app.chat.reply.begin();
        app.chat.reply.complete(ticket, Err(ApiError::Timeout));

        app.retry();

        assert!(app.chat.reply.is_loading());
    }

    #[tokio::test]
    async fn missing_audio_path_prompts_for_selection() {
        let (mut app, _rx) = test_app();
        app.submit_audio();
        assert_eq!(app.status_message, "Please select an audio file first");
        assert!(app.classify.selected.is_none());
    }
}
