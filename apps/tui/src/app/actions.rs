use std::path::PathBuf;

use color_eyre::Result;
use econ_dash::api::{
    ApiError, ChatClient, ChatReply, IndicatorDataset, PredictClient, PredictionResult,
    WorldBankClient,
};
use econ_dash::config::AppConfig;
use econ_dash::fetch::FetchTicket;
use econ_dash::Indicator;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// Results travelling from background tasks back to the event loop.
#[derive(Debug)]
pub enum AppMessage {
    IndicatorLoaded {
        indicator: Indicator,
        ticket: FetchTicket,
        result: Result<IndicatorDataset, ApiError>,
    },
    ChatAnswered {
        ticket: FetchTicket,
        result: Result<ChatReply, ApiError>,
    },
    PredictionReady {
        ticket: FetchTicket,
        result: Result<PredictionResult, ApiError>,
    },
}

/// Owns the API clients and launches requests off the UI loop.
#[derive(Debug, Clone)]
pub struct AppActions {
    worldbank: WorldBankClient,
    chat: ChatClient,
    predict: PredictClient,
    tx: UnboundedSender<AppMessage>,
}

impl AppActions {
    pub fn new(config: &AppConfig, tx: UnboundedSender<AppMessage>) -> Result<Self> {
        let http = config.http_client()?;

        Ok(Self {
            worldbank: WorldBankClient::new(http.clone(), config.worldbank_base_url.clone()),
            chat: ChatClient::new(http.clone(), config.llm_url.clone()),
            predict: PredictClient::new(http, config.predict_url.clone()),
            tx,
        })
    }

    pub fn fetch_indicator(&self, indicator: Indicator, window: usize, ticket: FetchTicket) {
        let client = self.worldbank.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.fetch(indicator, window).await;
            send(
                &tx,
                AppMessage::IndicatorLoaded {
                    indicator,
                    ticket,
                    result,
                },
            );
        });
    }

    pub fn ask(&self, prompt: String, ticket: FetchTicket) {
        let client = self.chat.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.ask(&prompt).await;
            send(&tx, AppMessage::ChatAnswered { ticket, result });
        });
    }

    pub fn classify(&self, path: PathBuf, ticket: FetchTicket) {
        let client = self.predict.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.classify(&path).await;
            send(&tx, AppMessage::PredictionReady { ticket, result });
        });
    }
}

fn send(tx: &UnboundedSender<AppMessage>, message: AppMessage) {
    if tx.send(message).is_err() {
        debug!("event loop gone; dropping result");
    }
}
