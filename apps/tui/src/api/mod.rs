// HTTP clients for the World Bank indicator API, the chat backend and the
// audio classifier.

pub mod chat;
pub mod error;
pub mod predict;
pub mod records;
pub mod worldbank;

#[cfg(test)]
mod test_server;

pub use chat::{ChatClient, ChatReply, PieData};
pub use error::ApiError;
pub use predict::{PredictClient, PredictionResult};
pub use records::{parse_indicator_body, parse_indicator_response, IndicatorRecord, PageMeta};
pub use worldbank::{IndicatorDataset, WorldBankClient};
