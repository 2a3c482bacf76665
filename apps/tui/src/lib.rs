// Library side of econ-dash: API clients, parsing and fetch state
pub mod api;
pub mod config;
pub mod domain;
pub mod fetch;
pub mod logging;
pub mod series;

pub use domain::{Indicator, Tab};
