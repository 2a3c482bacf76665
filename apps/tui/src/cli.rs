use clap::{CommandFactory, Parser};
use econ_dash::Indicator;

#[derive(Debug, Parser)]
#[command(name = "econ-dash", version, about = "World Bank indicator dashboard")]
pub struct CliArgs {
    /// Fetch one indicator, print it and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Indicator shown first (gdp, co2, agri)
    #[arg(long, value_name = "NAME", value_parser = parse_indicator, default_value = "gdp")]
    pub indicator: Indicator,

    /// Number of most recent years to chart (0 keeps all)
    #[arg(long, value_name = "N")]
    pub window: Option<usize>,

    /// Override the World Bank API base URL
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the prediction endpoint
    #[arg(long = "predict-url", value_name = "URL")]
    pub predict_url: Option<String>,

    /// Override the chat backend endpoint
    #[arg(long = "llm-url", value_name = "URL")]
    pub llm_url: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.base_url {
            std::env::set_var("WORLDBANK_BASE_URL", url);
        }
        if let Some(url) = &self.predict_url {
            std::env::set_var("PREDICT_URL", url);
        }
        if let Some(url) = &self.llm_url {
            std::env::set_var("LLM_URL", url);
        }
        if let Some(window) = self.window {
            std::env::set_var("CHART_WINDOW", window.to_string());
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

fn parse_indicator(value: &str) -> Result<Indicator, String> {
    Indicator::parse(value)
        .ok_or_else(|| format!("unknown indicator {value:?}; use gdp, co2 or agri"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_gdp() {
        let args = CliArgs::try_parse_from(["econ-dash"]).unwrap();
        assert_eq!(args.indicator, Indicator::Gdp);
        assert!(!args.headless);
        assert!(args.window.is_none());
    }

    #[test]
    fn parses_headless_flags() {
        let args = CliArgs::try_parse_from([
            "econ-dash",
            "--headless",
            "--json",
            "--indicator",
            "agri",
            "--window",
            "5",
        ])
        .unwrap();
        assert!(args.headless && args.json);
        assert_eq!(args.indicator, Indicator::AgriLand);
        assert_eq!(args.window, Some(5));
    }

    #[test]
    fn help_lists_endpoint_overrides() {
        let help = CliArgs::help_text();
        assert!(help.contains("--llm-url"));
        assert!(help.contains("--predict-url"));
    }

    #[test]
    fn rejects_unknown_indicator() {
        assert!(CliArgs::try_parse_from(["econ-dash", "--indicator", "oil"]).is_err());
    }
}
