use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use super::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct PieData {
    pub title: String,
    pub slices: Vec<(String, f64)>,
}

impl PieData {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|(_, value)| value).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatReply {
    Text(String),
    Pie(PieData),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    prompt: &'a str,
}

/// Reply as sent by the backend; which fields are set depends on `type`.
#[derive(Debug, Default, Deserialize)]
pub struct RawChatReply {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "scalar_labels")]
    pub labels: Option<Vec<String>>,
    #[serde(default, deserialize_with = "numeric_values")]
    pub values: Option<Vec<f64>>,
    pub title: Option<String>,
    pub response: Option<String>,
}

/// Labels may arrive as numbers (years, codes); any scalar becomes text.
fn scalar_labels<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(items) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(D::Error::custom(format!("label {other} is not a scalar"))),
        })
        .collect::<Result<_, _>>()
        .map(Some)
}

/// Values are numbers or numeric strings.
fn numeric_values<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(items) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    items
        .into_iter()
        .map(|item| {
            let number = match &item {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            };
            number.ok_or_else(|| D::Error::custom(format!("value {item} is not a number")))
        })
        .collect::<Result<_, _>>()
        .map(Some)
}

impl TryFrom<RawChatReply> for ChatReply {
    type Error = ApiError;

    fn try_from(raw: RawChatReply) -> Result<Self, Self::Error> {
        if raw.kind.as_deref() != Some("pie") {
            return raw
                .response
                .map(Self::Text)
                .ok_or_else(|| ApiError::malformed("reply has neither chart nor text"));
        }

        let (Some(labels), Some(values)) = (raw.labels, raw.values) else {
            return Err(ApiError::malformed("pie reply without labels or values"));
        };
        if labels.len() != values.len() {
            return Err(ApiError::malformed(format!(
                "pie reply has {} labels but {} values",
                labels.len(),
                values.len()
            )));
        }
        if labels.is_empty() {
            return Err(ApiError::malformed("pie reply has no slices"));
        }
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ApiError::malformed("pie values must be non-negative"));
        }

        Ok(Self::Pie(PieData {
            title: raw
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "Chart".to_string()),
            slices: labels.into_iter().zip(values).collect(),
        }))
    }
}

pub fn parse_chat_reply(body: &str) -> Result<ChatReply, ApiError> {
    let raw: RawChatReply = serde_json::from_str(body)?;
    ChatReply::try_from(raw)
}

#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    url: String,
}

impl ChatClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub async fn ask(&self, prompt: &str) -> Result<ChatReply, ApiError> {
        info!(chars = prompt.len(), "sending prompt");

        let response = self
            .http
            .post(&self.url)
            .json(&ChatRequest { prompt })
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "chat backend refused prompt");
            return Err(ApiError::from_status(status));
        }

        let body = response.text().await?;
        parse_chat_reply(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::{http_client, serve_once};

    #[test]
    fn pie_reply_becomes_slices() {
        let reply = parse_chat_reply(
            r#"{"type":"pie","labels":["Coal","Gas","Oil"],"values":[40,25,35],"title":"Energy mix"}"#,
        )
        .unwrap();

        let ChatReply::Pie(pie) = reply else {
            panic!("expected a pie reply");
        };
        assert_eq!(pie.title, "Energy mix");
        assert_eq!(pie.slices.len(), 3);
        assert_eq!(pie.slices[1], ("Gas".to_string(), 25.0));
        assert!((pie.total() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pie_title_defaults_to_chart() {
        let reply = parse_chat_reply(r#"{"type":"pie","labels":["a"],"values":[1]}"#).unwrap();
        assert!(matches!(reply, ChatReply::Pie(pie) if pie.title == "Chart"));
    }

    #[test]
    fn numeric_labels_and_string_values_are_accepted() {
        let reply = parse_chat_reply(
            r#"{"type":"pie","labels":[2019,2020,"2021"],"values":[1,"2.5"," 3 "],"title":"By year"}"#,
        )
        .unwrap();

        let ChatReply::Pie(pie) = reply else {
            panic!("expected a pie reply");
        };
        assert_eq!(
            pie.slices,
            [
                ("2019".to_string(), 1.0),
                ("2020".to_string(), 2.5),
                ("2021".to_string(), 3.0),
            ]
        );
    }

    #[test]
    fn anything_but_pie_is_text() {
        let reply = parse_chat_reply(r#"{"type":"bar","response":"GDP rose 3%"}"#).unwrap();
        assert_eq!(reply, ChatReply::Text("GDP rose 3%".to_string()));

        let reply = parse_chat_reply(r#"{"response":"hello"}"#).unwrap();
        assert_eq!(reply, ChatReply::Text("hello".to_string()));
    }

    #[test]
    fn inconsistent_pie_is_malformed() {
        let cases = [
            r#"{"type":"pie","labels":["a","b"],"values":[1]}"#,
            r#"{"type":"pie","labels":["a"]}"#,
            r#"{"type":"pie","labels":[],"values":[]}"#,
            r#"{"type":"pie","labels":["a"],"values":[-1]}"#,
            r#"{"type":"pie","labels":["a"],"values":["x"]}"#,
            r#"{"type":"pie","labels":[{"name":"a"}],"values":[1]}"#,
            r#"{}"#,
            r#"[]"#,
        ];
        for body in cases {
            let err = parse_chat_reply(body).unwrap_err();
            assert!(matches!(err, ApiError::MalformedResponse(_)), "{body}");
        }
    }

    #[tokio::test]
    async fn ask_posts_the_prompt_as_json() {
        let (url, server) = serve_once(200, r#"{"response":"It grew."}"#).await;
        let client = ChatClient::new(http_client(), format!("{url}/ask"));

        let reply = client.ask("How did GDP change?").await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(reply, ChatReply::Text("It grew.".to_string()));
        assert!(request.starts_with("POST /ask"));
        assert!(request.contains(r#"{"prompt":"How did GDP change?"}"#));
    }
}
