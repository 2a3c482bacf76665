use std::path::PathBuf;

/// Failure classes surfaced by the API clients.
///
/// Each variant collapses to one short string via [`ApiError::user_message`];
/// the `Display` form keeps the detail for the log file.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("host unreachable: {0}")]
    NetworkUnreachable(String),
    #[error("request timed out")]
    Timeout,
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("fewer than two usable data points")]
    InsufficientData,
    #[error("cannot read {path}: {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0}")]
    Unknown(String),
}

impl ApiError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse(detail.into())
    }

    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::NetworkUnreachable(_) => "No internet connection",
            Self::Timeout => "Request timed out",
            Self::MalformedResponse(_) => "Invalid API response",
            Self::InsufficientData => "Not enough data to chart",
            Self::File { .. } => "Could not open file",
            Self::Unknown(_) => "Failed to load data",
        }
    }

    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self::Unknown(format!("server returned {status}"))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::NetworkUnreachable(err.to_string())
        } else if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else if let Some(status) = err.status() {
            Self::from_status(status)
        } else {
            Self::Unknown(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn every_variant_has_a_short_message() {
        let errors = [
            ApiError::NetworkUnreachable("dns".into()),
            ApiError::Timeout,
            ApiError::malformed("shape"),
            ApiError::InsufficientData,
            ApiError::File {
                path: PathBuf::from("a.wav"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            },
            ApiError::Unknown("boom".into()),
        ];
        let messages: Vec<_> = errors.iter().map(ApiError::user_message).collect();
        assert_eq!(
            messages,
            [
                "No internet connection",
                "Request timed out",
                "Invalid API response",
                "Not enough data to chart",
                "Could not open file",
                "Failed to load data",
            ]
        );
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn refused_connection_is_unreachable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap()
            .get(format!("http://{addr}/"))
            .send()
            .await
            .unwrap_err();
        assert!(matches!(
            ApiError::from(err),
            ApiError::NetworkUnreachable(_)
        ));
    }

    #[tokio::test]
    async fn silent_server_is_a_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let err = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap()
            .get(format!("http://{addr}/"))
            .send()
            .await
            .unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Timeout));
        server.abort();
    }
}
