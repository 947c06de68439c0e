//! Outbound HTTP adapter. Connection errors, timeouts, non-2xx statuses and
//! unparseable bodies all collapse into `None`; the cause is recorded in the
//! log, never surfaced to the caller.

use std::time::Duration;

use serde_json::Value;

use crate::config::USER_AGENT;

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// The timeout applies to the whole request; a call can never suspend
    /// past it.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` with `query` attached as URL parameters and parse the body
    /// as JSON.
    pub async fn fetch_json(&self, url: &str, query: &[(&'static str, String)]) -> Option<Value> {
        tracing::debug!("Requesting {}", url);

        let response = match self.client.get(url).query(query).send().await {
            Ok(response) => response,
            Err(e) => {
                let kind = if e.is_timeout() {
                    "Timeout"
                } else if e.is_connect() {
                    "Connection error"
                } else {
                    "Request error"
                };
                tracing::error!("{} for URL {}: {}", kind, url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::error!("HTTP error {} for URL {}", status, url);
            return None;
        }

        match response.json::<Value>().await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::error!("Unparseable response body from URL {}: {}", url, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> Fetcher {
        Fetcher::new(Duration::from_millis(250)).unwrap()
    }

    #[tokio::test]
    async fn successful_json_response_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("latitude", "52.52"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"current": {"temperature_2m": 18.4}})),
            )
            .mount(&server)
            .await;

        let url = format!("{}/forecast", server.uri());
        let result = fetcher()
            .fetch_json(&url, &[("latitude", "52.52".to_string())])
            .await;

        assert_eq!(
            result,
            Some(serde_json::json!({"current": {"temperature_2m": 18.4}}))
        );
    }

    #[tokio::test]
    async fn server_error_status_yields_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = fetcher().fetch_json(&server.uri(), &[]).await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn client_error_status_yields_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = fetcher().fetch_json(&server.uri(), &[]).await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn unparseable_body_yields_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = fetcher().fetch_json(&server.uri(), &[]).await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn response_slower_than_the_timeout_yields_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let result = fetcher().fetch_json(&server.uri(), &[]).await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn unreachable_host_yields_none() {
        // Port 9 (discard) is not listening in the test environment.
        let result = fetcher().fetch_json("http://127.0.0.1:9", &[]).await;
        assert_eq!(result, None);
    }
}
