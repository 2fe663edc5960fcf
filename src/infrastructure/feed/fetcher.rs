use reqwest::header::USER_AGENT;
use std::time::Duration;

/// Desktop browser identity sent with every feed request. Some feed hosts
/// reject obvious bot user agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36(KHTML, like Gecko) Chrome/70.0.3538.110Safari/537.36";

/// No request timeout unless one is set explicitly; callers that need
/// bounded latency wrap the fetch themselves.
pub const DEFAULT_TIMEOUT: Option<Duration> = None;

/// Issues a single GET for a feed URL and returns the raw body.
///
/// The status code is not inspected: an error page body is handed to the
/// decoder like any other. Retries are never attempted.
#[derive(Debug, Clone)]
pub struct FeedFetcher {
    client: reqwest::Client,
    user_agent: String,
    timeout: Option<Duration>,
}

impl FeedFetcher {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// GET `url` and read the whole body.
    ///
    /// Malformed URLs, unsupported schemes and connection failures all come
    /// back as the `reqwest::Error` of the failed send.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, reqwest::Error> {
        let mut request = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        // bytes() consumes the response, so the connection goes back to the
        // pool (or is closed) whether or not the read succeeds.
        let body = response.bytes().await?;

        tracing::debug!(
            url,
            status = status.as_u16(),
            bytes = body.len(),
            "Fetched feed"
        );

        Ok(body.to_vec())
    }
}

impl Default for FeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}
