//! Draws from a remote randomness service.
//!
//! One GET per batch. The service answers with newline-separated integers
//! in `[0, max]`, one per requested draw, which are normalized by `max`.

use super::{Draw, EntropySource};
use crate::error::{DiceError, DiceResult};

/// Default endpoint template. `{quantity}` and `{max}` are substituted.
pub const DEFAULT_ENDPOINT: &str = "https://www.random.org/integers/?num={quantity}&min=0&max={max}&col=1&base=10&format=plain&rnd=new";

/// Upper bound of the integers requested from the service.
pub const DEFAULT_MAX: u32 = 12000;

/// Where and how to ask for remote integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// URL template containing `{quantity}` and optionally `{max}`.
    pub endpoint: String,
    /// Upper bound (inclusive) of the requested integers.
    pub max: u32,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max: DEFAULT_MAX,
        }
    }
}

impl RemoteConfig {
    /// Use a different endpoint template with the default range.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// The request URL for a batch of `quantity` integers.
    pub fn url(&self, quantity: usize) -> String {
        self.endpoint
            .replace("{quantity}", &quantity.to_string())
            .replace("{max}", &self.max.to_string())
    }
}

/// Performs the HTTP GET for a batch and returns the body text.
pub trait Fetch {
    /// Fetch `url`, failing on transport errors or non-success statuses.
    fn get(&self, url: &str) -> impl Future<Output = DiceResult<String>>;
}

/// [`Fetch`] over `surf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetch;

impl Fetch for HttpFetch {
    async fn get(&self, url: &str) -> DiceResult<String> {
        let url = surf::Url::parse(url).map_err(|error| DiceError::Transport(error.to_string()))?;

        let mut response = surf::get(url)
            .await
            .map_err(|error| DiceError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiceError::Status(status.into()));
        }

        response
            .body_string()
            .await
            .map_err(|error| DiceError::MalformedBody(error.to_string()))
    }
}

/// Parse a response body into exactly `quantity` draws.
///
/// Every line must be an integer in `[0, max]` and the line count must match
/// the request; anything else rejects the whole batch.
pub fn parse_body(body: &str, quantity: usize, max: u32) -> DiceResult<Vec<Draw>> {
    let draws = body
        .trim()
        .lines()
        .map(|line| {
            let line = line.trim();
            let value = line
                .parse::<u32>()
                .map_err(|_| DiceError::MalformedBody(format!("not an integer: '{line}'")))?;
            Draw::from_integer(value, max)
                .ok_or_else(|| DiceError::MalformedBody(format!("{value} outside [0, {max}]")))
        })
        .collect::<DiceResult<Vec<Draw>>>()?;

    if draws.len() != quantity {
        return Err(DiceError::MalformedBody(format!(
            "expected {quantity} values, got {}",
            draws.len()
        )));
    }

    Ok(draws)
}

/// Draws fetched from a remote service, one request per batch.
#[derive(Debug, Clone, Default)]
pub struct RemoteSource<F = HttpFetch> {
    config: RemoteConfig,
    fetch: F,
}

impl RemoteSource {
    /// A remote source using HTTP.
    pub fn new(config: RemoteConfig) -> Self {
        Self::with_fetch(config, HttpFetch)
    }
}

impl<F> RemoteSource<F> {
    /// A remote source using a custom transport.
    pub fn with_fetch(config: RemoteConfig, fetch: F) -> Self {
        Self { config, fetch }
    }

    /// The active configuration.
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }
}

impl<F: Fetch> EntropySource for RemoteSource<F> {
    async fn draws(&mut self, quantity: usize) -> DiceResult<Vec<Draw>> {
        let url = self.config.url(quantity);
        let body = self.fetch.get(&url).await?;
        parse_body(&body, quantity, self.config.max)
    }
}
