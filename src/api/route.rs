use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::status::{RouteStatus, RouteSummary};
use crate::constants::{DEFAULT_SERVICE_ORIGIN, ROUTE_ENDPOINT};
use crate::renderer::{MapRenderer, Route, TransferSet};

/// Rider preferences forwarded to the routing service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub avoid_transfers: bool,
    pub wheelchair: bool,
    pub prefer_fastest: bool,
    pub avoid_crowded: bool,
    pub safe_priority: bool,
    /// Serialized as `null` when unset
    pub budget: Option<i64>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            avoid_transfers: false,
            wheelchair: false,
            prefer_fastest: true,
            avoid_crowded: false,
            safe_priority: false,
            budget: None,
        }
    }
}

/// Parse the budget field the way browsers read an integer out of text:
/// an optional sign and the leading digits, ignoring anything after them
/// (`"12.5"` is 12, `"100abc"` is 100). No leading digits means no budget.
#[must_use]
pub fn parse_budget(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let value: i64 = unsigned[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub node: String,
    #[serde(default)]
    pub info: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub applied_rules: Vec<String>,
    #[serde(default)]
    pub steps: Vec<RouteStep>,
    /// Why no path was found, when the service says
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("routing service responded with HTTP {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Parse(String),
    #[error("no response within {0} ms")]
    Timeout(u32),
}

/// Client for the routing service's `POST /route` endpoint
#[derive(Debug, Clone)]
pub struct RouteClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RouteClient {
    /// Build a client for the service hosted at `origin` (scheme and host)
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(origin: &str) -> Result<Self, RouteError> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_millis(u64::from(
            crate::constants::REQUEST_TIMEOUT_MS,
        )));

        let http = builder
            .build()
            .map_err(|e| RouteError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: route_endpoint(origin),
        })
    }

    /// Client for the service serving the current page, falling back to
    /// [`DEFAULT_SERVICE_ORIGIN`] outside a browser
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn from_page() -> Result<Self, RouteError> {
        let origin = page_origin().unwrap_or_else(|| DEFAULT_SERVICE_ORIGIN.to_string());
        Self::new(&origin)
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the routing service for a route
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails
    /// - The response status is not a success
    /// - The response body cannot be deserialized
    /// - No response arrives within [`REQUEST_TIMEOUT_MS`](crate::constants::REQUEST_TIMEOUT_MS)
    pub async fn request(&self, request: &RouteRequest) -> Result<RouteResponse, RouteError> {
        #[cfg(target_arch = "wasm32")]
        let result = with_timeout(self.send(request), crate::constants::REQUEST_TIMEOUT_MS).await;

        // Native clients time out inside reqwest, see `new`
        #[cfg(not(target_arch = "wasm32"))]
        let result = self.send(request).await;

        result
    }

    async fn send(&self, request: &RouteRequest) -> Result<RouteResponse, RouteError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| RouteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RouteError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| RouteError::Parse(e.to_string()))
    }
}

/// Race `request` against a browser timer
#[cfg(target_arch = "wasm32")]
async fn with_timeout<T>(
    request: impl std::future::Future<Output = Result<T, RouteError>>,
    millis: u32,
) -> Result<T, RouteError> {
    use futures::future::{select, Either};

    let request = std::pin::pin!(request);
    let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(millis));
    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(RouteError::Timeout(millis)),
    }
}

fn route_endpoint(origin: &str) -> String {
    format!("{}{ROUTE_ENDPOINT}", origin.trim_end_matches('/'))
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    // file:// pages report an opaque "null" origin
    (origin != "null").then_some(origin)
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

/// The three ways a routing request can end
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    Found { route: Route, summary: RouteSummary },
    NoRoute { detail: Option<String> },
    Failed(RouteError),
}

impl RouteOutcome {
    #[must_use]
    pub fn from_result(result: Result<RouteResponse, RouteError>) -> Self {
        match result {
            Ok(response) if response.path.is_empty() => Self::NoRoute {
                detail: response.detail,
            },
            Ok(response) => Self::Found {
                route: response.path.clone(),
                summary: RouteSummary {
                    path: response.path,
                    weight: response.weight,
                    applied_rules: response.applied_rules,
                },
            },
            Err(e) => Self::Failed(e),
        }
    }

    /// Bring the renderer in line with this outcome: the route for a hit,
    /// the base graph otherwise. The service never reports transfers.
    pub fn apply(&self, renderer: &mut MapRenderer) {
        match self {
            Self::Found { route, .. } => renderer.render(route.clone(), TransferSet::new()),
            Self::NoRoute { .. } | Self::Failed(_) => renderer.reset(),
        }
    }

    #[must_use]
    pub fn status(&self) -> RouteStatus {
        match self {
            Self::Found { summary, .. } => RouteStatus::Summary(summary.clone()),
            Self::NoRoute { detail } => RouteStatus::NoRoute {
                detail: detail.clone(),
            },
            Self::Failed(e) => RouteStatus::Error(e.to_string()),
        }
    }
}
