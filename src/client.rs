//! HTTP client for the backend game API.

use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};

use crate::protocol::{GameResponse, MoveRequest, ServerInfo};

/// Errors surfaced by [`ApiClient`] calls.
#[derive(Debug, Display, Error, From)]
pub enum ClientError {
    /// The request never produced a usable HTTP response.
    #[display("transport error: {_0}")]
    Transport(reqwest::Error),
    /// The server answered with a non-success status.
    #[display("server rejected the request (status {status})")]
    #[from(ignore)]
    Rejected {
        /// HTTP status code of the rejection.
        status: u16,
    },
    /// The response body was not the expected JSON shape.
    #[display("malformed response body: {_0}")]
    Decode(serde_json::Error),
}

impl ClientError {
    /// True when the server answered but refused the request.
    ///
    /// Rejections are the one recoverable failure: the session stays live and
    /// the local mirror is untouched.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Rejected { .. })
    }
}

/// Client for the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for the given API base URL,
    /// e.g. `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Starts a new game session.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn new_game(&self) -> Result<GameResponse, ClientError> {
        info!("Requesting new game");
        let response = self
            .client
            .post(format!("{}/new", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Submits a move for the given session.
    #[instrument(skip(self), fields(game_id = %game_id, col))]
    pub async fn play(&self, game_id: &str, col: usize) -> Result<GameResponse, ClientError> {
        info!("Submitting move");
        let body = MoveRequest {
            game_id: game_id.to_string(),
            col,
        };
        let response = self
            .client
            .post(format!("{}/move", self.base_url))
            .json(&body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Fetches the current snapshot of an existing session.
    #[instrument(skip(self), fields(game_id = %game_id))]
    pub async fn state(&self, game_id: &str) -> Result<GameResponse, ClientError> {
        debug!("Fetching session state");
        let response = self
            .client
            .get(format!("{}/state", self.base_url))
            .query(&[("gameId", game_id)])
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Fetches backend build metadata.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn info(&self) -> Result<ServerInfo, ClientError> {
        let response = self
            .client
            .get(format!("{}/info", self.base_url))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Info request rejected");
            return Err(ClientError::Rejected {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Splits rejections from decodable success bodies.
    async fn decode(response: reqwest::Response) -> Result<GameResponse, ClientError> {
        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Server rejected the request");
            return Err(ClientError::Rejected {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        debug!(body = %body, "Response body");
        Ok(serde_json::from_str(&body)?)
    }
}
