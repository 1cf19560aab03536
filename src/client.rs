//! The 1v1Me request client.
//!
//! One method per API operation. Each method builds a payload and/or endpoint
//! path and delegates to one of two senders (POST/GET) that perform the call
//! and return the decoded JSON body verbatim. The HTTP status is never
//! inspected — application-level errors come back in the body for the caller
//! to interpret.

use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, ORIGIN, REFERER,
    USER_AGENT,
};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::Error;
use crate::message::{self, ConversationRef, MessageBody};
use crate::{API_BASE, SITE_ORIGIN, SITE_REFERER};

/// Page size requested by [`Client::get_matches`] when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Browser identity the site's web client presents.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";

/// Fixed header set sent on every request.
///
/// Mirrors the site's own web client, which the API expects; built once at
/// construction and never mutated. Fails only when the token contains bytes
/// that cannot appear in a header value.
fn default_headers(token: &str) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}"))?,
    );
    headers.insert(ORIGIN, HeaderValue::from_static(SITE_ORIGIN));
    headers.insert(REFERER, HeaderValue::from_static(SITE_REFERER));
    headers.insert(
        HeaderName::from_static("sec-ch-ua"),
        HeaderValue::from_static(
            "\"Not A(Brand\";v=\"99\", \"Google Chrome\";v=\"121\", \"Chromium\";v=\"121\"",
        ),
    );
    headers.insert(
        HeaderName::from_static("sec-ch-ua-mobile"),
        HeaderValue::from_static("?0"),
    );
    headers.insert(
        HeaderName::from_static("sec-ch-ua-platform"),
        HeaderValue::from_static("\"Windows\""),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("empty"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("cors"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("same-site"),
    );
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    Ok(headers)
}

/// `POST /v1/stakes/{game_id}/purchase` payload.
///
/// `amount` is in dollars; the service wants cents.
fn bet_payload(team_id: u64, amount: u64) -> Value {
    json!({
        "tournament_team_id": team_id,
        "amount": amount * 100,
    })
}

fn matches_endpoint(amount: Option<u32>) -> String {
    let page_size = amount.unwrap_or(DEFAULT_PAGE_SIZE);
    format!("/v1/stakes?page=1&page_size={page_size}")
}

/// Authenticated client for the 1v1Me API.
///
/// Holds the bearer token inside an immutable default-header set; safe to
/// share across tasks behind `&` — no per-call state is kept.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Build a client from a bearer token.
    pub fn new(token: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .default_headers(default_headers(token)?)
            .build()?;
        Ok(Self {
            http,
            base_url: API_BASE.to_string(),
        })
    }

    /// POST `endpoint` with an optional JSON payload, returning the decoded
    /// body. No retry, no status-code branching.
    async fn post(&self, endpoint: &str, payload: Option<&Value>) -> Result<Value, Error> {
        debug!("POST {endpoint}");
        let mut req = self.http.post(format!("{}{endpoint}", self.base_url));
        if let Some(payload) = payload {
            req = req.json(payload);
        }
        Ok(req.send().await?.json().await?)
    }

    /// GET `endpoint`, returning the decoded body.
    async fn get(&self, endpoint: &str) -> Result<Value, Error> {
        debug!("GET {endpoint}");
        let resp = self
            .http
            .get(format!("{}{endpoint}", self.base_url))
            .send()
            .await?;
        Ok(resp.json().await?)
    }

    /// Send a message to a conversation.
    ///
    /// The conversation may be given as a bare id or an inbox URL; it is
    /// resolved before anything goes on the wire, and an unresolvable
    /// reference returns [`Error::InvalidConversation`] without issuing a
    /// request.
    pub async fn send_message(
        &self,
        conversation: impl Into<ConversationRef>,
        body: MessageBody,
    ) -> Result<Value, Error> {
        let conversation_id = conversation.into().resolve()?;
        let payload = message::message_payload(conversation_id, &body);
        self.post("/v1/messages", Some(&payload)).await
    }

    /// Place a bet of `amount` dollars on a team in a stake.
    pub async fn bet(&self, game_id: u64, team_id: u64, amount: u64) -> Result<Value, Error> {
        let endpoint = format!("/v1/stakes/{game_id}/purchase");
        self.post(&endpoint, Some(&bet_payload(team_id, amount)))
            .await
    }

    /// List open stakes (first page; defaults to [`DEFAULT_PAGE_SIZE`] entries).
    pub async fn get_matches(&self, amount: Option<u32>) -> Result<Value, Error> {
        self.get(&matches_endpoint(amount)).await
    }

    /// React to a message with a UTF-8 emoji or text reaction.
    pub async fn send_reaction(&self, message_id: u64, reaction: &str) -> Result<Value, Error> {
        let endpoint = format!("/v1/messages/{message_id}/reactions");
        let payload = json!({
            "type": "utf8",
            "value": reaction,
        });
        self.post(&endpoint, Some(&payload)).await
    }

    /// Cheer a team on a live broadcast.
    pub async fn cheer(&self, tv_id: u64, team_id: u64, amount: u64) -> Result<Value, Error> {
        let endpoint = format!("/v1/tv/{tv_id}/cheer");
        let payload = json!({
            "amount": amount,
            "team_id": team_id,
        });
        self.post(&endpoint, Some(&payload)).await
    }

    /// Fetch the teams playing in a stake.
    pub async fn get_teams_info(&self, game_id: u64) -> Result<Value, Error> {
        self.get(&format!("/v1/stakes/{game_id}/teams")).await
    }

    /// Fetch play-by-play entries for a match.
    pub async fn get_play_by_play(&self, game_id: u64, amount: u32) -> Result<Value, Error> {
        self.get(&format!(
            "/v1/matches/{game_id}/play_by_plays?page_size={amount}"
        ))
        .await
    }

    /// Fetch the authenticated user's own info (also marks the user online).
    pub async fn get_self_user_info(&self) -> Result<Value, Error> {
        self.post("/v1/users/online", None).await
    }

    /// Fetch another user's info.
    pub async fn get_user_info(&self, user_id: u64) -> Result<Value, Error> {
        self.get(&format!("/v1/users/{user_id}")).await
    }

    /// List live broadcasts available to watch.
    pub async fn get_live_streams(&self) -> Result<Value, Error> {
        self.get("/v1/stakes/watch").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── headers ────────────────────────────────────────────────────

    #[test]
    fn headers_carry_bearer_token() {
        let headers = default_headers("tok123").unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok123");
        assert_eq!(
            headers.get(ACCEPT).unwrap(),
            "application/json, text/plain, */*"
        );
        assert_eq!(headers.get(ORIGIN).unwrap(), SITE_ORIGIN);
    }

    #[test]
    fn headers_reject_non_header_token() {
        assert!(matches!(
            default_headers("bad\ntoken"),
            Err(Error::InvalidToken(_))
        ));
    }

    // ── payloads & endpoints ───────────────────────────────────────

    #[test]
    fn bet_amount_scaled_to_cents() {
        assert_eq!(
            bet_payload(9, 3),
            serde_json::json!({
                "tournament_team_id": 9,
                "amount": 300,
            })
        );
    }

    #[test]
    fn matches_endpoint_default_page_size() {
        assert_eq!(matches_endpoint(None), "/v1/stakes?page=1&page_size=20");
    }

    #[test]
    fn matches_endpoint_explicit_page_size() {
        assert_eq!(matches_endpoint(Some(5)), "/v1/stakes?page=1&page_size=5");
    }

    #[test]
    fn client_construction_succeeds() {
        assert!(Client::new("tok").is_ok());
    }
}
