//! Message-target resolution and message body selection.
//!
//! Conversations can be addressed by a bare numeric id or by pasting an inbox
//! link (`https://www.1v1me.com/inbox?convo=<id>`). Both forms are resolved to
//! a numeric id by [`ConversationRef::resolve`] before any request is built.

use serde_json::{Value, json};

use crate::error::Error;

/// Marker preceding the conversation id in an inbox URL.
const CONVO_MARKER: &str = "convo=";

/// A caller-supplied reference to a chat thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationRef {
    /// Bare numeric conversation id, used directly.
    Id(u64),
    /// Inbox URL embedding the id after a `convo=` marker.
    Url(String),
}

impl ConversationRef {
    /// Resolve the reference to a numeric conversation id.
    ///
    /// For [`ConversationRef::Url`], the id is the digit run immediately
    /// following the first `convo=` marker; anything after those digits is
    /// ignored. A URL without a marker (or with no digits after it) yields
    /// [`Error::InvalidConversation`].
    pub fn resolve(&self) -> Result<u64, Error> {
        match self {
            Self::Id(id) => Ok(*id),
            Self::Url(url) => {
                let after = url
                    .split_once(CONVO_MARKER)
                    .map(|(_, rest)| rest)
                    .ok_or_else(|| Error::InvalidConversation(url.clone()))?;
                let digits: &str = {
                    let end = after
                        .find(|c: char| !c.is_ascii_digit())
                        .unwrap_or(after.len());
                    &after[..end]
                };
                digits
                    .parse()
                    .map_err(|_| Error::InvalidConversation(url.clone()))
            }
        }
    }
}

impl From<u64> for ConversationRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<String> for ConversationRef {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<&str> for ConversationRef {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

/// The content of an outgoing message — exactly one of three kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    /// Plain text.
    Text(String),
    /// Giphy animated-image id.
    Giphy(String),
    /// Imgur image id.
    Imgur(String),
}

impl MessageBody {
    /// Pick a body from optional fields: text wins over giphy, giphy over
    /// imgur (first non-empty in that order). Returns `None` when all three
    /// are absent or empty.
    pub fn select(
        text: Option<String>,
        giphy_id: Option<String>,
        imgur_id: Option<String>,
    ) -> Option<Self> {
        let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());
        if let Some(text) = non_empty(text) {
            Some(Self::Text(text))
        } else if let Some(giphy) = non_empty(giphy_id) {
            Some(Self::Giphy(giphy))
        } else {
            non_empty(imgur_id).map(Self::Imgur)
        }
    }

    /// Payload field name carrying the content.
    fn field(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Giphy(_) => "giphy_id",
            Self::Imgur(_) => "imgur_id",
        }
    }

    /// Discriminator tag the service expects in the `type` field.
    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "Message::TextMessage",
            Self::Giphy(_) => "Message::GiphyMessage",
            Self::Imgur(_) => "Message::ImgurMessage",
        }
    }

    fn value(&self) -> &str {
        match self {
            Self::Text(s) | Self::Giphy(s) | Self::Imgur(s) => s,
        }
    }
}

/// Build the `POST /v1/messages` payload for a resolved conversation id.
///
/// The payload carries the id, exactly one content field, and the matching
/// discriminator tag.
pub fn message_payload(conversation_id: u64, body: &MessageBody) -> Value {
    json!({
        "conversation_id": conversation_id,
        (body.field()): body.value(),
        "type": body.kind(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INBOX_URL_PREFIX;

    // ── ConversationRef::resolve ───────────────────────────────────

    #[test]
    fn resolve_bare_id() {
        assert_eq!(ConversationRef::Id(7).resolve().unwrap(), 7);
    }

    #[test]
    fn resolve_inbox_url() {
        let r = ConversationRef::from(format!("{INBOX_URL_PREFIX}42"));
        assert_eq!(r.resolve().unwrap(), 42);
    }

    #[test]
    fn resolve_ignores_trailing_content() {
        let r = ConversationRef::from("https://www.1v1me.com/inbox?convo=42&tab=all");
        assert_eq!(r.resolve().unwrap(), 42);
    }

    #[test]
    fn resolve_bare_marker_string() {
        // Marker without a full URL around it still resolves
        assert_eq!(ConversationRef::from("convo=9").resolve().unwrap(), 9);
    }

    #[test]
    fn resolve_missing_marker_fails() {
        let r = ConversationRef::from("https://www.1v1me.com/inbox");
        assert!(matches!(r.resolve(), Err(Error::InvalidConversation(_))));
    }

    #[test]
    fn resolve_marker_without_digits_fails() {
        let r = ConversationRef::from("https://www.1v1me.com/inbox?convo=abc");
        assert!(matches!(r.resolve(), Err(Error::InvalidConversation(_))));
    }

    // ── MessageBody::select ────────────────────────────────────────

    #[test]
    fn select_text_wins_over_giphy() {
        let body = MessageBody::select(
            Some("hello".into()),
            Some("giphy123".into()),
            None,
        );
        assert_eq!(body, Some(MessageBody::Text("hello".into())));
    }

    #[test]
    fn select_giphy_wins_over_imgur() {
        let body = MessageBody::select(None, Some("g1".into()), Some("i1".into()));
        assert_eq!(body, Some(MessageBody::Giphy("g1".into())));
    }

    #[test]
    fn select_empty_strings_are_absent() {
        let body = MessageBody::select(Some(String::new()), None, Some("i1".into()));
        assert_eq!(body, Some(MessageBody::Imgur("i1".into())));
    }

    #[test]
    fn select_nothing_yields_none() {
        assert_eq!(MessageBody::select(None, None, None), None);
    }

    // ── message_payload ────────────────────────────────────────────

    #[test]
    fn text_payload_shape() {
        let payload = message_payload(42, &MessageBody::Text("gg".into()));
        assert_eq!(
            payload,
            serde_json::json!({
                "conversation_id": 42,
                "text": "gg",
                "type": "Message::TextMessage",
            })
        );
    }

    #[test]
    fn giphy_payload_omits_other_fields() {
        let payload = message_payload(1, &MessageBody::Giphy("abc".into()));
        assert_eq!(payload["type"], "Message::GiphyMessage");
        assert_eq!(payload["giphy_id"], "abc");
        assert!(payload.get("text").is_none());
        assert!(payload.get("imgur_id").is_none());
    }

    #[test]
    fn imgur_payload_shape() {
        let payload = message_payload(3, &MessageBody::Imgur("xyz".into()));
        assert_eq!(payload["type"], "Message::ImgurMessage");
        assert_eq!(payload["imgur_id"], "xyz");
    }
}
