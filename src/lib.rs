pub mod client;
pub mod config;
pub mod error;
pub mod message;

pub use client::Client;
pub use error::Error;
pub use message::{ConversationRef, MessageBody};

/// 1v1Me REST API base URL (all endpoints are relative to this)
pub const API_BASE: &str = "https://api.1v1me.com/api";

/// Site origin sent on every request
pub const SITE_ORIGIN: &str = "https://www.1v1me.com";

/// Referer sent on every request
pub const SITE_REFERER: &str = "https://www.1v1me.com/";

/// Inbox URL prefix — conversation links look like
/// `https://www.1v1me.com/inbox?convo=<id>`
pub const INBOX_URL_PREFIX: &str = "https://www.1v1me.com/inbox?convo=";
