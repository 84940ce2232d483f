use std::fmt;
use std::time::Duration;

use bot_logging::{bot_debug, bot_trace};
use reqwest::header::CONTENT_TYPE;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::wire::ApiResponse;
use crate::{ChatId, FailureKind, ReplyMarkup, TransportError, Update};

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

const ALLOWED_UPDATES: [&str; 2] = ["message", "callback_query"];

#[derive(Clone)]
pub struct BotSettings {
    pub api_base: String,
    pub token: String,
    /// Long-poll duration the server may hold `getUpdates` open for.
    pub poll_timeout: Duration,
    /// Extra time on top of `poll_timeout` before the HTTP request is abandoned.
    pub request_margin: Duration,
}

impl BotSettings {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: token.into(),
            poll_timeout: Duration::from_secs(30),
            request_margin: Duration::from_secs(10),
        }
    }
}

// The token is a credential; keep it out of logs.
impl fmt::Debug for BotSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotSettings")
            .field("api_base", &self.api_base)
            .field("token", &"<redacted>")
            .field("poll_timeout", &self.poll_timeout)
            .field("request_margin", &self.request_margin)
            .finish()
    }
}

/// Outbound and inbound operations the bot needs from a messaging service.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Long-polls for updates with an id of at least `offset`.
    async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TransportError>;

    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        markup: Option<&ReplyMarkup>,
    ) -> Result<(), TransportError>;

    /// Acknowledges an inline button press so the client stops its spinner.
    async fn answer_callback(&self, callback_id: &str) -> Result<(), TransportError>;
}

#[derive(Serialize)]
struct GetUpdatesRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<i64>,
    timeout: u64,
    allowed_updates: &'a [&'a str],
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: ChatId,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a ReplyMarkup>,
}

#[derive(Serialize)]
struct AnswerCallbackRequest<'a> {
    callback_query_id: &'a str,
}

#[derive(Debug, Clone)]
pub struct TelegramClient {
    settings: BotSettings,
    client: reqwest::Client,
}

impl TelegramClient {
    pub fn new(settings: BotSettings) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(settings.poll_timeout + settings.request_margin)
            .build()
            .map_err(|err| TransportError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.settings.api_base.trim_end_matches('/'),
            self.settings.token,
            method
        )
    }

    async fn call<P, R>(&self, method: &str, payload: &P) -> Result<R, TransportError>
    where
        P: Serialize + Sync,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(payload)
            .map_err(|err| TransportError::new(FailureKind::Encode, err.to_string()))?;
        bot_trace!("bot api call method={} body_len={}", method, body.len());

        let response = self
            .client
            .post(self.method_url(method))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        let envelope: ApiResponse<R> = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(TransportError::new(
                    FailureKind::HttpStatus(status.as_u16()),
                    status.to_string(),
                ));
            }
            Err(err) => {
                return Err(TransportError::new(FailureKind::Decode, err.to_string()));
            }
        };

        if !envelope.ok {
            return Err(TransportError::new(
                FailureKind::Api {
                    error_code: envelope.error_code,
                },
                envelope
                    .description
                    .unwrap_or_else(|| format!("{method} failed")),
            ));
        }

        envelope.result.ok_or_else(|| {
            TransportError::new(FailureKind::Decode, format!("{method} returned no result"))
        })
    }
}

#[async_trait::async_trait]
impl Transport for TelegramClient {
    async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TransportError> {
        let request = GetUpdatesRequest {
            offset,
            timeout: self.settings.poll_timeout.as_secs(),
            allowed_updates: &ALLOWED_UPDATES,
        };
        let updates: Vec<Update> = self.call("getUpdates", &request).await?;
        if !updates.is_empty() {
            bot_debug!("received {} update(s)", updates.len());
        }
        Ok(updates)
    }

    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        markup: Option<&ReplyMarkup>,
    ) -> Result<(), TransportError> {
        let request = SendMessageRequest {
            chat_id,
            text,
            reply_markup: markup,
        };
        let _: IgnoredAny = self.call("sendMessage", &request).await?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), TransportError> {
        let request = AnswerCallbackRequest {
            callback_query_id: callback_id,
        };
        let _: IgnoredAny = self.call("answerCallbackQuery", &request).await?;
        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    // Strip the URL: it embeds the bot token.
    let err = err.without_url();
    if err.is_timeout() {
        return TransportError::new(FailureKind::Timeout, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}
