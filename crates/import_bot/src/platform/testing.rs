//! In-memory transport for exercising the dispatcher without the network.

use std::collections::VecDeque;
use std::sync::Mutex;

use telegram_transport::{ChatId, FailureKind, ReplyMarkup, Transport, TransportError, Update};

#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub chat_id: ChatId,
    pub text: String,
    pub markup: Option<ReplyMarkup>,
}

#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<SentMessage>>,
    answered: Mutex<Vec<String>>,
    attempts: Mutex<usize>,
    failing_chat: Option<ChatId>,
    hanging_chat: Option<ChatId>,
    batches: Mutex<VecDeque<Result<Vec<Update>, TransportError>>>,
    offsets: Mutex<Vec<Option<i64>>>,
}

impl RecordingTransport {
    /// Every `send_message` to `chat_id` fails with a network error.
    pub fn failing_for(chat_id: ChatId) -> Self {
        Self {
            failing_chat: Some(chat_id),
            ..Self::default()
        }
    }

    /// Every `send_message` to `chat_id` never completes.
    pub fn hanging_for(chat_id: ChatId) -> Self {
        Self {
            hanging_chat: Some(chat_id),
            ..Self::default()
        }
    }

    pub fn push_batch(&self, batch: Result<Vec<Update>, TransportError>) {
        self.batches.lock().unwrap().push_back(batch);
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, chat_id: ChatId) -> Vec<SentMessage> {
        self.sent()
            .into_iter()
            .filter(|message| message.chat_id == chat_id)
            .collect()
    }

    pub fn answered(&self) -> Vec<String> {
        self.answered.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    pub fn offsets(&self) -> Vec<Option<i64>> {
        self.offsets.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
    async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TransportError> {
        self.offsets.lock().unwrap().push(offset);
        self.batches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        markup: Option<&ReplyMarkup>,
    ) -> Result<(), TransportError> {
        *self.attempts.lock().unwrap() += 1;
        if self.hanging_chat == Some(chat_id) {
            std::future::pending::<()>().await;
        }
        if self.failing_chat == Some(chat_id) {
            return Err(TransportError::new(FailureKind::Network, "connection reset"));
        }
        self.sent.lock().unwrap().push(SentMessage {
            chat_id,
            text: text.to_string(),
            markup: markup.cloned(),
        });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), TransportError> {
        self.answered.lock().unwrap().push(callback_id.to_string());
        Ok(())
    }
}
