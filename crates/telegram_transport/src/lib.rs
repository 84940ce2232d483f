//! Telegram Bot API transport: long polling, outgoing messages and keyboards.
mod client;
mod events;
mod markup;
mod types;
mod wire;

pub use client::{BotSettings, TelegramClient, Transport};
pub use events::InboundEvent;
pub use markup::{InlineButton, KeyboardButton, ReplyMarkup};
pub use types::{ChatId, FailureKind, TransportError};
pub use wire::Update;
