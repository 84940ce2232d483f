use crate::wire::{Contact, Update, User};
use crate::ChatId;

/// An update reduced to what the conversation cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// Typed text, a command or a reply-keyboard press.
    Text { chat_id: ChatId, text: String },
    /// Inline button press.
    Selection {
        chat_id: ChatId,
        callback_id: String,
        data: String,
    },
    /// Phone number shared through a contact button.
    Contact {
        chat_id: ChatId,
        phone: String,
        display_name: String,
    },
}

impl InboundEvent {
    pub fn chat_id(&self) -> ChatId {
        match self {
            InboundEvent::Text { chat_id, .. }
            | InboundEvent::Selection { chat_id, .. }
            | InboundEvent::Contact { chat_id, .. } => *chat_id,
        }
    }
}

impl Update {
    /// Returns `None` for updates the bot does not handle (stickers, edits, ...).
    pub fn into_event(self) -> Option<InboundEvent> {
        if let Some(query) = self.callback_query {
            // Private chats share their id with the user.
            let chat_id = query
                .message
                .map_or(ChatId(query.from.id), |message| message.chat.id);
            return Some(InboundEvent::Selection {
                chat_id,
                callback_id: query.id,
                data: query.data.unwrap_or_default(),
            });
        }

        let message = self.message?;
        let chat_id = message.chat.id;
        if let Some(contact) = message.contact {
            let display_name = match &message.from {
                Some(user) => user_display_name(user),
                None => contact_display_name(&contact),
            };
            return Some(InboundEvent::Contact {
                chat_id,
                phone: contact.phone_number,
                display_name,
            });
        }

        message
            .text
            .map(|text| InboundEvent::Text { chat_id, text })
    }
}

fn user_display_name(user: &User) -> String {
    join_name(&user.first_name, user.last_name.as_deref())
}

fn contact_display_name(contact: &Contact) -> String {
    join_name(&contact.first_name, contact.last_name.as_deref())
}

fn join_name(first: &str, last: Option<&str>) -> String {
    match last {
        Some(last) if !last.is_empty() => format!("{first} {last}"),
        _ => first.to_string(),
    }
}
