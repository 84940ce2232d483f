use serde::Serialize;

/// `reply_markup` payload of `sendMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    Keyboard {
        keyboard: Vec<Vec<KeyboardButton>>,
        resize_keyboard: bool,
        one_time_keyboard: bool,
    },
    Inline {
        inline_keyboard: Vec<Vec<InlineButton>>,
    },
    Remove {
        remove_keyboard: bool,
    },
}

impl ReplyMarkup {
    pub fn keyboard(rows: Vec<Vec<KeyboardButton>>, one_time: bool) -> Self {
        ReplyMarkup::Keyboard {
            keyboard: rows,
            resize_keyboard: true,
            one_time_keyboard: one_time,
        }
    }

    pub fn inline(rows: Vec<Vec<InlineButton>>) -> Self {
        ReplyMarkup::Inline {
            inline_keyboard: rows,
        }
    }

    pub fn remove() -> Self {
        ReplyMarkup::Remove {
            remove_keyboard: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "is_false")]
    pub request_contact: bool,
}

impl KeyboardButton {
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            text: label.into(),
            request_contact: false,
        }
    }

    /// Button that shares the user's phone number when pressed.
    pub fn request_contact(label: impl Into<String>) -> Self {
        Self {
            text: label.into(),
            request_contact: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineButton {
    pub text: String,
    pub callback_data: String,
}

impl InlineButton {
    pub fn callback(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: label.into(),
            callback_data: data.into(),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
