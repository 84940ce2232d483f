//! Keyboard labels and the reverse lookups that map them back to variants.
//!
//! Reply-keyboard presses arrive as plain text, so a selection is valid only
//! when the text is one of the labels below.

use crate::{Action, Country, FuelType};

pub const CANCEL_LABEL: &str = "❌ Cancel";
pub const SHARE_CONTACT_LABEL: &str = "📞 Share my phone number";

pub const START_COMMAND: &str = "/start";
pub const CANCEL_COMMAND: &str = "/cancel";

fn find_by_label<T: Copy>(
    candidates: &[T],
    label: &str,
    label_of: fn(T) -> &'static str,
) -> Option<T> {
    candidates
        .iter()
        .copied()
        .find(|candidate| label_of(*candidate) == label)
}

const ACTIONS: [Action; 2] = [Action::RequestContact, Action::NewCalculation];

impl Country {
    pub fn from_label(label: &str) -> Option<Self> {
        find_by_label(&Country::ALL, label, Country::label)
    }

    /// Keyboard label, flag included.
    pub fn label(self) -> &'static str {
        match self {
            Country::Ukraine => "🇺🇦 Ukraine",
            Country::Poland => "🇵🇱 Poland",
            Country::Lithuania => "🇱🇹 Lithuania",
            Country::Georgia => "🇬🇪 Georgia",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Country::Ukraine => "Ukraine",
            Country::Poland => "Poland",
            Country::Lithuania => "Lithuania",
            Country::Georgia => "Georgia",
        }
    }
}

impl FuelType {
    pub fn from_label(label: &str) -> Option<Self> {
        find_by_label(&FuelType::ALL, label, FuelType::label)
    }

    pub fn label(self) -> &'static str {
        match self {
            FuelType::Gasoline => "⛽️ Gasoline",
            FuelType::Diesel => "🛢 Diesel",
            FuelType::Hybrid => "🔋 Hybrid",
            FuelType::Electric => "⚡️ Electric",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FuelType::Gasoline => "Gasoline",
            FuelType::Diesel => "Diesel",
            FuelType::Hybrid => "Hybrid",
            FuelType::Electric => "Electric",
        }
    }
}

impl Action {
    pub fn from_callback_data(data: &str) -> Option<Self> {
        find_by_label(&ACTIONS, data, Action::callback_data)
    }

    pub fn callback_data(self) -> &'static str {
        match self {
            Action::RequestContact => "request",
            Action::NewCalculation => "restart",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::RequestContact => "📩 Leave a request",
            Action::NewCalculation => "🔄 New calculation",
        }
    }
}
