use crate::{CalculationInputs, Prompt, Report};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send a message to the session's chat.
    Prompt { prompt: Prompt, keyboard: Keyboard },
    /// Send the final cost report to the session's chat.
    ShowReport(Report),
    /// Forward a completed lead to the administrator chat.
    NotifyAdmin(Lead),
}

/// Keyboard to attach to an outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyboard {
    /// Leave whatever keyboard the user currently has.
    Keep,
    Remove,
    CancelOnly,
    Countries,
    Fuels,
    Contact,
    Actions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub display_name: String,
    pub phone: String,
    pub inputs: CalculationInputs,
    pub manufacture_year: i32,
}
