#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User sent `/start`.
    Start,
    /// Free text, including reply-keyboard presses which arrive as their label.
    Text(String),
    /// User pressed an inline button under the report.
    Action(Action),
    /// User shared a phone number through the contact button.
    ContactShared { phone: String, display_name: String },
    /// User sent `/cancel`.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    NewCalculation,
    RequestContact,
}
