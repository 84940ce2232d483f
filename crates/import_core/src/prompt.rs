use crate::Step;

/// What to tell the user; turning it into text is up to the front end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prompt {
    /// Greeting followed by the first question.
    Welcome,
    /// "New calculation" header followed by the first question.
    Restarted,
    /// The question for a questionnaire step.
    Question(Step),
    ChooseCountry,
    ChooseFuel,
    InvalidNumber,
    PriceNotPositive,
    NegativeValue,
    InvalidAge,
    AuctionFeeApplied { fee_usd: f64 },
    ChooseAction,
    Cancelled,
    /// Text arrived for a chat with no session.
    StartFirst,
    /// Text arrived after the report was shown.
    StartOver,
    /// A contact request arrived before the report was shown.
    CalculationIncomplete,
    ShareContact,
    ContactReminder,
    AlreadySubmitted,
    LeadSubmitted,
}
