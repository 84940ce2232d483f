//! Import calculator core: rate tables, customs calculators and the pure
//! per-chat conversation state machine.
mod auction;
mod effect;
pub mod labels;
mod msg;
mod number;
mod prompt;
mod rates;
mod report;
mod state;
mod tariff;
mod update;

pub use auction::{lookup_auction_fee, AUCTION_FEE_BRACKETS, AUCTION_OVERFLOW_FEE};
pub use effect::{Effect, Keyboard, Lead};
pub use msg::{Action, Msg};
pub use number::{derive_age, parse_number, MANUFACTURE_YEAR_THRESHOLD};
pub use prompt::Prompt;
pub use rates::{Currency, CurrencyRate};
pub use report::Report;
pub use state::{CalculationInputs, SessionState, Step};
pub use tariff::{Country, FeeBreakdown, FuelType};
pub use update::update;
