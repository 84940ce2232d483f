use import_core::labels::{CANCEL_LABEL, SHARE_CONTACT_LABEL};
use import_core::{Action, Country, FuelType, Keyboard};
use telegram_transport::{InlineButton, KeyboardButton, ReplyMarkup};

/// Markup for a keyboard request; `None` leaves the current keyboard alone.
pub fn markup(keyboard: Keyboard) -> Option<ReplyMarkup> {
    match keyboard {
        Keyboard::Keep => None,
        Keyboard::Remove => Some(ReplyMarkup::remove()),
        Keyboard::CancelOnly => Some(ReplyMarkup::keyboard(vec![cancel_row()], false)),
        Keyboard::Countries => Some(choice_keyboard(Country::ALL.map(Country::label))),
        Keyboard::Fuels => Some(choice_keyboard(FuelType::ALL.map(FuelType::label))),
        Keyboard::Contact => Some(ReplyMarkup::keyboard(
            vec![
                vec![KeyboardButton::request_contact(SHARE_CONTACT_LABEL)],
                cancel_row(),
            ],
            true,
        )),
        Keyboard::Actions => Some(ReplyMarkup::inline(
            [Action::RequestContact, Action::NewCalculation]
                .into_iter()
                .map(|action| vec![InlineButton::callback(action.label(), action.callback_data())])
                .collect(),
        )),
    }
}

fn cancel_row() -> Vec<KeyboardButton> {
    vec![KeyboardButton::text(CANCEL_LABEL)]
}

/// Two options per row with a cancel row underneath.
fn choice_keyboard(labels: [&str; 4]) -> ReplyMarkup {
    let mut rows: Vec<Vec<KeyboardButton>> = labels
        .chunks(2)
        .map(|pair| pair.iter().map(|label| KeyboardButton::text(*label)).collect())
        .collect();
    rows.push(cancel_row());
    ReplyMarkup::keyboard(rows, true)
}
