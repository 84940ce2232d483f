use crate::labels::CANCEL_LABEL;
use crate::number::{derive_age, parse_number};
use crate::report::manufacture_year;
use crate::{
    lookup_auction_fee, Action, Country, Effect, FuelType, Keyboard, Lead, Msg, Prompt, Report,
    SessionState, Step,
};

type Outcome = (Option<SessionState>, Vec<Effect>);

/// Pure update function: applies a message to a chat's session and returns
/// the session to keep (`None` drops it) plus the effects to run.
pub fn update(session: Option<SessionState>, msg: Msg, current_year: i32) -> Outcome {
    match msg {
        Msg::Start => (
            Some(SessionState::new()),
            vec![prompt(Prompt::Welcome, Keyboard::Countries)],
        ),
        Msg::Cancel => cancel(),
        Msg::Text(raw) => {
            let text = raw.trim();
            if text == CANCEL_LABEL {
                return cancel();
            }
            match session {
                Some(state) => handle_text(state, text, current_year),
                None => (None, vec![prompt(Prompt::StartFirst, Keyboard::Keep)]),
            }
        }
        Msg::Action(Action::NewCalculation) => (
            Some(SessionState::new()),
            vec![prompt(Prompt::Restarted, Keyboard::Countries)],
        ),
        Msg::Action(Action::RequestContact) => request_contact(session),
        Msg::ContactShared {
            phone,
            display_name,
        } => capture_contact(session, phone, display_name, current_year),
    }
}

fn prompt(prompt: Prompt, keyboard: Keyboard) -> Effect {
    Effect::Prompt { prompt, keyboard }
}

fn ask(step: Step) -> Effect {
    let keyboard = match step {
        Step::AwaitingCountry => Keyboard::Countries,
        Step::AwaitingFuelType => Keyboard::Fuels,
        _ => Keyboard::CancelOnly,
    };
    prompt(Prompt::Question(step), keyboard)
}

fn cancel() -> Outcome {
    (None, vec![prompt(Prompt::Cancelled, Keyboard::Remove)])
}

fn handle_text(mut state: SessionState, text: &str, current_year: i32) -> Outcome {
    match state.step() {
        Step::AwaitingCountry => match Country::from_label(text) {
            Some(country) => {
                state.set_country(country);
                (Some(state), vec![ask(Step::AwaitingCarPrice)])
            }
            None => (
                Some(state),
                vec![prompt(Prompt::ChooseCountry, Keyboard::Countries)],
            ),
        },
        Step::AwaitingFuelType => match FuelType::from_label(text) {
            Some(fuel) => {
                state.set_fuel_type(fuel);
                (Some(state), vec![ask(Step::AwaitingVehicleAge)])
            }
            None => (
                Some(state),
                vec![prompt(Prompt::ChooseFuel, Keyboard::Fuels)],
            ),
        },
        Step::AwaitingContact => (
            Some(state),
            vec![prompt(Prompt::ContactReminder, Keyboard::Contact)],
        ),
        Step::Completed | Step::Finished => (
            Some(state),
            vec![prompt(Prompt::StartOver, Keyboard::Remove)],
        ),
        step => match parse_number(text) {
            Some(value) => apply_number(state, step, value, current_year),
            None => (
                Some(state),
                vec![prompt(Prompt::InvalidNumber, Keyboard::CancelOnly)],
            ),
        },
    }
}

fn apply_number(mut state: SessionState, step: Step, value: f64, current_year: i32) -> Outcome {
    let rejected = |state: SessionState, reason: Prompt| {
        (Some(state), vec![prompt(reason, Keyboard::CancelOnly)])
    };

    match step {
        Step::AwaitingCarPrice => {
            if value <= 0.0 {
                return rejected(state, Prompt::PriceNotPositive);
            }
            state.set_car_price(value);
            (Some(state), vec![ask(Step::AwaitingAuctionFee)])
        }
        Step::AwaitingAuctionFee => {
            if value < 0.0 {
                return rejected(state, Prompt::NegativeValue);
            }
            let mut effects = Vec::with_capacity(2);
            let fee_usd = if value == 0.0 {
                let fee_usd = lookup_auction_fee(state.car_price_usd().unwrap_or_default());
                effects.push(prompt(
                    Prompt::AuctionFeeApplied { fee_usd },
                    Keyboard::Keep,
                ));
                fee_usd
            } else {
                value
            };
            state.set_auction_fee(fee_usd);
            effects.push(ask(Step::AwaitingDeliveryUsa));
            (Some(state), effects)
        }
        Step::AwaitingDeliveryUsa => {
            if value < 0.0 {
                return rejected(state, Prompt::NegativeValue);
            }
            state.set_delivery_usa(value);
            (Some(state), vec![ask(Step::AwaitingSeaDelivery)])
        }
        Step::AwaitingSeaDelivery => {
            if value < 0.0 {
                return rejected(state, Prompt::NegativeValue);
            }
            state.set_sea_delivery(value);
            (Some(state), vec![ask(Step::AwaitingEngineDisplacement)])
        }
        Step::AwaitingEngineDisplacement => {
            if value < 0.0 {
                return rejected(state, Prompt::NegativeValue);
            }
            state.set_engine_cc(value.trunc() as u32);
            (Some(state), vec![ask(Step::AwaitingFuelType)])
        }
        Step::AwaitingVehicleAge => {
            let Some(age_years) = derive_age(value, current_year) else {
                return rejected(state, Prompt::InvalidAge);
            };
            state.set_car_age(age_years);
            let Some(inputs) = state.inputs() else {
                return (Some(state), Vec::new());
            };
            let report = Report::assemble(&inputs, current_year);
            (
                Some(state),
                vec![
                    Effect::ShowReport(report),
                    prompt(Prompt::ChooseAction, Keyboard::Actions),
                ],
            )
        }
        _ => (Some(state), Vec::new()),
    }
}

fn request_contact(session: Option<SessionState>) -> Outcome {
    match session {
        Some(state) if state.step() == Step::Finished => (
            Some(state),
            vec![prompt(Prompt::AlreadySubmitted, Keyboard::Remove)],
        ),
        Some(mut state)
            if matches!(state.step(), Step::Completed | Step::AwaitingContact) =>
        {
            state.await_contact();
            (
                Some(state),
                vec![prompt(Prompt::ShareContact, Keyboard::Contact)],
            )
        }
        Some(state) => (
            Some(state),
            vec![prompt(Prompt::CalculationIncomplete, Keyboard::Keep)],
        ),
        None => (None, vec![prompt(Prompt::StartFirst, Keyboard::Keep)]),
    }
}

fn capture_contact(
    session: Option<SessionState>,
    phone: String,
    display_name: String,
    current_year: i32,
) -> Outcome {
    let mut state = match session {
        Some(state) if state.step() == Step::AwaitingContact => state,
        // Contacts outside the request flow are ignored.
        other => return (other, Vec::new()),
    };
    let Some(inputs) = state.inputs() else {
        return (Some(state), Vec::new());
    };

    state.finish(phone.clone());
    let lead = Lead {
        display_name,
        phone,
        inputs,
        manufacture_year: manufacture_year(current_year, inputs.car_age_years),
    };
    (
        Some(state),
        vec![
            Effect::NotifyAdmin(lead),
            prompt(Prompt::LeadSubmitted, Keyboard::Remove),
        ],
    )
}
