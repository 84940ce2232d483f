//! Turns prompts, reports and leads into message text.

use std::fmt::Write;

use import_core::labels::{CANCEL_LABEL, SHARE_CONTACT_LABEL};
use import_core::{Lead, Prompt, Report, Step};
use telegram_transport::ChatId;

const RULE: &str = "────────────────────────────────";

pub fn prompt_text(prompt: Prompt) -> String {
    match prompt {
        Prompt::Welcome => format!(
            "🚗 US car import cost calculator\n\n\
             I will estimate the full turnkey cost including:\n\
             • auction fees\n\
             • delivery\n\
             • customs payments\n\n\
             Let's begin!\n\n{}",
            question_text(Step::AwaitingCountry)
        ),
        Prompt::Restarted => format!(
            "🔄 New calculation\n\n{}",
            question_text(Step::AwaitingCountry)
        ),
        Prompt::Question(step) => question_text(step),
        Prompt::ChooseCountry => "Please choose a country using the buttons below 👇".into(),
        Prompt::ChooseFuel => "Please choose a fuel type using the buttons below 👇".into(),
        Prompt::InvalidNumber => "❌ Enter a number, for example: 8500".into(),
        Prompt::PriceNotPositive => "❌ The price must be greater than 0".into(),
        Prompt::NegativeValue => "❌ The value cannot be negative".into(),
        Prompt::InvalidAge => "❌ Invalid year. Please try again.".into(),
        Prompt::AuctionFeeApplied { fee_usd } => format!(
            "✅ Auction fee: {} USD (Copart/IAAI schedule)",
            format_amount(fee_usd)
        ),
        Prompt::ChooseAction => "Choose an action:".into(),
        Prompt::Cancelled => "❌ Calculation cancelled.\n\nSend /start to begin again.".into(),
        Prompt::StartFirst => "Send /start to begin a calculation.".into(),
        Prompt::StartOver => "Send /start for a new calculation.".into(),
        Prompt::CalculationIncomplete => {
            "Finish the calculation first, then leave a request.".into()
        }
        Prompt::ShareContact => {
            "📞 Share your phone number so a manager can contact you.\n\
             Press the button below 👇"
                .into()
        }
        Prompt::ContactReminder => format!(
            "Press «{SHARE_CONTACT_LABEL}» below\nor «{CANCEL_LABEL}» to cancel."
        ),
        Prompt::AlreadySubmitted => {
            "✅ You have already left a request. A manager will contact you.".into()
        }
        Prompt::LeadSubmitted => "✅ Request sent!\n\n\
             A manager will contact you shortly. 🤝\n\n\
             Send /start for a new calculation."
            .into(),
    }
}

fn question_text(step: Step) -> String {
    let (icon, body) = match step {
        Step::AwaitingCountry => ("🌍", "Choose the country of customs clearance:"),
        Step::AwaitingCarPrice => ("💵", "Enter the car price at auction (USD):\nExample: 8500"),
        Step::AwaitingAuctionFee => (
            "🏷",
            "Auction fee:\nEnter 0 and I will take it from the Copart/IAAI schedule\n\
             or enter the amount manually (USD):",
        ),
        Step::AwaitingDeliveryUsa => (
            "🚚",
            "Enter the cost of delivery within the USA to the port (USD):\nExample: 400",
        ),
        Step::AwaitingSeaDelivery => (
            "🚢",
            "Enter the cost of sea shipping to your country (USD):\nTypically 900–1500 USD",
        ),
        Step::AwaitingEngineDisplacement => (
            "⚙️",
            "Enter the engine displacement in cm³:\nExample: 1998\nFor an electric car enter 0",
        ),
        Step::AwaitingFuelType => ("⛽️", "Choose the fuel type:"),
        Step::AwaitingVehicleAge => (
            "📅",
            "Enter the year of manufacture (e.g. 2019)\nor the age in full years (e.g. 5):",
        ),
        Step::Completed | Step::AwaitingContact | Step::Finished => {
            return prompt_text(Prompt::StartOver);
        }
    };
    match step.question_number() {
        Some(number) => format!(
            "{icon} Step {number} of {}\n\n{body}",
            Step::QUESTION_COUNT
        ),
        None => body.to_string(),
    }
}

pub fn report_text(report: &Report) -> String {
    let inputs = &report.inputs;
    let fees = &report.fees;
    let sym = report.currency_symbol;
    let country = inputs.country.label();

    let mut out = String::new();
    let _ = writeln!(out, "✅ CALCULATION COMPLETE");
    let _ = writeln!(out, "{RULE}\n");
    let _ = writeln!(out, "🌍 Country of clearance: {country}\n");
    let _ = writeln!(out, "📋 Inputs:");
    let _ = writeln!(out, "  Car price:         {} USD", format_amount(inputs.car_price_usd));
    let _ = writeln!(out, "  Auction fee:       {} USD", format_amount(inputs.auction_fee_usd));
    let _ = writeln!(out, "  USA delivery:      {} USD", format_amount(inputs.delivery_usa_usd));
    let _ = writeln!(out, "  Sea shipping:      {} USD", format_amount(inputs.sea_delivery_usd));
    let _ = writeln!(out, "  Engine:            {} cm³", inputs.engine_cc);
    let _ = writeln!(out, "  Fuel:              {}", inputs.fuel_type.label());
    let _ = writeln!(
        out,
        "  Year:              {} ({})\n",
        report.manufacture_year,
        age_phrase(inputs.car_age_years)
    );
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "💰 Cost breakdown:\n");
    let _ = writeln!(out, "1. Logistics:");
    let _ = writeln!(out, "  Car price:     {} USD", format_amount(inputs.car_price_usd));
    let _ = writeln!(out, "  Auction:       {} USD", format_amount(inputs.auction_fee_usd));
    let _ = writeln!(out, "  USA delivery:  {} USD", format_amount(inputs.delivery_usa_usd));
    let _ = writeln!(out, "  Sea shipping:  {} USD", format_amount(inputs.sea_delivery_usd));
    let _ = writeln!(
        out,
        "  ➡️ Total: {} USD / {} {sym}\n",
        format_amount(report.logistics_usd),
        format_amount(report.logistics_local)
    );
    let _ = writeln!(out, "2. Customs payments ({}):", inputs.country.name());
    let _ = writeln!(
        out,
        "  Duty:    {} {sym} — {}",
        format_amount(fees.duty_amount()),
        fees.duty_note()
    );
    let _ = writeln!(
        out,
        "  Excise:  {} {sym} — {}",
        format_amount(fees.excise_amount()),
        fees.excise_note()
    );
    let _ = writeln!(
        out,
        "  VAT:     {} {sym} — {}",
        format_amount(fees.vat_amount()),
        fees.vat_note()
    );
    let _ = writeln!(out, "  ➡️ Customs total: {} {sym}\n", format_amount(fees.total()));
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "🔑 TURNKEY TOTAL:");
    let _ = writeln!(out, "  ≈ {} {sym}", format_amount(report.total_local));
    let _ = writeln!(out, "  ≈ {} USD\n", format_amount(report.total_usd));
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "📌 1 USD = {} {sym}", report.usd_rate);
    let _ = write!(out, "This is an estimate. Please confirm with a manager.");
    out
}

pub fn lead_text(chat_id: ChatId, lead: &Lead) -> String {
    let inputs = &lead.inputs;
    format!(
        "🔔 NEW REQUEST\n\n\
         👤 {name}\n\
         📱 Phone: {phone}\n\
         🆔 Telegram ID: {chat_id}\n\n\
         🚗 Car details:\n\
         \x20 Country of clearance: {country}\n\
         \x20 Price: {price} USD\n\
         \x20 Auction fee: {fee} USD\n\
         \x20 USA delivery: {usa} USD\n\
         \x20 Sea shipping: {sea} USD\n\
         \x20 Engine: {cc} cm³\n\
         \x20 Fuel: {fuel}\n\
         \x20 Year: {year} (~{age})",
        name = lead.display_name,
        phone = lead.phone,
        country = inputs.country.label(),
        price = format_amount(inputs.car_price_usd),
        fee = format_amount(inputs.auction_fee_usd),
        usa = format_amount(inputs.delivery_usa_usd),
        sea = format_amount(inputs.sea_delivery_usd),
        cc = inputs.engine_cc,
        fuel = inputs.fuel_type.name(),
        year = lead.manufacture_year,
        age = age_phrase(inputs.car_age_years),
    )
}

fn age_phrase(years: u32) -> String {
    if years == 1 {
        "1 year".to_string()
    } else {
        format!("{years} years")
    }
}

/// Rounds to whole units and groups thousands with commas.
fn format_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0 {
        out.push('-');
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use import_core::{CalculationInputs, Country, FuelType};

    use super::*;

    fn ukraine_report() -> Report {
        let inputs = CalculationInputs {
            country: Country::Ukraine,
            car_price_usd: 8500.0,
            auction_fee_usd: 579.0,
            delivery_usa_usd: 400.0,
            sea_delivery_usd: 1000.0,
            engine_cc: 1998,
            fuel_type: FuelType::Gasoline,
            car_age_years: 6,
        };
        Report::assemble(&inputs, 2025)
    }

    #[test]
    fn formats_amounts_with_grouping() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.4), "999");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(434_878.5), "434,879");
        assert_eq!(format_amount(1_234_567.0), "1,234,567");
        assert_eq!(format_amount(-1500.0), "-1,500");
    }

    #[test]
    fn questions_are_numbered() {
        let price_question = prompt_text(Prompt::Question(Step::AwaitingCarPrice));
        assert!(price_question.starts_with("💵 Step 2 of 8"));
        assert!(prompt_text(Prompt::Welcome).ends_with("Choose the country of customs clearance:"));
        assert_eq!(
            prompt_text(Prompt::AuctionFeeApplied { fee_usd: 1279.0 }),
            "✅ Auction fee: 1,279 USD (Copart/IAAI schedule)"
        );
    }

    #[test]
    fn report_lists_logistics_and_totals() {
        let report = ukraine_report();
        let text = report_text(&report);

        let logistics_uah = format_amount(10_479.0 * 41.5);
        assert!(text.contains(&format!("Total: 10,479 USD / {logistics_uah} UAH")));
        assert!(text.contains("2019 (6 years)"));
        assert!(text.contains("20% (5-8 years)"));
        assert!(text.contains(&format!("≈ {} UAH", format_amount(report.total_local))));
        assert!(text.contains(&format!("≈ {} USD", format_amount(report.total_usd))));
        assert!(text.contains("1 USD = 41.5 UAH"));
    }

    #[test]
    fn lead_includes_contact_and_inputs() {
        let report = ukraine_report();
        let lead = Lead {
            display_name: "Olena K".to_string(),
            phone: "+380501234567".to_string(),
            inputs: report.inputs,
            manufacture_year: 2019,
        };
        let text = lead_text(ChatId(77), &lead);

        assert!(text.contains("👤 Olena K"));
        assert!(text.contains("Phone: +380501234567"));
        assert!(text.contains("Telegram ID: 77"));
        assert!(text.contains("Auction fee: 579 USD"));
        assert!(text.contains("Fuel: Gasoline"));
        assert!(text.contains("Year: 2019 (~6 years)"));
    }
}
