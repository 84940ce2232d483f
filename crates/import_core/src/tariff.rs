//! Per-country customs calculators.
//!
//! Every calculator takes the customs value in USD (price plus auction fee
//! plus delivery), the engine displacement, the fuel type and the vehicle age
//! and returns the duty, excise and VAT in the country's local currency.

use crate::rates::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Ukraine,
    Poland,
    Lithuania,
    Georgia,
}

impl Country {
    pub const ALL: [Country; 4] = [
        Country::Ukraine,
        Country::Poland,
        Country::Lithuania,
        Country::Georgia,
    ];

    pub fn currency(self) -> Currency {
        match self {
            Country::Ukraine => Currency::Uah,
            Country::Poland => Currency::Pln,
            Country::Lithuania => Currency::Eur,
            Country::Georgia => Currency::Gel,
        }
    }

    pub fn calculate(
        self,
        customs_value_usd: f64,
        engine_cc: u32,
        fuel: FuelType,
        age_years: u32,
    ) -> FeeBreakdown {
        match self {
            Country::Ukraine => calculate_ukraine(customs_value_usd, engine_cc, fuel, age_years),
            Country::Poland => calculate_poland(customs_value_usd, engine_cc, fuel, age_years),
            Country::Lithuania => {
                calculate_lithuania(customs_value_usd, engine_cc, fuel, age_years)
            }
            Country::Georgia => calculate_georgia(customs_value_usd, engine_cc, fuel, age_years),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelType {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Gasoline,
        FuelType::Diesel,
        FuelType::Hybrid,
        FuelType::Electric,
    ];
}

/// Duty, excise and VAT for one calculation, in local currency.
///
/// `total` is fixed at construction as the sum of the three charges.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeBreakdown {
    duty_amount: f64,
    duty_note: String,
    excise_amount: f64,
    excise_note: String,
    vat_amount: f64,
    vat_note: String,
    total: f64,
    currency_symbol: &'static str,
}

struct Charge {
    amount: f64,
    note: String,
}

impl Charge {
    fn new(amount: f64, note: impl Into<String>) -> Self {
        Self {
            amount,
            note: note.into(),
        }
    }
}

impl FeeBreakdown {
    fn new(duty: Charge, excise: Charge, vat: Charge, currency: Currency) -> Self {
        Self {
            total: duty.amount + excise.amount + vat.amount,
            duty_amount: duty.amount,
            duty_note: duty.note,
            excise_amount: excise.amount,
            excise_note: excise.note,
            vat_amount: vat.amount,
            vat_note: vat.note,
            currency_symbol: currency.rate().symbol,
        }
    }

    pub fn duty_amount(&self) -> f64 {
        self.duty_amount
    }

    pub fn duty_note(&self) -> &str {
        &self.duty_note
    }

    pub fn excise_amount(&self) -> f64 {
        self.excise_amount
    }

    pub fn excise_note(&self) -> &str {
        &self.excise_note
    }

    pub fn vat_amount(&self) -> f64 {
        self.vat_amount
    }

    pub fn vat_note(&self) -> &str {
        &self.vat_note
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn currency_symbol(&self) -> &'static str {
        self.currency_symbol
    }
}

// ---- Ukraine ----

const UKRAINE_VAT_RATE: f64 = 0.20;

/// `(max_age_years, rate, note)`
const UKRAINE_DUTY_BANDS: [(u32, f64, &str); 4] = [
    (3, 0.10, "10% (up to 3 years)"),
    (5, 0.15, "15% (3-5 years)"),
    (8, 0.20, "20% (5-8 years)"),
    (u32::MAX, 0.25, "25% (over 8 years)"),
];

/// EUR per cm³ by displacement band, columns are the age bands of
/// [`ukraine_age_column`].
const UKRAINE_EXCISE_RATES: [(u32, [f64; 4]); 7] = [
    (1500, [0.012, 0.024, 0.048, 0.072]),
    (2000, [0.024, 0.048, 0.096, 0.144]),
    (2500, [0.048, 0.096, 0.144, 0.216]),
    (3000, [0.072, 0.144, 0.216, 0.288]),
    (3500, [0.096, 0.192, 0.288, 0.384]),
    (4500, [0.144, 0.288, 0.432, 0.576]),
    (u32::MAX, [0.192, 0.384, 0.576, 0.768]),
];

fn ukraine_age_column(age_years: u32) -> usize {
    match age_years {
        0..=3 => 0,
        4..=5 => 1,
        6..=8 => 2,
        _ => 3,
    }
}

fn ukraine_fuel_coefficient(fuel: FuelType) -> f64 {
    match fuel {
        FuelType::Diesel => 1.2,
        FuelType::Hybrid => 0.5,
        FuelType::Gasoline | FuelType::Electric => 1.0,
    }
}

fn calculate_ukraine(
    customs_value_usd: f64,
    engine_cc: u32,
    fuel: FuelType,
    age_years: u32,
) -> FeeBreakdown {
    let currency = Currency::Uah;
    let rate = currency.rate();
    let customs_local = customs_value_usd * rate.usd_rate;

    if fuel == FuelType::Electric {
        // Electric cars pay VAT on the customs value alone.
        return FeeBreakdown::new(
            Charge::new(0.0, "0% (electric vehicle exemption)"),
            Charge::new(0.0, "exempt for electric vehicles"),
            Charge::new(customs_local * UKRAINE_VAT_RATE, "20% of customs value"),
            currency,
        );
    }

    let customs_eur = customs_value_usd * rate.usd_to_eur();

    let (_, duty_rate, duty_note) = UKRAINE_DUTY_BANDS
        .iter()
        .copied()
        .find(|(max_age, _, _)| age_years <= *max_age)
        .unwrap_or(UKRAINE_DUTY_BANDS[UKRAINE_DUTY_BANDS.len() - 1]);
    let duty_local = customs_eur * duty_rate * rate.eur_rate;

    let column = ukraine_age_column(age_years);
    let (_, band_rates) = UKRAINE_EXCISE_RATES
        .iter()
        .copied()
        .find(|(max_cc, _)| engine_cc <= *max_cc)
        .unwrap_or(UKRAINE_EXCISE_RATES[UKRAINE_EXCISE_RATES.len() - 1]);
    let excise_rate = band_rates[column] * ukraine_fuel_coefficient(fuel);
    let excise_eur = excise_rate * f64::from(engine_cc);
    let excise_local = excise_eur * rate.eur_rate;

    let vat_local = (customs_local + duty_local + excise_local) * UKRAINE_VAT_RATE;

    FeeBreakdown::new(
        Charge::new(duty_local, duty_note),
        Charge::new(
            excise_local,
            format!("{excise_rate:.4} EUR × {engine_cc} cm³"),
        ),
        Charge::new(vat_local, "20% of (value + duty + excise)"),
        currency,
    )
}

// ---- Poland ----

const EU_DUTY_RATE: f64 = 0.065;
const POLAND_EXCISE_RATE: f64 = 0.184;
const POLAND_VAT_RATE: f64 = 0.23;

fn calculate_poland(
    customs_value_usd: f64,
    engine_cc: u32,
    fuel: FuelType,
    age_years: u32,
) -> FeeBreakdown {
    let currency = Currency::Pln;
    let rate = currency.rate();
    let customs_local = customs_value_usd * rate.usd_rate;
    let customs_eur = customs_value_usd * rate.usd_to_eur();

    let duty_local = customs_eur * EU_DUTY_RATE * rate.eur_rate;

    let excise = if fuel == FuelType::Electric {
        Charge::new(0.0, "0 (electric vehicle)")
    } else if age_years > 2 && engine_cc > 2000 {
        Charge::new(
            customs_eur * POLAND_EXCISE_RATE * rate.eur_rate,
            "18.4% (engine over 2000 cm³, older than 2 years)",
        )
    } else {
        Charge::new(0.0, "0")
    };

    let vat_local = (customs_local + duty_local + excise.amount) * POLAND_VAT_RATE;

    FeeBreakdown::new(
        Charge::new(duty_local, "6.5% (EU rate)"),
        excise,
        Charge::new(vat_local, "23% of (value + duty + excise)"),
        currency,
    )
}

// ---- Lithuania ----

const LITHUANIA_EXCISE_RATE: f64 = 0.15;
const LITHUANIA_VAT_RATE: f64 = 0.21;

fn calculate_lithuania(
    customs_value_usd: f64,
    engine_cc: u32,
    fuel: FuelType,
    age_years: u32,
) -> FeeBreakdown {
    let currency = Currency::Eur;
    // Local currency is EUR, so the USD rate converts straight to euros.
    let customs_eur = customs_value_usd * currency.rate().usd_rate;

    let duty_eur = customs_eur * EU_DUTY_RATE;

    let excise = if fuel != FuelType::Electric && engine_cc > 2000 && age_years > 2 {
        Charge::new(
            customs_eur * LITHUANIA_EXCISE_RATE,
            "15% (engine over 2000 cm³)",
        )
    } else {
        Charge::new(0.0, "0")
    };

    let vat_eur = (customs_eur + duty_eur + excise.amount) * LITHUANIA_VAT_RATE;

    FeeBreakdown::new(
        Charge::new(duty_eur, "6.5% (EU rate)"),
        excise,
        Charge::new(vat_eur, "21% of (value + duty + excise)"),
        currency,
    )
}

// ---- Georgia ----

const GEORGIA_VAT_RATE: f64 = 0.18;

/// USD per cm³ (before the /100 scaling) by displacement band.
const GEORGIA_EXCISE_RATES: [(u32, f64); 7] = [
    (1000, 0.05),
    (1500, 0.10),
    (2000, 0.20),
    (2500, 0.35),
    (3000, 0.50),
    (3500, 0.75),
    (u32::MAX, 1.00),
];

fn georgia_age_coefficient(age_years: u32) -> f64 {
    match age_years {
        0..=3 => 1.0,
        4..=7 => 1.5,
        _ => 2.0,
    }
}

fn calculate_georgia(
    customs_value_usd: f64,
    engine_cc: u32,
    fuel: FuelType,
    age_years: u32,
) -> FeeBreakdown {
    let currency = Currency::Gel;
    let rate = currency.rate();
    let customs_local = customs_value_usd * rate.usd_rate;

    let excise = if fuel == FuelType::Electric {
        Charge::new(0.0, "0 (electric vehicle)")
    } else {
        let age_coefficient = georgia_age_coefficient(age_years);
        let (_, base_rate) = GEORGIA_EXCISE_RATES
            .iter()
            .copied()
            .find(|(max_cc, _)| engine_cc <= *max_cc)
            .unwrap_or(GEORGIA_EXCISE_RATES[GEORGIA_EXCISE_RATES.len() - 1]);
        let excise_usd = base_rate * f64::from(engine_cc) * age_coefficient / 100.0;
        Charge::new(
            excise_usd * rate.usd_rate,
            format!("{base_rate} USD/cm³ × {engine_cc} × coefficient {age_coefficient}"),
        )
    };

    let duty_local = 0.0;
    let vat_local = (customs_local + duty_local + excise.amount) * GEORGIA_VAT_RATE;

    FeeBreakdown::new(
        Charge::new(duty_local, "0% (Georgian preferential rate)"),
        excise,
        Charge::new(vat_local, "18% of (value + duty + excise)"),
        currency,
    )
}
