use crate::{Country, FuelType};

/// Position of a session in the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    #[default]
    AwaitingCountry,
    AwaitingCarPrice,
    AwaitingAuctionFee,
    AwaitingDeliveryUsa,
    AwaitingSeaDelivery,
    AwaitingEngineDisplacement,
    AwaitingFuelType,
    AwaitingVehicleAge,
    Completed,
    AwaitingContact,
    Finished,
}

impl Step {
    /// Number of questions before a report can be produced.
    pub const QUESTION_COUNT: u8 = 8;

    /// 1-based question number, `None` once the questionnaire is over.
    pub fn question_number(self) -> Option<u8> {
        match self {
            Step::AwaitingCountry => Some(1),
            Step::AwaitingCarPrice => Some(2),
            Step::AwaitingAuctionFee => Some(3),
            Step::AwaitingDeliveryUsa => Some(4),
            Step::AwaitingSeaDelivery => Some(5),
            Step::AwaitingEngineDisplacement => Some(6),
            Step::AwaitingFuelType => Some(7),
            Step::AwaitingVehicleAge => Some(8),
            Step::Completed | Step::AwaitingContact | Step::Finished => None,
        }
    }
}

/// Answers collected so far for one chat.
///
/// Every setter stores its answer and moves the session to the next step, so
/// a field is only ever populated once its step has been passed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    step: Step,
    country: Option<Country>,
    car_price_usd: Option<f64>,
    auction_fee_usd: Option<f64>,
    delivery_usa_usd: Option<f64>,
    sea_delivery_usd: Option<f64>,
    engine_cc: Option<u32>,
    fuel_type: Option<FuelType>,
    car_age_years: Option<u32>,
    contact_phone: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn country(&self) -> Option<Country> {
        self.country
    }

    pub fn car_price_usd(&self) -> Option<f64> {
        self.car_price_usd
    }

    pub fn auction_fee_usd(&self) -> Option<f64> {
        self.auction_fee_usd
    }

    pub fn engine_cc(&self) -> Option<u32> {
        self.engine_cc
    }

    pub fn fuel_type(&self) -> Option<FuelType> {
        self.fuel_type
    }

    pub fn car_age_years(&self) -> Option<u32> {
        self.car_age_years
    }

    pub fn contact_phone(&self) -> Option<&str> {
        self.contact_phone.as_deref()
    }

    /// The full answer set, available once the age question is answered.
    pub fn inputs(&self) -> Option<CalculationInputs> {
        Some(CalculationInputs {
            country: self.country?,
            car_price_usd: self.car_price_usd?,
            auction_fee_usd: self.auction_fee_usd?,
            delivery_usa_usd: self.delivery_usa_usd?,
            sea_delivery_usd: self.sea_delivery_usd?,
            engine_cc: self.engine_cc?,
            fuel_type: self.fuel_type?,
            car_age_years: self.car_age_years?,
        })
    }

    pub(crate) fn set_country(&mut self, country: Country) {
        self.country = Some(country);
        self.step = Step::AwaitingCarPrice;
    }

    pub(crate) fn set_car_price(&mut self, price_usd: f64) {
        self.car_price_usd = Some(price_usd);
        self.step = Step::AwaitingAuctionFee;
    }

    pub(crate) fn set_auction_fee(&mut self, fee_usd: f64) {
        self.auction_fee_usd = Some(fee_usd);
        self.step = Step::AwaitingDeliveryUsa;
    }

    pub(crate) fn set_delivery_usa(&mut self, cost_usd: f64) {
        self.delivery_usa_usd = Some(cost_usd);
        self.step = Step::AwaitingSeaDelivery;
    }

    pub(crate) fn set_sea_delivery(&mut self, cost_usd: f64) {
        self.sea_delivery_usd = Some(cost_usd);
        self.step = Step::AwaitingEngineDisplacement;
    }

    pub(crate) fn set_engine_cc(&mut self, engine_cc: u32) {
        self.engine_cc = Some(engine_cc);
        self.step = Step::AwaitingFuelType;
    }

    pub(crate) fn set_fuel_type(&mut self, fuel: FuelType) {
        self.fuel_type = Some(fuel);
        self.step = Step::AwaitingVehicleAge;
    }

    pub(crate) fn set_car_age(&mut self, age_years: u32) {
        self.car_age_years = Some(age_years);
        self.step = Step::Completed;
    }

    pub(crate) fn await_contact(&mut self) {
        self.step = Step::AwaitingContact;
    }

    pub(crate) fn finish(&mut self, phone: String) {
        self.contact_phone = Some(phone);
        self.step = Step::Finished;
    }
}

/// A complete answer set, the only thing the calculators ever see.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInputs {
    pub country: Country,
    pub car_price_usd: f64,
    pub auction_fee_usd: f64,
    pub delivery_usa_usd: f64,
    pub sea_delivery_usd: f64,
    pub engine_cc: u32,
    pub fuel_type: FuelType,
    pub car_age_years: u32,
}

impl CalculationInputs {
    /// Price plus every logistics cost up to the destination port.
    pub fn customs_value_usd(&self) -> f64 {
        self.car_price_usd + self.auction_fee_usd + self.delivery_usa_usd + self.sea_delivery_usd
    }
}
