use crate::{CalculationInputs, FeeBreakdown};

/// Everything the final message shows, already priced.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub inputs: CalculationInputs,
    pub manufacture_year: i32,
    /// Price, auction fee and both deliveries, in USD.
    pub logistics_usd: f64,
    pub logistics_local: f64,
    pub fees: FeeBreakdown,
    pub total_local: f64,
    pub total_usd: f64,
    /// Local currency units per 1 USD used for the conversions above.
    pub usd_rate: f64,
    pub currency_symbol: &'static str,
}

impl Report {
    pub fn assemble(inputs: &CalculationInputs, current_year: i32) -> Self {
        let rate = inputs.country.currency().rate();
        let logistics_usd = inputs.customs_value_usd();
        let fees = inputs.country.calculate(
            logistics_usd,
            inputs.engine_cc,
            inputs.fuel_type,
            inputs.car_age_years,
        );
        let logistics_local = logistics_usd * rate.usd_rate;
        let total_local = logistics_local + fees.total();

        Self {
            inputs: *inputs,
            manufacture_year: manufacture_year(current_year, inputs.car_age_years),
            logistics_usd,
            logistics_local,
            total_local,
            total_usd: total_local / rate.usd_rate,
            usd_rate: rate.usd_rate,
            currency_symbol: rate.symbol,
            fees,
        }
    }
}

pub fn manufacture_year(current_year: i32, age_years: u32) -> i32 {
    i32::try_from(age_years).map_or(i32::MIN, |age| current_year.saturating_sub(age))
}
