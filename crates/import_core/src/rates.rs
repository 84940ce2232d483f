/// Currencies the calculators settle in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Uah,
    Pln,
    Eur,
    Gel,
}

/// Static exchange rate for one local currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyRate {
    pub code: &'static str,
    /// Local currency units per 1 USD.
    pub usd_rate: f64,
    /// Local currency units per 1 EUR.
    pub eur_rate: f64,
    pub symbol: &'static str,
}

impl CurrencyRate {
    /// EUR per 1 USD, derived through the local currency.
    pub fn usd_to_eur(&self) -> f64 {
        self.usd_rate / self.eur_rate
    }
}

// Rates are maintained by hand; there is no live feed.
const UAH: CurrencyRate = CurrencyRate {
    code: "UAH",
    usd_rate: 41.5,
    eur_rate: 44.5,
    symbol: "UAH",
};
const PLN: CurrencyRate = CurrencyRate {
    code: "PLN",
    usd_rate: 4.05,
    eur_rate: 4.28,
    symbol: "PLN",
};
const EUR: CurrencyRate = CurrencyRate {
    code: "EUR",
    usd_rate: 0.93,
    eur_rate: 1.0,
    symbol: "EUR",
};
const GEL: CurrencyRate = CurrencyRate {
    code: "GEL",
    usd_rate: 2.68,
    eur_rate: 2.88,
    symbol: "GEL",
};

impl Currency {
    pub fn rate(self) -> &'static CurrencyRate {
        match self {
            Currency::Uah => &UAH,
            Currency::Pln => &PLN,
            Currency::Eur => &EUR,
            Currency::Gel => &GEL,
        }
    }
}
