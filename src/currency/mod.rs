use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("INR")
    }
}

/// Fixed multiplicative rates from the USD snapshot currency into each
/// supported report currency.
static REPORT_RATES: Lazy<BTreeMap<&'static str, f64>> =
    Lazy::new(|| BTreeMap::from([("USD", 1.0), ("INR", 83.0)]));

/// A fixed multiplicative conversion into the report currency.
///
/// Conversion is a pure scalar multiply; rounding happens only at
/// presentation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRate {
    pub to: CurrencyCode,
    pub rate: f64,
}

impl ConversionRate {
    pub fn new(to: CurrencyCode, rate: f64) -> Self {
        Self { to, rate }
    }

    /// Looks up the built-in rate table; unknown codes fall back to the
    /// identity conversion.
    pub fn for_currency(code: &CurrencyCode) -> Self {
        let rate = REPORT_RATES.get(code.as_str()).copied().unwrap_or(1.0);
        Self::new(code.clone(), rate)
    }

    pub fn convert(&self, amount: f64) -> f64 {
        amount * self.rate
    }

    pub fn symbol(&self) -> &str {
        match self.to.as_str() {
            "INR" => "₹",
            "USD" => "$",
            _ => "",
        }
    }
}

impl Default for ConversionRate {
    fn default() -> Self {
        Self::for_currency(&CurrencyCode::default())
    }
}

/// Formats a converted amount with the currency symbol and thousands
/// grouping, e.g. `₹99,600.00`.
pub fn format_amount(rate: &ConversionRate, amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, rate.symbol(), group_thousands(amount.abs()))
}

fn group_thousands(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{grouped}.{frac_part}")
}
