use crate::domain::model::{PriceBreakdown, PriceQuote, DEFAULT_DISCOUNT, DEFAULT_TAX};
use crate::domain::ports::PriceCalculator;

pub fn total(price: f64, tax: f64, discount: f64) -> f64 {
    price + price * tax - price * discount
}

/// Absent, zero (either sign) and NaN all count as falsy.
pub fn is_falsy(value: Option<f64>) -> bool {
    match value {
        None => true,
        Some(v) => v == 0.0 || v.is_nan(),
    }
}

/// `value || fallback`
fn or_fallback(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if !is_falsy(Some(v)) => v,
        _ => fallback,
    }
}

/// The broken version: any falsy rate is swapped for its default, so an
/// explicit `tax = 0` silently becomes 5%.
#[derive(Debug, Default, Clone, Copy)]
pub struct FalsyFallbackCalculator;

impl PriceCalculator for FalsyFallbackCalculator {
    fn name(&self) -> &'static str {
        "falsy-fallback"
    }

    fn resolve(&self, quote: &PriceQuote) -> PriceBreakdown {
        let tax = or_fallback(quote.tax, DEFAULT_TAX);
        let discount = or_fallback(quote.discount, DEFAULT_DISCOUNT);
        tracing::debug!(
            "{}: tax {:?} -> {}, discount {:?} -> {}",
            self.name(),
            quote.tax,
            tax,
            quote.discount,
            discount
        );
        breakdown(quote.price, tax, discount)
    }
}

/// Checks each rate for absence explicitly before defaulting it.
#[derive(Debug, Default, Clone, Copy)]
pub struct PresenceCheckCalculator;

impl PriceCalculator for PresenceCheckCalculator {
    fn name(&self) -> &'static str {
        "presence-check"
    }

    fn resolve(&self, quote: &PriceQuote) -> PriceBreakdown {
        let tax = match quote.tax {
            None => DEFAULT_TAX,
            Some(tax) => tax,
        };
        let discount = match quote.discount {
            None => DEFAULT_DISCOUNT,
            Some(discount) => discount,
        };
        breakdown(quote.price, tax, discount)
    }
}

/// Optional arguments with their defaults declared in one place.
///
/// Override only what you pass: `PriceArgs { tax: 0.0, ..Default::default() }`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceArgs {
    pub tax: f64,
    pub discount: f64,
}

impl Default for PriceArgs {
    fn default() -> Self {
        Self {
            tax: DEFAULT_TAX,
            discount: DEFAULT_DISCOUNT,
        }
    }
}

impl From<&PriceQuote> for PriceArgs {
    fn from(quote: &PriceQuote) -> Self {
        let defaults = Self::default();
        Self {
            tax: quote.tax.unwrap_or(defaults.tax),
            discount: quote.discount.unwrap_or(defaults.discount),
        }
    }
}

pub fn calc_price_with(price: f64, args: PriceArgs) -> f64 {
    total(price, args.tax, args.discount)
}

/// Positional price calculation with defaults declared in the macro arms:
/// `calc_price!(10.0)`, `calc_price!(10.0, 0.2)`, `calc_price!(10.0, 0.0, 0.1)`.
#[macro_export]
macro_rules! calc_price {
    ($price:expr) => {
        $crate::calc_price!(
            $price,
            $crate::domain::model::DEFAULT_TAX,
            $crate::domain::model::DEFAULT_DISCOUNT
        )
    };
    ($price:expr, $tax:expr) => {
        $crate::calc_price!($price, $tax, $crate::domain::model::DEFAULT_DISCOUNT)
    };
    ($price:expr, $tax:expr, $discount:expr) => {
        $crate::core::pricing::calc_price_with(
            $price,
            $crate::core::pricing::PriceArgs {
                tax: $tax,
                discount: $discount,
            },
        )
    };
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SignatureDefaultCalculator;

impl PriceCalculator for SignatureDefaultCalculator {
    fn name(&self) -> &'static str {
        "signature-default"
    }

    fn resolve(&self, quote: &PriceQuote) -> PriceBreakdown {
        let args = PriceArgs::from(quote);
        PriceBreakdown {
            price: quote.price,
            tax: args.tax,
            discount: args.discount,
            total: calc_price_with(quote.price, args),
        }
    }
}

fn breakdown(price: f64, tax: f64, discount: f64) -> PriceBreakdown {
    PriceBreakdown {
        price,
        tax,
        discount,
        total: total(price, tax, discount),
    }
}
