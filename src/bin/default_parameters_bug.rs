use pitfall_lessons::core::lesson::format_number;
use pitfall_lessons::{FalsyFallbackCalculator, PriceCalculator, PriceQuote};

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let quote = PriceQuote::new(10.0).with_tax(0.0).with_discount(0.1);
    let result = FalsyFallbackCalculator.calc_price(&quote);
    // tax: 0 is falsy -> 0.05 (wrong, should stay 0)
    // discount: 0.1 is truthy -> 0.1
    tracing::debug!(?quote, result, "falsy fallback");

    println!("{}", format_number(result));
}
