use pitfall_lessons::calc_price;
use pitfall_lessons::core::lesson::format_number;
use pitfall_lessons::{PresenceCheckCalculator, PriceCalculator, PriceQuote};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let quote = PriceQuote::from_args(&[10.0, 0.0, 0.1])
        .ok_or_else(|| anyhow::anyhow!("a price is required"))?;

    // 0 is present, so it is kept
    let checked = PresenceCheckCalculator.calc_price(&quote);
    println!("With typeof {}", format_number(checked));

    let declared = calc_price!(10.0, 0.0, 0.1);
    println!("With default parameters {}", format_number(declared));

    Ok(())
}
