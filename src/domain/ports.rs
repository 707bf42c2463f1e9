use crate::domain::model::{Animal, LessonReport, PriceBreakdown, PriceQuote};
use crate::utils::error::Result;

pub trait PriceCalculator {
    fn name(&self) -> &'static str;

    /// Decide which tax and discount apply, then compute the total.
    fn resolve(&self, quote: &PriceQuote) -> PriceBreakdown;

    fn calc_price(&self, quote: &PriceQuote) -> f64 {
        self.resolve(quote).total
    }
}

/// Behaviour defined once and shared by every implementor, applied to the
/// receiver's own counter.
pub trait Aging {
    fn age_mut(&mut self) -> &mut u32;

    fn birthday(&mut self) {
        let age = self.age_mut();
        *age = age.saturating_add(1);
    }
}

impl Aging for Animal {
    fn age_mut(&mut self) -> &mut u32 {
        self.age_slot()
    }
}

pub trait Lesson {
    fn id(&self) -> &'static str;
    fn title(&self) -> &'static str;
    fn run(&self) -> Result<LessonReport>;
}
