pub mod animal;
pub mod lesson;
pub mod pricing;

pub use crate::domain::model::{Animal, LessonReport, PriceBreakdown, PriceQuote};
pub use crate::domain::ports::{Aging, Lesson, PriceCalculator};
pub use crate::utils::error::Result;
