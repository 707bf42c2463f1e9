pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::LessonConfig;
pub use crate::core::lesson::{build_lessons, LessonInputs, LessonRunner};
pub use crate::core::pricing::{
    FalsyFallbackCalculator, PresenceCheckCalculator, PriceArgs, SignatureDefaultCalculator,
};
pub use crate::domain::model::{Animal, PriceQuote};
pub use crate::domain::ports::{Aging, PriceCalculator};
pub use crate::utils::error::{LessonError, Result};
