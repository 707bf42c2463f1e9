use crate::core::pricing::{
    FalsyFallbackCalculator, PresenceCheckCalculator, SignatureDefaultCalculator,
};
use crate::domain::model::{Animal, LessonReport, PriceQuote};
use crate::domain::ports::{Aging, Lesson, PriceCalculator};
use crate::utils::error::{LessonError, Result};
use std::str::FromStr;

/// 以 console 的方式輸出數字：`9` 而不是 `9.0`，`Infinity` 而不是 `inf`。
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        return format!("{}Infinity", sign);
    }
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingVariant {
    Bug,
    Solution,
}

pub struct DefaultParametersLesson {
    variant: PricingVariant,
    quote: PriceQuote,
}

impl DefaultParametersLesson {
    pub const ID: &'static str = "default-parameters";

    pub fn new(variant: PricingVariant, quote: PriceQuote) -> Self {
        Self { variant, quote }
    }
}

impl Lesson for DefaultParametersLesson {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn title(&self) -> &'static str {
        match self.variant {
            PricingVariant::Bug => "Default parameters: falsy fallback",
            PricingVariant::Solution => "Default parameters: presence check and declared defaults",
        }
    }

    fn run(&self) -> Result<LessonReport> {
        let mut report = LessonReport::new(self.id(), self.title());
        match self.variant {
            PricingVariant::Bug => {
                let result = FalsyFallbackCalculator.resolve(&self.quote);
                tracing::debug!("🐛 falsy fallback resolved to {:?}", result);
                report.push(format_number(result.total));
            }
            PricingVariant::Solution => {
                let checked = PresenceCheckCalculator.calc_price(&self.quote);
                let declared = SignatureDefaultCalculator.calc_price(&self.quote);
                report.push_labeled("With typeof", format_number(checked));
                report.push_labeled("With default parameters", format_number(declared));
            }
        }
        Ok(report)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalVariant {
    Prototype,
    Class,
}

pub struct AnimalLesson {
    variant: AnimalVariant,
    name: String,
    kind: String,
    birthdays: u32,
}

impl AnimalLesson {
    pub const ID: &'static str = "animal";

    pub fn new(
        variant: AnimalVariant,
        name: impl Into<String>,
        kind: impl Into<String>,
        birthdays: u32,
    ) -> Self {
        Self {
            variant,
            name: name.into(),
            kind: kind.into(),
            birthdays,
        }
    }
}

impl Lesson for AnimalLesson {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn title(&self) -> &'static str {
        match self.variant {
            AnimalVariant::Prototype => "Animal: shared method",
            AnimalVariant::Class => "Animal: class method",
        }
    }

    fn run(&self) -> Result<LessonReport> {
        let mut animal = Animal::new(self.name.as_str(), self.kind.as_str());
        for _ in 0..self.birthdays {
            match self.variant {
                AnimalVariant::Prototype => Aging::birthday(&mut animal),
                AnimalVariant::Class => animal.birthday(),
            }
        }
        tracing::debug!("🎂 {} the {} is now {}", animal.name, animal.kind, animal.age());

        let mut report = LessonReport::new(self.id(), self.title());
        report.push(animal.age().to_string());
        Ok(report)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonSelection {
    All,
    DefaultParameters,
    Animal,
}

impl FromStr for LessonSelection {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "default-parameters" | "default_parameters" => Ok(Self::DefaultParameters),
            "animal" => Ok(Self::Animal),
            other => Err(LessonError::UnknownLessonError {
                name: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantSelection {
    All,
    Bug,
    Solution,
    Prototype,
    Class,
}

impl FromStr for VariantSelection {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "bug" => Ok(Self::Bug),
            "solution" => Ok(Self::Solution),
            "prototype" => Ok(Self::Prototype),
            "class" => Ok(Self::Class),
            other => Err(LessonError::InvalidConfigValueError {
                field: "variant".to_string(),
                value: other.to_string(),
                reason: "Valid variants: all, bug, solution, prototype, class".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(LessonError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: text, json".to_string(),
            }),
        }
    }
}

/// Inputs shared by every lesson built for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonInputs {
    pub quote: PriceQuote,
    pub animal_name: String,
    pub animal_type: String,
    pub birthdays: u32,
}

impl Default for LessonInputs {
    fn default() -> Self {
        Self {
            quote: PriceQuote::new(10.0).with_tax(0.0).with_discount(0.1),
            animal_name: "Leo".to_string(),
            animal_type: "Lion".to_string(),
            birthdays: 1,
        }
    }
}

pub fn build_lessons(
    lesson: LessonSelection,
    variant: VariantSelection,
    inputs: &LessonInputs,
) -> Result<Vec<Box<dyn Lesson>>> {
    let pricing_variants: &[PricingVariant] = match variant {
        VariantSelection::All => &[PricingVariant::Bug, PricingVariant::Solution],
        VariantSelection::Bug => &[PricingVariant::Bug],
        VariantSelection::Solution => &[PricingVariant::Solution],
        VariantSelection::Prototype | VariantSelection::Class => &[],
    };
    let animal_variants: &[AnimalVariant] = match variant {
        VariantSelection::All => &[AnimalVariant::Prototype, AnimalVariant::Class],
        VariantSelection::Prototype => &[AnimalVariant::Prototype],
        VariantSelection::Class => &[AnimalVariant::Class],
        VariantSelection::Bug | VariantSelection::Solution => &[],
    };

    let mut lessons: Vec<Box<dyn Lesson>> = Vec::new();
    if matches!(lesson, LessonSelection::All | LessonSelection::DefaultParameters) {
        for &v in pricing_variants {
            lessons.push(Box::new(DefaultParametersLesson::new(v, inputs.quote)));
        }
    }
    if matches!(lesson, LessonSelection::All | LessonSelection::Animal) {
        for &v in animal_variants {
            lessons.push(Box::new(AnimalLesson::new(
                v,
                inputs.animal_name.as_str(),
                inputs.animal_type.as_str(),
                inputs.birthdays,
            )));
        }
    }

    if lessons.is_empty() {
        return Err(LessonError::InvalidConfigValueError {
            field: "variant".to_string(),
            value: format!("{:?}", variant).to_lowercase(),
            reason: format!("No such variant for lesson {:?}", lesson),
        });
    }
    Ok(lessons)
}

pub struct LessonRunner {
    lessons: Vec<Box<dyn Lesson>>,
}

impl LessonRunner {
    pub fn new(lessons: Vec<Box<dyn Lesson>>) -> Self {
        Self { lessons }
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn run(&self) -> Result<Vec<LessonReport>> {
        tracing::info!("🚀 Running {} lesson(s)", self.lessons.len());

        let mut reports = Vec::with_capacity(self.lessons.len());
        for lesson in &self.lessons {
            tracing::info!("📖 {} ({})", lesson.title(), lesson.id());
            let report = lesson.run()?;
            tracing::debug!("Produced {} line(s)", report.lines.len());
            reports.push(report);
        }

        tracing::info!("✅ All lessons finished");
        Ok(reports)
    }

    pub fn render(reports: &[LessonReport], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(reports
                .iter()
                .map(LessonReport::render_text)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        }
    }
}
