use serde::{Deserialize, Serialize};

pub const DEFAULT_TAX: f64 = 0.05;
pub const DEFAULT_DISCOUNT: f64 = 0.0;

/// Price calculation input. `None` means the caller left the argument out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub price: f64,
    pub tax: Option<f64>,
    pub discount: Option<f64>,
}

impl PriceQuote {
    pub fn new(price: f64) -> Self {
        Self {
            price,
            tax: None,
            discount: None,
        }
    }

    pub fn with_tax(mut self, tax: f64) -> Self {
        self.tax = Some(tax);
        self
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    /// 依位置參數建立報價：缺少的尾端參數視為未傳入，多餘的參數忽略。
    ///
    /// Returns `None` when not even a price was given.
    pub fn from_args(args: &[f64]) -> Option<Self> {
        let (&price, rest) = args.split_first()?;
        Some(Self {
            price,
            tax: rest.first().copied(),
            discount: rest.get(1).copied(),
        })
    }
}

/// The rates a calculator actually used, and the resulting total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub price: f64,
    pub tax: f64,
    pub discount: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    age: u32,
}

impl Animal {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            age: 0,
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Saturates instead of wrapping so the age never goes backwards.
    pub fn birthday(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    pub(crate) fn age_slot(&mut self) -> &mut u32 {
        &mut self.age
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonReport {
    pub lesson: String,
    pub title: String,
    pub lines: Vec<ReportLine>,
}

impl LessonReport {
    pub fn new(lesson: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            lesson: lesson.into(),
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.lines.push(ReportLine {
            label: None,
            value: value.into(),
        });
    }

    pub fn push_labeled(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.lines.push(ReportLine {
            label: Some(label.into()),
            value: value.into(),
        });
    }

    /// Console rendering: one line per entry, `label value` when labeled.
    pub fn render_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| match &line.label {
                Some(label) => format!("{} {}", label, line.value),
                None => line.value.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
