use crate::core::lesson::LessonInputs;
use crate::domain::model::PriceQuote;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_max, validate_non_empty_string, validate_non_negative, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const MAX_BIRTHDAYS: u32 = 1_000_000;

/// Optional overrides for lesson inputs. Anything left out keeps the
/// classroom values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonConfig {
    pub pricing: Option<PricingConfig>,
    pub animal: Option<AnimalConfig>,
}

/// `tax` and `discount` stay optional so the file can exercise the
/// "argument left out" path as well as an explicit `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub price: Option<f64>,
    pub tax: Option<f64>,
    pub discount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalConfig {
    pub name: Option<String>,
    pub r#type: Option<String>,
    pub birthdays: Option<u32>,
}

impl LessonConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LESSON_PRICE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// A `[pricing]` table replaces the whole quote: keys it leaves out are
    /// treated as omitted arguments, not as the classroom values.
    pub fn to_inputs(&self) -> LessonInputs {
        let defaults = LessonInputs::default();

        let quote = match &self.pricing {
            Some(pricing) => PriceQuote {
                price: pricing.price.unwrap_or(defaults.quote.price),
                tax: pricing.tax,
                discount: pricing.discount,
            },
            None => defaults.quote,
        };

        let animal = self.animal.clone().unwrap_or_default();
        LessonInputs {
            quote,
            animal_name: animal.name.unwrap_or(defaults.animal_name),
            animal_type: animal.r#type.unwrap_or(defaults.animal_type),
            birthdays: animal.birthdays.unwrap_or(defaults.birthdays),
        }
    }
}

impl Validate for LessonConfig {
    fn validate(&self) -> Result<()> {
        if let Some(pricing) = &self.pricing {
            if let Some(price) = pricing.price {
                validate_non_negative("pricing.price", price)?;
            }
            if let Some(tax) = pricing.tax {
                validate_range("pricing.tax", tax, 0.0, 1.0)?;
            }
            if let Some(discount) = pricing.discount {
                validate_range("pricing.discount", discount, 0.0, 1.0)?;
            }
        }

        if let Some(animal) = &self.animal {
            if let Some(name) = &animal.name {
                validate_non_empty_string("animal.name", name)?;
            }
            if let Some(kind) = &animal.r#type {
                validate_non_empty_string("animal.type", kind)?;
            }
            if let Some(birthdays) = animal.birthdays {
                validate_max("animal.birthdays", birthdays, MAX_BIRTHDAYS)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LessonError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_keeps_classroom_inputs() {
        let config = LessonConfig::from_toml_str("").unwrap();
        assert_eq!(config, LessonConfig::default());
        assert_eq!(config.to_inputs(), LessonInputs::default());
    }

    #[test]
    fn test_pricing_table_without_tax_means_omitted() {
        let toml_content = r#"
[pricing]
price = 20.0
discount = 0.0
"#;
        let inputs = LessonConfig::from_toml_str(toml_content)
            .unwrap()
            .to_inputs();
        assert_eq!(inputs.quote.price, 20.0);
        assert_eq!(inputs.quote.tax, None);
        assert_eq!(inputs.quote.discount, Some(0.0));
    }

    #[test]
    fn test_animal_overrides() {
        let toml_content = r#"
[animal]
name = "Nala"
type = "Lioness"
birthdays = 3
"#;
        let inputs = LessonConfig::from_toml_str(toml_content)
            .unwrap()
            .to_inputs();
        assert_eq!(inputs.animal_name, "Nala");
        assert_eq!(inputs.animal_type, "Lioness");
        assert_eq!(inputs.birthdays, 3);
        assert_eq!(inputs.quote, LessonInputs::default().quote);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PITFALL_TEST_ANIMAL_NAME", "Simba");

        let toml_content = r#"
[animal]
name = "${PITFALL_TEST_ANIMAL_NAME}"
"#;
        let config = LessonConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.animal.and_then(|a| a.name).as_deref(),
            Some("Simba")
        );

        std::env::remove_var("PITFALL_TEST_ANIMAL_NAME");
    }

    #[test]
    fn test_unset_env_var_is_left_alone() {
        let toml_content = r#"
[animal]
name = "${PITFALL_TEST_SURELY_UNSET}"
"#;
        let config = LessonConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.animal.and_then(|a| a.name).as_deref(),
            Some("${PITFALL_TEST_SURELY_UNSET}")
        );
    }

    #[test]
    fn test_config_validation() {
        let bad_tax = LessonConfig::from_toml_str("[pricing]\ntax = 1.5\n").unwrap();
        assert!(matches!(
            bad_tax.validate(),
            Err(LessonError::InvalidConfigValueError { ref field, .. }) if field == "pricing.tax"
        ));

        let bad_price = LessonConfig::from_toml_str("[pricing]\nprice = -1.0\n").unwrap();
        assert!(bad_price.validate().is_err());

        let blank_name = LessonConfig::from_toml_str("[animal]\nname = \" \"\n").unwrap();
        assert!(blank_name.validate().is_err());

        let zero_rates =
            LessonConfig::from_toml_str("[pricing]\ntax = 0.0\ndiscount = 0.0\n").unwrap();
        assert!(zero_rates.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml() {
        let result = LessonConfig::from_toml_str("[pricing\nprice = 1");
        assert!(matches!(result, Err(LessonError::TomlParseError(_))));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[pricing]\nprice = 10.0\ntax = 0.2\n")
            .unwrap();

        let config = LessonConfig::from_file(temp_file.path()).unwrap();
        let pricing = config.pricing.unwrap();
        assert_eq!(pricing.tax, Some(0.2));
        assert_eq!(pricing.discount, None);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = LessonConfig::from_file("/definitely/not/here/lessons.toml");
        assert!(matches!(result, Err(LessonError::IoError(_))));
    }
}
