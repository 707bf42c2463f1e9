use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown lesson: {name}")]
    UnknownLessonError { name: String },
}

impl LessonError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            LessonError::IoError(e) => format!("Could not read a file: {}", e),
            LessonError::SerializationError(e) => format!("Could not render the report: {}", e),
            LessonError::TomlParseError(_) => {
                "The lesson config file is not valid TOML".to_string()
            }
            LessonError::InvalidConfigValueError { field, value, .. } => {
                format!("Config value '{}' for '{}' is not allowed", value, field)
            }
            LessonError::UnknownLessonError { name } => {
                format!("There is no lesson called '{}'", name)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LessonError::IoError(_) => {
                "Check that the --config path exists and is readable".to_string()
            }
            LessonError::SerializationError(_) => "Retry with --format text".to_string(),
            LessonError::TomlParseError(e) => format!("Fix the TOML syntax: {}", e.message()),
            LessonError::InvalidConfigValueError { reason, .. } => reason.clone(),
            LessonError::UnknownLessonError { .. } => {
                "Use one of: default-parameters, animal".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;
