pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::lesson::{LessonSelection, OutputFormat, VariantSelection};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pitfall-lessons")]
#[command(about = "Runs the default-parameter and animal lessons and prints their output")]
pub struct CliConfig {
    /// all, default-parameters or animal
    #[arg(long, default_value = "all")]
    pub lesson: LessonSelection,

    /// all, bug, solution, prototype or class
    #[arg(long, default_value = "all")]
    pub variant: VariantSelection,

    /// Path to a TOML file overriding the lesson inputs
    #[arg(short, long)]
    pub config: Option<String>,

    /// text or json
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
