use clap::Parser;
use pitfall_lessons::core::lesson::OutputFormat;
use pitfall_lessons::utils::{logger, validation::Validate};
use pitfall_lessons::{build_lessons, CliConfig, LessonConfig, LessonError, LessonRunner};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.format {
        OutputFormat::Json => logger::init_json_logger(),
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
    }

    tracing::info!("Starting pitfall-lessons");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ Lesson run failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<(), LessonError> {
    let lesson_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading lesson inputs from: {}", path);
            LessonConfig::from_file(path)?
        }
        None => LessonConfig::default(),
    };

    // 驗證配置
    lesson_config.validate()?;
    let inputs = lesson_config.to_inputs();
    tracing::debug!("Lesson inputs: {:?}", inputs);

    let runner = LessonRunner::new(build_lessons(config.lesson, config.variant, &inputs)?);
    let reports = runner.run()?;
    println!("{}", LessonRunner::render(&reports, config.format)?);

    Ok(())
}
