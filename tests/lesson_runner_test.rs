use anyhow::Result;
use pitfall_lessons::core::lesson::{LessonSelection, OutputFormat, VariantSelection};
use pitfall_lessons::utils::validation::Validate;
use pitfall_lessons::{build_lessons, LessonConfig, LessonInputs, LessonRunner};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_classroom_output() -> Result<()> {
    let lessons = build_lessons(
        LessonSelection::All,
        VariantSelection::All,
        &LessonInputs::default(),
    )?;
    let reports = LessonRunner::new(lessons).run()?;
    let text = LessonRunner::render(&reports, OutputFormat::Text)?;

    assert_eq!(
        text,
        "9.5\nWith typeof 9\nWith default parameters 9\n1\n1"
    );
    Ok(())
}

#[test]
fn test_config_file_drives_lessons() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(
        br#"
[pricing]
price = 10.0
tax = 0.2

[animal]
name = "Nala"
type = "Lion"
birthdays = 3
"#,
    )?;

    let config = LessonConfig::from_file(temp_file.path())?;
    config.validate()?;
    let inputs = config.to_inputs();

    let lessons = build_lessons(LessonSelection::All, VariantSelection::All, &inputs)?;
    let reports = LessonRunner::new(lessons).run()?;
    let text = LessonRunner::render(&reports, OutputFormat::Text)?;

    // tax 0.2 is truthy, so even the buggy version gets it right here
    assert_eq!(
        text,
        "12\nWith typeof 12\nWith default parameters 12\n3\n3"
    );
    Ok(())
}

#[test]
fn test_single_variant_json() -> Result<()> {
    let lessons = build_lessons(
        LessonSelection::DefaultParameters,
        VariantSelection::Solution,
        &LessonInputs::default(),
    )?;
    let reports = LessonRunner::new(lessons).run()?;
    let json: serde_json::Value =
        serde_json::from_str(&LessonRunner::render(&reports, OutputFormat::Json)?)?;

    let lines = json[0]["lines"].as_array().expect("lines array");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["label"], "With typeof");
    assert_eq!(lines[0]["value"], "9");
    assert_eq!(lines[1]["label"], "With default parameters");
    assert_eq!(lines[1]["value"], "9");
    Ok(())
}

#[test]
fn test_invalid_config_rejected_before_running() -> Result<()> {
    let config = LessonConfig::from_toml_str("[pricing]\ndiscount = 2.0\n")?;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("pricing.discount"));
    Ok(())
}
