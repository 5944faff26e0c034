use anyhow::Result;
use math_trainer::core::RulesProvider;
use math_trainer::domain::model::{Op, OperandRule};
use math_trainer::utils::validation::Validate;
use math_trainer::{DrillConfig, TrainerError};
use tempfile::TempDir;

#[test]
fn test_loads_and_validates_a_drill_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("mult11.toml");
    std::fs::write(
        &path,
        r#"
[drill]
name = "times eleven"
description = "2-digit numbers times 11"

[rules]
digits_a = 2
b_fixed = 11
op = "*"
count = 5
"#,
    )?;

    let config = DrillConfig::from_file(&path)?;
    config.validate()?;

    let rules = config.drill_rules()?;
    assert_eq!(rules.a, OperandRule::Digits(2));
    assert_eq!(rules.b, OperandRule::Fixed(11));
    assert_eq!(rules.op, Op::Mul);
    assert_eq!(rules.count, 5);
    assert_eq!(config.drill.description.as_deref(), Some("2-digit numbers times 11"));
    Ok(())
}

#[test]
fn test_missing_drill_file_surfaces_an_io_error() {
    let result = DrillConfig::from_file("/no/such/drill.toml");
    assert!(matches!(result, Err(TrainerError::IoError(_))));
}

#[test]
fn test_infeasible_drill_file_fails_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bad_div.toml");
    std::fs::write(
        &path,
        r#"
[drill]
name = "impossible division"

[rules]
digits_a = 1
digits_b = 2
op = "/"
"#,
    )?;

    let config = DrillConfig::from_file(&path)?;
    assert!(config.validate().is_err());
    Ok(())
}

#[test]
fn test_out_of_range_count_fails_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("marathon.toml");
    std::fs::write(
        &path,
        r#"
[drill]
name = "marathon"

[rules]
digits_a = 2
digits_b = 2
op = "+"
count = 5000
"#,
    )?;

    let config = DrillConfig::from_file(&path)?;
    assert!(config.validate().is_err());
    Ok(())
}
