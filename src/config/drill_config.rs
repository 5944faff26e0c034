use crate::domain::model::{DrillRules, Op, OperandRule, DEFAULT_PROBLEM_COUNT};
use crate::domain::ports::RulesProvider;
use crate::utils::error::{Result, TrainerError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A drill definition loaded from a TOML file:
///
/// ```toml
/// [drill]
/// name = "times eleven"
/// description = "2-digit numbers times 11"
///
/// [rules]
/// digits_a = 2
/// b_fixed = 11
/// op = "*"
/// count = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillConfig {
    pub drill: DrillSection,
    pub rules: RulesSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesSection {
    pub digits_a: Option<u32>,
    pub digits_b: Option<u32>,
    pub a_fixed: Option<i64>,
    pub b_fixed: Option<i64>,
    pub op: String,
    pub count: Option<usize>,
}

impl DrillConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrainerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TrainerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

fn operand_rule(
    field: &'static str,
    fixed: Option<i64>,
    digits: Option<u32>,
) -> Result<OperandRule> {
    match (fixed, digits) {
        // a fixed value overrides a digit range, like the session overrides did
        (Some(v), _) => Ok(OperandRule::Fixed(v)),
        (None, Some(d)) => Ok(OperandRule::Digits(d)),
        (None, None) => Err(TrainerError::MissingConfigError {
            field: field.to_string(),
        }),
    }
}

impl RulesProvider for DrillConfig {
    fn drill_rules(&self) -> Result<DrillRules> {
        let op = Op::parse(&self.rules.op)?;
        let a = operand_rule("rules.digits_a", self.rules.a_fixed, self.rules.digits_a)?;
        let b = operand_rule("rules.digits_b", self.rules.b_fixed, self.rules.digits_b)?;
        Ok(DrillRules {
            a,
            b,
            op,
            count: self.rules.count.unwrap_or(DEFAULT_PROBLEM_COUNT),
        })
    }
}

impl Validate for DrillConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("drill.name", &self.drill.name)?;
        let rules = self.drill_rules()?;
        validation::validate_rules(&rules)
    }
}
