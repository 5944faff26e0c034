use crate::config::drill_config::DrillConfig;
use crate::config::presets;
use crate::domain::model::{DrillRules, Op, OperandRule};
use crate::domain::ports::RulesProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "math-trainer")]
#[command(about = "An interactive trainer for mental arithmetic drills")]
pub struct CliConfig {
    #[arg(long, default_value = "2", help = "Digit count for the left operand")]
    pub digits_a: u32,

    #[arg(long, default_value = "1", help = "Digit count for the right operand")]
    pub digits_b: u32,

    #[arg(long, default_value = "+", help = "Operation: +, -, * or /")]
    pub op: String,

    #[arg(long, default_value = "10", help = "Number of problems in the session")]
    pub count: usize,

    #[arg(long, help = "Pin the left operand to a fixed value")]
    pub a_fixed: Option<i64>,

    #[arg(long, help = "Pin the right operand to a fixed value")]
    pub b_fixed: Option<i64>,

    #[arg(long, help = "Run a named practice preset")]
    pub preset: Option<String>,

    #[arg(long, help = "List available practice presets")]
    pub list_presets: bool,

    #[arg(long, help = "Print the strategy behind a preset")]
    pub explain: Option<String>,

    #[arg(long, help = "Load drill rules from a TOML file")]
    pub drill_file: Option<String>,

    #[arg(long, help = "Write a JSON session report to this path")]
    pub report_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log session timing stats")]
    pub monitor: bool,
}

impl RulesProvider for CliConfig {
    /// Resolve the session rules; a drill file wins over a preset, a preset
    /// wins over the plain flags, and fixed operands override digit counts.
    fn drill_rules(&self) -> Result<DrillRules> {
        if let Some(path) = &self.drill_file {
            return DrillConfig::from_file(path)?.drill_rules();
        }

        if let Some(id) = &self.preset {
            return Ok(presets::lookup(id).unwrap_or_else(|| {
                tracing::warn!("Unknown preset '{}', falling back to the default drill", id);
                presets::fallback()
            }));
        }

        let op = Op::parse(&self.op)?;
        let a = match self.a_fixed {
            Some(v) => OperandRule::Fixed(v),
            None => OperandRule::Digits(self.digits_a),
        };
        let b = match self.b_fixed {
            Some(v) => OperandRule::Fixed(v),
            None => OperandRule::Digits(self.digits_b),
        };
        Ok(DrillRules {
            a,
            b,
            op,
            count: self.count,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let rules = self.drill_rules()?;
        validation::validate_rules(&rules)
    }
}
