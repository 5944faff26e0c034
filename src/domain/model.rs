use crate::utils::error::{Result, TrainerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Default number of problems in a session when nothing else is specified.
pub const DEFAULT_PROBLEM_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Parse a configuration symbol (`+`, `-`, `*`, `/`) into an operation.
    pub fn parse(symbol: &str) -> Result<Self> {
        match symbol.trim() {
            "+" => Ok(Op::Add),
            "-" => Ok(Op::Sub),
            "*" | "x" | "×" => Ok(Op::Mul),
            "/" | "÷" => Ok(Op::Div),
            other => Err(TrainerError::InvalidConfigValueError {
                field: "op".to_string(),
                value: other.to_string(),
                reason: "Supported operations: +, -, *, /".to_string(),
            }),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "×",
            Op::Div => "÷",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Inclusive value range for an integer with `digits` digits.
pub fn digits_range(digits: u32) -> (i64, i64) {
    if digits <= 1 {
        return (1, 9);
    }
    let lo = 10i64.pow(digits - 1);
    (lo, lo * 10 - 1)
}

/// How one operand gets picked: drawn from a digit-count range, or pinned
/// to a fixed value (the ×11 / ÷5 style drills).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperandRule {
    Digits(u32),
    Fixed(i64),
}

impl OperandRule {
    pub fn range(&self) -> (i64, i64) {
        match self {
            OperandRule::Digits(d) => digits_range(*d),
            OperandRule::Fixed(v) => (*v, *v),
        }
    }
}

/// Rules for one practice session: operand shapes, operation, problem count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillRules {
    pub a: OperandRule,
    pub b: OperandRule,
    pub op: Op,
    pub count: usize,
}

/// One generated problem. The answer is always exact: subtraction keeps
/// `b < a` and division problems are constructed from a clean quotient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub a: i64,
    pub b: i64,
    pub op: Op,
    pub answer: i64,
}

impl Problem {
    pub fn prompt(&self) -> String {
        format!("{} {} {} = ?", self.a, self.op.symbol(), self.b)
    }

    pub fn operand_pair(&self) -> (i64, i64) {
        (self.a, self.b)
    }
}

/// The target answer the input watcher compares against.
///
/// Answers normally travel as text (the server-rendered page embedded them
/// through a `|string` filter), but the comparison policy must also cope
/// with a numerically-typed target, so both representations are explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Number(i64),
}

impl Answer {
    /// Loose equality against user input: the input is trimmed first, then
    /// a text target compares as an exact string while a numeric target
    /// compares by parsed value (so `"042"` matches `42`).
    pub fn matches(&self, input: &str) -> bool {
        let trimmed = input.trim();
        match self {
            Answer::Text(t) => trimmed == t.as_str(),
            Answer::Number(n) => trimmed.parse::<i64>().map(|v| v == *n).unwrap_or(false),
        }
    }
}

/// Per-problem stats collected while the session runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemStat {
    pub prompt: String,
    pub answer: i64,
    pub attempts: u32,
    pub elapsed_ms: u64,
}

/// Summary of a finished (or aborted) practice session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub requested: usize,
    pub solved: usize,
    pub aborted: bool,
    pub problems: Vec<ProblemStat>,
}

impl SessionReport {
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, json)?;
        Ok(())
    }
}
