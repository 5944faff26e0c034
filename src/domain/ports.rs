use crate::domain::model::DrillRules;
use crate::utils::error::Result;

/// Submission side of the enclosing form. Submitting is a terminal action
/// for whoever triggered it.
pub trait Form {
    fn submit(&mut self);
}

/// Source of answer input events, one typed line per event.
/// `None` means the input is exhausted.
pub trait AnswerInput {
    fn next_line(&mut self) -> Result<Option<String>>;
}

/// Supplies the drill rules for a session (CLI flags, preset table, or a
/// TOML drill file).
pub trait RulesProvider {
    fn drill_rules(&self) -> Result<DrillRules>;
}
