pub mod engine;
pub mod generator;
pub mod watcher;

pub use crate::domain::model::{Answer, DrillRules, Problem, SessionReport};
pub use crate::domain::ports::{AnswerInput, Form, RulesProvider};
pub use crate::utils::error::Result;
