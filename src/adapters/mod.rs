// Adapters layer: concrete input sources behind the AnswerInput port.

use crate::domain::ports::AnswerInput;
use crate::utils::error::Result;
use std::collections::VecDeque;
use std::io::BufRead;

/// Reads answer lines from stdin, one change event per line.
#[derive(Debug, Default)]
pub struct StdinInput;

impl StdinInput {
    pub fn new() -> Self {
        Self
    }
}

impl AnswerInput for StdinInput {
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        // strip the line ending but keep inner whitespace: trimming is the
        // watcher's job
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Deterministic input source for tests and scripted runs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl AnswerInput for ScriptedInput {
    fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
