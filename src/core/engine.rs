use crate::core::generator::ProblemGenerator;
use crate::core::watcher::{InputField, InputWatcher, SubmitOnce, WatcherState};
use crate::domain::model::{Answer, DrillRules, ProblemStat, SessionReport};
use crate::domain::ports::AnswerInput;
use crate::utils::error::Result;
use crate::utils::monitor::SessionMonitor;
use chrono::Utc;
use rand::Rng;
use std::time::Instant;

/// Typing this (trimmed, exact) ends the session early.
pub const ABORT_COMMAND: &str = "abort";

/// Runs one practice session: generates problems, feeds every typed line
/// through an input watcher as a single change event, and advances when the
/// watcher submits.
pub struct SessionEngine<I: AnswerInput, R: Rng> {
    input: I,
    generator: ProblemGenerator<R>,
    monitor: SessionMonitor,
}

impl<I: AnswerInput, R: Rng> SessionEngine<I, R> {
    pub fn new(input: I, generator: ProblemGenerator<R>) -> Self {
        Self::new_with_monitoring(input, generator, false)
    }

    pub fn new_with_monitoring(
        input: I,
        generator: ProblemGenerator<R>,
        monitor_enabled: bool,
    ) -> Self {
        Self {
            input,
            generator,
            monitor: SessionMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&mut self, rules: &DrillRules) -> Result<SessionReport> {
        println!("Starting practice session: {} problems", rules.count);
        let started_at = Utc::now();
        let mut problems = Vec::new();
        let mut solved = 0;
        let mut aborted = false;
        let mut previous: Option<(i64, i64)> = None;

        'session: for index in 0..rules.count {
            let problem = self.generator.next_problem(rules, previous);
            previous = Some(problem.operand_pair());
            tracing::debug!("Generated problem: {:?}", problem);

            println!("📝 Problem {}/{}: {}", index + 1, rules.count, problem.prompt());

            // fresh watcher per problem; the answer travels as text, the
            // same way the original page embedded it
            let mut watcher =
                InputWatcher::attach(SubmitOnce::default(), Answer::Text(problem.answer.to_string()));
            let mut field = InputField::new();
            let mut attempts: u32 = 0;
            let problem_start = Instant::now();

            loop {
                let Some(line) = self.input.next_line()? else {
                    tracing::info!("Input closed, ending session early");
                    aborted = true;
                    break 'session;
                };
                if line.trim() == ABORT_COMMAND {
                    tracing::info!("Session aborted by user");
                    aborted = true;
                    break 'session;
                }

                attempts += 1;
                field.set(&line);
                if watcher.on_input(&mut field) == WatcherState::Submitted {
                    solved += 1;
                    println!("✅ Correct!");
                    break;
                }
                println!("Not yet - try again, or type '{}'", ABORT_COMMAND);
            }

            problems.push(ProblemStat {
                prompt: problem.prompt(),
                answer: problem.answer,
                attempts,
                elapsed_ms: problem_start.elapsed().as_millis() as u64,
            });
            self.monitor.log_stats(&format!("Problem {}", index + 1));
        }

        self.monitor.log_final_stats();

        let report = SessionReport {
            started_at,
            finished_at: Utc::now(),
            requested: rules.count,
            solved,
            aborted,
            problems,
        };

        if report.aborted {
            println!("Session ended early: {}/{} solved", report.solved, report.requested);
        } else {
            println!("🎉 Session complete: {}/{} solved", report.solved, report.requested);
        }

        Ok(report)
    }
}
