use crate::domain::model::{DrillRules, Op, OperandRule, Problem};
use rand::Rng;

/// How many redraws the generator allows itself, both for repeat avoidance
/// and for finding a clean division.
const MAX_ATTEMPTS: usize = 300;

/// Draws problems matching a set of drill rules. Generic over the RNG so
/// tests can run seeded.
pub struct ProblemGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> ProblemGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate the next problem, avoiding an exact operand repeat of the
    /// previous one when possible.
    pub fn next_problem(&mut self, rules: &DrillRules, previous: Option<(i64, i64)>) -> Problem {
        let mut candidate = self.generate(rules);
        if let Some(prev) = previous {
            let mut attempts = 1;
            while candidate.operand_pair() == prev && attempts < MAX_ATTEMPTS {
                candidate = self.generate(rules);
                attempts += 1;
            }
        }
        candidate
    }

    fn generate(&mut self, rules: &DrillRules) -> Problem {
        match rules.op {
            Op::Add => {
                let a = self.draw(rules.a);
                let b = self.draw(rules.b);
                Problem {
                    a,
                    b,
                    op: Op::Add,
                    answer: a + b,
                }
            }
            Op::Sub => self.generate_subtraction(rules),
            Op::Mul => {
                let a = self.draw(rules.a);
                let b = self.draw(rules.b);
                Problem {
                    a,
                    b,
                    op: Op::Mul,
                    answer: a * b,
                }
            }
            Op::Div => self.generate_division(rules),
        }
    }

    fn draw(&mut self, rule: OperandRule) -> i64 {
        match rule {
            OperandRule::Fixed(v) => v,
            OperandRule::Digits(_) => {
                let (lo, hi) = rule.range();
                self.rng.random_range(lo..=hi)
            }
        }
    }

    fn generate_subtraction(&mut self, rules: &DrillRules) -> Problem {
        let mut a = self.draw(rules.a);
        // a minuend of 1 leaves no room for b < a
        if matches!(rules.a, OperandRule::Digits(_)) {
            while a < 2 {
                a = self.draw(rules.a);
            }
        }

        let mut b = self.draw(rules.b);
        if b >= a {
            let (_, b_max) = rules.b.range();
            let upper = b_max.min(a - 1).max(1);
            b = self.rng.random_range(1..=upper);
        }

        Problem {
            a,
            b,
            op: Op::Sub,
            answer: a - b,
        }
    }

    fn generate_division(&mut self, rules: &DrillRules) -> Problem {
        // fixed divisor (the ÷5 style drill): build the dividend from a
        // small multiplier, coercing degenerate divisors up to 2
        if let OperandRule::Fixed(divisor) = rules.b {
            let b = if divisor < 2 { 2 } else { divisor };
            let a = b * self.rng.random_range(2..=20);
            return Problem {
                a,
                b,
                op: Op::Div,
                answer: a / b,
            };
        }

        let (b_min, b_max) = rules.b.range();
        let (a_min, a_max) = rules.a.range();
        for _ in 0..MAX_ATTEMPTS {
            let b = self.rng.random_range(b_min..=b_max);
            let min_mul = (a_min + b - 1) / b;
            let max_mul = a_max / b;
            let lo = min_mul.max(2);
            if max_mul >= lo {
                let m = self.rng.random_range(lo..=max_mul);
                return Problem {
                    a: b * m,
                    b,
                    op: Op::Div,
                    answer: m,
                };
            }
        }

        // no divisor in range admits a clean quotient
        Problem {
            a: 4,
            b: 2,
            op: Op::Div,
            answer: 2,
        }
    }
}
