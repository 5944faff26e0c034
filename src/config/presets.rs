//! Named practice presets: each maps a drill id to its operand rules, plus
//! the mental-math strategy it trains.

use crate::domain::model::{DrillRules, Op, OperandRule, DEFAULT_PROBLEM_COUNT};

pub const PRESET_IDS: [&str; 9] = [
    "add2digit",
    "add3digit",
    "sub2digit",
    "sub2digit_comp",
    "sub3digit",
    "mult11",
    "mult2x1",
    "mult5",
    "div5",
];

fn drill(a: OperandRule, b: OperandRule, op: Op) -> DrillRules {
    DrillRules {
        a,
        b,
        op,
        count: DEFAULT_PROBLEM_COUNT,
    }
}

pub fn lookup(id: &str) -> Option<DrillRules> {
    use OperandRule::{Digits, Fixed};

    let rules = match id {
        "add2digit" => drill(Digits(2), Digits(2), Op::Add),
        "add3digit" => drill(Digits(3), Digits(3), Op::Add),
        "sub2digit" | "sub2digit_comp" => drill(Digits(2), Digits(2), Op::Sub),
        "sub3digit" => drill(Digits(3), Digits(3), Op::Sub),
        "mult11" => drill(Digits(2), Fixed(11), Op::Mul),
        "mult2x1" => drill(Digits(2), Digits(1), Op::Mul),
        "mult5" => drill(Digits(2), Fixed(5), Op::Mul),
        "div5" => drill(Digits(3), Fixed(5), Op::Div),
        _ => return None,
    };
    Some(rules)
}

/// Rules used when a preset id is unknown.
pub fn fallback() -> DrillRules {
    drill(OperandRule::Digits(2), OperandRule::Digits(1), Op::Add)
}

pub fn explanation(id: &str) -> &'static str {
    match id {
        "add2digit" => {
            "When adding 2-digit numbers, split them into tens and ones. \
             Example: 47+36 = (40+30)+(7+6)."
        }
        "add3digit" => "For 3-digit numbers, add hundreds, tens, and ones separately.",
        "sub2digit" => "Subtract tens and then ones, borrowing if needed.",
        "sub2digit_comp" => "Compensation strategy: adjust numbers to make subtraction easier.",
        "sub3digit" => {
            "Subtract hundreds, tens, and ones separately with borrowing when required."
        }
        "mult11" => {
            "To multiply a 2-digit number by 11, add the digits and put the result in the middle."
        }
        "mult2x1" => {
            "Break a 2-digit number into tens and ones, then multiply each by the 1-digit number."
        }
        "mult5" => "Multiply by 10 and divide by 2 to quickly calculate ×5.",
        "div5" => "To divide by 5, double the number and then divide by 10.",
        _ => "No explanation found for this drill.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::validate_rules;

    #[test]
    fn test_every_preset_resolves_and_validates() {
        for id in PRESET_IDS {
            let rules = lookup(id).unwrap_or_else(|| panic!("missing preset: {}", id));
            validate_rules(&rules).unwrap_or_else(|e| panic!("invalid preset {}: {}", id, e));
            assert_eq!(rules.count, DEFAULT_PROBLEM_COUNT);
        }
    }

    #[test]
    fn test_unknown_id_has_no_rules_but_a_fallback() {
        assert!(lookup("div7").is_none());
        let rules = fallback();
        assert_eq!(rules.op, Op::Add);
        assert_eq!(rules.a, OperandRule::Digits(2));
        assert_eq!(rules.b, OperandRule::Digits(1));
    }

    #[test]
    fn test_explanations_cover_all_presets() {
        for id in PRESET_IDS {
            assert_ne!(explanation(id), explanation("no-such-id"));
        }
    }

    #[test]
    fn test_mult11_pins_the_multiplier() {
        let rules = lookup("mult11").unwrap();
        assert_eq!(rules.b, OperandRule::Fixed(11));
        assert_eq!(rules.op, Op::Mul);
    }
}
