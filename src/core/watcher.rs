use crate::domain::model::Answer;
use crate::domain::ports::Form;

/// Maximum number of characters the watched field may hold.
pub const MAX_INPUT_CHARS: usize = 16;

/// The user-editable text field the watcher monitors. The watcher only ever
/// reads the value and rewrites it to truncate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field content, as typing does.
    pub fn set(&mut self, text: &str) {
        self.value = text.to_string();
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatcherState {
    Idle,
    Submitted,
}

/// A form that just remembers whether it was submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitOnce {
    submitted: bool,
}

impl SubmitOnce {
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }
}

impl Form for SubmitOnce {
    fn submit(&mut self) {
        self.submitted = true;
    }
}

/// Watches a text field and submits the enclosing form once the typed value
/// matches the target answer.
///
/// Per input event the watcher does exactly two things: truncate the field
/// to [`MAX_INPUT_CHARS`] characters when it grew past the cap, and compare
/// the trimmed value against the target. A match submits the form and moves
/// the watcher into its terminal [`WatcherState::Submitted`] state; later
/// events are ignored.
pub struct InputWatcher<F: Form> {
    target: Answer,
    form: F,
    state: WatcherState,
}

impl<F: Form> InputWatcher<F> {
    /// Explicit one-time setup: the form and target are handed over up
    /// front, before any input event fires.
    pub fn attach(form: F, target: Answer) -> Self {
        Self {
            target,
            form,
            state: WatcherState::Idle,
        }
    }

    pub fn state(&self) -> WatcherState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == WatcherState::Submitted
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn into_form(self) -> F {
        self.form
    }

    /// Handle one value-change event on the watched field.
    pub fn on_input(&mut self, field: &mut InputField) -> WatcherState {
        if self.state == WatcherState::Submitted {
            return self.state;
        }

        if field.value.chars().count() > MAX_INPUT_CHARS {
            field.value = field.value.chars().take(MAX_INPUT_CHARS).collect();
        }

        if self.target.matches(field.value()) {
            self.form.submit();
            self.state = WatcherState::Submitted;
        }

        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts submissions so tests can assert "exactly once".
    #[derive(Debug, Default)]
    struct CountingForm {
        submissions: u32,
    }

    impl Form for CountingForm {
        fn submit(&mut self) {
            self.submissions += 1;
        }
    }

    fn watcher(target: &str) -> InputWatcher<CountingForm> {
        InputWatcher::attach(CountingForm::default(), Answer::Text(target.to_string()))
    }

    #[test]
    fn test_matching_input_submits_the_form() {
        let mut w = watcher("42");
        let mut field = InputField::new();
        field.set("42");
        assert_eq!(w.on_input(&mut field), WatcherState::Submitted);
        assert_eq!(w.form().submissions, 1);
    }

    #[test]
    fn test_whitespace_is_trimmed_before_comparing() {
        let mut w = watcher("42");
        let mut field = InputField::new();
        field.set(" 42 ");
        assert_eq!(w.on_input(&mut field), WatcherState::Submitted);
        // trimming is for comparison only, the field keeps its content
        assert_eq!(field.value(), " 42 ");
    }

    #[test]
    fn test_non_matching_input_leaves_field_untouched() {
        let mut w = watcher("42");
        let mut field = InputField::new();
        field.set("4");
        assert_eq!(w.on_input(&mut field), WatcherState::Idle);
        assert_eq!(field.value(), "4");
        assert_eq!(w.form().submissions, 0);
    }

    #[test]
    fn test_overlong_input_is_truncated_to_leading_sixteen_chars() {
        let mut w = watcher("42");
        let mut field = InputField::new();
        field.set("423456789012345678"); // 18 chars
        assert_eq!(w.on_input(&mut field), WatcherState::Idle);
        assert_eq!(field.value(), "4234567890123456");
        assert_eq!(field.value().chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_truncated_value_can_still_match() {
        let mut w = watcher("4234567890123456");
        let mut field = InputField::new();
        field.set("423456789012345678");
        assert_eq!(w.on_input(&mut field), WatcherState::Submitted);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let mut w = watcher("42");
        let mut field = InputField::new();
        field.set("четыреста двадцать"); // 18 chars, multi-byte
        w.on_input(&mut field);
        assert_eq!(field.value().chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_submission_is_terminal_and_happens_once() {
        let mut w = watcher("42");
        let mut field = InputField::new();
        field.set("42");
        w.on_input(&mut field);
        field.set("42");
        w.on_input(&mut field);
        field.set("this is far too long to keep");
        assert_eq!(w.on_input(&mut field), WatcherState::Submitted);
        // terminal state: no further truncation, no second submit
        assert_eq!(field.value(), "this is far too long to keep");
        assert_eq!(w.into_form().submissions, 1);
    }

    #[test]
    fn test_numeric_target_accepts_string_representations() {
        let mut w = InputWatcher::attach(CountingForm::default(), Answer::Number(42));
        let mut field = InputField::new();
        field.set("042");
        assert_eq!(w.on_input(&mut field), WatcherState::Submitted);
    }

    #[test]
    fn test_each_event_runs_one_comparison() {
        let mut w = watcher("42");
        let mut field = InputField::new();
        for typed in ["4", "41", "419", "41", "4"] {
            field.set(typed);
            assert_eq!(w.on_input(&mut field), WatcherState::Idle);
        }
        field.set("42");
        assert_eq!(w.on_input(&mut field), WatcherState::Submitted);
        assert_eq!(w.form().submissions, 1);
    }
}
