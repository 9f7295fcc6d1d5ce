//! Form participation: committed value and validity reporting.
//!
//! The widget submits a single committed value to its owning form.
//! [`FormValue`] holds that value, the set of values currently considered
//! legal, and the derived [`Validity`] flags. Committing a value that is not
//! in the legal set marks the control as bad input with a user-visible
//! message; an empty value is never bad input, but trips the missing-value
//! flag when the control is required.

use search_select_core::logging::targets;
use search_select_core::Signal;

/// Validity flags for the widget's committed value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Validity {
    /// The committed value is not one of the legal option values.
    pub bad_input: bool,
    /// The control is required but has no committed value.
    pub value_missing: bool,
    /// Human-readable description of the failure, empty when valid.
    pub message: String,
}

impl Validity {
    /// A validity with no flags set.
    pub fn valid() -> Self {
        Self::default()
    }

    /// A bad-input validity with the given message.
    pub fn bad_input(message: impl Into<String>) -> Self {
        Self {
            bad_input: true,
            value_missing: false,
            message: message.into(),
        }
    }

    /// A missing-value validity with the given message.
    pub fn value_missing(message: impl Into<String>) -> Self {
        Self {
            bad_input: false,
            value_missing: true,
            message: message.into(),
        }
    }

    /// Whether no validity flag is set.
    pub fn is_valid(&self) -> bool {
        !self.bad_input && !self.value_missing
    }
}

/// The widget's form-facing state: name, committed value, and validity.
pub struct FormValue {
    /// The name the value is submitted under.
    name: String,
    /// Whether an empty value fails validation.
    required: bool,
    /// The committed value, if any.
    value: Option<String>,
    /// Values currently accepted as valid selections.
    valid_values: Vec<String>,
    /// Current validity, kept in sync with `value` and `valid_values`.
    validity: Validity,

    /// Emitted when the committed value changes.
    pub value_changed: Signal<Option<String>>,
    /// Emitted when the validity flags change.
    pub validity_changed: Signal<Validity>,
    /// Emitted by [`report_validity`](Self::report_validity) so the host can
    /// surface the message to the user.
    pub validity_reported: Signal<Validity>,
}

impl FormValue {
    /// Create a form value submitted under `name`, initially empty and valid.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            value: None,
            valid_values: Vec::new(),
            validity: Validity::valid(),
            value_changed: Signal::new(),
            validity_changed: Signal::new(),
            validity_reported: Signal::new(),
        }
    }

    /// The name the value is submitted under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether an empty value fails validation.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Set whether an empty value fails validation, and revalidate.
    pub fn set_required(&mut self, required: bool) {
        self.required = required;
        self.revalidate();
    }

    /// The committed value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Replace the set of legal values and revalidate the committed value.
    pub fn set_valid_values(&mut self, values: Vec<String>) {
        self.valid_values = values;
        self.revalidate();
    }

    /// Commit a value, notify listeners, and revalidate.
    ///
    /// `value_changed` fires only when the committed value actually changes.
    pub fn set_value(&mut self, value: Option<String>) {
        if self.value != value {
            tracing::debug!(
                target: targets::FORM,
                name = %self.name,
                value = value.as_deref().unwrap_or(""),
                "committed value"
            );
            self.value = value;
            self.value_changed.emit(self.value.clone());
        }
        self.revalidate();
    }

    /// Recompute validity from the committed value and the legal value set.
    ///
    /// Emits `validity_changed` when the flags change.
    pub fn revalidate(&mut self) {
        let validity = self.compute_validity();
        if validity != self.validity {
            tracing::debug!(
                target: targets::FORM,
                name = %self.name,
                bad_input = validity.bad_input,
                value_missing = validity.value_missing,
                "validity changed"
            );
            self.validity = validity;
            self.validity_changed.emit(self.validity.clone());
        }
    }

    fn compute_validity(&self) -> Validity {
        match self.value.as_deref() {
            Some(value) if !value.is_empty() => {
                if self.valid_values.iter().any(|v| v == value) {
                    Validity::valid()
                } else {
                    Validity::bad_input(format!("{value} is not a valid option"))
                }
            }
            // Empty is never bad input; it only matters when required.
            _ if self.required => Validity::value_missing("a value is required"),
            _ => Validity::valid(),
        }
    }

    /// The current validity flags.
    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    /// Whether the committed value currently passes validation.
    pub fn check_validity(&self) -> bool {
        self.validity.is_valid()
    }

    /// Check validity and ask the host to surface the result to the user.
    ///
    /// Returns the same result as [`check_validity`](Self::check_validity).
    pub fn report_validity(&self) -> bool {
        self.validity_reported.emit(self.validity.clone());
        self.validity.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn digits() -> Vec<String> {
        vec!["1".to_string(), "2".to_string(), "3".to_string()]
    }

    #[test]
    fn test_unknown_value_is_bad_input_with_message() {
        let mut form = FormValue::new("fruit");
        form.set_valid_values(digits());

        form.set_value(Some("9".to_string()));
        assert!(!form.check_validity());
        assert!(form.validity().bad_input);
        assert_eq!(form.validity().message, "9 is not a valid option");
    }

    #[test]
    fn test_known_value_is_valid() {
        let mut form = FormValue::new("fruit");
        form.set_valid_values(digits());

        form.set_value(Some("2".to_string()));
        assert!(form.check_validity());
        assert_eq!(form.validity(), &Validity::valid());
    }

    #[test]
    fn test_empty_value_is_valid_unless_required() {
        let mut form = FormValue::new("fruit");
        form.set_valid_values(digits());

        form.set_value(Some(String::new()));
        assert!(form.check_validity());

        form.set_required(true);
        assert!(!form.check_validity());
        assert!(form.validity().value_missing);
        assert!(!form.validity().bad_input);
    }

    #[test]
    fn test_value_changed_fires_once_per_change() {
        let mut form = FormValue::new("fruit");
        form.set_valid_values(digits());

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        form.value_changed.connect(move |value| {
            seen_clone.lock().push(value.clone());
        });

        form.set_value(Some("1".to_string()));
        form.set_value(Some("1".to_string())); // no change, no signal
        form.set_value(Some("3".to_string()));

        let values = seen.lock();
        assert_eq!(
            *values,
            vec![Some("1".to_string()), Some("3".to_string())]
        );
    }

    #[test]
    fn test_validity_changed_fires_on_transitions() {
        let mut form = FormValue::new("fruit");
        form.set_valid_values(digits());

        let transitions = Arc::new(Mutex::new(Vec::new()));
        let transitions_clone = transitions.clone();
        form.validity_changed.connect(move |validity| {
            transitions_clone.lock().push(validity.is_valid());
        });

        form.set_value(Some("9".to_string())); // valid -> invalid
        form.set_value(Some("8".to_string())); // message changes, still invalid
        form.set_value(Some("1".to_string())); // invalid -> valid

        let seen = transitions.lock();
        assert_eq!(*seen, vec![false, false, true]);
    }

    #[test]
    fn test_replacing_valid_values_revalidates() {
        let mut form = FormValue::new("fruit");
        form.set_valid_values(digits());
        form.set_value(Some("3".to_string()));
        assert!(form.check_validity());

        form.set_valid_values(vec!["7".to_string()]);
        assert!(!form.check_validity());
        assert!(form.validity().bad_input);
    }

    #[test]
    fn test_report_validity_emits_current_state() {
        let mut form = FormValue::new("fruit");
        form.set_valid_values(digits());
        form.set_value(Some("9".to_string()));

        let reported = Arc::new(Mutex::new(None));
        let reported_clone = reported.clone();
        form.validity_reported.connect(move |validity: &Validity| {
            *reported_clone.lock() = Some(validity.clone());
        });

        assert!(!form.report_validity());
        let reported = reported.lock();
        assert_eq!(
            reported.as_ref().map(|v| v.message.clone()),
            Some("9 is not a valid option".to_string())
        );
    }
}
