//! Values and inline errors for the contact form.

use std::collections::BTreeMap;

use super::fields::{FieldControl, FieldSpec, CONTACT_FIELDS, INTEREST, MESSAGE};
use super::validation::{validate_field, validate_form, FieldAnnotations, Validity};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<&'static str>,
}

impl FieldState {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    specs: &'static [FieldSpec],
    fields: BTreeMap<&'static str, FieldState>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(CONTACT_FIELDS)
    }
}

impl FormState {
    pub fn new(specs: &'static [FieldSpec]) -> Self {
        let fields = specs
            .iter()
            .map(|spec| (spec.name, FieldState::default()))
            .collect();
        Self { specs, fields }
    }

    pub fn specs(&self) -> &'static [FieldSpec] {
        self.specs
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    pub fn value(&self, name: &str) -> &str {
        self.fields.get(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn error(&self, name: &str) -> Option<&'static str> {
        self.fields.get(name).and_then(|f| f.error)
    }

    #[cfg(test)]
    pub fn has_errors(&self) -> bool {
        self.fields.values().any(FieldState::has_error)
    }

    /// The user edited the field: keep the value, drop its annotation.
    pub fn input(&mut self, name: &str, value: String) {
        if let Some(field) = self.fields.get_mut(name) {
            field.value = value;
            field.error = None;
        }
    }

    /// Revalidates one field when it loses focus.
    pub fn blur(&mut self, name: &str) -> Validity {
        let Some(spec) = self.specs.iter().find(|s| s.name == name) else {
            return Validity::Valid;
        };
        let Some(field) = self.fields.get_mut(name) else {
            return Validity::Valid;
        };
        let validity = validate_field(spec, &field.value);
        field.error = match validity {
            Validity::Valid => None,
            Validity::Invalid(message) => Some(message),
        };
        validity
    }

    pub fn annotations(&self) -> FieldAnnotations {
        validate_form(self.specs, |name| self.value(name))
    }

    /// Replaces every inline error with the given annotations.
    pub fn apply(&mut self, annotations: &FieldAnnotations) {
        for (name, field) in self.fields.iter_mut() {
            field.error = annotations.message_for(name);
        }
    }

    /// Validates the whole form and shows every error. Returns whether it passed.
    pub fn validate(&mut self) -> bool {
        let annotations = self.annotations();
        self.apply(&annotations);
        annotations.is_empty()
    }

    pub fn reset(&mut self) {
        for field in self.fields.values_mut() {
            *field = FieldState::default();
        }
    }

    /// Every field, in declaration order, as it would be posted. Values are
    /// trimmed the same way the validator sees them.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        self.specs
            .iter()
            .map(|spec| (spec.name, self.value(spec.name).trim().to_string()))
            .collect()
    }

    /// True once the first text input holds something.
    pub fn is_started(&self) -> bool {
        self.specs
            .iter()
            .find(|spec| matches!(spec.control, FieldControl::Input(_)))
            .map(|spec| !self.value(spec.name).is_empty())
            .unwrap_or(false)
    }

    pub fn prefill_for_plan(&mut self, plan: &str) {
        self.input(INTEREST, "ready".to_string());
        if !plan.is_empty() {
            self.input(
                MESSAGE,
                format!(
                    "I'm interested in the {} plan. Please send me more information about the next cohort.",
                    plan
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::fields::{EMAIL, NAME, PHONE};
    use crate::contact::validation::{INVALID_EMAIL_MESSAGE, REQUIRED_MESSAGE};

    fn filled() -> FormState {
        let mut form = FormState::default();
        form.input(NAME, "Ada".into());
        form.input(EMAIL, "ada@example.com".into());
        form.input(INTEREST, "exploring".into());
        form
    }

    #[test]
    fn starts_empty_without_errors() {
        let form = FormState::default();
        assert!(form.entries().iter().all(|(_, v)| v.is_empty()));
        assert!(!form.has_errors());
        assert!(!form.is_started());
    }

    #[test]
    fn blur_annotates_and_input_clears() {
        let mut form = FormState::default();
        assert_eq!(form.blur(NAME), Validity::Invalid(REQUIRED_MESSAGE));
        assert_eq!(form.error(NAME), Some(REQUIRED_MESSAGE));

        form.input(NAME, "A".into());
        assert_eq!(form.error(NAME), None);
        assert!(form.blur(NAME).is_valid());
    }

    #[test]
    fn blur_replaces_previous_annotation() {
        let mut form = FormState::default();
        form.blur(EMAIL);
        assert_eq!(form.error(EMAIL), Some(REQUIRED_MESSAGE));
        form.fields.get_mut(EMAIL).unwrap().value = "bad".into();
        form.blur(EMAIL);
        assert_eq!(form.error(EMAIL), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn validate_shows_all_errors_and_clears_fixed_ones() {
        let mut form = FormState::default();
        assert!(!form.validate());
        assert_eq!(form.error(NAME), Some(REQUIRED_MESSAGE));
        assert_eq!(form.error(EMAIL), Some(REQUIRED_MESSAGE));
        assert_eq!(form.error(INTEREST), Some(REQUIRED_MESSAGE));
        assert_eq!(form.error(PHONE), None);

        let mut form = filled();
        assert!(form.validate());
        assert!(!form.has_errors());
    }

    #[test]
    fn reset_clears_values_and_errors() {
        let mut form = filled();
        form.blur(PHONE);
        form.input(EMAIL, "x".into());
        form.validate();
        form.reset();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn entries_follow_declaration_order() {
        let form = filled();
        let names: Vec<_> = form.entries().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["name", "email", "phone", "interest", "message"]);
    }

    #[test]
    fn entries_are_posted_trimmed() {
        let mut form = filled();
        form.input(EMAIL, "  ada@example.com \n".into());
        form.input(NAME, " Ada ".into());
        assert!(form.validate());

        let entries = form.entries();
        assert_eq!(entries[0], (NAME, "Ada".to_string()));
        assert_eq!(entries[1], (EMAIL, "ada@example.com".to_string()));
    }

    #[test]
    fn prefill_overrides_a_manual_interest_choice() {
        let mut form = filled();
        assert_eq!(form.value(INTEREST), "exploring");
        form.prefill_for_plan("Starter");
        assert_eq!(form.value(INTEREST), "ready");

        form.reset();
        assert_eq!(form.value(INTEREST), "");
    }

    #[test]
    fn prefill_sets_interest_and_message() {
        let mut form = FormState::default();
        form.prefill_for_plan("Cohort Pro");
        assert_eq!(form.value(INTEREST), "ready");
        assert_eq!(
            form.value(MESSAGE),
            "I'm interested in the Cohort Pro plan. Please send me more information about the next cohort."
        );
    }

    #[test]
    fn prefill_without_plan_leaves_message_alone() {
        let mut form = FormState::default();
        form.input(MESSAGE, "hello".into());
        form.prefill_for_plan("");
        assert_eq!(form.value(INTEREST), "ready");
        assert_eq!(form.value(MESSAGE), "hello");
    }

    #[test]
    fn started_tracks_first_input() {
        let mut form = FormState::default();
        form.input(EMAIL, "a@b.co".into());
        assert!(!form.is_started());
        form.input(NAME, "A".into());
        assert!(form.is_started());
    }
}
