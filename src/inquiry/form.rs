use crate::catalog::treatments::TreatmentCatalog;
use crate::inquiry::deep_link::DeepLink;
use crate::inquiry::launcher::{LaunchError, LinkOpener};
use crate::inquiry::prefill::{self, PrefillMatch};
use crate::inquiry::validation::{validate, FieldErrors, InquiryField, InquiryInput};

/// State behind the booking form: the values being edited plus the errors
/// from the last submit attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    input: InquiryInput,
    errors: FieldErrors,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub link: DeepLink,
    pub launch: Result<(), LaunchError>,
}

impl Submission {
    /// Link to show the visitor when the new window never appeared.
    pub fn fallback_url(&self) -> Option<String> {
        self.launch.as_ref().err().map(|_| self.link.url())
    }
}

impl LeadForm {
    pub fn input(&self) -> &InquiryInput {
        &self.input
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Editing a field drops its stale error; other errors stay until the
    /// next submit.
    pub fn set_field(&mut self, field: InquiryField, value: impl Into<String>) {
        self.input.set(field, value.into());
        self.errors.clear(field);
    }

    pub fn apply_prefill(&mut self, incoming: &str, catalog: &TreatmentCatalog) -> Option<PrefillMatch> {
        let resolved = prefill::resolve(incoming, catalog)?;
        resolved.apply(&mut self.input);
        Some(resolved.matched)
    }

    pub fn submit(&mut self, opener: &dyn LinkOpener) -> Result<Submission, FieldErrors> {
        let inquiry = match validate(&self.input) {
            Ok(inquiry) => inquiry,
            Err(errors) => {
                self.errors = errors.clone();
                return Err(errors);
            }
        };

        let link = DeepLink::booking(&inquiry);
        let launch = opener.open(&link.url());
        if let Err(e) = &launch {
            log::warn!("Booking link did not open: {}", e);
        }

        self.input = InquiryInput::default();
        self.errors = FieldErrors::default();
        Ok(Submission { link, launch })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::launcher::testing::RecordingOpener;

    fn filled(name: &str, phone: &str, treatment: &str, message: &str) -> LeadForm {
        let mut form = LeadForm::default();
        form.set_field(InquiryField::Name, name);
        form.set_field(InquiryField::Phone, phone);
        form.set_field(InquiryField::Treatment, treatment);
        form.set_field(InquiryField::Message, message);
        form
    }

    fn decoded(url: &str) -> String {
        let (_, encoded) = url.split_once("?text=").unwrap();
        urlencoding::decode(encoded).unwrap().into_owned()
    }

    #[test]
    fn valid_submission_opens_link_and_resets() {
        let opener = RecordingOpener::succeeding();
        let mut form = filled("John Doe", "9876543210", "Back Pain Treatment", "");

        let submission = form.submit(&opener).expect("valid input");

        let opened = opener.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0], submission.link.url());
        let text = decoded(&opened[0]);
        assert!(text.ends_with("Service Required: Back Pain Treatment"));
        assert!(!text.contains("Message:"));

        assert_eq!(submission.fallback_url(), None);
        assert_eq!(form.input(), &InquiryInput::default());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn invalid_submission_keeps_values_and_opens_nothing() {
        let opener = RecordingOpener::succeeding();
        let mut form = filled("John", "123", "FAQ", "");

        let errors = form.submit(&opener).unwrap_err();

        assert_eq!(errors.messages().into_iter().collect::<Vec<_>>(), vec![("phone", "Please enter a valid phone number".to_string())]);
        assert!(opener.opened.borrow().is_empty());
        assert_eq!(form.input().name, "John");
        assert_eq!(form.input().phone, "123");
        assert_eq!(form.errors(), &errors);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let opener = RecordingOpener::succeeding();
        let mut form = LeadForm::default();
        form.submit(&opener).unwrap_err();
        assert!(form.errors().get(InquiryField::Name).is_some());
        assert!(form.errors().get(InquiryField::Phone).is_some());

        form.set_field(InquiryField::Name, "Jane");
        assert!(form.errors().get(InquiryField::Name).is_none());
        assert!(form.errors().get(InquiryField::Phone).is_some());
        assert!(form.errors().get(InquiryField::Treatment).is_some());
    }

    #[test]
    fn setting_the_same_value_twice_is_idempotent() {
        let opener = RecordingOpener::succeeding();
        let mut form = filled("", "", "Dry Needling", "");
        form.submit(&opener).unwrap_err();

        form.set_field(InquiryField::Name, "Jane");
        let once = form.clone();
        form.set_field(InquiryField::Name, "Jane");
        assert_eq!(form, once);
        assert!(form.errors().get(InquiryField::Phone).is_some());
    }

    #[test]
    fn blocked_popup_still_resets_and_offers_fallback() {
        let opener = RecordingOpener::failing(LaunchError::Blocked);
        let mut form = filled("John Doe", "9876543210", "Dry Needling", "Evening slot please");

        let submission = form.submit(&opener).expect("valid input");

        assert_eq!(submission.launch, Err(LaunchError::Blocked));
        let fallback = submission.fallback_url().expect("fallback link");
        assert!(decoded(&fallback).ends_with("Message: Evening slot please"));
        assert_eq!(form.input(), &InquiryInput::default());
    }

    #[test]
    fn prefill_then_submit_books_general_consultation() {
        let catalog = TreatmentCatalog::standard();
        let opener = RecordingOpener::succeeding();
        let mut form = LeadForm::default();

        assert_eq!(form.apply_prefill("Knee Pain", &catalog), Some(PrefillMatch::NoMatch));
        form.set_field(InquiryField::Name, "Asha");
        form.set_field(InquiryField::Phone, "9048030977");

        let submission = form.submit(&opener).unwrap();
        let text = decoded(&submission.link.url());
        assert!(text.contains("Service Required: General Consultation"));
        assert!(text.ends_with("Message: I am interested in treatment for: Knee Pain."));
    }

    #[test]
    fn prefill_with_empty_value_changes_nothing() {
        let mut form = filled("John", "", "", "note");
        let before = form.clone();
        assert_eq!(form.apply_prefill("", &TreatmentCatalog::standard()), None);
        assert_eq!(form, before);
    }
}
