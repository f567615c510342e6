use std::collections::BTreeMap;

use thiserror::Error;

pub const NAME_MAX_CHARS: usize = 100;
pub const PHONE_MIN_CHARS: usize = 10;
pub const PHONE_MAX_CHARS: usize = 15;
pub const MESSAGE_MAX_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InquiryField {
    Name,
    Phone,
    Treatment,
    Message,
}

impl InquiryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryField::Name => "name",
            InquiryField::Phone => "phone",
            InquiryField::Treatment => "treatment",
            InquiryField::Message => "message",
        }
    }
}

/// What the visitor has typed so far. An empty `message` means none was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryInput {
    pub name: String,
    pub phone: String,
    pub treatment: String,
    pub message: String,
}

impl InquiryInput {
    pub fn set(&mut self, field: InquiryField, value: String) {
        match field {
            InquiryField::Name => self.name = value,
            InquiryField::Phone => self.phone = value,
            InquiryField::Treatment => self.treatment = value,
            InquiryField::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be less than 100 characters")]
    NameTooLong,
    #[error("Please enter a valid phone number")]
    PhoneTooShort,
    #[error("Phone number is too long")]
    PhoneTooLong,
    #[error("Please select a service")]
    TreatmentRequired,
    #[error("Message must be less than 1000 characters")]
    MessageTooLong,
}

/// First violation per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<InquiryField, ValidationError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: InquiryField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: InquiryField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn clear(&mut self, field: InquiryField) -> bool {
        self.0.remove(&field).is_some()
    }

    /// Field name to display message, the shape the page renders from.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.0.iter().map(|(f, e)| (f.as_str(), e.to_string())).collect()
    }

    fn record(&mut self, field: InquiryField, error: ValidationError) {
        self.0.entry(field).or_insert(error);
    }
}

/// Length as a browser sees it: UTF-16 code units, so characters outside the
/// Basic Multilingual Plane count twice.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Trimmed values that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInquiry {
    pub name: String,
    pub phone: String,
    pub treatment: String,
    pub message: Option<String>,
}

/// Runs every rule against every field; a failing field never hides
/// errors on the others.
pub fn validate(input: &InquiryInput) -> Result<ValidatedInquiry, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = input.name.trim();
    let name_len = utf16_len(name);
    if name_len == 0 {
        errors.record(InquiryField::Name, ValidationError::NameRequired);
    }
    if name_len > NAME_MAX_CHARS {
        errors.record(InquiryField::Name, ValidationError::NameTooLong);
    }

    let phone = input.phone.trim();
    let phone_len = utf16_len(phone);
    if phone_len < PHONE_MIN_CHARS {
        errors.record(InquiryField::Phone, ValidationError::PhoneTooShort);
    }
    if phone_len > PHONE_MAX_CHARS {
        errors.record(InquiryField::Phone, ValidationError::PhoneTooLong);
    }

    // the select widget restricts choices, so presence is all that is checked
    let treatment = input.treatment.trim();
    if treatment.is_empty() {
        errors.record(InquiryField::Treatment, ValidationError::TreatmentRequired);
    }

    let message = input.message.trim();
    if utf16_len(message) > MESSAGE_MAX_CHARS {
        errors.record(InquiryField::Message, ValidationError::MessageTooLong);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedInquiry {
        name: name.to_string(),
        phone: phone.to_string(),
        treatment: treatment.to_string(),
        message: (!message.is_empty()).then(|| message.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, phone: &str, treatment: &str, message: &str) -> InquiryInput {
        InquiryInput {
            name: name.to_string(),
            phone: phone.to_string(),
            treatment: treatment.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_input_is_trimmed() {
        let ok = validate(&input("  John Doe ", " 9876543210 ", "Dry Needling", "  ")).unwrap();
        assert_eq!(ok.name, "John Doe");
        assert_eq!(ok.phone, "9876543210");
        assert_eq!(ok.treatment, "Dry Needling");
        assert_eq!(ok.message, None);
    }

    #[test]
    fn empty_or_blank_name_is_required() {
        for name in ["", "   "] {
            let errors = validate(&input(name, "9876543210", "Dry Needling", "")).unwrap_err();
            assert_eq!(errors.get(InquiryField::Name), Some(ValidationError::NameRequired));
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn name_length_boundary() {
        let at_limit = "a".repeat(NAME_MAX_CHARS);
        assert!(validate(&input(&at_limit, "9876543210", "Dry Needling", "")).is_ok());

        let over = "a".repeat(NAME_MAX_CHARS + 1);
        let errors = validate(&input(&over, "9876543210", "Dry Needling", "")).unwrap_err();
        assert_eq!(errors.message(InquiryField::Name).as_deref(), Some("Name must be less than 100 characters"));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let name = "é".repeat(NAME_MAX_CHARS);
        assert!(validate(&input(&name, "9876543210", "Dry Needling", "")).is_ok());
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        let half = "😀".repeat(NAME_MAX_CHARS / 2);
        assert!(validate(&input(&half, "9876543210", "Dry Needling", "")).is_ok());

        let over = "😀".repeat(NAME_MAX_CHARS / 2 + 1);
        let errors = validate(&input(&over, "9876543210", "Dry Needling", "")).unwrap_err();
        assert_eq!(errors.get(InquiryField::Name), Some(ValidationError::NameTooLong));

        let message = "😀".repeat(MESSAGE_MAX_CHARS / 2 + 1);
        let errors = validate(&input("John", "9876543210", "Dry Needling", &message)).unwrap_err();
        assert_eq!(errors.get(InquiryField::Message), Some(ValidationError::MessageTooLong));
    }

    #[test]
    fn phone_length_bounds() {
        for phone in ["123456789", "1", ""] {
            let errors = validate(&input("John", phone, "Dry Needling", "")).unwrap_err();
            assert_eq!(errors.get(InquiryField::Phone), Some(ValidationError::PhoneTooShort));
        }
        for phone in ["1234567890", "+91 90480 30977", "123456789012345"] {
            assert!(validate(&input("John", phone, "Dry Needling", "")).is_ok(), "{phone}");
        }
        let errors = validate(&input("John", "1234567890123456", "Dry Needling", "")).unwrap_err();
        assert_eq!(errors.message(InquiryField::Phone).as_deref(), Some("Phone number is too long"));
    }

    #[test]
    fn missing_treatment_is_reported() {
        let errors = validate(&input("John", "9876543210", "", "")).unwrap_err();
        assert_eq!(errors.message(InquiryField::Treatment).as_deref(), Some("Please select a service"));

        let errors = validate(&input("John", "9876543210", "  ", "")).unwrap_err();
        assert_eq!(errors.get(InquiryField::Treatment), Some(ValidationError::TreatmentRequired));
    }

    #[test]
    fn long_message_is_rejected() {
        let message = "m".repeat(MESSAGE_MAX_CHARS + 1);
        let errors = validate(&input("John", "9876543210", "Dry Needling", &message)).unwrap_err();
        assert_eq!(errors.get(InquiryField::Message), Some(ValidationError::MessageTooLong));

        let padded = format!("  {}  ", "m".repeat(MESSAGE_MAX_CHARS));
        assert!(validate(&input("John", "9876543210", "Dry Needling", &padded)).is_ok());
    }

    #[test]
    fn every_failing_field_gets_an_error() {
        let errors = validate(&input("", "12", "", &"m".repeat(1001))).unwrap_err();
        let messages = errors.messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages["name"], "Name is required");
        assert_eq!(messages["phone"], "Please enter a valid phone number");
        assert_eq!(messages["treatment"], "Please select a service");
        assert_eq!(messages["message"], "Message must be less than 1000 characters");
    }

    #[test]
    fn unknown_treatment_only_fails_on_phone() {
        let errors = validate(&input("John", "123", "FAQ", "")).unwrap_err();
        let messages = errors.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages["phone"], "Please enter a valid phone number");
    }
}
