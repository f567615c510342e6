use std::fmt;

use crate::config;
use crate::inquiry::validation::ValidatedInquiry;

/// Text sent when a visitor books through the contact form.
pub fn booking_message(inquiry: &ValidatedInquiry, clinic_name: &str) -> String {
    let mut lines = vec![
        format!("Hello, I would like to book an appointment at {}.", clinic_name),
        String::new(),
        format!("Name: {}", inquiry.name),
        format!("Phone: {}", inquiry.phone),
        format!("Service Required: {}", inquiry.treatment),
    ];
    if let Some(message) = inquiry.message.as_deref().filter(|m| !m.is_empty()) {
        lines.push(format!("Message: {}", message));
    }
    lines.join("\n")
}

/// One-tap enquiries that skip the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickEnquiry<'a> {
    General,
    Question,
    Service(&'a str),
    Condition(&'a str),
}

impl QuickEnquiry<'_> {
    pub fn text(&self) -> String {
        match self {
            QuickEnquiry::General => format!(
                "Hello, I would like to enquire about physiotherapy services at {}.",
                config::CLINIC_SHORT_NAME
            ),
            QuickEnquiry::Question => format!(
                "Hello, I have a question about physiotherapy services at {}.",
                config::CLINIC_SHORT_NAME
            ),
            QuickEnquiry::Service(name) => format!(
                "Hello, I would like to enquire about {} at {}.",
                name,
                config::CLINIC_NAME
            ),
            QuickEnquiry::Condition(name) => format!(
                "Hello, I would like to enquire about treatment for {} at {}.",
                name,
                config::CLINIC_NAME
            ),
        }
    }
}

/// `https://<domain>/<recipient>?text=<percent-encoded text>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    domain: String,
    recipient: String,
    text: String,
}

impl DeepLink {
    pub fn new(domain: impl Into<String>, recipient: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            recipient: recipient.into(),
            text: text.into(),
        }
    }

    /// Link to the clinic's WhatsApp number.
    pub fn whatsapp(text: impl Into<String>) -> Self {
        Self::new(config::WHATSAPP_DOMAIN, config::whatsapp_number(), text)
    }

    pub fn booking(inquiry: &ValidatedInquiry) -> Self {
        Self::whatsapp(booking_message(inquiry, config::CLINIC_NAME))
    }

    pub fn quick(enquiry: QuickEnquiry<'_>) -> Self {
        Self::whatsapp(enquiry.text())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "https://{}/{}?text={}",
            self.domain,
            self.recipient,
            urlencoding::encode(&self.text)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry(message: Option<&str>) -> ValidatedInquiry {
        ValidatedInquiry {
            name: "John Doe".to_string(),
            phone: "9876543210".to_string(),
            treatment: "Back Pain Treatment".to_string(),
            message: message.map(str::to_string),
        }
    }

    fn decoded_text(url: &str) -> String {
        let (_, encoded) = url.split_once("?text=").expect("text parameter");
        urlencoding::decode(encoded).expect("valid utf-8").into_owned()
    }

    #[test]
    fn booking_without_message_has_three_labelled_lines() {
        let link = DeepLink::new("wa.me", "919048030977", booking_message(&inquiry(None), "Surya Kiran Physiotherapy Clinic"));
        let url = link.url();
        assert!(url.starts_with("https://wa.me/919048030977?text="));

        let text = decoded_text(&url);
        assert_eq!(
            text,
            "Hello, I would like to book an appointment at Surya Kiran Physiotherapy Clinic.\n\
             \n\
             Name: John Doe\n\
             Phone: 9876543210\n\
             Service Required: Back Pain Treatment"
        );
        assert!(text.ends_with("Service Required: Back Pain Treatment"));
        assert!(!text.contains("Message:"));
    }

    #[test]
    fn booking_with_message_appends_message_line_last() {
        let text = booking_message(&inquiry(Some("Pain after running")), "Clinic");
        let labelled: Vec<_> = text.lines().skip(2).collect();
        assert_eq!(
            labelled,
            vec![
                "Name: John Doe",
                "Phone: 9876543210",
                "Service Required: Back Pain Treatment",
                "Message: Pain after running",
            ]
        );
    }

    #[test]
    fn empty_message_is_treated_as_absent() {
        let text = booking_message(&inquiry(Some("")), "Clinic");
        assert!(!text.contains("Message:"));
    }

    #[test]
    fn url_is_percent_encoded() {
        let link = DeepLink::new("wa.me", "1", "a b&c=d\nü");
        assert_eq!(link.url(), "https://wa.me/1?text=a%20b%26c%3Dd%0A%C3%BC");
        assert_eq!(decoded_text(&link.url()), "a b&c=d\nü");
    }

    #[test]
    fn quick_enquiries_name_the_subject() {
        assert_eq!(
            QuickEnquiry::Service("Dry Needling").text(),
            "Hello, I would like to enquire about Dry Needling at Surya Kiran Physiotherapy Clinic."
        );
        assert_eq!(
            QuickEnquiry::Condition("Sports Injuries").text(),
            "Hello, I would like to enquire about treatment for Sports Injuries at Surya Kiran Physiotherapy Clinic."
        );
        assert_eq!(
            QuickEnquiry::General.text(),
            "Hello, I would like to enquire about physiotherapy services at Surya Kiran Clinic."
        );
    }
}
