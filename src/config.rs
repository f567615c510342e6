pub const CLINIC_NAME: &str = "Surya Kiran Physiotherapy Clinic";
pub const CLINIC_SHORT_NAME: &str = "Surya Kiran Clinic";

pub const WHATSAPP_DOMAIN: &str = "wa.me";
const DEFAULT_WHATSAPP_NUMBER: &str = "919048030977";

pub const PHONE_DISPLAY: &str = "+91 90480 30977";
pub const PHONE_RAW: &str = "+919048030977";
pub const EMAIL: &str = "wellness.kdl@gmail.com";
pub const ADDRESS_LINE_1: &str = "Surya Kiran Physiotherapy, Pallimukku,";
pub const ADDRESS_LINE_2: &str = "Kadakkal, Kollam - 691536";

/// Recipient for every deep link the site opens. Set
/// `CLINIC_WHATSAPP_NUMBER` at build time to point a staging build elsewhere.
pub fn whatsapp_number() -> &'static str {
    match option_env!("CLINIC_WHATSAPP_NUMBER") {
        Some(number) if !number.is_empty() => number,
        _ => DEFAULT_WHATSAPP_NUMBER,
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
