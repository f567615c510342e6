use serde::{Deserialize, Serialize};

use crate::catalog::treatments::{is_partner_referral, TreatmentCatalog, GENERAL_CONSULTATION};
use crate::inquiry::validation::InquiryInput;

/// `?service=...` on the contact route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceQuery {
    pub service: Option<String>,
}

/// In-app navigation state carrying the same value as [`ServiceQuery`].
#[derive(Debug, Clone, PartialEq)]
pub struct ServicePrefill {
    pub service: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefillMatch {
    Exact,
    IgnoreCase,
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageUpdate {
    Keep,
    Replace(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefill {
    pub matched: PrefillMatch,
    pub treatment: String,
    pub message: MessageUpdate,
}

impl Prefill {
    pub fn apply(&self, input: &mut InquiryInput) {
        input.treatment = self.treatment.clone();
        if let MessageUpdate::Replace(message) = &self.message {
            input.message = message.clone();
        }
    }
}

/// Picks the value to prefill from: navigation state first, then the query
/// string. Blank values count as absent.
pub fn incoming_service(state: Option<&ServicePrefill>, query: Option<ServiceQuery>) -> Option<String> {
    state
        .map(|s| s.service.clone())
        .or_else(|| query.and_then(|q| q.service))
        .filter(|s| !s.trim().is_empty())
}

/// Maps an incoming service name onto the catalog. Empty values are ignored.
pub fn resolve(incoming: &str, catalog: &TreatmentCatalog) -> Option<Prefill> {
    if incoming.is_empty() {
        return None;
    }

    let prefill = if let Some(entry) = catalog.find_exact(incoming) {
        let message = if is_partner_referral(entry.display_name) {
            MessageUpdate::Replace(format!("I am interested in learning more about {}.", entry.display_name))
        } else {
            MessageUpdate::Keep
        };
        Prefill {
            matched: PrefillMatch::Exact,
            treatment: entry.display_name.to_string(),
            message,
        }
    } else if let Some(entry) = catalog.find_ignore_case(incoming) {
        Prefill {
            matched: PrefillMatch::IgnoreCase,
            treatment: entry.display_name.to_string(),
            message: MessageUpdate::Keep,
        }
    } else {
        Prefill {
            matched: PrefillMatch::NoMatch,
            treatment: GENERAL_CONSULTATION.to_string(),
            message: MessageUpdate::Replace(format!("I am interested in treatment for: {}.", incoming)),
        }
    };

    log::debug!("Prefill for {:?} resolved as {:?}", incoming, prefill.matched);
    Some(prefill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::PARTNERS;

    fn resolve_standard(incoming: &str) -> Prefill {
        resolve(incoming, &TreatmentCatalog::standard()).expect("non-empty value resolves")
    }

    #[test]
    fn partner_entry_sets_learning_more_message() {
        let prefill = resolve_standard("Ladies Fitness Center");
        assert_eq!(prefill.matched, PrefillMatch::Exact);
        assert_eq!(prefill.treatment, "Ladies Fitness Center");
        assert_eq!(
            prefill.message,
            MessageUpdate::Replace("I am interested in learning more about Ladies Fitness Center.".to_string())
        );
    }

    #[test]
    fn every_partner_gets_its_own_referral_message() {
        for partner in PARTNERS {
            let prefill = resolve_standard(partner.name);
            assert_eq!(prefill.matched, PrefillMatch::Exact);
            assert_eq!(prefill.treatment, partner.name);
            assert_eq!(
                prefill.message,
                MessageUpdate::Replace(format!("I am interested in learning more about {}.", partner.name))
            );
        }
    }

    #[test]
    fn navigation_state_wins_over_query() {
        let state = ServicePrefill { service: "Dry Needling".to_string() };
        let query = ServiceQuery { service: Some("Suryakanthi Naturals".to_string()) };
        assert_eq!(incoming_service(Some(&state), Some(query.clone())).as_deref(), Some("Dry Needling"));
        assert_eq!(incoming_service(None, Some(query)).as_deref(), Some("Suryakanthi Naturals"));
    }

    #[test]
    fn missing_or_blank_service_is_absent() {
        assert_eq!(incoming_service(None, None), None);
        assert_eq!(incoming_service(None, Some(ServiceQuery::default())), None);
        assert_eq!(incoming_service(None, Some(ServiceQuery { service: Some("  ".to_string()) })), None);
        let blank = ServicePrefill { service: String::new() };
        assert_eq!(incoming_service(Some(&blank), None), None);
    }

    #[test]
    fn exact_service_keeps_existing_message() {
        let mut input = InquiryInput {
            message: "Already typed".to_string(),
            ..Default::default()
        };
        let prefill = resolve_standard("Dry Needling");
        assert_eq!(prefill.message, MessageUpdate::Keep);
        prefill.apply(&mut input);
        assert_eq!(input.treatment, "Dry Needling");
        assert_eq!(input.message, "Already typed");
    }

    #[test]
    fn different_case_resolves_to_canonical_name() {
        let prefill = resolve_standard("sports injuries");
        assert_eq!(prefill.matched, PrefillMatch::IgnoreCase);
        assert_eq!(prefill.treatment, "Sports Injuries");
        assert_eq!(prefill.message, MessageUpdate::Keep);
    }

    #[test]
    fn partner_in_other_case_gets_no_message() {
        let prefill = resolve_standard("ladies fitness center");
        assert_eq!(prefill.matched, PrefillMatch::IgnoreCase);
        assert_eq!(prefill.treatment, "Ladies Fitness Center");
        assert_eq!(prefill.message, MessageUpdate::Keep);
    }

    #[test]
    fn unknown_service_falls_back_to_general_consultation() {
        let mut input = InquiryInput::default();
        let prefill = resolve_standard("Knee Pain");
        assert_eq!(prefill.matched, PrefillMatch::NoMatch);
        prefill.apply(&mut input);
        assert_eq!(input.treatment, "General Consultation");
        assert_eq!(input.message, "I am interested in treatment for: Knee Pain.");
    }

    #[test]
    fn empty_value_is_ignored() {
        assert_eq!(resolve("", &TreatmentCatalog::standard()), None);
    }

    #[test]
    fn resolution_is_deterministic() {
        let catalog = TreatmentCatalog::standard();
        for value in ["Knee Pain", "PHYSIO@HOME", "physio@home", "Suryakanthi Naturals"] {
            assert_eq!(resolve(value, &catalog), resolve(value, &catalog));
        }
    }
}
