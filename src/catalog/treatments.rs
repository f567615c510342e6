use std::collections::HashSet;

use super::data::{Condition, PartnerEntry, Service, CONDITIONS, PARTNERS, SERVICES};

pub const GENERAL_CONSULTATION: &str = "General Consultation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreatmentCatalogEntry {
    pub id: &'static str,
    pub display_name: &'static str,
}

/// Every treatment the booking form can be prefilled with, in presentation
/// order. "General Consultation" is offered alongside but is not an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreatmentCatalog {
    entries: Vec<TreatmentCatalogEntry>,
}

impl TreatmentCatalog {
    /// Merges services, conditions and partner entries. Display names stay
    /// unique (case-sensitive, first occurrence kept) and the result is sorted
    /// case-insensitively with the raw name as tie-break.
    pub fn build(services: &[Service], conditions: &[Condition], partners: &[PartnerEntry]) -> Self {
        let merged = services
            .iter()
            .map(|s| TreatmentCatalogEntry { id: s.id, display_name: s.title })
            .chain(conditions.iter().map(|c| TreatmentCatalogEntry { id: c.id, display_name: c.name }))
            .chain(partners.iter().map(|p| TreatmentCatalogEntry { id: p.id, display_name: p.name }));

        let mut seen = HashSet::new();
        let mut entries: Vec<TreatmentCatalogEntry> = merged
            .filter(|entry| seen.insert(entry.display_name))
            .collect();

        entries.sort_by(|a, b| {
            a.display_name
                .to_lowercase()
                .cmp(&b.display_name.to_lowercase())
                .then_with(|| a.display_name.cmp(b.display_name))
        });

        Self { entries }
    }

    pub fn standard() -> Self {
        Self::build(SERVICES, CONDITIONS, PARTNERS)
    }

    pub fn entries(&self) -> &[TreatmentCatalogEntry] {
        &self.entries
    }

    pub fn display_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries().iter().map(|e| e.display_name)
    }

    pub fn find_exact(&self, name: &str) -> Option<&TreatmentCatalogEntry> {
        self.entries.iter().find(|e| e.display_name == name)
    }

    pub fn find_ignore_case(&self, name: &str) -> Option<&TreatmentCatalogEntry> {
        let wanted = name.to_lowercase();
        self.entries.iter().find(|e| e.display_name.to_lowercase() == wanted)
    }
}

pub fn is_partner_referral(name: &str) -> bool {
    PARTNERS.iter().any(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_merges_all_sources() {
        let catalog = TreatmentCatalog::standard();
        assert_eq!(catalog.entries().len(), SERVICES.len() + CONDITIONS.len() + PARTNERS.len());
        assert!(catalog.find_exact("Dry Needling").is_some());
        assert!(catalog.find_exact("Sciatica & Disc Diseases").is_some());
        assert!(catalog.find_exact("Ladies Fitness Center").is_some());
        assert!(catalog.find_exact("Suryakanthi Naturals").is_some());
        assert!(catalog.find_exact(GENERAL_CONSULTATION).is_none());
    }

    #[test]
    fn catalog_is_sorted_ignoring_case() {
        let catalog = TreatmentCatalog::standard();
        let names: Vec<String> = catalog.display_names().map(str::to_lowercase).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(catalog.entries()[0].display_name, "Arthritic Conditions");
    }

    #[test]
    fn duplicate_display_names_keep_first_source() {
        const fn partner(id: &'static str, name: &'static str) -> PartnerEntry {
            PartnerEntry { id, name, tagline: "", description: "", logo: "" }
        }
        const DUPLICATE: &[PartnerEntry] = &[partner("dup", "Dry Needling"), partner("other-case", "dry needling")];
        let catalog = TreatmentCatalog::build(SERVICES, &[], DUPLICATE);

        let exact: Vec<_> = catalog.entries().iter().filter(|e| e.display_name == "Dry Needling").collect();
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].id, "dry-needling");
        // case differs, so both spellings survive
        assert!(catalog.find_exact("dry needling").is_some());
    }

    #[test]
    fn building_twice_gives_the_same_catalog() {
        assert_eq!(TreatmentCatalog::standard(), TreatmentCatalog::standard());
    }

    #[test]
    fn ignore_case_lookup_returns_canonical_entry() {
        let catalog = TreatmentCatalog::standard();
        let entry = catalog.find_ignore_case("physio@home").map(|e| e.display_name);
        assert_eq!(entry, Some("PHYSIO@HOME"));
        assert!(catalog.find_ignore_case("Knee Pain").is_none());
    }

    #[test]
    fn partner_referrals_are_recognised() {
        assert!(is_partner_referral("Ladies Fitness Center"));
        assert!(is_partner_referral("Suryakanthi Naturals"));
        assert!(!is_partner_referral("ladies fitness center"));
        assert!(!is_partner_referral("Dry Needling"));
    }
}
