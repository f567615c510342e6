#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub conditions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Condition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub symptoms: &'static [&'static str],
    pub how_we_help: &'static str,
    pub when_to_consult: &'static str,
}

/// Associated businesses that can be booked through the same form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartnerEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub logo: &'static str,
}

pub const PARTNERS: &[PartnerEntry] = &[
    PartnerEntry {
        id: "ladies-fitness-center",
        name: "Ladies Fitness Center",
        tagline: "Empowering Women's Health",
        description: "A premier destination designed exclusively for women, offering personalized fitness programs, modern equipment, and a supportive environment to help you reach your peak wellness.",
        logo: "/images/fitness.webp",
    },
    PartnerEntry {
        id: "suryakanthi-naturals",
        name: "Suryakanthi Naturals",
        tagline: "Healthy Food Store",
        description: "Bringing nature's bounty to your table. We offer a curated selection of organic, natural, and wholesome food products to support your journey towards a healthier lifestyle.",
        logo: "/images/suryakanthilogo.webp",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        id: "dry-needling",
        title: "Dry Needling",
        category: "Pain Relief",
        description: "Therapeutic technique using thin needles to release muscle tension and reduce pain.",
        benefits: &["Rapid pain relief", "Improved muscle function", "Reduced muscle tension", "Accelerated recovery"],
        conditions: &["Myofascial pain", "Trigger points", "Muscle strains", "Chronic pain"],
    },
    Service {
        id: "kinesiology-taping",
        title: "Kinesiology Taping",
        category: "Sports & Injury",
        description: "Specialized taping method to support muscles and joints while allowing full range of motion.",
        benefits: &["Pain reduction", "Dynamic support", "Improved circulation", "Injury prevention"],
        conditions: &["Sports injuries", "Joint instability", "Muscle weakness", "Postural issues"],
    },
    Service {
        id: "cupping-therapy",
        title: "Cupping Therapy",
        category: "Pain Relief",
        description: "Ancient therapy using suction cups to improve blood flow and relieve muscle tightness.",
        benefits: &["Deep tissue release", "Detoxification", "Improved circulation", "Pain relief"],
        conditions: &["Back pain", "Neck stiffness", "Muscle tension", "Respiratory issues"],
    },
    Service {
        id: "myofascial-release",
        title: "Myo-fascial Release",
        category: "Manual Therapy",
        description: "Manual therapy technique focusing on releasing restrictions in the connective tissue (fascia).",
        benefits: &["Restored mobility", "Pain reduction", "Stress relief", "Improved posture"],
        conditions: &["Myofascial pain syndrome", "Fibromyalgia", "Chronic fatigue", "Stiffness"],
    },
    Service {
        id: "spinal-manipulation",
        title: "Spinal Manipulation",
        category: "Manual Therapy",
        description: "Adjustment techniques to improve spinal motion and physical function.",
        benefits: &["Immediate pain relief", "Increased range of motion", "Improved nervous system function", "Better spinal alignment"],
        conditions: &["Back pain", "Neck pain", "Joint restrictions", "Headaches"],
    },
    Service {
        id: "trigger-point-release",
        title: "Trigger Point Release",
        category: "Manual Therapy",
        description: "Focused pressure on specific muscle points to alleviate pain and dysfunction.",
        benefits: &["Relief from referred pain", "Muscle relaxation", "Improved flexibility", "Restored muscle function"],
        conditions: &["Chronic pain", "Muscle knots", "Tension headaches", "Repetitive strain"],
    },
    Service {
        id: "sports-physiotherapy",
        title: "Sports Physiotherapy",
        category: "Sports & Injury",
        description: "Specialized care for athletes to recover from injuries and enhance performance.",
        benefits: &["Faster return to sport", "Injury prevention", "Performance enhancement", "Strength conditioning"],
        conditions: &["ACL injuries", "Sprains and strains", "Tendinitis", "Running injuries"],
    },
    Service {
        id: "pediatric-rehabilitation",
        title: "Pediatric Rehabilitation",
        category: "Rehabilitation",
        description: "Compassionate care for children with developmental delays and physical challenges.",
        benefits: &["Developmental support", "Improved motor skills", "Enhanced independence", "Family education"],
        conditions: &["Cerebral palsy", "Developmental delays", "Torticollis", "Genetic disorders"],
    },
    Service {
        id: "pre-post-surgical-rehab",
        title: "Pre and Post Surgical Rehab",
        category: "Rehabilitation",
        description: "Comprehensive programs to prepare for surgery and ensure optimal recovery afterwards.",
        benefits: &["Faster post-op recovery", "Improved surgical outcomes", "Pain management", "Restored function"],
        conditions: &["Joint replacements", "Ligament repairs", "Spinal surgeries", "Fractures"],
    },
    Service {
        id: "stroke-rehabilitation",
        title: "Stroke Rehabilitation",
        category: "Rehabilitation",
        description: "Dedicated neuro-rehabilitation to regain independence and quality of life after a stroke.",
        benefits: &["Motor recovery", "Balance improvement", "Cognitive support", "Functional independence"],
        conditions: &["Stroke (CVA)", "Hemiplegia", "Balance disorders", "Coordination issues"],
    },
    Service {
        id: "physio-at-home",
        title: "PHYSIO@HOME",
        category: "Home Care",
        description: "Expert physiotherapy services delivered in the comfort and convenience of your home.",
        benefits: &["Convenience and comfort", "Personalized attention", "Safety for immobile patients", "Functional training in home environment"],
        conditions: &["Post-surgical recovery", "Geriatric care", "Mobility issues", "Chronic conditions"],
    },
];

pub const CONDITIONS: &[Condition] = &[
    Condition {
        id: "back-neck-shoulder-pain",
        name: "Back, Neck & Shoulder Pain",
        category: "Pain",
        description: "Common musculoskeletal issues affecting the spine and upper body, often caused by posture, injury, or stress.",
        symptoms: &["Stiffness", "Aching", "Sharp pain", "Limited range of motion", "Headaches"],
        how_we_help: "We use manual therapy, ergonomic advice, and strengthening exercises to relieve pain and correct underlying mechanical issues.",
        when_to_consult: "When pain persists for more than a few days or interferes with sleep and daily activities.",
    },
    Condition {
        id: "sports-injuries",
        name: "Sports Injuries",
        category: "Injuries",
        description: "Injuries sustained during athletic activities, ranging from acute sprains to chronic overuse conditions.",
        symptoms: &["Swelling", "Bruising", "Instability", "Pain during activity", "Loss of function"],
        how_we_help: "Sports-specific rehabilitation focuses on healing the injury, restoring strength, and preventing future occurrences.",
        when_to_consult: "Immediately after an acute injury or if you experience persistent pain during or after exercise.",
    },
    Condition {
        id: "work-related-injuries",
        name: "Work Related Injuries",
        category: "Injuries",
        description: "Injuries caused by workplace conditions, often due to repetitive tasks, heavy lifting, or poor ergonomics.",
        symptoms: &["Chronic ache", "Fatigue", "Numbness", "Sharp pain with specific movements"],
        how_we_help: "We provide treatment for the injury and ergonomic assessments to modify your work environment and prevent recurrence.",
        when_to_consult: "If work tasks are causing pain or if you've had an accident at work.",
    },
    Condition {
        id: "myofascial-pain-syndrome",
        name: "Myo Fascial Pain Syndrome",
        category: "Pain",
        description: "A chronic pain disorder where pressure on sensitive points in muscles (trigger points) causes pain in seemingly unrelated parts of the body.",
        symptoms: &["Deep, aching muscle pain", "Tender knots in muscles", "Sleep difficulties", "Reduced range of motion"],
        how_we_help: "Myofascial release, trigger point therapy, and stretching are used to release muscle tightness and alleviate pain.",
        when_to_consult: "If you have persistent muscle pain that doesn't resolve with rest.",
    },
    Condition {
        id: "repetitive-strain-injuries",
        name: "Repetitive Strain Injuries",
        category: "Injuries",
        description: "Damage to muscles, tendons, or nerves caused by repetitive motions or awkward positions.",
        symptoms: &["Tingling", "Numbness", "Pain", "Weakness", "Cramping"],
        how_we_help: "Treatment involves rest advice, manual therapy, and exercises to strengthen affected areas and improve mechanics.",
        when_to_consult: "At the first sign of tingling or pain associated with repetitive tasks.",
    },
    Condition {
        id: "sciatica-disc-diseases",
        name: "Sciatica & Disc Diseases",
        category: "Spine & Posture",
        description: "Conditions involving the spinal discs or the sciatic nerve, often causing significant pain and disability.",
        symptoms: &["Radiating leg pain", "Numbness", "Tingling", "Lower back pain", "Weakness"],
        how_we_help: "We focus on relieving nerve compression, reducing inflammation, and stabilizing the spine through specific exercises.",
        when_to_consult: "If you experience radiating pain, numbness, or weakness in your legs.",
    },
    Condition {
        id: "soft-tissue-injuries",
        name: "Soft Tissue Injuries",
        category: "Injuries",
        description: "Injuries to muscles, ligaments, and tendons, such as sprains, strains, and contusions.",
        symptoms: &["Swelling", "Bruising", "Pain", "Loss of function"],
        how_we_help: "We use modalities to reduce swelling, manual therapy to promote healing, and exercises to restore strength.",
        when_to_consult: "If swelling and pain persist or if you can't bear weight on the injured limb.",
    },
    Condition {
        id: "postural-dysfunction",
        name: "Postural Dysfunction",
        category: "Spine & Posture",
        description: "Issues arising from poor posture, leading to muscle imbalance and pain.",
        symptoms: &["Slouching", "Rounded shoulders", "Back/neck pain", "Fatigue"],
        how_we_help: "We provide postural assessment, corrective exercises, and education to improve your alignment and reduce strain.",
        when_to_consult: "If you notice your posture is poor or if it's causing you pain.",
    },
    Condition {
        id: "arthritic-conditions",
        name: "Arthritic Conditions",
        category: "Joints & Surgery",
        description: "Inflammation of one or more joints, causing pain and stiffness that can worsen with age.",
        symptoms: &["Joint pain", "Stiffness", "Swelling", "Redness", "Decreased range of motion"],
        how_we_help: "Gentle mobilization, pain management strategies, and exercises help maintain joint function and reduce pain.",
        when_to_consult: "If joint pain limits your daily activities or quality of life.",
    },
    Condition {
        id: "pre-post-operative-conditions",
        name: "Pre & Post Operative Conditions",
        category: "Joints & Surgery",
        description: "Preparation for and recovery from orthopedic surgeries.",
        symptoms: &["Pain", "Weakness", "Limited mobility", "Swelling"],
        how_we_help: "Pre-hab prepares the body for surgery; post-hab focuses on healing, regaining mobility, and returning to function.",
        when_to_consult: "Before scheduled surgery and immediately after to begin your recovery plan.",
    },
];

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

pub fn find_condition(id: &str) -> Option<&'static Condition> {
    CONDITIONS.iter().find(|c| c.id == id)
}

/// `location.hash` (`#id`, possibly empty) to the id it names.
pub fn hash_anchor(hash: &str) -> Option<&str> {
    Some(hash.trim_start_matches('#')).filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_names_a_card() {
        assert_eq!(hash_anchor("#sports-injuries").and_then(find_condition).map(|c| c.name), Some("Sports Injuries"));
        assert_eq!(hash_anchor("#dry-needling").and_then(find_service).map(|s| s.title), Some("Dry Needling"));
    }

    #[test]
    fn empty_or_unknown_hash_names_nothing() {
        assert_eq!(hash_anchor(""), None);
        assert_eq!(hash_anchor("#"), None);
        assert!(hash_anchor("#faq-3").and_then(find_condition).is_none());
    }
}
