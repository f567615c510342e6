use chrono::{Datelike, NaiveTime, Timelike, Weekday};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Doctor {
    pub name: &'static str,
    pub position: &'static str,
    pub experience: &'static str,
    pub image: &'static str,
}

pub const DOCTORS: &[Doctor] = &[
    Doctor {
        name: "Dr. K R Krishna PT",
        position: "Chief Physiotherapist, BPT, DNT",
        experience: "22 Years Experience",
        image: "/images/doctor/doctorFour.webp",
    },
    Doctor {
        name: "Dr. Reeja John PT",
        position: "BPT, Physiotherapist",
        experience: "6 Years Experience",
        image: "/images/doctor/doctorOne_11zon.webp",
    },
    Doctor {
        name: "Dr. M S Jassera Begam PT",
        position: "BPT",
        experience: "3 Years Experience",
        image: "/images/doctor/doctorTwo_11zon.webp",
    },
    Doctor {
        name: "Dr. J. S. Evangeline Nissy PT",
        position: "BPT, Physiotherapist",
        experience: "2.5 Years Experience",
        image: "/images/doctor/doctorThree.webp",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone { year: "2006", title: "Started at Anchal", description: "The beginning of our journey in physiotherapy care" },
    Milestone { year: "2007", title: "Started at Kadakkal", description: "Expanded our services to reach more patients" },
    Milestone { year: "2009", title: "1000 Patients", description: "Reached a milestone of treating 1000 patients" },
    Milestone { year: "2017", title: "Ladies Fitness Center", description: "Launched a specialized fitness center for women" },
    Milestone { year: "2022", title: "3000 Patients", description: "Growing community trust with 3000 patients treated" },
    Milestone { year: "2026", title: "10000+ Patients", description: "Continuing our legacy with over 10000 Happy Patients" },
];

pub const CORE_VALUES: &[(&str, &str)] = &[
    ("Compassionate Care", "We treat every patient with empathy, understanding, and respect."),
    ("Excellence", "We strive for the highest standards in physiotherapy practice."),
    ("Patient-Centered", "Your recovery goals guide everything we do."),
    ("Results-Driven", "We focus on measurable outcomes and lasting recovery."),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub treated_for: &'static str,
    /// Stars out of five.
    pub rating: u8,
    pub quote: &'static str,
}

impl Testimonial {
    /// First letter of each word of the name, for the avatar badge.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Rajesh Kumar",
        treated_for: "Back Pain Recovery",
        rating: 5,
        quote: "I suffered from chronic back pain for years. After just 8 sessions at Surya Kiran, I'm finally pain-free. The doctor's expertise and the caring staff made all the difference.",
    },
    Testimonial {
        name: "Priya Sharma",
        treated_for: "Post-Surgery Rehabilitation",
        rating: 5,
        quote: "The rehabilitation after my knee surgery was exceptional. The personalized treatment plan helped me recover faster than expected. Highly recommend!",
    },
    Testimonial {
        name: "Anand Krishnan",
        treated_for: "Sports Injury",
        rating: 5,
        quote: "As a marathon runner, getting back on track after my ankle injury was crucial. The sports injury program here is world-class. I'm back to running pain-free!",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What is physiotherapy?",
        answer: "Physiotherapy is a healthcare profession that uses physical methods such as exercise, massage, and manipulation to restore movement and function affected by injury, illness, or disability. Our physiotherapists assess, diagnose, and treat a wide range of conditions affecting the muscles, bones, joints, and nervous system.",
    },
    FaqEntry {
        question: "How many sessions will I need?",
        answer: "The number of sessions varies depending on your condition, its severity, and your recovery goals. After your initial assessment, our physiotherapist will provide a personalized treatment plan with an estimated number of sessions. Typically, acute conditions may need 4-6 sessions, while chronic conditions may require 8-12 or more sessions.",
    },
    FaqEntry {
        question: "Is physiotherapy painful?",
        answer: "Physiotherapy should not be painful, though you may experience some discomfort during certain treatments, especially when working on tight muscles or stiff joints. Our therapists always work within your comfort level and adjust techniques accordingly. Any mild soreness after treatment typically resolves within 24-48 hours.",
    },
    FaqEntry {
        question: "Do I need a doctor's referral?",
        answer: "No, you don't need a doctor's referral to see a physiotherapist at our clinic. You can directly book an appointment. However, if you have health insurance that covers physiotherapy, you may want to check if your policy requires a referral for reimbursement.",
    },
    FaqEntry {
        question: "What conditions can be treated with physiotherapy?",
        answer: "Physiotherapy can treat a wide range of conditions including back pain, neck pain, sports injuries, post-surgical rehabilitation, arthritis, stroke recovery, neurological conditions, pediatric developmental issues, and many more. If you're unsure whether physiotherapy can help your condition, please contact us for a consultation.",
    },
    FaqEntry {
        question: "How long does each session last?",
        answer: "A typical treatment session lasts 30-45 minutes. Your first visit may take longer (up to 60 minutes) as it includes a comprehensive assessment and discussion of your treatment plan.",
    },
    FaqEntry {
        question: "What should I wear to my physiotherapy appointment?",
        answer: "Wear comfortable, loose-fitting clothing that allows easy access to the area being treated. For lower back or leg treatment, shorts or loose pants are recommended. For shoulder or upper back issues, a sleeveless top or loose t-shirt works well.",
    },
    FaqEntry {
        question: "What equipment do you use for treatment?",
        answer: "Our clinic is equipped with modern physiotherapy equipment including electrotherapy devices (TENS, ultrasound, IFT), heat and cold therapy tools, exercise equipment, resistance bands, balance boards, and manual therapy beds. We select the appropriate tools based on your specific condition and treatment plan.",
    },
    FaqEntry {
        question: "Can I claim physiotherapy on health insurance?",
        answer: "Many health insurance policies cover physiotherapy treatments. The coverage and reimbursement process varies by insurance provider. We recommend checking with your insurance company about their physiotherapy coverage policy. We can provide all necessary documentation for your claim.",
    },
    FaqEntry {
        question: "What makes Surya Kiran Clinic different?",
        answer: "With over 10 years of experience and 5000+ patients treated, we combine clinical expertise with genuine compassion. Our personalized treatment approach, modern equipment, hygienic environment, and high success rate set us apart. We focus on not just treating symptoms but addressing root causes for lasting recovery.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const OPENING_HOURS: &[OpeningHours] = &[
    OpeningHours { days: "Mon - Sat", hours: "8:00 AM - 6:00 PM" },
    OpeningHours { days: "Sunday", hours: "Closed" },
];

const OPENS_AT_HOUR: u32 = 8;
const CLOSES_AT_HOUR: u32 = 18;

/// Monday to Saturday, 08:00 up to but not including 18:00 local time.
pub fn is_open(weekday: Weekday, time: NaiveTime) -> bool {
    weekday != Weekday::Sun && (OPENS_AT_HOUR..CLOSES_AT_HOUR).contains(&time.hour())
}

pub fn is_open_now() -> bool {
    let now = chrono::Local::now();
    is_open(now.weekday(), now.time())
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn open_during_weekday_hours() {
        assert!(is_open(Weekday::Mon, at(8, 0)));
        assert!(is_open(Weekday::Sat, at(17, 59)));
        assert!(!is_open(Weekday::Wed, at(7, 59)));
        assert!(!is_open(Weekday::Fri, at(18, 0)));
    }

    #[test]
    fn testimonial_avatars_use_initials() {
        let initials: Vec<String> = TESTIMONIALS.iter().map(Testimonial::initials).collect();
        assert_eq!(initials, ["RK", "PS", "AK"]);
    }

    #[test]
    fn testimonial_ratings_are_out_of_five() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn closed_all_sunday() {
        assert!(!is_open(Weekday::Sun, at(10, 0)));
    }
}
