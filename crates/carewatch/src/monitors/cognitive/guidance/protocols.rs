use serde::Serialize;

use super::super::evaluation::RiskTier;

/// Short heading/detail pair used by every protocol list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Directive {
    pub topic: &'static str,
    pub detail: &'static str,
}

const fn directive(topic: &'static str, detail: &'static str) -> Directive {
    Directive { topic, detail }
}

/// Introductory sentence for each guidance section plus the medication monitoring note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionNotes {
    pub medications: &'static str,
    pub memory_aids: &'static str,
    pub caregiver_support: &'static str,
    pub lifestyle: &'static str,
    pub monitoring: &'static str,
}

impl SectionNotes {
    pub const fn for_tier(tier: RiskTier) -> Self {
        match tier {
            RiskTier::Critical => Self {
                medications: "Advanced stage requires intensive medication regimen and symptom management.",
                memory_aids: "Severe memory impairment requires 24/7 supervision and comprehensive memory support systems.",
                caregiver_support: "Full-time professional care or memory care facility required for safety.",
                lifestyle: "Highly structured environment with 24/7 supervision essential.",
                monitoring: "All medications must be prescribed and monitored by a neurologist. Weekly to bi-weekly monitoring required.",
            },
            RiskTier::High => Self {
                medications: "Moderate to severe symptoms require combination therapy to slow progression.",
                memory_aids: "Significant memory loss requires extensive daily reminders and structured environment.",
                caregiver_support: "Part-time professional assistance needed for daily activities and safety.",
                lifestyle: "Consistent daily routines with supervised activities recommended.",
                monitoring: "All medications must be prescribed and monitored by a neurologist. Weekly to bi-weekly monitoring required.",
            },
            RiskTier::Moderate => Self {
                medications: "Early-stage medications can help preserve cognitive function and delay progression.",
                memory_aids: "Mild memory issues benefit from organizational tools and routines.",
                caregiver_support: "Regular check-ins and assistance with complex tasks recommended.",
                lifestyle: "Regular exercise, cognitive activities, and social engagement beneficial.",
                monitoring: "All medications must be prescribed and monitored by a neurologist. Regular follow-up appointments recommended.",
            },
            RiskTier::LowModerate | RiskTier::Low => Self {
                medications: "Preventive supplements and early intervention may help reduce risk.",
                memory_aids: "Basic memory aids help maintain independence and organization.",
                caregiver_support: "Family support and monitoring to ensure safety and well-being.",
                lifestyle: "Healthy lifestyle practices support brain health and reduce risk progression.",
                monitoring: "All medications must be prescribed and monitored by a neurologist. Regular follow-up appointments recommended.",
            },
        }
    }
}

/// Extra care protocols surfaced for High and Critical tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EscalationProtocols {
    pub memory_strategies: &'static [Directive],
    pub safety_measures: &'static [Directive],
    pub communication_do: &'static [&'static str],
    pub communication_dont: &'static [&'static str],
}

static MEMORY_STRATEGIES: [Directive; 5] = [
    directive("Repetition & Routine", "Establish fixed daily schedules that repeat every day"),
    directive("Visual Cues", "Use photos, colors, and symbols instead of text when possible"),
    directive("Simplification", "Break complex tasks into simple, single-step instructions"),
    directive("Validation", "Don't correct false memories; redirect gently instead"),
    directive("Familiar Environment", "Keep furniture and items in the same place always"),
];

static SAFETY_MEASURES: [Directive; 5] = [
    directive("Wandering Prevention", "Install door alarms, GPS trackers, ID bracelets"),
    directive("Kitchen Safety", "Disable stove when unsupervised, remove sharp objects"),
    directive(
        "Medication Management",
        "Supervised administration only - never leave pills accessible",
    ),
    directive(
        "Financial Protection",
        "Limit access to bank accounts, credit cards, checkbooks",
    ),
    directive(
        "Driving",
        "Assess driving ability immediately - most patients should stop driving",
    ),
];

static COMMUNICATION_DO: [&str; 7] = [
    "Speak slowly and clearly in short sentences",
    "Maintain eye contact and use gentle touch",
    "Ask one question at a time",
    "Use patient's name frequently",
    "Respond to emotions, not just words",
    "Show photos to trigger memories",
    "Praise and encourage any success",
];

static COMMUNICATION_DONT: [&str; 7] = [
    "Argue about facts or correct memories",
    "Ask \"Do you remember...?\"",
    "Talk about them as if they're not there",
    "Rush or show frustration",
    "Use complex sentences or questions",
    "Change topics suddenly",
    "Test their memory repeatedly",
];

impl EscalationProtocols {
    pub fn for_tier(tier: RiskTier) -> Option<Self> {
        matches!(tier, RiskTier::Critical | RiskTier::High).then(|| Self {
            memory_strategies: &MEMORY_STRATEGIES,
            safety_measures: &SAFETY_MEASURES,
            communication_do: &COMMUNICATION_DO,
            communication_dont: &COMMUNICATION_DONT,
        })
    }
}

/// Steps for a disoriented, aggressive, or missing patient. Critical tier only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyPlan {
    pub trigger: &'static str,
    pub steps: &'static [Directive],
    pub note: &'static str,
}

static EMERGENCY_STEPS: [Directive; 5] = [
    directive("Stay Calm", "Patient mirrors your emotions"),
    directive(
        "Contact Emergency Contacts",
        "Family members first, then 911 if necessary",
    ),
    directive(
        "Wandering",
        "Check familiar places, alert neighbors, contact police immediately",
    ),
    directive(
        "Behavioral Crisis",
        "Remove from triggering situation, redirect attention, contact doctor",
    ),
    directive(
        "Medical Emergency",
        "Call 911 and inform them of Alzheimer's diagnosis",
    ),
];

impl EmergencyPlan {
    pub fn for_tier(tier: RiskTier) -> Option<Self> {
        (tier == RiskTier::Critical).then(|| Self {
            trigger: "If patient becomes disoriented, aggressive, or goes missing",
            steps: &EMERGENCY_STEPS,
            note: "Keep a current photo and medical information card ready at all times",
        })
    }
}

static HELPLINE: Directive = directive("Alzheimer's Association 24/7 Helpline", "1-800-272-3900");

static ESCALATED_RESOURCES: [Directive; 4] = [
    directive("Online Support Communities", "ALZConnected.org"),
    directive(
        "Caregiver Education",
        "Local Alzheimer's Association chapters",
    ),
    directive(
        "Respite Care",
        "Adult day programs and in-home respite services",
    ),
    directive(
        "Legal/Financial Planning",
        "Elder law attorneys, financial planners",
    ),
];

static EARLY_RESOURCES: [Directive; 3] = [
    directive(
        "Educational Resources",
        "Alzheimer's disease information and support",
    ),
    directive(
        "Cognitive Health Programs",
        "Brain training and memory workshops",
    ),
    directive(
        "Support Groups",
        "Connect with others experiencing similar challenges",
    ),
];

/// Helpline first, then tier-specific resources.
pub fn support_resources(tier: RiskTier) -> Vec<Directive> {
    let mut resources = vec![HELPLINE];
    match tier {
        RiskTier::Critical | RiskTier::High => resources.extend_from_slice(&ESCALATED_RESOURCES),
        RiskTier::Moderate | RiskTier::LowModerate => resources.extend_from_slice(&EARLY_RESOURCES),
        RiskTier::Low => {}
    }
    resources
}
