use super::super::evaluation::RiskTier;

/// Full authored content for one tier, before truncation.
#[derive(Debug)]
pub(crate) struct AuthoredGuidance {
    pub urgency: &'static str,
    pub medications: &'static [&'static str],
    pub memory_aids: &'static [&'static str],
    pub caregiver_support: &'static [&'static str],
    pub lifestyle: &'static [&'static str],
}

/// Authored bundle for a tier, or `None` when the tier uses the fallback.
pub(crate) fn authored(tier: RiskTier) -> Option<&'static AuthoredGuidance> {
    match tier {
        RiskTier::Critical => Some(&CRITICAL),
        RiskTier::High => Some(&HIGH),
        RiskTier::Moderate => Some(&MODERATE),
        RiskTier::LowModerate => Some(&LOW_MODERATE),
        RiskTier::Low => None,
    }
}

pub(crate) static FALLBACK: AuthoredGuidance = AuthoredGuidance {
    urgency: "Continue monitoring",
    medications: &["Preventive vitamins and healthy lifestyle"],
    memory_aids: &["Standard organizational tools"],
    caregiver_support: &["Regular family contact"],
    lifestyle: &["Healthy lifestyle practices"],
};

static CRITICAL: AuthoredGuidance = AuthoredGuidance {
    urgency: "IMMEDIATE MEDICAL ATTENTION REQUIRED",
    medications: &[
        "Donepezil (Aricept) - 10mg daily - Cholinesterase inhibitor to improve cognitive function",
        "Memantine (Namenda) - 20mg daily - NMDA receptor antagonist for moderate to severe Alzheimer's",
        "Rivastigmine (Exelon) - 9.5mg patch - Alternative cholinesterase inhibitor",
        "Galantamine (Razadyne) - 16-24mg daily - Enhances cholinergic function",
        "Anti-anxiety medications as needed - Lorazepam or Alprazolam for agitation",
        "Antidepressants - Sertraline or Citalopram for mood disorders",
    ],
    memory_aids: &[
        "🔔 Automated medication dispensers with alarms and voice reminders",
        "📱 GPS tracking devices for patient safety and wandering prevention",
        "🏠 24/7 supervised care or memory care facility placement recommended",
        "📋 Digital memory boards with photos, daily schedules, and family information",
        "🎵 Music therapy programs with familiar songs from patient's past",
        "💡 Smart home automation: labeled rooms, automatic lights, door sensors",
        "📝 Simplified picture-based communication boards",
        "⏰ Large digital clocks with day, date, and time visible",
        "🖼️ Reality orientation boards updated daily",
        "📞 Emergency contact buttons and medical alert systems",
    ],
    caregiver_support: &[
        "Hire professional full-time caregiver or consider memory care facility",
        "Establish power of attorney and advance healthcare directives immediately",
        "Join Alzheimer's Association caregiver support groups",
        "Implement safety measures: remove hazards, install locks on dangerous areas",
        "Create structured daily routines with minimal changes",
        "Respite care services to prevent caregiver burnout",
    ],
    lifestyle: &[
        "Highly structured environment with consistent daily routine",
        "Cognitive stimulation through simple, familiar activities",
        "Physical therapy for mobility and fall prevention",
        "Nutritional support: high-calorie, easy-to-eat foods",
        "Regular medical monitoring (weekly to bi-weekly)",
        "End-of-life planning and palliative care discussions",
    ],
};

static HIGH: AuthoredGuidance = AuthoredGuidance {
    urgency: "URGENT - Schedule neurologist appointment within 48 hours",
    medications: &[
        "Donepezil (Aricept) - 5-10mg daily - First-line treatment for Alzheimer's",
        "Memantine (Namenda) - 10-20mg daily - Often combined with Donepezil",
        "Rivastigmine (Exelon) - 6-12mg daily or patch - Alternative option",
        "Vitamin E - 1000 IU twice daily - Antioxidant support",
        "Omega-3 fatty acids - 2000mg daily - Brain health support",
        "Low-dose aspirin - 81mg daily - Cardiovascular protection (if approved by doctor)",
    ],
    memory_aids: &[
        "📱 Smartphone apps with medication reminders and daily task prompts",
        "📝 Memory journals with daily entries and photo albums",
        "🏷️ Label all household items, cabinets, and rooms with pictures and words",
        "📅 Large wall calendars with important dates and daily activities",
        "🔊 Voice-activated assistants (Alexa/Google Home) for reminders",
        "👥 Photo albums with names and relationships clearly labeled",
        "🗺️ Familiar environment setup with minimal changes",
        "⏰ Multiple alarm clocks and timers for different activities",
        "📞 Simplified phone with photo speed dial buttons",
        "🎯 Checklists for daily routines (morning, evening, meals)",
    ],
    caregiver_support: &[
        "Part-time professional caregiver assistance (4-8 hours daily)",
        "Family training on Alzheimer's care techniques",
        "Establish medical power of attorney",
        "Join local and online support groups",
        "Install home safety features: grab bars, non-slip mats",
        "Create emergency response plan",
    ],
    lifestyle: &[
        "Consistent daily schedule and routine",
        "Supervised cooking and household activities",
        "Gentle exercise programs (walking, tai chi)",
        "Mediterranean diet rich in vegetables, fish, olive oil",
        "Social engagement in supervised settings",
        "Monthly neurologist check-ups",
    ],
};

static MODERATE: AuthoredGuidance = AuthoredGuidance {
    urgency: "Important - Schedule neurologist consultation within 1 week",
    medications: &[
        "Donepezil (Aricept) - 5mg daily initially - May increase to 10mg",
        "Rivastigmine (Exelon) - 3-6mg twice daily - Start low, increase gradually",
        "Vitamin B complex - Daily supplement - Supports brain function",
        "Vitamin D3 - 2000 IU daily - Cognitive health support",
        "Ginkgo Biloba - 120-240mg daily - May improve memory (consult doctor)",
        "Coenzyme Q10 - 200mg daily - Cellular energy support",
    ],
    memory_aids: &[
        "📱 Digital reminder apps for medications and appointments",
        "📖 Memory notebooks to record daily events and tasks",
        "🏷️ Label important items and frequently used spaces",
        "📋 Whiteboards for daily to-do lists and notes",
        "📸 Photo displays of family members with names",
        "🗓️ Daily planners with hour-by-hour schedules",
        "🔔 Pill organizers with built-in alarms",
        "📝 Sticky notes in strategic locations for reminders",
        "⏰ Routine-based alarms for meals, medications, activities",
        "💻 Computer bookmarks and desktop shortcuts for important tasks",
    ],
    caregiver_support: &[
        "Regular check-ins from family members (daily if possible)",
        "Part-time assistance for complex tasks (3-4 hours, 2-3 times weekly)",
        "Educate family about disease progression",
        "Prepare legal documents (living will, healthcare proxy)",
        "Home safety assessment",
        "Establish support network of family and friends",
    ],
    lifestyle: &[
        "Maintain regular sleep schedule (7-8 hours nightly)",
        "Daily physical exercise (30 minutes walking or swimming)",
        "Brain-training games and puzzles",
        "Social activities and community engagement",
        "Balanced diet with emphasis on brain-healthy foods",
        "Bi-monthly medical check-ups",
    ],
};

static LOW_MODERATE: AuthoredGuidance = AuthoredGuidance {
    urgency: "Monitor closely - Schedule evaluation within 2 weeks",
    medications: &[
        "Consider starting low-dose Donepezil (5mg) after neurologist evaluation",
        "Vitamin B12 - 1000mcg daily - Essential for nerve health",
        "Omega-3 fish oil - 1000mg daily - Brain cell support",
        "Multivitamin with antioxidants - Daily",
        "Turmeric/Curcumin - 500mg daily - Anti-inflammatory properties",
        "Resveratrol - 250mg daily - Neuroprotective effects",
    ],
    memory_aids: &[
        "📱 Phone reminders for important tasks and medications",
        "📝 Daily journals to track activities and memory",
        "📅 Wall calendars in visible locations",
        "✅ To-do lists and checklists",
        "📋 Routine cards for morning and evening activities",
        "🗂️ Organized filing system for important documents",
        "⏰ Standard alarm system for regular activities",
        "📞 Contact list with photos next to phone",
        "🎯 Mnemonic devices and memory techniques",
        "💡 Keep familiar items in consistent locations",
    ],
    caregiver_support: &[
        "Family awareness and education about early symptoms",
        "Weekly check-ins to monitor changes",
        "Encourage independence while providing support",
        "Begin discussing future care planning",
        "Create emergency contact list",
        "Consider medical alert system",
    ],
    lifestyle: &[
        "Regular physical exercise (150 minutes weekly)",
        "Cognitive activities: reading, puzzles, learning new skills",
        "Active social life and community involvement",
        "Mediterranean or MIND diet",
        "Stress management techniques",
        "Quarterly medical evaluations",
    ],
};

/// Front-of-list caps applied to the authored lists. `None` means uncapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuidanceCaps {
    pub medications: Option<usize>,
    pub memory_aids: Option<usize>,
    pub caregiver_support: Option<usize>,
    pub lifestyle: Option<usize>,
}

impl GuidanceCaps {
    pub const fn for_tier(tier: RiskTier) -> Self {
        let (medications, memory_aids) = match tier {
            RiskTier::Critical => (6, 10),
            RiskTier::High => (4, 6),
            RiskTier::Moderate => (3, 4),
            RiskTier::LowModerate | RiskTier::Low => (2, 3),
        };
        Self {
            medications: Some(medications),
            memory_aids: Some(memory_aids),
            caregiver_support: None,
            lifestyle: None,
        }
    }
}

pub(crate) fn take_front(items: &'static [&'static str], cap: Option<usize>) -> Vec<&'static str> {
    let limit = cap.map_or(items.len(), |cap| cap.min(items.len()));
    items[..limit].to_vec()
}
