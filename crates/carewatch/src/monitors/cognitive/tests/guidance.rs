use crate::monitors::cognitive::evaluation::RiskTier;
use crate::monitors::cognitive::guidance::{GuidanceCaps, GuidanceSelector};

#[test]
fn high_tier_keeps_first_four_medications_in_order() {
    let selector = GuidanceSelector::new();
    let authored = selector.authored_medications(RiskTier::High);

    let bundle = selector.select(RiskTier::High);

    assert_eq!(bundle.medications.len(), authored.len().min(4));
    assert_eq!(bundle.medications, authored[..4]);
    assert!(bundle.medications[0].starts_with("Donepezil (Aricept) - 5-10mg"));
}

#[test]
fn caps_follow_tier_severity() {
    let selector = GuidanceSelector::new();
    let expected = [
        (RiskTier::Critical, 6, 10),
        (RiskTier::High, 4, 6),
        (RiskTier::Moderate, 3, 4),
        (RiskTier::LowModerate, 2, 3),
    ];

    for (tier, medications, memory_aids) in expected {
        let bundle = selector.select(tier);
        assert_eq!(bundle.medications.len(), medications, "{tier} medications");
        assert_eq!(bundle.memory_aids.len(), memory_aids, "{tier} memory aids");
        assert_eq!(
            bundle.memory_aids,
            selector.authored_memory_aids(tier)[..memory_aids],
            "{tier} memory aids keep authored order"
        );
    }
}

#[test]
fn caregiver_and_lifestyle_lists_are_uncapped() {
    let selector = GuidanceSelector::new();
    for tier in [
        RiskTier::Critical,
        RiskTier::High,
        RiskTier::Moderate,
        RiskTier::LowModerate,
    ] {
        let caps = GuidanceCaps::for_tier(tier);
        assert_eq!(caps.caregiver_support, None);
        assert_eq!(caps.lifestyle, None);

        let bundle = selector.select(tier);
        assert_eq!(bundle.caregiver_support.len(), 6);
        assert_eq!(bundle.lifestyle.len(), 6);
    }
}

#[test]
fn urgency_is_returned_verbatim() {
    let selector = GuidanceSelector::new();
    assert_eq!(
        selector.select(RiskTier::Critical).urgency,
        "IMMEDIATE MEDICAL ATTENTION REQUIRED"
    );
    assert_eq!(
        selector.select(RiskTier::Moderate).urgency,
        "Important - Schedule neurologist consultation within 1 week"
    );
    assert_eq!(
        selector.select_by_label("Low-Moderate").urgency,
        "Monitor closely - Schedule evaluation within 2 weeks"
    );
}

#[test]
fn low_and_unknown_tiers_fall_back() {
    let selector = GuidanceSelector::new();

    let low = selector.select(RiskTier::Low);
    let by_label = selector.select_by_label("Low");
    let unknown = selector.select_by_label("Extreme");
    let repeated = selector.select_by_label("Extreme");

    assert!(low.is_fallback());
    assert_eq!(low.urgency, "Continue monitoring");
    assert_eq!(low.medications, ["Preventive vitamins and healthy lifestyle"]);
    assert_eq!(low.memory_aids, ["Standard organizational tools"]);
    assert_eq!(low.caregiver_support, ["Regular family contact"]);
    assert_eq!(low.lifestyle, ["Healthy lifestyle practices"]);
    assert_eq!(low, by_label);
    assert_eq!(low, unknown);
    assert_eq!(unknown, repeated);
}

#[test]
fn escalation_content_is_limited_to_severe_tiers() {
    let selector = GuidanceSelector::new();

    let critical = selector.select(RiskTier::Critical);
    assert!(critical.protocols.is_some());
    let plan = critical.emergency_plan.expect("critical emergency plan");
    assert_eq!(plan.steps.len(), 5);
    assert_eq!(plan.steps[0].topic, "Stay Calm");

    let high = selector.select(RiskTier::High);
    let protocols = high.protocols.expect("high protocols");
    assert_eq!(protocols.safety_measures[0].topic, "Wandering Prevention");
    assert_eq!(protocols.communication_do.len(), 7);
    assert!(high.emergency_plan.is_none());

    let moderate = selector.select(RiskTier::Moderate);
    assert!(moderate.protocols.is_none());
    assert!(moderate.emergency_plan.is_none());
}

#[test]
fn resources_always_start_with_helpline() {
    let selector = GuidanceSelector::new();

    let counts: Vec<usize> = RiskTier::ALL
        .iter()
        .map(|tier| {
            let bundle = selector.select(*tier);
            assert_eq!(bundle.resources[0].detail, "1-800-272-3900");
            bundle.resources.len()
        })
        .collect();

    // Low, Low-Moderate, Moderate, High, Critical
    assert_eq!(counts, [1, 4, 4, 5, 5]);
}

#[test]
fn section_notes_track_tier() {
    let selector = GuidanceSelector::new();
    assert!(selector
        .select(RiskTier::High)
        .notes
        .monitoring
        .ends_with("Weekly to bi-weekly monitoring required."));
    assert!(selector
        .select(RiskTier::Moderate)
        .notes
        .monitoring
        .ends_with("Regular follow-up appointments recommended."));
}
