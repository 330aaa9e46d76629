use ikigai_engine::assessment::domain::{AnswerSet, Language, PremiumTier};
use ikigai_engine::assessment::{AssessmentEngine, FeatureAccess};

fn sample_answers() -> AnswerSet {
    [(1, 1), (5, 1), (6, 1), (9, 1), (3, 1), (4, 1)]
        .into_iter()
        .collect()
}

fn analysis_keys(tier: Option<PremiumTier>) -> Vec<String> {
    let engine = AssessmentEngine::default();
    let result = engine.evaluate(&sample_answers(), tier, Language::En);
    let analysis = result.detailed_analysis.expect("analysis attached");
    let json = serde_json::to_value(&analysis).expect("analysis serializes");
    json.as_object()
        .expect("analysis is an object")
        .keys()
        .cloned()
        .collect()
}

fn allowed_keys(access: &FeatureAccess) -> Vec<&'static str> {
    let flags = [
        ("personality_insights", access.personality_insights),
        ("career_matches", access.career_matches),
        ("career_roadmaps", access.career_roadmap),
        ("development_areas", access.development_areas),
        ("market_insights", access.market_insights),
        ("personality_profile", access.personality_profile),
        ("networking_strategy", access.networking_strategy),
        ("ai_mentor", access.ai_mentor),
        ("interview_prep", access.interview_prep),
        ("success_blueprint", access.success_blueprint),
    ];
    flags
        .into_iter()
        .filter_map(|(key, allowed)| allowed.then_some(key))
        .collect()
}

#[test]
fn free_sessions_receive_personality_insights_only() {
    let keys = analysis_keys(None);
    assert_eq!(keys, vec!["personality_insights".to_string()]);
}

#[test]
fn blueprint_tier_receives_every_section() {
    let keys = analysis_keys(Some(PremiumTier::Blueprint));
    assert_eq!(keys.len(), 10);
    assert!(keys.contains(&"success_blueprint".to_string()));
    assert!(keys.contains(&"personality_insights".to_string()));
}

#[test]
fn serialized_sections_never_exceed_the_tier_flags() {
    let tiers = [
        None,
        Some(PremiumTier::Roadmap),
        Some(PremiumTier::Personality),
        Some(PremiumTier::Blueprint),
    ];

    for tier in tiers {
        let access = FeatureAccess::for_tier(tier);
        let allowed = allowed_keys(&access);
        let keys = analysis_keys(tier);
        for key in &keys {
            assert!(
                allowed.contains(&key.as_str()),
                "tier {tier:?} leaked section {key}"
            );
        }
        // The gate only omits; every entitled section is present too.
        assert_eq!(keys.len(), allowed.len(), "tier {tier:?}");
    }
}

#[test]
fn roadmap_tier_gets_career_planning_without_personality_sections() {
    let keys = analysis_keys(Some(PremiumTier::Roadmap));
    assert!(keys.contains(&"career_matches".to_string()));
    assert!(keys.contains(&"career_roadmaps".to_string()));
    assert!(keys.contains(&"development_areas".to_string()));
    assert!(keys.contains(&"market_insights".to_string()));
    assert!(!keys.contains(&"personality_profile".to_string()));
    assert!(!keys.contains(&"ai_mentor".to_string()));
    assert!(!keys.contains(&"interview_prep".to_string()));
}

#[test]
fn gating_does_not_alter_the_scored_result() {
    let engine = AssessmentEngine::default();
    let free = engine.evaluate(&sample_answers(), None, Language::En);
    let paid = engine.evaluate(&sample_answers(), Some(PremiumTier::Blueprint), Language::En);

    assert_eq!(free.passion, paid.passion);
    assert_eq!(free.overall, paid.overall);
    assert_eq!(free.primary_type, paid.primary_type);
    assert_eq!(free.strengths, paid.strengths);
    assert_eq!(free.recommendations, paid.recommendations);
}
