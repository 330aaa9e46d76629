use super::domain::PremiumTier;
use super::narrative::views::DetailedAnalysis;
use serde::Serialize;

/// Per-section entitlements derived from a purchase tier. The policy is
/// total: every tier value, including free (`None`), maps to a fixed set
/// of flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureAccess {
    pub personality_insights: bool,
    pub career_matches: bool,
    pub career_roadmap: bool,
    pub development_areas: bool,
    pub market_insights: bool,
    pub personality_profile: bool,
    pub networking_strategy: bool,
    pub ai_mentor: bool,
    pub interview_prep: bool,
    pub success_blueprint: bool,
}

impl FeatureAccess {
    /// Tiers are cumulative: each includes everything below it.
    /// Free sessions see the personality insights and nothing else.
    pub const fn for_tier(tier: Option<PremiumTier>) -> Self {
        let rank = match tier {
            None => 0,
            Some(PremiumTier::Roadmap) => 1,
            Some(PremiumTier::Personality) => 2,
            Some(PremiumTier::Blueprint) => 3,
        };

        Self {
            personality_insights: true,
            career_matches: rank >= 1,
            career_roadmap: rank >= 1,
            development_areas: rank >= 1,
            market_insights: rank >= 1,
            personality_profile: rank >= 2,
            networking_strategy: rank >= 2,
            ai_mentor: rank >= 2,
            interview_prep: rank >= 3,
            success_blueprint: rank >= 3,
        }
    }
}

/// Filter a fully generated analysis down to what the tier is entitled
/// to see. Purely subtractive: nothing upstream is recomputed, and
/// sections the flags deny are removed outright so they never appear in
/// the serialized payload.
pub fn apply_access(analysis: DetailedAnalysis, access: &FeatureAccess) -> DetailedAnalysis {
    DetailedAnalysis {
        personality_insights: analysis
            .personality_insights
            .filter(|_| access.personality_insights),
        career_matches: analysis.career_matches.filter(|_| access.career_matches),
        career_roadmaps: analysis.career_roadmaps.filter(|_| access.career_roadmap),
        development_areas: analysis
            .development_areas
            .filter(|_| access.development_areas),
        market_insights: analysis.market_insights.filter(|_| access.market_insights),
        personality_profile: analysis
            .personality_profile
            .filter(|_| access.personality_profile),
        networking_strategy: analysis
            .networking_strategy
            .filter(|_| access.networking_strategy),
        ai_mentor: analysis.ai_mentor.filter(|_| access.ai_mentor),
        interview_prep: analysis.interview_prep.filter(|_| access.interview_prep),
        success_blueprint: analysis
            .success_blueprint
            .filter(|_| access.success_blueprint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_tier_sees_insights_only() {
        let access = FeatureAccess::for_tier(None);
        assert!(access.personality_insights);
        assert!(!access.career_matches);
        assert!(!access.career_roadmap);
        assert!(!access.development_areas);
        assert!(!access.market_insights);
        assert!(!access.personality_profile);
        assert!(!access.networking_strategy);
        assert!(!access.ai_mentor);
        assert!(!access.interview_prep);
        assert!(!access.success_blueprint);
    }

    #[test]
    fn roadmap_tier_unlocks_career_planning_sections() {
        let access = FeatureAccess::for_tier(Some(PremiumTier::Roadmap));
        assert!(access.career_matches);
        assert!(access.career_roadmap);
        assert!(access.development_areas);
        assert!(access.market_insights);
        assert!(!access.personality_profile);
        assert!(!access.success_blueprint);
    }

    #[test]
    fn personality_tier_includes_roadmap_tier() {
        let roadmap = FeatureAccess::for_tier(Some(PremiumTier::Roadmap));
        let personality = FeatureAccess::for_tier(Some(PremiumTier::Personality));
        assert!(personality.career_matches >= roadmap.career_matches);
        assert!(personality.personality_profile);
        assert!(personality.networking_strategy);
        assert!(personality.ai_mentor);
        assert!(!personality.interview_prep);
    }

    #[test]
    fn blueprint_tier_has_full_access() {
        let access = FeatureAccess::for_tier(Some(PremiumTier::Blueprint));
        assert!(
            access.personality_insights
                && access.career_matches
                && access.career_roadmap
                && access.development_areas
                && access.market_insights
                && access.personality_profile
                && access.networking_strategy
                && access.ai_mentor
                && access.interview_prep
                && access.success_blueprint
        );
    }

    #[test]
    fn apply_access_drops_unentitled_sections_entirely() {
        let full = DetailedAnalysis {
            personality_insights: Some(crate::assessment::narrative::views::PersonalityInsights {
                headline: "h".to_string(),
                observations: vec![],
            }),
            ..DetailedAnalysis::default()
        };
        let gated = apply_access(full.clone(), &FeatureAccess::for_tier(None));
        assert!(gated.personality_insights.is_some());
        assert!(gated.career_matches.is_none());

        let json = serde_json::to_value(&gated).expect("serializes");
        let object = json.as_object().expect("object payload");
        assert!(object.contains_key("personality_insights"));
        assert!(!object.contains_key("career_matches"));
        assert!(!object.contains_key("success_blueprint"));
    }
}
