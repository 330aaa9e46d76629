mod blueprint;
mod careers;
mod development;
mod insights;
mod interview;
mod market;
mod mentor;
mod networking;
mod profile;
mod roadmaps;
pub mod views;

use super::domain::Language;
use super::engine::EngineConfig;
use super::scoring::{CategoryTotals, Classification};
use views::DetailedAnalysis;

/// Generate every narrative section for a classification. Output is a
/// pure function of `(primary type, scores, language)`: identical inputs
/// regenerate byte-identical content, which callers rely on for caching
/// and reproducibility. Gating to a purchase tier happens afterwards in
/// the access module; this function always produces the full tree.
pub fn detailed_analysis(
    classification: &Classification,
    totals: &CategoryTotals,
    language: Language,
    config: &EngineConfig,
) -> DetailedAnalysis {
    let primary = classification.primary;

    DetailedAnalysis {
        personality_insights: Some(insights::personality_insights(classification, totals)),
        career_matches: Some(careers::career_matches(primary)),
        career_roadmaps: Some(roadmaps::career_roadmaps(primary)),
        development_areas: Some(development::development_areas(
            totals,
            config.completeness_threshold,
            config.gap_priority_threshold,
        )),
        market_insights: Some(market::market_insights(primary)),
        personality_profile: Some(profile::personality_profile(primary)),
        networking_strategy: Some(networking::networking_strategy(primary)),
        ai_mentor: Some(mentor::mentor_program(primary, language)),
        interview_prep: Some(interview::interview_prep(primary)),
        success_blueprint: Some(blueprint::success_blueprint(primary, totals)),
    }
}

#[cfg(test)]
mod tests {
    use super::super::scoring::classify;
    use super::*;

    fn sample_totals() -> CategoryTotals {
        CategoryTotals {
            passion: 11,
            mission: 8,
            vocation: 6,
            profession: 5,
        }
    }

    #[test]
    fn full_analysis_populates_every_section() {
        let totals = sample_totals();
        let analysis = detailed_analysis(
            &classify(&totals),
            &totals,
            Language::En,
            &EngineConfig::default(),
        );

        assert!(analysis.personality_insights.is_some());
        assert!(analysis.career_matches.is_some());
        assert!(analysis.career_roadmaps.is_some());
        assert!(analysis.development_areas.is_some());
        assert!(analysis.market_insights.is_some());
        assert!(analysis.personality_profile.is_some());
        assert!(analysis.networking_strategy.is_some());
        assert!(analysis.ai_mentor.is_some());
        assert!(analysis.interview_prep.is_some());
        assert!(analysis.success_blueprint.is_some());
    }

    #[test]
    fn generation_is_deterministic() {
        let totals = sample_totals();
        let classification = classify(&totals);
        let config = EngineConfig::default();
        let first = detailed_analysis(&classification, &totals, Language::Es, &config);
        let second = detailed_analysis(&classification, &totals, Language::Es, &config);
        assert_eq!(first, second);
    }
}
