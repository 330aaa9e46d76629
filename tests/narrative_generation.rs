use ikigai_engine::assessment::domain::{Category, Language};
use ikigai_engine::assessment::narrative::views::DevelopmentPriority;
use ikigai_engine::assessment::narrative;
use ikigai_engine::assessment::scoring::{classify, CategoryTotals};
use ikigai_engine::assessment::EngineConfig;

fn analysis_for(
    totals: &CategoryTotals,
    language: Language,
) -> narrative::views::DetailedAnalysis {
    narrative::detailed_analysis(&classify(totals), totals, language, &EngineConfig::default())
}

#[test]
fn development_levels_floor_scores_into_the_ten_point_scale() {
    let totals = CategoryTotals {
        passion: 10,
        mission: 10,
        vocation: 3,
        profession: 1,
    };
    let analysis = analysis_for(&totals, Language::En);
    let areas = analysis.development_areas.expect("areas generated");

    let vocation = areas
        .iter()
        .find(|area| area.area == "Technical Mastery")
        .expect("vocation area present");
    assert_eq!(vocation.current_level, 0);
    assert_eq!(vocation.target_level, 2);
    assert_eq!(vocation.priority, DevelopmentPriority::Medium);

    let passion = areas
        .iter()
        .find(|area| area.area == "Creative Expression")
        .expect("passion area present");
    assert_eq!(passion.current_level, 1);
    assert_eq!(passion.target_level, 3);
}

#[test]
fn career_matches_split_into_high_and_medium_fit() {
    let totals = CategoryTotals {
        passion: 2,
        mission: 1,
        vocation: 9,
        profession: 3,
    };
    let analysis = analysis_for(&totals, Language::En);
    let matches = analysis.career_matches.expect("matches generated");

    assert!(!matches.high_fit.is_empty());
    assert!(!matches.medium_fit.is_empty());
    let lowest_high = matches.high_fit.iter().map(|m| m.match_score).min();
    let highest_medium = matches.medium_fit.iter().map(|m| m.match_score).max();
    assert!(lowest_high > highest_medium);
    assert!(matches.high_fit.iter().any(|m| m.title == "Software Engineer"));
}

#[test]
fn narrative_sections_track_the_primary_archetype() {
    let profession_heavy = CategoryTotals {
        passion: 0,
        mission: 1,
        vocation: 2,
        profession: 12,
    };
    let analysis = analysis_for(&profession_heavy, Language::En);

    let roadmaps = analysis.career_roadmaps.expect("roadmaps generated");
    assert!(roadmaps.iter().any(|r| r.title == "Corporate Ascent Track"));

    let prep = analysis.interview_prep.expect("prep generated");
    assert!(prep
        .archetype_questions
        .iter()
        .any(|q| q.contains("measurable results")));

    let blueprint = analysis.success_blueprint.expect("blueprint generated");
    assert_eq!(blueprint.phases.len(), 3);
    // Life balance is seeded from the pillar scores in declaration order.
    assert_eq!(blueprint.life_balance[3].dimension, "Career & Finances");
    assert_eq!(blueprint.life_balance[3].rating, 4);
    assert_eq!(blueprint.life_balance[0].rating, 0);
}

#[test]
fn mentor_content_is_localized_with_english_fallback() {
    let totals = CategoryTotals {
        passion: 6,
        mission: 2,
        vocation: 1,
        profession: 0,
    };

    let english = analysis_for(&totals, Language::En)
        .ai_mentor
        .expect("mentor generated");
    let spanish = analysis_for(&totals, Language::Es)
        .ai_mentor
        .expect("mentor generated");
    let unknown_tag = analysis_for(&totals, Language::from_tag("pt-BR"))
        .ai_mentor
        .expect("mentor generated");

    assert_ne!(english.weekly_reflections, spanish.weekly_reflections);
    assert_eq!(english.weekly_reflections, unknown_tag.weekly_reflections);
    assert_eq!(english.monthly_goals, spanish.monthly_goals);
}

#[test]
fn every_archetype_generates_a_complete_tree() {
    for (index, category) in Category::ordered().into_iter().enumerate() {
        let mut totals = CategoryTotals::default();
        match category {
            Category::Passion => totals.passion = 9,
            Category::Mission => totals.mission = 9,
            Category::Vocation => totals.vocation = 9,
            Category::Profession => totals.profession = 9,
        }
        let analysis = analysis_for(&totals, Language::En);

        assert!(analysis.personality_insights.is_some(), "archetype {index}");
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
}

#[test]
fn insights_report_score_share_of_the_primary_pillar() {
    let totals = CategoryTotals {
        passion: 15,
        mission: 5,
        vocation: 0,
        profession: 0,
    };
    let insights = analysis_for(&totals, Language::En)
        .personality_insights
        .expect("insights generated");

    assert!(insights.headline.starts_with("Creative Enthusiast"));
    assert!(insights
        .observations
        .iter()
        .any(|sentence| sentence.contains("(75%)")));
}
