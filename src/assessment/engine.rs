use super::access::{apply_access, FeatureAccess};
use super::domain::{AnswerSet, Language, PremiumTier};
use super::mapping;
use super::narrative;
use super::report::{matrix_view, AssessmentResult};
use super::scoring::{build_recommendations, classify, top_strengths, ScoreMatrix};
use tracing::debug;

/// Rubric configuration for the assessment pipeline: list limits and the
/// development-area thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub strengths_limit: usize,
    pub careers_limit: usize,
    pub actions_limit: usize,
    /// Pillars whose 0-10 level reaches this are considered developed.
    pub completeness_threshold: u8,
    /// Percentage gap above which a development area is High priority.
    pub gap_priority_threshold: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strengths_limit: 3,
            careers_limit: 6,
            actions_limit: 4,
            completeness_threshold: 8,
            gap_priority_threshold: 20,
        }
    }
}

/// Stateless pipeline from raw answers to a scored, classified, and
/// optionally narrated result. Holds only immutable configuration, so a
/// single instance serves concurrent callers.
#[derive(Debug, Default)]
pub struct AssessmentEngine {
    config: EngineConfig,
}

impl AssessmentEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score an answer set: mapping, aggregation, classification,
    /// strengths, and recommendations. No narrative content is attached.
    pub fn score(&self, answers: &AnswerSet) -> AssessmentResult {
        let (result, _, _) = self.score_internal(answers);
        result
    }

    /// Score an answer set and attach the narrative analysis, filtered
    /// to the sections the tier is entitled to see.
    pub fn evaluate(
        &self,
        answers: &AnswerSet,
        tier: Option<PremiumTier>,
        language: Language,
    ) -> AssessmentResult {
        let (mut result, totals, classification) = self.score_internal(answers);

        let analysis =
            narrative::detailed_analysis(&classification, &totals, language, &self.config);
        let access = FeatureAccess::for_tier(tier);
        result.detailed_analysis = Some(apply_access(analysis, &access));

        result
    }

    fn score_internal(
        &self,
        answers: &AnswerSet,
    ) -> (
        AssessmentResult,
        super::scoring::CategoryTotals,
        super::scoring::Classification,
    ) {
        let pairs = mapping::map_answers(answers);
        debug!(
            submitted = answers.len(),
            mapped = pairs.len(),
            "scored answer set"
        );

        let matrix = ScoreMatrix::from_pairs(&pairs);
        let totals = matrix.totals();
        let classification = classify(&totals);

        let strengths = top_strengths(&matrix, self.config.strengths_limit);
        let recommendations = build_recommendations(
            classification.primary,
            classification.secondary,
            self.config.careers_limit,
            self.config.actions_limit,
        );

        let result = AssessmentResult {
            passion: totals.passion,
            mission: totals.mission,
            vocation: totals.vocation,
            profession: totals.profession,
            overall: classification.overall,
            primary_type: classification.primary_type(),
            secondary_type: classification.secondary_type(),
            strengths,
            recommendations,
            subcategory_scores: matrix_view(&matrix),
            detailed_analysis: None,
        };

        (result, totals, classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_never_attaches_narrative_content() {
        let engine = AssessmentEngine::default();
        let answers: AnswerSet = [(1, 1), (2, 2)].into_iter().collect();
        let result = engine.score(&answers);
        assert!(result.detailed_analysis.is_none());
        assert_eq!(result.overall, 2);
    }

    #[test]
    fn evaluate_always_attaches_a_gated_analysis() {
        let engine = AssessmentEngine::default();
        let answers: AnswerSet = [(1, 1)].into_iter().collect();
        let result = engine.evaluate(&answers, None, Language::En);
        let analysis = result.detailed_analysis.expect("analysis attached");
        assert!(analysis.personality_insights.is_some());
        assert!(analysis.success_blueprint.is_none());
    }
}
