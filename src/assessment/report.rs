use super::domain::{Category, Subcategory};
use super::narrative::views::DetailedAnalysis;
use super::scoring::{Recommendations, ScoreMatrix};
use serde::Serialize;

/// One matrix cell rendered for the persistence and HTTP layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubcategoryScoreEntry {
    pub subcategory: Subcategory,
    pub label: &'static str,
    pub count: u32,
}

/// One category's row of the matrix, with its derived total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScoresView {
    pub category: Category,
    pub label: &'static str,
    pub total: u32,
    pub scores: Vec<SubcategoryScoreEntry>,
}

/// Render the full matrix in canonical order: categories in declaration
/// order, each carrying all eleven subcategory cells.
pub fn matrix_view(matrix: &ScoreMatrix) -> Vec<CategoryScoresView> {
    Category::ordered()
        .into_iter()
        .map(|category| CategoryScoresView {
            category,
            label: category.label(),
            total: matrix.category_total(category),
            scores: Subcategory::ordered()
                .into_iter()
                .map(|subcategory| SubcategoryScoreEntry {
                    subcategory,
                    label: subcategory.label(),
                    count: matrix.count(category, subcategory),
                })
                .collect(),
        })
        .collect()
}

/// The engine's complete output for one respondent. `detailed_analysis`
/// is present only when the caller asked for an evaluation with a tier;
/// its sections are already filtered by the feature access gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub passion: u32,
    pub mission: u32,
    pub vocation: u32,
    pub profession: u32,
    pub overall: u32,
    pub primary_type: &'static str,
    pub secondary_type: &'static str,
    pub strengths: Vec<&'static str>,
    pub recommendations: Recommendations,
    pub subcategory_scores: Vec<CategoryScoresView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_analysis: Option<DetailedAnalysis>,
}
