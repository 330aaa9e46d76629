use super::super::domain::{Category, Subcategory};
use super::matrix::ScoreMatrix;
use serde::Serialize;

/// Derived text bundle pairing the primary and secondary pillars with
/// concrete next steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub description: String,
    pub careers: Vec<&'static str>,
    pub actions: Vec<&'static str>,
}

/// Top strengths across the flattened matrix, rendered as phrases.
///
/// Ranking deliberately ignores which category a count came from:
/// subcategories are per-category counters, so the same subcategory can
/// appear twice when it scored under two pillars. Positive cells only,
/// descending by count, ties resolved by the matrix flattening order via
/// the stable sort.
pub fn top_strengths(matrix: &ScoreMatrix, limit: usize) -> Vec<&'static str> {
    let mut cells = matrix.flattened();
    cells.retain(|cell| cell.count > 0);
    cells.sort_by(|a, b| b.count.cmp(&a.count));
    cells
        .into_iter()
        .take(limit)
        .map(|cell| strength_phrase(cell.subcategory))
        .collect()
}

pub const fn strength_phrase(subcategory: Subcategory) -> &'static str {
    match subcategory {
        Subcategory::CreativeArts => "Creative expression and original artistic vision",
        Subcategory::ProblemSolving => "Breaking complex problems into workable solutions",
        Subcategory::Leadership => "Rallying people around a shared direction",
        Subcategory::HelpingOthers => "Supporting people through meaningful change",
        Subcategory::Technology => "Fluency with technical tools and systems",
        Subcategory::Communication => "Making ideas land clearly across audiences",
        Subcategory::Analysis => "Finding the signal in messy information",
        Subcategory::Innovation => "Imagining what does not exist yet",
        Subcategory::Teaching => "Helping others learn and grow",
        Subcategory::Entrepreneurship => "Spotting opportunities and building on them",
        Subcategory::Craftsmanship => "Care and precision in hands-on work",
    }
}

/// Build the recommendation bundle: primary careers and actions first,
/// the secondary's appended, then truncated to the configured limits.
pub fn build_recommendations(
    primary: Category,
    secondary: Category,
    careers_limit: usize,
    actions_limit: usize,
) -> Recommendations {
    let careers: Vec<&'static str> = career_list(primary)
        .iter()
        .chain(career_list(secondary))
        .copied()
        .take(careers_limit)
        .collect();

    let actions: Vec<&'static str> = action_list(primary)
        .iter()
        .chain(action_list(secondary))
        .copied()
        .take(actions_limit)
        .collect();

    let description = format!(
        "Your responses center on {}, backed by {}. Careers at that intersection \
         give you the best odds of work that feels worth doing.",
        focus_phrase(primary),
        focus_phrase(secondary)
    );

    Recommendations {
        description,
        careers,
        actions,
    }
}

pub const fn focus_phrase(category: Category) -> &'static str {
    match category {
        Category::Passion => "the work you genuinely love",
        Category::Mission => "the difference you want to make in the world",
        Category::Vocation => "the craft you can be known for",
        Category::Profession => "the career value the market already rewards",
    }
}

const fn career_list(category: Category) -> &'static [&'static str] {
    match category {
        Category::Passion => &[
            "Graphic Designer",
            "Content Creator",
            "Art Director",
            "Creative Writer",
        ],
        Category::Mission => &[
            "Nonprofit Program Director",
            "Social Worker",
            "Community Organizer",
            "Public Health Advocate",
        ],
        Category::Vocation => &[
            "Software Engineer",
            "Data Analyst",
            "Registered Nurse",
            "Technical Specialist",
        ],
        Category::Profession => &[
            "Financial Analyst",
            "Marketing Manager",
            "Business Consultant",
            "Sales Director",
        ],
    }
}

const fn action_list(category: Category) -> &'static [&'static str] {
    match category {
        Category::Passion => &[
            "Build a portfolio of personal creative projects",
            "Block recurring studio time on your calendar each week",
            "Join a local or online creative community",
        ],
        Category::Mission => &[
            "Volunteer with an organization whose cause moves you",
            "Shortlist mission-driven employers in your region",
            "Mentor someone earlier on the path you have walked",
        ],
        Category::Vocation => &[
            "Pick one certification and schedule the exam date",
            "Set up a deliberate practice routine for your core skill",
            "Find a practitioner mentor a decade ahead of you",
        ],
        Category::Profession => &[
            "Refresh your resume around measurable outcomes",
            "Schedule three networking conversations this month",
            "Research salary bands for your next target role",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strengths_are_positive_sorted_and_capped() {
        let mut matrix = ScoreMatrix::new();
        for _ in 0..3 {
            matrix.record(Category::Passion, Subcategory::CreativeArts);
        }
        for _ in 0..2 {
            matrix.record(Category::Vocation, Subcategory::Technology);
        }
        matrix.record(Category::Mission, Subcategory::HelpingOthers);
        matrix.record(Category::Profession, Subcategory::Leadership);

        let strengths = top_strengths(&matrix, 3);
        assert_eq!(
            strengths,
            vec![
                strength_phrase(Subcategory::CreativeArts),
                strength_phrase(Subcategory::Technology),
                strength_phrase(Subcategory::HelpingOthers),
            ]
        );
    }

    #[test]
    fn strength_ties_follow_flattening_order() {
        let mut matrix = ScoreMatrix::new();
        // Same subcategory under two categories: both cells must surface,
        // the passion one first because it flattens earlier.
        matrix.record(Category::Profession, Subcategory::Leadership);
        matrix.record(Category::Passion, Subcategory::Craftsmanship);

        let strengths = top_strengths(&matrix, 3);
        assert_eq!(
            strengths,
            vec![
                strength_phrase(Subcategory::Craftsmanship),
                strength_phrase(Subcategory::Leadership),
            ]
        );
    }

    #[test]
    fn duplicate_subcategory_across_categories_counts_twice() {
        let mut matrix = ScoreMatrix::new();
        matrix.record(Category::Mission, Subcategory::HelpingOthers);
        matrix.record(Category::Mission, Subcategory::HelpingOthers);
        matrix.record(Category::Passion, Subcategory::HelpingOthers);

        let strengths = top_strengths(&matrix, 3);
        // Two distinct cells share the subcategory; both appear.
        assert_eq!(
            strengths,
            vec![
                strength_phrase(Subcategory::HelpingOthers),
                strength_phrase(Subcategory::HelpingOthers),
            ]
        );
    }

    #[test]
    fn empty_matrix_yields_no_strengths() {
        assert!(top_strengths(&ScoreMatrix::new(), 3).is_empty());
    }

    #[test]
    fn recommendations_concatenate_and_truncate() {
        let bundle = build_recommendations(Category::Passion, Category::Vocation, 6, 4);
        assert_eq!(bundle.careers.len(), 6);
        // Primary careers come first; the secondary fills the remainder.
        assert_eq!(bundle.careers[0], "Graphic Designer");
        assert_eq!(bundle.careers[4], "Software Engineer");
        assert_eq!(bundle.actions.len(), 4);
        assert_eq!(
            bundle.actions[3],
            "Pick one certification and schedule the exam date"
        );
        assert!(bundle.description.contains("the work you genuinely love"));
        assert!(bundle.description.contains("the craft you can be known for"));
    }
}
