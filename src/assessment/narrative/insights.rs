use super::super::domain::Category;
use super::super::scoring::{CategoryTotals, Classification};
use super::views::PersonalityInsights;

/// Prose summary of the classification, templated with score magnitude.
/// Pure over its inputs: identical scores always regenerate identical
/// sentences.
pub(crate) fn personality_insights(
    classification: &Classification,
    totals: &CategoryTotals,
) -> PersonalityInsights {
    let primary = classification.primary;
    let secondary = classification.secondary;

    let headline = format!(
        "{} with a {} undercurrent",
        primary.archetype(),
        secondary.archetype()
    );

    let mut observations = vec![base_observation(primary).to_string()];

    let primary_score = totals.get(primary);
    let overall = totals.overall();
    if overall > 0 {
        let pct = primary_score * 100 / overall;
        observations.push(format!(
            "The {} pillar is {} for you: {} of your {} scored answers landed there ({}%).",
            primary.label(),
            intensity(primary_score),
            primary_score,
            overall,
            pct
        ));
        observations.push(format!(
            "Your secondary {} signal means {}",
            secondary.label(),
            secondary_observation(secondary)
        ));
    } else {
        observations.push(
            "No answers were scored, so this profile reflects the default pillar \
             ordering rather than measured preferences."
                .to_string(),
        );
    }

    PersonalityInsights {
        headline,
        observations,
    }
}

fn intensity(score: u32) -> &'static str {
    if score >= 20 {
        "a defining theme"
    } else if score >= 12 {
        "a strong theme"
    } else if score >= 6 {
        "a clear theme"
    } else {
        "an emerging theme"
    }
}

const fn base_observation(category: Category) -> &'static str {
    match category {
        Category::Passion => {
            "You are at your best when the work itself is the reward: making, composing, \
             and expressing ideas that feel unmistakably yours."
        }
        Category::Mission => {
            "You are energized by consequences beyond yourself: work only feels real to \
             you when someone's life is better because it happened."
        }
        Category::Vocation => {
            "You build identity through competence: the steady, compounding satisfaction \
             of doing difficult things well."
        }
        Category::Profession => {
            "You treat your career as a system to be understood and played well: \
             positioning, momentum, and measurable wins matter to you."
        }
    }
}

const fn secondary_observation(category: Category) -> &'static str {
    match category {
        Category::Passion => {
            "you will not stay long anywhere that leaves no room for creative judgment."
        }
        Category::Mission => {
            "purpose is your tiebreaker; between two similar roles you will pick the one \
             that serves people more directly."
        }
        Category::Vocation => {
            "you want visible skill growth on any path you commit to, not just a title."
        }
        Category::Profession => {
            "you keep one eye on the market even when the work is fulfilling, and that \
             pragmatism protects you."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::scoring::classify;
    use super::*;

    #[test]
    fn insights_interpolate_score_magnitude() {
        let totals = CategoryTotals {
            passion: 12,
            mission: 6,
            vocation: 2,
            profession: 0,
        };
        let insights = personality_insights(&classify(&totals), &totals);
        assert_eq!(
            insights.headline,
            "Creative Enthusiast with a Purpose-Driven Leader undercurrent"
        );
        assert!(insights.observations[1].contains("a strong theme"));
        assert!(insights.observations[1].contains("(60%)"));
    }

    #[test]
    fn zero_score_profiles_still_produce_prose() {
        let totals = CategoryTotals::default();
        let insights = personality_insights(&classify(&totals), &totals);
        assert_eq!(insights.observations.len(), 2);
        assert!(insights.observations[1].contains("No answers were scored"));
    }
}
