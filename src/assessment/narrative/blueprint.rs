use super::super::domain::Category;
use super::super::scoring::CategoryTotals;
use super::views::{BlueprintPhase, LifeBalanceEntry, SuccessBlueprint};

/// Ninety-day success blueprint: three thirty-day phases, habits, and
/// confidence work fixed per archetype, plus a life-balance snapshot
/// seeded from the numeric pillar scores.
pub(crate) fn success_blueprint(primary: Category, totals: &CategoryTotals) -> SuccessBlueprint {
    SuccessBlueprint {
        phases: phases(primary),
        habit_tracker: habits(primary).to_vec(),
        confidence_exercises: confidence_exercises(primary).to_vec(),
        life_balance: life_balance(totals),
    }
}

fn life_balance(totals: &CategoryTotals) -> Vec<LifeBalanceEntry> {
    Category::ordered()
        .into_iter()
        .map(|category| LifeBalanceEntry {
            dimension: balance_dimension(category),
            rating: (totals.get(category) / 3).min(10) as u8,
        })
        .collect()
}

const fn balance_dimension(category: Category) -> &'static str {
    match category {
        Category::Passion => "Passion & Play",
        Category::Mission => "Impact & Service",
        Category::Vocation => "Mastery & Growth",
        Category::Profession => "Career & Finances",
    }
}

fn phases(primary: Category) -> Vec<BlueprintPhase> {
    match primary {
        Category::Passion => vec![
            BlueprintPhase {
                window: "Days 1-30",
                focus: "Reclaim a daily creative practice",
                activities: vec![
                    "Create for twenty minutes every day, no audience",
                    "Collect every idea in one place",
                    "Clear one physical space dedicated to making",
                ],
                milestones: vec!["Thirty consecutive practice days", "An idea backlog of twenty entries"],
            },
            BlueprintPhase {
                window: "Days 31-60",
                focus: "Finish and show",
                activities: vec![
                    "Choose one project and define its finish line",
                    "Share work-in-progress weekly with one trusted person",
                    "Study one master of your medium deliberately",
                ],
                milestones: vec!["One finished piece", "Four feedback conversations"],
            },
            BlueprintPhase {
                window: "Days 61-90",
                focus: "Put the work where opportunity can find it",
                activities: vec![
                    "Publish your strongest three pieces publicly",
                    "Apply to one open call, gig, or role",
                    "Plan the next quarter's single big project",
                ],
                milestones: vec!["Public portfolio live", "One application submitted"],
            },
        ],
        Category::Mission => vec![
            BlueprintPhase {
                window: "Days 1-30",
                focus: "Get proximate to the problem",
                activities: vec![
                    "Commit to a weekly volunteer shift",
                    "Keep a field journal of what you observe",
                    "List the organizations already working on it",
                ],
                milestones: vec!["Four shifts completed", "A written map of the landscape"],
            },
            BlueprintPhase {
                window: "Days 31-60",
                focus: "Contribute a skill, not just hours",
                activities: vec![
                    "Offer one professional skill to an organization",
                    "Interview three people doing this work full-time",
                    "Define the metric you would want to move",
                ],
                milestones: vec!["One skilled contribution delivered", "Three interviews done"],
            },
            BlueprintPhase {
                window: "Days 61-90",
                focus: "Decide your lane",
                activities: vec![
                    "Draft where you fit: role, sector, and first target",
                    "Apply or propose: one concrete step toward paid impact work",
                    "Set a quarterly review of impact versus intention",
                ],
                milestones: vec!["A one-page direction statement", "One application or proposal sent"],
            },
        ],
        Category::Vocation => vec![
            BlueprintPhase {
                window: "Days 1-30",
                focus: "Baseline and commit",
                activities: vec![
                    "Assess your skill honestly against a published standard",
                    "Design a weekly practice schedule you can keep",
                    "Choose the certification or benchmark you will pursue",
                ],
                milestones: vec!["Written self-assessment", "Twelve practice sessions logged"],
            },
            BlueprintPhase {
                window: "Days 31-60",
                focus: "Train against resistance",
                activities: vec![
                    "Work problems slightly above your level every week",
                    "Get expert review twice this month",
                    "Document what you learn as you go",
                ],
                milestones: vec!["Two expert reviews", "A visible body of working notes"],
            },
            BlueprintPhase {
                window: "Days 61-90",
                focus: "Test yourself in the open",
                activities: vec![
                    "Sit the exam or ship the benchmark project",
                    "Publish one write-up of real problem-solving",
                    "Plan the next skill layer",
                ],
                milestones: vec!["Credential earned or project shipped", "One public artifact"],
            },
        ],
        Category::Profession => vec![
            BlueprintPhase {
                window: "Days 1-30",
                focus: "Know your position",
                activities: vec![
                    "Audit your wins and write each with a number",
                    "Research compensation for your current and next role",
                    "Tell your manager your target in plain terms",
                ],
                milestones: vec!["Brag document started", "Market research completed"],
            },
            BlueprintPhase {
                window: "Days 31-60",
                focus: "Create visible leverage",
                activities: vec![
                    "Lead one initiative with cross-team visibility",
                    "Hold three networking conversations",
                    "Ask for explicit feedback from two senior voices",
                ],
                milestones: vec!["Initiative underway with a named metric", "Three conversations held"],
            },
            BlueprintPhase {
                window: "Days 61-90",
                focus: "Convert leverage into movement",
                activities: vec![
                    "Apply internally or externally while the wins are fresh",
                    "Rehearse your negotiation with a peer",
                    "Decide your walk-away terms before any offer arrives",
                ],
                milestones: vec!["At least one live opportunity", "Negotiation plan written"],
            },
        ],
    }
}

const fn habits(category: Category) -> &'static [&'static str] {
    match category {
        Category::Passion => &[
            "Daily twenty-minute creative session",
            "Weekly publish or share",
            "Idea capture within one minute of having it",
            "One gallery, film, or book for fuel each week",
        ],
        Category::Mission => &[
            "Weekly volunteer or service block",
            "Daily note: who did my work help today?",
            "Weekly boundary check: what am I carrying that is not mine?",
            "Monthly donation or advocacy action",
        ],
        Category::Vocation => &[
            "Deliberate practice three mornings a week",
            "Weekly learning log entry",
            "One question asked of someone better than you, weekly",
            "Monthly review of progress against the benchmark",
        ],
        Category::Profession => &[
            "Weekly brag-document update",
            "Two networking touches per week",
            "Daily top-three priority list before opening email",
            "Monthly compensation and market scan",
        ],
    }
}

const fn confidence_exercises(category: Category) -> &'static [&'static str] {
    match category {
        Category::Passion => &[
            "Show unfinished work to one person and survive it",
            "Re-read early work monthly to see the distance traveled",
            "Introduce yourself once this month as a maker, unqualified",
        ],
        Category::Mission => &[
            "Write down one life your work touched this month, concretely",
            "Accept thanks without deflecting it, out loud",
            "Tell the story of why this cause chose you, to one new person",
        ],
        Category::Vocation => &[
            "Keep an evidence file of solved problems; open it before hard tasks",
            "Explain one complex thing simply to a friend this week",
            "Volunteer one answer in a forum where experts gather",
        ],
        Category::Profession => &[
            "State your last win in one sentence with a number, to a mirror, then a person",
            "Ask one question in a meeting where seniors outnumber you",
            "Rehearse your ninety-second career story until it is boring to you",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blueprint_has_three_thirty_day_phases() {
        for category in Category::ordered() {
            let blueprint = success_blueprint(category, &CategoryTotals::default());
            assert_eq!(blueprint.phases.len(), 3);
            assert_eq!(blueprint.phases[0].window, "Days 1-30");
            assert_eq!(blueprint.phases[1].window, "Days 31-60");
            assert_eq!(blueprint.phases[2].window, "Days 61-90");
            assert!(blueprint
                .phases
                .iter()
                .all(|phase| !phase.activities.is_empty() && !phase.milestones.is_empty()));
            assert!(!blueprint.habit_tracker.is_empty());
            assert!(!blueprint.confidence_exercises.is_empty());
        }
    }

    #[test]
    fn life_balance_is_seeded_from_scores() {
        let totals = CategoryTotals {
            passion: 12,
            mission: 9,
            vocation: 3,
            profession: 0,
        };
        let blueprint = success_blueprint(Category::Passion, &totals);
        let ratings: Vec<u8> = blueprint
            .life_balance
            .iter()
            .map(|entry| entry.rating)
            .collect();
        assert_eq!(ratings, vec![4, 3, 1, 0]);
        assert_eq!(blueprint.life_balance[0].dimension, "Passion & Play");
    }

    #[test]
    fn life_balance_ratings_cap_at_ten() {
        let totals = CategoryTotals {
            passion: 99,
            mission: 0,
            vocation: 0,
            profession: 0,
        };
        let blueprint = success_blueprint(Category::Passion, &totals);
        assert_eq!(blueprint.life_balance[0].rating, 10);
    }
}
