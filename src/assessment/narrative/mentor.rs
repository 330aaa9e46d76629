use super::super::domain::{Category, Language};
use super::super::locale;
use super::views::{MentorGoal, MentorProgram};

/// AI-mentor content block. Reflection questions and tips are routed
/// through the locale table so the mentor speaks the respondent's
/// language; goal templates ship in English pending translation.
pub(crate) fn mentor_program(primary: Category, language: Language) -> MentorProgram {
    let weekly_reflections = (1..=4)
        .map(|n| locale::text(reflection_key(primary, n), language))
        .collect();

    let personalized_tips = (1..=3)
        .map(|n| locale::text(tip_key(primary, n), language))
        .collect();

    MentorProgram {
        weekly_reflections,
        monthly_goals: monthly_goals(primary),
        personalized_tips,
    }
}

const fn reflection_key(category: Category, n: u8) -> &'static str {
    match (category, n) {
        (Category::Passion, 1) => "mentor.passion.reflection.1",
        (Category::Passion, 2) => "mentor.passion.reflection.2",
        (Category::Passion, 3) => "mentor.passion.reflection.3",
        (Category::Passion, _) => "mentor.passion.reflection.4",
        (Category::Mission, 1) => "mentor.mission.reflection.1",
        (Category::Mission, 2) => "mentor.mission.reflection.2",
        (Category::Mission, 3) => "mentor.mission.reflection.3",
        (Category::Mission, _) => "mentor.mission.reflection.4",
        (Category::Vocation, 1) => "mentor.vocation.reflection.1",
        (Category::Vocation, 2) => "mentor.vocation.reflection.2",
        (Category::Vocation, 3) => "mentor.vocation.reflection.3",
        (Category::Vocation, _) => "mentor.vocation.reflection.4",
        (Category::Profession, 1) => "mentor.profession.reflection.1",
        (Category::Profession, 2) => "mentor.profession.reflection.2",
        (Category::Profession, 3) => "mentor.profession.reflection.3",
        (Category::Profession, _) => "mentor.profession.reflection.4",
    }
}

const fn tip_key(category: Category, n: u8) -> &'static str {
    match (category, n) {
        (Category::Passion, 1) => "mentor.passion.tip.1",
        (Category::Passion, 2) => "mentor.passion.tip.2",
        (Category::Passion, _) => "mentor.passion.tip.3",
        (Category::Mission, 1) => "mentor.mission.tip.1",
        (Category::Mission, 2) => "mentor.mission.tip.2",
        (Category::Mission, _) => "mentor.mission.tip.3",
        (Category::Vocation, 1) => "mentor.vocation.tip.1",
        (Category::Vocation, 2) => "mentor.vocation.tip.2",
        (Category::Vocation, _) => "mentor.vocation.tip.3",
        (Category::Profession, 1) => "mentor.profession.tip.1",
        (Category::Profession, 2) => "mentor.profession.tip.2",
        (Category::Profession, _) => "mentor.profession.tip.3",
    }
}

fn monthly_goals(primary: Category) -> Vec<MentorGoal> {
    match primary {
        Category::Passion => vec![
            MentorGoal {
                objective: "Finish and publish one substantial creative piece",
                actions: vec![
                    "Define 'done' in writing on day one",
                    "Work the piece in four weekly sessions",
                    "Publish on the last day of the month regardless of doubts",
                ],
                success_metrics: vec!["Piece published", "Four sessions logged"],
            },
            MentorGoal {
                objective: "Grow your creative circle by three people",
                actions: vec![
                    "Comment substantively on work you admire weekly",
                    "Attend one critique or portfolio event",
                    "Offer one trade: your skill for theirs",
                ],
                success_metrics: vec!["Three new ongoing conversations", "One collaboration seeded"],
            },
        ],
        Category::Mission => vec![
            MentorGoal {
                objective: "Produce one measurable unit of impact",
                actions: vec![
                    "Pick a single beneficiary group and a single metric",
                    "Deliver four weekly contributions toward it",
                    "Record the before and after honestly",
                ],
                success_metrics: vec!["Metric moved and documented", "Four contributions logged"],
            },
            MentorGoal {
                objective: "Map the organizations doing your cause's best work",
                actions: vec![
                    "Profile five organizations and their funding models",
                    "Talk to one insider at each",
                ],
                success_metrics: vec!["Five profiles written", "Five conversations held"],
            },
        ],
        Category::Vocation => vec![
            MentorGoal {
                objective: "Close one named gap in your core skill",
                actions: vec![
                    "Write down the gap and how you will know it closed",
                    "Practice it deliberately three times a week",
                    "Get one expert review of your progress",
                ],
                success_metrics: vec!["Twelve practice sessions", "Expert sign-off on the gap"],
            },
            MentorGoal {
                objective: "Make your expertise visible once",
                actions: vec![
                    "Write up one solved problem from your real work",
                    "Publish it where your professional community reads",
                ],
                success_metrics: vec!["One artifact published", "Three pieces of substantive feedback"],
            },
        ],
        Category::Profession => vec![
            MentorGoal {
                objective: "Bank one quantified, citable win",
                actions: vec![
                    "Choose the metric your role is actually judged on",
                    "Drive it visibly for the month",
                    "Write the result into your brag document",
                ],
                success_metrics: vec!["Metric improved with a number", "Result acknowledged in writing"],
            },
            MentorGoal {
                objective: "Strengthen your position in the market",
                actions: vec![
                    "Have three conversations with people who could hire you",
                    "Update your compensation research with current data",
                ],
                success_metrics: vec!["Three conversations completed", "A written view of your market rate"],
            },
        ],
    }
}
