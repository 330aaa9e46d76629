use super::super::domain::Category;
use super::views::InterviewPrep;

const COMMON_QUESTIONS: &[&str] = &[
    "Tell me about yourself.",
    "Why do you want this role?",
    "Describe a challenge you worked through recently.",
    "Where do you see yourself in five years?",
    "What questions do you have for us?",
];

const PREPARATION_CHECKLIST: &[&str] = &[
    "Research the company's product, customers, and latest news",
    "Prepare three stories in situation-action-result form",
    "Rehearse answers out loud, not just in your head",
    "Prepare two thoughtful questions for the interviewer",
    "Confirm logistics the day before: time, link or route, names",
];

const FOLLOW_UP_CHECKLIST: &[&str] = &[
    "Send a thank-you note within 24 hours referencing the conversation",
    "Note what you were asked while it is fresh",
    "Follow up once politely if you hear nothing within the stated window",
];

/// Interview preparation pack: shared fundamentals plus questions the
/// respondent's archetype tends to attract.
pub(crate) fn interview_prep(primary: Category) -> InterviewPrep {
    InterviewPrep {
        common_questions: COMMON_QUESTIONS.to_vec(),
        archetype_questions: archetype_questions(primary).to_vec(),
        preparation_checklist: PREPARATION_CHECKLIST.to_vec(),
        follow_up_checklist: FOLLOW_UP_CHECKLIST.to_vec(),
    }
}

const fn archetype_questions(category: Category) -> &'static [&'static str] {
    match category {
        Category::Passion => &[
            "Walk us through your portfolio's strongest piece.",
            "How do you handle feedback that asks you to change creative work you believe in?",
            "Tell us about a time constraints improved your work.",
            "How do you keep your output consistent when inspiration is absent?",
            "What does your personal creative practice look like?",
        ],
        Category::Mission => &[
            "Why does this organization's mission matter to you personally?",
            "Tell us about a time you advocated for someone without authority to do so.",
            "How do you measure impact in work like this?",
            "Describe a time your values conflicted with an instruction.",
            "How do you avoid burnout in emotionally demanding work?",
        ],
        Category::Vocation => &[
            "Walk us through the hardest technical problem you have solved.",
            "How do you keep your skills current?",
            "Tell us about a mistake that taught you something about your craft.",
            "How do you explain complex work to non-specialists?",
            "What do you do when the established procedure is wrong?",
        ],
        Category::Profession => &[
            "What measurable results are you proudest of?",
            "Tell us about a time you influenced a decision above your level.",
            "How do you prioritize when everything is urgent?",
            "Describe a negotiation you are proud of.",
            "What would your plan for the first ninety days here look like?",
        ],
    }
}
