use super::super::domain::Category;
use super::views::PersonalityProfile;

/// Five-field working-style profile, fixed per archetype.
pub(crate) fn personality_profile(primary: Category) -> PersonalityProfile {
    match primary {
        Category::Passion => PersonalityProfile {
            cognitive_style: "Associative and imagistic: you think in possibilities and \
                              connections before constraints.",
            work_style: "Deep immersion in bursts. You do your best work in long unbroken \
                         sessions and resent fragmented calendars.",
            communication_style: "Expressive and concrete: you persuade with examples, \
                                  stories, and artifacts rather than abstractions.",
            decision_making: "Intuition-first. You decide quickly when something feels \
                              right and struggle when forced to justify in spreadsheets.",
            stress_management: "Stress shows up as creative block. Making something small \
                                and unrelated restores you faster than rest alone.",
        },
        Category::Mission => PersonalityProfile {
            cognitive_style: "Systems-and-people thinking: you trace how decisions ripple \
                              through the humans they touch.",
            work_style: "Steady and relational. You organize work around commitments to \
                         people and lose energy in purely transactional environments.",
            communication_style: "Warm and direct: you name what matters and invite others \
                                  into it rather than managing impressions.",
            decision_making: "Values-anchored. You test options against principle first \
                              and efficiency second, which makes you consistent under pressure.",
            stress_management: "You carry other people's problems home. Boundaries and \
                                scheduled recovery are skills you must practice deliberately.",
        },
        Category::Vocation => PersonalityProfile {
            cognitive_style: "Analytical and sequential: you decompose problems and \
                              distrust conclusions you cannot rebuild from parts.",
            work_style: "Methodical and autonomous. You want clear standards, then room \
                         to meet them without supervision.",
            communication_style: "Precise and economical: you say what you can support \
                                  and flag what you cannot.",
            decision_making: "Evidence-weighted. You gather until the picture stabilizes, \
                              and your slow answers are usually your best ones.",
            stress_management: "Stress appears as over-control. Naming what is genuinely \
                                yours to own releases the rest.",
        },
        Category::Profession => PersonalityProfile {
            cognitive_style: "Strategic and comparative: you instinctively rank options \
                              by payoff, risk, and timing.",
            work_style: "Goal-driven and visible. You work best against explicit targets \
                         with a scoreboard someone else can read.",
            communication_style: "Structured and audience-aware: you lead with the \
                                  conclusion and tailor detail to the room.",
            decision_making: "Expected-value thinking. You commit fast once the numbers \
                              favor a path and renegotiate when they stop.",
            stress_management: "Stress arrives when progress stalls. Breaking goals into \
                                shippable weekly wins keeps your momentum honest.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_complete_for_every_archetype() {
        for category in Category::ordered() {
            let profile = personality_profile(category);
            for field in [
                profile.cognitive_style,
                profile.work_style,
                profile.communication_style,
                profile.decision_making,
                profile.stress_management,
            ] {
                assert!(field.len() > 40, "sparse profile field for {category:?}");
            }
        }
    }
}
