use super::super::domain::Category;
use super::views::{CareerRoadmap, RoadmapPhase};

/// Named phase sequences for the primary archetype. Two tracks each: a
/// primary employment track and an independent/alternative track.
pub(crate) fn career_roadmaps(primary: Category) -> Vec<CareerRoadmap> {
    match primary {
        Category::Passion => vec![
            CareerRoadmap {
                title: "Creative Portfolio Track",
                phases: vec![
                    RoadmapPhase {
                        name: "Foundation",
                        duration: "Months 1-3",
                        activities: vec![
                            "Pick one medium and finish six small pieces in it",
                            "Publish every finished piece, imperfect or not",
                            "Study three working creatives one step ahead of you",
                        ],
                        skills: vec!["Core craft technique", "Finishing under self-set deadlines"],
                    },
                    RoadmapPhase {
                        name: "Momentum",
                        duration: "Months 4-9",
                        activities: vec![
                            "Take two paid briefs, however small",
                            "Build a portfolio site around your strongest theme",
                            "Ask for structured critique monthly",
                        ],
                        skills: vec!["Client communication", "Scoping and pricing", "Revision discipline"],
                    },
                    RoadmapPhase {
                        name: "Breakthrough",
                        duration: "Months 10-18",
                        activities: vec![
                            "Apply for roles or clients that scare you slightly",
                            "Develop a recognizable signature in your work",
                            "Teach what you know in one public format",
                        ],
                        skills: vec!["Creative direction", "Personal brand"],
                    },
                ],
            },
            CareerRoadmap {
                title: "In-House Creative Track",
                phases: vec![
                    RoadmapPhase {
                        name: "Entry",
                        duration: "Months 1-6",
                        activities: vec![
                            "Target junior design or content roles at product companies",
                            "Tailor three portfolio case studies to the industry",
                        ],
                        skills: vec!["Design tooling", "Working inside a brand system"],
                    },
                    RoadmapPhase {
                        name: "Establish",
                        duration: "Months 7-18",
                        activities: vec![
                            "Own one visible project end to end",
                            "Pair with senior creatives on direction work",
                        ],
                        skills: vec!["Cross-team collaboration", "Presenting creative decisions"],
                    },
                ],
            },
        ],
        Category::Mission => vec![
            CareerRoadmap {
                title: "Impact Leadership Track",
                phases: vec![
                    RoadmapPhase {
                        name: "Ground Truth",
                        duration: "Months 1-3",
                        activities: vec![
                            "Volunteer inside the problem you care about, weekly",
                            "Interview five people doing the work professionally",
                            "Write a one-page thesis on where you can help most",
                        ],
                        skills: vec!["Field knowledge", "Listening before prescribing"],
                    },
                    RoadmapPhase {
                        name: "Professionalize",
                        duration: "Months 4-9",
                        activities: vec![
                            "Take a coordinator or program role, paid or fellowship",
                            "Learn the funding mechanics of your sector",
                            "Ship one measurable improvement to an existing program",
                        ],
                        skills: vec!["Program operations", "Grant literacy", "Outcome measurement"],
                    },
                    RoadmapPhase {
                        name: "Lead",
                        duration: "Months 10-18",
                        activities: vec![
                            "Own a program budget and its reported outcomes",
                            "Build relationships with three funders",
                        ],
                        skills: vec!["Program leadership", "Fundraising"],
                    },
                ],
            },
            CareerRoadmap {
                title: "Corporate Impact Track",
                phases: vec![
                    RoadmapPhase {
                        name: "Bridge",
                        duration: "Months 1-6",
                        activities: vec![
                            "Join or start your employer's social impact initiative",
                            "Get fluent in ESG reporting basics",
                        ],
                        skills: vec!["Corporate navigation", "Impact reporting"],
                    },
                    RoadmapPhase {
                        name: "Transition",
                        duration: "Months 7-18",
                        activities: vec![
                            "Move into a dedicated CSR, ESG, or foundation role",
                            "Publish one case study of a program you helped run",
                        ],
                        skills: vec!["Stakeholder management", "Program strategy"],
                    },
                ],
            },
        ],
        Category::Vocation => vec![
            CareerRoadmap {
                title: "Deep Expertise Track",
                phases: vec![
                    RoadmapPhase {
                        name: "Fundamentals",
                        duration: "Months 1-4",
                        activities: vec![
                            "Choose one specialization and one respected certification",
                            "Practice the core skill daily on a fixed schedule",
                            "Find a mentor who will review your work honestly",
                        ],
                        skills: vec!["Foundational theory", "Practice discipline"],
                    },
                    RoadmapPhase {
                        name: "Application",
                        duration: "Months 5-10",
                        activities: vec![
                            "Take on real problems slightly past your comfort level",
                            "Document solutions publicly as you go",
                            "Sit the certification exam",
                        ],
                        skills: vec!["Applied problem solving", "Technical writing", "Credentialing"],
                    },
                    RoadmapPhase {
                        name: "Recognition",
                        duration: "Months 11-18",
                        activities: vec![
                            "Specialize further where demand is thinnest",
                            "Speak or publish once in a professional venue",
                        ],
                        skills: vec!["Specialist judgment", "Professional visibility"],
                    },
                ],
            },
            CareerRoadmap {
                title: "Consulting Craft Track",
                phases: vec![
                    RoadmapPhase {
                        name: "Prove",
                        duration: "Months 1-6",
                        activities: vec![
                            "Solve three problems for real clients, even at cost",
                            "Turn each into a written case study",
                        ],
                        skills: vec!["Scoping", "Delivering unsupervised"],
                    },
                    RoadmapPhase {
                        name: "Price",
                        duration: "Months 7-18",
                        activities: vec![
                            "Raise rates with every second engagement",
                            "Build referral loops with adjacent specialists",
                        ],
                        skills: vec!["Pricing", "Pipeline building"],
                    },
                ],
            },
        ],
        Category::Profession => vec![
            CareerRoadmap {
                title: "Corporate Ascent Track",
                phases: vec![
                    RoadmapPhase {
                        name: "Position",
                        duration: "Months 1-3",
                        activities: vec![
                            "Map the two roles above yours and what they require",
                            "Rewrite your resume around quantified outcomes",
                            "Tell your manager exactly what you are aiming for",
                        ],
                        skills: vec!["Self-positioning", "Outcome framing"],
                    },
                    RoadmapPhase {
                        name: "Perform",
                        duration: "Months 4-9",
                        activities: vec![
                            "Own one initiative with board-visible results",
                            "Build alliances outside your own function",
                            "Collect written recognition as it happens",
                        ],
                        skills: vec!["Cross-functional leadership", "Executive communication"],
                    },
                    RoadmapPhase {
                        name: "Promote",
                        duration: "Months 10-18",
                        activities: vec![
                            "Interview internally and externally in the same season",
                            "Negotiate from competing options, not hope",
                        ],
                        skills: vec!["Negotiation", "Market awareness"],
                    },
                ],
            },
            CareerRoadmap {
                title: "Portfolio Career Track",
                phases: vec![
                    RoadmapPhase {
                        name: "Diversify",
                        duration: "Months 1-6",
                        activities: vec![
                            "Add one income stream beside the day job",
                            "Systematize your week so neither stream starves",
                        ],
                        skills: vec!["Time portfolio management", "Basic bookkeeping"],
                    },
                    RoadmapPhase {
                        name: "Rebalance",
                        duration: "Months 7-18",
                        activities: vec![
                            "Double down on the stream with the best return on hours",
                            "Decide deliberately what the day job is now for",
                        ],
                        skills: vec!["Capital allocation", "Strategic patience"],
                    },
                ],
            },
        ],
    }
}
