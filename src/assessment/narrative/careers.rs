use super::super::domain::Category;
use super::views::{CareerMatch, CareerMatchReport};

/// Career fits for the primary archetype, split into high and medium
/// tiers. All figures are static per-archetype table data; salary ranges
/// are annual USD bands refreshed with the content deck, not computed.
pub(crate) fn career_matches(primary: Category) -> CareerMatchReport {
    CareerMatchReport {
        high_fit: high_fit_matches(primary),
        medium_fit: medium_fit_matches(primary),
    }
}

fn high_fit_matches(primary: Category) -> Vec<CareerMatch> {
    match primary {
        Category::Passion => vec![
            CareerMatch {
                title: "UX / Visual Designer",
                match_score: 95,
                description: "Shape how digital products look, feel, and behave, from first sketch to shipped interface.",
                skills: vec!["Design systems", "Typography", "Prototyping"],
                growth_outlook: "Strong demand as every product organization builds an in-house design practice.",
                salary_range: "$65,000 - $110,000",
            },
            CareerMatch {
                title: "Content Creator",
                match_score: 91,
                description: "Build an audience around work you would make anyway: writing, video, audio, or all three.",
                skills: vec!["Storytelling", "Video editing", "Audience growth"],
                growth_outlook: "Creator-economy tooling keeps lowering the cost of going independent.",
                salary_range: "$45,000 - $95,000",
            },
            CareerMatch {
                title: "Art Director",
                match_score: 88,
                description: "Set the visual direction for campaigns and brands, then guide a team to realize it.",
                skills: vec!["Concept development", "Brand identity", "Creative direction"],
                growth_outlook: "Senior creative leadership stays scarce relative to production talent.",
                salary_range: "$70,000 - $120,000",
            },
        ],
        Category::Mission => vec![
            CareerMatch {
                title: "Nonprofit Program Director",
                match_score: 95,
                description: "Own a program end to end: funding, delivery, and the outcomes it exists to produce.",
                skills: vec!["Program design", "Grant writing", "Stakeholder management"],
                growth_outlook: "Steady demand; impact measurement skills set candidates apart.",
                salary_range: "$55,000 - $95,000",
            },
            CareerMatch {
                title: "Social Impact Consultant",
                match_score: 91,
                description: "Help companies and foundations turn good intentions into measurable programs.",
                skills: vec!["Impact measurement", "Strategy", "Facilitation"],
                growth_outlook: "ESG and CSR budgets keep pulling mission work into the private sector.",
                salary_range: "$65,000 - $115,000",
            },
            CareerMatch {
                title: "Community Health Coordinator",
                match_score: 88,
                description: "Connect underserved communities with the health resources they are entitled to.",
                skills: vec!["Outreach", "Case coordination", "Public health literacy"],
                growth_outlook: "Public health investment continues to expand community-based roles.",
                salary_range: "$45,000 - $70,000",
            },
        ],
        Category::Vocation => vec![
            CareerMatch {
                title: "Software Engineer",
                match_score: 95,
                description: "Build and maintain the systems everything else runs on; depth of craft is the career.",
                skills: vec!["System design", "Debugging", "Code review"],
                growth_outlook: "Durable demand for engineers who own problems rather than tickets.",
                salary_range: "$85,000 - $160,000",
            },
            CareerMatch {
                title: "Data Analyst",
                match_score: 91,
                description: "Turn raw operational data into decisions people actually make differently.",
                skills: vec!["SQL", "Statistics", "Data storytelling"],
                growth_outlook: "Every function is becoming data-literate and needs translators.",
                salary_range: "$60,000 - $105,000",
            },
            CareerMatch {
                title: "Clinical Specialist",
                match_score: 88,
                description: "Apply deep procedural expertise where precision is non-negotiable.",
                skills: vec!["Clinical protocols", "Documentation", "Patient communication"],
                growth_outlook: "Healthcare specialization outpaces general staffing growth.",
                salary_range: "$70,000 - $115,000",
            },
        ],
        Category::Profession => vec![
            CareerMatch {
                title: "Product Manager",
                match_score: 95,
                description: "Sit at the intersection of business, users, and engineering and decide what ships.",
                skills: vec!["Prioritization", "Stakeholder alignment", "Market analysis"],
                growth_outlook: "The default leadership track in product companies keeps widening.",
                salary_range: "$90,000 - $155,000",
            },
            CareerMatch {
                title: "Management Consultant",
                match_score: 91,
                description: "Parachute into hard business problems, structure them, and leave a plan behind.",
                skills: vec!["Structured problem solving", "Financial modeling", "Executive communication"],
                growth_outlook: "Advisory demand tracks economic change, and change is constant.",
                salary_range: "$85,000 - $150,000",
            },
            CareerMatch {
                title: "Financial Analyst",
                match_score: 88,
                description: "Model the numbers behind every serious decision a business makes.",
                skills: vec!["Forecasting", "Valuation", "Spreadsheet craft"],
                growth_outlook: "Finance remains the most portable corporate skill set.",
                salary_range: "$65,000 - $110,000",
            },
        ],
    }
}

fn medium_fit_matches(primary: Category) -> Vec<CareerMatch> {
    match primary {
        Category::Passion => vec![
            CareerMatch {
                title: "Marketing Creative",
                match_score: 78,
                description: "Apply craft to commercial briefs; more constraints, steadier paychecks.",
                skills: vec!["Copywriting", "Campaign concepts", "Brand voice"],
                growth_outlook: "Reliable path while in-house creative teams keep growing.",
                salary_range: "$50,000 - $90,000",
            },
            CareerMatch {
                title: "Game Artist",
                match_score: 74,
                description: "Build the worlds players inhabit, inside a production pipeline.",
                skills: vec!["2D/3D art", "Pipeline tools", "Iteration under feedback"],
                growth_outlook: "Competitive but expanding with the games industry overall.",
                salary_range: "$55,000 - $100,000",
            },
            CareerMatch {
                title: "Interior Designer",
                match_score: 71,
                description: "Design physical spaces people live and work in, client by client.",
                skills: vec!["Spatial planning", "Client management", "Material knowledge"],
                growth_outlook: "Cyclical with construction, strong at the premium end.",
                salary_range: "$45,000 - $85,000",
            },
        ],
        Category::Mission => vec![
            CareerMatch {
                title: "Teacher",
                match_score: 78,
                description: "Direct, daily impact on the people whose trajectories matter most.",
                skills: vec!["Curriculum design", "Classroom leadership", "Assessment"],
                growth_outlook: "Perennial demand, strongest in STEM and special education.",
                salary_range: "$42,000 - $75,000",
            },
            CareerMatch {
                title: "Fundraising Manager",
                match_score: 74,
                description: "Keep mission-driven organizations solvent; relationships are the craft.",
                skills: vec!["Donor relations", "Campaign planning", "CRM fluency"],
                growth_outlook: "Experienced fundraisers are chronically scarce in the sector.",
                salary_range: "$50,000 - $90,000",
            },
            CareerMatch {
                title: "Policy Analyst",
                match_score: 71,
                description: "Change systems instead of symptoms by shaping the rules themselves.",
                skills: vec!["Research", "Briefing", "Quantitative analysis"],
                growth_outlook: "Stable demand across government and advocacy organizations.",
                salary_range: "$55,000 - $95,000",
            },
        ],
        Category::Vocation => vec![
            CareerMatch {
                title: "Quality Engineer",
                match_score: 78,
                description: "Make reliability a discipline rather than an accident.",
                skills: vec!["Test design", "Automation", "Root-cause analysis"],
                growth_outlook: "Grows with regulatory pressure and system complexity.",
                salary_range: "$65,000 - $110,000",
            },
            CareerMatch {
                title: "Technical Writer",
                match_score: 74,
                description: "Turn expert knowledge into documentation people can actually use.",
                skills: vec!["Information architecture", "Plain language", "Tooling"],
                growth_outlook: "Developer-facing products keep raising the bar for docs.",
                salary_range: "$55,000 - $95,000",
            },
            CareerMatch {
                title: "Systems Administrator",
                match_score: 71,
                description: "Own the infrastructure layer where mistakes are expensive and skill shows.",
                skills: vec!["Networking", "Scripting", "Incident response"],
                growth_outlook: "Shifting toward cloud platform roles; fundamentals still transfer.",
                salary_range: "$55,000 - $100,000",
            },
        ],
        Category::Profession => vec![
            CareerMatch {
                title: "Sales Director",
                match_score: 78,
                description: "Carry the number; compensation follows performance more directly than anywhere else.",
                skills: vec!["Pipeline management", "Negotiation", "Team coaching"],
                growth_outlook: "Proven quota-carriers are always hirable in any market.",
                salary_range: "$90,000 - $180,000",
            },
            CareerMatch {
                title: "Operations Manager",
                match_score: 74,
                description: "Make the machine run smoother every quarter than the last.",
                skills: vec!["Process design", "Vendor management", "Metrics"],
                growth_outlook: "Operational excellence roles grow with company scale.",
                salary_range: "$60,000 - $105,000",
            },
            CareerMatch {
                title: "Business Development Lead",
                match_score: 71,
                description: "Open doors and structure the partnerships that move the top line.",
                skills: vec!["Prospecting", "Deal structuring", "Relationship building"],
                growth_outlook: "Expands whenever companies look beyond organic growth.",
                salary_range: "$70,000 - $130,000",
            },
        ],
    }
}
