use super::super::domain::Category;
use super::views::MarketInsights;

/// Labor-market context for the primary archetype. Refreshed with the
/// content deck; nothing here is computed from scores.
pub(crate) fn market_insights(primary: Category) -> MarketInsights {
    match primary {
        Category::Passion => MarketInsights {
            industry_trends: vec![
                "Brands shifting budget from agencies to in-house creative teams",
                "Short-form video dominating content distribution",
                "AI tooling compressing production work, raising the value of taste",
            ],
            emerging_roles: vec![
                "Brand Experience Designer",
                "AI Art Director",
                "Community Content Lead",
            ],
            in_demand_skills: vec![
                "Motion design",
                "Narrative strategy",
                "Multi-platform content planning",
            ],
            salary_trend: "Creative compensation is bifurcating: commodity production is flat \
                           while directional and brand-level roles keep climbing.",
        },
        Category::Mission => MarketInsights {
            industry_trends: vec![
                "Impact measurement becoming a funding prerequisite",
                "Corporate ESG teams hiring from the nonprofit sector",
                "Climate adaptation programs expanding at every level of government",
            ],
            emerging_roles: vec![
                "ESG Program Manager",
                "Climate Resilience Coordinator",
                "Impact Data Analyst",
            ],
            in_demand_skills: vec![
                "Outcome evaluation",
                "Grant and program compliance",
                "Cross-sector partnership building",
            ],
            salary_trend: "Mission-sector pay still trails the private sector, but the gap \
                           narrows sharply for roles that pair purpose with measurement skills.",
        },
        Category::Vocation => MarketInsights {
            industry_trends: vec![
                "Employers prioritizing demonstrated skill over credentials",
                "Automation absorbing routine work and premium-pricing deep expertise",
                "Remote work widening the market for specialized practitioners",
            ],
            emerging_roles: vec![
                "Platform Reliability Engineer",
                "Applied AI Specialist",
                "Healthcare Technology Analyst",
            ],
            in_demand_skills: vec![
                "Cloud infrastructure",
                "Data fluency",
                "Regulated-industry domain knowledge",
            ],
            salary_trend: "Specialist premiums keep widening: the gap between median and \
                           expert compensation grows every year in technical fields.",
        },
        Category::Profession => MarketInsights {
            industry_trends: vec![
                "Flatter organizations concentrating leverage in fewer leadership roles",
                "Compensation transparency changing how offers are negotiated",
                "Cross-functional operators outpacing single-track managers",
            ],
            emerging_roles: vec![
                "Chief of Staff",
                "Revenue Operations Lead",
                "Strategy and Transformation Manager",
            ],
            in_demand_skills: vec![
                "Financial acumen",
                "Change management",
                "Data-driven decision making",
            ],
            salary_trend: "Leadership-track compensation increasingly concentrates in equity \
                           and bonus; base salaries alone understate the real spread.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_archetype_has_full_market_context() {
        for category in Category::ordered() {
            let insights = market_insights(category);
            assert_eq!(insights.industry_trends.len(), 3);
            assert_eq!(insights.emerging_roles.len(), 3);
            assert_eq!(insights.in_demand_skills.len(), 3);
            assert!(!insights.salary_trend.is_empty());
        }
    }
}
