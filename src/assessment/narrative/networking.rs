use super::super::domain::Category;
use super::views::{NetworkingContact, NetworkingStrategy};

/// Who to meet and where, fixed per archetype.
pub(crate) fn networking_strategy(primary: Category) -> NetworkingStrategy {
    match primary {
        Category::Passion => NetworkingStrategy {
            target_industries: vec![
                "Design and branding",
                "Media and entertainment",
                "Consumer products",
            ],
            key_contacts: vec![
                NetworkingContact {
                    role: "Creative directors",
                    platform: "Behance / portfolio reviews",
                },
                NetworkingContact {
                    role: "Working freelancers in your medium",
                    platform: "Instagram and niche Discords",
                },
                NetworkingContact {
                    role: "In-house design leads",
                    platform: "LinkedIn",
                },
            ],
            event_types: vec![
                "Portfolio nights and critique groups",
                "Local maker and design meetups",
                "Industry showcases and festivals",
            ],
            online_communities: vec!["Dribbble", "r/design_critiques", "Creative-focused Slack groups"],
        },
        Category::Mission => NetworkingStrategy {
            target_industries: vec![
                "Nonprofits and foundations",
                "Public health and education",
                "Corporate social responsibility",
            ],
            key_contacts: vec![
                NetworkingContact {
                    role: "Program directors",
                    platform: "LinkedIn and sector conferences",
                },
                NetworkingContact {
                    role: "Grant officers and funders",
                    platform: "Foundation events",
                },
                NetworkingContact {
                    role: "Volunteer coordinators",
                    platform: "Local organizations, in person",
                },
            ],
            event_types: vec![
                "Cause-specific coalition meetings",
                "Nonprofit sector conferences",
                "Community town halls",
            ],
            online_communities: vec![
                "Idealist",
                "Social impact LinkedIn groups",
                "Mutual aid and organizing networks",
            ],
        },
        Category::Vocation => NetworkingStrategy {
            target_industries: vec![
                "Technology",
                "Healthcare",
                "Advanced manufacturing and infrastructure",
            ],
            key_contacts: vec![
                NetworkingContact {
                    role: "Senior practitioners in your specialty",
                    platform: "GitHub / professional forums",
                },
                NetworkingContact {
                    role: "Certification community peers",
                    platform: "Study groups and exam cohorts",
                },
                NetworkingContact {
                    role: "Engineering managers",
                    platform: "LinkedIn and conference hallways",
                },
            ],
            event_types: vec![
                "Technical conferences and workshops",
                "Professional association chapter meetings",
                "Hackathons and practice labs",
            ],
            online_communities: vec![
                "Stack Overflow",
                "Specialty subreddits and Discords",
                "Professional association forums",
            ],
        },
        Category::Profession => NetworkingStrategy {
            target_industries: vec![
                "Finance and consulting",
                "Enterprise software",
                "Operations-heavy businesses",
            ],
            key_contacts: vec![
                NetworkingContact {
                    role: "Hiring managers two levels up",
                    platform: "LinkedIn, warm introductions",
                },
                NetworkingContact {
                    role: "Executive recruiters",
                    platform: "Direct outreach",
                },
                NetworkingContact {
                    role: "Peers who changed companies recently",
                    platform: "Alumni networks",
                },
            ],
            event_types: vec![
                "Industry association dinners",
                "Executive breakfasts and panels",
                "Alumni networking events",
            ],
            online_communities: vec![
                "LinkedIn industry groups",
                "Fishbowl",
                "Function-specific professional communities",
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategies_name_contacts_with_platforms() {
        for category in Category::ordered() {
            let strategy = networking_strategy(category);
            assert_eq!(strategy.key_contacts.len(), 3);
            assert!(strategy
                .key_contacts
                .iter()
                .all(|contact| !contact.role.is_empty() && !contact.platform.is_empty()));
            assert!(!strategy.target_industries.is_empty());
            assert!(!strategy.event_types.is_empty());
            assert!(!strategy.online_communities.is_empty());
        }
    }
}
