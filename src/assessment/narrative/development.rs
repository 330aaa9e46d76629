use super::super::domain::Category;
use super::super::scoring::CategoryTotals;
use super::views::{DevelopmentArea, DevelopmentPriority};

/// Growth gaps per pillar on a 0-10 scale. `current` is `score / 10`
/// (integer floor) capped at 10; `target` sits two levels above, also
/// capped. Pillars at or past the completeness threshold are considered
/// developed and omitted. Priority follows the percentage gap between
/// target and current.
pub(crate) fn development_areas(
    totals: &CategoryTotals,
    completeness_threshold: u8,
    gap_priority_threshold: u8,
) -> Vec<DevelopmentArea> {
    let mut areas = Vec::with_capacity(Category::COUNT);

    for category in Category::ordered() {
        let score = totals.get(category);
        let current = (score / 10).min(10) as u8;
        if current >= completeness_threshold {
            continue;
        }

        let target = (current + 2).min(10);
        let gap_pct = (target - current) * 10;
        let priority = if gap_pct > gap_priority_threshold {
            DevelopmentPriority::High
        } else {
            DevelopmentPriority::Medium
        };

        areas.push(DevelopmentArea {
            area: area_name(category),
            current_level: current,
            target_level: target,
            priority,
        });
    }

    areas
}

const fn area_name(category: Category) -> &'static str {
    match category {
        Category::Passion => "Creative Expression",
        Category::Mission => "Purpose Alignment",
        Category::Vocation => "Technical Mastery",
        Category::Profession => "Career Capital",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_derive_from_score_floor_division() {
        let totals = CategoryTotals {
            passion: 10,
            mission: 10,
            vocation: 3,
            profession: 1,
        };
        let areas = development_areas(&totals, 8, 20);

        let vocation = areas
            .iter()
            .find(|area| area.area == "Technical Mastery")
            .expect("vocation area present");
        assert_eq!(vocation.current_level, 0);
        assert_eq!(vocation.target_level, 2);
        assert_eq!(vocation.priority, DevelopmentPriority::Medium);
    }

    #[test]
    fn developed_pillars_are_omitted() {
        let totals = CategoryTotals {
            passion: 85,
            mission: 4,
            vocation: 4,
            profession: 4,
        };
        let areas = development_areas(&totals, 8, 20);
        assert_eq!(areas.len(), 3);
        assert!(areas.iter().all(|area| area.area != "Creative Expression"));
    }

    #[test]
    fn target_never_exceeds_the_scale() {
        let totals = CategoryTotals {
            passion: 75,
            mission: 0,
            vocation: 0,
            profession: 0,
        };
        let areas = development_areas(&totals, 8, 20);
        let passion = areas
            .iter()
            .find(|area| area.area == "Creative Expression")
            .expect("passion below threshold");
        assert_eq!(passion.current_level, 7);
        assert_eq!(passion.target_level, 9);
    }

    #[test]
    fn areas_follow_pillar_declaration_order() {
        let totals = CategoryTotals::default();
        let areas = development_areas(&totals, 8, 20);
        let names: Vec<&str> = areas.iter().map(|area| area.area).collect();
        assert_eq!(
            names,
            vec![
                "Creative Expression",
                "Purpose Alignment",
                "Technical Mastery",
                "Career Capital",
            ]
        );
    }
}
