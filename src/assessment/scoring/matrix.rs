use super::super::domain::{Category, Subcategory};

/// Dense category x subcategory frequency matrix. Every one of the 44
/// cells exists from construction; the matrix is never sparse, so views
/// and totals can iterate the full cross-product without presence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreMatrix {
    cells: [[u32; Subcategory::COUNT]; Category::COUNT],
}

/// One flattened matrix cell. Subcategories are per-category counters,
/// not globally unique keys; the same subcategory can surface once per
/// category when flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubcategoryScore {
    pub category: Category,
    pub subcategory: Subcategory,
    pub count: u32,
}

impl ScoreMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally mapped pairs into a fresh matrix.
    pub fn from_pairs(pairs: &[(Category, Subcategory)]) -> Self {
        let mut matrix = Self::new();
        for (category, subcategory) in pairs {
            matrix.record(*category, *subcategory);
        }
        matrix
    }

    pub fn record(&mut self, category: Category, subcategory: Subcategory) {
        self.cells[category.index()][subcategory.index()] += 1;
    }

    pub fn count(&self, category: Category, subcategory: Subcategory) -> u32 {
        self.cells[category.index()][subcategory.index()]
    }

    pub fn category_total(&self, category: Category) -> u32 {
        self.cells[category.index()].iter().sum()
    }

    /// Per-category sums. Always recomputed from the cells; totals are
    /// never maintained incrementally.
    pub fn totals(&self) -> CategoryTotals {
        CategoryTotals {
            passion: self.category_total(Category::Passion),
            mission: self.category_total(Category::Mission),
            vocation: self.category_total(Category::Vocation),
            profession: self.category_total(Category::Profession),
        }
    }

    /// All 44 cells in canonical flattening order: category-major, then
    /// subcategory declaration order. Strength ranking relies on this
    /// order for its tie-break.
    pub fn flattened(&self) -> Vec<SubcategoryScore> {
        let mut scores = Vec::with_capacity(Category::COUNT * Subcategory::COUNT);
        for category in Category::ordered() {
            for subcategory in Subcategory::ordered() {
                scores.push(SubcategoryScore {
                    category,
                    subcategory,
                    count: self.count(category, subcategory),
                });
            }
        }
        scores
    }
}

/// Derived per-category sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    pub passion: u32,
    pub mission: u32,
    pub vocation: u32,
    pub profession: u32,
}

impl CategoryTotals {
    pub const fn get(&self, category: Category) -> u32 {
        match category {
            Category::Passion => self.passion,
            Category::Mission => self.mission,
            Category::Vocation => self.vocation,
            Category::Profession => self.profession,
        }
    }

    pub const fn overall(&self) -> u32 {
        self.passion + self.mission + self.vocation + self.profession
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_matrix_has_every_cell_at_zero() {
        let matrix = ScoreMatrix::new();
        let flattened = matrix.flattened();
        assert_eq!(flattened.len(), Category::COUNT * Subcategory::COUNT);
        assert!(flattened.iter().all(|cell| cell.count == 0));
        assert_eq!(matrix.totals().overall(), 0);
    }

    #[test]
    fn totals_match_the_number_of_recorded_pairs() {
        let pairs = vec![
            (Category::Passion, Subcategory::CreativeArts),
            (Category::Passion, Subcategory::CreativeArts),
            (Category::Mission, Subcategory::HelpingOthers),
            (Category::Vocation, Subcategory::Technology),
        ];
        let matrix = ScoreMatrix::from_pairs(&pairs);

        assert_eq!(matrix.count(Category::Passion, Subcategory::CreativeArts), 2);
        let totals = matrix.totals();
        assert_eq!(totals.passion, 2);
        assert_eq!(totals.mission, 1);
        assert_eq!(totals.vocation, 1);
        assert_eq!(totals.profession, 0);
        assert_eq!(totals.overall() as usize, pairs.len());
    }

    #[test]
    fn flattening_is_category_major_in_declaration_order() {
        let matrix = ScoreMatrix::new();
        let flattened = matrix.flattened();
        assert_eq!(flattened[0].category, Category::Passion);
        assert_eq!(flattened[0].subcategory, Subcategory::CreativeArts);
        assert_eq!(flattened[Subcategory::COUNT].category, Category::Mission);
        assert_eq!(
            flattened.last().map(|cell| (cell.category, cell.subcategory)),
            Some((Category::Profession, Subcategory::Craftsmanship))
        );
    }
}
