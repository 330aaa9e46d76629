use super::domain::{AnswerSet, Category, Subcategory};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Every question presents exactly four options; option `i` (1-based)
/// resolves through index `i - 1` of the question's mapping row.
pub const QUESTION_OPTION_COUNT: usize = 4;

type MappingRow = [(Category, Subcategory); QUESTION_OPTION_COUNT];

static ANSWER_MAP: OnceLock<HashMap<u16, &'static MappingRow>> = OnceLock::new();

/// Mapping row for a question id, or `None` for ids the deck does not
/// contain (stale clients are expected to send some).
pub fn answer_options(question_id: u16) -> Option<&'static MappingRow> {
    answer_map().get(&question_id).copied()
}

/// Number of questions in the published deck.
pub fn question_count() -> usize {
    answer_map().len()
}

/// Resolve a raw answer set into `(Category, Subcategory)` pairs, one per
/// answer that maps successfully. Unknown question ids and out-of-range
/// ordinals contribute nothing; this never fails.
pub fn map_answers(answers: &AnswerSet) -> Vec<(Category, Subcategory)> {
    let map = answer_map();
    let mut pairs = Vec::with_capacity(answers.len());

    for (question_id, ordinal) in answers.entries() {
        let Some(options) = map.get(&question_id) else {
            continue;
        };
        if ordinal == 0 {
            continue;
        }
        if let Some(pair) = options.get(usize::from(ordinal) - 1) {
            pairs.push(*pair);
        }
    }

    pairs
}

fn answer_map() -> &'static HashMap<u16, &'static MappingRow> {
    ANSWER_MAP.get_or_init(|| {
        let mut map = HashMap::with_capacity(QUESTION_MAPPINGS.len());
        for (question_id, row) in QUESTION_MAPPINGS {
            map.insert(*question_id, row);
        }
        map
    })
}

const QUESTION_MAPPINGS: &[(u16, MappingRow)] = &[
    (
        1,
        [
            (Category::Passion, Subcategory::CreativeArts),
            (Category::Mission, Subcategory::HelpingOthers),
            (Category::Vocation, Subcategory::Technology),
            (Category::Profession, Subcategory::Entrepreneurship),
        ],
    ),
    (
        2,
        [
            (Category::Mission, Subcategory::Teaching),
            (Category::Passion, Subcategory::CreativeArts),
            (Category::Profession, Subcategory::Analysis),
            (Category::Vocation, Subcategory::Craftsmanship),
        ],
    ),
    (
        3,
        [
            (Category::Vocation, Subcategory::ProblemSolving),
            (Category::Profession, Subcategory::Leadership),
            (Category::Passion, Subcategory::Innovation),
            (Category::Mission, Subcategory::Communication),
        ],
    ),
    (
        4,
        [
            (Category::Profession, Subcategory::Entrepreneurship),
            (Category::Vocation, Subcategory::Analysis),
            (Category::Mission, Subcategory::HelpingOthers),
            (Category::Passion, Subcategory::CreativeArts),
        ],
    ),
    (
        5,
        [
            (Category::Passion, Subcategory::CreativeArts),
            (Category::Vocation, Subcategory::Craftsmanship),
            (Category::Profession, Subcategory::Leadership),
            (Category::Mission, Subcategory::Teaching),
        ],
    ),
    (
        6,
        [
            (Category::Mission, Subcategory::HelpingOthers),
            (Category::Profession, Subcategory::Communication),
            (Category::Passion, Subcategory::Innovation),
            (Category::Vocation, Subcategory::Technology),
        ],
    ),
    (
        7,
        [
            (Category::Vocation, Subcategory::Technology),
            (Category::Passion, Subcategory::CreativeArts),
            (Category::Mission, Subcategory::Teaching),
            (Category::Profession, Subcategory::Analysis),
        ],
    ),
    (
        8,
        [
            (Category::Profession, Subcategory::Leadership),
            (Category::Mission, Subcategory::Communication),
            (Category::Vocation, Subcategory::ProblemSolving),
            (Category::Passion, Subcategory::Craftsmanship),
        ],
    ),
    (
        9,
        [
            (Category::Passion, Subcategory::CreativeArts),
            (Category::Profession, Subcategory::Entrepreneurship),
            (Category::Vocation, Subcategory::Analysis),
            (Category::Mission, Subcategory::HelpingOthers),
        ],
    ),
    (
        10,
        [
            (Category::Mission, Subcategory::Leadership),
            (Category::Vocation, Subcategory::Teaching),
            (Category::Profession, Subcategory::Communication),
            (Category::Passion, Subcategory::Innovation),
        ],
    ),
    (
        11,
        [
            (Category::Vocation, Subcategory::Craftsmanship),
            (Category::Mission, Subcategory::HelpingOthers),
            (Category::Passion, Subcategory::CreativeArts),
            (Category::Profession, Subcategory::Leadership),
        ],
    ),
    (
        12,
        [
            (Category::Profession, Subcategory::Analysis),
            (Category::Passion, Subcategory::Communication),
            (Category::Mission, Subcategory::Teaching),
            (Category::Vocation, Subcategory::ProblemSolving),
        ],
    ),
    (
        13,
        [
            (Category::Passion, Subcategory::CreativeArts),
            (Category::Mission, Subcategory::Leadership),
            (Category::Profession, Subcategory::Entrepreneurship),
            (Category::Vocation, Subcategory::Technology),
        ],
    ),
    (
        14,
        [
            (Category::Mission, Subcategory::HelpingOthers),
            (Category::Vocation, Subcategory::Analysis),
            (Category::Passion, Subcategory::Craftsmanship),
            (Category::Profession, Subcategory::Communication),
        ],
    ),
    (
        15,
        [
            (Category::Vocation, Subcategory::ProblemSolving),
            (Category::Profession, Subcategory::Entrepreneurship),
            (Category::Mission, Subcategory::Communication),
            (Category::Passion, Subcategory::CreativeArts),
        ],
    ),
    (
        16,
        [
            (Category::Profession, Subcategory::Leadership),
            (Category::Passion, Subcategory::Innovation),
            (Category::Vocation, Subcategory::Craftsmanship),
            (Category::Mission, Subcategory::Teaching),
        ],
    ),
    (
        17,
        [
            (Category::Passion, Subcategory::Innovation),
            (Category::Mission, Subcategory::HelpingOthers),
            (Category::Profession, Subcategory::Analysis),
            (Category::Vocation, Subcategory::Technology),
        ],
    ),
    (
        18,
        [
            (Category::Mission, Subcategory::Communication),
            (Category::Vocation, Subcategory::ProblemSolving),
            (Category::Passion, Subcategory::CreativeArts),
            (Category::Profession, Subcategory::Entrepreneurship),
        ],
    ),
    (
        19,
        [
            (Category::Vocation, Subcategory::Analysis),
            (Category::Profession, Subcategory::Leadership),
            (Category::Mission, Subcategory::Teaching),
            (Category::Passion, Subcategory::Innovation),
        ],
    ),
    (
        20,
        [
            (Category::Profession, Subcategory::Entrepreneurship),
            (Category::Mission, Subcategory::HelpingOthers),
            (Category::Vocation, Subcategory::Technology),
            (Category::Passion, Subcategory::Craftsmanship),
        ],
    ),
    (
        21,
        [
            (Category::Passion, Subcategory::Communication),
            (Category::Vocation, Subcategory::Craftsmanship),
            (Category::Profession, Subcategory::Leadership),
            (Category::Mission, Subcategory::HelpingOthers),
        ],
    ),
    (
        22,
        [
            (Category::Mission, Subcategory::Teaching),
            (Category::Profession, Subcategory::Analysis),
            (Category::Passion, Subcategory::CreativeArts),
            (Category::Vocation, Subcategory::ProblemSolving),
        ],
    ),
    (
        23,
        [
            (Category::Vocation, Subcategory::Technology),
            (Category::Passion, Subcategory::Innovation),
            (Category::Mission, Subcategory::Leadership),
            (Category::Profession, Subcategory::Communication),
        ],
    ),
    (
        24,
        [
            (Category::Profession, Subcategory::Analysis),
            (Category::Vocation, Subcategory::Craftsmanship),
            (Category::Mission, Subcategory::HelpingOthers),
            (Category::Passion, Subcategory::CreativeArts),
        ],
    ),
    (
        25,
        [
            (Category::Passion, Subcategory::Craftsmanship),
            (Category::Mission, Subcategory::Communication),
            (Category::Vocation, Subcategory::ProblemSolving),
            (Category::Profession, Subcategory::Entrepreneurship),
        ],
    ),
    (
        26,
        [
            (Category::Mission, Subcategory::HelpingOthers),
            (Category::Passion, Subcategory::CreativeArts),
            (Category::Profession, Subcategory::Leadership),
            (Category::Vocation, Subcategory::Analysis),
        ],
    ),
    (
        27,
        [
            (Category::Vocation, Subcategory::Teaching),
            (Category::Profession, Subcategory::Entrepreneurship),
            (Category::Passion, Subcategory::Innovation),
            (Category::Mission, Subcategory::Leadership),
        ],
    ),
    (
        28,
        [
            (Category::Profession, Subcategory::Communication),
            (Category::Mission, Subcategory::Teaching),
            (Category::Vocation, Subcategory::Technology),
            (Category::Passion, Subcategory::CreativeArts),
        ],
    ),
    // Question 29 repeats (mission, helping_others) on options 1 and 3.
    // Carried verbatim from the published deck; awaiting product
    // confirmation before any dedupe.
    (
        29,
        [
            (Category::Mission, Subcategory::HelpingOthers),
            (Category::Vocation, Subcategory::Craftsmanship),
            (Category::Mission, Subcategory::HelpingOthers),
            (Category::Profession, Subcategory::Entrepreneurship),
        ],
    ),
    (
        30,
        [
            (Category::Passion, Subcategory::Innovation),
            (Category::Vocation, Subcategory::ProblemSolving),
            (Category::Profession, Subcategory::Leadership),
            (Category::Mission, Subcategory::Communication),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_holds_thirty_questions_with_four_options_each() {
        assert_eq!(question_count(), 30);
        for id in 1..=30u16 {
            assert!(answer_options(id).is_some(), "question {id} missing");
        }
        assert!(answer_options(0).is_none());
        assert!(answer_options(31).is_none());
    }

    #[test]
    fn question_29_keeps_its_double_weighted_option() {
        let options = answer_options(29).expect("question 29 present");
        assert_eq!(options[0], (Category::Mission, Subcategory::HelpingOthers));
        assert_eq!(options[2], (Category::Mission, Subcategory::HelpingOthers));
        assert_ne!(options[1], options[0]);
    }

    #[test]
    fn map_answers_skips_unknown_questions_and_bad_ordinals() {
        let answers: AnswerSet = [(1, 1), (2, 0), (3, 5), (999, 2)].into_iter().collect();
        let pairs = map_answers(&answers);
        assert_eq!(pairs, vec![(Category::Passion, Subcategory::CreativeArts)]);
    }

    #[test]
    fn map_answers_resolves_one_based_ordinals() {
        let answers: AnswerSet = [(1, 4)].into_iter().collect();
        let pairs = map_answers(&answers);
        assert_eq!(
            pairs,
            vec![(Category::Profession, Subcategory::Entrepreneurship)]
        );
    }

    #[test]
    fn empty_answer_set_maps_to_nothing() {
        assert!(map_answers(&AnswerSet::new()).is_empty());
    }
}
