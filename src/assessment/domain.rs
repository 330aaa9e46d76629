use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The four Ikigai pillars. Declaration order is canonical: it drives the
/// classifier tie-break and every serialized view, so it must never change
/// without migrating stored results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Passion,
    Mission,
    Vocation,
    Profession,
}

impl Category {
    pub const COUNT: usize = 4;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [Self::Passion, Self::Mission, Self::Vocation, Self::Profession]
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Passion => 0,
            Self::Mission => 1,
            Self::Vocation => 2,
            Self::Profession => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Passion => "Passion",
            Self::Mission => "Mission",
            Self::Vocation => "Vocation",
            Self::Profession => "Profession",
        }
    }

    /// Human-readable archetype assigned to respondents whose top pillar
    /// is this category.
    pub const fn archetype(self) -> &'static str {
        match self {
            Self::Passion => "Creative Enthusiast",
            Self::Mission => "Purpose-Driven Leader",
            Self::Vocation => "Skilled Expert",
            Self::Profession => "Career-Focused Achiever",
        }
    }
}

/// Trait buckets scored within each category. Shared across all four
/// categories; the answer mapping table decides how heavily each pillar
/// draws on each bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subcategory {
    CreativeArts,
    ProblemSolving,
    Leadership,
    HelpingOthers,
    Technology,
    Communication,
    Analysis,
    Innovation,
    Teaching,
    Entrepreneurship,
    Craftsmanship,
}

impl Subcategory {
    pub const COUNT: usize = 11;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::CreativeArts,
            Self::ProblemSolving,
            Self::Leadership,
            Self::HelpingOthers,
            Self::Technology,
            Self::Communication,
            Self::Analysis,
            Self::Innovation,
            Self::Teaching,
            Self::Entrepreneurship,
            Self::Craftsmanship,
        ]
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::CreativeArts => 0,
            Self::ProblemSolving => 1,
            Self::Leadership => 2,
            Self::HelpingOthers => 3,
            Self::Technology => 4,
            Self::Communication => 5,
            Self::Analysis => 6,
            Self::Innovation => 7,
            Self::Teaching => 8,
            Self::Entrepreneurship => 9,
            Self::Craftsmanship => 10,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CreativeArts => "Creative Arts",
            Self::ProblemSolving => "Problem Solving",
            Self::Leadership => "Leadership",
            Self::HelpingOthers => "Helping Others",
            Self::Technology => "Technology",
            Self::Communication => "Communication",
            Self::Analysis => "Analysis",
            Self::Innovation => "Innovation",
            Self::Teaching => "Teaching",
            Self::Entrepreneurship => "Entrepreneurship",
            Self::Craftsmanship => "Craftsmanship",
        }
    }
}

/// Purchased access level for a test session. Free/basic access is the
/// absence of a tier (`Option::None`); the engine consumes the tier but
/// never computes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PremiumTier {
    Roadmap,
    Personality,
    Blueprint,
}

impl PremiumTier {
    /// Lenient parse used at the service edge. Unrecognized values mean
    /// free access rather than an error.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "roadmap" => Some(Self::Roadmap),
            "personality" => Some(Self::Personality),
            "blueprint" => Some(Self::Blueprint),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Roadmap => "Career Roadmap",
            Self::Personality => "Personality Deep Dive",
            Self::Blueprint => "Success Blueprint",
        }
    }
}

/// Content language for the generated narrative. Unknown tags fall back
/// to English so generation never blocks on localization gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    En,
    Es,
}

impl Language {
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or_default() {
            "es" => Self::Es,
            _ => Self::En,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}

/// A respondent's raw selections: question id to 1-based option ordinal.
/// May be incomplete or reference unknown question ids; such entries are
/// skipped during mapping, never rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<u16, u8>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection, replacing any earlier choice for the question.
    pub fn record(&mut self, question_id: u16, option_ordinal: u8) {
        self.answers.insert(question_id, option_ordinal);
    }

    pub fn entries(&self) -> impl Iterator<Item = (u16, u8)> + '_ {
        self.answers.iter().map(|(id, ordinal)| (*id, *ordinal))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<(u16, u8)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u16, u8)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
