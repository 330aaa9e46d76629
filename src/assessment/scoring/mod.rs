mod classify;
mod matrix;
mod strengths;

pub use classify::{classify, Classification};
pub use matrix::{CategoryTotals, ScoreMatrix, SubcategoryScore};
pub use strengths::{build_recommendations, strength_phrase, top_strengths, Recommendations};
