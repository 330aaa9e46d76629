//! Assessment scoring and tiered content generation.
//!
//! The pipeline runs Answer Mapper -> Score Aggregator -> Type Classifier
//! -> Narrative Generator -> Feature Access Gate. Every stage is a pure
//! function over explicit inputs plus immutable static tables; nothing is
//! cached or mutated across requests, so one engine instance can serve
//! concurrent callers.

pub mod access;
pub mod domain;
mod engine;
pub mod intake;
pub mod locale;
pub mod mapping;
pub mod narrative;
mod report;
pub mod scoring;

pub use access::{apply_access, FeatureAccess};
pub use engine::{AssessmentEngine, EngineConfig};
pub use intake::{AnswerCsvImporter, AnswerImportError};
pub use report::{matrix_view, AssessmentResult, CategoryScoresView, SubcategoryScoreEntry};
