//! Content catalog for KPA
//!
//! Holds the pronunciation sets (words, sentences, paragraph) and speaking
//! sets (questions per speaking grade) as one immutable, validated
//! configuration object, and composes a participant's tasks from it through
//! the deterministic assigner in `kpa-assign`.

mod catalog;
mod error;
pub mod models;
mod speaking;

pub use catalog::Catalog;
pub use error::{CatalogError, PoolKind};
pub use models::{
    PronSet, ReadingTask, RecordingType, SpeakItem, SpeakSet, SpeakingQuestion, TaskMeta,
};
pub use speaking::{SpeakingTest, tiers_for_level};
