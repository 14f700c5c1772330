//! Speaking test composition.
//!
//! The participant's pronunciation level decides which three speaking grades
//! they answer; the assigned speaking set supplies one question per grade.

use kpa_assign::{SubjectId, assign_in_set};
use kpa_scoring::Grade;
use serde::Serialize;

use crate::{
    catalog::Catalog,
    error::{CatalogError, PoolKind},
    models::{SpeakSet, SpeakingQuestion},
};

/// Speaking grades answered at a pronunciation level.
///
/// * low → 1, 2, 3
/// * mid → 3, 4, 5
/// * high → 4, 5, 6
pub const fn tiers_for_level(level: Grade) -> [u8; 3] {
    match level {
        Grade::Low => [1, 2, 3],
        Grade::Mid => [3, 4, 5],
        Grade::High => [4, 5, 6],
    }
}

/// Questions chosen for one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeakingTest {
    /// Set the questions come from
    pub set_id: String,
    /// Display name of the set
    pub set_name: String,
    /// Pronunciation level the grades were derived from
    pub level: Grade,
    /// One question per grade, in grade order
    pub questions: Vec<SpeakingQuestion>,
}

impl Catalog {
    /// Compose the speaking test of a participant.
    ///
    /// # Arguments
    ///
    /// * `level` - The participant's pronunciation level
    /// * `subject` - Participant id; picks the set and the question per grade
    /// * `set_id` - Forces a specific speaking set
    ///
    /// The set is the forced one if given, otherwise the one assigned to
    /// `subject`, otherwise the default set. Questions are seeded with the
    /// subject id, or with `"{set_id}-seed"` when there is no subject.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownSet`] when `set_id` is not in the catalog, and
    /// [`CatalogError::Assign`] when the set lacks one of the level's grades.
    pub fn speaking_questions(
        &self,
        level: Grade,
        subject: Option<&SubjectId>,
        set_id: Option<&str>,
    ) -> Result<SpeakingTest, CatalogError> {
        let set = match (set_id, subject) {
            (Some(id), _) => self.speaking_set(id).ok_or_else(|| CatalogError::UnknownSet {
                kind: PoolKind::Speaking,
                id: id.to_string(),
            })?,
            (None, Some(subject)) => self.assign_speaking_set(subject),
            (None, None) => self.default_speaking_set(),
        };

        let seed = match subject {
            Some(subject) => subject.clone(),
            None => SubjectId::new(format!("{}-seed", set.id)),
        };

        let questions = tiers_for_level(level)
            .into_iter()
            .map(|grade| self.question_for(set, &seed, grade))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            set_id = %set.id,
            level = %level,
            questions = ?questions.iter().map(|q| q.item.id.as_str()).collect::<Vec<_>>(),
            "speaking questions selected"
        );

        Ok(SpeakingTest {
            set_id: set.id.clone(),
            set_name: set.name.clone(),
            level,
            questions,
        })
    }

    fn question_for(
        &self,
        set: &SpeakSet,
        seed: &SubjectId,
        grade: u8,
    ) -> Result<SpeakingQuestion, CatalogError> {
        let item = assign_in_set(seed, set, &grade)?;
        // Validated at construction for every grade a set defines
        let meta = self
            .task_meta(grade)
            .ok_or(CatalogError::MissingTaskMeta(grade))?;

        Ok(SpeakingQuestion {
            set_id: set.id.clone(),
            set_name: set.name.clone(),
            grade,
            task_type: meta.task_type.clone(),
            prep_sec: meta.prep_sec,
            answer_sec: meta.answer_sec,
            item: item.clone(),
        })
    }
}
